use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the path is not a readable directory
pub fn check_readable_dir(dir: &str) -> Result<String, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() || fs::read_dir(&path).is_err() {
        return Err(format!("The static directory '{dir}' is not readable."));
    }
    Ok(dir.to_string())
}
