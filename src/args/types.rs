use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Two-loop scorecard for a 9-hole par-3 course",
    long_about = None
)]
pub struct Args {
    /// Address to bind the http server to.
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Name shown on the scorecard header.
    #[arg(
        short = 'n',
        long,
        value_name = "PLAYER_NAME",
        default_value = "Player"
    )]
    pub player_name: String,
    /// Directory served under /static (stylesheet).
    #[arg(
        long,
        value_name = "STATIC_DIR",
        default_value = "./static",
        value_parser = crate::args::validation::check_readable_dir
    )]
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub host: String,
    pub port: u16,
    pub player_name: String,
    pub static_dir: String,
}
