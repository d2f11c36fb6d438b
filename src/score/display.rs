use serde::{Serialize, Serializer};
use std::fmt;

/// Label for a completed hole relative to par.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreDisplay {
    Eagle,
    Birdie,
    Par,
    Bogey,
    /// Two or more over par; carries the difference.
    Over(i32),
}

impl ScoreDisplay {
    /// `diff` is strokes minus par.
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            over => ScoreDisplay::Over(over),
        }
    }

    /// Css class used for badges and hole card markers.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreDisplay::Eagle => "eagle",
            ScoreDisplay::Birdie => "birdie",
            ScoreDisplay::Par => "par",
            ScoreDisplay::Bogey => "bogey",
            ScoreDisplay::Over(_) => "over",
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_diff(value)
    }
}

impl fmt::Display for ScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreDisplay::Eagle => write!(f, "Eagle"),
            ScoreDisplay::Birdie => write!(f, "Birdie"),
            ScoreDisplay::Par => write!(f, "Par"),
            ScoreDisplay::Bogey => write!(f, "Bogey"),
            ScoreDisplay::Over(diff) => write!(f, "+{diff}"),
        }
    }
}

impl Serialize for ScoreDisplay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_diff_to_par() {
        assert_eq!(ScoreDisplay::from_diff(-3).to_string(), "Eagle");
        assert_eq!(ScoreDisplay::from_diff(-2).to_string(), "Eagle");
        assert_eq!(ScoreDisplay::from_diff(-1).to_string(), "Birdie");
        assert_eq!(ScoreDisplay::from_diff(0).to_string(), "Par");
        assert_eq!(ScoreDisplay::from_diff(1).to_string(), "Bogey");
        assert_eq!(ScoreDisplay::from_diff(2).to_string(), "+2");
        assert_eq!(ScoreDisplay::from_diff(7).to_string(), "+7");
    }
}
