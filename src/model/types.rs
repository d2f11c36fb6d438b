use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScorecardError;

pub const HOLE_COUNT: usize = 9;
pub const MIN_STROKES: u8 = 1;
pub const MAX_STROKES: u8 = 10;

/// A hole on the course, always in `1..=9`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "u8")]
pub struct HoleNumber(u8);

impl HoleNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(HOLE_COUNT as u8);

    /// # Errors
    ///
    /// Returns `InvalidHoleNumber` when `n` is outside `1..=9`.
    pub fn new(n: i64) -> Result<Self, ScorecardError> {
        match u8::try_from(n) {
            Ok(v) if (1..=Self::LAST.0).contains(&v) => Ok(Self(v)),
            _ => Err(ScorecardError::InvalidHoleNumber(n)),
        }
    }

    /// Inverse of [`HoleNumber::index`]; `idx` must be below `HOLE_COUNT`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Self(idx as u8 + 1)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in the per-loop score array.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// The hole after this one, wrapping from 9 back to 1.
    #[must_use]
    pub fn next_wrapping(self) -> Self {
        if self < Self::LAST {
            Self(self.0 + 1)
        } else {
            Self::FIRST
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (Self::FIRST.0..=Self::LAST.0).map(Self)
    }
}

impl TryFrom<i64> for HoleNumber {
    type Error = ScorecardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HoleNumber> for u8 {
    fn from(value: HoleNumber) -> Self {
        value.0
    }
}

impl fmt::Display for HoleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "i64", into = "u8")]
pub enum LoopNumber {
    One,
    Two,
}

impl LoopNumber {
    /// # Errors
    ///
    /// Returns `InvalidLoopNumber` for anything other than 1 or 2.
    pub fn new(n: i64) -> Result<Self, ScorecardError> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(ScorecardError::InvalidLoopNumber(other)),
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.get() - 1)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl TryFrom<i64> for LoopNumber {
    type Error = ScorecardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LoopNumber> for u8 {
    fn from(value: LoopNumber) -> Self {
        value.get()
    }
}

impl fmt::Display for LoopNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The three mutually exclusive views.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Course,
    Scorecard,
    Current,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Course, Tab::Scorecard, Tab::Current];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Course => "course",
            Tab::Scorecard => "scorecard",
            Tab::Current => "current",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tab::Course => "Course",
            Tab::Scorecard => "Scorecard",
            Tab::Current => "Current Hole",
        }
    }
}

impl FromStr for Tab {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "course" => Ok(Tab::Course),
            "scorecard" => Ok(Tab::Scorecard),
            "current" => Ok(Tab::Current),
            other => Err(ScorecardError::UnknownTab(other.to_string())),
        }
    }
}
