use serde::Serialize;

use super::course::COURSE;
use super::types::{HOLE_COUNT, HoleNumber, LoopNumber, MAX_STROKES};
use crate::error::ScorecardError;

/// Strokes for one hole in one loop. `completed` follows `strokes` and cannot be set on its own.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleScore {
    hole: HoleNumber,
    par: u8,
    strokes: u8,
    completed: bool,
}

impl HoleScore {
    fn unscored(hole: HoleNumber) -> Self {
        Self {
            hole,
            par: COURSE[hole.index()].par,
            strokes: 0,
            completed: false,
        }
    }

    #[must_use]
    pub fn hole(&self) -> HoleNumber {
        self.hole
    }

    #[must_use]
    pub fn par(&self) -> u8 {
        self.par
    }

    #[must_use]
    pub fn strokes(&self) -> u8 {
        self.strokes
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    fn set_strokes(&mut self, strokes: u8) {
        self.strokes = strokes;
        self.completed = strokes > 0;
    }
}

/// One traversal of the course: exactly one score per hole, in hole order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LoopScores {
    #[serde(rename = "loop")]
    number: LoopNumber,
    scores: [HoleScore; HOLE_COUNT],
}

impl LoopScores {
    fn new(number: LoopNumber) -> Self {
        let scores = std::array::from_fn(|idx| HoleScore::unscored(HoleNumber::from_index(idx)));
        Self { number, scores }
    }

    #[must_use]
    pub fn number(&self) -> LoopNumber {
        self.number
    }

    #[must_use]
    pub fn scores(&self) -> &[HoleScore; HOLE_COUNT] {
        &self.scores
    }

    #[must_use]
    pub fn get(&self, hole: HoleNumber) -> &HoleScore {
        &self.scores[hole.index()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HoleScore> {
        self.scores.iter()
    }
}

impl<'a> IntoIterator for &'a LoopScores {
    type Item = &'a HoleScore;
    type IntoIter = std::slice::Iter<'a, HoleScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

/// Both loops of the round. Seeded unscored; only [`ScoreStore::update_score`] mutates it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreStore {
    loops: [LoopScores; 2],
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loops: [LoopScores::new(LoopNumber::One), LoopScores::new(LoopNumber::Two)],
        }
    }

    #[must_use]
    pub fn loop_scores(&self, number: LoopNumber) -> &LoopScores {
        &self.loops[number.index()]
    }

    #[must_use]
    pub fn hole_score(&self, number: LoopNumber, hole: HoleNumber) -> &HoleScore {
        self.loop_scores(number).get(hole)
    }

    /// Sets the stroke count for one hole. `0` clears the hole back to unscored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStrokeCount` when `strokes` is above the maximum; the store is left unchanged.
    pub fn update_score(
        &mut self,
        number: LoopNumber,
        hole: HoleNumber,
        strokes: u8,
    ) -> Result<(), ScorecardError> {
        if strokes > MAX_STROKES {
            return Err(ScorecardError::InvalidStrokeCount(i64::from(strokes)));
        }
        self.loops[number.index()].scores[hole.index()].set_strokes(strokes);
        Ok(())
    }
}
