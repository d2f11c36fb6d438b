use serde::Serialize;

use crate::model::{HoleScore, LoopNumber, LoopScores, ScoreStore};
use crate::score::display::ScoreDisplay;

/// Sum of strokes over completed holes; unscored holes count as zero, not par.
#[must_use]
pub fn total(scores: &LoopScores) -> u32 {
    scores
        .iter()
        .filter(|s| s.completed())
        .map(|s| u32::from(s.strokes()))
        .sum()
}

/// Sum of par over every hole of the loop, scored or not.
#[must_use]
pub fn par_total(scores: &LoopScores) -> u32 {
    scores.iter().map(|s| u32::from(s.par())).sum()
}

#[must_use]
pub fn holes_completed(scores: &LoopScores) -> usize {
    scores.iter().filter(|s| s.completed()).count()
}

#[must_use]
pub fn is_loop_complete(scores: &LoopScores) -> bool {
    scores.iter().all(HoleScore::completed)
}

/// `total - par_total`. Unscored holes still contribute their par, so a fresh loop reads -27.
#[must_use]
pub fn relative_to_par(scores: &LoopScores) -> i64 {
    i64::from(total(scores)) - i64::from(par_total(scores))
}

#[must_use]
pub fn label(score: &HoleScore) -> Option<ScoreDisplay> {
    score
        .completed()
        .then(|| ScoreDisplay::from_diff(i32::from(score.strokes()) - i32::from(score.par())))
}

#[must_use]
pub fn round_total(store: &ScoreStore) -> u32 {
    total(store.loop_scores(LoopNumber::One)) + total(store.loop_scores(LoopNumber::Two))
}

#[must_use]
pub fn round_par(store: &ScoreStore) -> u32 {
    par_total(store.loop_scores(LoopNumber::One)) + par_total(store.loop_scores(LoopNumber::Two))
}

/// Signed delta as shown on the card: `+2`, `0`, `-4`.
#[must_use]
pub fn format_relative(diff: i64) -> String {
    if diff > 0 {
        format!("+{diff}")
    } else {
        diff.to_string()
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LoopSummary {
    #[serde(rename = "loop")]
    pub number: LoopNumber,
    pub total: u32,
    pub par: u32,
    pub relative_to_par: i64,
    pub holes_completed: usize,
    pub complete: bool,
}

impl LoopSummary {
    #[must_use]
    pub fn of(scores: &LoopScores) -> Self {
        Self {
            number: scores.number(),
            total: total(scores),
            par: par_total(scores),
            relative_to_par: relative_to_par(scores),
            holes_completed: holes_completed(scores),
            complete: is_loop_complete(scores),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub loops: [LoopSummary; 2],
    pub total: u32,
    pub par: u32,
}

impl RoundSummary {
    #[must_use]
    pub fn of(store: &ScoreStore) -> Self {
        Self {
            loops: [
                LoopSummary::of(store.loop_scores(LoopNumber::One)),
                LoopSummary::of(store.loop_scores(LoopNumber::Two)),
            ],
            total: round_total(store),
            par: round_par(store),
        }
    }
}
