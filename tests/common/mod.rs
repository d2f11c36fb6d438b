#![allow(dead_code)]

use loop_golf::ScorecardModel;
use loop_golf::model::{HoleNumber, LoopNumber};
use loop_golf::mvu::{run_scorecard, scorecard::Msg};

/// Hole literal for tests; panics outside 1..=9.
pub fn hole(n: i64) -> HoleNumber {
    HoleNumber::new(n).expect("test hole number in range")
}

/// Scores every hole of `loop_number` with `strokes` through the controller.
pub fn score_loop(model: &mut ScorecardModel, loop_number: LoopNumber, strokes: u8) {
    for h in HoleNumber::all() {
        run_scorecard(model, Msg::SetStrokes(loop_number, h, strokes))
            .expect("setting strokes in range is accepted");
    }
}
