use loop_golf::ScorecardError;
use loop_golf::model::{LoopNumber, ScoreStore};
use loop_golf::score::{
    LoopSummary, RoundSummary, ScoreDisplay, format_relative, holes_completed, label, par_total,
    relative_to_par, round_par, round_total, total,
};

mod common;
use common::hole;

#[test]
fn test_fresh_loop_totals() {
    let store = ScoreStore::new();
    let loop1 = store.loop_scores(LoopNumber::One);
    assert_eq!(total(loop1), 0);
    assert_eq!(par_total(loop1), 27);
    assert_eq!(holes_completed(loop1), 0);
    assert_eq!(relative_to_par(loop1), -27);
    assert_eq!(round_total(&store), 0);
    assert_eq!(round_par(&store), 54);
}

#[test]
fn test_labels_relative_to_par_three() -> Result<(), ScorecardError> {
    let mut store = ScoreStore::new();
    let cases = [
        (1, "Eagle"),
        (2, "Birdie"),
        (3, "Par"),
        (4, "Bogey"),
        (5, "+2"),
        (10, "+7"),
    ];
    for (strokes, expected) in cases {
        store.update_score(LoopNumber::One, hole(1), strokes)?;
        let disp = label(store.hole_score(LoopNumber::One, hole(1)));
        assert_eq!(disp.map(|d| d.to_string()).as_deref(), Some(expected));
    }

    store.update_score(LoopNumber::One, hole(1), 0)?;
    assert_eq!(label(store.hole_score(LoopNumber::One, hole(1))), None);
    assert_eq!(ScoreDisplay::from_diff(2), ScoreDisplay::Over(2));
    Ok(())
}

#[test]
fn test_partial_loop_counts_only_completed_holes() -> Result<(), ScorecardError> {
    let mut store = ScoreStore::new();
    store.update_score(LoopNumber::One, hole(1), 2)?;
    store.update_score(LoopNumber::One, hole(2), 5)?;
    store.update_score(LoopNumber::Two, hole(9), 4)?;

    let summary = LoopSummary::of(store.loop_scores(LoopNumber::One));
    assert_eq!(summary.total, 7);
    assert_eq!(summary.par, 27);
    assert_eq!(summary.holes_completed, 2);
    assert_eq!(summary.relative_to_par, -20);
    assert!(!summary.complete);

    let round = RoundSummary::of(&store);
    assert_eq!(round.total, 11);
    assert_eq!(round.par, 54);
    assert_eq!(round.loops[1].total, 4);
    Ok(())
}

#[test]
fn test_full_loop_at_par_totals_twenty_seven() -> Result<(), ScorecardError> {
    let mut store = ScoreStore::new();
    for n in 1..=9 {
        store.update_score(LoopNumber::One, hole(n), 3)?;
    }
    let loop1 = store.loop_scores(LoopNumber::One);
    assert_eq!(total(loop1), 27);
    assert_eq!(relative_to_par(loop1), 0);
    assert_eq!(format_relative(relative_to_par(loop1)), "0");
    assert_eq!(round_total(&store), 27);
    assert!(LoopSummary::of(loop1).complete);
    Ok(())
}

#[test]
fn test_summary_serializes_labels_as_text() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ScoreStore::new();
    store.update_score(LoopNumber::Two, hole(4), 6)?;
    let json = serde_json::to_value(RoundSummary::of(&store))?;
    assert_eq!(json["loops"][1]["loop"], 2);
    assert_eq!(json["loops"][1]["total"], 6);
    assert_eq!(json["par"], 54);
    assert_eq!(
        serde_json::to_value(label(store.hole_score(LoopNumber::Two, hole(4))))?,
        "+3"
    );
    Ok(())
}
