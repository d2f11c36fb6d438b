use serde::Serialize;

use crate::error::ScorecardError;
use crate::model::{
    COURSE_INFO, CourseInfo, HoleNumber, HoleScore, LoopNumber, MAX_STROKES, MIN_STROKES,
    ScoreStore, Tab,
};
use crate::score::{RoundSummary, is_loop_complete};

mod scorecard_decode;
mod scorecard_effects;

pub use scorecard_decode::{decode_action, want_json};
pub use scorecard_effects::run_effect;

/// Session view state plus the score store it drives.
#[derive(Debug, Clone)]
pub struct ScorecardModel {
    pub player_name: String,
    pub current_hole: HoleNumber,
    pub current_loop: LoopNumber,
    pub active_tab: Tab,
    pub store: ScoreStore,
    /// Last rejected intent, cleared by the next accepted one.
    pub error: Option<ScorecardError>,
}

impl Default for ScorecardModel {
    fn default() -> Self {
        Self::new("Player")
    }
}

impl ScorecardModel {
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            current_hole: HoleNumber::FIRST,
            current_loop: LoopNumber::One,
            active_tab: Tab::default(),
            store: ScoreStore::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn current_score(&self) -> &HoleScore {
        self.store.hole_score(self.current_loop, self.current_hole)
    }

    /// Loop 1 is fully scored and the player has not moved on to loop 2 yet.
    #[must_use]
    pub fn show_loop_complete_banner(&self) -> bool {
        self.current_loop == LoopNumber::One
            && is_loop_complete(self.store.loop_scores(LoopNumber::One))
    }

    #[must_use]
    pub fn snapshot(&self) -> ScorecardSnapshot<'_> {
        ScorecardSnapshot {
            course: COURSE_INFO,
            player_name: &self.player_name,
            current_hole: self.current_hole,
            current_loop: self.current_loop,
            active_tab: self.active_tab,
            loop_complete_banner: self.show_loop_complete_banner(),
            error: self.error.as_ref().map(ToString::to_string),
            scores: &self.store,
            summary: RoundSummary::of(&self.store),
        }
    }
}

/// What `?json=1` returns.
#[derive(Serialize, Debug)]
pub struct ScorecardSnapshot<'a> {
    pub course: CourseInfo,
    pub player_name: &'a str,
    pub current_hole: HoleNumber,
    pub current_loop: LoopNumber,
    pub active_tab: Tab,
    pub loop_complete_banner: bool,
    pub error: Option<String>,
    pub scores: &'a ScoreStore,
    pub summary: RoundSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SelectHole(HoleNumber),
    ScanQr(HoleNumber),
    QrScanned(HoleNumber),
    IncrementStrokes(LoopNumber, HoleNumber),
    DecrementStrokes(LoopNumber, HoleNumber),
    SetStrokes(LoopNumber, HoleNumber, u8),
    CompleteHole,
    SwitchLoop,
    StartLoopTwo,
    SelectTab(Tab),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Stand-in for reading the hole marker; resolves to `Msg::QrScanned`.
    ScanHoleMarker(HoleNumber),
    AnnounceLoopComplete(LoopNumber),
    ReportRejection(ScorecardError),
}

pub fn update(model: &mut ScorecardModel, msg: Msg) -> Vec<Effect> {
    match apply(model, msg) {
        Ok(effects) => {
            model.error = None;
            effects
        }
        Err(e) => {
            model.error = Some(e.clone());
            vec![Effect::ReportRejection(e)]
        }
    }
}

fn apply(model: &mut ScorecardModel, msg: Msg) -> Result<Vec<Effect>, ScorecardError> {
    match msg {
        Msg::SelectHole(hole) | Msg::QrScanned(hole) => {
            model.current_hole = hole;
            Ok(vec![])
        }
        Msg::ScanQr(hole) => Ok(vec![Effect::ScanHoleMarker(hole)]),
        Msg::IncrementStrokes(loop_number, hole) => {
            let strokes = model.store.hole_score(loop_number, hole).strokes();
            if strokes >= MAX_STROKES {
                return Err(ScorecardError::InvalidStrokeCount(i64::from(strokes) + 1));
            }
            write_strokes(model, loop_number, hole, strokes + 1)
        }
        Msg::DecrementStrokes(loop_number, hole) => {
            let strokes = model.store.hole_score(loop_number, hole).strokes();
            if strokes <= MIN_STROKES {
                return Err(ScorecardError::InvalidStrokeCount(i64::from(strokes) - 1));
            }
            write_strokes(model, loop_number, hole, strokes - 1)
        }
        Msg::SetStrokes(loop_number, hole, strokes) => {
            write_strokes(model, loop_number, hole, strokes)
        }
        Msg::CompleteHole => {
            let (loop_number, hole) = (model.current_loop, model.current_hole);
            let strokes = model.current_score().strokes();
            if strokes == 0 {
                return Err(ScorecardError::HoleNotScored(hole));
            }
            let effects = write_strokes(model, loop_number, hole, strokes)?;
            model.current_hole = hole.next_wrapping();
            Ok(effects)
        }
        Msg::SwitchLoop | Msg::StartLoopTwo => {
            model.current_loop = model.current_loop.toggled();
            Ok(vec![])
        }
        Msg::SelectTab(tab) => {
            model.active_tab = tab;
            Ok(vec![])
        }
    }
}

fn write_strokes(
    model: &mut ScorecardModel,
    loop_number: LoopNumber,
    hole: HoleNumber,
    strokes: u8,
) -> Result<Vec<Effect>, ScorecardError> {
    let was_complete = is_loop_complete(model.store.loop_scores(loop_number));
    model.store.update_score(loop_number, hole, strokes)?;
    if !was_complete && is_loop_complete(model.store.loop_scores(loop_number)) {
        Ok(vec![Effect::AnnounceLoopComplete(loop_number)])
    } else {
        Ok(vec![])
    }
}
