use std::collections::HashMap;
use std::hash::BuildHasher;

use super::{Msg, ScorecardModel};
use crate::error::ScorecardError;
use crate::model::{HoleNumber, LoopNumber, MAX_STROKES, Tab};

/// Parse the query params of an action request into a message.
///
/// `hole` and `loop` default to the session's current hole and loop for the stroke actions;
/// `select` and `scan` need an explicit hole.
///
/// # Errors
///
/// Returns the matching `ScorecardError` for a missing action, an unknown action, or a
/// hole/loop/tab/strokes param that is missing or out of range.
pub fn decode_action<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    model: &ScorecardModel,
) -> Result<Msg, ScorecardError> {
    let action = query
        .get("action")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or(ScorecardError::MissingParam("action"))?;

    let hole_or_current = || -> Result<HoleNumber, ScorecardError> {
        match int_param(query, "hole")? {
            Some(n) => HoleNumber::new(n),
            None => Ok(model.current_hole),
        }
    };
    let loop_or_current = || -> Result<LoopNumber, ScorecardError> {
        match int_param(query, "loop")? {
            Some(n) => LoopNumber::new(n),
            None => Ok(model.current_loop),
        }
    };
    let required_hole = || -> Result<HoleNumber, ScorecardError> {
        int_param(query, "hole")?
            .ok_or(ScorecardError::MissingParam("hole"))
            .and_then(HoleNumber::new)
    };

    match action {
        "select" => Ok(Msg::SelectHole(required_hole()?)),
        "scan" => Ok(Msg::ScanQr(required_hole()?)),
        "inc" => Ok(Msg::IncrementStrokes(loop_or_current()?, hole_or_current()?)),
        "dec" => Ok(Msg::DecrementStrokes(loop_or_current()?, hole_or_current()?)),
        "set" => {
            let strokes = int_param(query, "strokes")?
                .ok_or(ScorecardError::MissingParam("strokes"))?;
            let strokes = u8::try_from(strokes)
                .ok()
                .filter(|s| *s <= MAX_STROKES)
                .ok_or(ScorecardError::InvalidStrokeCount(strokes))?;
            Ok(Msg::SetStrokes(loop_or_current()?, hole_or_current()?, strokes))
        }
        "complete" => Ok(Msg::CompleteHole),
        "switch" => Ok(Msg::SwitchLoop),
        "start-loop-2" => Ok(Msg::StartLoopTwo),
        "tab" => {
            let tab: Tab = query
                .get("tab")
                .ok_or(ScorecardError::MissingParam("tab"))?
                .parse()?;
            Ok(Msg::SelectTab(tab))
        }
        other => Err(ScorecardError::UnknownAction(other.to_string())),
    }
}

/// `json=1` or `json=true` asks for the JSON snapshot instead of markup.
pub fn want_json<S: BuildHasher>(query: &HashMap<String, String, S>) -> bool {
    match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}

fn int_param<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    name: &'static str,
) -> Result<Option<i64>, ScorecardError> {
    match query.get(name).map(|s| s.trim()) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ScorecardError::NotANumber {
                name,
                value: raw.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn stroke_actions_default_to_current_hole_and_loop() {
        let mut model = ScorecardModel::default();
        model.current_hole = HoleNumber::new(4).unwrap();
        model.current_loop = LoopNumber::Two;

        let msg = decode_action(&query(&[("action", "inc")]), &model).unwrap();
        assert_eq!(msg, Msg::IncrementStrokes(LoopNumber::Two, HoleNumber::new(4).unwrap()));

        let msg = decode_action(&query(&[("action", "dec"), ("loop", "1"), ("hole", "7")]), &model)
            .unwrap();
        assert_eq!(msg, Msg::DecrementStrokes(LoopNumber::One, HoleNumber::new(7).unwrap()));
    }

    #[test]
    fn select_requires_a_hole_in_range() {
        let model = ScorecardModel::default();
        assert_eq!(
            decode_action(&query(&[("action", "select")]), &model),
            Err(ScorecardError::MissingParam("hole"))
        );
        assert_eq!(
            decode_action(&query(&[("action", "select"), ("hole", "12")]), &model),
            Err(ScorecardError::InvalidHoleNumber(12))
        );
        assert_eq!(
            decode_action(&query(&[("action", "scan"), ("hole", "abc")]), &model),
            Err(ScorecardError::NotANumber {
                name: "hole",
                value: "abc".into()
            })
        );
    }

    #[test]
    fn set_rejects_strokes_above_ten() {
        let model = ScorecardModel::default();
        assert_eq!(
            decode_action(&query(&[("action", "set"), ("strokes", "11")]), &model),
            Err(ScorecardError::InvalidStrokeCount(11))
        );
        assert_eq!(
            decode_action(&query(&[("action", "set"), ("strokes", "-1")]), &model),
            Err(ScorecardError::InvalidStrokeCount(-1))
        );
        assert_eq!(
            decode_action(&query(&[("action", "set"), ("strokes", "0")]), &model),
            Ok(Msg::SetStrokes(LoopNumber::One, HoleNumber::FIRST, 0))
        );
    }

    #[test]
    fn unknown_action_and_tab_are_reported() {
        let model = ScorecardModel::default();
        assert_eq!(
            decode_action(&query(&[("action", "mulligan")]), &model),
            Err(ScorecardError::UnknownAction("mulligan".into()))
        );
        assert_eq!(
            decode_action(&query(&[("action", "tab"), ("tab", "stats")]), &model),
            Err(ScorecardError::UnknownTab("stats".into()))
        );
        assert_eq!(
            decode_action(&query(&[]), &model),
            Err(ScorecardError::MissingParam("action"))
        );
    }

    #[test]
    fn json_flag_accepts_numbers_and_bools() {
        assert!(want_json(&query(&[("json", "1")])));
        assert!(want_json(&query(&[("json", "true")])));
        assert!(!want_json(&query(&[("json", "0")])));
        assert!(!want_json(&query(&[("json", "nope")])));
        assert!(!want_json(&query(&[])));
    }
}
