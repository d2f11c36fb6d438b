use crate::error::ScorecardError;
use crate::mvu::scorecard::{Msg, ScorecardModel, run_effect, update};

/// Runs the MVU loop for the scorecard: applies `msg` and drains the effects it produces.
///
/// # Errors
///
/// Returns the rejection when the message (or a follow-up) was refused. The model is left
/// exactly as it was before the refused message, apart from `model.error`.
pub fn run_scorecard(model: &mut ScorecardModel, msg: Msg) -> Result<(), ScorecardError> {
    let mut effects = update(model, msg);
    while let Some(effect) = effects.pop() {
        if let Some(next) = run_effect(effect, model) {
            effects.extend(update(model, next));
        }
    }
    match &model.error {
        Some(e) => Err(e.clone()),
        None => Ok(()),
    }
}
