use tracing::{debug, info};

use super::{Effect, Msg, ScorecardModel};

/// Runs one effect. Returns the follow-up message, if the effect produces one.
pub fn run_effect(effect: Effect, model: &ScorecardModel) -> Option<Msg> {
    match effect {
        Effect::ScanHoleMarker(hole) => {
            info!(
                hole = hole.get(),
                loop_number = model.current_loop.get(),
                "QR scanned for hole {hole}"
            );
            Some(Msg::QrScanned(hole))
        }
        Effect::AnnounceLoopComplete(loop_number) => {
            info!(
                loop_number = loop_number.get(),
                player = %model.player_name,
                "loop {loop_number} complete"
            );
            None
        }
        Effect::ReportRejection(e) => {
            debug!(error = %e, "intent rejected");
            None
        }
    }
}
