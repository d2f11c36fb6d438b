use maud::{Markup, html};

use crate::model::{COURSE_INFO, MAX_STROKES, MIN_STROKES, hole_definition};
use crate::mvu::scorecard::ScorecardModel;
use crate::view::scorecard::utils::{DEC_TEXT, INC_TEXT, action_button, action_url};

pub fn render_current_tab(model: &ScorecardModel) -> Markup {
    let def = hole_definition(model.current_hole);
    let score = model.current_score();
    let params = [
        ("loop", model.current_loop.to_string()),
        ("hole", model.current_hole.to_string()),
    ];

    html! {
        section class="card" id="current" {
            h2 { "Hole " (model.current_hole.get()) " • Par " (def.par) }
            p class="muted" { (def.yardage) " meters • Loop " (model.current_loop.get()) }

            div class="two-col" {
                div {
                    h3 { "Current Score" }
                    div class="counter large" {
                        (action_button(DEC_TEXT, &action_url("dec", &params), "button outline dec", score.strokes() <= MIN_STROKES))
                        div class="center" {
                            div class="strokes large" { (score.strokes()) }
                            div class="muted small" { "strokes" }
                        }
                        (action_button(INC_TEXT, &action_url("inc", &params), "button outline inc", score.strokes() >= MAX_STROKES))
                    }
                }
                div {
                    h3 { "Hole Info" }
                    dl class="hole-info" {
                        dt { "Distance:" } dd { (def.yardage) "m" }
                        dt { "Pin Position:" } dd { (COURSE_INFO.pin_position) }
                        dt { "Wind:" } dd { (COURSE_INFO.wind) }
                    }
                }
            }

            div class="row actions" {
                (action_button("Scan QR Code", &action_url("scan", &[("hole", model.current_hole.to_string())]), "button fairway scan-qr", false))
                (action_button("Complete Hole", &action_url("complete", &[]), "button green complete", score.strokes() == 0))
            }
        }
    }
}
