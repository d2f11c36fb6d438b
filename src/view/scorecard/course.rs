use maud::{Markup, html};

use crate::model::{COURSE, HoleDefinition, HoleNumber, HoleScore};
use crate::mvu::scorecard::ScorecardModel;
use crate::view::scorecard::utils::{action_button, action_url, strokes_badge};

/// Course overview: one card per hole for the current loop, plus the loop 1 banner.
pub fn render_course_tab(model: &ScorecardModel) -> Markup {
    let scores = model.store.loop_scores(model.current_loop);
    html! {
        section class="card" id="course" {
            h2 { span class="dot green" {} "9-Hole Course Overview" }
            div class="hole-grid" {
                @for (def, score) in COURSE.iter().zip(scores) {
                    (render_hole_card(def, score, score.hole() == model.current_hole))
                }
            }

            @if model.show_loop_complete_banner() {
                div class="banner success" id="loop-complete" {
                    h3 { "Loop 1 Complete!" }
                    p class="muted" { "Ready to start Loop 2?" }
                    (action_button("Start Loop 2", &action_url("start-loop-2", &[]), "button success", false))
                }
            }
        }
    }
}

fn render_hole_card(def: &HoleDefinition, score: &HoleScore, is_current: bool) -> Markup {
    let hole: HoleNumber = score.hole();
    let mut class = String::from("card hole-card");
    if score.completed() {
        class.push_str(" completed");
    }
    if is_current {
        class.push_str(" current");
    }

    html! {
        div class=(class) data-hole=(hole.get()) {
            div class="row" {
                (action_button(&format!("HOLE {hole}"), &action_url("select", &[("hole", hole.to_string())]), "badge outline strong select-hole", false))
                span class="badge secondary" { "PAR " (def.par) }
                (strokes_badge(score))
            }
            div class="row" {
                span class="muted small" { (def.yardage) "m" }
                (action_button("QR", &action_url("scan", &[("hole", hole.to_string())]), "button outline small scan-qr", false))
            }
        }
    }
}
