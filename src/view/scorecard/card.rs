use maud::{Markup, html};

use crate::model::{HOLE_COUNT, HoleScore, LoopNumber, LoopScores, MAX_STROKES, MIN_STROKES};
use crate::mvu::scorecard::ScorecardModel;
use crate::score::{LoopSummary, format_relative, round_par, round_total, total};
use crate::view::scorecard::utils::{
    DEC_TEXT, INC_TEXT, action_button, action_url, label_badge, strokes_or_dash,
};

/// The player's scorecard: loop switcher, a 3x3 grid for the current loop, and totals.
pub fn render_scorecard_tab(model: &ScorecardModel) -> Markup {
    let store = &model.store;
    html! {
        section class="card" id="scorecard-tab" {
            div class="row" {
                h2 { (model.player_name) "'s Scorecard" }
                span class="badge outline" {
                    "Hole " (model.current_hole.get()) " • Loop " (model.current_loop.get())
                }
            }

            div class="loop-tabs" {
                @for number in [LoopNumber::One, LoopNumber::Two] {
                    @let selected = number == model.current_loop;
                    @let class = if selected { "tab selected" } else { "tab" };
                    (action_button(
                        &format!("Loop {} ({})", number, total(store.loop_scores(number))),
                        &action_url("switch", &[]),
                        class,
                        selected,
                    ))
                }
            }

            (render_loop(store.loop_scores(model.current_loop), model))

            div class="row round-total" {
                span class="muted" { "18-Hole Total" }
                span class="strong" id="round-total" {
                    (round_total(store)) " / " (round_par(store))
                }
            }
        }
    }
}

fn render_loop(scores: &LoopScores, model: &ScorecardModel) -> Markup {
    let summary = LoopSummary::of(scores);
    html! {
        div class="score-grid" data-loop=(scores.number().get()) {
            @for score in scores {
                @let is_current = score.hole() == model.current_hole && scores.number() == model.current_loop;
                (render_score_cell(scores.number(), score, is_current))
            }
        }

        div class="card loop-total" {
            div {
                div class="muted small" { "Total" }
                div class="strong large" { (summary.total) " / " (summary.par) }
            }
            div class="right" {
                div class="muted small" { (summary.holes_completed) " / " (HOLE_COUNT) " holes" }
                div class="strong" { (format_relative(summary.relative_to_par)) }
            }
        }
    }
}

fn render_score_cell(number: LoopNumber, score: &HoleScore, is_current: bool) -> Markup {
    let class = if is_current { "card score-cell current" } else { "card score-cell" };
    let params = [("loop", number.to_string()), ("hole", score.hole().to_string())];
    html! {
        div class=(class) data-hole=(score.hole().get()) {
            div class="small strong" { "Hole " (score.hole().get()) }
            span class="badge outline" { "Par " (score.par()) }
            div class="counter" {
                (action_button(DEC_TEXT, &action_url("dec", &params), "button outline icon dec", score.strokes() <= MIN_STROKES))
                span class="strokes" { (strokes_or_dash(score)) }
                (action_button(INC_TEXT, &action_url("inc", &params), "button outline icon inc", score.strokes() >= MAX_STROKES))
            }
            (label_badge(score))
        }
    }
}
