use maud::{Markup, html};

use crate::model::{COURSE_INFO, Tab};
use crate::mvu::scorecard::ScorecardModel;
use crate::view::scorecard::utils::{TARGET, action_url};

pub fn render_header(model: &ScorecardModel) -> Markup {
    html! {
        div class="header" {
            div {
                h1 { (COURSE_INFO.name) }
                p class="muted" {
                    (COURSE_INFO.description) " • Loop " (model.current_loop.get()) " of 2"
                }
            }
            span class="badge outline large" { "Hole " (model.current_hole.get()) }
        }

        div class="quick-stats" {
            (stat("Pace", COURSE_INFO.pace))
            (stat("Group", COURSE_INFO.group))
            (stat("GPS", COURSE_INFO.gps_accuracy))
            (stat("Pin", COURSE_INFO.pin_short))
        }

        @if let Some(e) = &model.error {
            p class="notice" role="status" { (e.to_string()) }
        }

        nav class="tabs" {
            @for tab in Tab::ALL {
                @let class = if tab == model.active_tab { "tab selected" } else { "tab" };
                button class=(class) data-tab=(tab.as_str())
                    hx-post=(action_url("tab", &[("tab", tab.as_str().to_string())]))
                    hx-target=(TARGET) hx-swap="innerHTML" {
                    (tab.title())
                }
            }
        }
    }
}

fn stat(name: &str, value: &str) -> Markup {
    html! {
        div class="card stat" {
            div class="muted small" { (name) }
            div class="strong" { (value) }
        }
    }
}
