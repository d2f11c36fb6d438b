use maud::{Markup, html};

use crate::model::HoleScore;
use crate::score::{ScoreDisplay, label};

/// Element every action response is swapped into.
pub const TARGET: &str = "#scorecard";

/// Button text for the stroke counters, shared by every tab.
pub const DEC_TEXT: &str = "-";
pub const INC_TEXT: &str = "+";

/// Relative url for an action request, e.g. `scorecard/action?action=inc&loop=1&hole=3`.
#[must_use]
pub fn action_url(action: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("scorecard/action?action={action}");
    for (key, value) in params {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }
    url
}

#[must_use]
pub fn action_button(text: &str, url: &str, class: &str, disabled: bool) -> Markup {
    html! {
        button class=(class) hx-post=(url) hx-target=(TARGET) hx-swap="innerHTML" disabled[disabled] {
            (text)
        }
    }
}

fn shape(disp: ScoreDisplay) -> &'static str {
    match disp {
        ScoreDisplay::Eagle => "◆",
        ScoreDisplay::Birdie | ScoreDisplay::Par => "●",
        ScoreDisplay::Bogey | ScoreDisplay::Over(_) => "▲",
    }
}

/// Strokes with the label shape, coloured by label. Empty for unscored holes.
#[must_use]
pub fn strokes_badge(score: &HoleScore) -> Markup {
    html! {
        @if let Some(disp) = label(score) {
            span class=(format!("badge {}", disp.css_class())) { (shape(disp)) " " (score.strokes()) }
        }
    }
}

#[must_use]
pub fn label_badge(score: &HoleScore) -> Markup {
    html! {
        @if let Some(disp) = label(score) {
            span class=(format!("badge small {}", disp.css_class())) { (disp.to_string()) }
        }
    }
}

/// Strokes as shown in a counter: the number once scored, `-` before.
#[must_use]
pub fn strokes_or_dash(score: &HoleScore) -> String {
    if score.strokes() > 0 {
        score.strokes().to_string()
    } else {
        "-".to_string()
    }
}
