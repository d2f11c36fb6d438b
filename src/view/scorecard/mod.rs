pub mod card;
pub mod course;
pub mod current;
pub mod header;
pub mod utils;

pub use card::*;
pub use course::*;
pub use current::*;
pub use header::*;
pub use utils::*;

use maud::{Markup, html};

use crate::model::Tab;
use crate::mvu::scorecard::ScorecardModel;

/// Everything inside `#scorecard`: header, tabs and the active tab's content.
#[must_use]
pub fn render_scorecard_app(model: &ScorecardModel) -> Markup {
    html! {
        (render_header(model))
        div class="tab-content" data-active-tab=(model.active_tab.as_str()) {
            @match model.active_tab {
                Tab::Course => { (render_course_tab(model)) }
                Tab::Scorecard => { (render_scorecard_tab(model)) }
                Tab::Current => { (render_current_tab(model)) }
            }
        }
    }
}
