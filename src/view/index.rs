use maud::{Markup, html};

use crate::HTMX_PATH;

pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            main class="container" {
                div id="scorecard" hx-get="scorecard" hx-trigger="load" hx-swap="innerHTML" {
                    p class="muted" { "Loading scorecard..." }
                }
            }
        }
    }
}
