pub mod args;
pub mod error;
pub mod model;
pub mod mvu;
pub mod score;
pub mod controller {
    pub mod scorecard;
}
pub mod view {
    pub mod index;
    pub mod scorecard;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use error::ScorecardError;
pub use mvu::scorecard::{Msg, ScorecardModel};
