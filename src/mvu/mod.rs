pub mod runtime;
pub mod scorecard;

pub use runtime::run_scorecard;
