pub mod display;
pub mod totals;

pub use display::*;
pub use totals::*;
