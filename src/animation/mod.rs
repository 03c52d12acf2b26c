//! Time-driven effects: foliage sway and cell pulsing

mod easing;
mod pulse;
mod sway;

pub use easing::ease_in_out;
pub use pulse::pulse_opacity;
pub use sway::SwayParams;
