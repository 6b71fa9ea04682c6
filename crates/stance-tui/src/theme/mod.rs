//! Colors and glyphs for the timeline.
//!
//! Icons and borders share one [`IconMode`], resolved from the config's icon
//! preference and `NO_COLOR`.

mod borders;
mod colors;
mod icons;

pub use borders::BorderSet;
pub use colors::Theme;
pub use icons::{IconMode, IconSet};
