//! Widgets around the chart.

mod footer;

pub use footer::{Footer, KeyHint};
