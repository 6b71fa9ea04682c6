//! Sentiment chart module.
//!
//! This module provides:
//! - [`Projection`] - Mapping from layout pixels to terminal cells
//! - [`ChartWidget`] - Framed line chart with markers and axis labels
//! - [`EventBox`] - Collapsed avatar box / expanded detail box
//! - [`place_boxes`] - Box geometry shared by rendering and hit testing

mod event_box;
mod projection;
mod widget;

pub use event_box::{
    expanded_body, hit_test, place_boxes, BodyLine, EventBox, PlacedBox, COLLAPSED_HEIGHT,
    COLLAPSED_WIDTH, EXPANDED_WIDTH, INCONSISTENT_MESSAGE,
};
pub use projection::Projection;
pub use widget::{plot_area, ChartWidget, Y_GUTTER};
