// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut geometry for chart frontends.
//!
//! This crate turns a series of labeled values plus layout parameters into renderable
//! arcs:
//! - **Layout**: values are ordered, then split proportionally over the sweep between
//!   the start and end angles, with a fixed padding angle between neighbours.
//! - **Radii**: inner, outer and label radii are given in pixels or as percentages of
//!   the largest radius that fits the drawing area.
//! - **Interaction**: externally supplied highlighted/faded slices get their own partial
//!   overrides, merged in a fixed order (base, then state override, then
//!   `additional_radius`).
//!
//! Output arcs keep the index of their input item so renderers and pointer handling can
//! map back to the data. Drawing itself is out of scope; [`ArcDescriptor::path`] gives a
//! kurbo path for renderers that want one.
//!
//! ```
//! use kurbo::Rect;
//! use pielayout::{Interaction, LayoutParams, Palette, PieSeries, ValueItem};
//!
//! let series = PieSeries::new("fruit")
//!     .with_data([ValueItem::new("apples", 3.0), ValueItem::new("pears", 1.0)])
//!     .with_params(LayoutParams::default().with_inner_radius(pielayout::Length::HALF));
//! let arcs = series.resolve(
//!     Rect::new(0.0, 0.0, 200.0, 100.0),
//!     &Interaction::new(),
//!     &Palette::default(),
//! );
//! assert_eq!(arcs.len(), 2);
//! assert_eq!(arcs[0].end_angle, 270.0);
//! assert_eq!(arcs[1].outer_radius, 50.0);
//! ```

#![no_std]

extern crate alloc;

mod arc;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod hit;
mod item;
mod length;
mod palette;
mod params;
mod resolver;
mod series;
mod sort;
mod state;

pub use arc::{ArcDescriptor, kurbo_angle};
pub use error::{LengthError, PieError};
pub use format::format_value;
pub use hit::hit_test;
pub use item::{ItemId, PieItemIdentifier, SeriesId, ValueItem};
pub use length::Length;
pub use palette::{ColorAssigner, Palette, parse_css_color};
pub use params::{ArcLabel, ArcLabelFn, LayoutParams};
pub use resolver::resolve;
pub use series::PieSeries;
pub use sort::{SortOrder, ValueComparator};
pub use state::{
    FadeMode, HighlightMode, HighlightScope, Interaction, ItemState, StateOverride,
    StateOverrides,
};
