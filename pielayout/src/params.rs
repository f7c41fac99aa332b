// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout parameters shared by every slice of a series.
//!
//! Angles are in degrees with `0` at 12 o'clock, increasing clockwise. The defaults draw
//! a full pie filling the largest circle that fits the drawing area.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::fmt;

use kurbo::{Point, Rect};

use crate::arc::ArcDescriptor;
use crate::error::PieError;
use crate::format::format_value;
use crate::length::Length;
use crate::sort::SortOrder;

/// Produces label text for an arc, used by [`ArcLabel::Custom`].
pub type ArcLabelFn = dyn Fn(&ArcDescriptor) -> String + Send + Sync;

/// What text to place inside each arc.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ArcLabel {
    /// The resolved formatted value.
    FormattedValue,
    /// The item label (no text when the item has none).
    Label,
    /// The raw value, formatted by default rules.
    Value,
    /// Caller-supplied text.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Arc<ArcLabelFn>),
}

impl ArcLabel {
    /// Wraps a label closure.
    pub fn custom(label: impl Fn(&ArcDescriptor) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(label))
    }

    /// Computes the label text for `arc`.
    pub fn text(&self, arc: &ArcDescriptor) -> Option<String> {
        match self {
            Self::FormattedValue => Some(arc.formatted_value.clone()),
            Self::Label => arc.label.clone(),
            Self::Value => Some(format_value(arc.value)),
            Self::Custom(label) => Some(label(arc)),
        }
    }
}

impl fmt::Debug for ArcLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormattedValue => f.write_str("FormattedValue"),
            Self::Label => f.write_str("Label"),
            Self::Value => f.write_str("Value"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for ArcLabel {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::FormattedValue, Self::FormattedValue)
            | (Self::Label, Self::Label)
            | (Self::Value, Self::Value) => true,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Layout parameters of a pie series.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutParams {
    /// Radius where arcs begin (`0` for a pie, positive for a donut).
    pub inner_radius: Length,
    /// Radius where arcs end. `100%` is the largest radius that fits the drawing area.
    pub outer_radius: Length,
    /// Radius of the label anchor; the midpoint of inner and outer radius when unset.
    pub arc_label_radius: Option<Length>,
    /// Rounding radius applied to arc corners, in drawing-area units.
    pub corner_radius: f64,
    /// Angle of the start of the first arc, in degrees.
    pub start_angle: f64,
    /// Angle of the end of the last arc, in degrees.
    pub end_angle: f64,
    /// Gap between two adjacent arcs, in degrees.
    pub padding_angle: f64,
    /// Layout order of the arcs.
    #[cfg_attr(feature = "serde", serde(rename = "sortingValues"))]
    pub sort_order: SortOrder,
    /// Horizontal center; percentages refer to the drawing-area width.
    pub cx: Length,
    /// Vertical center; percentages refer to the drawing-area height.
    pub cy: Length,
    /// Text placed inside each arc, if any.
    pub arc_label: Option<ArcLabel>,
    /// Arcs spanning fewer degrees than this get no label text.
    pub arc_label_min_angle: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            inner_radius: Length::ZERO,
            outer_radius: Length::FULL,
            arc_label_radius: None,
            corner_radius: 0.0,
            start_angle: 0.0,
            end_angle: 360.0,
            padding_angle: 0.0,
            sort_order: SortOrder::None,
            cx: Length::HALF,
            cy: Length::HALF,
            arc_label: None,
            arc_label_min_angle: 0.0,
        }
    }
}

impl LayoutParams {
    /// Sets the inner radius.
    pub fn with_inner_radius(mut self, radius: impl Into<Length>) -> Self {
        self.inner_radius = radius.into();
        self
    }

    /// Sets the outer radius.
    pub fn with_outer_radius(mut self, radius: impl Into<Length>) -> Self {
        self.outer_radius = radius.into();
        self
    }

    /// Sets the label anchor radius.
    pub fn with_arc_label_radius(mut self, radius: impl Into<Length>) -> Self {
        self.arc_label_radius = Some(radius.into());
        self
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the start and end angles, in degrees.
    pub fn with_angles(mut self, start: f64, end: f64) -> Self {
        self.start_angle = start;
        self.end_angle = end;
        self
    }

    /// Sets the padding between adjacent arcs, in degrees.
    pub fn with_padding_angle(mut self, padding: f64) -> Self {
        self.padding_angle = padding;
        self
    }

    /// Sets the layout order.
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Sets the center.
    pub fn with_center(mut self, cx: impl Into<Length>, cy: impl Into<Length>) -> Self {
        self.cx = cx.into();
        self.cy = cy.into();
        self
    }

    /// Sets the arc label and the minimum span (degrees) an arc needs to show it.
    pub fn with_arc_label(mut self, label: ArcLabel, min_angle: f64) -> Self {
        self.arc_label = Some(label);
        self.arc_label_min_angle = min_angle;
        self
    }

    /// The largest radius that fits `area`: half its smaller side.
    pub fn max_radius(area: Rect) -> f64 {
        (area.width().min(area.height()) / 2.0).max(0.0)
    }

    /// Resolves the pie center inside `area`.
    pub fn center(&self, area: Rect) -> Point {
        Point::new(
            area.x0 + self.cx.resolve(area.width()),
            area.y0 + self.cy.resolve(area.height()),
        )
    }

    /// Sets a single parameter from its configuration name and a string value.
    ///
    /// Names follow the serialized form (`innerRadius`, `paddingAngle`, `sortingValues`,
    /// ...). Length settings accept a bare number (pixels), `"12px"` or `"50%"`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), PieError> {
        match name {
            "innerRadius" => self.inner_radius = parse_length("innerRadius", value)?,
            "outerRadius" => self.outer_radius = parse_length("outerRadius", value)?,
            "arcLabelRadius" => {
                self.arc_label_radius = Some(parse_length("arcLabelRadius", value)?);
            }
            "cx" => self.cx = parse_length("cx", value)?,
            "cy" => self.cy = parse_length("cy", value)?,
            "cornerRadius" => self.corner_radius = parse_number("cornerRadius", value)?,
            "startAngle" => self.start_angle = parse_number("startAngle", value)?,
            "endAngle" => self.end_angle = parse_number("endAngle", value)?,
            "paddingAngle" => self.padding_angle = parse_number("paddingAngle", value)?,
            "arcLabelMinAngle" => {
                self.arc_label_min_angle = parse_number("arcLabelMinAngle", value)?;
            }
            "sortingValues" => {
                self.sort_order = match value.trim() {
                    "none" => SortOrder::None,
                    "asc" => SortOrder::Ascending,
                    "desc" => SortOrder::Descending,
                    other => {
                        return Err(PieError::InvalidChoice {
                            field: "sortingValues",
                            value: other.to_string(),
                            expected: "`none`, `asc`, `desc`",
                        });
                    }
                };
            }
            "arcLabel" => {
                self.arc_label = match value.trim() {
                    "none" => None,
                    "formattedValue" => Some(ArcLabel::FormattedValue),
                    "label" => Some(ArcLabel::Label),
                    "value" => Some(ArcLabel::Value),
                    other => {
                        return Err(PieError::InvalidChoice {
                            field: "arcLabel",
                            value: other.to_string(),
                            expected: "`none`, `formattedValue`, `label`, `value`",
                        });
                    }
                };
            }
            other => return Err(PieError::UnknownSetting(other.to_string())),
        }
        Ok(())
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, PieError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PieError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_length(field: &'static str, value: &str) -> Result<Length, PieError> {
    if let Ok(px) = parse_number(field, value) {
        return Ok(Length::Px(px));
    }
    value
        .parse()
        .map_err(|source| PieError::InvalidLength { field, source })
}
