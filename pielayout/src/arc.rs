// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved arcs and their geometry.
//!
//! Angles on an [`ArcDescriptor`] are in degrees, `0` at 12 o'clock and increasing
//! clockwise. Kurbo measures radians from the positive x axis (clockwise in y-down
//! screen space), so geometry helpers rotate by a quarter turn when converting.

extern crate alloc;

use alloc::string::String;
use core::f64::consts::FRAC_PI_2;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{BezPath, Circle, CircleSegment, Point, Shape, Vec2};
use peniko::Color;

use crate::item::{ItemId, PieItemIdentifier, SeriesId};
use crate::state::ItemState;

/// Converts a pie angle (degrees, clockwise from 12 o'clock) to a kurbo angle.
pub fn kurbo_angle(degrees: f64) -> f64 {
    degrees.to_radians() - FRAC_PI_2
}

/// One resolved slice, ready for rendering and hit-testing.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcDescriptor {
    /// Item identifier.
    pub id: ItemId,
    /// Index of the item in the series input.
    pub index: usize,
    /// Position of the arc in layout order (after sorting).
    pub layout_index: usize,
    /// The item value as given (not clamped).
    pub value: f64,
    /// Item label.
    pub label: Option<String>,
    /// Explicit formatted value, or the default formatting of `value`.
    pub formatted_value: String,
    /// Fill color after overrides.
    pub color: Color,
    /// Interaction state used to pick overrides.
    pub state: ItemState,
    /// Start of the allocated span, in degrees.
    pub start_angle: f64,
    /// End of the allocated span, in degrees.
    pub end_angle: f64,
    /// Padding angle after overrides, in degrees.
    pub pad_angle: f64,
    /// Start of the drawn span (allocated span inset by any extra padding).
    pub padded_start_angle: f64,
    /// End of the drawn span.
    pub padded_end_angle: f64,
    /// Inner radius after overrides.
    pub inner_radius: f64,
    /// Outer radius after overrides.
    pub outer_radius: f64,
    /// Label anchor radius after overrides.
    pub arc_label_radius: f64,
    /// Corner radius after overrides.
    pub corner_radius: f64,
    /// Text to draw inside the arc, if the series asks for labels and the arc is wide
    /// enough.
    pub arc_label: Option<String>,
    /// Pie center in drawing-area coordinates.
    pub center: Point,
}

impl ArcDescriptor {
    /// Allocated angular span in degrees (never negative).
    pub fn span(&self) -> f64 {
        (self.end_angle - self.start_angle).abs()
    }

    /// Drawn angular span in degrees (never negative).
    pub fn padded_span(&self) -> f64 {
        (self.padded_end_angle - self.padded_start_angle).abs()
    }

    /// Middle of the drawn span, in degrees.
    pub fn mid_angle(&self) -> f64 {
        (self.padded_start_angle + self.padded_end_angle) * 0.5
    }

    /// Identifies this arc within `series`.
    pub fn identifier(&self, series: &SeriesId) -> PieItemIdentifier {
        PieItemIdentifier::new(series.clone(), self.index)
    }

    /// The point at `radius` from the center along the pie angle `degrees`.
    pub fn point_at(&self, radius: f64, degrees: f64) -> Point {
        self.center + Vec2::from_angle(kurbo_angle(degrees)) * radius
    }

    /// Anchor point for the arc label: the label radius along the middle of the drawn span.
    pub fn label_anchor(&self) -> Point {
        self.point_at(self.arc_label_radius, self.mid_angle())
    }

    /// The drawn span as a kurbo circle segment.
    pub fn segment(&self) -> CircleSegment {
        let sweep = (self.padded_end_angle - self.padded_start_angle).to_radians();
        Circle::new(self.center, self.outer_radius).segment(
            self.inner_radius,
            kurbo_angle(self.padded_start_angle),
            sweep,
        )
    }

    /// Flattens the drawn span into a path.
    ///
    /// Corner rounding is left to the renderer; `corner_radius` is carried through as-is.
    pub fn path(&self, tolerance: f64) -> BezPath {
        self.segment().path_elements(tolerance).collect()
    }

    /// Whether `point` lies inside the drawn arc.
    ///
    /// Arcs with an empty drawn span never contain anything.
    pub fn contains(&self, point: Point) -> bool {
        let span = self.padded_span();
        if span <= 0.0 {
            return false;
        }
        let offset = point - self.center;
        let distance = offset.hypot();
        if distance < self.inner_radius || distance > self.outer_radius {
            return false;
        }
        if span >= 360.0 {
            return true;
        }
        let lo = self.padded_start_angle.min(self.padded_end_angle);
        let angle = (offset.atan2() + FRAC_PI_2).to_degrees();
        normalize_degrees(angle - lo) <= span
    }
}

/// Wraps `degrees` into `[0, 360)`.
fn normalize_degrees(degrees: f64) -> f64 {
    degrees - 360.0 * (degrees / 360.0).floor()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    fn quarter(start: f64, end: f64) -> ArcDescriptor {
        ArcDescriptor {
            id: ItemId::Num(0),
            index: 0,
            layout_index: 0,
            value: 1.0,
            label: None,
            formatted_value: "1".into(),
            color: css::TOMATO,
            state: ItemState::Normal,
            start_angle: start,
            end_angle: end,
            pad_angle: 0.0,
            padded_start_angle: start,
            padded_end_angle: end,
            inner_radius: 10.0,
            outer_radius: 20.0,
            arc_label_radius: 15.0,
            corner_radius: 0.0,
            arc_label: None,
            center: Point::new(50.0, 50.0),
        }
    }

    fn assert_point_close(a: Point, b: Point) {
        let eps = 1e-9;
        assert!((a.x - b.x).abs() <= eps, "x {a:?} != {b:?}");
        assert!((a.y - b.y).abs() <= eps, "y {a:?} != {b:?}");
    }

    #[test]
    fn zero_degrees_points_up_and_angles_run_clockwise() {
        let arc = quarter(0.0, 90.0);
        assert_point_close(arc.point_at(10.0, 0.0), Point::new(50.0, 40.0));
        assert_point_close(arc.point_at(10.0, 90.0), Point::new(60.0, 50.0));
        assert_point_close(arc.point_at(10.0, 180.0), Point::new(50.0, 60.0));
    }

    #[test]
    fn label_anchor_sits_mid_span_at_label_radius() {
        let arc = quarter(0.0, 180.0);
        assert_point_close(arc.label_anchor(), Point::new(65.0, 50.0));
    }

    #[test]
    fn contains_respects_radii_and_span() {
        let arc = quarter(0.0, 90.0);
        // Inside the upper-right quadrant band.
        assert!(arc.contains(Point::new(60.0, 40.0)));
        // Same direction, inside the hole.
        assert!(!arc.contains(Point::new(53.0, 47.0)));
        // Same direction, beyond the outer radius.
        assert!(!arc.contains(Point::new(70.0, 30.0)));
        // Lower-left quadrant.
        assert!(!arc.contains(Point::new(40.0, 60.0)));
    }

    #[test]
    fn contains_handles_spans_crossing_twelve_o_clock() {
        let arc = quarter(-45.0, 45.0);
        assert!(arc.contains(Point::new(50.0, 35.0)));
        assert!(arc.contains(Point::new(45.0, 36.0)));
        assert!(!arc.contains(Point::new(50.0, 65.0)));
    }

    #[test]
    fn empty_span_contains_nothing() {
        let arc = quarter(90.0, 90.0);
        assert!(!arc.contains(Point::new(65.0, 50.0)));
    }

    #[test]
    fn path_covers_the_drawn_band() {
        let arc = quarter(0.0, 90.0);
        let bounds = arc.path(0.1).bounding_box();
        assert!(bounds.x0 >= 50.0 - 1e-6, "{bounds:?}");
        assert!(bounds.y1 <= 50.0 + 1e-6, "{bounds:?}");
        assert!((bounds.x1 - 70.0).abs() < 0.2, "{bounds:?}");
        assert!((bounds.y0 - 30.0).abs() < 0.2, "{bounds:?}");
    }
}
