// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie geometry resolution.
//!
//! Turns a [`PieSeries`] into one [`ArcDescriptor`] per item:
//! 1. resolve the center and radii against the drawing area,
//! 2. order a working copy of the items by the series sort order,
//! 3. split the available sweep in proportion to the item values,
//! 4. merge highlighted/faded overrides per item,
//! 5. fill in formatted values, colors and arc labels.
//!
//! Resolution is a pure function of its inputs and never fails: an empty series yields no
//! arcs and a zero-sum series yields zero-span arcs.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use log::{debug, warn};

use crate::arc::ArcDescriptor;
use crate::format::format_value;
use crate::palette::ColorAssigner;
use crate::params::LayoutParams;
use crate::series::PieSeries;
use crate::state::{Interaction, StateOverride};

/// Radii shared by every arc before overrides.
#[derive(Clone, Copy, Debug, PartialEq)]
struct BaseRadii {
    max: f64,
    inner: f64,
    outer: f64,
    label: f64,
}

impl BaseRadii {
    fn new(params: &LayoutParams, area: Rect) -> Self {
        let max = LayoutParams::max_radius(area);
        let inner = params.inner_radius.resolve_radius(max);
        let outer = params.outer_radius.resolve_radius(max);
        let label = params
            .arc_label_radius
            .map_or((inner + outer) * 0.5, |l| l.resolve_radius(max));
        Self {
            max,
            inner,
            outer,
            label,
        }
    }
}

/// Per-arc attributes after merging a state override onto the base values.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Merged {
    inner: f64,
    outer: f64,
    label: f64,
    corner: f64,
    pad: f64,
}

fn merge(base: &BaseRadii, params: &LayoutParams, over: Option<&StateOverride>) -> Merged {
    let Some(over) = over else {
        return Merged {
            inner: base.inner,
            outer: base.outer,
            label: base.label,
            corner: params.corner_radius.max(0.0),
            pad: params.padding_angle.max(0.0),
        };
    };
    let outer = match over.outer_radius {
        Some(outer) => outer.resolve_radius(base.max),
        None => (base.outer + over.additional_radius.unwrap_or(0.0)).max(0.0),
    };
    Merged {
        inner: over
            .inner_radius
            .map_or(base.inner, |l| l.resolve_radius(base.max)),
        outer,
        label: over
            .arc_label_radius
            .map_or(base.label, |l| l.resolve_radius(base.max)),
        corner: over.corner_radius.unwrap_or(params.corner_radius).max(0.0),
        pad: over
            .padding_angle
            .unwrap_or(params.padding_angle)
            .max(0.0),
    }
}

/// Resolves one arc per item of `series` for the drawing area `area`.
///
/// Arcs are returned in layout order (after sorting); each keeps its original input
/// index in [`ArcDescriptor::index`]. Items without a color get `colors.color(index)`.
pub fn resolve(
    series: &PieSeries,
    area: Rect,
    interaction: &Interaction,
    colors: &dyn ColorAssigner,
) -> Vec<ArcDescriptor> {
    let params = &series.params;
    let items = &series.data;
    if items.is_empty() {
        debug!("pie series `{}` has no items", series.id);
        return Vec::new();
    }

    let center = params.center(area);
    let base = BaseRadii::new(params, area);
    let order = params.sort_order.layout_order(items);

    for (index, item) in items.iter().enumerate() {
        let weight = item.weight();
        if weight != item.value {
            warn!(
                "pie series `{}` item {index} has value {}; counting it as {weight}",
                series.id, item.value
            );
        }
    }
    let total: f64 = items.iter().map(|item| item.weight()).sum();

    let full = params.end_angle - params.start_angle;
    let direction = if full < 0.0 { -1.0 } else { 1.0 };
    let gaps = (items.len() - 1) as f64;
    // Never let the gaps consume more than the whole sweep.
    let layout_pad = if gaps > 0.0 {
        params.padding_angle.max(0.0).min(full.abs() / gaps)
    } else {
        0.0
    };
    let available = (full.abs() - layout_pad * gaps).max(0.0);

    let mut out = Vec::with_capacity(items.len());
    let mut cursor = params.start_angle;
    for (layout_index, &index) in order.iter().enumerate() {
        let item = &items[index];
        let span = if total > 0.0 {
            available * item.weight() / total
        } else {
            0.0
        };
        let start_angle = cursor;
        let end_angle = start_angle + direction * span;
        cursor = end_angle + direction * layout_pad;

        let state = interaction.state_of(&series.id, index);
        let over = series.overrides.for_state(state);
        let merged = merge(&base, params, over);

        // A larger padding than the layout gap insets the drawn span; a smaller one
        // cannot widen it past the allocated span.
        let inset = ((merged.pad - layout_pad).max(0.0) * 0.5).min(span * 0.5);

        let color = over
            .and_then(|o| o.color)
            .or(item.color)
            .unwrap_or_else(|| colors.color(index));

        let mut arc = ArcDescriptor {
            id: item.id.clone(),
            index,
            layout_index,
            value: item.value,
            label: item.label.clone(),
            formatted_value: item
                .formatted_value
                .clone()
                .unwrap_or_else(|| format_value(item.value)),
            color,
            state,
            start_angle,
            end_angle,
            pad_angle: merged.pad,
            padded_start_angle: start_angle + direction * inset,
            padded_end_angle: end_angle - direction * inset,
            inner_radius: merged.inner,
            outer_radius: merged.outer,
            arc_label_radius: merged.label,
            corner_radius: merged.corner,
            arc_label: None,
            center,
        };
        if let Some(label) = &params.arc_label
            && arc.padded_span() >= params.arc_label_min_angle
        {
            arc.arc_label = label.text(&arc);
        }
        out.push(arc);
    }

    debug!(
        "resolved {} arcs for pie series `{}` (total {total}, sweep {available} deg, padding {layout_pad} deg)",
        out.len(),
        series.id,
    );
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::length::Length;

    fn base() -> BaseRadii {
        BaseRadii {
            max: 50.0,
            inner: 10.0,
            outer: 40.0,
            label: 25.0,
        }
    }

    #[test]
    fn base_radii_default_label_to_midpoint() {
        let params = LayoutParams::default().with_inner_radius(Length::HALF);
        let radii = BaseRadii::new(&params, Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(radii.max, 50.0);
        assert_eq!(radii.inner, 25.0);
        assert_eq!(radii.outer, 50.0);
        assert_eq!(radii.label, 37.5);
    }

    #[test]
    fn no_override_keeps_base_values() {
        let params = LayoutParams::default()
            .with_corner_radius(3.0)
            .with_padding_angle(2.0);
        let merged = merge(&base(), &params, None);
        assert_eq!(
            merged,
            Merged {
                inner: 10.0,
                outer: 40.0,
                label: 25.0,
                corner: 3.0,
                pad: 2.0,
            }
        );
    }

    #[test]
    fn additional_radius_is_ignored_when_outer_radius_is_overridden() {
        let params = LayoutParams::default();
        let over = StateOverride::default()
            .with_additional_radius(10.0)
            .with_outer_radius(30.0);
        assert_eq!(merge(&base(), &params, Some(&over)).outer, 30.0);

        let over = StateOverride::default().with_additional_radius(10.0);
        assert_eq!(merge(&base(), &params, Some(&over)).outer, 50.0);
    }

    #[test]
    fn negative_additional_radius_clamps_to_zero() {
        let over = StateOverride::default().with_additional_radius(-100.0);
        let merged = merge(&base(), &LayoutParams::default(), Some(&over));
        assert_eq!(merged.outer, 0.0);
    }

    #[test]
    fn override_lengths_resolve_against_the_max_radius() {
        let over = StateOverride::default()
            .with_inner_radius(Length::Percent(10.0))
            .with_arc_label_radius(Length::Percent(90.0));
        let merged = merge(&base(), &LayoutParams::default(), Some(&over));
        assert_eq!(merged.inner, 5.0);
        assert_eq!(merged.label, 45.0);
    }
}
