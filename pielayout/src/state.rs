// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlighted/faded interaction state and the overrides applied for it.
//!
//! The resolver does not track hover or selection. Callers hand it an [`Interaction`]
//! describing which slices are highlighted or faded, plus one [`StateOverride`] per
//! state, and every arc is resolved with explicit layered defaults:
//! base parameters, then the state override, then `additional_radius`.

use hashbrown::HashSet;
use peniko::Color;

use crate::item::{PieItemIdentifier, SeriesId};
use crate::length::Length;

/// Interaction state of a single slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemState {
    /// Neither highlighted nor faded.
    #[default]
    Normal,
    /// The slice is highlighted.
    Highlighted,
    /// Another slice is highlighted and this one is faded.
    Faded,
}

/// A partial override of arc attributes for one interaction state.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StateOverride {
    /// Added to the base outer radius. Can be negative.
    ///
    /// Ignored when `outer_radius` is set.
    pub additional_radius: Option<f64>,
    /// Replaces the inner radius.
    pub inner_radius: Option<Length>,
    /// Replaces the outer radius.
    pub outer_radius: Option<Length>,
    /// Replaces the label anchor radius.
    pub arc_label_radius: Option<Length>,
    /// Replaces the corner radius.
    pub corner_radius: Option<f64>,
    /// Replaces the padding angle used when drawing the arc, in degrees.
    pub padding_angle: Option<f64>,
    /// Replaces the fill color.
    #[cfg_attr(feature = "serde", serde(with = "crate::palette::serde_color"))]
    pub color: Option<Color>,
}

impl StateOverride {
    /// Grows (or shrinks, when negative) the outer radius.
    pub fn with_additional_radius(mut self, delta: f64) -> Self {
        self.additional_radius = Some(delta);
        self
    }

    /// Replaces the inner radius.
    pub fn with_inner_radius(mut self, radius: impl Into<Length>) -> Self {
        self.inner_radius = Some(radius.into());
        self
    }

    /// Replaces the outer radius.
    pub fn with_outer_radius(mut self, radius: impl Into<Length>) -> Self {
        self.outer_radius = Some(radius.into());
        self
    }

    /// Replaces the label anchor radius.
    pub fn with_arc_label_radius(mut self, radius: impl Into<Length>) -> Self {
        self.arc_label_radius = Some(radius.into());
        self
    }

    /// Replaces the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Replaces the padding angle.
    pub fn with_padding_angle(mut self, padding: f64) -> Self {
        self.padding_angle = Some(padding);
        self
    }

    /// Replaces the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// The overrides for both interaction states.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StateOverrides {
    /// Applied to highlighted slices.
    pub highlighted: StateOverride,
    /// Applied to faded slices.
    pub faded: StateOverride,
}

impl StateOverrides {
    /// The override for `state`, or `None` for [`ItemState::Normal`].
    pub fn for_state(&self, state: ItemState) -> Option<&StateOverride> {
        match state {
            ItemState::Normal => None,
            ItemState::Highlighted => Some(&self.highlighted),
            ItemState::Faded => Some(&self.faded),
        }
    }
}

/// What gets highlighted when a slice is hovered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HighlightMode {
    /// Nothing.
    #[default]
    None,
    /// The hovered slice.
    Item,
    /// Every slice of the hovered slice's series.
    Series,
}

/// What gets faded when a slice is hovered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FadeMode {
    /// Nothing.
    #[default]
    None,
    /// Every other slice of the hovered slice's series.
    Series,
}

/// How hovering a slice translates into highlighted and faded slices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightScope {
    /// Highlight policy.
    pub highlight: HighlightMode,
    /// Fade policy.
    pub fade: FadeMode,
}

/// The externally managed set of highlighted and faded slices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
    highlighted: HashSet<PieItemIdentifier>,
    faded: HashSet<PieItemIdentifier>,
}

impl Interaction {
    /// No highlighted or faded slices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `item` as highlighted.
    pub fn highlight(&mut self, item: PieItemIdentifier) {
        self.highlighted.insert(item);
    }

    /// Marks `item` as faded.
    pub fn fade(&mut self, item: PieItemIdentifier) {
        self.faded.insert(item);
    }

    /// Derives the interaction for `hovered` within a series of `len` items.
    pub fn from_hovered(hovered: &PieItemIdentifier, len: usize, scope: HighlightScope) -> Self {
        let mut out = Self::new();
        let series = &hovered.series_id;
        match scope.highlight {
            HighlightMode::None => {}
            HighlightMode::Item => out.highlight(hovered.clone()),
            HighlightMode::Series => {
                for i in 0..len {
                    out.highlight(PieItemIdentifier::new(series.clone(), i));
                }
            }
        }
        if scope.fade == FadeMode::Series {
            for i in 0..len {
                let item = PieItemIdentifier::new(series.clone(), i);
                if !out.highlighted.contains(&item) {
                    out.fade(item);
                }
            }
        }
        out
    }

    /// Whether nothing is highlighted or faded.
    pub fn is_empty(&self) -> bool {
        self.highlighted.is_empty() && self.faded.is_empty()
    }

    /// The state of item `data_index` of `series`. Highlighted wins over faded.
    pub fn state_of(&self, series: &SeriesId, data_index: usize) -> ItemState {
        if self.is_empty() {
            return ItemState::Normal;
        }
        let item = PieItemIdentifier::new(series.clone(), data_index);
        if self.highlighted.contains(&item) {
            ItemState::Highlighted
        } else if self.faded.contains(&item) {
            ItemState::Faded
        } else {
            ItemState::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn id(i: usize) -> PieItemIdentifier {
        PieItemIdentifier::new("pie", i)
    }

    #[test]
    fn highlighted_wins_over_faded() {
        let mut interaction = Interaction::new();
        interaction.fade(id(0));
        interaction.highlight(id(0));
        interaction.fade(id(1));
        let series = SeriesId::from("pie");
        assert_eq!(interaction.state_of(&series, 0), ItemState::Highlighted);
        assert_eq!(interaction.state_of(&series, 1), ItemState::Faded);
        assert_eq!(interaction.state_of(&series, 2), ItemState::Normal);
    }

    #[test]
    fn states_are_scoped_to_their_series() {
        let mut interaction = Interaction::new();
        interaction.highlight(id(0));
        assert_eq!(
            interaction.state_of(&SeriesId::from("other"), 0),
            ItemState::Normal
        );
    }

    #[test]
    fn hovering_an_item_fades_its_siblings() {
        let scope = HighlightScope {
            highlight: HighlightMode::Item,
            fade: FadeMode::Series,
        };
        let interaction = Interaction::from_hovered(&id(1), 3, scope);
        let series = SeriesId::from("pie");
        assert_eq!(interaction.state_of(&series, 0), ItemState::Faded);
        assert_eq!(interaction.state_of(&series, 1), ItemState::Highlighted);
        assert_eq!(interaction.state_of(&series, 2), ItemState::Faded);
    }

    #[test]
    fn series_highlight_leaves_nothing_to_fade() {
        let scope = HighlightScope {
            highlight: HighlightMode::Series,
            fade: FadeMode::Series,
        };
        let interaction = Interaction::from_hovered(&id(0), 2, scope);
        let series = SeriesId::from("pie");
        assert_eq!(interaction.state_of(&series, 1), ItemState::Highlighted);
        assert!(interaction.faded.is_empty());
    }

    #[test]
    fn overrides_are_selected_by_state() {
        let overrides = StateOverrides {
            highlighted: StateOverride::default().with_additional_radius(10.0),
            faded: StateOverride::default().with_corner_radius(2.0),
        };
        assert!(overrides.for_state(ItemState::Normal).is_none());
        assert_eq!(
            overrides.for_state(ItemState::Highlighted).unwrap().additional_radius,
            Some(10.0)
        );
        assert_eq!(
            overrides.for_state(ItemState::Faded).unwrap().corner_radius,
            Some(2.0)
        );
    }
}
