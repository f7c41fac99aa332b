// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A pie series: data, layout parameters and interaction overrides.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::Rect;

use crate::arc::ArcDescriptor;
use crate::error::PieError;
use crate::item::{PieItemIdentifier, SeriesId, ValueItem};
use crate::palette::ColorAssigner;
use crate::params::LayoutParams;
use crate::resolver::resolve;
use crate::state::{Interaction, StateOverride, StateOverrides};

/// Everything needed to lay out one pie.
///
/// With the `serde` feature this deserializes from the flat camelCase object used by
/// chart configurations: `{"id": "a", "data": [...], "innerRadius": "50%", "highlighted":
/// {...}, ...}`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PieSeries {
    /// Series identifier.
    pub id: SeriesId,
    /// Items in input order.
    pub data: Vec<ValueItem>,
    /// Layout parameters.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub params: LayoutParams,
    /// Highlighted/faded overrides.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub overrides: StateOverrides,
}

impl PieSeries {
    /// Creates an empty series with default layout.
    pub fn new(id: impl Into<SeriesId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the items.
    pub fn with_data(mut self, data: impl Into<Vec<ValueItem>>) -> Self {
        self.data = data.into();
        self
    }

    /// Sets the layout parameters.
    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the override applied to highlighted slices.
    pub fn with_highlighted(mut self, highlighted: StateOverride) -> Self {
        self.overrides.highlighted = highlighted;
        self
    }

    /// Sets the override applied to faded slices.
    pub fn with_faded(mut self, faded: StateOverride) -> Self {
        self.overrides.faded = faded;
        self
    }

    /// Identifies item `data_index` of this series.
    pub fn identifier(&self, data_index: usize) -> PieItemIdentifier {
        PieItemIdentifier::new(self.id.clone(), data_index)
    }

    /// Checks that item identifiers are unique.
    pub fn validate(&self) -> Result<(), PieError> {
        let mut seen = HashSet::with_capacity(self.data.len());
        for item in &self.data {
            if !seen.insert(&item.id) {
                return Err(PieError::DuplicateItemId {
                    id: item.id.clone(),
                    series: self.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Resolves one arc per item for a drawing area; see [`resolve`].
    pub fn resolve(
        &self,
        area: Rect,
        interaction: &Interaction,
        colors: &dyn ColorAssigner,
    ) -> Vec<ArcDescriptor> {
        resolve(self, area, interaction, colors)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::item::ItemId;

    #[test]
    fn duplicate_ids_are_rejected() {
        let series = PieSeries::new("pie").with_data(vec![
            ValueItem::new("a", 1.0),
            ValueItem::new("b", 2.0),
            ValueItem::new("a", 3.0),
        ]);
        assert_eq!(
            series.validate(),
            Err(PieError::DuplicateItemId {
                id: ItemId::from("a"),
                series: SeriesId::from("pie"),
            })
        );
    }

    #[test]
    fn numeric_and_string_ids_do_not_collide() {
        let series = PieSeries::new("pie")
            .with_data(vec![ValueItem::new(1, 1.0), ValueItem::new("1", 2.0)]);
        assert_eq!(series.validate(), Ok(()));
    }

    #[test]
    fn identifiers_carry_the_series_id() {
        let series = PieSeries::new("pie");
        assert_eq!(series.identifier(3), PieItemIdentifier::new("pie", 3));
    }
}
