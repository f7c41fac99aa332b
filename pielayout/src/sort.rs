// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordering of slices around the pie.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::item::ValueItem;

/// A comparator over item values, used by [`SortOrder::Custom`].
pub type ValueComparator = dyn Fn(f64, f64) -> Ordering + Send + Sync;

/// The order in which items are laid out around the pie.
///
/// Sorting only changes the layout order; every arc keeps its original input index.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    /// Keep input order.
    #[default]
    None,
    /// Smallest value first.
    #[cfg_attr(feature = "serde", serde(rename = "asc"))]
    Ascending,
    /// Largest value first.
    #[cfg_attr(feature = "serde", serde(rename = "desc"))]
    Descending,
    /// Caller-supplied comparator over values.
    ///
    /// The comparator must be a total order; like `slice::sort_by`, an inconsistent
    /// comparator may panic.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Arc<ValueComparator>),
}

impl SortOrder {
    /// Wraps a comparator closure.
    pub fn custom(compare: impl Fn(f64, f64) -> Ordering + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(compare))
    }

    /// Returns item indices in layout order.
    ///
    /// The sort is stable, so equal values keep their input order.
    pub fn layout_order(&self, items: &[ValueItem]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..items.len()).collect();
        match self {
            Self::None => {}
            Self::Ascending => {
                order.sort_by(|&a, &b| items[a].value.total_cmp(&items[b].value));
            }
            Self::Descending => {
                order.sort_by(|&a, &b| items[b].value.total_cmp(&items[a].value));
            }
            Self::Custom(compare) => {
                order.sort_by(|&a, &b| compare(items[a].value, items[b].value));
            }
        }
        order
    }
}

impl fmt::Debug for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Ascending => f.write_str("Ascending"),
            Self::Descending => f.write_str("Descending"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for SortOrder {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None)
            | (Self::Ascending, Self::Ascending)
            | (Self::Descending, Self::Descending) => true,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
