// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input items and the identifiers used for interaction.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use peniko::Color;

/// Identifier of a value item, unique within its series.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemId {
    /// Numeric identifier.
    Num(i64),
    /// String identifier.
    Str(String),
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self::Num(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self::Num(id.into())
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Str(id.into())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Identifier of a pie series.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SeriesId(pub String);

impl From<&str> for SeriesId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a single pie slice for hover, selection and highlight state.
///
/// `data_index` is the index of the item in the series input, not its position after
/// sorting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieItemIdentifier {
    /// Series containing the slice.
    pub series_id: SeriesId,
    /// Original index of the item in the series data.
    pub data_index: usize,
}

impl PieItemIdentifier {
    /// Creates an identifier for item `data_index` of `series_id`.
    pub fn new(series_id: impl Into<SeriesId>, data_index: usize) -> Self {
        Self {
            series_id: series_id.into(),
            data_index,
        }
    }
}

/// One labeled value of a pie series.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValueItem {
    /// Identifier, unique within the series.
    pub id: ItemId,
    /// The value. Negative and non-finite values count as zero when allocating angles.
    pub value: f64,
    /// Optional display label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
    /// Optional explicit color; otherwise one is taken from the palette.
    #[cfg_attr(feature = "serde", serde(default, with = "crate::palette::serde_color"))]
    pub color: Option<Color>,
    /// Optional preformatted value; otherwise the value is formatted by default rules.
    #[cfg_attr(feature = "serde", serde(default))]
    pub formatted_value: Option<String>,
}

impl ValueItem {
    /// Creates an unlabeled item.
    pub fn new(id: impl Into<ItemId>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
            label: None,
            color: None,
            formatted_value: None,
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets an explicit color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets a preformatted value string.
    pub fn with_formatted_value(mut self, formatted: impl Into<String>) -> Self {
        self.formatted_value = Some(formatted.into());
        self
    }

    /// The value used for angle allocation: negative and non-finite values become `0`.
    pub fn weight(&self) -> f64 {
        if self.value.is_finite() {
            self.value.max(0.0)
        } else {
            0.0
        }
    }
}
