// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Resolution itself never fails: empty or zero-sum series are valid "nothing to draw"
//! states and negative geometry is clamped. Only malformed configuration is reported.

extern crate alloc;

use alloc::string::String;

use crate::item::{ItemId, SeriesId};

/// Errors returned when parsing a [`Length`](crate::Length) from a string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
    /// The string is empty (or only whitespace).
    #[error("empty length string")]
    Empty,
    /// The string has neither a `%` nor a `px` suffix.
    #[error("unknown length `{0}`: expected a number, a `px` value or a percentage such as `50%`")]
    UnknownUnit(String),
    /// The part before the unit suffix is not a number.
    #[error("`{0}` is not a numeric length")]
    NotANumber(String),
    /// The number parsed but is infinite or NaN.
    #[error("`{0}` is not a finite length")]
    NotFinite(String),
}

/// Errors returned when validating a pie series configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PieError {
    /// A length-valued field could not be parsed.
    #[error("invalid `{field}`: {source}")]
    InvalidLength {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The underlying parse error.
        source: LengthError,
    },
    /// A numeric field received a value that is not a finite number.
    #[error("invalid `{field}`: `{value}` is not a finite number")]
    InvalidNumber {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
    /// A choice-valued field received a value outside its set of options.
    #[error("invalid `{field}`: `{value}` is not one of {expected}")]
    InvalidChoice {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Human-readable list of accepted values.
        expected: &'static str,
    },
    /// A layout setting name that does not exist.
    #[error("unknown layout setting `{0}`")]
    UnknownSetting(String),
    /// Two items of the same series share an identifier.
    #[error("duplicate item id `{id}` in series `{series}`")]
    DuplicateItemId {
        /// The repeated identifier.
        id: ItemId,
        /// The series containing both items.
        series: SeriesId,
    },
}
