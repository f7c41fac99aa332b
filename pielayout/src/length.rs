// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute-or-percentage lengths.
//!
//! Radii and center coordinates can be given in pixels or as a percentage of a
//! reference extent. The reference depends on the field: radii use the largest radius
//! that fits the drawing area, `cx`/`cy` use the full width/height.

extern crate alloc;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::LengthError;

/// A length in pixels or as a percentage of a reference extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Absolute value in drawing-area units.
    Px(f64),
    /// Percentage of the reference extent (`100.0` is the full extent).
    Percent(f64),
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);
    /// The full reference extent.
    pub const FULL: Self = Self::Percent(100.0);
    /// Half of the reference extent.
    pub const HALF: Self = Self::Percent(50.0);

    /// Resolves against `reference` without clamping.
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => p * reference / 100.0,
        }
    }

    /// Resolves a radius against the largest radius that fits the drawing area.
    ///
    /// Pixel radii are clamped to be non-negative; percentage radii are clamped to
    /// `[0, max_radius]`.
    pub fn resolve_radius(self, max_radius: f64) -> f64 {
        let max_radius = max_radius.max(0.0);
        match self {
            Self::Px(v) => v.max(0.0),
            Self::Percent(_) => self.resolve(max_radius).max(0.0).min(max_radius),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl FromStr for Length {
    type Err = LengthError;

    /// Parses `"50%"` or `"12px"`.
    ///
    /// Unit-less strings are rejected: a bare number is only accepted as a number, not
    /// as text, so a forgotten `%` surfaces as an error instead of a tiny radius.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LengthError::Empty);
        }
        let (body, percent) = if let Some(body) = trimmed.strip_suffix('%') {
            (body, true)
        } else if let Some(body) = trimmed.strip_suffix("px") {
            (body, false)
        } else {
            return Err(LengthError::UnknownUnit(trimmed.to_string()));
        };
        let value = f64::from_str(body.trim_end())
            .map_err(|_| LengthError::NotANumber(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(LengthError::NotFinite(trimmed.to_string()));
        }
        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Px(value)
        })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Length;

    impl Serialize for Length {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Px(v) => serializer.serialize_f64(*v),
                Self::Percent(_) => serializer.collect_str(self),
            }
        }
    }

    struct LengthVisitor;

    impl Visitor<'_> for LengthVisitor {
        type Value = Length;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a string such as \"50%\" or \"12px\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Length, E> {
            Ok(Length::Px(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Length, E> {
            Ok(Length::Px(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Length, E> {
            Ok(Length::Px(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Length, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Length {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(LengthVisitor)
        }
    }
}
