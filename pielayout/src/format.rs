// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default value formatting for arc descriptors.

extern crate alloc;

use alloc::string::{String, ToString};

/// Formats a value the way it is shown when an item carries no preformatted string.
///
/// Uses the shortest decimal that round-trips, drops a trailing `.0` and prints
/// non-finite values as `NaN`, `Infinity` and `-Infinity`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value == 0.0 {
        // Covers `-0.0`.
        return "0".into();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(-7.0), "-7");
    }

    #[test]
    fn fractions_round_trip() {
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }
}
