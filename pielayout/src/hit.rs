// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit-testing against resolved arcs.

use kurbo::Point;

use crate::arc::ArcDescriptor;
use crate::item::{PieItemIdentifier, SeriesId};

/// Finds the arc under `point` and returns its identifier.
///
/// Uses the drawn (padded) span and the resolved radii, so a highlighted arc with a
/// larger outer radius is hit over its whole enlarged band. Zero-span arcs are never hit.
pub fn hit_test(
    arcs: &[ArcDescriptor],
    series: &SeriesId,
    point: Point,
) -> Option<PieItemIdentifier> {
    arcs.iter()
        .find(|arc| arc.contains(point))
        .map(|arc| arc.identifier(series))
}
