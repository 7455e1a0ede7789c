// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch point: where a family's children fan out from.

use glam::Vec3;

/// Compute the point from which a family's child connectors fan out.
///
/// The branch point sits directly below the parent connector midpoint (same X
/// and Z) at `clearance` above the highest child, so the horizontal arms
/// never cut through a child node regardless of where children have been
/// dragged. With no children there is nothing to clear and the midpoint is
/// returned unchanged.
pub fn branch_point(
    connector_midpoint: Vec3,
    children: impl IntoIterator<Item = Vec3>,
    clearance: f32,
) -> Vec3 {
    let mut highest: Option<f32> = None;
    for child in children {
        highest = Some(match highest {
            Some(y) => y.max(child.y),
            None => child.y,
        });
    }
    match highest {
        Some(y) => Vec3::new(connector_midpoint.x, y + clearance, connector_midpoint.z),
        None => connector_midpoint,
    }
}
