// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent pair connector: two parallel offset lines between the parents.

use glam::Vec3;

use crate::error::LayoutError;
use crate::types::Segment;

/// The two parallel lines joining a parent pair (the "equals sign").
///
/// `top` is the line offset along the positive perpendicular, `bottom` along
/// the negative one. With parents side by side at equal height that reads as
/// above/below the line joining them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParentConnector {
    /// Line offset along +perpendicular.
    pub top: Segment,
    /// Line offset along -perpendicular.
    pub bottom: Segment,
}

impl ParentConnector {
    /// Midpoint of the bottom line; the vertical drop toward the children
    /// starts here.
    #[inline]
    pub fn bottom_midpoint(&self) -> Vec3 {
        self.bottom.midpoint()
    }
}

/// Compute the connector for a parent pair separated by `gap`.
///
/// The perpendicular is the connector direction rotated a quarter turn within
/// the X/Y plane; the tree reads front-on, so offsetting out of that plane
/// would skew the equals sign. When the parents differ only in Z the X/Y
/// perpendicular vanishes; the fallback is world +Y, which keeps the two
/// lines stacked vertically exactly as in the side-by-side case.
///
/// Parents closer together than `epsilon` have no usable direction at all and
/// yield [`LayoutError::DegenerateParents`].
pub fn parent_connector(
    parent1: Vec3,
    parent2: Vec3,
    gap: f32,
    epsilon: f32,
) -> Result<ParentConnector, LayoutError> {
    if parent1.distance_squared(parent2) <= epsilon * epsilon {
        return Err(LayoutError::DegenerateParents);
    }
    let dir = (parent2 - parent1)
        .try_normalize()
        .ok_or(LayoutError::DegenerateParents)?;
    let perp = Vec3::new(-dir.y, dir.x, 0.0)
        .try_normalize()
        .unwrap_or(Vec3::Y);
    let offset = perp * (gap * 0.5);
    let spine = Segment::new(parent1, parent2);
    Ok(ParentConnector {
        top: spine.offset(offset),
        bottom: spine.offset(-offset),
    })
}
