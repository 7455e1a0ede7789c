// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cluster ring: world-space anchors for several trees sharing a center.
//!
//! A set of related trees is presented as the faces of a regular polygon
//! around a shared vertical axis: each tree is laid out in its own frontal
//! plane, then rotated about the axis and pushed out to the polygon's
//! inscribed circle. Apply the resulting anchor to a laid-out family or
//! forest via [`FamilyLayout::transformed`](crate::FamilyLayout::transformed)
//! or [`ForestLayout::transformed`](crate::ForestLayout::transformed).

use core::f32::consts::{PI, TAU};

use glam::{Affine3A, Vec2, Vec3};

/// Placement of `count` tree clusters on a regular polygon ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClusterRing {
    /// Width of one polygon face, sized to fit one tree cluster.
    pub face_width: f32,
    /// Number of clusters around the ring.
    pub count: u32,
}

impl ClusterRing {
    /// Create a ring of `count` faces, each `face_width` wide.
    pub const fn new(face_width: f32, count: u32) -> Self {
        Self { face_width, count }
    }

    /// Radius of the inscribed circle of the regular `count`-gon:
    /// `w / (2 tan(pi / n))`.
    ///
    /// A single cluster sits on the axis itself (radius zero), and the
    /// two-face "polygon" is flat, so both degenerate to zero.
    pub fn inradius(&self) -> f32 {
        if self.count <= 1 {
            return 0.0;
        }
        let (sin, cos) = {
            let v = Vec2::from_angle(PI / self.count as f32);
            (v.y, v.x)
        };
        (self.face_width * cos / (2.0 * sin)).max(0.0)
    }

    /// Rotation of face `i` about the shared vertical axis.
    pub fn angle(&self, i: u32) -> f32 {
        TAU * i as f32 / self.count.max(1) as f32
    }

    /// World transform of face `i`: rotate about the axis, then offset out to
    /// the inscribed circle.
    pub fn anchor(&self, i: u32) -> Affine3A {
        Affine3A::from_rotation_y(self.angle(i))
            * Affine3A::from_translation(Vec3::new(0.0, 0.0, self.inradius()))
    }
}
