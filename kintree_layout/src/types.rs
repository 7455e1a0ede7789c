// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output types of the layout engine: segments, elbow markers, and their diff keys.

use glam::{Affine3A, Quat, Vec3};
use kintree_graph::{FamilyKey, NodeId};

/// A straight connector line from one point to another.
///
/// Pure rendering output. Renderers that draw segments as cylinders can use
/// [`Segment::midpoint`], [`Segment::length`], and [`Segment::orientation`]
/// directly as the mesh transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Start point.
    pub from: Vec3,
    /// End point.
    pub to: Vec3,
}

impl Segment {
    /// Create a segment between two points.
    pub const fn new(from: Vec3, to: Vec3) -> Self {
        Self { from, to }
    }

    /// The vector from start to end.
    #[inline]
    pub fn vector(&self) -> Vec3 {
        self.to - self.from
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.vector().length()
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Vec3 {
        (self.from + self.to) * 0.5
    }

    /// Unit direction from start to end, or `None` for a zero-length segment.
    #[inline]
    pub fn direction(&self) -> Option<Vec3> {
        self.vector().try_normalize()
    }

    /// Rotation taking the world +Y axis onto the segment direction.
    ///
    /// Matches the convention of cylinder meshes whose long axis is +Y.
    /// Zero-length segments yield the identity rotation.
    pub fn orientation(&self) -> Quat {
        match self.direction() {
            Some(dir) => Quat::from_rotation_arc(Vec3::Y, dir),
            None => Quat::IDENTITY,
        }
    }

    /// Translate both endpoints by `offset`.
    #[inline]
    #[must_use]
    pub fn offset(&self, offset: Vec3) -> Self {
        Self::new(self.from + offset, self.to + offset)
    }

    /// Map both endpoints through `tf`.
    #[must_use]
    pub fn transformed(&self, tf: &Affine3A) -> Self {
        Self::new(tf.transform_point3(self.from), tf.transform_point3(self.to))
    }
}

/// Which connector within a family a segment is.
///
/// Together with the family key this forms a stable identity for diffing and
/// render-key purposes; it carries no other meaning.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ConnectorRole {
    /// Upper line of the parent pair connector.
    ParentTop,
    /// Lower line of the parent pair connector.
    ParentBottom,
    /// Vertical run from the parent connector down to the branch point.
    BranchDrop,
    /// Horizontal run from the branch point out to a child's junction.
    Arm(NodeId),
    /// Final run down onto the child (straight from the branch point, or from
    /// the child's junction).
    Drop(NodeId),
}

/// Stable identity of one connector segment across frames.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ConnectorKey {
    /// The family this segment belongs to.
    pub family: FamilyKey,
    /// Which of the family's connectors it is.
    pub role: ConnectorRole,
}

/// Where an elbow sits within its family.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ElbowSite {
    /// At the right-angle junction above a child.
    Junction(NodeId),
    /// At the branch point itself.
    BranchPoint,
}

/// Stable identity of one elbow marker across frames.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElbowKey {
    /// The family this elbow belongs to.
    pub family: FamilyKey,
    /// Where within the family it sits.
    pub site: ElbowSite,
}

/// A point where a connector path turns through a right angle.
///
/// Rendered as a small sphere so the bend reads as a rounded corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElbowMarker {
    /// Stable identity for diffing.
    pub key: ElbowKey,
    /// Position of the bend.
    pub at: Vec3,
}

impl ElbowMarker {
    /// Map the marker position through `tf`.
    #[must_use]
    pub fn transformed(&self, tf: &Affine3A) -> Self {
        Self {
            key: self.key,
            at: tf.transform_point3(self.at),
        }
    }
}
