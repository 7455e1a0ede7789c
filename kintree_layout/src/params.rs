// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout parameters.

/// Default separation between the two parent-connector lines.
pub const DEFAULT_PARENT_GAP: f32 = 0.2;

/// Default vertical clearance of the branch point above the highest child.
pub const DEFAULT_BRANCH_CLEARANCE: f32 = 0.65;

/// Default tolerance for alignment and degeneracy tests, in world units.
pub const DEFAULT_ALIGN_EPSILON: f32 = 1e-4;

/// Tunable geometry of a family's connectors.
///
/// The defaults reproduce the visual proportions of the reference scene
/// (nodes roughly a unit apart). All distances are in world units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Separation between the two parallel parent-connector lines (the
    /// "equals sign").
    pub parent_gap: f32,
    /// How far above the highest child the branch point sits. Keeps the
    /// horizontal arms clear of every child node no matter where children
    /// have been dragged.
    pub branch_clearance: f32,
    /// Tolerance for "child is directly below the branch point" and for the
    /// coincident-parents guard. Drag input is floating point, so exact
    /// equality would flip a child between straight and elbowed routing from
    /// frame to frame.
    pub align_epsilon: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            parent_gap: DEFAULT_PARENT_GAP,
            branch_clearance: DEFAULT_BRANCH_CLEARANCE,
            align_epsilon: DEFAULT_ALIGN_EPSILON,
        }
    }
}
