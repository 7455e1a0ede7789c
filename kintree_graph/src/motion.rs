// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion helpers for animated node moves.
//!
//! Nodes carry an optional [`target`](crate::TreeNode::target); an embedder
//! calls [`FamilyGraph::step_motion`] between renders to ease every animating
//! node toward its target. The easing is framerate-independent exponential
//! decay, so variable frame times do not change the perceived speed.
//!
//! ```
//! use glam::{Vec3, vec3};
//! use kintree_graph::{FamilyGraph, TreeNode};
//!
//! let mut g = FamilyGraph::new();
//! let id = g.insert(TreeNode::at(Vec3::ZERO));
//! g.set_target(id, vec3(4.0, 0.0, 0.0));
//! while g.node(id).unwrap().is_animating() {
//!     g.step_motion(6.0, 1.0 / 60.0);
//! }
//! assert_eq!(g.node(id).unwrap().position, vec3(4.0, 0.0, 0.0));
//! ```

use glam::Vec3;

use crate::graph::FamilyGraph;

/// Distance at which an animating node snaps onto its target.
pub const SNAP_EPSILON: f32 = 1e-3;

/// Move `current` toward `target` with exponential decay.
///
/// `lambda` sets approach speed (higher is snappier; around 6 reads well for
/// interactive scenes) and `dt` is the elapsed time in seconds. Two half
/// steps land where one full step does, which is what makes the easing
/// framerate-independent.
#[inline]
pub fn damp(current: Vec3, target: Vec3, lambda: f32, dt: f32) -> Vec3 {
    let k = Vec3::ONE - Vec3::splat(-lambda * dt).exp();
    current + (target - current) * k
}

impl FamilyGraph {
    /// Advance every animating node one time step of `dt` seconds.
    ///
    /// Nodes within [`SNAP_EPSILON`] of their target are snapped onto it and
    /// their target cleared; everything else is left untouched.
    pub fn step_motion(&mut self, lambda: f32, dt: f32) {
        let animating: alloc::vec::Vec<_> = self
            .iter()
            .filter_map(|(id, n)| n.target.map(|t| (id, n.position, t)))
            .collect();
        for (id, position, target) in animating {
            let next = damp(position, target, lambda, dt);
            if next.distance_squared(target) <= SNAP_EPSILON * SNAP_EPSILON {
                self.set_position(id, target);
                self.clear_target(id);
            } else {
                self.set_position(id, next);
            }
        }
    }
}
