// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kintree_layout --heading-base-level=0

//! Kintree Layout: a glam-native connector layout engine for 3D family trees.
//!
//! Given node positions and parent/child relationships, this crate computes
//! the renderable connector geometry of a family tree:
//!
//! - the two parallel lines joining a parent pair (the "equals sign"),
//! - the vertical drop to a branch point held clear above every child,
//! - straight drops to children hanging directly below the branch point and
//!   right-angle arm/drop routes to everyone else,
//! - elbow markers wherever a path bends, so renderers can round the corners.
//!
//! ## Statelessness
//!
//! The engine is pure: it recomputes the full output from a position snapshot
//! on every call and retains nothing between calls, so the geometry can never
//! drift from the authoritative node positions. Identical inputs produce
//! bit-identical outputs; invoke it per frame or per state change, whichever
//! the embedder prefers. It performs no I/O, holds no locks, and has no
//! notion of frames or time.
//!
//! Node positions come in through [`kintree_graph::PositionLookup`], and every
//! output segment and marker carries a key derived from its family's parent
//! pair, so a retained-mode renderer can diff frames cheaply.
//!
//! ## Degenerate inputs
//!
//! Every degenerate case has a defined, deterministic fallback; an
//! interactive drag can never make layout panic. Parents dragged onto the
//! same point are the one caller-visible error, and
//! [`layout_forest`] answers it by logging and skipping that family.
//!
//! # Example
//!
//! ```rust
//! use glam::vec3;
//! use kintree_layout::{LayoutParams, layout_forest};
//! use kintree_graph::{FamilyGraph, TreeNode};
//!
//! // Two parents with three children below them.
//! let mut graph = FamilyGraph::new();
//! let mother = graph.insert(TreeNode::at(vec3(-1.0, 0.0, 0.0)));
//! let father = graph.insert(TreeNode::at(vec3(1.0, 0.0, 0.0)));
//! let children: Vec<_> = [-2.0_f32, 0.0, 2.0]
//!     .iter()
//!     .map(|&x| graph.insert(TreeNode::at(vec3(x, -2.0, 0.0))))
//!     .collect();
//! graph.add_family((mother, father), children).unwrap();
//!
//! let forest = layout_forest(graph.families(), &graph, &LayoutParams::default());
//!
//! // Two parent lines, one vertical drop, five child runs...
//! assert_eq!(forest.segments().count(), 8);
//! // ...and an elbow above each of the two offset children.
//! assert_eq!(forest.elbows().count(), 2);
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs in positions. Debug builds may assert.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod branch;
pub mod cluster;
pub mod error;
pub mod family;
pub mod params;
pub mod parents;
pub mod route;
pub mod types;

pub use branch::branch_point;
pub use cluster::ClusterRing;
pub use error::LayoutError;
pub use family::{FamilyLayout, ForestLayout, layout_family, layout_forest};
pub use params::LayoutParams;
pub use parents::{ParentConnector, parent_connector};
pub use route::{ChildRoutes, route_children};
pub use types::{ConnectorKey, ConnectorRole, ElbowKey, ElbowMarker, ElbowSite, Segment};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use glam::vec3;
    use kintree_graph::{FamilyGraph, TreeNode};

    /// A forest of three families with mixed straight and elbowed children.
    fn forest_scene() -> FamilyGraph {
        let mut g = FamilyGraph::new();
        for i in 0..3 {
            let x = i as f32 * 10.0;
            let p1 = g.insert(TreeNode::at(vec3(x - 1.0, 0.0, 0.0)));
            let p2 = g.insert(TreeNode::at(vec3(x + 1.0, 0.0, 0.0)));
            let c1 = g.insert(TreeNode::at(vec3(x - 2.0, -2.0, 0.0)));
            let c2 = g.insert(TreeNode::at(vec3(x, -2.0, 0.0)));
            g.add_family((p1, p2), alloc::vec![c1, c2]).unwrap();
        }
        g
    }

    #[test]
    fn layout_is_idempotent() {
        let g = forest_scene();
        let params = LayoutParams::default();
        let first = layout_forest(g.families(), &g, &params);
        let second = layout_forest(g.families(), &g, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn family_order_only_permutes_the_output() {
        let g = forest_scene();
        let params = LayoutParams::default();

        let forward = layout_forest(g.families(), &g, &params);
        let mut reversed_families: Vec<_> = g.families().to_vec();
        reversed_families.reverse();
        let reversed = layout_forest(&reversed_families, &g, &params);

        // Same multiset of keyed segments and elbows, just enumerated in a
        // different order. Keys are unique, so sorting by key normalizes.
        let normalize_segments = |layout: &ForestLayout| {
            let mut v: Vec<_> = layout.segments().collect();
            v.sort_by_key(|&(key, _)| key);
            v
        };
        let normalize_elbows = |layout: &ForestLayout| {
            let mut v: Vec<_> = layout.elbows().copied().collect();
            v.sort_by_key(|e| e.key);
            v
        };
        assert_eq!(normalize_segments(&forward), normalize_segments(&reversed));
        assert_eq!(normalize_elbows(&forward), normalize_elbows(&reversed));
    }

    #[test]
    fn segment_keys_are_unique_across_the_forest() {
        let g = forest_scene();
        let forest = layout_forest(g.families(), &g, &LayoutParams::default());
        let keys: Vec<_> = forest.segments().map(|(key, _)| key).collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn ring_transform_preserves_structure() {
        let g = forest_scene();
        let forest = layout_forest(g.families(), &g, &LayoutParams::default());
        let ring = ClusterRing::new(7.0, 3);
        let anchored = forest.transformed(&ring.anchor(1));

        assert_eq!(anchored.len(), forest.len());
        assert_eq!(anchored.segments().count(), forest.segments().count());
        // Rigid transform: lengths are preserved.
        for ((_, a), (_, b)) in forest.segments().zip(anchored.segments()) {
            assert!((a.length() - b.length()).abs() < 1e-4);
        }
    }
}
