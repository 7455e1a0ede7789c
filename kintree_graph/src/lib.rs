// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kintree_graph --heading-base-level=0

//! Kintree Graph: a glam-native store for family-tree scenes.
//!
//! Kintree Graph is the data side of an interactive family-tree visualization.
//!
//! - Insert, update, and remove people ([`TreeNode`]) with positions, labels,
//!   shapes, flags, and animated-move targets.
//! - Register [`Family`] groups (a parent pair plus children) with the
//!   structural invariants validated up front, so downstream geometry can
//!   assume them instead of re-deriving them.
//! - Advance in-progress animated moves with [`FamilyGraph::step_motion`].
//!
//! Node handles are generational: removing a node frees its slot, and a later
//! insert reusing the slot yields a distinct [`NodeId`], so stale handles are
//! detectable rather than silently aliasing a new node.
//!
//! Connector geometry consumes this store through the [`PositionLookup`]
//! trait, a point-in-time snapshot of "current position of node X". The store
//! carries no notion of frames, selection gestures, or undo; those belong to
//! whatever drives it.
//!
//! # Example
//!
//! ```rust
//! use glam::vec3;
//! use kintree_graph::{FamilyGraph, NodeShape, PositionLookup, TreeNode};
//!
//! // Two parents and a child.
//! let mut graph = FamilyGraph::new();
//! let mother = graph.insert(TreeNode::at(vec3(-1.0, 0.0, 0.0)));
//! let father = graph.insert(TreeNode {
//!     position: vec3(1.0, 0.0, 0.0),
//!     shape: NodeShape::Cube,
//!     ..Default::default()
//! });
//! let child = graph.insert(TreeNode::at(vec3(0.0, -2.0, 0.0)));
//!
//! let key = graph.add_family((mother, father), vec![child]).unwrap();
//! assert_eq!(graph.children_of(key), Some(&[child][..]));
//!
//! // Drag the child somewhere else; the stored position is authoritative.
//! graph.set_position(child, vec3(0.5, -2.5, 0.0));
//! assert_eq!(graph.position_of(child), Some(vec3(0.5, -2.5, 0.0)));
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs in positions. Debug builds may assert.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod graph;
pub mod motion;
pub mod types;

pub use graph::{FamilyGraph, PositionLookup};
pub use motion::damp;
pub use types::{Family, FamilyKey, GraphError, NodeFlags, NodeId, NodeShape, TreeNode};
