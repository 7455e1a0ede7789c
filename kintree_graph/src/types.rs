// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the family graph: node identifiers, shapes, flags, nodes, and families.

use alloc::string::String;
use alloc::vec::Vec;
use glam::Vec3;

/// Identifier for a node in the graph.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Stale `NodeId`s never alias a different live node because the generation must match.
/// Use [`FamilyGraph::is_alive`](crate::FamilyGraph::is_alive) to check liveness.
///
/// ### Ordering
///
/// `NodeId` is totally ordered (slot index, then generation). The order carries no
/// meaning beyond being deterministic; layout code uses it to break ties stably.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Mesh shape a node is rendered with.
///
/// A closed set: the renderer draws spheres and cubes and nothing else.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum NodeShape {
    /// Rendered as a sphere.
    #[default]
    Sphere,
    /// Rendered as a cube.
    Cube,
}

bitflags::bitflags! {
    /// Node flags controlling visibility and selectability.
    ///
    /// Carried for the embedding renderer and input layer; connector layout
    /// ignores them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible (participates in rendering).
        const VISIBLE    = 0b0000_0001;
        /// Node can be selected and dragged.
        const SELECTABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::SELECTABLE
    }
}

/// A person in the tree: position, optional label, shape, flags, and an
/// optional in-progress animated move.
///
/// The node's `position` is always the authoritative current position; while
/// `target` is set the node is mid-animation and an embedder advances
/// `position` toward `target` between renders (see [`crate::motion`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeNode {
    /// Current position in world units.
    pub position: Vec3,
    /// Optional display label.
    pub label: Option<String>,
    /// Mesh shape for rendering.
    pub shape: NodeShape,
    /// Visibility and selectability flags.
    pub flags: NodeFlags,
    /// Target of an in-progress animated move, if any.
    pub target: Option<Vec3>,
}

impl TreeNode {
    /// Create a node at `position` with all other fields defaulted.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Whether the node is currently mid-animation.
    pub const fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}

/// Identity of a family: its parent pair, in `NodeId` order.
///
/// The pair is unordered in meaning; normalizing it makes the key independent
/// of the order the parents were supplied in. Used as the per-family namespace
/// for connector output keys.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FamilyKey(NodeId, NodeId);

impl FamilyKey {
    /// Build the key for an (unordered) parent pair.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if b < a { Self(b, a) } else { Self(a, b) }
    }

    /// The parent pair in `NodeId` order.
    pub const fn parents(self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }
}

/// A parent pair plus their children, the unit of connector layout.
///
/// Children keep their insertion order; that order is the deterministic
/// processing order downstream consumers rely on for stable output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Family {
    /// The two parents, as supplied.
    pub parents: (NodeId, NodeId),
    /// Children in insertion order (possibly empty).
    pub children: Vec<NodeId>,
}

impl Family {
    /// The normalized identity of this family.
    pub fn key(&self) -> FamilyKey {
        FamilyKey::new(self.parents.0, self.parents.1)
    }
}

/// Errors from mutating the family graph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The referenced node is not alive in this graph.
    #[error("node {0:?} is not alive")]
    DeadNode(NodeId),
    /// Family parents must be two distinct nodes.
    #[error("family parents must be two distinct nodes, got {0:?} twice")]
    IdenticalParents(NodeId),
    /// A family with the same parent pair already exists.
    #[error("a family with parents {0:?} already exists")]
    DuplicateFamily(FamilyKey),
    /// A child may belong to at most one family.
    #[error("node {0:?} already belongs to a family")]
    ChildAlreadyClaimed(NodeId),
    /// A node cannot appear as both parent and child of the same family.
    #[error("node {0:?} cannot be both parent and child of one family")]
    ParentAsChild(NodeId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_key_is_order_independent() {
        let a = NodeId::new(0, 1);
        let b = NodeId::new(3, 1);
        assert_eq!(FamilyKey::new(a, b), FamilyKey::new(b, a));
        assert_eq!(FamilyKey::new(a, b).parents(), (a, b));
    }

    #[test]
    fn node_id_ordering_is_slot_then_generation() {
        assert!(NodeId::new(0, 9) < NodeId::new(1, 1));
        assert!(NodeId::new(2, 1) < NodeId::new(2, 2));
    }

    #[test]
    fn default_node_is_visible_sphere_at_origin() {
        let n = TreeNode::default();
        assert_eq!(n.position, Vec3::ZERO);
        assert_eq!(n.shape, NodeShape::Sphere);
        assert!(n.flags.contains(NodeFlags::VISIBLE));
        assert!(!n.is_animating());
    }
}
