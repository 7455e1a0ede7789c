// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The in-memory family graph: an arena of nodes plus the family list.

use alloc::string::String;
use alloc::vec::Vec;
use glam::Vec3;

use crate::types::{Family, FamilyKey, GraphError, NodeFlags, NodeId, TreeNode};

/// Source of truth for current node positions.
///
/// Connector layout is generic over this trait so any store can feed it; the
/// contract is a point-in-time snapshot, re-queried after every state change.
/// [`FamilyGraph`] implements it, as does `BTreeMap<NodeId, Vec3>` for tests
/// and small embedders.
pub trait PositionLookup {
    /// Current position of `id`, or `None` if the node is unknown or stale.
    fn position_of(&self, id: NodeId) -> Option<Vec3>;
}

impl PositionLookup for alloc::collections::BTreeMap<NodeId, Vec3> {
    #[inline]
    fn position_of(&self, id: NodeId) -> Option<Vec3> {
        self.get(&id).copied()
    }
}

/// An in-memory store of tree nodes and the families connecting them.
///
/// Nodes live in a slot arena with per-slot generation counters, so removals
/// are O(1) and stale [`NodeId`]s are detectable. Families are kept in
/// insertion order; [`FamilyGraph::add_family`] enforces the structural
/// invariants every consumer of the graph is allowed to assume:
///
/// - parents are two distinct, live nodes;
/// - the parent pair is unique per family;
/// - a child belongs to at most one family, and never to one it parents.
///
/// The store holds data only. Selection, dragging, and undo live in whatever
/// drives this store; rendering lives in whatever consumes it.
#[derive(Clone)]
pub struct FamilyGraph {
    nodes: Vec<Option<TreeNode>>, // slots
    generations: Vec<u32>,        // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    families: Vec<Family>,
}

impl core::fmt::Debug for FamilyGraph {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("FamilyGraph")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("families", &self.families.len())
            .finish_non_exhaustive()
    }
}

impl Default for FamilyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            families: Vec::new(),
        }
    }

    /// Insert a node, returning its id.
    pub fn insert(&mut self, node: TreeNode) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node);
            (idx, generation)
        } else {
            self.nodes.push(Some(node));
            self.generations.push(1);
            (self.nodes.len() - 1, 1)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(idx as u32, generation);
        id
    }

    /// Remove a node.
    ///
    /// Any family the node parents is removed with it; any family the node is
    /// a child of keeps its remaining children. Removing a stale id is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.families
            .retain(|f| f.parents.0 != id && f.parents.1 != id);
        for family in &mut self.families {
            family.children.retain(|&c| c != id);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Whether `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
            && self.generations[id.idx()] == id.1
            && self.nodes[id.idx()].is_some()
    }

    /// Borrow a node, or `None` if `id` is stale.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes[id.idx()].as_ref()
    }

    /// Mutably borrow a node, or `None` if `id` is stale.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes[id.idx()].as_mut()
    }

    /// Update a node's position. Stale ids are ignored.
    pub fn set_position(&mut self, id: NodeId, position: Vec3) {
        if let Some(n) = self.node_mut(id) {
            n.position = position;
        }
    }

    /// Update a node's label. Stale ids are ignored.
    pub fn set_label(&mut self, id: NodeId, label: Option<String>) {
        if let Some(n) = self.node_mut(id) {
            n.label = label;
        }
    }

    /// Update a node's flags. Stale ids are ignored.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_mut(id) {
            n.flags = flags;
        }
    }

    /// Start an animated move of `id` toward `target`. Stale ids are ignored.
    pub fn set_target(&mut self, id: NodeId, target: Vec3) {
        if let Some(n) = self.node_mut(id) {
            n.target = Some(target);
        }
    }

    /// Cancel an in-progress animated move, leaving the node where it is.
    pub fn clear_target(&mut self, id: NodeId) {
        if let Some(n) = self.node_mut(id) {
            n.target = None;
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Whether the graph has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over live nodes in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes.iter().enumerate().filter_map(|(idx, slot)| {
            let node = slot.as_ref()?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            let id = NodeId::new(idx as u32, self.generations[idx]);
            Some((id, node))
        })
    }

    /// Register a family, validating the graph invariants.
    ///
    /// `parents` is an unordered pair; `children` keep the supplied order.
    pub fn add_family(
        &mut self,
        parents: (NodeId, NodeId),
        children: Vec<NodeId>,
    ) -> Result<FamilyKey, GraphError> {
        let (a, b) = parents;
        if a == b {
            return Err(GraphError::IdenticalParents(a));
        }
        for id in [a, b] {
            if !self.is_alive(id) {
                return Err(GraphError::DeadNode(id));
            }
        }
        let key = FamilyKey::new(a, b);
        if self.families.iter().any(|f| f.key() == key) {
            return Err(GraphError::DuplicateFamily(key));
        }
        for &child in &children {
            if !self.is_alive(child) {
                return Err(GraphError::DeadNode(child));
            }
            if child == a || child == b {
                return Err(GraphError::ParentAsChild(child));
            }
            if self.families.iter().any(|f| f.children.contains(&child)) {
                return Err(GraphError::ChildAlreadyClaimed(child));
            }
        }
        // Duplicates within the new child list would claim the child twice.
        for (i, &child) in children.iter().enumerate() {
            if children[..i].contains(&child) {
                return Err(GraphError::ChildAlreadyClaimed(child));
            }
        }
        self.families.push(Family {
            parents: (a, b),
            children,
        });
        Ok(key)
    }

    /// Remove a family by key, leaving its member nodes in place.
    pub fn remove_family(&mut self, key: FamilyKey) {
        self.families.retain(|f| f.key() != key);
    }

    /// Families in insertion order.
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Borrow a family by key.
    pub fn family(&self, key: FamilyKey) -> Option<&Family> {
        self.families.iter().find(|f| f.key() == key)
    }

    /// Children of the family identified by `key`, in insertion order.
    pub fn children_of(&self, key: FamilyKey) -> Option<&[NodeId]> {
        self.family(key).map(|f| f.children.as_slice())
    }
}

impl PositionLookup for FamilyGraph {
    #[inline]
    fn position_of(&self, id: NodeId) -> Option<Vec3> {
        self.node(id).map(|n| n.position)
    }
}
