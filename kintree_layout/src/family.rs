// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout assembly: one family's connectors, and whole forests of them.

use alloc::vec::Vec;
use glam::{Affine3A, Vec3};
use kintree_graph::{Family, FamilyKey, NodeId, PositionLookup};

use crate::branch::branch_point;
use crate::error::LayoutError;
use crate::params::LayoutParams;
use crate::parents::{ParentConnector, parent_connector};
use crate::route::route_children;
use crate::types::{ConnectorKey, ConnectorRole, ElbowMarker, Segment};

/// The complete connector geometry of one family.
///
/// Everything a renderer needs to draw the family: the parent pair lines, the
/// vertical drop, the per-child runs, and the elbow markers, all keyed under
/// the family's identity for stable diffing.
#[derive(Clone, Debug, PartialEq)]
pub struct FamilyLayout {
    /// Identity namespace for all keys below.
    pub family: FamilyKey,
    /// The two parallel parent lines.
    pub parents: ParentConnector,
    /// The point the children fan out from.
    pub branch_point: Vec3,
    /// Drop from the parent connector down to the branch point. `None` when
    /// the branch point collapses onto the connector midpoint (in particular
    /// for a childless family).
    pub vertical: Option<Segment>,
    /// Child runs in child order, tagged with their roles.
    pub child_segments: Vec<(ConnectorRole, Segment)>,
    /// Elbow markers for this family.
    pub elbows: Vec<ElbowMarker>,
}

impl FamilyLayout {
    /// All segments of this family, keyed, in stable order: parent top,
    /// parent bottom, vertical drop, then child runs in child order.
    pub fn segments(&self) -> impl Iterator<Item = (ConnectorKey, Segment)> + '_ {
        let family = self.family;
        [
            (ConnectorRole::ParentTop, self.parents.top),
            (ConnectorRole::ParentBottom, self.parents.bottom),
        ]
        .into_iter()
        .chain(self.vertical.map(|s| (ConnectorRole::BranchDrop, s)))
        .chain(self.child_segments.iter().copied())
        .map(move |(role, segment)| (ConnectorKey { family, role }, segment))
    }

    /// Map every point of the layout through `tf`.
    #[must_use]
    pub fn transformed(&self, tf: &Affine3A) -> Self {
        Self {
            family: self.family,
            parents: ParentConnector {
                top: self.parents.top.transformed(tf),
                bottom: self.parents.bottom.transformed(tf),
            },
            branch_point: tf.transform_point3(self.branch_point),
            vertical: self.vertical.map(|s| s.transformed(tf)),
            child_segments: self
                .child_segments
                .iter()
                .map(|&(role, s)| (role, s.transformed(tf)))
                .collect(),
            elbows: self.elbows.iter().map(|e| e.transformed(tf)).collect(),
        }
    }
}

/// Connector geometry for a whole forest, one entry per laid-out family.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForestLayout {
    /// Per-family layouts in input order.
    pub families: Vec<FamilyLayout>,
}

impl ForestLayout {
    /// Number of laid-out families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether nothing was laid out.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// All segments across the forest, keyed.
    pub fn segments(&self) -> impl Iterator<Item = (ConnectorKey, Segment)> + '_ {
        self.families.iter().flat_map(FamilyLayout::segments)
    }

    /// All elbow markers across the forest.
    pub fn elbows(&self) -> impl Iterator<Item = &ElbowMarker> {
        self.families.iter().flat_map(|f| f.elbows.iter())
    }

    /// Map every point of the forest through `tf`.
    #[must_use]
    pub fn transformed(&self, tf: &Affine3A) -> Self {
        Self {
            families: self.families.iter().map(|f| f.transformed(tf)).collect(),
        }
    }
}

/// Pick the left parent: smaller X first, ties broken by id so the top/bottom
/// assignment cannot flicker between frames when positions are nearly equal.
fn order_parents(a: (NodeId, Vec3), b: (NodeId, Vec3)) -> ((NodeId, Vec3), (NodeId, Vec3)) {
    if b.1.x < a.1.x || (b.1.x == a.1.x && b.0 < a.0) {
        (b, a)
    } else {
        (a, b)
    }
}

/// Lay out one family's connectors from a position snapshot.
///
/// Pure and stateless: identical inputs produce identical outputs, so callers
/// may invoke it per frame or per state change without drift from the
/// authoritative positions.
///
/// Errors are surfaced rather than patched over here; [`layout_forest`]
/// applies the skip-and-log policy for interactive use.
pub fn layout_family<P: PositionLookup>(
    family: &Family,
    positions: &P,
    params: &LayoutParams,
) -> Result<FamilyLayout, LayoutError> {
    let key = family.key();
    let lookup = |id: NodeId| {
        positions
            .position_of(id)
            .ok_or(LayoutError::MissingPosition(id))
    };

    let (p1, p2) = family.parents;
    let (left, right) = order_parents((p1, lookup(p1)?), (p2, lookup(p2)?));
    let parents = parent_connector(left.1, right.1, params.parent_gap, params.align_epsilon)?;

    let children = family
        .children
        .iter()
        .map(|&id| Ok((id, lookup(id)?)))
        .collect::<Result<Vec<_>, LayoutError>>()?;

    let midpoint = parents.bottom_midpoint();
    let branch = branch_point(
        midpoint,
        children.iter().map(|&(_, p)| p),
        params.branch_clearance,
    );
    let vertical = (midpoint.distance_squared(branch)
        > params.align_epsilon * params.align_epsilon)
        .then(|| Segment::new(midpoint, branch));

    let routes = route_children(key, branch, &children, params.align_epsilon);

    Ok(FamilyLayout {
        family: key,
        parents,
        branch_point: branch,
        vertical,
        child_segments: routes.segments,
        elbows: routes.elbows,
    })
}

/// Lay out every family in the forest.
///
/// Families are independent; each is laid out from the same snapshot and the
/// results are concatenated in input order. A family that cannot be laid out
/// (coincident parents, stale node id) is logged and skipped so one bad
/// family never blanks the rest of the scene.
pub fn layout_forest<P: PositionLookup>(
    families: &[Family],
    positions: &P,
    params: &LayoutParams,
) -> ForestLayout {
    let mut forest = ForestLayout::default();
    for family in families {
        match layout_family(family, positions, params) {
            Ok(layout) => forest.families.push(layout),
            Err(err) => {
                log::warn!("skipping family {:?}: {err}", family.key());
            }
        }
    }
    forest
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use glam::vec3;
    use kintree_graph::{FamilyGraph, TreeNode};

    use crate::types::ElbowSite;

    /// Two parents a unit either side of the origin, three children below:
    /// one straight under the branch point, one out to each side.
    fn reference_scene() -> (FamilyGraph, FamilyKey) {
        let mut g = FamilyGraph::new();
        let p1 = g.insert(TreeNode::at(vec3(-1.0, 0.0, 0.0)));
        let p2 = g.insert(TreeNode::at(vec3(1.0, 0.0, 0.0)));
        let c1 = g.insert(TreeNode::at(vec3(-2.0, -2.0, 0.0)));
        let c2 = g.insert(TreeNode::at(vec3(0.0, -2.0, 0.0)));
        let c3 = g.insert(TreeNode::at(vec3(2.0, -2.0, 0.0)));
        let key = g.add_family((p1, p2), vec![c1, c2, c3]).unwrap();
        (g, key)
    }

    #[test]
    fn reference_scene_end_to_end() {
        let (g, key) = reference_scene();
        let params = LayoutParams::default();
        let layout = layout_family(g.family(key).unwrap(), &g, &params).unwrap();

        // Parent lines at y = ±0.1.
        assert_eq!(
            layout.parents.top,
            Segment::new(vec3(-1.0, 0.1, 0.0), vec3(1.0, 0.1, 0.0))
        );
        assert_eq!(
            layout.parents.bottom,
            Segment::new(vec3(-1.0, -0.1, 0.0), vec3(1.0, -0.1, 0.0))
        );

        // Branch point 0.65 above the highest child, under the midpoint.
        assert_eq!(layout.branch_point, vec3(0.0, -1.35, 0.0));
        assert_eq!(
            layout.vertical,
            Some(Segment::new(vec3(0.0, -0.1, 0.0), vec3(0.0, -1.35, 0.0)))
        );

        // Side children: arm + drop each. Center child: one straight drop.
        assert_eq!(layout.child_segments.len(), 5);

        // The straight center child suppresses the branch-point elbow.
        assert_eq!(layout.elbows.len(), 2);
        assert!(layout
            .elbows
            .iter()
            .all(|e| matches!(e.key.site, ElbowSite::Junction(_))));

        // 2 parent lines + 1 vertical + 5 child segments, all keyed.
        assert_eq!(layout.segments().count(), 8);
    }

    #[test]
    fn parent_tuple_order_does_not_change_the_layout() {
        let mut g = FamilyGraph::new();
        let a = g.insert(TreeNode::at(vec3(-1.0, 0.0, 0.0)));
        let b = g.insert(TreeNode::at(vec3(1.0, 0.0, 0.0)));
        let c = g.insert(TreeNode::at(vec3(0.0, -2.0, 0.0)));
        let fam_ab = Family {
            parents: (a, b),
            children: vec![c],
        };
        let fam_ba = Family {
            parents: (b, a),
            children: vec![c],
        };
        let params = LayoutParams::default();
        assert_eq!(
            layout_family(&fam_ab, &g, &params).unwrap(),
            layout_family(&fam_ba, &g, &params).unwrap()
        );
    }

    #[test]
    fn equal_x_parents_break_the_tie_by_id() {
        let mut g = FamilyGraph::new();
        let a = g.insert(TreeNode::at(vec3(0.0, 1.0, 0.0)));
        let b = g.insert(TreeNode::at(vec3(0.0, -1.0, 0.0)));
        let fam = Family {
            parents: (b, a),
            children: vec![],
        };
        let layout = layout_family(&fam, &g, &LayoutParams::default()).unwrap();
        // The lower-id node (a) is treated as left, so the connector runs
        // from a's position toward b's.
        assert_eq!(layout.parents.top.from.y, 1.0);
        assert_eq!(layout.parents.top.to.y, -1.0);
    }

    #[test]
    fn childless_family_is_just_the_parent_lines() {
        let mut g = FamilyGraph::new();
        let a = g.insert(TreeNode::at(vec3(-1.0, 0.0, 0.0)));
        let b = g.insert(TreeNode::at(vec3(1.0, 0.0, 0.0)));
        let key = g.add_family((a, b), vec![]).unwrap();
        let layout = layout_family(g.family(key).unwrap(), &g, &LayoutParams::default()).unwrap();

        assert_eq!(layout.branch_point, layout.parents.bottom_midpoint());
        assert_eq!(layout.vertical, None);
        assert!(layout.child_segments.is_empty());
        assert!(layout.elbows.is_empty());
        assert_eq!(layout.segments().count(), 2);
    }

    #[test]
    fn missing_position_is_an_error_for_one_family() {
        let mut g = FamilyGraph::new();
        let a = g.insert(TreeNode::at(vec3(-1.0, 0.0, 0.0)));
        let b = g.insert(TreeNode::at(vec3(1.0, 0.0, 0.0)));
        let c = g.insert(TreeNode::at(vec3(0.0, -2.0, 0.0)));
        let key = g.add_family((a, b), vec![c]).unwrap();
        let family = g.family(key).unwrap().clone();
        g.remove(c);
        assert_eq!(
            layout_family(&family, &g, &LayoutParams::default()),
            Err(LayoutError::MissingPosition(c))
        );
    }

    #[test]
    fn forest_skips_unlayoutable_families() {
        let mut g = FamilyGraph::new();
        // A healthy family.
        let a = g.insert(TreeNode::at(vec3(-1.0, 0.0, 0.0)));
        let b = g.insert(TreeNode::at(vec3(1.0, 0.0, 0.0)));
        g.add_family((a, b), vec![]).unwrap();
        // Parents dragged onto the same spot: no connector direction.
        let c = g.insert(TreeNode::at(vec3(4.0, 0.0, 0.0)));
        let d = g.insert(TreeNode::at(vec3(4.0, 0.0, 0.0)));
        g.add_family((c, d), vec![]).unwrap();

        let forest = layout_forest(g.families(), &g, &LayoutParams::default());
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.families[0].family, FamilyKey::new(a, b));
    }
}
