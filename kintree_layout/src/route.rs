// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child routing: straight drops where possible, right-angle elbows elsewhere.

use alloc::vec::Vec;
use glam::Vec3;
use kintree_graph::{FamilyKey, NodeId};

use crate::types::{ConnectorRole, ElbowKey, ElbowMarker, ElbowSite, Segment};

/// Segments and elbow markers routing a family's children.
///
/// Produced by [`route_children`]; order follows the supplied child order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChildRoutes {
    /// One or two segments per child, tagged with their role.
    pub segments: Vec<(ConnectorRole, Segment)>,
    /// Elbow markers at junctions, plus at the branch point when every child
    /// departs at an angle.
    pub elbows: Vec<ElbowMarker>,
}

/// Route connectors from `branch` to each child.
///
/// A child whose X and Z sit within `epsilon` of the branch point hangs
/// directly below it and gets a single straight segment. Any other child is
/// reached by a right angle: an arm out to the junction above the child, an
/// elbow marker there, and a drop down onto the child.
///
/// When at least one child was routed and none hung straight below, every
/// departing line bends at the branch point itself, so one more elbow is
/// emitted there to round the corner. With no children at all there is
/// nothing to round and no elbow appears.
///
/// Total for any branch point and any (possibly empty) child list;
/// deterministic in the supplied child order.
pub fn route_children(
    family: FamilyKey,
    branch: Vec3,
    children: &[(NodeId, Vec3)],
    epsilon: f32,
) -> ChildRoutes {
    let mut routes = ChildRoutes::default();
    let mut any_straight = false;

    for &(child, position) in children {
        let junction = Vec3::new(position.x, branch.y, position.z);
        let aligned = (position.x - branch.x).abs() <= epsilon
            && (position.z - branch.z).abs() <= epsilon;
        if aligned {
            routes
                .segments
                .push((ConnectorRole::Drop(child), Segment::new(branch, position)));
            any_straight = true;
        } else {
            routes
                .segments
                .push((ConnectorRole::Arm(child), Segment::new(branch, junction)));
            routes.elbows.push(ElbowMarker {
                key: ElbowKey {
                    family,
                    site: ElbowSite::Junction(child),
                },
                at: junction,
            });
            routes
                .segments
                .push((ConnectorRole::Drop(child), Segment::new(junction, position)));
        }
    }

    if !children.is_empty() && !any_straight {
        routes.elbows.push(ElbowMarker {
            key: ElbowKey {
                family,
                site: ElbowSite::BranchPoint,
            },
            at: branch,
        });
    }

    routes
}
