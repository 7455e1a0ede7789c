// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cluster ring placement.
//!
//! Lay out the same family three times and anchor each copy on a face of a
//! triangular ring around a shared vertical axis.
//!
//! Run:
//! - `cargo run -p kintree_demos --example cluster_ring`

use glam::vec3;
use kintree_graph::{FamilyGraph, TreeNode};
use kintree_layout::{ClusterRing, LayoutParams, layout_forest};

fn main() {
    let mut graph = FamilyGraph::new();
    let p1 = graph.insert(TreeNode::at(vec3(-1.0, 0.0, 0.0)));
    let p2 = graph.insert(TreeNode::at(vec3(1.0, 0.0, 0.0)));
    let c1 = graph.insert(TreeNode::at(vec3(-1.5, -2.0, 0.0)));
    let c2 = graph.insert(TreeNode::at(vec3(1.5, -2.0, 0.0)));
    graph.add_family((p1, p2), vec![c1, c2]).unwrap();

    let flat = layout_forest(graph.families(), &graph, &LayoutParams::default());

    let ring = ClusterRing::new(7.0, 3);
    println!("ring inradius: {:.3}", ring.inradius());
    for face in 0..ring.count {
        let anchored = flat.transformed(&ring.anchor(face));
        let branch = anchored.families[0].branch_point;
        println!(
            "face {face}: angle {:.2} rad, branch point at {:?}",
            ring.angle(face),
            branch
        );
    }
}
