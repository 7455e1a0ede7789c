// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Family layout basics.
//!
//! Build one family, lay it out, drag a child sideways, and lay it out again.
//!
//! Run:
//! - `cargo run -p kintree_demos --example family_basics`

use glam::vec3;
use kintree_graph::{FamilyGraph, NodeShape, TreeNode};
use kintree_layout::{LayoutParams, layout_forest};

fn main() {
    // Two parents with three children below them
    let mut graph = FamilyGraph::new();
    let mother = graph.insert(TreeNode {
        position: vec3(-1.0, 0.0, 0.0),
        label: Some("Grandmother".into()),
        ..Default::default()
    });
    let father = graph.insert(TreeNode {
        position: vec3(1.0, 0.0, 0.0),
        label: Some("Grandfather".into()),
        shape: NodeShape::Cube,
        ..Default::default()
    });
    let left = graph.insert(TreeNode::at(vec3(-2.0, -2.0, 0.0)));
    let center = graph.insert(TreeNode::at(vec3(0.0, -2.0, 0.0)));
    let right = graph.insert(TreeNode::at(vec3(2.0, -2.0, 0.0)));
    graph
        .add_family((mother, father), vec![left, center, right])
        .unwrap();

    let params = LayoutParams::default();
    let forest = layout_forest(graph.families(), &graph, &params);
    println!(
        "initial: {} segments, {} elbows",
        forest.segments().count(),
        forest.elbows().count()
    );
    for (key, segment) in forest.segments() {
        println!(
            "  {:?}: {:?} -> {:?} (len {:.2})",
            key.role,
            segment.from,
            segment.to,
            segment.length()
        );
    }

    // Drag the center child sideways; its straight drop becomes an elbow
    // route, and the branch point now needs its own rounding elbow.
    graph.set_position(center, vec3(1.0, -2.5, 0.0));
    let forest = layout_forest(graph.families(), &graph, &params);
    println!(
        "after drag: {} segments, {} elbows",
        forest.segments().count(),
        forest.elbows().count()
    );
}
