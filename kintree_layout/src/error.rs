// Copyright 2026 the Kintree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout error taxonomy.

use kintree_graph::NodeId;

/// Errors from laying out a single family.
///
/// None of these are fatal to a frame: the forest assembler logs and skips
/// the offending family so an interactive drag never aborts rendering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The two parent positions coincide, so the connector direction (and its
    /// perpendicular) is undefined.
    #[error("parent positions coincide; connector direction is undefined")]
    DegenerateParents,
    /// A referenced node has no position in the supplied lookup (stale id or
    /// inconsistent snapshot).
    #[error("no position for node {0:?}")]
    MissingPosition(NodeId),
}
