//! Root discovery: nodes that no edge points at

use crate::model::{Edge, Node};
use std::collections::HashSet;

/// Nodes never referenced as an edge target, in node-collection order.
///
/// Every node being some edge's target (a pure cycle, for instance) yields
/// no roots at all.
pub fn select_roots<'a>(nodes: &'a [Node], edges: &[Edge]) -> Vec<&'a Node> {
    let targets: HashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();

    nodes
        .iter()
        .filter(|node| !targets.contains(node.id.as_str()))
        .collect()
}
