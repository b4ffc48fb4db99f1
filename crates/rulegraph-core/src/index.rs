//! Adjacency and id lookup over one node/edge snapshot

use crate::model::{Edge, Node};
use std::collections::HashMap;

/// Read-only index borrowed from a snapshot of nodes and edges.
///
/// Built once per generation pass and dropped with it; nothing is cached
/// between passes.
pub struct GraphIndex<'a> {
    nodes: HashMap<&'a str, &'a Node>,
    children: HashMap<&'a str, Vec<&'a str>>,
}

impl std::fmt::Debug for GraphIndex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphIndex")
            .field("node_count", &self.nodes.len())
            .field("parent_count", &self.children.len())
            .finish()
    }
}

impl<'a> GraphIndex<'a> {
    /// Index `nodes` by id and `edges` by source.
    ///
    /// Children keep edge order, duplicates included. When two nodes share
    /// an id the first one wins.
    pub fn build(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for node in nodes {
            by_id.entry(node.id.as_str()).or_insert(node);
        }

        let mut children: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        for edge in edges {
            children
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }

        GraphIndex {
            nodes: by_id,
            children,
        }
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.nodes.get(id).copied()
    }

    /// Child ids of `id` in edge order; empty when it has none.
    pub fn children(&self, id: &str) -> &[&'a str] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
