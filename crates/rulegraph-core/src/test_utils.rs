//! Test utilities for rulegraph-core

use crate::model::{Edge, Node};
use crate::assembler::GraphSnapshot;

/// Fluent builder for small logic graphs.
#[derive(Default)]
pub struct GraphFixture {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logic(mut self, id: &str, operator: &str) -> Self {
        self.nodes.push(Node::logic(id, operator));
        self
    }

    pub fn content(mut self, id: &str, label: &str) -> Self {
        self.nodes.push(Node::content(id, label));
        self
    }

    pub fn todo(mut self, id: &str) -> Self {
        self.nodes.push(Node::todo(id));
        self
    }

    /// Add `source -> target`, with an edge id derived from its position.
    pub fn edge(mut self, source: &str, target: &str) -> Self {
        let id = format!("e{}", self.edges.len() + 1);
        self.edges.push(Edge::new(id, source, target));
        self
    }

    pub fn build(self) -> GraphSnapshot {
        GraphSnapshot::new(self.nodes, self.edges)
    }
}

/// A two-level rule: `((a OR b) AND c AND todo)`.
pub fn nested_rule() -> GraphSnapshot {
    GraphFixture::new()
        .logic("and", "AND")
        .logic("or", "OR")
        .content("a", "person detected")
        .content("b", "vehicle detected")
        .content("c", "zone entered")
        .todo("t")
        .edge("and", "or")
        .edge("and", "c")
        .edge("and", "t")
        .edge("or", "a")
        .edge("or", "b")
        .build()
}

/// Check that structural parentheses are balanced and properly nested.
pub fn parens_balanced(tokens: &[crate::model::Token]) -> bool {
    let mut depth = 0usize;
    for token in tokens {
        if token.is_open_paren() {
            depth += 1;
        } else if token.is_close_paren() {
            if depth == 0 {
                return false;
            }
            depth -= 1;
        }
    }
    depth == 0
}
