//! Expression assembly across every root of a snapshot

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::generator::{GeneratorOptions, TokenGenerator};
use crate::index::GraphIndex;
use crate::model::{Edge, Expression, Node};
use crate::roots::select_roots;

/// The `nodes`/`edges` pair the editor hands over on every change.
///
/// Either collection may be missing on the wire and is then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        GraphSnapshot { nodes, edges }
    }

    /// Recompute the expression list from scratch.
    pub fn expressions(
        &self,
        options: &GeneratorOptions,
    ) -> Result<Vec<Expression>, GenerateError> {
        assemble(&self.nodes, &self.edges, options)
    }
}

/// One [`Expression`] per root, in node-collection order.
///
/// Roots whose subtree produces no tokens still get an (empty) entry.
pub fn assemble(
    nodes: &[Node],
    edges: &[Edge],
    options: &GeneratorOptions,
) -> Result<Vec<Expression>, GenerateError> {
    let index = GraphIndex::build(nodes, edges);
    let generator = TokenGenerator::new(&index, options);

    let expressions = select_roots(nodes, edges)
        .into_iter()
        .map(|root| {
            Ok(Expression {
                root_id: root.id.clone(),
                tokens: generator.generate(&root.id)?,
            })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    tracing::debug!(
        "Assembled {} expressions from {} nodes, {} edges",
        expressions.len(),
        nodes.len(),
        edges.len()
    );

    Ok(expressions)
}
