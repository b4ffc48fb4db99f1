//! Token generation for one node's subtree

use std::collections::HashSet;

use crate::error::GenerateError;
use crate::index::GraphIndex;
use crate::model::{CLOSE_PAREN, NodeKind, OPEN_PAREN, Token, TokenKind};

/// Placeholder text used for leaves that have nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Value of a content token whose label is empty or absent.
    pub content_fallback: String,
    /// Value of every todo token.
    pub todo_placeholder: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            content_fallback: "No rule entered".to_string(),
            todo_placeholder: "No type selected".to_string(),
        }
    }
}

/// A logic node whose children are still being emitted.
struct Frame<'i, 'a> {
    node_id: &'a str,
    operator: &'a str,
    children: &'i [&'a str],
    next: usize,
}

/// Walks a [`GraphIndex`] and turns subtrees into flat token sequences.
pub struct TokenGenerator<'i, 'a> {
    index: &'i GraphIndex<'a>,
    options: &'i GeneratorOptions,
}

impl<'i, 'a> TokenGenerator<'i, 'a> {
    pub fn new(index: &'i GraphIndex<'a>, options: &'i GeneratorOptions) -> Self {
        TokenGenerator { index, options }
    }

    /// Tokens for the subtree rooted at `node_id`.
    ///
    /// A logic node with children `c1..cn` yields
    /// `( tokens(c1) OP tokens(c2) ... OP tokens(cn) )`; a childless logic node,
    /// an unknown id and an unknown node type all yield nothing.
    ///
    /// Traversal uses an explicit stack, so depth is bounded by memory rather
    /// than by the calling thread's stack.
    pub fn generate(&self, node_id: &str) -> Result<Vec<Token>, GenerateError> {
        let mut out = Vec::new();
        // Logic nodes on the active path; a child shared by two branches is fine.
        let mut path = HashSet::new();
        let mut stack: Vec<Frame<'i, 'a>> = Vec::new();

        if let Some(frame) = self.enter(node_id, &mut path, &mut out)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.children.len() {
                out.push(Token::new(TokenKind::Logic, CLOSE_PAREN, frame.node_id));
                path.remove(frame.node_id);
                stack.pop();
                continue;
            }

            if frame.next > 0 {
                out.push(Token::new(TokenKind::Logic, frame.operator, frame.node_id));
            }
            let child = frame.children[frame.next];
            frame.next += 1;

            if let Some(child_frame) = self.enter(child, &mut path, &mut out)? {
                stack.push(child_frame);
            }
        }

        Ok(out)
    }

    /// Emit a leaf, or open a logic node and return its frame.
    fn enter(
        &self,
        node_id: &str,
        path: &mut HashSet<&'a str>,
        out: &mut Vec<Token>,
    ) -> Result<Option<Frame<'i, 'a>>, GenerateError> {
        let Some(node) = self.index.node(node_id) else {
            return Ok(None);
        };

        match &node.kind {
            NodeKind::Content { label } => {
                let value: &str = match label.as_deref() {
                    Some(label) if !label.is_empty() => label,
                    _ => &self.options.content_fallback,
                };
                out.push(Token::new(TokenKind::Content, value, &node.id));
                Ok(None)
            }
            NodeKind::Todo => {
                out.push(Token::new(
                    TokenKind::Todo,
                    &self.options.todo_placeholder,
                    &node.id,
                ));
                Ok(None)
            }
            NodeKind::Logic { operator } => {
                let children = self.index.children(&node.id);
                if children.is_empty() {
                    return Ok(None);
                }

                if !path.insert(node.id.as_str()) {
                    tracing::warn!("Cycle detected at logic node {}", node.id);
                    return Err(GenerateError::CycleDetected {
                        node_id: node.id.clone(),
                    });
                }

                out.push(Token::new(TokenKind::Logic, OPEN_PAREN, &node.id));
                Ok(Some(Frame {
                    node_id: node.id.as_str(),
                    operator: operator.as_str(),
                    children,
                    next: 0,
                }))
            }
            NodeKind::Unknown { type_name } => {
                tracing::debug!("Skipping node {} of unknown type '{}'", node.id, type_name);
                Ok(None)
            }
        }
    }
}
