//! Core data structures for the trigger logic graph

use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal value of an opening parenthesis token.
pub const OPEN_PAREN: &str = "(";

/// Literal value of a closing parenthesis token.
pub const CLOSE_PAREN: &str = ")";

/// A vertex in the logic graph.
///
/// On the wire a node looks like the editor's flow nodes:
/// `{ "id": "1", "type": "logic", "data": { "logicType": "AND", "label": "" } }`.
/// Extra editor fields (position, style, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
}

/// Discriminates what a node represents, carrying only the payload that kind uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    // ── Structural ──────────────────────────────────────────
    /// Boolean connective over the node's children. The operator text is
    /// kept verbatim, usually `AND` or `OR`, possibly empty.
    Logic { operator: String },

    // ── Leaves ──────────────────────────────────────────────
    /// One atomic rule condition.
    Content { label: Option<String> },
    /// A condition the user has not configured yet.
    Todo,

    // ── Fallback ────────────────────────────────────────────
    /// Any `type` this version does not understand. Contributes nothing.
    Unknown { type_name: String },
}

impl Node {
    pub fn logic(id: impl Into<String>, operator: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            kind: NodeKind::Logic {
                operator: operator.into(),
            },
        }
    }

    pub fn content(id: impl Into<String>, label: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            kind: NodeKind::Content {
                label: Some(label.into()),
            },
        }
    }

    pub fn todo(id: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            kind: NodeKind::Todo,
        }
    }

    /// The `type` string this node carries on the wire.
    pub fn type_name(&self) -> &str {
        match &self.kind {
            NodeKind::Logic { .. } => "logic",
            NodeKind::Content { .. } => "content",
            NodeKind::Todo => "todo",
            NodeKind::Unknown { type_name } => type_name,
        }
    }
}

/// A directed arc `source -> target` (parent to child).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Render style of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A parenthesis or an operator.
    Logic,
    /// A leaf rule description.
    Content,
    /// An unconfigured leaf placeholder.
    Todo,
}

/// One unit of rendered output, tagged with the node it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    #[serde(rename = "nodeId")]
    pub node_id: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, node_id: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
            node_id: node_id.into(),
        }
    }

    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Logic && self.value == OPEN_PAREN
    }

    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Logic && self.value == CLOSE_PAREN
    }
}

/// The token stream generated for one root node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    #[serde(rename = "rootId")]
    pub root_id: String,
    pub tokens: Vec<Token>,
}

impl Expression {
    /// True when the root contributed no tokens (empty logic subtree, unknown type).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token values joined by single spaces.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&token.value)?;
        }
        Ok(())
    }
}

// ── Wire representation ─────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct RawNode {
    id: String,
    #[serde(rename = "type", default)]
    node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<RawNodeData>,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNodeData {
    #[serde(default)]
    logic_type: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let data = raw.data.unwrap_or_default();
        let kind = match raw.node_type.as_str() {
            "logic" => NodeKind::Logic {
                operator: data.logic_type.unwrap_or_default(),
            },
            "content" => NodeKind::Content { label: data.label },
            "todo" => NodeKind::Todo,
            _ => NodeKind::Unknown {
                type_name: raw.node_type,
            },
        };
        Node { id: raw.id, kind }
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        let (node_type, data) = match node.kind {
            NodeKind::Logic { operator } => (
                "logic".to_string(),
                Some(RawNodeData {
                    logic_type: Some(operator),
                    label: Some(String::new()),
                }),
            ),
            NodeKind::Content { label } => (
                "content".to_string(),
                Some(RawNodeData {
                    logic_type: Some(String::new()),
                    label: Some(label.unwrap_or_default()),
                }),
            ),
            NodeKind::Todo => ("todo".to_string(), None),
            NodeKind::Unknown { type_name } => (type_name, None),
        };
        RawNode {
            id: node.id,
            node_type,
            data,
        }
    }
}
