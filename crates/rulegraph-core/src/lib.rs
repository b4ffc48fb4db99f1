//! Rulegraph Core — trigger logic graph model and expression generator

pub mod model;
pub mod index;
pub mod roots;
pub mod generator;
pub mod assembler;
pub mod document;
pub mod error;


#[cfg(test)]
pub mod test_utils;

pub use model::{Node, NodeKind, Edge, Token, TokenKind, Expression, OPEN_PAREN, CLOSE_PAREN};
pub use index::GraphIndex;
pub use roots::select_roots;
pub use generator::{GeneratorOptions, TokenGenerator};
pub use assembler::{GraphSnapshot, assemble};
pub use document::{RuleDocument, TriggerLogic, VisualDetection, NO_TEMPORAL_THRESHOLD};
pub use error::{GenerateError, DocumentError};
