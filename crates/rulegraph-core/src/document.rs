//! The rule document the editor produces around a trigger logic graph

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assembler::assemble;
use crate::error::{DocumentError, GenerateError};
use crate::generator::GeneratorOptions;
use crate::model::{Edge, Expression, Node};

/// Sentinel for "the rule has no duration requirement".
pub const NO_TEMPORAL_THRESHOLD: i64 = -1;

/// A complete rule: what to look for, when it triggers, and what to say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDocument {
    pub visual_detection: VisualDetection,
    pub trigger_logic: TriggerLogic,
    pub alert_message: String,
}

/// Objects the vision model should focus on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualDetection {
    #[serde(default)]
    pub target_objects: Vec<String>,
}

/// The logic graph plus how long it must hold before the rule fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerLogic {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default = "no_threshold")]
    pub temporal_threshold_seconds: i64,
}

fn no_threshold() -> i64 {
    NO_TEMPORAL_THRESHOLD
}

impl TriggerLogic {
    /// How long the condition must hold, or `None` when there is no requirement.
    pub fn temporal_threshold(&self) -> Option<Duration> {
        u64::try_from(self.temporal_threshold_seconds)
            .ok()
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }

    pub fn expressions(
        &self,
        options: &GeneratorOptions,
    ) -> Result<Vec<Expression>, GenerateError> {
        assemble(&self.nodes, &self.edges, options)
    }
}

impl RuleDocument {
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded rule document: {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn expressions(
        &self,
        options: &GeneratorOptions,
    ) -> Result<Vec<Expression>, GenerateError> {
        self.trigger_logic.expressions(options)
    }
}
