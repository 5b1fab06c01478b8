//! Configuration types for infinite stream evaluation and rendering

use serde::{Deserialize, Serialize};

use crate::error::StreamResult;

/// How a stream's generating step behaves when a node is forced repeatedly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    /// Every force re-runs the step from scratch
    #[default]
    Recompute,
    /// The first force of a node caches its `(head, tail)` pair
    Memoize,
}

/// Diagnostic rendering of a stream prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub preview: usize,
    pub ellipsis: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preview: 1,
            ellipsis: "...".to_string(),
        }
    }
}

impl RenderConfig {
    /// Set how many leading elements are shown
    pub fn preview(mut self, preview: usize) -> Self {
        self.preview = preview;
        self
    }

    /// Set the marker printed after the preview
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }
}

/// Top-level stream configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub evaluation: Evaluation,
    pub render: RenderConfig,
}

impl StreamConfig {
    /// Create a new configuration with recomputing evaluation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation strategy
    pub fn evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Set the rendering options
    pub fn render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> StreamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> StreamResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
