use crate::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Selector for one of the two learned pair scorers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelName {
    #[default]
    Graphsage,
    EdgePredictor,
}

impl ModelName {
    pub const ALL: [ModelName; 2] = [ModelName::Graphsage, ModelName::EdgePredictor];

    /// Wire name, as accepted in requests
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Graphsage => "graphsage",
            ModelName::EdgePredictor => "edge_predictor",
        }
    }

    /// Human-readable name used in fallback messages
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelName::Graphsage => "GraphSAGE",
            ModelName::EdgePredictor => "Edge Predictor",
        }
    }
}

impl FromStr for ModelName {
    type Err = Error;

    /// Exact match only; `"GraphSAGE"` is not a valid selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graphsage" => Ok(ModelName::Graphsage),
            "edge_predictor" => Ok(ModelName::EdgePredictor),
            other => Err(Error::InvalidModel(other.to_string())),
        }
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
