//! Prediction dispatch: resolve both drugs, pick the adapter, fall back to
//! cosine similarity when the model cannot answer, then bucket the result.

use crate::adapter::{ModelAdapter, Unavailable};
use crate::artifact::ModelHandle;
use ddix_core::{similarity, FeatureVector, ModelName, Result, RiskLevel};
use ddix_storage::FeatureStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Outcome of one prediction request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub drug1: String,
    pub drug2: String,
    /// Rounded to 4 decimal places
    #[serde(rename = "interaction_probability")]
    pub probability: f64,
    pub risk_level: RiskLevel,
    pub model_used: ModelName,
    /// Set whenever the answer came from the fallback heuristic
    pub message: Option<String>,
}

#[inline]
fn round4(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}

/// Request-independent scoring state. Built once at startup and shared
/// read-only between request handlers.
#[derive(Debug, Clone)]
pub struct Predictor {
    store: Arc<FeatureStore>,
    graphsage: ModelAdapter,
    edge_predictor: ModelAdapter,
}

impl Predictor {
    pub fn new(store: Arc<FeatureStore>, graphsage: ModelHandle, edge_predictor: ModelHandle) -> Self {
        Self {
            store,
            graphsage: ModelAdapter::new(ModelName::Graphsage, graphsage),
            edge_predictor: ModelAdapter::new(ModelName::EdgePredictor, edge_predictor),
        }
    }

    #[inline]
    pub fn store(&self) -> &FeatureStore {
        &self.store
    }

    #[inline]
    pub fn adapter(&self, name: ModelName) -> &ModelAdapter {
        match name {
            ModelName::Graphsage => &self.graphsage,
            ModelName::EdgePredictor => &self.edge_predictor,
        }
    }

    /// Score a drug pair with the named model.
    ///
    /// # Errors
    /// - `Error::StoreUninitialized` if no feature data was loaded
    /// - `Error::DrugNotFound` for the first unresolved drug, checked before the model name
    /// - `Error::InvalidModel` if `model` names neither adapter
    pub fn predict(&self, drug1: &str, drug2: &str, model: &str) -> Result<Prediction> {
        if !self.store.is_loaded() {
            return Err(ddix_core::Error::StoreUninitialized);
        }

        let a = self.store.resolve(drug1)?;
        let b = self.store.resolve(drug2)?;
        let name: ModelName = model.parse()?;

        let (probability, message) = self.score(name, a, b)?;

        Ok(Prediction {
            drug1: drug1.to_string(),
            drug2: drug2.to_string(),
            probability: round4(probability),
            risk_level: RiskLevel::classify(probability),
            model_used: name,
            message,
        })
    }

    /// Unrounded probability plus the fallback message, if any.
    fn score(
        &self,
        name: ModelName,
        a: &FeatureVector,
        b: &FeatureVector,
    ) -> Result<(f64, Option<String>)> {
        match self.adapter(name).infer(a, b) {
            Ok(p) => Ok((p, None)),
            Err(reason) => {
                debug!("{} unavailable ({}), using cosine similarity", name, reason);
                let p = similarity::score(a, b)?;
                Ok((p, Some(fallback_message(name, &reason))))
            }
        }
    }
}

fn fallback_message(name: ModelName, reason: &Unavailable) -> String {
    format!(
        "Fallback to cosine similarity ({} {})",
        name.display_name(),
        reason
    )
}
