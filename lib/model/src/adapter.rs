use crate::artifact::ModelHandle;
use crate::network::InferenceError;
use ddix_core::{FeatureVector, ModelName};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::warn;

/// Why a model could not score a pair. Always recoverable by falling back.
#[derive(Debug, Clone, PartialEq)]
pub enum Unavailable {
    NotLoaded,
    NoStructure,
    Fault(String),
}

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unavailable::NotLoaded => f.write_str("model not available"),
            Unavailable::NoStructure => f.write_str("model structure not available"),
            Unavailable::Fault(description) => write!(f, "model error: {}", description),
        }
    }
}

/// Logistic function
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Runs one named model over drug pairs.
#[derive(Debug, Clone)]
pub struct ModelAdapter {
    name: ModelName,
    handle: ModelHandle,
}

impl ModelAdapter {
    pub fn new(name: ModelName, handle: ModelHandle) -> Self {
        Self { name, handle }
    }

    #[inline]
    pub fn name(&self) -> ModelName {
        self.name
    }

    #[inline]
    pub fn handle(&self) -> &ModelHandle {
        &self.handle
    }

    /// Score a pair with the model: `σ(model(a ++ b))`.
    ///
    /// Faults inside the model, panics and non-finite logits included, come
    /// back as `Unavailable::Fault` instead of escaping.
    pub fn infer(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64, Unavailable> {
        let model = match &self.handle {
            ModelHandle::Unloaded => return Err(Unavailable::NotLoaded),
            ModelHandle::LoadedUnusable => return Err(Unavailable::NoStructure),
            ModelHandle::LoadedUsable(model) => model,
        };

        let input = a.concat(b);
        let outcome = catch_unwind(AssertUnwindSafe(|| model.forward(&input)));

        let fault = match outcome {
            Ok(Ok(logit)) if logit.is_finite() => return Ok(sigmoid(logit)),
            Ok(Ok(_)) => InferenceError::NonFinite.to_string(),
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        warn!("Error using {} model: {}", self.name.display_name(), fault);
        Err(Unavailable::Fault(fault))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "inference panicked".to_string()
    }
}
