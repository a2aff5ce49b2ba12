//! Loading of optional model artifacts.
//!
//! An artifact is a JSON document. One carrying a `layers` array is a
//! [`DenseNetwork`] and can be invoked; any other JSON (for example a bare
//! parameter dictionary) is kept as loaded-but-unusable.

use crate::network::{DenseNetwork, InferenceModel};
use ddix_core::{Error, Result};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Capability of a model, decided once at load time.
#[derive(Clone, Default)]
pub enum ModelHandle {
    /// Artifact missing or failed to parse
    #[default]
    Unloaded,
    /// Artifact parsed but has no inference entry point
    LoadedUnusable,
    LoadedUsable(Arc<dyn InferenceModel>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelState {
    Unloaded,
    Unusable,
    Usable,
}

impl ModelHandle {
    pub fn usable<M: InferenceModel + 'static>(model: M) -> Self {
        ModelHandle::LoadedUsable(Arc::new(model))
    }

    /// Classify an artifact's JSON text.
    ///
    /// # Errors
    /// `Error::Parse` if the text is not JSON or its `layers` are malformed.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| Error::Parse(e.to_string()))?;

        if value.get("layers").is_none() {
            return Ok(ModelHandle::LoadedUnusable);
        }

        let network: DenseNetwork =
            serde_json::from_value(value).map_err(|e| Error::Parse(e.to_string()))?;
        debug!(
            "Dense network: {} layers, input width {:?}",
            network.layers.len(),
            network.input_dim()
        );
        Ok(ModelHandle::usable(network))
    }

    /// Load an artifact from disk. Never fails: a missing or unreadable
    /// artifact yields [`ModelHandle::Unloaded`].
    pub fn load<P: AsRef<Path>>(label: &str, path: P) -> Self {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("{} model not found at {:?}", label, path);
                return ModelHandle::Unloaded;
            }
            Err(e) => {
                warn!("Could not read {} model {:?}: {}", label, path, e);
                return ModelHandle::Unloaded;
            }
        };

        match Self::from_json(&text) {
            Ok(handle) => {
                match handle.state() {
                    ModelState::Usable => info!("Loaded {} model from {:?}", label, path),
                    _ => warn!(
                        "Loaded {} artifact from {:?} but it has no network structure",
                        label, path
                    ),
                }
                handle
            }
            Err(e) => {
                warn!("Could not load {} model: {}; will use cosine similarity fallback", label, e);
                ModelHandle::Unloaded
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> ModelState {
        match self {
            ModelHandle::Unloaded => ModelState::Unloaded,
            ModelHandle::LoadedUnusable => ModelState::Unusable,
            ModelHandle::LoadedUsable(_) => ModelState::Usable,
        }
    }

    /// True once an artifact was read, whether or not it can be invoked
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !matches!(self, ModelHandle::Unloaded)
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ModelHandle").field(&self.state()).finish()
    }
}
