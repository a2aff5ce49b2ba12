//! # ddix Model
//!
//! Learned pair scorers and the prediction dispatcher.
//!
//! - [`ModelHandle`] - Load-time capability of an optional model artifact
//! - [`ModelAdapter`] - Runs one named model, reporting [`Unavailable`] instead of failing
//! - [`Predictor`] - Resolves drugs, dispatches to an adapter, falls back to cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ddix_core::{FeatureVector, RiskLevel};
//! use ddix_model::{ModelHandle, Predictor};
//! use ddix_storage::FeatureStore;
//!
//! let store = FeatureStore::from_entries(vec![
//!     ("Aspirin".to_string(), FeatureVector::new(vec![1.0, 0.0, 0.0])),
//!     ("Ibuprofen".to_string(), FeatureVector::new(vec![0.0, 1.0, 0.0])),
//! ])
//! .unwrap();
//!
//! let predictor = Predictor::new(Arc::new(store), ModelHandle::Unloaded, ModelHandle::Unloaded);
//! let result = predictor.predict("Aspirin", "Ibuprofen", "graphsage").unwrap();
//! assert_eq!(result.risk_level, RiskLevel::Medium);
//! assert!(result.message.is_some());
//! ```

pub mod adapter;
pub mod artifact;
pub mod dispatcher;
pub mod network;

pub use adapter::{sigmoid, ModelAdapter, Unavailable};
pub use artifact::{ModelHandle, ModelState};
pub use dispatcher::{Prediction, Predictor};
pub use network::{Activation, DenseLayer, DenseNetwork, InferenceError, InferenceModel};
