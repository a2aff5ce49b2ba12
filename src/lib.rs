//! # ddix
//!
//! Drug-drug interaction risk scoring over HTTP.
//!
//! Given two drug names, ddix looks up their precomputed feature vectors,
//! scores the pair with a learned model when one is available and falls back
//! to cosine similarity otherwise. The probability is bucketed into one of
//! five risk levels.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! ddix --data-dir ./data --http-port 8000
//! curl -X POST localhost:8000/predict \
//!     -H 'content-type: application/json' \
//!     -d '{"drug1": "Aspirin", "drug2": "Warfarin", "model": "graphsage"}'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use std::sync::Arc;
//! use ddix::prelude::*;
//!
//! let store = FeatureStore::from_entries(vec![
//!     ("Aspirin".to_string(), FeatureVector::new(vec![1.0, 0.0, 0.0])),
//!     ("Ibuprofen".to_string(), FeatureVector::new(vec![0.0, 1.0, 0.0])),
//! ])
//! .unwrap();
//!
//! let predictor = Predictor::new(Arc::new(store), ModelHandle::Unloaded, ModelHandle::Unloaded);
//! let result = predictor.predict("aspirin", "Ibuprofen", "graphsage").unwrap();
//! assert_eq!(result.probability, 0.5);
//! assert_eq!(result.risk_level, RiskLevel::Medium);
//! ```
//!
//! ## Crate Structure
//!
//! - `ddix-core` - Feature vectors, cosine scoring, risk classification, errors
//! - `ddix-storage` - Case-insensitive feature store loaded from CSV
//! - `ddix-model` - Model artifacts, adapters and the prediction dispatcher
//! - `ddix-api` - actix-web REST API

// Re-export core types
pub use ddix_core::{similarity, Error, FeatureVector, ModelName, Result, RiskLevel};

// Re-export storage
pub use ddix_storage::FeatureStore;

// Re-export models
pub use ddix_model::{
    ModelAdapter, ModelHandle, ModelState, Prediction, Predictor, Unavailable,
};

// Re-export API
pub use ddix_api::{ApiConfig, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        similarity, ApiConfig, Error, FeatureStore, FeatureVector, ModelAdapter, ModelHandle,
        ModelName, ModelState, Prediction, Predictor, RestApi, Result, RiskLevel, Unavailable,
    };
}
