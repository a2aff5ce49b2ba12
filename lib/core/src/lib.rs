//! # ddix Core
//!
//! Core library for the ddix drug interaction scorer.
//!
//! - [`FeatureVector`] - Fixed-length drug embedding
//! - [`similarity`] - Cosine similarity heuristic mapped to [0, 1]
//! - [`RiskLevel`] - Five-bucket risk classification of a probability
//! - [`ModelName`] - Selector for the learned pair scorers
//!
//! ## Example
//!
//! ```rust
//! use ddix_core::{similarity, FeatureVector, RiskLevel};
//!
//! let aspirin = FeatureVector::new(vec![1.0, 0.0, 0.0]);
//! let ibuprofen = FeatureVector::new(vec![0.0, 1.0, 0.0]);
//!
//! let p = similarity::score(&aspirin, &ibuprofen).unwrap();
//! assert_eq!(RiskLevel::classify(p), RiskLevel::Medium);
//! ```

pub mod error;
pub mod model_name;
pub mod risk;
pub mod similarity;
pub mod vector;

pub use error::{Error, Result};
pub use model_name::ModelName;
pub use risk::RiskLevel;
pub use vector::FeatureVector;
