//! # ddix Storage
//!
//! Feature store for drug embeddings, loaded once from a CSV table and read
//! concurrently afterwards without locking.

pub mod feature_store;
pub mod loader;

pub use feature_store::FeatureStore;
pub use loader::{parse_csv, parse_csv_file};
