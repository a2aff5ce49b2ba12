use crate::loader;
use ahash::AHashMap;
use ddix_core::{Error, FeatureVector, Result};
use std::path::Path;
use tracing::{error, info, warn};

/// Read-only drug name → feature vector mapping, keyed case-insensitively.
///
/// Built once at startup. A store that could not be populated is kept in an
/// explicit uninitialized state where every lookup misses.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    loaded: bool,
    dim: Option<usize>,
    /// Names as they appeared in the source, load order
    names: Vec<String>,
    vectors: Vec<FeatureVector>,
    /// Case-folded name → first row carrying it
    index: AHashMap<String, usize>,
}

#[inline]
fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl FeatureStore {
    /// The uninitialized store
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a populated store from `(name, vector)` rows in load order.
    ///
    /// If two names collide after case folding, lookups resolve to the
    /// earlier row. Non-finite feature values are rejected.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, FeatureVector)>,
    {
        let mut store = Self {
            loaded: true,
            ..Self::default()
        };

        for (name, vector) in entries {
            match store.dim {
                None => store.dim = Some(vector.dim()),
                Some(expected) if expected != vector.dim() => {
                    return Err(Error::InvalidDimension {
                        expected,
                        actual: vector.dim(),
                    });
                }
                Some(_) => {}
            }
            if vector.as_slice().iter().any(|x| !x.is_finite()) {
                return Err(Error::Parse(format!("non-finite feature value for {}", name)));
            }

            let row = store.names.len();
            store.index.entry(fold(&name)).or_insert(row);
            store.names.push(name);
            store.vectors.push(vector);
        }

        Ok(store)
    }

    /// Load a CSV feature table. Fails if the file is absent or malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_entries(loader::parse_csv_file(path)?)
    }

    /// Load a CSV feature table, degrading to [`FeatureStore::empty`] when the
    /// file is missing or cannot be parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Feature table not found at {:?}, drug data not loaded", path);
            return Self::empty();
        }

        match Self::load(path) {
            Ok(store) => {
                info!(
                    "Loaded {} drugs from {:?} (dim {})",
                    store.len(),
                    path,
                    store.dim().unwrap_or(0)
                );
                if store.index.len() != store.len() {
                    warn!(
                        "{} drug names collide after case folding; first occurrence wins",
                        store.len() - store.index.len()
                    );
                }
                store
            }
            Err(e) => {
                error!("Error loading feature table {:?}: {}", path, e);
                Self::empty()
            }
        }
    }

    /// Case-insensitive lookup
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&FeatureVector> {
        self.index.get(&fold(name)).map(|&row| &self.vectors[row])
    }

    /// Like [`lookup`](Self::lookup), with the miss turned into `Error::DrugNotFound`.
    pub fn resolve(&self, name: &str) -> Result<&FeatureVector> {
        self.lookup(name)
            .ok_or_else(|| Error::DrugNotFound(name.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Drug names in load order, duplicates included
    #[inline]
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows loaded
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Shared feature dimensionality, `None` until a row is loaded
    #[inline]
    #[must_use]
    pub fn dim(&self) -> Option<usize> {
        self.dim
    }
}
