use std::io;

use crate::{domain::Ingredient, storage::KeyValueStore};

/// The key the ingredient list is stored under.
pub const INGREDIENTS_KEY: &str = "ingredients";

/// Whole-collection access to the stored ingredients.
///
/// There are no partial updates: callers load the full list and replace it.
pub trait Repository {
    /// Read every stored ingredient, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or its content is not a
    /// valid ingredient list.
    fn load(&self) -> Result<Vec<Ingredient>, StoreError>;

    /// Replace the stored list with `ingredients`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written.
    fn replace_all(&mut self, ingredients: &[Ingredient]) -> Result<(), StoreError>;
}

/// Failures reading or writing the stored list.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be accessed.
    #[error("failed to access stored '{key}': {source}")]
    Io {
        /// Storage key.
        key: String,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
    /// The stored value is not a valid ingredient list.
    #[error("failed to parse stored '{key}': {source}")]
    Parse {
        /// Storage key.
        key: String,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },
    /// The list could not be serialized.
    #[error("failed to serialize '{key}': {source}")]
    Serialize {
        /// Storage key.
        key: String,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A [`Repository`] keeping the list as a JSON array in a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct JsonRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> JsonRepository<S> {
    /// A repository using the standard [`INGREDIENTS_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, INGREDIENTS_KEY)
    }

    /// A repository storing its list under a custom key.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            key: self.key.clone(),
            source,
        }
    }
}

impl<S: KeyValueStore> Repository for JsonRepository<S> {
    fn load(&self) -> Result<Vec<Ingredient>, StoreError> {
        let Some(raw) = self.store.get(&self.key).map_err(|e| self.io_error(e))? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            key: self.key.clone(),
            source,
        })
    }

    fn replace_all(&mut self, ingredients: &[Ingredient]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(ingredients).map_err(|source| StoreError::Serialize {
            key: self.key.clone(),
            source,
        })?;

        self.store
            .set(&self.key, &raw)
            .map_err(|e| self.io_error(e))?;

        tracing::debug!("Stored {} ingredients", ingredients.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use non_empty_string::NonEmptyString;
    use tempfile::TempDir;

    use super::*;
    use crate::storage::{FileStore, MemoryStore};

    fn item(name: &str) -> Ingredient {
        Ingredient::new(
            NonEmptyString::new(name.to_string()).unwrap(),
            "2025-06-08".to_string(),
        )
    }

    #[test]
    fn missing_key_loads_empty_list() {
        let repository = JsonRepository::new(MemoryStore::new());
        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn replace_all_then_load() {
        let tmp = TempDir::new().unwrap();
        let mut repository = JsonRepository::new(FileStore::new(tmp.path().to_path_buf()));
        let items = vec![item("Milk"), item("Eggs")];

        repository.replace_all(&items).unwrap();

        let reopened = JsonRepository::new(FileStore::new(tmp.path().to_path_buf()));
        assert_eq!(reopened.load().unwrap(), items);
    }

    #[test]
    fn writes_a_json_array_under_the_key() {
        let mut repository = JsonRepository::new(MemoryStore::new());
        repository.replace_all(&[item("Milk")]).unwrap();

        let raw = repository.store().get(INGREDIENTS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"name":"Milk","expirationDate":"2025-06-08"}]"#);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let repository = JsonRepository::new(MemoryStore::with_entry(INGREDIENTS_KEY, "{oops"));

        let error = repository.load().unwrap_err();

        assert!(matches!(error, StoreError::Parse { ref key, .. } if key == INGREDIENTS_KEY));
        assert!(error.to_string().starts_with("failed to parse stored 'ingredients'"));
    }

    #[test]
    fn custom_key_is_isolated() {
        let mut repository = JsonRepository::with_key(MemoryStore::new(), "archive");
        repository.replace_all(&[item("Jam")]).unwrap();

        assert_eq!(repository.store().get(INGREDIENTS_KEY).unwrap(), None);
        assert_eq!(repository.load().unwrap().len(), 1);
    }
}
