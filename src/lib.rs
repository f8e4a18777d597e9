//! Perishable Ingredient Tracking
//!
//! Ingredients are kept as a single JSON document in a local store. The
//! [`domain`] module derives expiration dates, ripeness recheck needs and the
//! filtered views over the collection; [`storage`] owns persistence.

pub mod domain;
pub use domain::{
    BrowseQuery, Config, Estimate, ExpirationInput, FormError, Ingredient, IngredientForm,
    IngredientKey, QuickFilter,
};

pub mod storage;
pub use storage::{
    FileStore, JsonRepository, KeyValueStore, MemoryStore, Pantry, PantryError, Repository,
    StoreError,
};

pub mod lookup;
pub use lookup::ProductLookup;
