//! Persistence of the ingredient list.
//!
//! The whole collection is one JSON document under a single key. Every
//! mutation reads it, changes it in memory and writes it back; the last
//! writer wins.

mod pantry;
mod repository;
mod store;

pub use pantry::{CONFIG_FILE, Pantry, PantryError, config_path};
pub use repository::{INGREDIENTS_KEY, JsonRepository, Repository, StoreError};
pub use store::{FileStore, KeyValueStore, MemoryStore};
