//! # Item Sources
//!
//! The query core never fetches items itself. An [`ItemSource`] hands over the
//! current full collection on demand, together with a version number that
//! changes whenever the collection does.
//!
//! ## Versioning
//!
//! Derived option lists are cached per version (see
//! [`OptionCache`](crate::facets::OptionCache)). A source must return a
//! different version after any change to its items; it may return the same
//! version for as long as the items are unchanged.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileSource`]: reads a JSON array of items from disk; the version
//!   follows the file's modification time.
//! - [`memory::InMemoryStore`]: items held in memory, for tests and embedding.
//!
//! Neither writes items back: saving is the remote API's job.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// Abstract supplier of the item collection.
pub trait ItemSource {
    /// A snapshot of every item, in source order.
    fn items(&self) -> Result<Vec<Item>>;

    /// Changes whenever the items change.
    fn version(&self) -> u64;
}
