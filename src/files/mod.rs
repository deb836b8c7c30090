//! File storage backing the `/files/` routes
//!
//! Files live directly under the configured directory. Names may contain
//! sub-directories but can never climb out of the root.

pub mod store;

pub use store::{FileStore, StoreError};
