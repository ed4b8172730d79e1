//! Local key-value storage for user preferences.
//!
//! The app only persists a handful of string values (currently just the
//! selected theme variant), so the store is a flat map of strings.

mod error;
pub use error::*;

mod file;
pub use file::*;

mod memory;
pub use memory::*;

/// A key-value store that survives process restarts.
pub trait PreferenceStore: Send + Sync {
    /// Returns `Ok(None)` when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
