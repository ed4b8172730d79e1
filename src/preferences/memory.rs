use std::sync::Mutex;

use indexmap::IndexMap;

use crate::preferences::{PreferenceError, PreferenceStore};

/// Keeps preferences in process memory only.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<IndexMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: Mutex::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.read("theme_variant").unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let store = MemoryPreferenceStore::new();
        store.write("theme_variant", "social").unwrap();
        store.write("theme_variant", "corporate").unwrap();

        assert_eq!(
            store.read("theme_variant").unwrap().as_deref(),
            Some("corporate")
        );
    }

    #[test]
    fn seeded_values_are_readable() {
        let store = MemoryPreferenceStore::with_values([("theme_variant", "social")]);
        assert_eq!(store.read("theme_variant").unwrap().as_deref(), Some("social"));
    }
}
