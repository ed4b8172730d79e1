use std::sync::Arc;

use gpui::Global;

use crate::{
    preferences::PreferenceStore,
    theme::{Theme, ThemeVariantId},
};

/// Preference key under which the selected variant is persisted.
pub const THEME_VARIANT_KEY: &str = "theme_variant";

/// Owns the selected theme variant and keeps it in sync with the
/// preference store.
///
/// Storage failures never surface to the UI: they are logged and the
/// in-memory selection stays authoritative for the rest of the session.
pub struct ThemeController {
    variant: ThemeVariantId,
    store: Arc<dyn PreferenceStore>,
}

impl Global for ThemeController {}

impl ThemeController {
    /// Restores the last persisted variant, or the default one.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let variant = match store.read(THEME_VARIANT_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|err| {
                log::warn!("{err}; falling back to {}", ThemeVariantId::default());
                ThemeVariantId::default()
            }),
            Ok(None) => ThemeVariantId::default(),
            Err(err) => {
                log::warn!(
                    "could not read theme preference: {err}; falling back to {}",
                    ThemeVariantId::default()
                );
                ThemeVariantId::default()
            }
        };

        log::debug!("restored theme variant {variant}");

        Self { variant, store }
    }

    pub fn variant(&self) -> ThemeVariantId {
        self.variant
    }

    pub fn theme(&self) -> &'static Theme {
        self.variant.theme()
    }

    /// Switches to the other variant and persists it.
    pub fn toggle(&mut self) -> ThemeVariantId {
        self.variant = self.variant.toggled();
        self.persist();
        self.variant
    }

    /// Returns whether the variant changed.
    pub fn set_variant(&mut self, variant: ThemeVariantId) -> bool {
        if self.variant == variant {
            return false;
        }

        self.variant = variant;
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(err) = self.store.write(THEME_VARIANT_KEY, self.variant.as_str()) {
            log::error!("could not save theme variant {}: {err}", self.variant);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::preferences::{MemoryPreferenceStore, PreferenceError};

    struct BrokenStore {
        writes: AtomicUsize,
    }

    impl PreferenceStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::NoConfigDir)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Err(PreferenceError::NoConfigDir)
        }
    }

    fn memory_store() -> Arc<MemoryPreferenceStore> {
        Arc::new(MemoryPreferenceStore::new())
    }

    #[test]
    fn empty_store_loads_default_variant() {
        let controller = ThemeController::load(memory_store());
        assert_eq!(controller.variant(), ThemeVariantId::Corporate);
    }

    #[test]
    fn malformed_value_loads_default_variant() {
        let store = Arc::new(MemoryPreferenceStore::with_values([(
            THEME_VARIANT_KEY,
            "neon",
        )]));
        let controller = ThemeController::load(store);
        assert_eq!(controller.variant(), ThemeVariantId::Corporate);
    }

    #[test]
    fn toggle_parity() {
        for initial in ThemeVariantId::ALL {
            for toggles in 0..7 {
                let store = Arc::new(MemoryPreferenceStore::with_values([(
                    THEME_VARIANT_KEY,
                    initial.as_str(),
                )]));
                let mut controller = ThemeController::load(store);

                for _ in 0..toggles {
                    controller.toggle();
                }

                let expected = if toggles % 2 == 0 {
                    initial
                } else {
                    initial.toggled()
                };
                assert_eq!(controller.variant(), expected, "after {toggles} toggles");
            }
        }
    }

    #[test]
    fn toggled_variant_survives_reload() {
        let store = memory_store();

        let mut controller = ThemeController::load(store.clone());
        assert_eq!(controller.toggle(), ThemeVariantId::Social);
        drop(controller);

        let reloaded = ThemeController::load(store.clone());
        assert_eq!(reloaded.variant(), ThemeVariantId::Social);
        assert_eq!(
            store.read(THEME_VARIANT_KEY).unwrap().as_deref(),
            Some("social")
        );
    }

    #[test]
    fn set_variant_skips_redundant_writes() {
        let store = memory_store();
        let mut controller = ThemeController::load(store.clone());

        assert!(!controller.set_variant(ThemeVariantId::Corporate));
        assert_eq!(store.read(THEME_VARIANT_KEY).unwrap(), None);

        assert!(controller.set_variant(ThemeVariantId::Social));
        assert_eq!(
            store.read(THEME_VARIANT_KEY).unwrap().as_deref(),
            Some("social")
        );
    }

    #[test]
    fn broken_store_keeps_in_memory_state() {
        let store = Arc::new(BrokenStore {
            writes: AtomicUsize::new(0),
        });
        let mut controller = ThemeController::load(store.clone());

        assert_eq!(controller.variant(), ThemeVariantId::Corporate);
        assert_eq!(controller.toggle(), ThemeVariantId::Social);
        assert_eq!(controller.toggle(), ThemeVariantId::Corporate);
        assert_eq!(controller.toggle(), ThemeVariantId::Social);

        assert_eq!(controller.variant(), ThemeVariantId::Social);
        assert_eq!(store.writes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn file_store_round_trip() {
        use crate::preferences::FilePreferenceStore;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut controller = ThemeController::load(Arc::new(FilePreferenceStore::new(&path)));
        controller.set_variant(ThemeVariantId::Social);

        let restarted = ThemeController::load(Arc::new(FilePreferenceStore::new(&path)));
        assert_eq!(restarted.variant(), ThemeVariantId::Social);
        assert_eq!(restarted.theme().name, Theme::social().name);
    }
}
