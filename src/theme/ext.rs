use std::sync::Arc;

use gpui::App;

use crate::{
    preferences::MemoryPreferenceStore,
    theme::{
        ActiveAppearance, Theme, ThemeAppearance, ThemeAppearanceKind, ThemeController,
        ThemeVariantId,
    },
};

/// Extension trait for reading and switching the global theme.
///
/// Every mutation replaces a gpui global, so views subscribed through
/// `observe_global::<Theme>` or `observe_global::<ActiveAppearance>` are
/// notified and re-render.
pub trait ThemeExt {
    /// Installs a theme without touching the persisted variant.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    fn get_theme(&self) -> &Theme;

    /// The light or dark style object of the active theme.
    fn active_appearance(&self) -> &ThemeAppearance;

    fn theme_variant(&self) -> ThemeVariantId;

    fn set_theme_variant(&mut self, variant: ThemeVariantId);

    /// Flips between the corporate and social presets and persists the choice.
    fn toggle_theme_variant(&mut self) -> ThemeVariantId;

    fn appearance(&self) -> ThemeAppearanceKind;

    fn set_appearance(&mut self, kind: ThemeAppearanceKind);

    fn toggle_appearance(&mut self) -> ThemeAppearanceKind;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn active_appearance(&self) -> &ThemeAppearance {
        self.get_theme().appearances.active(self)
    }

    fn theme_variant(&self) -> ThemeVariantId {
        self.try_global::<ThemeController>()
            .map(ThemeController::variant)
            .unwrap_or_default()
    }

    fn set_theme_variant(&mut self, variant: ThemeVariantId) {
        ensure_controller(self);

        let changed = self.update_global::<ThemeController, _>(|controller, _cx| {
            controller.set_variant(variant)
        });

        if changed {
            self.set_theme(variant.theme());
        }
    }

    fn toggle_theme_variant(&mut self) -> ThemeVariantId {
        ensure_controller(self);

        let variant =
            self.update_global::<ThemeController, _>(|controller, _cx| controller.toggle());
        self.set_theme(variant.theme());

        variant
    }

    fn appearance(&self) -> ThemeAppearanceKind {
        self.try_global::<ActiveAppearance>()
            .map(|active| active.0)
            .unwrap_or_default()
    }

    fn set_appearance(&mut self, kind: ThemeAppearanceKind) {
        self.set_global(ActiveAppearance(kind));
    }

    fn toggle_appearance(&mut self) -> ThemeAppearanceKind {
        let kind = self.appearance().toggled();
        self.set_appearance(kind);
        kind
    }
}

fn ensure_controller(cx: &mut App) {
    if !cx.has_global::<ThemeController>() {
        log::warn!("theme controller used before `init`; preferences will not be persisted");
        cx.set_global(ThemeController::load(Arc::new(MemoryPreferenceStore::new())));
    }
}
