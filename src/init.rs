use std::sync::Arc;

use gpui::{App, Window};

use crate::{
    preferences::PreferenceStore,
    theme::{ActiveAppearance, ThemeController, ThemeExt},
};

/// Restores the persisted theme variant from `store` and installs it, along
/// with a light appearance unless one was already chosen.
pub fn init(cx: &mut App, store: Arc<dyn PreferenceStore>) {
    let controller = ThemeController::load(store);
    let theme = controller.theme();

    log::debug!("starting with the {} theme", controller.variant());

    cx.set_global(controller);
    cx.set_theme(theme);

    if !cx.has_global::<ActiveAppearance>() {
        cx.set_global(ActiveAppearance::default());
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}

/// Follows the window's system light/dark setting.
pub fn adopt_window_appearance(window: &Window, cx: &mut App) {
    cx.set_appearance(window.appearance().into());
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::{
        preferences::MemoryPreferenceStore,
        theme::{THEME_VARIANT_KEY, Theme, ThemeAppearanceKind, ThemeVariantId},
    };
    use gpui::{SharedString, TestAppContext};

    #[gpui::test]
    fn test_init_installs_defaults(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init(cx, Arc::new(MemoryPreferenceStore::new()));

            assert_eq!(cx.theme_variant(), ThemeVariantId::Corporate);
            assert_eq!(cx.appearance(), ThemeAppearanceKind::Light);
            assert_eq!(cx.get_theme().name, Theme::corporate().name);
        });
    }

    #[gpui::test]
    fn test_init_keeps_chosen_appearance(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_global(ActiveAppearance(ThemeAppearanceKind::Dark));
            init(
                cx,
                Arc::new(MemoryPreferenceStore::with_values([(THEME_VARIANT_KEY, "social")])),
            );

            assert_eq!(cx.appearance(), ThemeAppearanceKind::Dark);
            assert_eq!(
                cx.get_theme().name,
                SharedString::from("Purple Jurídico Social")
            );
        });
    }
}
