use std::sync::LazyLock;

use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::deserializers::{
    de_abs_length, de_appearances, de_def_length, de_font_family, de_pixels,
};

/// A complete visual preset: layout tokens plus a light and a dark appearance.
#[derive(Debug, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub appearances: ThemeAppearances,
}

static CORPORATE: LazyLock<Theme> = LazyLock::new(|| {
    Theme::from_json(include_str!("../themes/corporate.json"))
        .expect("the bundled corporate theme should be valid")
});

static SOCIAL: LazyLock<Theme> = LazyLock::new(|| {
    Theme::from_json(include_str!("../themes/social.json"))
        .expect("the bundled social theme should be valid")
});

impl Theme {
    /// The sober preset used for formal, document-oriented screens.
    pub fn corporate() -> &'static Theme {
        &CORPORATE
    }

    /// The vivid preset used for the community feed.
    pub fn social() -> &'static Theme {
        &SOCIAL
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
    /// Used for headings.
    pub display_font: ThemeFont,
    pub sizes: ThemeTextSizes,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_font_family")]
    pub family: SmallVec<[SharedString; 2]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub weight: f32,
}

impl ThemeFont {
    /// The preferred family; the rest of the list are fallbacks.
    pub fn primary_family(&self) -> SharedString {
        self.family[0].clone()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_xl: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeAppearances {
    #[serde(deserialize_with = "de_appearances")]
    appearances: SmallVec<[ThemeAppearance; 2]>,
}

impl ThemeAppearances {
    pub fn get(&self, kind: ThemeAppearanceKind) -> &ThemeAppearance {
        // Deserialization guarantees one appearance of each kind.
        self.appearances
            .iter()
            .find(|appearance| appearance.kind == kind)
            .unwrap_or(&self.appearances[0])
    }

    pub fn light(&self) -> &ThemeAppearance {
        self.get(ThemeAppearanceKind::Light)
    }

    pub fn dark(&self) -> &ThemeAppearance {
        self.get(ThemeAppearanceKind::Dark)
    }

    /// Resolves the appearance selected by the [`ActiveAppearance`] global,
    /// falling back to light when none has been installed.
    pub fn active(&self, cx: &App) -> &ThemeAppearance {
        let kind = cx
            .try_global::<ActiveAppearance>()
            .map(|active| active.0)
            .unwrap_or_default();

        self.get(kind)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveAppearance(pub ThemeAppearanceKind);

impl Global for ActiveAppearance {}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeAppearance {
    pub kind: ThemeAppearanceKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeAppearanceKind {
    #[default]
    Light,
    Dark,
}

impl ThemeAppearanceKind {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<gpui::WindowAppearance> for ThemeAppearanceKind {
    fn from(appearance: gpui::WindowAppearance) -> Self {
        match appearance {
            gpui::WindowAppearance::Light | gpui::WindowAppearance::VibrantLight => Self::Light,
            gpui::WindowAppearance::Dark | gpui::WindowAppearance::VibrantDark => Self::Dark,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
    pub quinary: Rgba,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub constructive: Rgba,
    pub destructive: Rgba,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub muted: Rgba,
    pub on_accent: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::px;

    #[test]
    fn bundled_themes_parse() {
        assert_eq!(Theme::corporate().name, SharedString::from("Purple Jurídico Corporate"));
        assert_eq!(Theme::social().name, SharedString::from("Purple Jurídico Social"));
    }

    #[test]
    fn bundled_themes_have_light_and_dark() {
        for theme in [Theme::corporate(), Theme::social()] {
            assert_eq!(theme.appearances.light().kind, ThemeAppearanceKind::Light);
            assert_eq!(theme.appearances.dark().kind, ThemeAppearanceKind::Dark);
        }
    }

    #[test]
    fn bundled_themes_have_ordered_scales() {
        for theme in [Theme::corporate(), Theme::social()] {
            let size = &theme.layout.size;
            assert!(size.sm <= size.md && size.md <= size.lg && size.lg <= size.xl);

            let radii = &theme.layout.corner_radii;
            assert!(radii.sm <= radii.md && radii.md <= radii.lg && radii.lg <= radii.xl);

            assert!(theme.layout.text.base_size > px(0.));
        }
    }

    #[test]
    fn light_and_dark_backgrounds_differ() {
        for theme in [Theme::corporate(), Theme::social()] {
            assert_ne!(
                theme.appearances.light().colors.background.primary,
                theme.appearances.dark().colors.background.primary
            );
        }
    }

    fn theme_with_appearances(appearances: &str) -> Result<Theme, serde_json::Error> {
        let mut value: serde_json::Value =
            serde_json::from_str(include_str!("../themes/corporate.json")).unwrap();
        value["appearances"] = serde_json::from_str(appearances).unwrap();
        serde_json::from_value(value)
    }

    #[test]
    fn rejects_missing_dark_appearance() {
        let light = serde_json::to_string(
            &serde_json::from_str::<serde_json::Value>(include_str!("../themes/corporate.json"))
                .unwrap()["appearances"][0],
        )
        .unwrap();

        assert!(theme_with_appearances(&format!("[{light}]")).is_err());
        assert!(theme_with_appearances(&format!("[{light}, {light}]")).is_err());
        assert!(theme_with_appearances("[]").is_err());
    }

    #[test]
    fn appearance_kind_toggles() {
        assert_eq!(ThemeAppearanceKind::Light.toggled(), ThemeAppearanceKind::Dark);
        assert_eq!(ThemeAppearanceKind::Dark.toggled(), ThemeAppearanceKind::Light);
    }
}
