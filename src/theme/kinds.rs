#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Text size variants that resolve to theme-defined values.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
pub enum ThemeTextSizeKind {
    #[assoc(resolve = cx.get_theme().layout.text.sizes.heading_xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.text.sizes.heading_lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.text.sizes.heading_md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.text.sizes.heading_sm)]
    Sm,
    #[assoc(resolve = cx.get_theme().layout.text.sizes.body)]
    Body,
    #[assoc(resolve = cx.get_theme().layout.text.sizes.caption)]
    Caption,
}

/// Component size variants that resolve to theme-defined pixel values.
///
/// Each size has a matching corner radius.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
#[func(pub fn corner_radii(&self) -> ThemeLayoutCornerRadiiKind)]
pub enum ThemeLayoutSizeKind {
    #[assoc(resolve = cx.get_theme().layout.size.xl)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.size.lg)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.size.md)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.size.sm)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Sm)]
    Sm,
}

#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutPaddingKind {
    #[assoc(resolve = cx.get_theme().layout.padding.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.padding.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.padding.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.padding.sm)]
    Sm,
}

#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutCornerRadiiKind {
    #[assoc(resolve = cx.get_theme().layout.corner_radii.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.sm)]
    Sm,
}

/// Background colors of the active appearance.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeBackgroundKind {
    #[assoc(resolve = cx.active_appearance().colors.background.primary)]
    Primary,
    #[assoc(resolve = cx.active_appearance().colors.background.secondary)]
    Secondary,
    #[assoc(resolve = cx.active_appearance().colors.background.tertiary)]
    Tertiary,
    #[assoc(resolve = cx.active_appearance().colors.background.quaternary)]
    Quaternary,
    #[assoc(resolve = cx.active_appearance().colors.background.quinary)]
    Quinary,
}

/// Stacked surfaces. `next()` is the color one level up, used for borders
/// and nested elements.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn next(&self) -> ThemeBackgroundKind)]
pub enum ThemeLayerKind {
    #[assoc(resolve = cx.active_appearance().colors.background.primary)]
    #[assoc(next = ThemeBackgroundKind::Secondary)]
    Primary,
    #[assoc(resolve = cx.active_appearance().colors.background.secondary)]
    #[assoc(next = ThemeBackgroundKind::Tertiary)]
    Secondary,
    #[assoc(resolve = cx.active_appearance().colors.background.tertiary)]
    #[assoc(next = ThemeBackgroundKind::Quaternary)]
    Tertiary,
    #[assoc(resolve = cx.active_appearance().colors.background.quaternary)]
    #[assoc(next = ThemeBackgroundKind::Quinary)]
    Quaternary,
}

impl From<ThemeLayerKind> for ThemeBackgroundKind {
    fn from(layer: ThemeLayerKind) -> Self {
        match layer {
            ThemeLayerKind::Primary => Self::Primary,
            ThemeLayerKind::Secondary => Self::Secondary,
            ThemeLayerKind::Tertiary => Self::Tertiary,
            ThemeLayerKind::Quaternary => Self::Quaternary,
        }
    }
}

#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeAccentKind {
    #[assoc(resolve = cx.active_appearance().colors.accent.primary)]
    Primary,
    #[assoc(resolve = cx.active_appearance().colors.accent.secondary)]
    Secondary,
    #[assoc(resolve = cx.active_appearance().colors.accent.constructive)]
    Constructive,
    #[assoc(resolve = cx.active_appearance().colors.accent.destructive)]
    Destructive,
}

#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeTextColorKind {
    #[assoc(resolve = cx.active_appearance().colors.text.primary)]
    Primary,
    #[assoc(resolve = cx.active_appearance().colors.text.secondary)]
    Secondary,
    #[assoc(resolve = cx.active_appearance().colors.text.muted)]
    Muted,
    /// Text drawn on top of an accent fill.
    #[assoc(resolve = cx.active_appearance().colors.text.on_accent)]
    OnAccent,
}
