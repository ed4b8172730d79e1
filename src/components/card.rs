use gpui::{
    AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use smallvec::SmallVec;

use crate::{
    theme::{
        ThemeExt, ThemeLayerKind, ThemeLayoutCornerRadiiKind, ThemeLayoutPaddingKind,
        ThemeTextColorKind,
    },
    utils::RgbaExt,
};

/// A raised surface that groups related content.
#[derive(IntoElement)]
pub struct Card {
    layer: ThemeLayerKind,
    title: Option<SharedString>,
    subtitle: Option<SharedString>,
    padding: ThemeLayoutPaddingKind,
    corner_radii: ThemeLayoutCornerRadiiKind,
    children: SmallVec<[AnyElement; 2]>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            layer: ThemeLayerKind::Secondary,
            title: None,
            subtitle: None,
            padding: ThemeLayoutPaddingKind::Lg,
            corner_radii: ThemeLayoutCornerRadiiKind::Lg,
            children: SmallVec::new(),
        }
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn padding(mut self, padding: ThemeLayoutPaddingKind) -> Self {
        self.padding = padding;
        self
    }

    pub fn corner_radii(mut self, corner_radii: ThemeLayoutCornerRadiiKind) -> Self {
        self.corner_radii = corner_radii;
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let background = self.layer.resolve(cx);
        let text_primary = ThemeTextColorKind::Primary.resolve(cx);
        let border = self.layer.next().resolve(cx).mix(text_primary, 0.04);
        let corner_radius = self.corner_radii.resolve(cx);
        let padding = self.padding.resolve(cx);

        let display_font = cx.get_theme().layout.text.display_font.clone();
        let sizes = cx.get_theme().layout.text.sizes.clone();

        div()
            .relative()
            .flex()
            .flex_col()
            .gap(padding / 2.)
            .p(padding)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background)
                    .border(px(1.))
                    .border_inside()
                    .border_color(border),
            )
            .when(self.title.is_some() || self.subtitle.is_some(), |this| {
                this.child(
                    div()
                        .flex()
                        .flex_col()
                        .when_some(self.title, |this, title| {
                            this.child(
                                div()
                                    .font_family(display_font.primary_family())
                                    .font_weight(FontWeight(display_font.weight))
                                    .text_size(sizes.heading_sm)
                                    .text_color(text_primary)
                                    .child(title),
                            )
                        })
                        .when_some(self.subtitle, |this, subtitle| {
                            this.child(
                                div()
                                    .text_size(sizes.caption)
                                    .text_color(ThemeTextColorKind::Muted.resolve(cx))
                                    .child(subtitle),
                            )
                        }),
                )
            })
            .children(self.children)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::preferences::MemoryPreferenceStore;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_card_collects_children(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let card = Card::new()
                .title("Casos activos")
                .child(div())
                .children([div(), div()]);

            assert_eq!(card.children.len(), 3);
            assert_eq!(card.title, Some(SharedString::from("Casos activos")));
            assert!(card.subtitle.is_none());
        });
    }

    #[gpui::test]
    fn test_card_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            crate::init(cx, Arc::new(MemoryPreferenceStore::new()));

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| CardTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct CardTestView;

    impl gpui::Render for CardTestView {
        fn render(
            &mut self,
            _window: &mut Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().size_full().child(
                Card::new()
                    .title("Perfil")
                    .subtitle("Abogada laboralista")
                    .child("148 casos resueltos"),
            )
        }
    }
}
