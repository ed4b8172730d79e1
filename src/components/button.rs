use gpui::{
    App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder,
};

use crate::{
    theme::{
        ThemeAccentKind, ThemeExt, ThemeLayerKind, ThemeLayoutSizeKind, ThemeTextColorKind,
    },
    utils::{ElementIdExt, PixelsExt, RgbaExt, disabled_transition},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled with the primary accent.
    #[default]
    Primary,
    /// Surface-colored with a border.
    Secondary,
    /// No fill until hovered.
    Ghost,
    /// Filled with the destructive accent.
    Destructive,
}

struct ButtonColors {
    background: Rgba,
    hover_background: Rgba,
    border: Rgba,
    text: Rgba,
}

impl ButtonVariant {
    fn colors(self, layer: ThemeLayerKind, cx: &App) -> ButtonColors {
        let text_primary = ThemeTextColorKind::Primary.resolve(cx);

        match self {
            Self::Primary | Self::Destructive => {
                let accent = if self == Self::Primary {
                    ThemeAccentKind::Primary.resolve(cx)
                } else {
                    ThemeAccentKind::Destructive.resolve(cx)
                };

                ButtonColors {
                    background: accent,
                    hover_background: accent.mix(text_primary, 0.12),
                    border: accent,
                    text: ThemeTextColorKind::OnAccent.resolve(cx),
                }
            }
            Self::Secondary => {
                let background = layer.next().resolve(cx);

                ButtonColors {
                    background,
                    hover_background: background.mix(text_primary, 0.07),
                    border: background.mix(text_primary, 0.12),
                    text: text_primary,
                }
            }
            Self::Ghost => {
                let hover = layer.next().resolve(cx);

                ButtonColors {
                    background: hover.alpha(0.),
                    hover_background: hover,
                    border: hover.alpha(0.),
                    text: text_primary,
                }
            }
        }
    }
}

type OnClick = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ThemeLayoutSizeKind,
    layer: ThemeLayerKind,
    full_width: bool,
    disabled: bool,
    on_click: Option<OnClick>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ThemeLayoutSizeKind::Lg,
            layer: ThemeLayerKind::Primary,
            full_width: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ThemeLayoutSizeKind) -> Self {
        self.size = size;
        self
    }

    /// The surface the button sits on; secondary and ghost buttons derive
    /// their fill from it.
    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = self.variant.colors(self.layer, cx);

        let font = cx.get_theme().layout.text.default_font.clone();
        let text_size = cx.get_theme().layout.text.sizes.body;
        let horizontal_padding = cx.get_theme().layout.padding.lg;
        let height = self.size.resolve(cx);
        let corner_radius = self.size.corner_radii().resolve(cx);
        let vertical_padding = height.padding_needed_for_height(window, text_size, font.line_height);

        let opacity = *disabled_transition(self.id.clone(), window, cx, self.disabled)
            .evaluate(window, cx);
        let is_disabled = self.disabled;

        div()
            .id(self.id.with_suffix("button"))
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .min_h(height)
            .py(vertical_padding)
            .px(horizontal_padding)
            .when(self.full_width, |this| this.w_full())
            .rounded(corner_radius)
            .border_1()
            .border_color(colors.border)
            .bg(colors.background)
            .text_color(colors.text)
            .text_size(text_size)
            .font_family(font.primary_family())
            .line_height(font.line_height)
            .opacity(opacity)
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .child(self.label)
            .when(!is_disabled, |this| {
                let hover_background = colors.hover_background;

                this.hover(move |style| style.bg(hover_background))
                    .when_some(self.on_click, |this, on_click| {
                        this.on_click(move |event, window, cx| {
                            cx.stop_propagation();
                            (on_click)(event, window, cx);
                        })
                    })
            })
    }
}
