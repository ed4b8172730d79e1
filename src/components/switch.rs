use std::time::Duration;

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    theme::{ThemeAccentKind, ThemeExt, ThemeLayerKind, ThemeTextColorKind},
    utils::{ElementIdExt, PixelsExt, RgbaExt, disabled_transition, toggle_transition},
};

type OnToggle = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// A two-state toggle. It does not own its state: `on_toggle` receives the
/// requested value and the caller feeds it back through `checked`.
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    layer: ThemeLayerKind,
    checked: bool,
    disabled: bool,
    on_toggle: Option<OnToggle>,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            layer: ThemeLayerKind::Tertiary,
            checked: false,
            disabled: false,
            on_toggle: None,
        }
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_toggle(mut self, on_toggle: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(on_toggle));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let knob_size = cx.get_theme().layout.size.md;
        let padding = cx.get_theme().layout.padding.md;
        let width = (knob_size * 2.) + (padding * 2.);
        let height = knob_size + (padding * 2.);
        let (start_offset, end_offset) = (padding.as_f32(), (width - knob_size - padding).as_f32());

        let accent = ThemeAccentKind::Primary.resolve(cx);
        let knob_color = ThemeTextColorKind::OnAccent.resolve(cx);
        let track_color = self.layer.resolve(cx);
        let border_color = self.layer.next().resolve(cx);
        let text_color = ThemeTextColorKind::Primary.resolve(cx);

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let checked_delta = *toggle_transition(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(200),
            self.checked,
        )
        .evaluate(window, cx);
        let opacity = *disabled_transition(self.id.clone(), window, cx, self.disabled)
            .evaluate(window, cx);

        let is_disabled = self.disabled;
        let checked = self.checked;
        let knob_offset = start_offset + (end_offset - start_offset) * checked_delta;

        div()
            .id(self.id.clone())
            .relative()
            .flex_none()
            .w(width)
            .h(height)
            .opacity(opacity)
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(px(100.))
                    .bg(track_color)
                    .border(px(1.))
                    .border_inside()
                    .border_color(if is_hover {
                        border_color.mix(text_color, 0.1)
                    } else {
                        border_color
                    }),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(px(100.))
                    .bg(accent.alpha(checked_delta)),
            )
            .child(
                div()
                    .absolute()
                    .top(padding)
                    .left(px(knob_offset))
                    .size(knob_size)
                    .rounded_full()
                    .bg(if checked_delta > 0.5 {
                        knob_color
                    } else {
                        text_color
                    }),
            )
            .when(!is_disabled, |this| {
                this.on_hover(move |hover, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state.entity_id());
                })
                .when_some(self.on_toggle, |this, on_toggle| {
                    this.on_click(move |_event, window, cx| {
                        cx.stop_propagation();
                        (on_toggle)(&!checked, window, cx);
                    })
                })
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::preferences::MemoryPreferenceStore;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_switch_defaults(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let switch = Switch::new("switch");
            assert!(!switch.checked, "Switch should start unchecked");
            assert!(!switch.disabled, "Switch should start enabled");
            assert!(matches!(switch.layer, ThemeLayerKind::Tertiary));
        });
    }

    #[gpui::test]
    fn test_switch_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let switch = Switch::new("switch")
                .checked(true)
                .disabled(true)
                .layer(ThemeLayerKind::Secondary)
                .on_toggle(|_checked, _window, _cx| {});

            assert!(switch.checked);
            assert!(switch.disabled);
            assert!(matches!(switch.layer, ThemeLayerKind::Secondary));
            assert!(switch.on_toggle.is_some());
        });
    }

    #[gpui::test]
    fn test_switch_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            crate::init(cx, Arc::new(MemoryPreferenceStore::new()));

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| SwitchTestView { checked: true })
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct SwitchTestView {
        checked: bool,
    }

    impl gpui::Render for SwitchTestView {
        fn render(
            &mut self,
            _window: &mut Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(Switch::new("switch").checked(self.checked))
        }
    }
}
