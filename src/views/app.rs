use std::collections::HashSet;

use gpui::{
    App, Context, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Subscription, Window, div, px,
};

use crate::{
    components::{BottomSheet, Button, ButtonVariant, Card, Switch},
    feed::{FeedEvent, ProfileMetrics, mock_feed},
    theme::{
        ActiveAppearance, Theme, ThemeAppearanceKind, ThemeExt, ThemeLayerKind,
        ThemeLayoutSizeKind, ThemeTextColorKind, ThemeTextSizeKind, ThemeVariantId,
    },
    utils::{ElementIdExt, RgbaExt},
};

/// The whole demo screen: header controls, profile metrics and the feed, with
/// a draggable notifications sheet on top.
pub struct AppView {
    feed: Vec<FeedEvent>,
    metrics: ProfileMetrics,
    liked: HashSet<u32>,
    last_snap: Option<usize>,
    _subscriptions: Vec<Subscription>,
}

impl AppView {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let _subscriptions = vec![
            cx.observe_global::<Theme>(|_this, cx| cx.notify()),
            cx.observe_global::<ActiveAppearance>(|_this, cx| cx.notify()),
        ];

        Self {
            feed: mock_feed(),
            metrics: ProfileMetrics::mock(),
            liked: HashSet::new(),
            last_snap: None,
            _subscriptions,
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let variant = cx.theme_variant();
        let appearance = cx.appearance();
        let display_font = cx.get_theme().layout.text.display_font.clone();

        div()
            .flex()
            .items_center()
            .justify_between()
            .gap(px(12.))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .font_family(display_font.primary_family())
                            .font_weight(FontWeight(display_font.weight))
                            .text_size(ThemeTextSizeKind::Lg.resolve(cx))
                            .text_color(ThemeTextColorKind::Primary.resolve(cx))
                            .child("Purple Jurídico"),
                    )
                    .child(
                        div()
                            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                            .text_color(ThemeTextColorKind::Muted.resolve(cx))
                            .child(SharedString::from(format!("Modo {variant}"))),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.))
                    .child(
                        div()
                            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                            .text_color(ThemeTextColorKind::Secondary.resolve(cx))
                            .child("Social"),
                    )
                    .child(
                        Switch::new("theme-variant")
                            .checked(variant == ThemeVariantId::Social)
                            .on_toggle(|_checked, _window, cx| {
                                cx.toggle_theme_variant();
                            }),
                    )
                    .child(
                        Button::new(
                            "appearance",
                            match appearance {
                                ThemeAppearanceKind::Light => "Oscuro",
                                ThemeAppearanceKind::Dark => "Claro",
                            },
                        )
                        .variant(ButtonVariant::Secondary)
                        .size(ThemeLayoutSizeKind::Md)
                        .on_click(|_event, _window, cx| {
                            cx.toggle_appearance();
                        }),
                    ),
            )
    }

    fn render_metrics(&self, cx: &App) -> impl IntoElement {
        let metrics = self.metrics;

        let metric = |value: String, label: &'static str| {
            div()
                .flex()
                .flex_col()
                .flex_1()
                .child(
                    div()
                        .text_size(ThemeTextSizeKind::Md.resolve(cx))
                        .text_color(ThemeTextColorKind::Primary.resolve(cx))
                        .child(SharedString::from(value)),
                )
                .child(
                    div()
                        .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                        .text_color(ThemeTextColorKind::Muted.resolve(cx))
                        .child(label),
                )
        };

        Card::new()
            .title("Tu perfil")
            .subtitle("Resumen de actividad")
            .child(
                div()
                    .flex()
                    .gap(px(12.))
                    .child(metric(metrics.active_cases.to_string(), "Casos activos"))
                    .child(metric(metrics.resolved_cases.to_string(), "Resueltos"))
                    .child(metric(metrics.followers.to_string(), "Seguidores"))
                    .child(metric(format!("{}%", metrics.success_percent()), "Éxito")),
            )
    }

    /// Likes are local to the session; the mock feed is never written back.
    fn toggle_like(&mut self, event_id: u32) {
        if !self.liked.remove(&event_id) {
            self.liked.insert(event_id);
        }
    }

    fn render_event(&self, event: &FeedEvent, cx: &mut Context<Self>) -> impl IntoElement {
        let accent = event.kind.accent().resolve(cx);
        let is_liked = self.liked.contains(&event.id);
        let likes = event.likes + u32::from(is_liked);
        let event_id = event.id;

        Card::new()
            .layer(ThemeLayerKind::Primary)
            .title(event.title.clone())
            .subtitle(SharedString::from(format!(
                "{} · {} · {}",
                event.author,
                event.author_role,
                event.relative_time()
            )))
            .child(
                div()
                    .flex()
                    .child(
                        div()
                            .px(px(8.))
                            .py(px(2.))
                            .rounded_full()
                            .bg(accent.alpha(0.15))
                            .text_color(accent)
                            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                            .child(event.kind.label()),
                    ),
            )
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Body.resolve(cx))
                    .text_color(ThemeTextColorKind::Secondary.resolve(cx))
                    .child(event.body.clone()),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.))
                    .child(
                        Button::new(
                            ElementId::from("feed").with_index("like", event.id as usize),
                            format!("{likes} me gusta"),
                        )
                        .variant(if is_liked {
                            ButtonVariant::Primary
                        } else {
                            ButtonVariant::Ghost
                        })
                        .size(ThemeLayoutSizeKind::Sm)
                        .layer(ThemeLayerKind::Primary)
                        .on_click(cx.listener(move |view, _event, _window, cx| {
                            view.toggle_like(event_id);
                            cx.notify();
                        })),
                    )
                    .child(
                        div()
                            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                            .text_color(ThemeTextColorKind::Muted.resolve(cx))
                            .child(SharedString::from(format!(
                                "{} comentarios",
                                event.comments
                            ))),
                    ),
            )
    }

    fn render_sheet(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let status = match self.last_snap {
            Some(index) => format!("Última posición: {}", index + 1),
            None => "Arrastra para ver más".to_string(),
        };

        BottomSheet::new("notifications")
            .on_snap(cx.listener(|view, release, _window, cx| {
                view.last_snap = Some(release.index);
                cx.notify();
            }))
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Sm.resolve(cx))
                    .text_color(ThemeTextColorKind::Primary.resolve(cx))
                    .child("Notificaciones"),
            )
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                    .text_color(ThemeTextColorKind::Muted.resolve(cx))
                    .child(SharedString::from(status)),
            )
            .children(self.feed.iter().filter(|event| event.minutes_ago < 24 * 60).map(
                |event| {
                    div()
                        .text_size(ThemeTextSizeKind::Body.resolve(cx))
                        .text_color(ThemeTextColorKind::Secondary.resolve(cx))
                        .child(SharedString::from(format!(
                            "{}: {}",
                            event.kind.label(),
                            event.title
                        )))
                },
            ))
    }
}

impl Render for AppView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        crate::init_for_window(window, cx);

        let theme = cx.get_theme();
        let font = theme.layout.text.default_font.clone();
        let padding = theme.layout.padding.xl;
        let background = ThemeLayerKind::Primary.resolve(cx);

        div()
            .relative()
            .size_full()
            .bg(background)
            .font_family(font.primary_family())
            .line_height(font.line_height)
            .text_size(ThemeTextSizeKind::Body.resolve(cx))
            .child(
                div()
                    .id("feed")
                    .size_full()
                    .flex()
                    .flex_col()
                    .gap(px(16.))
                    .p(padding)
                    .overflow_y_scroll()
                    .child(self.render_header(cx))
                    .child(self.render_metrics(cx))
                    .children(self.feed.iter().map(|event| self.render_event(event, cx))),
            )
            .child(self.render_sheet(cx))
    }
}
