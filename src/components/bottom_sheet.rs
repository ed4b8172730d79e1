use std::{rc::Rc, time::Instant};

use gpui::{
    AnyElement, App, CursorStyle, ElementId, Entity, InteractiveElement, IntoElement,
    MouseButton, MouseDownEvent, MouseMoveEvent, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    sheet::{SheetState, SnapRelease},
    theme::{ThemeExt, ThemeLayerKind, ThemeTextColorKind},
    utils::{ElementIdExt, PixelsExt, RgbaExt},
};

type OnSnap = Rc<dyn Fn(&SnapRelease, &mut Window, &mut App) + 'static>;

/// Snap points used when none are given: peeking, half open and expanded.
pub const DEFAULT_SHEET_FRACTIONS: [f32; 3] = [0.12, 0.5, 0.9];

/// Per-element state kept across frames.
struct SheetEntry {
    available_height: f32,
    sheet: Option<SheetState>,
}

impl SheetEntry {
    fn new() -> Self {
        Self {
            available_height: f32::NAN,
            sheet: None,
        }
    }

    /// Builds or resizes the sheet when the space it lives in changes.
    fn sync(&mut self, fractions: &[f32], initial_index: usize, available_height: f32) {
        if self.available_height == available_height {
            return;
        }
        self.available_height = available_height;

        match self.sheet.as_mut() {
            Some(sheet) => {
                if let Err(err) = sheet.resize(available_height) {
                    log::warn!("bottom sheet kept its previous size: {err}");
                }
            }
            None => match SheetState::new(fractions, available_height, initial_index) {
                Ok(sheet) => self.sheet = Some(sheet),
                Err(err) => log::warn!("bottom sheet hidden: {err}"),
            },
        }
    }

    fn begin_drag(&mut self, pointer_y: f32, at: Instant) -> bool {
        match self.sheet.as_mut() {
            Some(sheet) => {
                sheet.begin_drag(pointer_y, at);
                true
            }
            None => false,
        }
    }

    fn drag_to(&mut self, pointer_y: f32, at: Instant) -> bool {
        match self.sheet.as_mut() {
            Some(sheet) if sheet.is_dragging() => {
                sheet.drag_to(pointer_y, at);
                true
            }
            _ => false,
        }
    }

    fn release(&mut self, at: Instant) -> Option<SnapRelease> {
        let sheet = self.sheet.as_mut()?;
        sheet.is_dragging().then(|| sheet.end_drag(at))
    }
}

/// A panel anchored to the bottom of the window that the user drags between
/// snap points. Snap points are fractions of the window height and are read
/// once, when the sheet is first shown under its id.
#[derive(IntoElement)]
pub struct BottomSheet {
    id: ElementId,
    fractions: SmallVec<[f32; 4]>,
    initial_index: usize,
    layer: ThemeLayerKind,
    on_snap: Option<OnSnap>,
    children: SmallVec<[AnyElement; 2]>,
}

impl BottomSheet {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            fractions: SmallVec::from_slice(&DEFAULT_SHEET_FRACTIONS),
            initial_index: 0,
            layer: ThemeLayerKind::Secondary,
            on_snap: None,
            children: SmallVec::new(),
        }
    }

    pub fn snap_points(mut self, fractions: impl IntoIterator<Item = f32>) -> Self {
        self.fractions = fractions.into_iter().collect();
        self
    }

    pub fn initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    /// Called each time a drag settles on a snap point.
    pub fn on_snap(
        mut self,
        on_snap: impl Fn(&SnapRelease, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_snap = Some(Rc::new(on_snap));
        self
    }
}

impl ParentElement for BottomSheet {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

fn release_drag(
    entry: &Entity<SheetEntry>,
    on_snap: Option<&OnSnap>,
    window: &mut Window,
    cx: &mut App,
) {
    let Some(release) = entry.update(cx, |entry, _cx| entry.release(Instant::now())) else {
        return;
    };
    cx.notify(entry.entity_id());

    if let Some(on_snap) = on_snap {
        (on_snap)(&release, window, cx);
    }
}

fn follow_pointer(
    entry: &Entity<SheetEntry>,
    on_snap: Option<&OnSnap>,
    event: &MouseMoveEvent,
    window: &mut Window,
    cx: &mut App,
) {
    // The button went up somewhere we never heard about.
    if event.pressed_button != Some(MouseButton::Left) {
        release_drag(entry, on_snap, window, cx);
        return;
    }

    let pointer_y = event.position.y.as_f32();
    if entry.update(cx, |entry, _cx| entry.drag_to(pointer_y, Instant::now())) {
        cx.notify(entry.entity_id());
    }
}

impl RenderOnce for BottomSheet {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let available_height = window.viewport_size().height.as_f32();

        let entry = window.use_keyed_state(self.id.with_suffix("state:sheet"), cx, |_window, _cx| {
            SheetEntry::new()
        });
        entry.update(cx, |entry, _cx| {
            entry.sync(&self.fractions, self.initial_index, available_height)
        });

        let Some((height, is_dragging)) = entry
            .read(cx)
            .sheet
            .as_ref()
            .map(|sheet| (sheet.height(), sheet.is_dragging()))
        else {
            return div().into_any_element();
        };

        let background = self.layer.resolve(cx);
        let text_primary = ThemeTextColorKind::Primary.resolve(cx);
        let grabber_color = ThemeTextColorKind::Muted.resolve(cx).alpha(0.6);
        let corner_radius = cx.get_theme().layout.corner_radii.xl;
        let padding = cx.get_theme().layout.padding.lg;

        let on_snap = self.on_snap;

        let handle = div()
            .id(self.id.with_suffix("handle"))
            .flex()
            .flex_none()
            .justify_center()
            .w_full()
            .py(padding / 2.)
            .cursor(if is_dragging {
                CursorStyle::ClosedHand
            } else {
                CursorStyle::OpenHand
            })
            .child(div().w(px(36.)).h(px(4.)).rounded_full().bg(grabber_color))
            .on_mouse_down(MouseButton::Left, {
                let entry = entry.clone();

                move |event: &MouseDownEvent, _window, cx| {
                    cx.stop_propagation();

                    let pointer_y = event.position.y.as_f32();
                    if entry.update(cx, |entry, _cx| entry.begin_drag(pointer_y, Instant::now())) {
                        cx.notify(entry.entity_id());
                    }
                }
            });

        let panel = div()
            .id(self.id.with_suffix("panel"))
            .absolute()
            .bottom_0()
            .left_0()
            .w_full()
            .h(px(height))
            .flex()
            .flex_col()
            .overflow_hidden()
            .rounded_t(corner_radius)
            .border_t_1()
            .border_color(background.mix(text_primary, 0.08))
            .bg(background)
            .occlude()
            .child(handle)
            .child(
                div()
                    .id(self.id.with_suffix("content"))
                    .flex()
                    .flex_col()
                    .flex_1()
                    .gap(padding)
                    .px(padding)
                    .pb(padding)
                    .overflow_y_scroll()
                    .children(self.children),
            )
            .when(is_dragging, |this| {
                let entry = entry.clone();
                let on_snap = on_snap.clone();

                this.on_mouse_move(move |event, window, cx| {
                    follow_pointer(&entry, on_snap.as_ref(), event, window, cx)
                })
            });

        div()
            .id(self.id.clone())
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .when(is_dragging, |this| {
                let move_entry = entry.clone();
                let move_on_snap = on_snap.clone();
                let up_entry = entry.clone();
                let up_on_snap = on_snap.clone();

                this.cursor(CursorStyle::ClosedHand)
                    .on_mouse_move(move |event, window, cx| {
                        follow_pointer(&move_entry, move_on_snap.as_ref(), event, window, cx)
                    })
                    .on_mouse_up(MouseButton::Left, move |_event, window, cx| {
                        release_drag(&up_entry, up_on_snap.as_ref(), window, cx)
                    })
                    .on_mouse_up_out(MouseButton::Left, move |_event, window, cx| {
                        release_drag(&entry, on_snap.as_ref(), window, cx)
                    })
            })
            .child(panel)
            .into_any_element()
    }
}
