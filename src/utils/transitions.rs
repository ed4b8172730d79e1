use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, WindowUseTransition};

use crate::utils::ElementIdExt;

/// Opacity applied to disabled components.
pub const DISABLED_OPACITY: f32 = 0.45;

/// Animates between 0 and 1 as `on` flips, for knobs and check marks.
pub fn toggle_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    on: bool,
) -> Transition<f32> {
    let goal = if on { 1. } else { 0. };

    let transition = window
        .use_keyed_transition(
            base_id.into().with_suffix("state:transition:toggle"),
            cx,
            duration,
            |_window, _cx| goal,
        )
        .with_easing(ease_out_quint());

    transition.update(cx, |this, cx| {
        if *this != goal {
            *this = goal;
            cx.notify();
        }
    });

    transition
}

/// Fades a component towards [`DISABLED_OPACITY`] while it is disabled.
pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    let goal = if is_disabled { DISABLED_OPACITY } else { 1. };

    let transition = window
        .use_keyed_transition(
            base_id.into().with_suffix("state:transition:disabled"),
            cx,
            Duration::from_millis(365),
            |_window, _cx| goal,
        )
        .with_easing(ease_out_quint());

    transition.update(cx, |this, cx| {
        if *this != goal {
            *this = goal;
            cx.notify();
        }
    });

    transition
}
