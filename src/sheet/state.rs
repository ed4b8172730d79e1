use std::time::{Duration, Instant};

use smallvec::{SmallVec, smallvec};

use crate::sheet::{SnapPoints, SnapPointsError};

/// If the pointer rests longer than this before release, the drag ends with
/// zero velocity instead of whatever speed it had earlier.
const VELOCITY_STALE_AFTER: Duration = Duration::from_millis(100);

/// Release velocity is measured over the pointer samples this close to the
/// last one, so a single repeated position does not erase a fling.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
struct PointerSample {
    y: f32,
    at: Instant,
}

#[derive(Debug, Clone)]
struct ActiveDrag {
    start_pointer_y: f32,
    start_height: f32,
    /// Oldest first. At most one sample lies outside [`VELOCITY_WINDOW`].
    samples: SmallVec<[PointerSample; 8]>,
}

impl ActiveDrag {
    fn record(&mut self, sample: PointerSample) {
        self.samples.push(sample);

        while self.samples.len() > 2
            && sample.at.saturating_duration_since(self.samples[1].at) > VELOCITY_WINDOW
        {
            self.samples.remove(0);
        }
    }
}

/// Where a released drag came to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapRelease {
    pub index: usize,
    pub height: f32,
    /// Pixels per second along the height axis, positive when growing.
    pub velocity: f32,
}

/// Height and gesture state of a draggable bottom sheet.
///
/// Pointer coordinates grow downward, so moving the pointer up grows the sheet.
#[derive(Debug, Clone)]
pub struct SheetState {
    snap_points: SnapPoints,
    settled_index: usize,
    height: f32,
    drag: Option<ActiveDrag>,
}

impl SheetState {
    pub fn new(
        fractions: &[f32],
        available_height: f32,
        initial_index: usize,
    ) -> Result<Self, SnapPointsError> {
        let snap_points = SnapPoints::from_fractions(fractions, available_height)?;
        let settled_index = initial_index.min(snap_points.last_index());

        Ok(Self {
            height: snap_points.height(settled_index),
            snap_points,
            settled_index,
            drag: None,
        })
    }

    pub fn snap_points(&self) -> &SnapPoints {
        &self.snap_points
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn settled_index(&self) -> usize {
        self.settled_index
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_expanded(&self) -> bool {
        self.settled_index == self.snap_points.last_index()
    }

    pub fn begin_drag(&mut self, pointer_y: f32, at: Instant) {
        self.drag = Some(ActiveDrag {
            start_pointer_y: pointer_y,
            start_height: self.height,
            samples: smallvec![PointerSample { y: pointer_y, at }],
        });
    }

    /// Follows the pointer, clamped to the outermost snap points. Returns the
    /// new height, or the current one when no drag is active.
    pub fn drag_to(&mut self, pointer_y: f32, at: Instant) -> f32 {
        let Some(drag) = self.drag.as_mut() else {
            return self.height;
        };

        drag.record(PointerSample { y: pointer_y, at });

        let delta = drag.start_pointer_y - pointer_y;
        self.height = self.snap_points.clamp(drag.start_height + delta);
        self.height
    }

    /// Ends the gesture and settles on a snap point. Without an active drag
    /// this just reports the current resting point.
    pub fn end_drag(&mut self, at: Instant) -> SnapRelease {
        let Some(drag) = self.drag.take() else {
            return SnapRelease {
                index: self.settled_index,
                height: self.height,
                velocity: 0.,
            };
        };

        let velocity = release_velocity(&drag, at);
        let index = self.snap_points.resolve_release(self.height, velocity);

        log::debug!(
            "sheet released at {:.1}px with {:.1}px/s, snapping to #{index}",
            self.height,
            velocity
        );

        self.snap_to(index);

        SnapRelease {
            index,
            height: self.height,
            velocity,
        }
    }

    /// Abandons the gesture and returns to the last resting point.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.height = self.snap_points.height(self.settled_index);
        }
    }

    pub fn snap_to(&mut self, index: usize) {
        self.settled_index = index.min(self.snap_points.last_index());
        self.height = self.snap_points.height(self.settled_index);
    }

    pub fn expand(&mut self) {
        self.snap_to(self.snap_points.last_index());
    }

    pub fn collapse(&mut self) {
        self.snap_to(0);
    }

    /// Rescales snap points to a new available height. A drag in progress is
    /// cancelled since its anchor no longer matches the layout.
    pub fn resize(&mut self, available_height: f32) -> Result<(), SnapPointsError> {
        self.snap_points.resize(available_height)?;
        self.drag = None;
        self.height = self.snap_points.height(self.settled_index);
        Ok(())
    }
}

/// Average speed from the oldest sample inside the window to the latest one.
/// When the pointer paused right before its last move, the window holds no
/// earlier sample and the one just before the latest is used instead.
fn release_velocity(drag: &ActiveDrag, released_at: Instant) -> f32 {
    let Some((latest, earlier)) = drag.samples.split_last() else {
        return 0.;
    };

    if released_at.saturating_duration_since(latest.at) > VELOCITY_STALE_AFTER {
        return 0.;
    }

    let Some(anchor) = earlier
        .iter()
        .find(|sample| latest.at.saturating_duration_since(sample.at) <= VELOCITY_WINDOW)
        .or(earlier.last())
    else {
        return 0.;
    };

    let elapsed = latest.at.saturating_duration_since(anchor.at).as_secs_f32();
    if elapsed <= f32::EPSILON {
        return 0.;
    }

    // Pointer moving up (negative dy) grows the sheet.
    (anchor.y - latest.y) / elapsed
}
