use crate::constants::{
    DRAG_BREAKPOINT_PX, DRAG_SENSITIVITY, FLICK_VELOCITY_PX_PER_MS, ITEM_COUNT, TAP_THRESHOLD_PX,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PointerId(pub i32);

// Normalized boundary event: the core never branches on device kind.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f32,
    pub y: f32,
    pub primary: bool,
    pub time_ms: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct CarouselConfig {
    pub item_count: usize,
    pub drag_sensitivity: f32,
    pub tap_threshold_px: f32,
    pub flick_velocity_px_per_ms: f32,
    pub drag_breakpoint_px: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_count: ITEM_COUNT,
            drag_sensitivity: DRAG_SENSITIVITY,
            tap_threshold_px: TAP_THRESHOLD_PX,
            flick_velocity_px_per_ms: FLICK_VELOCITY_PX_PER_MS,
            drag_breakpoint_px: DRAG_BREAKPOINT_PX,
        }
    }
}

impl CarouselConfig {
    #[inline]
    pub fn step_deg(&self) -> f32 {
        360.0 / self.item_count as f32
    }
}

#[derive(Clone, Copy, Debug)]
struct DragSession {
    pointer: PointerId,
    last_x: f32,
    last_time_ms: f64,
    accumulated_px: f32,
    velocity_px_per_ms: f32,
}

// Outcome of a settled gesture, kept until the follow-up click consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gesture {
    Tap,
    Drag,
}

#[derive(Clone, Copy, Debug)]
pub struct Settled {
    pub angle: f32,
    pub active_index: usize,
    pub tap: bool,
}

/// Maps an unbounded rotation angle to the item facing front.
///
/// Items sit at placement angles `k * step`; bucket boundaries bisect the
/// gaps between them and are left-open/right-closed, so an angle landing
/// exactly on a bisector stays with the lower bucket (60 -> 0, 180 -> 1).
pub fn active_index_for(angle: f32, item_count: usize) -> usize {
    let step = 360.0 / item_count as f32;
    let half = step * 0.5;
    let normalized = angle.rem_euclid(360.0);
    let k = ((normalized - half) / step).ceil().max(0.0) as usize;
    k % item_count
}

/// Nearest settled multiple of the step, ties rounded to even so the exact
/// halfway angle snaps back instead of advancing.
pub fn snapped_angle(angle: f32, step: f32) -> f32 {
    (angle / step).round_ties_even() * step
}

pub struct CarouselController {
    config: CarouselConfig,
    angle: f32,
    session: Option<DragSession>,
    drag_enabled: bool,
    pending_gesture: Option<Gesture>,
}

impl CarouselController {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            angle: 0.0,
            session: None,
            drag_enabled: true,
            pending_gesture: None,
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        active_index_for(self.angle, self.config.item_count)
    }

    #[inline]
    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a drag session. Returns false (ignored) for non-primary
    /// contacts, while another session is live, or when drag is disabled
    /// by the viewport mode.
    pub fn begin_drag(&mut self, sample: &PointerSample) -> bool {
        if !self.drag_enabled || !sample.primary || self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            pointer: sample.id,
            last_x: sample.x,
            last_time_ms: sample.time_ms,
            accumulated_px: 0.0,
            velocity_px_per_ms: 0.0,
        });
        true
    }

    /// Applies a move to the live session; returns the new angle, or None
    /// when there is no matching session (stale or secondary pointer).
    pub fn continue_drag(&mut self, sample: &PointerSample) -> Option<f32> {
        let session = self.session.as_mut()?;
        if session.pointer != sample.id {
            return None;
        }
        let delta = sample.x - session.last_x;
        let dt = sample.time_ms - session.last_time_ms;
        if dt > 0.0 {
            session.velocity_px_per_ms = delta / dt as f32;
        }
        session.last_x = sample.x;
        session.last_time_ms = sample.time_ms;
        session.accumulated_px += delta.abs();
        self.angle += delta * self.config.drag_sensitivity;
        Some(self.angle)
    }

    /// Closes the session and snaps. A fast release advances one extra
    /// step in the direction of motion; otherwise the nearest multiple of
    /// the step wins.
    pub fn end_drag(&mut self, sample: &PointerSample) -> Option<Settled> {
        let session = self.session?;
        if session.pointer != sample.id {
            return None;
        }
        self.session = None;

        let step = self.config.step_deg();
        let mut target = snapped_angle(self.angle, step);
        if session.velocity_px_per_ms.abs() > self.config.flick_velocity_px_per_ms {
            target += session.velocity_px_per_ms.signum() * step;
        }
        self.angle = target;

        let tap = session.accumulated_px < self.config.tap_threshold_px;
        self.pending_gesture = Some(if tap { Gesture::Tap } else { Gesture::Drag });
        Some(Settled {
            angle: self.angle,
            active_index: self.active_index(),
            tap,
        })
    }

    /// External cancellation (capture lost, pointer left the region) is a
    /// normal end of drag; a leaked session would desynchronize the next one.
    pub fn cancel_drag(&mut self, sample: &PointerSample) -> Option<Settled> {
        self.end_drag(sample)
    }

    /// Rotates the given item to the front along the shortest arc.
    pub fn reveal(&mut self, item_index: usize) -> f32 {
        let step = self.config.step_deg();
        let desired = item_index as f32 * step;
        let mut diff = (desired - self.angle).rem_euclid(360.0);
        if diff > 180.0 {
            diff -= 360.0;
        }
        self.angle += diff;
        self.angle
    }

    /// Decides whether the click following a gesture may navigate.
    ///
    /// Two-stage affordance on constrained layouts: tapping a non-active
    /// item only brings it to the front; tapping the active item follows
    /// its link. A drag never navigates. Consumes the pending gesture.
    pub fn should_navigate(&mut self, item_index: usize) -> bool {
        if !self.drag_enabled {
            return true;
        }
        match self.pending_gesture.take() {
            Some(Gesture::Drag) => false,
            _ => item_index == self.active_index(),
        }
    }

    /// Recomputes the drag-enabled mode once per resize. Above the
    /// breakpoint the ring returns to the neutral display state and any
    /// live session is dropped.
    pub fn set_viewport_width(&mut self, width: f32) -> bool {
        self.drag_enabled = width <= self.config.drag_breakpoint_px;
        if !self.drag_enabled {
            self.angle = 0.0;
            self.session = None;
            self.pending_gesture = None;
        }
        self.drag_enabled
    }
}
