use crate::constants::PARALLAX_RANGE_PCT;

// Rate limit for fire-and-forget sound triggers. Overlapping pointerup and
// synthetic click events from one physical tap arrive within a few ms of
// each other and must collapse to a single play.
#[derive(Clone, Copy, Debug)]
pub struct SoundGate {
    window_ms: f64,
    last_fired_ms: Option<f64>,
}

impl SoundGate {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_fired_ms: None,
        }
    }

    /// True when a trigger at `now_ms` is allowed; records the fire time.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_fired_ms {
            if now_ms - last < self.window_ms {
                return false;
            }
        }
        self.last_fired_ms = Some(now_ms);
        true
    }
}

// ---------------- Parallax helpers ----------------

/// Background position percentages for a mouse at (x, y) in a w x h
/// viewport: center maps to 50%/50%, edges to 50% +/- the parallax range.
pub fn parallax_position(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (50.0, 50.0);
    }
    let x_norm = (x / width - 0.5) * 2.0;
    let y_norm = (y / height - 0.5) * 2.0;
    (
        50.0 + x_norm * PARALLAX_RANGE_PCT,
        50.0 + y_norm * PARALLAX_RANGE_PCT,
    )
}
