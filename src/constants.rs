// Interaction tuning constants. The source iterations disagreed on several
// of these (0.5 vs 0.7 sensitivity, 50 vs 300 ms debounce); they are kept
// here as named calibration knobs rather than inline magic numbers.

// Number of icons on the ring; placement angles are multiples of the step.
pub const ITEM_COUNT: usize = 3;
pub const STEP_DEG: f32 = 360.0 / ITEM_COUNT as f32;

// Degrees of rotation per pixel of horizontal drag.
pub const DRAG_SENSITIVITY: f32 = 0.5;

// A gesture whose total pointer travel stays under this is a tap, not a drag.
pub const TAP_THRESHOLD_PX: f32 = 10.0;

// Release velocity (px/ms) above which the snap advances one extra step
// in the direction of motion.
pub const FLICK_VELOCITY_PX_PER_MS: f32 = 0.6;

// Minimum gap between click-sound triggers; overlapping pointer and
// synthetic click events from one physical tap must not double-fire.
pub const SOUND_DEBOUNCE_MS: f64 = 200.0;

// Viewport width at and below which the carousel is drag-interactive.
// Wider layouts show the ring statically and drop the inline transform.
pub const DRAG_BREAKPOINT_PX: f32 = 900.0;

// Background parallax: fraction of mouse travel mapped to background
// position, in percent around the 50% center.
pub const PARALLAX_RANGE_PCT: f32 = 5.0;
