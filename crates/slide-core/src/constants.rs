// Interaction and styling constants shared by the carousel model and its frontends.

// Gesture thresholds (fractions of the viewport width)
pub const COMMIT_FRACTION: f64 = 0.5; // release at or past this commits a slide change
pub const MULTI_SKIP_FRACTION: f64 = 1.0; // release past this may skip extra slides

// Rubber-band factor applied when dragging past the first or last slide
pub const EDGE_RESISTANCE: f64 = 0.3;

// Control opacity
pub const CONTROL_ENABLED_OPACITY: f64 = 1.0;
pub const CONTROL_DISABLED_OPACITY: f64 = 0.5;

// Track transition durations (CSS time values)
pub const TRANSITION_ANIMATED: &str = "0.3s";
pub const TRANSITION_INSTANT: &str = "0s";
