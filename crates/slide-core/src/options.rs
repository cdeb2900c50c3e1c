use crate::constants::{
    COMMIT_FRACTION, CONTROL_DISABLED_OPACITY, CONTROL_ENABLED_OPACITY, EDGE_RESISTANCE,
    TRANSITION_ANIMATED, TRANSITION_INSTANT,
};
use crate::surface::Transition;

/// Tuning knobs for a carousel instance. `Default` mirrors the constants module.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideOptions {
    pub commit_fraction: f64,
    pub edge_resistance: f64,
    pub enabled_opacity: f64,
    pub disabled_opacity: f64,
    pub animated_duration: &'static str,
    pub instant_duration: &'static str,
}

impl Default for SlideOptions {
    fn default() -> Self {
        Self {
            commit_fraction: COMMIT_FRACTION,
            edge_resistance: EDGE_RESISTANCE,
            enabled_opacity: CONTROL_ENABLED_OPACITY,
            disabled_opacity: CONTROL_DISABLED_OPACITY,
            animated_duration: TRANSITION_ANIMATED,
            instant_duration: TRANSITION_INSTANT,
        }
    }
}

impl SlideOptions {
    #[inline]
    pub fn control_opacity(&self, disabled: bool) -> f64 {
        if disabled {
            self.disabled_opacity
        } else {
            self.enabled_opacity
        }
    }

    #[inline]
    pub fn transition_duration(&self, transition: Transition) -> &'static str {
        match transition {
            Transition::Animated => self.animated_duration,
            Transition::Instant => self.instant_duration,
        }
    }
}
