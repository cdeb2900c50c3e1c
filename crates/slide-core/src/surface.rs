//! Rendering boundary between the carousel model and whatever draws it.
//!
//! The web frontend implements [`SlideSurface`] over real DOM nodes; tests
//! implement it with a recorder. The model never touches the DOM directly.

/// Measured size of the carousel's visible area, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Which navigation control a style update targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Prev,
    Next,
}

/// Whether the track animates towards a new translation or jumps there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Animated,
    Instant,
}

pub trait SlideSurface {
    /// Number of slide items inside the track.
    fn slide_count(&self) -> usize;
    /// Re-measure the positioning wrapper.
    fn measure(&self) -> Viewport;
    /// Apply `width` to every slide item.
    fn set_item_width(&mut self, width: f64);
    fn set_translate_x(&mut self, px: f64);
    fn set_transition(&mut self, duration: &str);
    /// Absent controls ignore this.
    fn set_control_opacity(&mut self, control: Control, opacity: f64);
}

/// Format a pixel length for inline CSS. Negative zero prints as `0px`.
#[inline]
pub fn css_px(px: f64) -> String {
    let px = if px == 0.0 { 0.0 } else { px };
    format!("{}px", px)
}

#[inline]
pub fn translate_x_css(px: f64) -> String {
    format!("translateX({})", css_px(px))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_prints_without_sign() {
        assert_eq!(translate_x_css(-0.0), "translateX(0px)");
        assert_eq!(css_px(-0.0 * 300.0), "0px");
    }

    #[test]
    fn whole_and_fractional_pixels() {
        assert_eq!(translate_x_css(-600.0), "translateX(-600px)");
        assert_eq!(css_px(412.5), "412.5px");
    }
}
