//! Drag/touch gesture interpretation.
//!
//! Frontends normalize mouse and touch events into [`Gesture`]s carrying a
//! single horizontal page position. Everything here is pure: given the drag
//! state and the carousel geometry it returns what should happen, and the
//! carousel applies it.

use crate::constants::MULTI_SKIP_FRACTION;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Pointer or first touch went down at page X.
    Press { x: f64 },
    /// Pointer or first touch moved to page X.
    Drag { x: f64 },
    /// Pointer released, touch ended, or the pointer left the carousel.
    Release,
}

/// Start and latest positions of the gesture in progress. `None` in both is idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl DragState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Raw pointer delta since the press, once the pointer has moved.
    #[inline]
    pub fn offset(&self) -> Option<f64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Outcome of releasing a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Return to the current slide.
    SnapBack,
    /// Move the index to `from`, then take one regular step in `direction`.
    Step { from: usize, direction: Direction },
}

/// Dampen the drag offset when pulling past the first or last slide.
#[inline]
pub fn resisted_offset(raw: f64, index: usize, max_index: usize, resistance: f64) -> f64 {
    let past_first = index == 0 && raw > 0.0;
    let past_last = index >= max_index && raw < 0.0;
    if past_first || past_last {
        raw * resistance
    } else {
        raw
    }
}

/// Decide how a released drag resolves.
///
/// A drag shorter than `commit_fraction` of the viewport snaps back. Longer
/// drags step one slide against the drag direction; drags beyond a full
/// viewport first skip `round(fraction) - 1` further slides, with halves
/// rounding down. The skip clamps to `max_index - 1` going forward and to `1`
/// going backward so the final step lands inside the track.
pub fn settle(
    drag: DragState,
    viewport_width: f64,
    index: usize,
    max_index: usize,
    commit_fraction: f64,
) -> Settle {
    let Some(size) = drag.offset() else {
        return Settle::SnapBack;
    };
    let fraction = size.abs() / viewport_width;
    if !fraction.is_finite() || fraction < commit_fraction {
        return Settle::SnapBack;
    }

    let direction = if size < 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    };
    let from = if fraction > MULTI_SKIP_FRACTION {
        skip_origin(index, max_index, direction, fraction)
    } else {
        index
    };
    Settle::Step { from, direction }
}

fn skip_origin(index: usize, max_index: usize, direction: Direction, fraction: f64) -> usize {
    // Ties round down: 2.5, 3.5 and 4.5 viewports skip 1, 2 and 3 extra slides.
    let extra = ((fraction - 0.5).ceil() - 1.0).max(0.0) as i64;
    let current = index as i64;
    match direction {
        Direction::Forward if index < max_index => {
            let landed = current.saturating_add(extra);
            if landed > max_index as i64 {
                max_index - 1
            } else {
                landed as usize
            }
        }
        Direction::Backward if index > 0 => {
            let landed = current.saturating_sub(extra);
            if landed < 0 {
                1
            } else {
                landed as usize
            }
        }
        _ => index,
    }
}
