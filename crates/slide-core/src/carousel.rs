//! Carousel state: current slide, viewport geometry and the drag in progress.
//!
//! All rendering goes through the [`SlideSurface`] handed to the constructor,
//! so the same model drives the DOM in the browser and a recorder in tests.

use crate::gesture::{resisted_offset, settle, Direction, DragState, Gesture, Settle};
use crate::options::SlideOptions;
use crate::surface::{Control, SlideSurface, Transition, Viewport};

pub struct Carousel<S: SlideSurface> {
    surface: S,
    options: SlideOptions,
    index: usize,
    max_index: usize,
    viewport: Viewport,
    drag: DragState,
    transition: Transition,
    translate_x: f64,
}

impl<S: SlideSurface> Carousel<S> {
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, SlideOptions::default())
    }

    /// Count the slides, measure the viewport and perform the initial layout.
    ///
    /// An empty track saturates `max_index` at 0, which turns every
    /// navigation into a no-op.
    pub fn with_options(surface: S, options: SlideOptions) -> Self {
        let max_index = surface.slide_count().saturating_sub(1);
        let viewport = surface.measure();
        let mut carousel = Self {
            surface,
            options,
            index: 0,
            max_index,
            viewport,
            drag: DragState::default(),
            transition: Transition::Instant,
            translate_x: 0.0,
        };
        carousel.set_control_disabled(Control::Prev, true);
        carousel.set_control_disabled(Control::Next, carousel.max_index <= carousel.index);
        carousel.lay_out();
        log::debug!(
            "[carousel] mounted slides={} width={:.1}",
            carousel.max_index + 1,
            carousel.viewport.width
        );
        carousel
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn max_index(&self) -> usize {
        self.max_index
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[inline]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Last translation written to the track, in pixels.
    #[inline]
    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    #[inline]
    pub fn options(&self) -> &SlideOptions {
        &self.options
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn next(&mut self) {
        self.set_transition(Transition::Animated);
        if self.index >= self.max_index {
            self.apply_offset(0.0);
            return;
        }
        self.index += 1;
        self.apply_offset(0.0);
        self.set_control_disabled(Control::Prev, false);
        self.set_control_disabled(Control::Next, self.index >= self.max_index);
    }

    pub fn prev(&mut self) {
        self.set_transition(Transition::Animated);
        if self.index == 0 {
            self.apply_offset(0.0);
            return;
        }
        self.index -= 1;
        self.apply_offset(0.0);
        self.set_control_disabled(Control::Prev, self.index == 0);
        self.set_control_disabled(Control::Next, false);
    }

    /// Re-measure the viewport and re-size every slide without animating.
    pub fn resize(&mut self) {
        self.viewport = self.surface.measure();
        self.lay_out();
    }

    pub fn handle(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Press { x } => self.press(x),
            Gesture::Drag { x } => self.drag_to(x),
            Gesture::Release => self.release(),
        }
    }

    pub fn press(&mut self, x: f64) {
        self.drag.start = Some(x);
    }

    /// Follow the pointer. Ignored unless a press was recorded.
    pub fn drag_to(&mut self, x: f64) {
        let Some(start) = self.drag.start else {
            return;
        };
        self.drag.end = Some(x);
        self.set_transition(Transition::Instant);
        let offset = resisted_offset(
            x - start,
            self.index,
            self.max_index,
            self.options.edge_resistance,
        );
        self.apply_offset(offset);
    }

    /// Finish the gesture: snap back or navigate, then return to idle.
    pub fn release(&mut self) {
        let decision = settle(
            self.drag,
            self.viewport.width,
            self.index,
            self.max_index,
            self.options.commit_fraction,
        );
        self.drag = DragState::default();

        match decision {
            Settle::SnapBack => {
                self.set_transition(Transition::Animated);
                self.apply_offset(0.0);
                log::debug!("[carousel] drag cancelled at {}", self.index);
            }
            Settle::Step { from, direction } => {
                if from != self.index {
                    log::trace!("[carousel] skip {} -> {}", self.index, from);
                }
                self.index = from;
                match direction {
                    Direction::Forward => self.next(),
                    Direction::Backward => self.prev(),
                }
                // A skip that lands on an edge leaves the step above as a no-op.
                self.sync_controls();
                log::debug!("[carousel] drag committed {:?} -> {}", direction, self.index);
            }
        }
    }

    fn lay_out(&mut self) {
        self.surface.set_item_width(self.viewport.width);
        self.set_transition(Transition::Instant);
        self.apply_offset(0.0);
    }

    fn apply_offset(&mut self, offset: f64) {
        let px = -(self.index as f64) * self.viewport.width + offset;
        self.translate_x = px;
        self.surface.set_translate_x(px);
    }

    fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
        let duration = self.options.transition_duration(transition);
        self.surface.set_transition(duration);
    }

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        let opacity = self.options.control_opacity(disabled);
        self.surface.set_control_opacity(control, opacity);
    }

    fn sync_controls(&mut self) {
        self.set_control_disabled(Control::Prev, self.index == 0);
        self.set_control_disabled(Control::Next, self.index >= self.max_index);
    }
}
