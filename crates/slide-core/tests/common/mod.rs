// Recording surface used by the carousel integration tests.

#![allow(dead_code)]
use slide_core::{translate_x_css, Control, SlideSurface, Viewport};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub slides: usize,
    pub viewport: Viewport,
    pub item_widths: Vec<f64>,
    pub transform: String,
    pub transition_duration: String,
    pub opacity: HashMap<Control, f64>,
    pub has_prev: bool,
    pub has_next: bool,
    /// Every transition duration written, in order.
    pub transition_log: Vec<String>,
}

impl RecordingSurface {
    pub fn new(slides: usize, width: f64) -> Self {
        Self {
            slides,
            viewport: Viewport {
                width,
                height: 200.0,
            },
            item_widths: vec![0.0; slides],
            has_prev: true,
            has_next: true,
            ..Default::default()
        }
    }

    pub fn without_controls(mut self) -> Self {
        self.has_prev = false;
        self.has_next = false;
        self
    }

    pub fn opacity_of(&self, control: Control) -> Option<f64> {
        self.opacity.get(&control).copied()
    }
}

impl SlideSurface for RecordingSurface {
    fn slide_count(&self) -> usize {
        self.slides
    }

    fn measure(&self) -> Viewport {
        self.viewport
    }

    fn set_item_width(&mut self, width: f64) {
        for w in &mut self.item_widths {
            *w = width;
        }
    }

    fn set_translate_x(&mut self, px: f64) {
        self.transform = translate_x_css(px);
    }

    fn set_transition(&mut self, duration: &str) {
        self.transition_duration = duration.to_string();
        self.transition_log.push(duration.to_string());
    }

    fn set_control_opacity(&mut self, control: Control, opacity: f64) {
        let present = match control {
            Control::Prev => self.has_prev,
            Control::Next => self.has_next,
        };
        if present {
            self.opacity.insert(control, opacity);
        }
    }
}
