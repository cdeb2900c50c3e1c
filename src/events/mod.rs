use crate::dom::DomSurface;
use slide_core::Carousel;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod controls;
pub mod pointer;
pub mod touch;

pub use controls::{wire_control_clicks, wire_window_resize};
pub use pointer::wire_mouse_gestures;
pub use touch::wire_touch_gestures;

pub type SharedCarousel = Rc<RefCell<Carousel<DomSurface>>>;

#[derive(Clone)]
pub struct CarouselWiring {
    pub carousel: SharedCarousel,
    pub wrapper: web::HtmlElement,
    pub prev: Option<web::HtmlElement>,
    pub next: Option<web::HtmlElement>,
}

/// Attach every listener a mounted carousel needs. Listeners live for the page.
pub fn wire_carousel(w: CarouselWiring) {
    wire_window_resize(&w.carousel);
    wire_control_clicks(&w);
    wire_mouse_gestures(&w);
    wire_touch_gestures(&w);
}
