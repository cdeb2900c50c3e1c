use super::{CarouselWiring, SharedCarousel};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn add_click_listener(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_control_clicks(w: &CarouselWiring) {
    if let Some(prev) = &w.prev {
        let carousel = w.carousel.clone();
        add_click_listener(prev, move || carousel.borrow_mut().prev());
    }
    if let Some(next) = &w.next {
        let carousel = w.carousel.clone();
        add_click_listener(next, move || carousel.borrow_mut().next());
    }
}

pub fn wire_window_resize(carousel: &SharedCarousel) {
    let carousel = carousel.clone();
    let closure = Closure::wrap(Box::new(move || {
        carousel.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
