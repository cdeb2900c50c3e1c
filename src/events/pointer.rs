use super::CarouselWiring;
use slide_core::Gesture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn page_x(ev: &web::MouseEvent) -> f64 {
    f64::from(ev.page_x())
}

fn on_mouse(w: &CarouselWiring, event: &str, to_gesture: fn(&web::MouseEvent) -> Gesture) {
    let carousel = w.carousel.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        carousel.borrow_mut().handle(to_gesture(&ev));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .wrapper
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Mouse drags on the wrapper. Leaving the wrapper ends the drag like a release.
pub fn wire_mouse_gestures(w: &CarouselWiring) {
    on_mouse(w, "mousedown", |ev| Gesture::Press { x: page_x(ev) });
    on_mouse(w, "mousemove", |ev| Gesture::Drag { x: page_x(ev) });
    on_mouse(w, "mouseup", |_| Gesture::Release);
    on_mouse(w, "mouseleave", |_| Gesture::Release);
}
