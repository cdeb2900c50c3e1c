use super::CarouselWiring;
use slide_core::Gesture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// First active touch; gestures follow a single finger.
#[inline]
fn first_touch_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| f64::from(t.page_x()))
}

fn on_touch(w: &CarouselWiring, event: &str, to_gesture: fn(&web::TouchEvent) -> Option<Gesture>) {
    let carousel = w.carousel.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(gesture) = to_gesture(&ev) {
            carousel.borrow_mut().handle(gesture);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .wrapper
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_touch_gestures(w: &CarouselWiring) {
    on_touch(w, "touchstart", |ev| {
        first_touch_x(ev).map(|x| Gesture::Press { x })
    });
    on_touch(w, "touchmove", |ev| {
        first_touch_x(ev).map(|x| Gesture::Drag { x })
    });
    on_touch(w, "touchend", |_| Some(Gesture::Release));
    on_touch(w, "touchcancel", |_| Some(Gesture::Release));
}
