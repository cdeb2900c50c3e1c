#![cfg(target_arch = "wasm32")]
use slide_core::Carousel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod ids;


#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slide-web loaded");
    Ok(())
}

fn mount_carousel(element_id: &str) -> anyhow::Result<events::SharedCarousel> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let surface = dom::mount(&document, element_id)?;
    let wrapper = surface.wrapper().clone();
    let prev = surface.control(slide_core::Control::Prev).cloned();
    let next = surface.control(slide_core::Control::Next).cloned();

    let carousel = Rc::new(RefCell::new(Carousel::new(surface)));
    events::wire_carousel(events::CarouselWiring {
        carousel: carousel.clone(),
        wrapper,
        prev,
        next,
    });
    Ok(carousel)
}

/// Carousel bound to one container element, exported to JS as `Slide`.
#[wasm_bindgen(js_name = Slide)]
pub struct Slides {
    carousel: events::SharedCarousel,
}

#[wasm_bindgen(js_class = Slide)]
impl Slides {
    /// Throws when no element has the id `element_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(element_id: &str) -> Result<Slides, JsValue> {
        match mount_carousel(element_id) {
            Ok(carousel) => Ok(Slides { carousel }),
            Err(e) => {
                log::error!("slide init error: {:?}", e);
                Err(js_sys::Error::new(&e.to_string()).into())
            }
        }
    }

    pub fn next(&self) {
        self.carousel.borrow_mut().next();
    }

    pub fn prev(&self) {
        self.carousel.borrow_mut().prev();
    }

    pub fn resize(&self) {
        self.carousel.borrow_mut().resize();
    }

    #[wasm_bindgen(getter)]
    pub fn index(&self) -> u32 {
        self.carousel.borrow().index() as u32
    }

    #[wasm_bindgen(getter, js_name = maxIndex)]
    pub fn max_index(&self) -> u32 {
        self.carousel.borrow().max_index() as u32
    }
}
