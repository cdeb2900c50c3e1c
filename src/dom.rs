use crate::constants::{
    NEXT_BUTTON_CLASS, PREV_BUTTON_CLASS, SLIDE_ITEM_CLASS, WRAPPER_POSITION, WRAPPER_TAG,
};
use crate::ids;
use slide_core::{css_px, translate_x_css, Control, SlideError, SlideSurface, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn dom_err(e: JsValue) -> SlideError {
    SlideError::Dom(format!("{:?}", e))
}

/// Live handles to the restructured carousel subtree.
pub struct DomSurface {
    wrapper: web::HtmlElement,
    track: web::HtmlElement,
    items: web::HtmlCollection,
    prev: Option<web::HtmlElement>,
    next: Option<web::HtmlElement>,
}

impl DomSurface {
    pub fn wrapper(&self) -> &web::HtmlElement {
        &self.wrapper
    }

    pub fn control(&self, control: Control) -> Option<&web::HtmlElement> {
        match control {
            Control::Prev => self.prev.as_ref(),
            Control::Next => self.next.as_ref(),
        }
    }
}

fn find_control(track: &web::HtmlElement, class: &str) -> Option<web::HtmlElement> {
    track
        .query_selector(&format!(".{}", class))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Locate the container, then wrap it and its controls in a positioned `div`
/// placed where the container used to be.
pub fn mount(document: &web::Document, element_id: &str) -> anyhow::Result<DomSurface> {
    let track = document
        .get_element_by_id(element_id)
        .ok_or_else(|| SlideError::ElementNotFound {
            id: element_id.to_string(),
        })?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| dom_err(e.into()))?;

    let items = track.get_elements_by_class_name(SLIDE_ITEM_CLASS);
    let prev = find_control(&track, PREV_BUTTON_CLASS);
    let next = find_control(&track, NEXT_BUTTON_CLASS);

    let wrapper = document
        .create_element(WRAPPER_TAG)
        .map_err(dom_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| dom_err(e.into()))?;
    wrapper.set_id(&ids::wrapper_id_from(js_sys::Math::random()));
    wrapper
        .style()
        .set_property("position", WRAPPER_POSITION)
        .map_err(dom_err)?;

    if let Some(parent) = track.parent_node() {
        let anchor: &web::Node = &track;
        parent.insert_before(&wrapper, Some(anchor)).map_err(dom_err)?;
    }
    wrapper.append_child(&track).map_err(dom_err)?;
    for control in [&next, &prev].into_iter().flatten() {
        wrapper.append_child(control).map_err(dom_err)?;
    }

    log::info!(
        "[dom] mounted #{} in #{} items={} prev={} next={}",
        element_id,
        wrapper.id(),
        items.length(),
        prev.is_some(),
        next.is_some()
    );

    Ok(DomSurface {
        wrapper,
        track,
        items,
        prev,
        next,
    })
}

impl SlideSurface for DomSurface {
    fn slide_count(&self) -> usize {
        self.items.length() as usize
    }

    fn measure(&self) -> Viewport {
        let rect = self.wrapper.get_bounding_client_rect();
        Viewport {
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn set_item_width(&mut self, width: f64) {
        let value = css_px(width);
        for i in 0..self.items.length() {
            if let Some(item) = self.items.item(i) {
                if let Some(el) = item.dyn_ref::<web::HtmlElement>() {
                    _ = el.style().set_property("width", &value);
                }
            }
        }
    }

    fn set_translate_x(&mut self, px: f64) {
        _ = self
            .track
            .style()
            .set_property("transform", &translate_x_css(px));
    }

    fn set_transition(&mut self, duration: &str) {
        _ = self
            .track
            .style()
            .set_property("transition-duration", duration);
    }

    fn set_control_opacity(&mut self, control: Control, opacity: f64) {
        if let Some(el) = self.control(control) {
            _ = el.style().set_property("opacity", &opacity.to_string());
        }
    }
}
