use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn collect_items(document: &web::Document, class_name: &str) -> Vec<web::HtmlElement> {
    let collection = document.get_elements_by_class_name(class_name);
    let mut items = Vec::with_capacity(collection.length() as usize);
    for i in 0..collection.length() {
        if let Some(el) = collection.item(i) {
            if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
                items.push(html);
            }
        }
    }
    items
}

// The controller angle grows as the ring advances 0 -> 1 -> 2; the parent
// element must counter-rotate to bring the item placed at +angle around to
// the front, hence the negation here.
pub fn set_ring_rotation(ring: &web::HtmlElement, angle_deg: f32) {
    let _ = ring
        .style()
        .set_property("transform", &format!("rotateY({}deg)", -angle_deg));
}

pub fn clear_ring_rotation(ring: &web::HtmlElement) {
    let _ = ring.style().remove_property("transform");
}

// Dragging tracks the pointer with zero lag; the stylesheet transition is
// only in effect while settling.
pub fn set_transition_enabled(ring: &web::HtmlElement, enabled: bool) {
    if enabled {
        let _ = ring.style().remove_property("transition");
    } else {
        let _ = ring.style().set_property("transition", "none");
    }
}

pub fn set_active_item(items: &[web::HtmlElement], active_index: usize) {
    for (i, item) in items.iter().enumerate() {
        if i == active_index {
            let _ = item.class_list().add_1("active");
        } else {
            let _ = item.class_list().remove_1("active");
        }
    }
}

pub fn set_background_position(document: &web::Document, x_pct: f32, y_pct: f32) {
    if let Some(body) = document.body() {
        let _ = body
            .style()
            .set_property("background-position", &format!("{}% {}%", x_pct, y_pct));
    }
}
