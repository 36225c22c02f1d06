use crate::dom;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Decorative background drift following the mouse; unrelated to the
// carousel state and deliberately kept out of the controller.
pub fn wire_parallax(document: &web::Document) {
    let doc = document.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (width, height) = match web::window() {
            Some(wnd) => (
                wnd.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
                wnd.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
            ),
            None => return,
        };
        let (x_pct, y_pct) = input::parallax_position(
            ev.client_x() as f32,
            ev.client_y() as f32,
            width,
            height,
        );
        dom::set_background_position(&doc, x_pct, y_pct);
    }) as Box<dyn FnMut(_)>);

    let _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
