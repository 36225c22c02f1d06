#![cfg(target_arch = "wasm32")]
use crate::core::{CarouselConfig, CarouselController};
use crate::input::SoundGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
pub mod constants;
pub mod core;
mod dom;
mod events;
pub mod input;

// Applies the current viewport mode: interactive ring below the breakpoint,
// neutral CSS-owned layout above it.
fn apply_viewport_mode(
    ring: &web::HtmlElement,
    items: &[web::HtmlElement],
    controller: &Rc<RefCell<CarouselController>>,
) {
    let width = dom::viewport_width();
    let enabled = controller.borrow_mut().set_viewport_width(width);
    if enabled {
        let (angle, index) = {
            let ctl = controller.borrow();
            (ctl.angle(), ctl.active_index())
        };
        dom::set_ring_rotation(ring, angle);
        dom::set_active_item(items, index);
    } else {
        dom::set_transition_enabled(ring, true);
        dom::clear_ring_rotation(ring);
        dom::set_active_item(items, 0);
    }
}

fn wire_viewport_resize(
    ring: web::HtmlElement,
    items: Rc<Vec<web::HtmlElement>>,
    controller: Rc<RefCell<CarouselController>>,
) {
    apply_viewport_mode(&ring, &items, &controller);
    let resize_closure = Closure::wrap(Box::new(move || {
        apply_viewport_mode(&ring, &items, &controller);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ring: web::HtmlElement = document
        .get_element_by_id("carousel")
        .ok_or_else(|| anyhow::anyhow!("missing #carousel"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let items = Rc::new(dom::collect_items(&document, "carousel-item"));
    if items.is_empty() {
        anyhow::bail!("no .carousel-item elements");
    }
    log::info!("[init] ring with {} items", items.len());

    let controller = Rc::new(RefCell::new(CarouselController::new(CarouselConfig {
        item_count: items.len(),
        ..CarouselConfig::default()
    })));

    // Click sound is best-effort; the carousel works without audio.
    let audio_ctx = audio::create_context();
    let sound = Rc::new(RefCell::new(SoundGate::new(constants::SOUND_DEBOUNCE_MS)));

    events::wire_input_handlers(events::InputWiring {
        ring: ring.clone(),
        items: items.clone(),
        controller: controller.clone(),
        sound,
        audio_ctx,
        pending_angle: Rc::new(RefCell::new(None)),
        raf_scheduled: Rc::new(RefCell::new(false)),
    });
    events::wire_parallax(&document);
    wire_viewport_resize(ring, items, controller);

    Ok(())
}
