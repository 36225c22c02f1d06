use crate::audio;
use crate::core::{CarouselController, PointerId, PointerSample};
use crate::dom;
use crate::input::SoundGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub ring: web::HtmlElement,
    pub items: Rc<Vec<web::HtmlElement>>,
    pub controller: Rc<RefCell<CarouselController>>,
    pub sound: Rc<RefCell<SoundGate>>,
    pub audio_ctx: Option<web::AudioContext>,
    pub pending_angle: Rc<RefCell<Option<f32>>>,
    pub raf_scheduled: Rc<RefCell<bool>>,
}

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> glam::Vec2 {
    glam::Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn sample_from_event(ev: &web::PointerEvent) -> PointerSample {
    let pos = pointer_client_px(ev);
    PointerSample {
        id: PointerId(ev.pointer_id()),
        x: pos.x,
        y: pos.y,
        primary: ev.is_primary(),
        time_ms: ev.time_stamp(),
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointer_end(&w, "pointerup", false);
    wire_pointer_end(&w, "pointercancel", true);
    wire_item_clicks(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let ring_for_listener = w.ring.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(ctx) = &w.audio_ctx {
            audio::ensure_resumed(ctx);
        }
        let sample = sample_from_event(&ev);
        if w.controller.borrow_mut().begin_drag(&sample) {
            dom::set_transition_enabled(&w.ring, false);
            let _ = w.ring.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
            log::info!("[drag] begin pointer={}", ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    let _ = ring_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    // One persistent rAF flush closure; moves only queue an angle and
    // schedule it, so the transform is written at most once per refresh.
    let flush: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let w_flush = w.clone();
        *flush.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            *w_flush.raf_scheduled.borrow_mut() = false;
            if let Some(angle) = w_flush.pending_angle.borrow_mut().take() {
                dom::set_ring_rotation(&w_flush.ring, angle);
                let live_index = w_flush.controller.borrow().active_index();
                dom::set_active_item(&w_flush.items, live_index);
            }
        }) as Box<dyn FnMut()>));
    }

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let sample = sample_from_event(&ev);
        let angle = w.controller.borrow_mut().continue_drag(&sample);
        if let Some(angle) = angle {
            *w.pending_angle.borrow_mut() = Some(angle);
            let mut scheduled = w.raf_scheduled.borrow_mut();
            if !*scheduled {
                *scheduled = true;
                if let Some(wnd) = web::window() {
                    let _ = wnd.request_animation_frame(
                        flush.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    );
                }
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// pointerup and pointercancel resolve identically; a cancelled interaction
// must still snap and release the session.
fn wire_pointer_end(w: &InputWiring, event_name: &'static str, cancelled: bool) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let sample = sample_from_event(&ev);
        let (previous_index, settled) = {
            let mut ctl = w.controller.borrow_mut();
            let previous = ctl.active_index();
            let settled = if cancelled {
                ctl.cancel_drag(&sample)
            } else {
                ctl.end_drag(&sample)
            };
            (previous, settled)
        };
        if let Some(settled) = settled {
            dom::set_transition_enabled(&w.ring, true);
            dom::set_ring_rotation(&w.ring, settled.angle);
            dom::set_active_item(&w.items, settled.active_index);
            if settled.active_index != previous_index {
                play_click(&w);
            }
            log::info!(
                "[drag] settled angle={} index={} tap={}",
                settled.angle,
                settled.active_index,
                settled.tap
            );
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_item_clicks(w: &InputWiring) {
    for (index, item) in w.items.iter().enumerate() {
        let w = w.clone();

        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let navigate = w.controller.borrow_mut().should_navigate(index);
            if navigate {
                return;
            }
            ev.prevent_default();
            let angle = w.controller.borrow_mut().reveal(index);
            dom::set_transition_enabled(&w.ring, true);
            dom::set_ring_rotation(&w.ring, angle);
            dom::set_active_item(&w.items, index);
            play_click(&w);
            log::info!("[tap] reveal item {}", index);
        }) as Box<dyn FnMut(_)>);
        let _ = item.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn play_click(w: &InputWiring) {
    if let Some(ctx) = &w.audio_ctx {
        if w.sound.borrow_mut().try_fire(js_sys::Date::now()) {
            audio::trigger_click(ctx);
        }
    }
}
