use web_sys as web;

pub fn create_context() -> Option<web::AudioContext> {
    match web::AudioContext::new() {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            log::error!("[audio] AudioContext unavailable: {:?}", e);
            None
        }
    }
}

// Autoplay policy may leave the context suspended until a user gesture;
// resuming on every pointerdown is the unlock fallback. Fire and forget.
pub fn ensure_resumed(ctx: &web::AudioContext) {
    if ctx.state() == web::AudioContextState::Suspended {
        let _ = ctx.resume();
    }
}

// Short synthesized click: a triangle blip through a fast gain envelope.
pub fn trigger_click(ctx: &web::AudioContext) {
    if let Ok(src) = web::OscillatorNode::new(ctx) {
        src.set_type(web::OscillatorType::Triangle);
        src.frequency().set_value(660.0);
        if let Ok(g) = web::GainNode::new(ctx) {
            g.gain().set_value(0.0);
            let t0 = ctx.current_time() + 0.005;
            let _ = g.gain().linear_ramp_to_value_at_time(0.4, t0 + 0.01);
            let _ = g.gain().linear_ramp_to_value_at_time(0.0, t0 + 0.12);
            let _ = src.connect_with_audio_node(&g);
            let _ = g.connect_with_audio_node(&ctx.destination());
            let _ = src.start_with_when(t0);
            let _ = src.stop_with_when(t0 + 0.15);
        }
    }
}
