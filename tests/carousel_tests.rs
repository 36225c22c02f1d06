// Host-side tests for the pure carousel state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod carousel {
    include!("../src/core/carousel.rs");
}

use carousel::*;

fn sample(id: i32, x: f32, time_ms: f64) -> PointerSample {
    PointerSample {
        id: PointerId(id),
        x,
        y: 0.0,
        primary: true,
        time_ms,
    }
}

fn secondary(id: i32, x: f32, time_ms: f64) -> PointerSample {
    PointerSample {
        primary: false,
        ..sample(id, x, time_ms)
    }
}

fn controller() -> CarouselController {
    CarouselController::new(CarouselConfig::default())
}

#[test]
fn active_index_is_periodic() {
    for angle in [-725.0, -120.0, 0.0, 37.5, 60.0, 119.9, 240.0, 3599.0] {
        assert_eq!(
            active_index_for(angle, 3),
            active_index_for(angle + 360.0, 3),
            "angle {}",
            angle
        );
    }
}

#[test]
fn active_index_at_placement_angles() {
    assert_eq!(active_index_for(0.0, 3), 0);
    assert_eq!(active_index_for(120.0, 3), 1);
    assert_eq!(active_index_for(240.0, 3), 2);
    assert_eq!(active_index_for(-120.0, 3), 2);
}

#[test]
fn active_index_boundaries_are_right_closed() {
    // Boundaries bisect the gaps at 60/180/300 and stay with the lower item.
    assert_eq!(active_index_for(60.0, 3), 0);
    assert_eq!(active_index_for(60.0001, 3), 1);
    assert_eq!(active_index_for(180.0, 3), 1);
    assert_eq!(active_index_for(180.0001, 3), 2);
    assert_eq!(active_index_for(300.0, 3), 2);
    assert_eq!(active_index_for(300.0001, 3), 0);
}

#[test]
fn small_drag_snaps_back_to_zero() {
    // 60 px at 0.5 sensitivity -> 30 degrees -> nearest multiple is 0.
    let mut ctl = controller();
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    assert_eq!(ctl.continue_drag(&sample(1, 160.0, 200.0)), Some(30.0));
    let settled = ctl.end_drag(&sample(1, 160.0, 200.0)).unwrap();
    assert_eq!(settled.angle, 0.0);
    assert_eq!(settled.active_index, 0);
    assert!(!settled.tap);
}

#[test]
fn halfway_drag_rounds_ties_to_even() {
    // 120 px -> exactly 60 degrees, the midpoint between 0 and 120.
    // round_ties_even(0.5) == 0, so the ring returns to where it started.
    let mut ctl = controller();
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    assert_eq!(ctl.continue_drag(&sample(1, 220.0, 400.0)), Some(60.0));
    let settled = ctl.end_drag(&sample(1, 220.0, 400.0)).unwrap();
    assert_eq!(settled.angle, 0.0);
    assert_eq!(settled.active_index, 0);
}

#[test]
fn settled_angle_is_idempotent_under_zero_net_drag() {
    let mut ctl = controller();
    ctl.reveal(1);
    assert_eq!(ctl.angle(), 120.0);

    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    ctl.continue_drag(&sample(1, 105.0, 50.0));
    ctl.continue_drag(&sample(1, 100.0, 100.0));
    let settled = ctl.end_drag(&sample(1, 100.0, 100.0)).unwrap();
    assert_eq!(settled.angle, 120.0);
    assert_eq!(settled.active_index, 1);
}

#[test]
fn release_without_movement_is_a_tap() {
    let mut ctl = controller();
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    let settled = ctl.end_drag(&sample(1, 100.0, 0.0)).unwrap();
    assert!(settled.tap);
    assert_eq!(settled.angle, 0.0);
}

#[test]
fn fast_release_advances_one_extra_step() {
    // 40 px in 20 ms is 2 px/ms, well above the flick threshold; the snap
    // moves to the next step even though the nearest multiple is 0.
    let mut ctl = controller();
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    assert_eq!(ctl.continue_drag(&sample(1, 140.0, 20.0)), Some(20.0));
    let settled = ctl.end_drag(&sample(1, 140.0, 20.0)).unwrap();
    assert_eq!(settled.angle, 120.0);
    assert_eq!(settled.active_index, 1);
}

#[test]
fn fast_backward_release_retreats_one_step() {
    let mut ctl = controller();
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    ctl.continue_drag(&sample(1, 60.0, 20.0));
    let settled = ctl.end_drag(&sample(1, 60.0, 20.0)).unwrap();
    assert_eq!(settled.angle, -120.0);
    assert_eq!(settled.active_index, 2);
}

#[test]
fn unmatched_events_are_noops() {
    let mut ctl = controller();
    assert_eq!(ctl.continue_drag(&sample(1, 160.0, 10.0)), None);
    assert!(ctl.end_drag(&sample(1, 160.0, 10.0)).is_none());
    assert_eq!(ctl.angle(), 0.0);

    // A stale pointer id against a live session is equally inert.
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    assert_eq!(ctl.continue_drag(&sample(7, 300.0, 10.0)), None);
    assert!(ctl.end_drag(&sample(7, 300.0, 10.0)).is_none());
    assert_eq!(ctl.angle(), 0.0);
    assert!(ctl.is_dragging());
}

#[test]
fn second_pointer_cannot_steal_the_session() {
    let mut ctl = controller();
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    assert!(!ctl.begin_drag(&sample(2, 500.0, 5.0)));
    assert!(!ctl.begin_drag(&secondary(3, 500.0, 5.0)));

    // The first pointer still drives the rotation.
    assert_eq!(ctl.continue_drag(&sample(1, 160.0, 200.0)), Some(30.0));
}

#[test]
fn non_primary_contact_cannot_open_a_session() {
    let mut ctl = controller();
    assert!(!ctl.begin_drag(&secondary(2, 100.0, 0.0)));
    assert!(!ctl.is_dragging());
}

#[test]
fn cancel_resolves_like_a_normal_end() {
    let mut ctl = controller();
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    ctl.continue_drag(&sample(1, 160.0, 200.0));
    let settled = ctl.cancel_drag(&sample(1, 160.0, 200.0)).unwrap();
    assert_eq!(settled.angle, 0.0);
    assert!(!ctl.is_dragging());

    // No leaked session: the next drag starts cleanly.
    assert!(ctl.begin_drag(&sample(1, 50.0, 300.0)));
}

#[test]
fn reveal_takes_the_shortest_arc() {
    let mut ctl = controller();
    // Item 2 sits at 240; going backward 120 is shorter than forward 240.
    assert_eq!(ctl.reveal(2), -120.0);
    assert_eq!(ctl.active_index(), 2);

    assert_eq!(ctl.reveal(0), 0.0);
    assert_eq!(ctl.reveal(1), 120.0);
    assert_eq!(ctl.active_index(), 1);
}

#[test]
fn tap_navigates_only_the_active_item() {
    let mut ctl = controller();
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    ctl.end_drag(&sample(1, 100.0, 0.0));

    // Tap on a non-active item reveals instead of navigating.
    assert!(!ctl.should_navigate(1));

    assert!(ctl.begin_drag(&sample(1, 100.0, 10.0)));
    ctl.end_drag(&sample(1, 100.0, 10.0));
    assert!(ctl.should_navigate(0));
}

#[test]
fn drag_gesture_suppresses_the_follow_up_click() {
    let mut ctl = controller();
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));
    ctl.continue_drag(&sample(1, 340.0, 400.0));
    let settled = ctl.end_drag(&sample(1, 340.0, 400.0)).unwrap();
    assert!(!settled.tap);

    // Even a click on the now-active item must not navigate after a drag.
    assert!(!ctl.should_navigate(settled.active_index));
    // The suppression is one-shot.
    assert!(ctl.should_navigate(settled.active_index));
}

#[test]
fn wide_viewport_disables_drag_and_resets_rotation() {
    let mut ctl = controller();
    ctl.reveal(1);
    assert!(ctl.begin_drag(&sample(1, 100.0, 0.0)));

    assert!(!ctl.set_viewport_width(1200.0));
    assert_eq!(ctl.angle(), 0.0);
    assert!(!ctl.is_dragging());
    assert!(!ctl.begin_drag(&sample(1, 100.0, 10.0)));

    // Wide layouts leave links fully navigable.
    assert!(ctl.should_navigate(2));

    assert!(ctl.set_viewport_width(500.0));
    assert!(ctl.begin_drag(&sample(1, 100.0, 20.0)));
}

#[test]
fn snapped_angle_rounds_to_step_multiples() {
    assert_eq!(snapped_angle(30.0, 120.0), 0.0);
    assert_eq!(snapped_angle(90.0, 120.0), 120.0);
    assert_eq!(snapped_angle(-90.0, 120.0), -120.0);
    assert_eq!(snapped_angle(60.0, 120.0), 0.0);
    assert_eq!(snapped_angle(180.0, 120.0), 240.0);
}
