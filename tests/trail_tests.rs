// Host-side tests for the highlight trail and colour cycler.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/color.rs"]
mod color;
#[path = "../src/core/trail.rs"]
mod trail;

use color::*;
use trail::*;

const FADE: f64 = 1000.0;

fn event_at(timestamp: f64) -> HighlightEvent {
    HighlightEvent {
        x: 0,
        y: 0,
        color_index: 0,
        timestamp,
        size: 2.0,
    }
}

#[test]
fn fade_alpha_hits_exact_endpoints() {
    let ev = event_at(5_000.0);
    assert_eq!(fade_alpha(&ev, ev.timestamp, FADE), 1.0);
    assert_eq!(fade_alpha(&ev, ev.timestamp + FADE, FADE), 0.0);
    assert_eq!(fade_alpha(&ev, ev.timestamp + 2.0 * FADE, FADE), 0.0);
}

#[test]
fn fade_alpha_is_cubic_and_non_increasing() {
    let ev = event_at(0.0);
    assert!((fade_alpha(&ev, 500.0, FADE) - 0.875).abs() < 1e-6);
    let mut prev = f32::MAX;
    for age in (0..=1000).step_by(10) {
        let a = fade_alpha(&ev, age as f64, FADE);
        assert!((0.0..=1.0).contains(&a));
        assert!(a <= prev, "alpha rose at age {age}");
        prev = a;
    }
}

#[test]
fn record_skips_repeat_of_last_cell() {
    let mut trail = HighlightTrail::new(FADE, 20, 2.0);
    assert!(trail.record(4, 7, 0, 0.0));
    assert!(!trail.record(4, 7, 1, 5.0));
    assert!(trail.record(5, 7, 1, 10.0));
    assert!(trail.record(4, 7, 2, 15.0));
    assert_eq!(trail.len(), 3);

    trail.forget_last_cell();
    assert!(trail.record(4, 7, 2, 20.0));
    assert_eq!(trail.len(), 4);
}

#[test]
fn recorded_event_carries_color_timestamp_and_size() {
    let mut trail = HighlightTrail::new(FADE, 20, 2.0);
    trail.record(-3, 9, 4, 123.0);
    let ev = trail.iter().next().copied().unwrap();
    assert_eq!(
        ev,
        HighlightEvent {
            x: -3,
            y: 9,
            color_index: 4,
            timestamp: 123.0,
            size: 2.0
        }
    );
}

#[test]
fn prune_keeps_only_events_inside_fade_window() {
    let mut trail = HighlightTrail::new(FADE, 100, 2.0);
    for i in 0..=20 {
        trail.record(i, 0, 0, i as f64 * 100.0);
    }
    let now = 2_500.0;
    trail.prune(now);
    assert!(trail.iter().all(|e| now - e.timestamp <= FADE));
    assert_eq!(trail.len(), 6); // timestamps 1500..=2000
    assert!(!trail.contains_cell(14, 0));
    assert!(trail.contains_cell(15, 0));
}

#[test]
fn prune_keeps_event_exactly_at_fade_boundary() {
    let mut trail = HighlightTrail::new(FADE, 20, 2.0);
    trail.record(1, 1, 0, 0.0);
    trail.prune(FADE);
    assert_eq!(trail.len(), 1);
    trail.prune(FADE + 1.0);
    assert!(trail.is_empty());
}

#[test]
fn cap_evicts_oldest_first() {
    let mut trail = HighlightTrail::new(FADE, 20, 2.0);
    for i in 0..25 {
        trail.record(i, 0, 0, i as f64);
    }
    assert_eq!(trail.len(), 20);
    assert_eq!(trail.iter().next().map(|e| e.x), Some(5));
    assert_eq!(trail.iter().last().map(|e| e.x), Some(24));
}

#[test]
fn color_tick_advances_once_per_interval() {
    let mut c = ColorCycler::new(6, 200.0, 0.0);
    for k in 1..=13u32 {
        assert!(c.tick(k as f64 * 200.0));
        assert_eq!(c.index(), k as usize % 6);
    }
}

#[test]
fn color_tick_is_idempotent_for_same_now() {
    let mut c = ColorCycler::new(6, 200.0, 0.0);
    assert!(!c.tick(199.0));
    assert!(c.tick(200.0));
    assert!(!c.tick(200.0));
    assert_eq!(c.index(), 1);
    assert_eq!(c.last_advance(), 200.0);
}

#[test]
fn color_tick_with_zero_interval_still_needs_time_to_pass() {
    let mut c = ColorCycler::new(3, 0.0, 10.0);
    assert!(!c.tick(10.0));
    assert!(c.tick(11.0));
    assert!(!c.tick(11.0));
    assert_eq!(c.index(), 1);
}
