// Host-side tests for resize coalescing and teardown.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod breakpoint {
        include!("../src/core/breakpoint.rs");
    }
    pub mod resize {
        include!("../src/core/resize.rs");
    }
}

use crate::core::breakpoint::SizeClass;
use crate::core::resize::{Notify, ResizeState};

#[test]
fn initial_class_is_computed_immediately() {
    assert_eq!(ResizeState::new(320.0).current(), SizeClass::Mobile);
    assert_eq!(ResizeState::new(800.0).current(), SizeClass::Tablet);
    assert_eq!(ResizeState::new(f64::NAN).current(), SizeClass::Large);
}

#[test]
fn burst_of_events_runs_one_pass() {
    let mut state = ResizeState::new(1200.0);
    assert_eq!(state.notify(), Notify::Schedule);
    for _ in 0..49 {
        assert_eq!(state.notify(), Notify::Coalesced);
    }
    assert!(state.frame_pending());
    assert_eq!(state.on_frame(450.0), Some(SizeClass::Mobile));
    assert_eq!(state.passes(), 1);
    assert!(!state.frame_pending());

    // Next burst schedules again.
    assert_eq!(state.notify(), Notify::Schedule);
}

#[test]
fn unchanged_class_publishes_nothing() {
    let mut state = ResizeState::new(1200.0);
    state.notify();
    assert_eq!(state.on_frame(1000.0), None);
    assert_eq!(state.current(), SizeClass::Large);
    assert_eq!(state.passes(), 1);
}

#[test]
fn crossing_back_and_forth_publishes_each_change() {
    let mut state = ResizeState::new(1200.0);
    let mut seen = Vec::new();
    for w in [850.0, 860.0, 480.0, 950.0] {
        state.notify();
        if let Some(class) = state.on_frame(w) {
            seen.push(class);
        }
    }
    assert_eq!(
        seen,
        vec![SizeClass::Tablet, SizeClass::Mobile, SizeClass::Large]
    );
    assert_eq!(state.passes(), 4);
}

#[test]
fn teardown_with_pending_frame_turns_callbacks_into_no_ops() {
    let mut state = ResizeState::new(1200.0);
    assert_eq!(state.notify(), Notify::Schedule);
    assert!(state.detach());
    assert!(state.is_detached());

    // A frame that was already queued fires after teardown.
    assert_eq!(state.on_frame(300.0), None);
    assert_eq!(state.passes(), 0);
    assert_eq!(state.current(), SizeClass::Large);
    assert_eq!(state.notify(), Notify::Detached);
}

#[test]
fn teardown_when_idle_reports_nothing_pending() {
    let mut state = ResizeState::new(600.0);
    assert!(!state.detach());
    assert!(!state.detach());
}
