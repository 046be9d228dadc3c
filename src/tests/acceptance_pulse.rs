//! Acceptance tests for the switcher breathing highlight and the busy spinner.

use crate::model::{ButtonKind, RenderMode, VisualState, WindowInfo};
use crate::state::PulsePhase;
use crate::test_harness::Harness;

fn with_switcher() -> Harness {
    let mut harness = Harness::new();
    harness.request(VisualState::BTN_SWITCHER);
    harness.frame();
    harness
}

fn highlight_opacity(harness: &Harness) -> u8 {
    harness.element(ButtonKind::SwitcherHighlight).opacity
}

// ===== Pulse resume =====

#[test]
fn restarting_while_highlighted_resumes_mid_cycle() {
    // GIVEN: a pulse that has played for 1.5 s of its 5 s
    let mut harness = with_switcher();
    harness.bar.set_switcher_pulse(true);
    harness.frame_ms(1500);
    assert!((harness.bar.pulse().progress() - 0.3).abs() < 1e-9);

    // WHEN: it is stopped and immediately started again
    harness.bar.set_switcher_pulse(false);
    assert_eq!(harness.bar.pulse().phase(), PulsePhase::Stopped);
    assert_eq!(highlight_opacity(&harness), 0);
    assert!(harness
        .bar
        .requested_state()
        .contains(VisualState::BTN_SWITCHER_HIGHLIGHT));
    harness.bar.set_switcher_pulse(true);

    // THEN: it continues from where it stopped
    assert_eq!(harness.bar.pulse().phase(), PulsePhase::Playing);
    assert!((harness.bar.pulse().progress() - 0.3).abs() < 1e-9);
}

#[test]
fn starting_without_the_highlight_flag_rewinds() {
    let mut harness = with_switcher();
    harness.bar.set_switcher_pulse(true);
    harness.frame_ms(1500);
    harness.bar.set_switcher_pulse(false);

    // A fresh request without the highlight flag drops it.
    harness.request(VisualState::BTN_SWITCHER);
    harness.frame();
    harness.bar.set_switcher_pulse(true);

    assert_eq!(harness.bar.pulse().progress(), 0.0);
    assert!(harness
        .bar
        .requested_state()
        .contains(VisualState::BTN_SWITCHER_HIGHLIGHT));
}

#[test]
fn pulse_drives_highlight_opacity_each_frame() {
    let mut harness = with_switcher();
    assert!(harness.visible(ButtonKind::SwitcherHighlight));
    assert_eq!(highlight_opacity(&harness), 0);

    harness.bar.set_switcher_pulse(true);
    // One pulse in: the curve is at its peak.
    harness.frame_ms(1000);
    assert_eq!(highlight_opacity(&harness), 254);

    harness.frame_ms(1000);
    assert_eq!(highlight_opacity(&harness), 0);
}

#[test]
fn pulse_stops_by_itself_at_the_end() {
    let mut harness = with_switcher();
    harness.bar.set_switcher_pulse(true);
    for _ in 0..10 {
        harness.frame_ms(600);
    }
    assert_eq!(harness.bar.pulse().phase(), PulsePhase::Stopped);
    assert_eq!(harness.bar.pulse().progress(), 1.0);

    // A finished animation starts over even with the flag still set.
    harness.bar.set_switcher_pulse(true);
    assert_eq!(harness.bar.pulse().progress(), 0.0);
}

#[test]
fn highlight_pinned_opaque_while_display_is_off() {
    let mut harness = with_switcher();
    harness.ctx.display_off = true;
    harness.bar.set_switcher_pulse(true);
    harness.frame_ms(100);
    assert_eq!(highlight_opacity(&harness), 255);
}

// ===== Busy spinner =====

#[test]
fn spinner_runs_only_while_busy_indicator_is_visible() {
    let mut window = WindowInfo::decorated("Mail", Vec::new());
    window.waiting = true;
    let mut harness = Harness::new().mode(RenderMode::App).window(window);
    harness.request(VisualState::empty());
    harness.frame_ms(0);
    assert!(harness.bar.spinner().is_playing());
    assert_eq!(harness.bar.spinner().frame(), 0);

    // 10 fps: every 100 ms is one sprite frame.
    harness.frame_ms(250);
    assert_eq!(harness.bar.spinner().frame(), 2);

    if let Some(window) = harness.ctx.window.as_mut() {
        window.waiting = false;
    }
    harness.bar.schedule_reconciliation(&mut harness.main_loop);
    harness.frame();
    assert!(!harness.bar.elements().progress.visible);
    assert!(!harness.bar.spinner().is_playing());
    assert_eq!(harness.bar.spinner().frame(), 0);
}
