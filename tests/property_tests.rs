//! Property-based tests for reconciliation invariants.
//!
//! Tests validate:
//! 1. Derived left/right masks agree with the button bits after any pass
//! 2. Requesting the same state twice equals requesting it once
//! 3. Any burst of requests folds into one pass showing the last state
//! 4. Title width never goes negative, whatever the geometry

use proptest::prelude::*;
use titlebar::config::ResolvedConfig;
use titlebar::model::{ButtonKind, RenderMode, VisualState, WindowInfo};
use titlebar::report::{ElementRow, LayoutReport};
use titlebar::shell::{EventLog, MainLoop, ShellContext, StatusArea};
use titlebar::state::TitleBar;
use titlebar::view_state::CellMeasure;

const MODES: [RenderMode; 12] = [
    RenderMode::Home,
    RenderMode::HomePortrait,
    RenderMode::HomeEdit,
    RenderMode::HomeEditPortrait,
    RenderMode::HomeEditDialog,
    RenderMode::HomeEditDialogPortrait,
    RenderMode::Loading,
    RenderMode::LoadingSubwin,
    RenderMode::App,
    RenderMode::AppPortrait,
    RenderMode::TaskNavigator,
    RenderMode::Launcher,
];

fn any_state() -> impl Strategy<Value = VisualState> {
    any::<u32>().prop_map(VisualState::from_bits_truncate)
}

fn any_mode() -> impl Strategy<Value = RenderMode> {
    prop::sample::select(MODES.to_vec())
}

fn context(mode: RenderMode, status_width: Option<i32>, title: &str) -> ShellContext {
    let mut ctx = ShellContext::new(800, mode);
    ctx.status_area = status_width.map(|width| StatusArea {
        width,
        visible: true,
    });
    let mut window = WindowInfo::decorated(title, Vec::new());
    window.has_menu_indicator = true;
    ctx.window = Some(window);
    ctx
}

/// Apply `requests` back to back, then run one frame.
fn run(ctx: &ShellContext, requests: &[VisualState]) -> (TitleBar, EventLog) {
    let mut bar = TitleBar::new(
        &ResolvedConfig::default(),
        ctx.screen_width,
        Box::new(CellMeasure::default()),
    );
    let mut main_loop = MainLoop::new();
    let mut log = EventLog::new();
    for state in requests {
        bar.set_requested_state(*state, &mut main_loop);
    }
    main_loop.run_frame(&mut bar, ctx, &mut log, 16);
    (bar, log)
}

fn geometry(bar: &TitleBar, log: &EventLog) -> Vec<ElementRow> {
    LayoutReport::capture(bar, log).elements
}

// ===== Property 1: Mask Invariant =====

proptest! {
    #[test]
    fn derived_masks_match_button_bits(state in any_state(), mode in any_mode()) {
        let ctx = context(mode, Some(100), "Mail");
        let (bar, _) = run(&ctx, &[state]);
        let applied = bar.applied_state();

        let left = applied.intersects(
            VisualState::BTN_LAUNCHER | VisualState::BTN_SWITCHER | VisualState::BTN_MENU,
        );
        let right = applied
            .intersects(VisualState::BTN_BACK | VisualState::BTN_CLOSE | VisualState::BTN_DONE);

        prop_assert_eq!(applied.has_any_left_button(), left);
        prop_assert_eq!(applied.has_any_right_button(), right);
        prop_assert_eq!((applied & VisualState::left_mask()).is_empty(), !left);
        prop_assert_eq!((applied & VisualState::right_mask()).is_empty(), !right);
    }

    #[test]
    fn governed_buttons_track_their_bits(state in any_state(), mode in any_mode()) {
        let ctx = context(mode, None, "Mail");
        let (bar, _) = run(&ctx, &[state]);
        let applied = bar.applied_state();
        let elements = bar.elements();

        for (flag, kind, pressed) in [
            (VisualState::BTN_LAUNCHER, ButtonKind::Launcher, ButtonKind::LauncherPressed),
            (VisualState::BTN_SWITCHER, ButtonKind::Switcher, ButtonKind::SwitcherPressed),
            (VisualState::BTN_BACK, ButtonKind::Back, ButtonKind::BackPressed),
            (VisualState::BTN_CLOSE, ButtonKind::Close, ButtonKind::ClosePressed),
        ] {
            prop_assert_eq!(elements.is_visible(kind), applied.contains(flag));
            if !applied.contains(flag) {
                prop_assert!(!elements.is_visible(pressed));
            }
        }
        prop_assert_eq!(elements.is_visible(ButtonKind::Menu), applied.contains(VisualState::BTN_MENU));
        prop_assert_eq!(elements.is_visible(ButtonKind::Done), applied.contains(VisualState::BTN_DONE));
    }
}

// ===== Property 2: Idempotence =====

proptest! {
    #[test]
    fn double_request_equals_single(state in any_state(), mode in any_mode()) {
        let ctx = context(mode, Some(100), "Mail");
        let (once, once_log) = run(&ctx, &[state]);
        let (twice, twice_log) = run(&ctx, &[state, state]);

        prop_assert_eq!(once.applied_state(), twice.applied_state());
        prop_assert_eq!(geometry(&once, &once_log), geometry(&twice, &twice_log));
        prop_assert_eq!(twice.pass_count(), 1);
    }
}

// ===== Property 3: Coalescing =====

proptest! {
    #[test]
    fn burst_folds_into_one_pass(
        burst in prop::collection::vec(any_state(), 1..12),
        mode in any_mode(),
    ) {
        let ctx = context(mode, None, "Mail");
        let last = burst[burst.len() - 1];

        let (folded, folded_log) = run(&ctx, &burst);
        let (single, single_log) = run(&ctx, &[last]);

        prop_assert_eq!(folded.pass_count(), 1);
        prop_assert_eq!(folded.applied_state(), single.applied_state());
        prop_assert_eq!(geometry(&folded, &folded_log), geometry(&single, &single_log));
    }
}

// ===== Property 4: Width Clamping =====

proptest! {
    #[test]
    fn title_width_is_never_negative(
        screen_width in 0i32..1200,
        status_width in 0i32..1200,
        title_len in 1usize..120,
        small in any::<bool>(),
        waiting in any::<bool>(),
    ) {
        let mut ctx = context(RenderMode::App, Some(status_width), &"m".repeat(title_len));
        ctx.screen_width = screen_width;
        if let Some(window) = ctx.window.as_mut() {
            window.waiting = waiting;
        }
        let state = VisualState::BTN_SWITCHER.with(VisualState::SMALL_BUTTONS, small);
        let (bar, _) = run(&ctx, &[state]);

        let title = &bar.elements().title;
        prop_assert!(title.element.visible);
        prop_assert!(title.element.width >= 0);
        prop_assert!(bar.elements().title_bg.width >= 0);
        if bar.elements().is_visible(ButtonKind::MenuIndicator) {
            prop_assert!(bar.elements().get(ButtonKind::MenuIndicator).x >= 0);
        }
    }
}
