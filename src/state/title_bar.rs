//! The title bar aggregate and its reconciler.
//!
//! Callers only ever write the *requested* [`VisualState`]. A write schedules
//! at most one deferred reconciliation pass; the pass picks a mode handler,
//! applies the resulting state to the element registry and notifies the
//! shell. Between passes the elements reflect the *applied* state.

use super::mode_handler::{run_mode_handler, HandlerInput, HandlerOutcome};
use super::pulse::SwitcherPulse;
use super::spinner::Spinner;
use crate::config::{Labels, Metrics, ResolvedConfig};
use crate::model::{ButtonKind, ModeHandler, RenderMode, VisualState};
use crate::shell::{
    GroupParent, Priority, Scheduler, ShellContext, ShellNotifier, StatusArea, TaskToken,
};
use crate::view_state::{
    layout_backgrounds, place_title, position_buttons, ElementSet, LayoutInput, TextMeasure,
    TitleRequest,
};
use tracing::{debug, trace, warn};

/// Buttons shown iff their flag is set; the pressed variant is hidden with them.
const GOVERNED: [(VisualState, ButtonKind, Option<ButtonKind>); 6] = [
    (VisualState::BTN_LAUNCHER, ButtonKind::Launcher, Some(ButtonKind::LauncherPressed)),
    (VisualState::BTN_SWITCHER, ButtonKind::Switcher, Some(ButtonKind::SwitcherPressed)),
    (VisualState::BTN_BACK, ButtonKind::Back, Some(ButtonKind::BackPressed)),
    (VisualState::BTN_CLOSE, ButtonKind::Close, Some(ButtonKind::ClosePressed)),
    (VisualState::BTN_MENU, ButtonKind::Menu, None),
    (VisualState::BTN_DONE, ButtonKind::Done, None),
];

pub struct TitleBar {
    requested: VisualState,
    applied: VisualState,
    title: TitleRequest,
    loading_title: Option<String>,
    has_menu_indicator: bool,
    title_bg_reactive: bool,
    pending: Option<TaskToken>,
    elements: ElementSet,
    metrics: Metrics,
    labels: Labels,
    measure: Box<dyn TextMeasure>,
    screen_width: i32,
    render_mode: RenderMode,
    status_area: Option<StatusArea>,
    pulse: SwitcherPulse,
    spinner: Spinner,
    torn_down: bool,
    passes: u64,
    last_handler: Option<ModeHandler>,
}

impl std::fmt::Debug for TitleBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleBar")
            .field("requested", &self.requested)
            .field("applied", &self.applied)
            .field("pending", &self.pending)
            .field("render_mode", &self.render_mode)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl TitleBar {
    /// Create an empty bar. Every element starts hidden.
    pub fn new(config: &ResolvedConfig, screen_width: i32, measure: Box<dyn TextMeasure>) -> Self {
        let done_width = measure.measure(&config.labels.done, true).width;
        let mut bar = Self {
            requested: VisualState::empty(),
            applied: VisualState::empty(),
            title: TitleRequest::default(),
            loading_title: None,
            has_menu_indicator: false,
            title_bg_reactive: false,
            pending: None,
            elements: ElementSet::new(&config.metrics, done_width),
            metrics: config.metrics,
            labels: config.labels.clone(),
            measure,
            screen_width,
            render_mode: RenderMode::default(),
            status_area: None,
            pulse: SwitcherPulse::new(&config.pulse),
            spinner: Spinner::new(&config.metrics),
            torn_down: false,
            passes: 0,
            last_handler: None,
        };
        bar.on_screen_resized(screen_width);
        bar
    }

    // ===== Accessors =====

    pub fn requested_state(&self) -> VisualState {
        self.requested
    }

    pub fn applied_state(&self) -> VisualState {
        self.applied
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn title(&self) -> &TitleRequest {
        &self.title
    }

    pub fn loading_title(&self) -> Option<&str> {
        self.loading_title.as_deref()
    }

    pub fn has_menu_indicator(&self) -> bool {
        self.has_menu_indicator
    }

    pub fn title_bg_reactive(&self) -> bool {
        self.title_bg_reactive
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn screen_width(&self) -> i32 {
        self.screen_width
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Number of reconciliation passes run so far.
    pub fn pass_count(&self) -> u64 {
        self.passes
    }

    /// Handler that ran in the most recent pass.
    pub fn last_handler(&self) -> Option<ModeHandler> {
        self.last_handler
    }

    pub fn pulse(&self) -> &SwitcherPulse {
        &self.pulse
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Width of one button slot for the applied state.
    pub fn button_width(&self) -> i32 {
        let metrics = self.metrics;
        self.layout_input(&metrics).button_width()
    }

    pub(crate) fn elements_mut(&mut self) -> &mut ElementSet {
        &mut self.elements
    }

    // ===== Requests =====

    /// Overwrite the requested state and schedule a pass.
    pub fn set_requested_state(&mut self, state: VisualState, scheduler: &mut dyn Scheduler) {
        if self.torn_down {
            warn!(%state, "state request on torn-down title bar ignored");
            return;
        }
        self.requested = state;
        self.schedule_reconciliation(scheduler);
    }

    /// Queue one deferred pass unless one is already queued.
    pub fn schedule_reconciliation(&mut self, scheduler: &mut dyn Scheduler) {
        if self.torn_down {
            warn!("reconciliation request on torn-down title bar ignored");
            return;
        }
        if self.pending.is_none() {
            let token = scheduler.schedule_deferred(Priority::TITLEBAR_UPDATE);
            trace!(?token, "scheduled title bar reconciliation");
            self.pending = Some(token);
        }
    }

    /// Store the title shown while an application loads and schedule a pass.
    pub fn set_loading_title(&mut self, title: Option<&str>, scheduler: &mut dyn Scheduler) {
        if self.torn_down {
            warn!("loading title on torn-down title bar ignored");
            return;
        }
        self.loading_title = title.map(str::to_string);
        self.schedule_reconciliation(scheduler);
    }

    /// Start or stop the switcher breathing animation.
    ///
    /// Starting sets the highlight flag in the requested state without
    /// scheduling a pass; stopping makes the highlight transparent at once.
    pub fn set_switcher_pulse(&mut self, pulse: bool) {
        if self.torn_down {
            warn!(pulse, "switcher pulse on torn-down title bar ignored");
            return;
        }
        if pulse {
            self.requested = self.pulse.start(self.requested);
        } else {
            self.pulse.stop();
            self.elements.get_mut(ButtonKind::SwitcherHighlight).opacity = 0;
        }
    }

    // ===== Reconciliation =====

    /// Run the deferred pass identified by `token`.
    ///
    /// Returns `false` if `token` is not the pending one (cancelled or stale).
    pub fn run_deferred(
        &mut self,
        token: TaskToken,
        ctx: &ShellContext,
        notifier: &mut dyn ShellNotifier,
    ) -> bool {
        if self.torn_down || self.pending != Some(token) {
            return false;
        }
        self.reconcile(ctx, notifier);
        true
    }

    /// Cancel any pending pass and reconcile synchronously.
    ///
    /// While a rotation is in flight the button size follows the previous
    /// orientation for this pass only; the requested small-button bit is
    /// restored afterwards.
    pub fn reconcile_now(
        &mut self,
        ctx: &ShellContext,
        scheduler: &mut dyn Scheduler,
        notifier: &mut dyn ShellNotifier,
    ) {
        if self.torn_down {
            warn!("synchronous reconciliation on torn-down title bar ignored");
            return;
        }
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }

        let small = self.requested & VisualState::SMALL_BUTTONS;
        if ctx.rotating {
            let portrait = ctx.previous_render_mode.is_portrait();
            self.requested = self.requested.with(VisualState::SMALL_BUTTONS, portrait);
        }
        self.reconcile(ctx, notifier);
        self.requested = (self.requested - VisualState::SMALL_BUTTONS) | small;
    }

    fn reconcile(&mut self, ctx: &ShellContext, notifier: &mut dyn ShellNotifier) {
        let old = self.applied;
        self.applied = self.requested;
        self.screen_width = ctx.screen_width;
        self.render_mode = ctx.render_mode;
        self.status_area = ctx.status_area;

        let outcome = run_mode_handler(&HandlerInput {
            requested: self.requested,
            render_mode: ctx.render_mode,
            window: ctx.window.as_ref(),
            labels: &self.labels,
            loading_title: self.loading_title.as_deref(),
        });
        self.apply_outcome(outcome, notifier);

        self.passes += 1;
        self.pending = None;
        debug!(
            pass = self.passes,
            handler = ?self.last_handler,
            old = %old,
            new = %self.applied,
            "title bar reconciled"
        );

        if old.placement_bits() != self.applied.placement_bits() {
            notifier.place_titlebar_elements();
        }
        notifier.set_input_viewport();
    }

    fn apply_outcome(&mut self, outcome: HandlerOutcome, notifier: &mut dyn ShellNotifier) {
        self.last_handler = Some(outcome.handler);
        if let Some(flag) = outcome.has_menu_indicator {
            self.has_menu_indicator = flag;
        }
        self.title_bg_reactive = outcome.title_bg_reactive;
        self.elements.title_bg.reactive = outcome.title_bg_reactive;

        self.apply(outcome.state, notifier);

        self.title = outcome.title;
        let metrics = self.metrics;
        let input = self.layout_input(&metrics);
        place_title(
            &mut self.elements,
            &input,
            &self.title,
            self.has_menu_indicator,
            self.measure.as_ref(),
        );
        self.spinner.set_running(self.elements.progress.visible);

        if let Some(pressed) = outcome.right_pressed {
            self.right_pressed(pressed);
        }
    }

    /// Make the elements reflect `state`. The only place visibility changes
    /// during a pass.
    fn apply(&mut self, state: VisualState, notifier: &mut dyn ShellNotifier) {
        self.requested = state;
        self.applied = state;
        let elements = &mut self.elements;

        if !state.has_any_left_button() {
            elements.hide(ButtonKind::BgLeftPressed);
            elements.hide(ButtonKind::BgLeftAttachedPressed);
        }
        if !state.has_any_right_button() {
            elements.hide(ButtonKind::BgRightPressed);
        }

        for (flag, kind, pressed) in GOVERNED {
            let on = state.contains(flag);
            elements.set_visible(kind, on);
            if !on {
                if let Some(pressed) = pressed {
                    elements.hide(pressed);
                }
            }
        }

        let switcher = state.contains(VisualState::BTN_SWITCHER);
        elements.set_visible(ButtonKind::SwitcherHighlight, switcher);
        if switcher && !state.contains(VisualState::BTN_SWITCHER_HIGHLIGHT) {
            elements.get_mut(ButtonKind::SwitcherHighlight).opacity = 0;
        }

        let metrics = self.metrics;
        let input = self.layout_input(&metrics);
        layout_backgrounds(&mut self.elements, &input);

        if state.contains(VisualState::FOREGROUND) {
            if self.elements.relocate_foreground(GroupParent::FrontLayer) {
                notifier.raise_foreground(GroupParent::FrontLayer);
            }
        } else if self.elements.relocate_foreground(GroupParent::TitleBar) {
            notifier.raise_foreground(GroupParent::TitleBar);
            // Keep the status area above the group so it is not dimmed.
            if self.status_area.is_some() {
                notifier.raise_status_area();
            }
        }
    }

    fn layout_input<'m>(&self, metrics: &'m Metrics) -> LayoutInput<'m> {
        LayoutInput {
            metrics,
            state: self.applied,
            screen_width: self.screen_width,
            status_area: self.status_area,
            render_mode: self.render_mode,
        }
    }

    // ===== Shell events =====

    /// Re-pin edge-aligned elements after the screen changed size.
    pub fn on_screen_resized(&mut self, screen_width: i32) {
        if self.torn_down {
            return;
        }
        self.screen_width = screen_width;
        let metrics = self.metrics;
        let input = self.layout_input(&metrics);
        position_buttons(&mut self.elements, &input);
        trace!(screen_width, "title bar buttons repositioned");
    }

    /// Service one animation frame.
    pub fn on_timeline_frame(&mut self, delta_ms: u64, display_off: bool) {
        if self.torn_down {
            return;
        }
        let switcher = self.requested.contains(VisualState::BTN_SWITCHER);
        if let Some(opacity) = self.pulse.tick(delta_ms, switcher, display_off) {
            self.elements.get_mut(ButtonKind::SwitcherHighlight).opacity = opacity;
        }
        if let Some(frame) = self.spinner.tick(delta_ms) {
            trace!(frame, "progress frame");
        }
    }

    /// Where a legacy application menu should open, below the title.
    pub fn menu_anchor(&self) -> (i32, i32) {
        let adjust = self.metrics.menu_anchor_adjust;
        let min_x = 2 * self.metrics.top_left_button_width + adjust;
        if self.torn_down {
            return (min_x, self.metrics.bar_height);
        }

        let title = &self.elements.title.element;
        let x = if title.x < min_x { min_x } else { title.x - adjust };
        (x, title.y + title.height)
    }

    /// Stop animations, cancel pending work and hide everything.
    ///
    /// Every later call on this bar is a no-op.
    pub fn teardown(&mut self, scheduler: &mut dyn Scheduler) {
        if self.torn_down {
            return;
        }
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }
        self.pulse.stop();
        self.spinner.set_running(false);
        self.elements.hide_all();
        self.torn_down = true;
        debug!("title bar torn down");
    }
}

#[cfg(test)]
#[path = "title_bar_tests.rs"]
mod tests;
