//! Acceptance test harness.
//!
//! Wraps a [`TitleBar`] with its main loop, a recording notifier and a
//! mutable shell snapshot, so acceptance tests read like shell scripts.

use crate::config::ResolvedConfig;
use crate::model::{ButtonKind, RenderMode, VisualState, WindowInfo};
use crate::report::LayoutReport;
use crate::shell::{EventLog, FrameReport, MainLoop, ShellContext, StatusArea};
use crate::state::TitleBar;
use crate::view_state::{CellMeasure, Element};

/// Frame length used by [`Harness::frame`].
pub const FRAME_MS: u64 = 16;

pub struct Harness {
    pub bar: TitleBar,
    pub main_loop: MainLoop,
    pub log: EventLog,
    pub ctx: ShellContext,
}

impl Harness {
    /// An 800-wide home screen with default configuration.
    pub fn new() -> Self {
        Self::with_config(ResolvedConfig::default(), 800)
    }

    pub fn with_config(config: ResolvedConfig, screen_width: i32) -> Self {
        Self {
            bar: TitleBar::new(&config, screen_width, Box::new(CellMeasure::default())),
            main_loop: MainLoop::new(),
            log: EventLog::new(),
            ctx: ShellContext::new(screen_width, RenderMode::Home),
        }
    }

    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.ctx.render_mode = mode;
        self.ctx.previous_render_mode = mode;
        self
    }

    pub fn status_area(mut self, width: i32) -> Self {
        self.ctx.status_area = Some(StatusArea {
            width,
            visible: true,
        });
        self
    }

    pub fn window(mut self, window: WindowInfo) -> Self {
        self.ctx.window = Some(window);
        self
    }

    pub fn request(&mut self, state: VisualState) {
        self.bar.set_requested_state(state, &mut self.main_loop);
    }

    /// Run one 16 ms frame.
    pub fn frame(&mut self) -> FrameReport {
        self.frame_ms(FRAME_MS)
    }

    pub fn frame_ms(&mut self, delta_ms: u64) -> FrameReport {
        self.main_loop
            .run_frame(&mut self.bar, &self.ctx, &mut self.log, delta_ms)
    }

    pub fn reconcile_now(&mut self) {
        self.bar
            .reconcile_now(&self.ctx, &mut self.main_loop, &mut self.log);
    }

    pub fn element(&self, kind: ButtonKind) -> &Element {
        self.bar.elements().get(kind)
    }

    pub fn visible(&self, kind: ButtonKind) -> bool {
        self.bar.elements().is_visible(kind)
    }

    pub fn report(&self) -> LayoutReport {
        LayoutReport::capture(&self.bar, &self.log)
    }
}
