//! Cooperative single-threaded main loop.
//!
//! Deferred tasks are dispatched in priority order, then FIFO. One call to
//! [`MainLoop::run_frame`] services every task that outranks the animation
//! timelines, ticks the timelines, then services the rest.

use super::{Priority, Scheduler, ShellContext, ShellNotifier, TaskToken};
use crate::state::TitleBar;
use std::collections::BTreeMap;
use tracing::trace;

#[derive(Debug, Default)]
pub struct MainLoop {
    next_token: u64,
    next_seq: u64,
    queue: BTreeMap<(Priority, u64), TaskToken>,
}

/// What one frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Deferred tasks that ran a reconciliation pass.
    pub passes: usize,
    /// Deferred tasks that were dispatched but found stale.
    pub stale: usize,
}

impl MainLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remove and return the next task that runs before `limit`.
    fn pop_before(&mut self, limit: Option<Priority>) -> Option<TaskToken> {
        let (&key, _) = self.queue.first_key_value()?;
        if limit.is_some_and(|limit| key.0 >= limit) {
            return None;
        }
        self.queue.remove(&key)
    }

    /// Run one frame against `bar`.
    pub fn run_frame(
        &mut self,
        bar: &mut TitleBar,
        ctx: &ShellContext,
        notifier: &mut dyn ShellNotifier,
        delta_ms: u64,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        while let Some(token) = self.pop_before(Some(Priority::TIMELINE)) {
            dispatch(bar, token, ctx, notifier, &mut report);
        }

        bar.on_timeline_frame(delta_ms, ctx.display_off);

        while let Some(token) = self.pop_before(None) {
            dispatch(bar, token, ctx, notifier, &mut report);
        }

        report
    }
}

fn dispatch(
    bar: &mut TitleBar,
    token: TaskToken,
    ctx: &ShellContext,
    notifier: &mut dyn ShellNotifier,
    report: &mut FrameReport,
) {
    if bar.run_deferred(token, ctx, notifier) {
        report.passes += 1;
    } else {
        trace!(?token, "stale deferred task skipped");
        report.stale += 1;
    }
}

impl Scheduler for MainLoop {
    fn schedule_deferred(&mut self, priority: Priority) -> TaskToken {
        let token = TaskToken(self.next_token);
        self.next_token += 1;
        self.queue.insert((priority, self.next_seq), token);
        self.next_seq += 1;
        token
    }

    fn cancel(&mut self, token: TaskToken) {
        self.queue.retain(|_, queued| *queued != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let mut main_loop = MainLoop::new();
        let a = main_loop.schedule_deferred(Priority::DEFAULT);
        let b = main_loop.schedule_deferred(Priority::DEFAULT);
        assert_ne!(a, b);
        assert_eq!(main_loop.len(), 2);
    }

    #[test]
    fn dispatch_order_is_priority_then_fifo() {
        let mut main_loop = MainLoop::new();
        let late = main_loop.schedule_deferred(Priority::TIMELINE);
        let first = main_loop.schedule_deferred(Priority::TITLEBAR_UPDATE);
        let second = main_loop.schedule_deferred(Priority::TITLEBAR_UPDATE);

        assert_eq!(main_loop.pop_before(Some(Priority::TIMELINE)), Some(first));
        assert_eq!(main_loop.pop_before(Some(Priority::TIMELINE)), Some(second));
        assert_eq!(main_loop.pop_before(Some(Priority::TIMELINE)), None);
        assert_eq!(main_loop.pop_before(None), Some(late));
    }

    #[test]
    fn cancel_removes_only_that_task() {
        let mut main_loop = MainLoop::new();
        let a = main_loop.schedule_deferred(Priority::DEFAULT);
        let b = main_loop.schedule_deferred(Priority::DEFAULT);
        main_loop.cancel(a);
        main_loop.cancel(TaskToken(999));
        assert_eq!(main_loop.len(), 1);
        assert_eq!(main_loop.pop_before(None), Some(b));
        assert!(main_loop.is_empty());
    }
}
