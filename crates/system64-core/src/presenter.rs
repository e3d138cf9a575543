//! Presentation port and a recording implementation.
//!
//! The session never renders anything itself. It hands the active task and
//! its [`RenderMode`] to a [`Presenter`] and reports every state change as a
//! [`Notification`]. A terminal, a browser bridge, or a test double can sit
//! behind the trait.
//!
//! [`RecordingPresenter`] keeps everything it receives, which lets the
//! session be exercised end-to-end without a front-end.

use system64_types::{Notification, RenderMode, ResolvedTask, Severity, TaskId};

/// Receiver of rendered tasks and notifications.
pub trait Presenter {
    /// Show `task` with the actions `mode` allows.
    fn present_task(&mut self, task: &ResolvedTask, mode: RenderMode);

    /// Remove the task from view.
    fn clear_task(&mut self);

    /// Show a discrete message.
    fn notify(&mut self, notification: Notification);

    /// Refresh a running countdown, already formatted as `MM:SS`.
    fn update_timer(&mut self, _display: &str) {}
}

/// One call received by a [`RecordingPresenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    /// A task was presented.
    Task {
        /// Instance id of the task.
        id: TaskId,
        /// Mode it was presented in.
        mode: RenderMode,
    },
    /// The task view was cleared.
    Cleared,
    /// A notification was shown.
    Notified(Notification),
    /// The countdown display changed.
    Timer(String),
}

/// A presenter that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    /// Create an empty recorder.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Everything received so far.
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Notifications received so far, in order.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.events.iter().filter_map(|e| match e {
            PresenterEvent::Notified(n) => Some(n),
            _ => None,
        })
    }

    /// Whether any notification with `severity` contains `needle`.
    pub fn saw(&self, severity: Severity, needle: &str) -> bool {
        self.notifications()
            .any(|n| n.severity == severity && n.message.contains(needle))
    }

    /// The most recent task presentation.
    pub fn last_task(&self) -> Option<(TaskId, RenderMode)> {
        self.events.iter().rev().find_map(|e| match e {
            PresenterEvent::Task { id, mode } => Some((*id, *mode)),
            _ => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn present_task(&mut self, task: &ResolvedTask, mode: RenderMode) {
        self.events.push(PresenterEvent::Task { id: task.id, mode });
    }

    fn clear_task(&mut self) {
        self.events.push(PresenterEvent::Cleared);
    }

    fn notify(&mut self, notification: Notification) {
        self.events.push(PresenterEvent::Notified(notification));
    }

    fn update_timer(&mut self, display: &str) {
        self.events.push(PresenterEvent::Timer(display.to_owned()));
    }
}
