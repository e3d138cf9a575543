//! Error types for task generation and the task lifecycle.

use crate::lifecycle::{TaskAction, TaskPhase};

/// Errors from resolving and generating tasks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// The catalog holds no templates at all.
    #[error("no tasks available")]
    NoTemplatesAvailable,

    /// A reward computation left the representable range.
    #[error("arithmetic overflow in {context}")]
    ArithmeticOverflow {
        /// What was being computed.
        context: String,
    },
}

/// A lifecycle action that is not legal from the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    /// The countdown is running; only completion or expiry may follow.
    #[error("timer active, cannot {action}")]
    TimerActive {
        /// The rejected action.
        action: TaskAction,
    },

    /// The task was accepted and must be resolved, not declined.
    #[error("task in progress, resolve it before {action}")]
    TaskInProgress {
        /// The rejected action.
        action: TaskAction,
    },

    /// The task already reached a terminal phase.
    #[error("task already resolved as {phase:?}")]
    AlreadyResolved {
        /// The terminal phase.
        phase: TaskPhase,
    },

    /// Any other illegal pairing.
    #[error("cannot {action} a task that is {from:?}")]
    InvalidTransition {
        /// Phase the task was in.
        from: TaskPhase,
        /// The rejected action.
        action: TaskAction,
    },
}
