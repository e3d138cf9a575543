//! Task generation and lifecycle for the System 64 progression engine.
//!
//! # Modules
//!
//! - [`resolver`] -- Placeholder resolution with graceful error markers
//! - [`generator`] -- Template eligibility, reward scaling, task assembly
//! - [`lifecycle`] -- The per-task state machine
//! - [`countdown`] -- One-second countdown and clock formatting
//! - [`error`] -- Generation and lifecycle errors

pub mod countdown;
pub mod error;
pub mod generator;
pub mod lifecycle;
pub mod resolver;

pub use countdown::{Countdown, CountdownTick, format_hh_mm_ss, format_mm_ss};
pub use error::{LifecycleError, TaskError};
pub use generator::{FALLBACK_CODES, RewardRules, eligible_templates, generate_task, scale_reward};
pub use lifecycle::{TaskAction, TaskPhase};
pub use resolver::{Resolution, resolve_variables};
