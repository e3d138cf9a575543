//! Session controller and gameplay rules for the System 64 progression engine.
//!
//! This crate owns everything between a player's action and the pure
//! generation and progression crates: the task lifecycle handlers, the
//! anti-abuse rules, the lockout, the reset flow and the configuration.
//!
//! # Modules
//!
//! - [`session`] -- [`Session`], the single owner of mutable game state.
//! - [`config`] -- Configuration loading from `system64-config.yaml` into
//!   strongly-typed structs.
//! - [`clock`] -- [`Clock`] port with [`SystemClock`] and [`ManualClock`].
//! - [`presenter`] -- [`Presenter`] port and [`RecordingPresenter`].
//! - [`cheat`] -- Premature-completion detection and rebuke lines.
//! - [`skips`] -- Consecutive-decline warning and XP penalty.
//! - [`cooldown`] -- Emergency cooldown lockout.
//! - [`reset`] -- Five-step reset confirmation.
//! - [`profile`] -- Character setup validation and the profile view.
//! - [`error`] -- [`SessionError`].

pub mod cheat;
pub mod clock;
pub mod config;
pub mod cooldown;
pub mod error;
pub mod presenter;
pub mod profile;
pub mod reset;
pub mod session;
pub mod skips;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, GameConfig};
pub use cooldown::{Cooldown, CooldownStatus};
pub use error::SessionError;
pub use presenter::{Presenter, PresenterEvent, RecordingPresenter};
pub use profile::{CharacterProfile, CharacterSetup, SetupError};
pub use reset::ResetStep;
pub use session::{ActiveTask, CompletionOutcome, Session, SessionCounters, WELCOME_MESSAGE};
pub use skips::{SkipOutcome, SkipTracker};
