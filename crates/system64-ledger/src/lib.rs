//! Progression ledger for the System 64 progression engine.
//!
//! Owns every rule that changes a [`Character`](system64_types::Character)'s
//! level, XP, skill levels or unique skill. All operations are plain
//! functions over a borrowed character. They return the [`ProgressEvent`]s
//! that happened so the caller can notify the player and persist.
//!
//! # Architecture
//!
//! - [`rules`] -- [`ProgressionRules`]: XP per level, milestone interval,
//!   unique-skill level.
//! - [`ledger`] -- [`add_xp`], [`lose_xp`], [`increase_skill_level`].
//! - [`unique`] -- [`generate_unique_skill`] and its archetype ladder.
//!
//! # Invariants
//!
//! - After any gain, `xp < xp_per_level`; surplus rolls over into levels.
//! - Losing XP clamps at zero and never lowers the level.
//! - A skill reaching a multiple of the milestone interval grants exactly one
//!   level and sets XP to zero.
//! - The unique skill is assigned once, the first time the level reaches the
//!   unique-skill level.
//!
//! The ledger never panics; it returns errors.

pub mod ledger;
pub mod rules;
pub mod unique;

pub use ledger::{ProgressEvent, add_xp, increase_skill_level, lose_xp};
pub use rules::ProgressionRules;
pub use unique::{ARCHETYPE_GROUPS, generate_unique_skill};

/// Errors that can occur while applying progression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// A counter would leave the `u32` range.
    #[error("arithmetic overflow in {context}")]
    ArithmeticOverflow {
        /// What was being computed.
        context: &'static str,
    },

    /// The rules cannot be applied (zero XP per level).
    #[error("invalid progression rules: {reason}")]
    InvalidRules {
        /// Which rule is unusable.
        reason: &'static str,
    },
}
