//! Shared type definitions for the System 64 progression engine.
//!
//! This crate is the single source of truth for the data that crosses crate
//! boundaries. Types defined here flow downstream to `TypeScript` via `ts-rs`
//! for the browser presentation layer.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers
//! - [`enums`] -- Skills, domains, difficulty codes, severities, render modes
//! - [`structs`] -- Character, resolved tasks, notifications

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{DifficultyCode, Domain, RenderMode, Severity, Skill, UniqueSkill};
pub use ids::TaskId;
pub use structs::{Character, Notification, ResolvedTask, ResolvedValue, UNSET_UNIQUE_SKILL};
