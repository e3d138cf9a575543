//! Static template catalog for the System 64 progression engine.
//!
//! Built once at startup by [`build_catalog`] and borrowed immutably by the
//! resolver and generator.
//!
//! # Modules
//!
//! - [`catalog`] -- The assembled [`Catalog`] and its lookups
//! - [`template`] -- Template, variable spec and time limit shapes
//! - [`tiers`] -- Skill definitions, level tiers, difficulty tables
//! - [`items`] -- Item lists and the book list
//! - [`authored`] -- The forty hand-authored templates
//! - [`expansion`] -- Procedural templates and [`band_for`]
//! - [`error`] -- Catalog validation errors

pub mod authored;
pub mod catalog;
pub mod error;
pub mod expansion;
pub mod items;
pub mod template;
pub mod tiers;

pub use catalog::{Catalog, build_catalog};
pub use error::CatalogError;
pub use expansion::{DifficultyBand, band_for};
pub use items::ItemList;
pub use template::{TaskTemplate, TimeLimit, VariableSpec, flat, range};
pub use tiers::{LevelTier, SkillDefinition, UNKNOWN_DIFFICULTY_LABEL, UNKNOWN_LEVEL_NAME};
