//! Task template shapes.
//!
//! A [`TaskTemplate`] is the static definition of a task: a description
//! pattern with bracketed placeholders, one [`VariableSpec`] per
//! placeholder, the base XP figures, and a [`TimeLimit`].
//!
//! Templates are assembled with a small builder so the hand-authored table
//! in [`crate::authored`] reads one template per block.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use system64_types::{DifficultyCode, Skill};

use crate::items::ItemList;

/// How one placeholder is resolved into a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableSpec {
    /// Uniform integer draw in `[min, max]`, optionally shifted by
    /// `level * scale` and rounded.
    Range {
        /// Inclusive lower bound of the draw.
        min: i64,
        /// Inclusive upper bound of the draw.
        max: i64,
        /// Per-level shift, `None` for an unscaled draw.
        scale: Option<Decimal>,
    },
    /// Uniform pick from a named item list.
    ItemList(ItemList),
    /// Uniform pick from the book list.
    BookTitle,
}

/// Level-scaled numeric range.
pub const fn range(min: i64, max: i64, scale: Decimal) -> VariableSpec {
    VariableSpec::Range {
        min,
        max,
        scale: Some(scale),
    }
}

/// Numeric range that ignores the character level.
pub const fn flat(min: i64, max: i64) -> VariableSpec {
    VariableSpec::Range {
        min,
        max,
        scale: None,
    }
}

/// Time limit attached to a template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeLimit {
    /// No countdown.
    #[default]
    Untimed,
    /// Fixed number of minutes.
    Fixed(u32),
    /// Taken from the resolved value of the named range variable.
    Dynamic {
        /// Placeholder whose value becomes the limit in minutes.
        variable: String,
    },
}

impl TimeLimit {
    /// Dynamic limit driven by `variable`.
    pub fn dynamic(variable: &str) -> Self {
        Self::Dynamic {
            variable: variable.to_owned(),
        }
    }
}

/// Static definition of a task's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTemplate {
    /// Unique identifier, e.g. `P001` or `AGL004`.
    pub id: String,
    /// Skill that improves on completion.
    pub skill: Skill,
    /// Difficulty bucket the template is eligible in.
    pub difficulty: DifficultyCode,
    /// Description with bracketed placeholders such as `[DURATION_M]`.
    pub description: String,
    /// Spec for each placeholder, keyed by name without brackets.
    pub variables: BTreeMap<String, VariableSpec>,
    /// XP awarded at level 0 before scaling.
    pub base_xp_gain: u32,
    /// XP deducted at level 0 before scaling.
    pub base_xp_failure_penalty: u32,
    /// Countdown rule.
    pub time_limit: TimeLimit,
}

impl TaskTemplate {
    /// Start a template with no variables, no XP and no time limit.
    pub fn new(id: &str, skill: Skill, difficulty: DifficultyCode, description: &str) -> Self {
        Self {
            id: id.to_owned(),
            skill,
            difficulty,
            description: description.to_owned(),
            variables: BTreeMap::new(),
            base_xp_gain: 0,
            base_xp_failure_penalty: 0,
            time_limit: TimeLimit::Untimed,
        }
    }

    /// Add a placeholder spec.
    #[must_use]
    pub fn var(mut self, name: &str, spec: VariableSpec) -> Self {
        self.variables.insert(name.to_owned(), spec);
        self
    }

    /// Set the base reward and penalty.
    #[must_use]
    pub const fn xp(mut self, gain: u32, penalty: u32) -> Self {
        self.base_xp_gain = gain;
        self.base_xp_failure_penalty = penalty;
        self
    }

    /// Set the time limit.
    #[must_use]
    pub fn time_limit(mut self, limit: TimeLimit) -> Self {
        self.time_limit = limit;
        self
    }

    /// The placeholder designated as the duration, if the limit is dynamic.
    pub fn duration_variable(&self) -> Option<&str> {
        match &self.time_limit {
            TimeLimit::Dynamic { variable } => Some(variable.as_str()),
            TimeLimit::Untimed | TimeLimit::Fixed(_) => None,
        }
    }
}
