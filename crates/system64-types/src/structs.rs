//! Core entity structs for the System 64 progression engine.
//!
//! # Sections
//!
//! - **Character** -- the persisted player record
//! - **Tasks** -- a template instantiated with concrete values
//! - **Notifications** -- discrete user-facing messages

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{DifficultyCode, Severity, Skill, UniqueSkill};
use crate::ids::TaskId;

/// Display text for a character whose unique skill is still locked.
pub const UNSET_UNIQUE_SKILL: &str = "None";

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// The single player record.
///
/// Created on character setup, mutated by every XP and skill update, and
/// destroyed only by a full reset. `xp` is re-normalized below the per-level
/// threshold after every gain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Character {
    /// Player name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Free-form status line (occupation, situation).
    pub status: String,
    /// Weight in kilograms.
    #[ts(as = "String")]
    pub weight: Decimal,
    /// Height in centimeters.
    #[ts(as = "String")]
    pub height: Decimal,
    /// Overall level, at least 1.
    pub level: u32,
    /// Experience toward the next level.
    pub xp: u32,
    /// Archetype unlocked at the unique-skill level, `None` until then.
    pub unique_skill: Option<UniqueSkill>,
    /// Per-skill levels.
    #[serde(default)]
    pub skills: BTreeMap<Skill, u32>,
}

impl Character {
    /// Create a level 1 character with every skill at level 1.
    pub fn new(name: String, age: u32, status: String, weight: Decimal, height: Decimal) -> Self {
        Self {
            name,
            age,
            status,
            weight,
            height,
            level: 1,
            xp: 0,
            unique_skill: None,
            skills: Skill::ALL.iter().map(|s| (*s, 1)).collect(),
        }
    }

    /// Level of a skill, treating a missing entry as 0.
    pub fn skill_level(&self, skill: Skill) -> u32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    /// The unique skill as display text, `"None"` while locked.
    pub fn unique_skill_name(&self) -> String {
        self.unique_skill
            .map_or_else(|| UNSET_UNIQUE_SKILL.to_owned(), |u| u.to_string())
    }

    /// Insert level 1 for every listed skill that has no entry.
    ///
    /// Returns how many entries were added.
    pub fn heal_skills(&mut self, skills: impl IntoIterator<Item = Skill>) -> usize {
        let mut healed: usize = 0;
        for skill in skills {
            if !self.skills.contains_key(&skill) {
                self.skills.insert(skill, 1);
                healed = healed.saturating_add(1);
            }
        }
        healed
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Concrete value produced for one template placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ResolvedValue {
    /// A drawn and possibly level-scaled integer.
    Number(i64),
    /// A pick from an item list or the book list.
    Text(String),
    /// Visible marker left in place of a value that could not be resolved.
    Marker(String),
}

impl ResolvedValue {
    /// The numeric value, if this is a number.
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) | Self::Marker(_) => None,
        }
    }

    /// Whether resolution failed for this placeholder.
    pub const fn is_marker(&self) -> bool {
        matches!(self, Self::Marker(_))
    }
}

impl core::fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) | Self::Marker(s) => f.write_str(s),
        }
    }
}

/// A template instantiated with concrete values for one presentation.
///
/// Owned by the session until it is completed, failed, or declined. Never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResolvedTask {
    /// Instance identifier used to detect stale actions.
    pub id: TaskId,
    /// Identifier of the template this task was built from.
    pub template_id: String,
    /// Global scenario number.
    pub sequence_number: u64,
    /// Description with every placeholder substituted.
    pub description: String,
    /// Skill that improves on completion.
    pub skill: Skill,
    /// Difficulty bucket of the template.
    pub difficulty_code: DifficultyCode,
    /// Human label for the difficulty bucket.
    pub difficulty_label: String,
    /// Concrete time limit in minutes, `None` when untimed.
    pub time_limit_minutes: Option<u32>,
    /// XP awarded on completion, already level-scaled.
    pub xp_gain: u32,
    /// XP deducted on failure, already level-scaled.
    pub xp_failure_penalty: u32,
    /// Value chosen for each placeholder name.
    pub resolved_variables: BTreeMap<String, ResolvedValue>,
    /// Whether the countdown is currently running.
    pub timer_running: bool,
}

impl ResolvedTask {
    /// Title line, e.g. `Scenario 07`.
    pub fn title(&self) -> String {
        format!("Scenario {:02}", self.sequence_number)
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// A discrete user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Notification {
    /// Text shown to the player.
    pub message: String,
    /// How the message should be styled.
    pub severity: Severity,
}

impl Notification {
    /// Build a notification with an explicit severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}
