//! Progression thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds for levels, milestones and the unique skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRules {
    /// XP needed for one level.
    #[serde(default = "default_xp_per_level")]
    pub xp_per_level: u32,
    /// A skill level divisible by this grants a bonus level.
    #[serde(default = "default_milestone_interval")]
    pub milestone_interval: u32,
    /// Character level at which the unique skill unlocks.
    #[serde(default = "default_unique_skill_level")]
    pub unique_skill_level: u32,
}

const fn default_xp_per_level() -> u32 {
    100
}

const fn default_milestone_interval() -> u32 {
    5
}

const fn default_unique_skill_level() -> u32 {
    20
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            xp_per_level: default_xp_per_level(),
            milestone_interval: default_milestone_interval(),
            unique_skill_level: default_unique_skill_level(),
        }
    }
}
