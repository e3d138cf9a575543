//! Skill definitions, level-name tiers and the difficulty tables.

use std::collections::BTreeMap;

use system64_types::{DifficultyCode, Domain, Skill};

/// Name shown for levels past the last tier.
pub const UNKNOWN_LEVEL_NAME: &str = "⚔️ ???";

/// Label shown for a difficulty code missing from the label table.
pub const UNKNOWN_DIFFICULTY_LABEL: &str = "Unknown";

/// A skill paired with its display domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefinition {
    /// The skill.
    pub skill: Skill,
    /// Domain used to group it for display.
    pub domain: Domain,
}

/// One rung of the level-name ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTier {
    /// Highest level that carries this name.
    pub max_level: u32,
    /// Display name, e.g. `⚔️ Novice`.
    pub name: String,
}

/// Every skill with its domain, in catalog order.
pub fn skill_definitions() -> Vec<SkillDefinition> {
    Skill::ALL
        .iter()
        .map(|skill| SkillDefinition {
            skill: *skill,
            domain: skill.domain(),
        })
        .collect()
}

/// Ascending level-name ladder from Novice to Mythical.
pub fn level_tiers() -> Vec<LevelTier> {
    [
        (4, "Novice"),
        (9, "Apprentice"),
        (14, "Journeyman"),
        (19, "Expert"),
        (24, "Master"),
        (29, "Grandmaster"),
        (34, "Elder"),
        (39, "Demigod"),
        (44, "Legendary"),
        (49, "Archmage"),
        (59, "Celestial"),
        (69, "Immortal"),
        (79, "Overlord"),
        (89, "Eternal"),
        (99, "Ascended"),
        (149, "Primordial"),
        (150, "Mythical"),
    ]
    .into_iter()
    .map(|(max_level, name)| LevelTier {
        max_level,
        name: format!("⚔️ {name}"),
    })
    .collect()
}

/// Level to difficulty code for levels 1 through 21.
pub fn difficulty_by_level() -> BTreeMap<u32, DifficultyCode> {
    (1..=21)
        .map(|level| {
            let code = match level {
                1..=5 => DifficultyCode::A,
                6..=10 => DifficultyCode::B,
                11..=16 => DifficultyCode::C,
                _ => DifficultyCode::D,
            };
            (level, code)
        })
        .collect()
}

/// Human label for every difficulty code.
pub fn difficulty_labels() -> BTreeMap<DifficultyCode, String> {
    DifficultyCode::ALL
        .iter()
        .map(|code| {
            let label = match code {
                DifficultyCode::A => "Very Easy",
                DifficultyCode::B => "Easy",
                DifficultyCode::C => "Medium",
                DifficultyCode::D => "Hard",
                DifficultyCode::E => "Impossible",
                DifficultyCode::F => "Futile",
                DifficultyCode::G => "Hopeless",
                DifficultyCode::GPlus => "Impassable",
                DifficultyCode::GPlusPlus => "Impractical",
                DifficultyCode::H => "Inaccessible",
                DifficultyCode::HPlus => "Inconceivable",
                DifficultyCode::HPlusPlus => "Insurmountable",
            };
            (*code, label.to_owned())
        })
        .collect()
}
