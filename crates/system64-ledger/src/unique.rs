//! Unique-skill derivation.
//!
//! Evaluated once, when the character first reaches the unique-skill level.
//! The skills tied at the highest level decide the archetype. Rules are
//! checked in order and the first match wins:
//!
//! 1. Highest level is 0: Latent Potential.
//! 2. Three or more skills tied, and the tie is at least half the
//!    character level: Polymath.
//! 3. The archetype groups in [`ARCHETYPE_GROUPS`] order.
//! 4. Prodigy of the first tied skill.
//!
//! The groups are listed explicitly rather than derived from skill domains
//! so the ladder stays stable if domains ever overlap.

use system64_types::{Character, Skill, UniqueSkill};
use tracing::info;

use crate::rules::ProgressionRules;

/// Archetype groups in evaluation order.
pub const ARCHETYPE_GROUPS: [(UniqueSkill, &[Skill]); 5] = [
    (
        UniqueSkill::PeakPhysique,
        &[Skill::Strength, Skill::Endurance, Skill::Agility],
    ),
    (
        UniqueSkill::SharpMind,
        &[
            Skill::Focus,
            Skill::Learning,
            Skill::ProblemSolving,
            Skill::Creativity,
        ],
    ),
    (
        UniqueSkill::WealthWeaver,
        &[Skill::FinancialLiteracy, Skill::Budgeting, Skill::Investing],
    ),
    (
        UniqueSkill::StoicHeart,
        &[
            Skill::Discipline,
            Skill::SelfAwareness,
            Skill::GoalSetting,
            Skill::Mindfulness,
        ],
    ),
    (
        UniqueSkill::SocialButterfly,
        &[Skill::Community, Skill::Relationship],
    ),
];

/// Minimum number of tied skills for the polymath archetype.
const POLYMATH_MIN_TIED: usize = 3;

/// Assign the unique skill if the character qualifies and has none yet.
///
/// Returns the newly assigned archetype, or `None` when nothing changed.
pub fn generate_unique_skill(
    character: &mut Character,
    rules: &ProgressionRules,
) -> Option<UniqueSkill> {
    if character.level < rules.unique_skill_level || character.unique_skill.is_some() {
        return None;
    }

    let highest = character.skills.values().copied().max().unwrap_or(0);
    let tied: Vec<Skill> = character
        .skills
        .iter()
        .filter(|(_, level)| **level == highest)
        .map(|(skill, _)| *skill)
        .collect();

    let archetype = if highest == 0 {
        UniqueSkill::LatentPotential
    } else if tied.len() >= POLYMATH_MIN_TIED
        && u64::from(highest).saturating_mul(2) >= u64::from(character.level)
    {
        UniqueSkill::Polymath
    } else {
        ARCHETYPE_GROUPS
            .iter()
            .find(|(_, group)| tied.iter().any(|s| group.contains(s)))
            .map(|(archetype, _)| *archetype)
            .or_else(|| tied.first().map(|s| UniqueSkill::ProdigyOf(*s)))
            .unwrap_or(UniqueSkill::LatentPotential)
    };

    character.unique_skill = Some(archetype);
    info!(
        unique_skill = %archetype,
        level = character.level,
        highest_skill_level = highest,
        "Unique skill unlocked"
    );
    Some(archetype)
}
