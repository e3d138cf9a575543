//! Character setup validation and the profile view model.

use rust_decimal::Decimal;
use serde::Serialize;
use system64_catalog::Catalog;
use system64_ledger::ProgressionRules;
use system64_types::{Character, Domain, Skill};

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

/// Raw character-creation input.
///
/// Numeric fields are `None` when the player's input did not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSetup {
    /// Player name.
    pub name: String,
    /// Age in years.
    pub age: Option<u32>,
    /// Free-form status line.
    pub status: String,
    /// Weight in kilograms.
    pub weight: Option<Decimal>,
    /// Height in centimeters.
    pub height: Option<Decimal>,
}

/// Every problem found in a [`CharacterSetup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error: {}", .problems.join(" "))]
pub struct SetupError {
    /// One sentence per problem, in form order.
    pub problems: Vec<&'static str>,
}

impl CharacterSetup {
    /// Check every field and build a fresh level 1 character.
    ///
    /// Names and status are trimmed; numbers must be at least 1.
    pub fn into_character(self) -> Result<Character, SetupError> {
        let name = self.name.trim().to_owned();
        let status = self.status.trim().to_owned();
        let mut problems = Vec::new();

        if name.is_empty() {
            problems.push("Name missing.");
        }
        let age = self.age.filter(|a| *a >= 1);
        if age.is_none() {
            problems.push("Valid age missing.");
        }
        if status.is_empty() {
            problems.push("Status missing.");
        }
        let weight = self.weight.filter(|w| *w >= Decimal::ONE);
        if weight.is_none() {
            problems.push("Valid weight missing.");
        }
        let height = self.height.filter(|h| *h >= Decimal::ONE);
        if height.is_none() {
            problems.push("Valid height missing.");
        }

        match (age, weight, height) {
            (Some(age), Some(weight), Some(height)) if problems.is_empty() => {
                Ok(Character::new(name, age, status, weight, height))
            }
            _ => Err(SetupError { problems }),
        }
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// One skill line in the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillLine {
    /// The skill.
    pub skill: Skill,
    /// Spaced display name.
    pub name: &'static str,
    /// Current level.
    pub level: u32,
}

/// Skills of one domain, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSkills {
    /// The domain.
    pub domain: Domain,
    /// Its skills.
    pub skills: Vec<SkillLine>,
}

/// Read-only snapshot of the character for a profile or dashboard screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterProfile {
    /// Player name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Status line.
    pub status: String,
    /// Weight in kilograms.
    pub weight: Decimal,
    /// Height in centimeters.
    pub height: Decimal,
    /// Overall level.
    pub level: u32,
    /// Tier name for the level.
    pub level_name: String,
    /// XP toward the next level.
    pub xp: u32,
    /// XP needed per level.
    pub xp_per_level: u32,
    /// Unique skill display text, `"None"` while locked.
    pub unique_skill: String,
    /// Skills grouped by domain; empty domains are left out.
    pub domains: Vec<DomainSkills>,
}

impl CharacterProfile {
    /// Build the profile for `character`.
    pub fn new(character: &Character, catalog: &Catalog, rules: &ProgressionRules) -> Self {
        let domains = Domain::ALL
            .iter()
            .map(|&domain| DomainSkills {
                domain,
                skills: catalog
                    .skills()
                    .iter()
                    .filter(|d| d.domain == domain)
                    .map(|d| SkillLine {
                        skill: d.skill,
                        name: d.skill.display_name(),
                        level: character.skill_level(d.skill),
                    })
                    .collect(),
            })
            .filter(|group| !group.skills.is_empty())
            .collect();

        Self {
            name: character.name.clone(),
            age: character.age,
            status: character.status.clone(),
            weight: character.weight,
            height: character.height,
            level: character.level,
            level_name: catalog.level_name(character.level).to_owned(),
            xp: character.xp,
            xp_per_level: rules.xp_per_level,
            unique_skill: character.unique_skill_name(),
            domains,
        }
    }
}
