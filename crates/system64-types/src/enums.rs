//! Enumeration types for the System 64 progression engine.
//!
//! Skills and their display domains, difficulty codes, notification
//! severities, presentation render modes, and the unique-skill archetypes
//! unlocked at the unique-skill level.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// A display-only grouping of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Domain {
    /// Body: strength, endurance, agility.
    Physical,
    /// Mind: focus, problem solving, learning, creativity.
    Mental,
    /// Money: literacy, budgeting, investing.
    Financial,
    /// Character: discipline, self-awareness, goals, mindfulness.
    Philosophical,
    /// Other people: community, relationships.
    Social,
}

impl Domain {
    /// Every domain in display order.
    pub const ALL: [Self; 5] = [
        Self::Physical,
        Self::Mental,
        Self::Financial,
        Self::Philosophical,
        Self::Social,
    ];
}

impl core::fmt::Display for Domain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Physical => "Physical",
            Self::Mental => "Mental",
            Self::Financial => "Financial",
            Self::Philosophical => "Philosophical",
            Self::Social => "Social",
        };
        f.write_str(name)
    }
}

/// A named player attribute, leveled independently.
///
/// Declaration order is catalog order. `BTreeMap<Skill, _>` iterates in this
/// order, which is the order ties are broken in when deriving a unique skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Skill {
    /// Raw physical power.
    Strength,
    /// Sustained physical effort.
    Endurance,
    /// Speed, balance, coordination.
    Agility,
    /// Sustained attention.
    Focus,
    /// Working through puzzles and problems.
    ProblemSolving,
    /// Acquiring new knowledge.
    Learning,
    /// Making things.
    Creativity,
    /// Understanding money.
    FinancialLiteracy,
    /// Planning and tracking spending.
    Budgeting,
    /// Growing capital.
    Investing,
    /// Doing what was planned.
    Discipline,
    /// Knowing one's own patterns.
    SelfAwareness,
    /// Setting and reviewing objectives.
    GoalSetting,
    /// Present-moment awareness.
    Mindfulness,
    /// Contributing to a wider group.
    Community,
    /// Maintaining personal connections.
    Relationship,
}

impl Skill {
    /// Every skill in catalog order.
    pub const ALL: [Self; 16] = [
        Self::Strength,
        Self::Endurance,
        Self::Agility,
        Self::Focus,
        Self::ProblemSolving,
        Self::Learning,
        Self::Creativity,
        Self::FinancialLiteracy,
        Self::Budgeting,
        Self::Investing,
        Self::Discipline,
        Self::SelfAwareness,
        Self::GoalSetting,
        Self::Mindfulness,
        Self::Community,
        Self::Relationship,
    ];

    /// The display domain this skill is grouped under.
    pub const fn domain(self) -> Domain {
        match self {
            Self::Strength | Self::Endurance | Self::Agility => Domain::Physical,
            Self::Focus | Self::ProblemSolving | Self::Learning | Self::Creativity => {
                Domain::Mental
            }
            Self::FinancialLiteracy | Self::Budgeting | Self::Investing => Domain::Financial,
            Self::Discipline | Self::SelfAwareness | Self::GoalSetting | Self::Mindfulness => {
                Domain::Philosophical
            }
            Self::Community | Self::Relationship => Domain::Social,
        }
    }

    /// Human-readable name with the camel case split into words.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Endurance => "Endurance",
            Self::Agility => "Agility",
            Self::Focus => "Focus",
            Self::ProblemSolving => "Problem Solving",
            Self::Learning => "Learning",
            Self::Creativity => "Creativity",
            Self::FinancialLiteracy => "Financial Literacy",
            Self::Budgeting => "Budgeting",
            Self::Investing => "Investing",
            Self::Discipline => "Discipline",
            Self::SelfAwareness => "Self Awareness",
            Self::GoalSetting => "Goal Setting",
            Self::Mindfulness => "Mindfulness",
            Self::Community => "Community",
            Self::Relationship => "Relationship",
        }
    }
}

impl core::fmt::Display for Skill {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// A letter bucket controlling which templates are eligible at a level.
///
/// Only `A` through `D` are produced by the level table; the remaining codes
/// exist in the label table for completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum DifficultyCode {
    /// Very Easy.
    A,
    /// Easy.
    B,
    /// Medium.
    C,
    /// Hard.
    D,
    /// Impossible.
    E,
    /// Futile.
    F,
    /// Hopeless.
    G,
    /// Impassable.
    #[serde(rename = "G+")]
    GPlus,
    /// Impractical.
    #[serde(rename = "G++")]
    GPlusPlus,
    /// Inaccessible.
    H,
    /// Inconceivable.
    #[serde(rename = "H+")]
    HPlus,
    /// Insurmountable.
    #[serde(rename = "H++")]
    HPlusPlus,
}

impl DifficultyCode {
    /// Every code in ascending order.
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::GPlus,
        Self::GPlusPlus,
        Self::H,
        Self::HPlus,
        Self::HPlusPlus,
    ];

    /// Zero-based position in the ascending order (`A` is 0).
    pub const fn ordinal(self) -> u32 {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::E => 4,
            Self::F => 5,
            Self::G => 6,
            Self::GPlus => 7,
            Self::GPlusPlus => 8,
            Self::H => 9,
            Self::HPlus => 10,
            Self::HPlusPlus => 11,
        }
    }

    /// The short code as shown to players.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::GPlus => "G+",
            Self::GPlusPlus => "G++",
            Self::H => "H",
            Self::HPlus => "H+",
            Self::HPlusPlus => "H++",
        }
    }

    /// Parse the short code form (`"G+"` and friends included).
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl core::fmt::Display for DifficultyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// Severity attached to a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Severity {
    /// Neutral status text.
    Info,
    /// Something good happened (XP gained, level up).
    Success,
    /// Soft warning (skip warning, penalty applied, reset pending).
    Warning,
    /// Rejected action or destructive event.
    Error,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Lifecycle hint telling the presentation layer which actions to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum RenderMode {
    /// Freshly generated: accept, decline, or start a timed run.
    Initial,
    /// Accepted: complete, fail, or start the timer.
    Accepted,
    /// Countdown running: no actions until it expires.
    TimerActive,
}

// ---------------------------------------------------------------------------
// Unique skills
// ---------------------------------------------------------------------------

/// Archetype label permanently assigned once the unique-skill level is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum UniqueSkill {
    /// Every skill sits at zero.
    LatentPotential,
    /// Three or more skills share a high maximum.
    Polymath,
    /// A physical skill leads.
    PeakPhysique,
    /// A mental skill leads.
    SharpMind,
    /// A financial skill leads.
    WealthWeaver,
    /// A philosophical skill leads.
    StoicHeart,
    /// A social skill leads.
    SocialButterfly,
    /// Fallback archetype naming the leading skill.
    ProdigyOf(Skill),
}

impl core::fmt::Display for UniqueSkill {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LatentPotential => f.write_str("Latent Potential"),
            Self::Polymath => f.write_str("Polymath"),
            Self::PeakPhysique => f.write_str("Peak Physique"),
            Self::SharpMind => f.write_str("Sharp Mind"),
            Self::WealthWeaver => f.write_str("Wealth Weaver"),
            Self::StoicHeart => f.write_str("Stoic Heart"),
            Self::SocialButterfly => f.write_str("Social Butterfly"),
            Self::ProdigyOf(skill) => write!(f, "Prodigy of {}", skill.display_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skill_has_a_domain_in_catalog_order() {
        let domains: Vec<Domain> = Skill::ALL.iter().map(|s| s.domain()).collect();
        let mut sorted = domains.clone();
        sorted.sort();
        assert_eq!(domains, sorted);
    }

    #[test]
    fn display_names_split_camel_case() {
        assert_eq!(Skill::ProblemSolving.display_name(), "Problem Solving");
        assert_eq!(Skill::FinancialLiteracy.to_string(), "Financial Literacy");
        assert_eq!(Skill::Focus.to_string(), "Focus");
    }

    #[test]
    fn difficulty_ordinals_ascend() {
        for (i, code) in DifficultyCode::ALL.iter().enumerate() {
            assert_eq!(u32::try_from(i).ok(), Some(code.ordinal()));
        }
    }

    #[test]
    fn extended_codes_parse_and_serialize() {
        assert_eq!(DifficultyCode::parse("G++"), Some(DifficultyCode::GPlusPlus));
        assert_eq!(DifficultyCode::parse("Z"), None);
        let json = serde_json::to_string(&DifficultyCode::HPlus).unwrap_or_default();
        assert_eq!(json, "\"H+\"");
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap_or_default();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn render_mode_serializes_camel_case() {
        let json = serde_json::to_string(&RenderMode::TimerActive).unwrap_or_default();
        assert_eq!(json, "\"timerActive\"");
    }

    #[test]
    fn unique_skill_display() {
        assert_eq!(UniqueSkill::PeakPhysique.to_string(), "Peak Physique");
        assert_eq!(
            UniqueSkill::ProdigyOf(Skill::GoalSetting).to_string(),
            "Prodigy of Goal Setting"
        );
    }
}
