//! XP and skill-level bookkeeping.
//!
//! Every operation mutates the borrowed [`Character`] in place and returns
//! the events that happened, in order. Persisting the character is the
//! caller's job and must follow every call.

use serde::Serialize;
use system64_types::{Character, Skill, UniqueSkill};
use tracing::{debug, info};

use crate::LedgerError;
use crate::rules::ProgressionRules;
use crate::unique::generate_unique_skill;

/// Something that changed on the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressEvent {
    /// XP was added.
    XpGained {
        /// Amount added.
        amount: u32,
    },
    /// XP was removed, clamped at zero.
    XpLost {
        /// Amount requested.
        amount: u32,
    },
    /// One level gained by XP rollover.
    LevelUp {
        /// The new level.
        level: u32,
    },
    /// A skill went up by one.
    SkillImproved {
        /// Which skill.
        skill: Skill,
        /// Its new level.
        level: u32,
    },
    /// A skill hit a milestone and granted a level.
    Milestone {
        /// Which skill.
        skill: Skill,
        /// The skill's new level.
        skill_level: u32,
        /// The character's new level.
        level: u32,
    },
    /// The unique skill was assigned.
    UniqueSkillUnlocked {
        /// The archetype.
        unique_skill: UniqueSkill,
    },
}

/// Add XP and roll surplus over into levels.
///
/// Each level gained checks the unique-skill unlock on its own.
pub fn add_xp(
    character: &mut Character,
    amount: u32,
    rules: &ProgressionRules,
) -> Result<Vec<ProgressEvent>, LedgerError> {
    if rules.xp_per_level == 0 {
        return Err(LedgerError::InvalidRules {
            reason: "xp_per_level must be positive",
        });
    }

    character.xp = character
        .xp
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow { context: "add_xp" })?;
    let mut events = vec![ProgressEvent::XpGained { amount }];

    while character.xp >= rules.xp_per_level {
        character.level = character
            .level
            .checked_add(1)
            .ok_or(LedgerError::ArithmeticOverflow { context: "level up" })?;
        character.xp = character.xp.saturating_sub(rules.xp_per_level);
        info!(level = character.level, xp = character.xp, "Level up");
        events.push(ProgressEvent::LevelUp {
            level: character.level,
        });
        if let Some(unique_skill) = generate_unique_skill(character, rules) {
            events.push(ProgressEvent::UniqueSkillUnlocked { unique_skill });
        }
    }
    Ok(events)
}

/// Remove XP, clamping at zero. Never lowers the level.
pub fn lose_xp(character: &mut Character, amount: u32) -> ProgressEvent {
    character.xp = character.xp.saturating_sub(amount);
    debug!(amount, xp = character.xp, "XP lost");
    ProgressEvent::XpLost { amount }
}

/// Raise a skill by one; a milestone grants one level and zeroes XP.
///
/// A missing skill entry counts as level 0.
pub fn increase_skill_level(
    character: &mut Character,
    skill: Skill,
    rules: &ProgressionRules,
) -> Result<Vec<ProgressEvent>, LedgerError> {
    let skill_level = character
        .skill_level(skill)
        .checked_add(1)
        .ok_or(LedgerError::ArithmeticOverflow {
            context: "skill level",
        })?;
    character.skills.insert(skill, skill_level);
    debug!(skill = %skill, skill_level, "Skill improved");
    let mut events = vec![ProgressEvent::SkillImproved {
        skill,
        level: skill_level,
    }];

    if skill_level.checked_rem(rules.milestone_interval) == Some(0) {
        character.level = character
            .level
            .checked_add(1)
            .ok_or(LedgerError::ArithmeticOverflow {
                context: "milestone level",
            })?;
        character.xp = 0;
        info!(skill = %skill, skill_level, level = character.level, "Skill milestone");
        events.push(ProgressEvent::Milestone {
            skill,
            skill_level,
            level: character.level,
        });
        if let Some(unique_skill) = generate_unique_skill(character, rules) {
            events.push(ProgressEvent::UniqueSkillUnlocked { unique_skill });
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn character() -> Character {
        Character::new(
            String::from("L"),
            28,
            String::from("Tester"),
            Decimal::from(75),
            Decimal::from(178),
        )
    }

    fn rules() -> ProgressionRules {
        ProgressionRules::default()
    }

    // -----------------------------------------------------------------------
    // add_xp
    // -----------------------------------------------------------------------

    #[test]
    fn gain_below_threshold_only_adds() {
        let mut c = character();
        let events = add_xp(&mut c, 40, &rules());
        assert_eq!(events, Ok(vec![ProgressEvent::XpGained { amount: 40 }]));
        assert_eq!((c.level, c.xp), (1, 40));
    }

    #[test]
    fn rollover_matches_division() {
        for start_xp in [0_u32, 1, 37, 99] {
            for gain in [0_u32, 1, 63, 100, 101, 250, 999] {
                let mut c = character();
                c.level = 3;
                c.xp = start_xp;
                assert!(add_xp(&mut c, gain, &rules()).is_ok());
                let total = start_xp + gain;
                assert!(c.xp < 100);
                assert_eq!(c.level, 3 + total / 100, "start {start_xp} gain {gain}");
                assert_eq!(c.xp, total % 100);
            }
        }
    }

    #[test]
    fn one_level_up_event_per_level() {
        let mut c = character();
        let events = add_xp(&mut c, 230, &rules()).unwrap_or_default();
        let level_ups: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                ProgressEvent::LevelUp { level } => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(level_ups, vec![2, 3]);
    }

    #[test]
    fn reaching_twenty_unlocks_unique_skill_once() {
        let mut c = character();
        c.level = 19;
        c.xp = 90;
        let events = add_xp(&mut c, 210, &rules()).unwrap_or_default();
        assert_eq!(c.level, 22);
        let unlocks = events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::UniqueSkillUnlocked { .. }))
            .count();
        assert_eq!(unlocks, 1);
        assert!(c.unique_skill.is_some());
    }

    #[test]
    fn zero_xp_per_level_is_rejected() {
        let mut c = character();
        let bad = ProgressionRules {
            xp_per_level: 0,
            ..ProgressionRules::default()
        };
        assert!(matches!(
            add_xp(&mut c, 10, &bad),
            Err(LedgerError::InvalidRules { .. })
        ));
    }

    #[test]
    fn xp_overflow_is_an_error() {
        let mut c = character();
        c.xp = 50;
        assert!(matches!(
            add_xp(&mut c, u32::MAX, &rules()),
            Err(LedgerError::ArithmeticOverflow { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // lose_xp
    // -----------------------------------------------------------------------

    #[test]
    fn loss_clamps_at_zero_and_keeps_level() {
        let mut c = character();
        c.level = 7;
        c.xp = 12;
        assert_eq!(lose_xp(&mut c, 5), ProgressEvent::XpLost { amount: 5 });
        assert_eq!(c.xp, 7);
        lose_xp(&mut c, 1_000);
        assert_eq!((c.level, c.xp), (7, 0));
    }

    // -----------------------------------------------------------------------
    // increase_skill_level
    // -----------------------------------------------------------------------

    #[test]
    fn plain_increment() {
        let mut c = character();
        c.xp = 30;
        let events = increase_skill_level(&mut c, Skill::Focus, &rules());
        assert_eq!(
            events,
            Ok(vec![ProgressEvent::SkillImproved {
                skill: Skill::Focus,
                level: 2
            }])
        );
        assert_eq!((c.level, c.xp), (1, 30));
    }

    #[test]
    fn milestone_grants_one_level_and_zeroes_xp() {
        for prior_xp in [0, 1, 55, 99] {
            let mut c = character();
            c.level = 6;
            c.xp = prior_xp;
            c.skills.insert(Skill::Budgeting, 4);
            let events = increase_skill_level(&mut c, Skill::Budgeting, &rules()).unwrap_or_default();
            assert_eq!((c.level, c.xp), (7, 0));
            assert!(events.contains(&ProgressEvent::Milestone {
                skill: Skill::Budgeting,
                skill_level: 5,
                level: 7
            }));
        }
    }

    #[test]
    fn missing_skill_counts_from_zero() {
        let mut c = character();
        c.skills.remove(&Skill::Mindfulness);
        assert!(increase_skill_level(&mut c, Skill::Mindfulness, &rules()).is_ok());
        assert_eq!(c.skill_level(Skill::Mindfulness), 1);
    }

    #[test]
    fn milestone_jump_to_twenty_unlocks_unique_skill() {
        let mut c = character();
        c.level = 19;
        c.skills.insert(Skill::Learning, 9);
        let events = increase_skill_level(&mut c, Skill::Learning, &rules()).unwrap_or_default();
        assert_eq!(c.level, 20);
        assert_eq!(c.unique_skill, Some(UniqueSkill::SharpMind));
        assert_eq!(
            events.last(),
            Some(&ProgressEvent::UniqueSkillUnlocked {
                unique_skill: UniqueSkill::SharpMind
            })
        );
    }

    #[test]
    fn unique_skill_stays_none_below_twenty() {
        let mut c = character();
        for _ in 0..18 {
            assert!(add_xp(&mut c, 100, &rules()).is_ok());
        }
        assert_eq!(c.level, 19);
        assert_eq!(c.unique_skill, None);
    }
}
