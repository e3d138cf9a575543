//! Task generation.
//!
//! Picks an eligible template for the character's level, resolves it, scales
//! the rewards and stamps the next sequence number.
//!
//! # Eligibility
//!
//! The level maps to a difficulty code through the catalog. When no template
//! is filed under that code the search relaxes to `C`, then `B`, then the
//! whole catalog. `A` and `D` are never explicit fallback targets.
//!
//! # Rewards
//!
//! `gain = base + floor(base * level * xp_scale_per_level)`, and the same
//! formula for the penalty. The default scale is 0.1.

use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use system64_catalog::{Catalog, TaskTemplate};
use system64_types::{Character, DifficultyCode, ResolvedTask, TaskId};
use tracing::{debug, info};

use crate::error::TaskError;
use crate::resolver::resolve_variables;

/// Codes tried, in order, when the level's own code has no templates.
pub const FALLBACK_CODES: [DifficultyCode; 2] = [DifficultyCode::C, DifficultyCode::B];

/// Reward scaling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRules {
    /// Fraction of the base added per character level.
    #[serde(default = "default_xp_scale_per_level")]
    pub xp_scale_per_level: Decimal,
}

fn default_xp_scale_per_level() -> Decimal {
    Decimal::new(1, 1)
}

impl Default for RewardRules {
    fn default() -> Self {
        Self {
            xp_scale_per_level: default_xp_scale_per_level(),
        }
    }
}

/// Scale a base reward or penalty for `level`.
pub fn scale_reward(base: u32, level: u32, per_level: Decimal) -> Result<u32, TaskError> {
    let overflow = || TaskError::ArithmeticOverflow {
        context: format!("reward scaling (base {base}, level {level})"),
    };
    let bonus = Decimal::from(base)
        .checked_mul(Decimal::from(level))
        .and_then(|v| v.checked_mul(per_level))
        .map(|v| v.floor())
        .and_then(|v| v.to_u32())
        .ok_or_else(overflow)?;
    base.checked_add(bonus).ok_or_else(overflow)
}

/// Templates a character at `level` may draw from, after fallbacks.
pub fn eligible_templates(catalog: &Catalog, level: u32) -> Vec<&TaskTemplate> {
    let mapped = catalog.difficulty_for_level(level);
    core::iter::once(mapped)
        .chain(FALLBACK_CODES)
        .map(|code| catalog.templates_for(code))
        .find(|templates| !templates.is_empty())
        .unwrap_or_else(|| catalog.templates().iter().collect())
}

/// Generate the next task for `character`.
///
/// Advances `sequence` by one on success. The caller persists it.
pub fn generate_task(
    character: &Character,
    catalog: &Catalog,
    rules: &RewardRules,
    sequence: &mut u64,
    rng: &mut impl Rng,
) -> Result<ResolvedTask, TaskError> {
    let level = character.level;
    let candidates = eligible_templates(catalog, level);
    let template = candidates
        .choose(rng)
        .copied()
        .ok_or(TaskError::NoTemplatesAvailable)?;
    debug!(
        template_id = %template.id,
        candidates = candidates.len(),
        level,
        "Template selected"
    );

    let resolution = resolve_variables(template, level, catalog, rng);
    let xp_gain = scale_reward(template.base_xp_gain, level, rules.xp_scale_per_level)?;
    let xp_failure_penalty =
        scale_reward(template.base_xp_failure_penalty, level, rules.xp_scale_per_level)?;

    *sequence = sequence.saturating_add(1);

    let task = ResolvedTask {
        id: TaskId::new(),
        template_id: template.id.clone(),
        sequence_number: *sequence,
        description: resolution.description,
        skill: template.skill,
        difficulty_code: template.difficulty,
        difficulty_label: catalog.difficulty_label(template.difficulty).to_owned(),
        time_limit_minutes: resolution.time_limit_minutes,
        xp_gain,
        xp_failure_penalty,
        resolved_variables: resolution.values,
        timer_running: false,
    };
    info!(
        template_id = %task.template_id,
        sequence = task.sequence_number,
        code = %task.difficulty_code,
        xp_gain,
        "Task generated"
    );
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use system64_catalog::build_catalog;
    use system64_types::Skill;

    fn character(level: u32) -> Character {
        let mut c = Character::new(
            String::from("Tester"),
            25,
            String::from("Student"),
            Decimal::from(70),
            Decimal::from(175),
        );
        c.level = level;
        c
    }

    fn template(id: &str, code: DifficultyCode) -> TaskTemplate {
        TaskTemplate::new(id, Skill::Focus, code, "focus").xp(10, 4)
    }

    // -----------------------------------------------------------------------
    // Rewards
    // -----------------------------------------------------------------------

    #[test]
    fn default_scale_is_one_tenth() {
        assert_eq!(RewardRules::default().xp_scale_per_level, dec!(0.1));
    }

    #[test]
    fn reward_scaling_example() {
        assert_eq!(scale_reward(10, 10, dec!(0.1)), Ok(20));
    }

    #[test]
    fn reward_scaling_floors_the_bonus() {
        // 7 * 3 * 0.1 = 2.1
        assert_eq!(scale_reward(7, 3, dec!(0.1)), Ok(9));
        // 5 * 1 * 0.1 = 0.5
        assert_eq!(scale_reward(5, 1, dec!(0.1)), Ok(5));
        assert_eq!(scale_reward(0, 99, dec!(0.1)), Ok(0));
    }

    #[test]
    fn reward_overflow_is_an_error() {
        assert!(matches!(
            scale_reward(u32::MAX, 100, dec!(0.1)),
            Err(TaskError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn rules_deserialize_with_defaults() {
        let rules: Result<RewardRules, _> = serde_yml::from_str("{}");
        assert_eq!(rules.ok(), Some(RewardRules::default()));
        let rules: Result<RewardRules, _> = serde_yml::from_str("xp_scale_per_level: \"0.25\"");
        assert_eq!(rules.ok().map(|r| r.xp_scale_per_level), Some(dec!(0.25)));
    }

    // -----------------------------------------------------------------------
    // Eligibility
    // -----------------------------------------------------------------------

    #[test]
    fn mapped_code_is_preferred() {
        let catalog = build_catalog();
        let eligible = eligible_templates(&catalog, 7);
        assert!(!eligible.is_empty());
        assert!(eligible.iter().all(|t| t.difficulty == DifficultyCode::B));
    }

    #[test]
    fn hard_levels_fall_back_to_medium() {
        let catalog = build_catalog();
        for level in [17, 21, 22, 1_000] {
            let eligible = eligible_templates(&catalog, level);
            assert!(!eligible.is_empty());
            assert!(eligible.iter().all(|t| t.difficulty == DifficultyCode::C));
        }
    }

    #[test]
    fn falls_back_to_medium_when_mapped_code_is_empty() {
        let catalog = build_catalog()
            .with_templates(vec![
                template("C1", DifficultyCode::C),
                template("B1", DifficultyCode::B),
            ])
            .ok();
        assert!(catalog.is_some());
        let Some(catalog) = catalog else { return };
        let ids: Vec<&str> = eligible_templates(&catalog, 1)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["C1"]);
    }

    #[test]
    fn falls_back_to_easy_then_anything() {
        let catalog = build_catalog()
            .with_templates(vec![template("B1", DifficultyCode::B)])
            .ok();
        let Some(catalog) = catalog else { return };
        let ids: Vec<&str> = eligible_templates(&catalog, 20).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["B1"]);

        let catalog = build_catalog()
            .with_templates(vec![template("A1", DifficultyCode::A)])
            .ok();
        let Some(catalog) = catalog else { return };
        let ids: Vec<&str> = eligible_templates(&catalog, 20).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["A1"]);
    }

    // -----------------------------------------------------------------------
    // Generation
    // -----------------------------------------------------------------------

    #[test]
    fn generation_never_fails_with_a_nonempty_catalog() {
        let catalog = build_catalog();
        let rules = RewardRules::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut sequence = 0;
        for level in (1..=200).chain([1_000, 100_000]) {
            let task = generate_task(&character(level), &catalog, &rules, &mut sequence, &mut rng);
            assert!(task.is_ok(), "level {level}");
        }
    }

    #[test]
    fn empty_catalog_reports_no_tasks() {
        let catalog = build_catalog().with_templates(Vec::new()).ok();
        let Some(catalog) = catalog else { return };
        let mut rng = SmallRng::seed_from_u64(7);
        let mut sequence = 3;
        let result = generate_task(
            &character(1),
            &catalog,
            &RewardRules::default(),
            &mut sequence,
            &mut rng,
        );
        assert_eq!(result.err(), Some(TaskError::NoTemplatesAvailable));
        assert_eq!(sequence, 3);
    }

    #[test]
    fn sequence_advances_and_rewards_scale() {
        let catalog = build_catalog()
            .with_templates(vec![template("B1", DifficultyCode::B)])
            .ok();
        let Some(catalog) = catalog else { return };
        let mut rng = SmallRng::seed_from_u64(7);
        let mut sequence = 41;
        let task = generate_task(
            &character(10),
            &catalog,
            &RewardRules::default(),
            &mut sequence,
            &mut rng,
        );
        assert_eq!(sequence, 42);
        let Ok(task) = task else { return };
        assert_eq!(task.sequence_number, 42);
        assert_eq!(task.xp_gain, 20);
        assert_eq!(task.xp_failure_penalty, 8);
        assert_eq!(task.difficulty_label, "Easy");
        assert!(!task.timer_running);
        assert_eq!(task.title(), "Scenario 42");
    }

    #[test]
    fn each_task_gets_a_fresh_id() {
        let catalog = build_catalog();
        let rules = RewardRules::default();
        let mut rng = SmallRng::seed_from_u64(9);
        let mut sequence = 0;
        let a = generate_task(&character(1), &catalog, &rules, &mut sequence, &mut rng);
        let b = generate_task(&character(1), &catalog, &rules, &mut sequence, &mut rng);
        assert!(a.is_ok() && b.is_ok());
        assert_ne!(a.ok().map(|t| t.id), b.ok().map(|t| t.id));
    }
}
