//! Procedural template expansion.
//!
//! Each [`Category`] pairs a skill and an item list with ten phrasings. The
//! phrasings are banded by position with [`band_for`]: the first 30% are the
//! easy band, the next 40% the middle band, the rest the hard band. Each band
//! has its own duration range.
//!
//! Reward per template is `base_xp + ordinal(code) * step` and the penalty is
//! half of that, rounded down.

use rust_decimal::Decimal;
use system64_types::{DifficultyCode, Skill};

use crate::items::ItemList;
use crate::template::{TaskTemplate, TimeLimit, VariableSpec, range};

/// Placeholder carrying the duration in every expanded template.
pub const DURATION_VARIABLE: &str = "DURATION_M";

/// Placeholder carrying the item pick in every expanded template.
pub const ITEM_VARIABLE: &str = "ITEM_X";

/// Position-derived difficulty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyBand {
    /// First 30% of phrasings.
    Easy,
    /// Next 40%.
    Middle,
    /// Remainder.
    Hard,
}

impl DifficultyBand {
    /// Difficulty code templates in this band are filed under.
    pub const fn code(self) -> DifficultyCode {
        match self {
            Self::Easy => DifficultyCode::A,
            Self::Middle => DifficultyCode::B,
            Self::Hard => DifficultyCode::C,
        }
    }
}

/// Band for the phrasing at `index` out of `total`.
pub const fn band_for(index: usize, total: usize) -> DifficultyBand {
    let easy_end = total.saturating_mul(3) / 10;
    let middle_end = total.saturating_mul(7) / 10;
    if index < easy_end {
        DifficultyBand::Easy
    } else if index < middle_end {
        DifficultyBand::Middle
    } else {
        DifficultyBand::Hard
    }
}

/// Duration range for one band.
#[derive(Debug, Clone, Copy)]
struct Duration {
    min: i64,
    max: i64,
    scale: Decimal,
}

impl Duration {
    const fn new(min: i64, max: i64, scale: Decimal) -> Self {
        Self { min, max, scale }
    }
}

/// One skill's expansion inputs.
#[derive(Debug, Clone, Copy)]
struct Category {
    skill: Skill,
    prefix: &'static str,
    items: ItemList,
    base_xp: u32,
    step: u32,
    /// Easy, middle and hard duration ranges.
    durations: [Duration; 3],
    phrasings: &'static [&'static str],
}

impl Category {
    const fn duration(&self, band: DifficultyBand) -> Duration {
        match band {
            DifficultyBand::Easy => self.durations[0],
            DifficultyBand::Middle => self.durations[1],
            DifficultyBand::Hard => self.durations[2],
        }
    }

    /// Expand every phrasing of this category into a template.
    fn expand(&self) -> Vec<TaskTemplate> {
        let total = self.phrasings.len();
        self.phrasings
            .iter()
            .enumerate()
            .map(|(index, phrasing)| {
                let band = band_for(index, total);
                let code = band.code();
                let duration = self.duration(band);
                let gain = self
                    .base_xp
                    .saturating_add(code.ordinal().saturating_mul(self.step));
                let id = format!("{}{:03}", self.prefix, index.saturating_add(1));

                let mut template = TaskTemplate::new(&id, self.skill, code, phrasing)
                    .var(
                        DURATION_VARIABLE,
                        range(duration.min, duration.max, duration.scale),
                    )
                    .var(ITEM_VARIABLE, VariableSpec::ItemList(self.items))
                    .xp(gain, gain / 2)
                    .time_limit(TimeLimit::dynamic(DURATION_VARIABLE));
                if phrasing.contains("[SETS]") {
                    template = template.var("SETS", range(2, 4, Decimal::new(1, 1)));
                }
                if phrasing.contains("[COUNT_X]") {
                    template = template.var("COUNT_X", range(1, 5, Decimal::new(2, 1)));
                }
                template
            })
            .collect()
    }
}

/// Expand every category in catalog order.
pub fn expanded_templates() -> Vec<TaskTemplate> {
    categories().iter().flat_map(Category::expand).collect()
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_lines)]
fn categories() -> Vec<Category> {
    vec![
        Category {
            skill: Skill::Agility,
            prefix: "AGL",
            items: ItemList::Agility,
            base_xp: 8,
            step: 2,
            durations: [
                Duration::new(5, 15, Decimal::new(3, 1)),
                Duration::new(10, 25, Decimal::new(5, 1)),
                Duration::new(20, 40, Decimal::new(7, 1)),
            ],
            phrasings: &[
                "Train your agility for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Practice agility drills for <strong>[DURATION_M]</strong> minutes involving <strong>[ITEM_X]</strong>.",
                "Improve footwork and coordination for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Complete <strong>[DURATION_M]</strong> minutes of agility-focused exercises with <strong>[ITEM_X]</strong>.",
                "Perform <strong>[SETS]</strong> sets of agility exercises using <strong>[ITEM_X]</strong> for approx. <strong>[DURATION_M]</strong> min total.",
                "Warm up agility muscles for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Work on reaction time and balance for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Utilize <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes in your agility practice.",
                "Challenge your agility with an activity involving <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Cool down after an agility session with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
            ],
        },
        Category {
            skill: Skill::Strength,
            prefix: "STR",
            items: ItemList::Strength,
            base_xp: 10,
            step: 2,
            durations: [
                Duration::new(10, 20, Decimal::new(4, 1)),
                Duration::new(15, 30, Decimal::new(6, 1)),
                Duration::new(25, 45, Decimal::new(8, 1)),
            ],
            phrasings: &[
                "Engage in strength training for <strong>[DURATION_M]</strong> minutes involving <strong>[ITEM_X]</strong>.",
                "Complete strength sets for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Train your muscles for <strong>[DURATION_M]</strong> minutes with exercises using <strong>[ITEM_X]</strong>.",
                "Perform reps using <strong>[ITEM_X]</strong> for a <strong>[DURATION_M]</strong> minute strength workout.",
                "Warm up muscles for strength work for <strong>[DURATION_M]</strong> minutes, using <strong>[ITEM_X]</strong>.",
                "Incorporate <strong>[ITEM_X]</strong> into your strength training for <strong>[DURATION_M]</strong> minutes.",
                "Cool down after strength work involving <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Build muscular endurance using <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Do strength circuits involving <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Focus on core strength for <strong>[DURATION_M]</strong> minutes with exercises using <strong>[ITEM_X]</strong>.",
            ],
        },
        Category {
            skill: Skill::Endurance,
            prefix: "END",
            items: ItemList::Endurance,
            base_xp: 9,
            step: 2,
            durations: [
                Duration::new(15, 25, Decimal::new(5, 1)),
                Duration::new(20, 40, Decimal::new(7, 1)),
                Duration::new(30, 60, Decimal::new(9, 1)),
            ],
            phrasings: &[
                "Perform endurance training for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Engage in a cardio activity for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Perform a cycling endurance activity for <strong>[DURATION_M]</strong> minutes, involving <strong>[ITEM_X]</strong>.",
                "Perform a swimming endurance activity for <strong>[DURATION_M]</strong> minutes at <strong>[ITEM_X]</strong>.",
                "Use <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes in an endurance workout.",
                "Warm up for an endurance session for <strong>[DURATION_M]</strong> minutes, using <strong>[ITEM_X]</strong>.",
                "Cool down after endurance training involving <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Perform endurance intervals for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Complete a steady-state endurance workout using <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Challenge your stamina with an activity related to <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
            ],
        },
        Category {
            skill: Skill::ProblemSolving,
            prefix: "PRS",
            items: ItemList::ProblemSolving,
            base_xp: 12,
            step: 3,
            durations: [
                Duration::new(10, 20, Decimal::new(4, 1)),
                Duration::new(15, 30, Decimal::new(6, 1)),
                Duration::new(20, 40, Decimal::new(8, 1)),
            ],
            phrasings: &[
                "Work on <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes to solve problems.",
                "Practice problem-solving for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Engage with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes to sharpen your mind.",
                "Challenge yourself with a problem from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Complete <strong>[SETS]</strong> sets of problems from <strong>[ITEM_X]</strong> for approx. <strong>[DURATION_M]</strong> min total.",
                "Improve critical thinking by engaging with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Use <strong>[ITEM_X]</strong> to enhance focus and problem-solving for <strong>[DURATION_M]</strong> minutes.",
                "Attempt to solve <strong>[COUNT_X]</strong> problems from <strong>[ITEM_X]</strong> for approx. <strong>[DURATION_M]</strong> min total.",
                "Engage in strategic thinking with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Dedicate <strong>[DURATION_M]</strong> minutes to analyzing and solving aspects of <strong>[ITEM_X]</strong>.",
            ],
        },
        Category {
            skill: Skill::Learning,
            prefix: "LRN",
            items: ItemList::Learning,
            base_xp: 10,
            step: 2,
            durations: [
                Duration::new(15, 25, Decimal::new(5, 1)),
                Duration::new(20, 35, Decimal::new(6, 1)),
                Duration::new(30, 50, Decimal::new(7, 1)),
            ],
            phrasings: &[
                "Learn from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Study <strong>[COUNT_X]</strong> sections using <strong>[ITEM_X]</strong> for approx. <strong>[DURATION_M]</strong> min total.",
                "Study educational content from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Review material from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Engage with learning material from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Dedicate <strong>[DURATION_M]</strong> minutes to active learning with <strong>[ITEM_X]</strong>.",
                "Practice skills learned from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Collaborate or discuss topics from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Follow a tutorial from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Review and consolidate knowledge from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
            ],
        },
        Category {
            skill: Skill::Creativity,
            prefix: "CRT",
            items: ItemList::Creativity,
            base_xp: 8,
            step: 2,
            durations: [
                Duration::new(10, 20, Decimal::new(4, 1)),
                Duration::new(15, 30, Decimal::new(6, 1)),
                Duration::new(25, 45, Decimal::new(8, 1)),
            ],
            phrasings: &[
                "Engage in a creative activity for <strong>[DURATION_M]</strong> minutes involving <strong>[ITEM_X]</strong>.",
                "Work on a creative piece for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Express your creativity for <strong>[DURATION_M]</strong> minutes through an activity related to <strong>[ITEM_X]</strong>.",
                "Practice or develop a creative skill related to <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Engage in a crafting or making session for <strong>[DURATION_M]</strong> minutes, using <strong>[ITEM_X]</strong>.",
                "Create or capture something for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Perform or rehearse a creative piece for <strong>[DURATION_M]</strong> minutes involving <strong>[ITEM_X]</strong>.",
                "Develop a creative concept for <strong>[DURATION_M]</strong> minutes, using <strong>[ITEM_X]</strong>.",
                "Design or plan a creative project for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Brainstorm creative ideas for <strong>[DURATION_M]</strong> minutes, using <strong>[ITEM_X]</strong>.",
            ],
        },
        Category {
            skill: Skill::FinancialLiteracy,
            prefix: "FNL",
            items: ItemList::FinancialLiteracy,
            base_xp: 10,
            step: 3,
            durations: [
                Duration::new(10, 20, Decimal::new(3, 1)),
                Duration::new(15, 25, Decimal::new(5, 1)),
                Duration::new(20, 35, Decimal::new(6, 1)),
            ],
            phrasings: &[
                "Learn about finance for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Use <strong>[ITEM_X]</strong> to understand your finances for <strong>[DURATION_M]</strong> minutes.",
                "Engage with financial education material from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Study financial information from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Practice financial planning using <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Learn about a financial topic via <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Explore financial tools like <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Study a financial learning activity from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Consult or review advice from <strong>[ITEM_X]</strong> regarding finances for <strong>[DURATION_M]</strong> minutes.",
                "Review your personal finances using insights from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
            ],
        },
        Category {
            skill: Skill::Budgeting,
            prefix: "BDG",
            items: ItemList::Budgeting,
            base_xp: 9,
            step: 2,
            durations: [
                Duration::new(5, 15, Decimal::new(2, 1)),
                Duration::new(10, 20, Decimal::new(4, 1)),
                Duration::new(15, 30, Decimal::new(5, 1)),
            ],
            phrasings: &[
                "Work on your budget for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Plan or review your budget using <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Track or categorize your expenses for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Analyze your spending or financial data with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Set or review your savings goals using <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Check your bills and payments for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Use <strong>[ITEM_X]</strong> to forecast expenses or income for <strong>[DURATION_M]</strong> minutes.",
                "Adjust your budget categories using <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Organize your financial documents for <strong>[DURATION_M]</strong> minutes, with <strong>[ITEM_X]</strong>.",
                "Monitor your cash flow or budget with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
            ],
        },
        Category {
            skill: Skill::Investing,
            prefix: "INV",
            items: ItemList::Investing,
            base_xp: 12,
            step: 3,
            durations: [
                Duration::new(10, 20, Decimal::new(4, 1)),
                Duration::new(15, 30, Decimal::new(6, 1)),
                Duration::new(25, 45, Decimal::new(8, 1)),
            ],
            phrasings: &[
                "Research investments for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Track your portfolio for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Engage with investment education from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Practice investment strategies with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Read financial news from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Participate in an investment group involving <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Analyze investments or market trends using <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Use simulators like <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes to practice investing.",
                "Consult or review information from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Review investment info using <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
            ],
        },
        Category {
            skill: Skill::Discipline,
            prefix: "DIS",
            items: ItemList::Discipline,
            base_xp: 11,
            step: 2,
            durations: [
                Duration::new(10, 20, Decimal::new(3, 1)),
                Duration::new(15, 25, Decimal::new(5, 1)),
                Duration::new(20, 40, Decimal::new(7, 1)),
            ],
            phrasings: &[
                "Practice discipline for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Track your habits or plan adherence for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Engage in a focused activity for <strong>[DURATION_M]</strong> minutes, supported by <strong>[ITEM_X]</strong>.",
                "Stick to an exercise plan for <strong>[DURATION_M]</strong> minutes, outlined by <strong>[ITEM_X]</strong>.",
                "Study or work to a schedule for <strong>[DURATION_M]</strong> minutes, managed by <strong>[ITEM_X]</strong>.",
                "Use a time-management tool like <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes to maintain focus.",
                "Follow your routine diligently, planned with <strong>[ITEM_X]</strong>, for <strong>[DURATION_M]</strong> minutes.",
                "Journal or reflect on your productivity for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Practice cognitive focus techniques with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Check in with your accountability system <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
            ],
        },
        Category {
            skill: Skill::Community,
            prefix: "CMY",
            items: ItemList::Community,
            base_xp: 7,
            step: 2,
            durations: [
                Duration::new(20, 40, Decimal::new(4, 1)),
                Duration::new(30, 60, Decimal::new(6, 1)),
                Duration::new(45, 90, Decimal::new(8, 1)),
            ],
            phrasings: &[
                "Volunteer or contribute to <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Help organize activities for <strong>[DURATION_M]</strong> minutes with <strong>[ITEM_X]</strong>.",
                "Attend a meeting or event for <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Actively participate in an initiative by <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Assist with fundraising for <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Support members of your community via <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Help improve a public space connected to <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Provide assistance through <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Engage with community project <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Participate in youth activities via <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
            ],
        },
        Category {
            skill: Skill::Relationship,
            prefix: "RLT",
            items: ItemList::Relationship,
            base_xp: 6,
            step: 1,
            durations: [
                Duration::new(10, 20, Decimal::new(3, 1)),
                Duration::new(15, 30, Decimal::new(4, 1)),
                Duration::new(20, 45, Decimal::new(5, 1)),
            ],
            phrasings: &[
                "Connect with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Have a meaningful conversation with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Catch up or spend quality time with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Plan or engage in a shared activity with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Share a meal or a moment with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Actively listen and offer support to <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Offer help or support to <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Reconnect or strengthen your bond with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Engage in a social activity with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Show appreciation or offer help to <strong>[ITEM_X]</strong> in a <strong>[DURATION_M]</strong> minute interaction.",
            ],
        },
        Category {
            skill: Skill::SelfAwareness,
            prefix: "SLA",
            items: ItemList::SelfAwareness,
            base_xp: 9,
            step: 2,
            durations: [
                Duration::new(5, 15, Decimal::new(2, 1)),
                Duration::new(10, 20, Decimal::new(4, 1)),
                Duration::new(15, 30, Decimal::new(6, 1)),
            ],
            phrasings: &[
                "Engage in self-reflection for <strong>[DURATION_M]</strong> minutes using <strong>[ITEM_X]</strong>.",
                "Practice mindfulness for <strong>[DURATION_M]</strong> minutes, with <strong>[ITEM_X]</strong>.",
                "Reflect on your thoughts for <strong>[DURATION_M]</strong> minutes, aided by <strong>[ITEM_X]</strong>.",
                "Engage with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes to gain insights.",
                "Participate in a self-awareness exercise with <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Use a self-help tool like <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Complete a self-assessment from <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
                "Practice mindful breathing for <strong>[DURATION_M]</strong> minutes, with <strong>[ITEM_X]</strong>.",
                "Seek or reflect on feedback for <strong>[DURATION_M]</strong> minutes, using <strong>[ITEM_X]</strong>.",
                "Perform an emotional intelligence check-in using <strong>[ITEM_X]</strong> for <strong>[DURATION_M]</strong> minutes.",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Banding
    // -----------------------------------------------------------------------

    #[test]
    fn ten_phrasings_band_three_four_three() {
        let bands: Vec<DifficultyBand> = (0..10).map(|i| band_for(i, 10)).collect();
        let easy = bands.iter().filter(|b| **b == DifficultyBand::Easy).count();
        let middle = bands.iter().filter(|b| **b == DifficultyBand::Middle).count();
        let hard = bands.iter().filter(|b| **b == DifficultyBand::Hard).count();
        assert_eq!((easy, middle, hard), (3, 4, 3));
        assert_eq!(band_for(2, 10), DifficultyBand::Easy);
        assert_eq!(band_for(3, 10), DifficultyBand::Middle);
        assert_eq!(band_for(6, 10), DifficultyBand::Middle);
        assert_eq!(band_for(7, 10), DifficultyBand::Hard);
    }

    #[test]
    fn bands_never_go_backwards() {
        for total in 1..30 {
            let codes: Vec<DifficultyCode> = (0..total).map(|i| band_for(i, total).code()).collect();
            assert!(codes.windows(2).all(|w| w.first() <= w.get(1)));
        }
    }

    // -----------------------------------------------------------------------
    // Expansion
    // -----------------------------------------------------------------------

    #[test]
    fn thirteen_categories_of_ten() {
        let templates = expanded_templates();
        assert_eq!(templates.len(), 130);
        assert!(templates.iter().all(|t| t.duration_variable() == Some(DURATION_VARIABLE)));
    }

    #[test]
    fn reward_follows_base_plus_step() {
        let templates = expanded_templates();
        let find = |id: &str| templates.iter().find(|t| t.id == id);
        // Agility: base 8, step 2.
        let easy = find("AGL001");
        assert!(easy.is_some_and(|t| t.base_xp_gain == 8 && t.base_xp_failure_penalty == 4));
        let middle = find("AGL004");
        assert!(middle.is_some_and(|t| t.difficulty == DifficultyCode::B && t.base_xp_gain == 10));
        let hard = find("AGL010");
        assert!(hard.is_some_and(|t| t.base_xp_gain == 12 && t.base_xp_failure_penalty == 6));
        // Relationship: base 6, step 1, hard penalty rounds down.
        let rlt = find("RLT008");
        assert!(rlt.is_some_and(|t| t.base_xp_gain == 8 && t.base_xp_failure_penalty == 4));
        let prs = find("PRS009");
        assert!(prs.is_some_and(|t| t.base_xp_gain == 18 && t.base_xp_failure_penalty == 9));
    }

    #[test]
    fn extra_placeholders_get_specs() {
        let templates = expanded_templates();
        for t in &templates {
            for name in ["[SETS]", "[COUNT_X]"] {
                if t.description.contains(name) {
                    let key = name.trim_matches(|c| c == '[' || c == ']');
                    assert!(t.variables.contains_key(key), "{} missing {key}", t.id);
                }
            }
        }
        assert!(templates.iter().any(|t| t.variables.contains_key("SETS")));
        assert!(templates.iter().any(|t| t.variables.contains_key("COUNT_X")));
    }
}
