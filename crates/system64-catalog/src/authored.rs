//! Hand-authored task templates.
//!
//! Forty templates across four families: physical (`P`), mental (`M`),
//! financial (`F`) and philosophical (`PH`).

use rust_decimal::Decimal;
use system64_types::{DifficultyCode, Skill};

use crate::template::{TaskTemplate, TimeLimit, VariableSpec, flat, range};

/// Build the hand-authored templates in catalog order.
#[allow(clippy::too_many_lines)]
pub fn authored_templates() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new("P001", Skill::Strength, DifficultyCode::A, "Do <strong>[AMOUNT_X]</strong> push-ups.")
            .var("AMOUNT_X", range(5, 15, Decimal::new(5, 1)))
            .xp(10, 5),
        TaskTemplate::new("P002", Skill::Endurance, DifficultyCode::A, "Go for a <strong>[DURATION_Y]</strong> minute brisk walk.")
            .var("DURATION_Y", range(10, 20, Decimal::new(5, 1)))
            .xp(10, 5)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("P003", Skill::Agility, DifficultyCode::A, "Practice <strong>[AMOUNT_X]</strong> jumping jacks.")
            .var("AMOUNT_X", range(20, 40, Decimal::ONE))
            .xp(8, 4),
        TaskTemplate::new("P004", Skill::Strength, DifficultyCode::B, "Complete <strong>[SETS]</strong> sets of <strong>[REPS]</strong> bodyweight squats.")
            .var("SETS", range(2, 3, Decimal::new(1, 1)))
            .var("REPS", range(10, 15, Decimal::new(5, 1)))
            .xp(15, 7),
        TaskTemplate::new("P005", Skill::Endurance, DifficultyCode::B, "Jog for <strong>[DURATION_Y]</strong> minutes.")
            .var("DURATION_Y", range(10, 20, Decimal::new(3, 1)))
            .xp(15, 7)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("P006", Skill::Agility, DifficultyCode::B, "Hold a balancing pose (e.g., tree pose) for <strong>[DURATION_S]</strong> seconds on each leg. Allocate <strong>[TOTAL_MINUTES]</strong> minutes for this task.")
            .var("DURATION_S", range(20, 40, Decimal::ONE))
            .var("TOTAL_MINUTES", range(2, 5, Decimal::new(1, 1)))
            .xp(12, 6)
            .time_limit(TimeLimit::dynamic("TOTAL_MINUTES")),
        TaskTemplate::new("P007", Skill::Strength, DifficultyCode::C, "Hold a plank for a total of <strong>[DURATION_M]</strong> minutes (can be broken into sets).")
            .var("DURATION_M", range(1, 3, Decimal::new(1, 1)))
            .xp(20, 10)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("P008", Skill::Endurance, DifficultyCode::C, "Cycle for <strong>[DISTANCE_Z]</strong> km or <strong>[DURATION_Y]</strong> minutes.")
            .var("DISTANCE_Z", range(3, 7, Decimal::new(2, 1)))
            .var("DURATION_Y", range(20, 35, Decimal::ONE))
            .xp(25, 12)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("P009", Skill::Strength, DifficultyCode::C, "Perform <strong>[AMOUNT_X]</strong> lunges per leg.")
            .var("AMOUNT_X", range(10, 15, Decimal::new(5, 1)))
            .xp(18, 9),
        TaskTemplate::new("P010", Skill::Endurance, DifficultyCode::A, "Do a <strong>[DURATION_Y]</strong> minute stretching routine.")
            .var("DURATION_Y", range(5, 10, Decimal::new(2, 1)))
            .xp(7, 3)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("M001", Skill::Learning, DifficultyCode::A, "Read <strong>[PAGE_X]</strong> pages from '<strong>[BOOK_TITLE]</strong>'.")
            .var("PAGE_X", range(5, 15, Decimal::new(5, 1)))
            .var("BOOK_TITLE", VariableSpec::BookTitle)
            .xp(10, 5),
        TaskTemplate::new("M002", Skill::Focus, DifficultyCode::A, "Meditate for <strong>[DURATION_Y]</strong> minutes without distraction.")
            .var("DURATION_Y", range(3, 7, Decimal::new(2, 1)))
            .xp(10, 5)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("M003", Skill::Creativity, DifficultyCode::A, "Sketch something for <strong>[DURATION_Y]</strong> minutes.")
            .var("DURATION_Y", range(10, 20, Decimal::new(5, 1)))
            .xp(8, 4)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("M004", Skill::ProblemSolving, DifficultyCode::B, "Solve a Sudoku puzzle (easy/medium difficulty).")
            .xp(15, 7)
            .time_limit(TimeLimit::Fixed(25)),
        TaskTemplate::new("M005", Skill::Learning, DifficultyCode::B, "Watch an educational video on a new topic for <strong>[DURATION_Y]</strong> minutes and write <strong>[POINTS]</strong> key takeaways.")
            .var("DURATION_Y", range(15, 25, Decimal::new(5, 1)))
            .var("POINTS", range(3, 5, Decimal::new(1, 1)))
            .xp(15, 7)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("M006", Skill::Focus, DifficultyCode::B, "Work on a single task for <strong>[DURATION_Y]</strong> minutes using the Pomodoro Technique.")
            .var("DURATION_Y", range(20, 40, Decimal::ONE))
            .xp(18, 9)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("M007", Skill::ProblemSolving, DifficultyCode::C, "Complete a medium-difficulty logic puzzle or brain teaser.")
            .xp(20, 10)
            .time_limit(TimeLimit::Fixed(30)),
        TaskTemplate::new("M008", Skill::Learning, DifficultyCode::C, "Research and write a short summary (<strong>[WORDS]</strong> words) on a complex topic over <strong>[DURATION_M]</strong> minutes.")
            .var("WORDS", range(100, 250, Decimal::TEN))
            .var("DURATION_M", range(45, 75, Decimal::new(15, 1)))
            .xp(25, 12)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("M009", Skill::Creativity, DifficultyCode::C, "Write a short story or poem of at least <strong>[LINES_WORDS]</strong> lines/words. Spend <strong>[DURATION_M]</strong> minutes.")
            .var("LINES_WORDS", range(10, 150, Decimal::new(5, 0)))
            .var("DURATION_M", range(20, 40, Decimal::ONE))
            .xp(22, 11)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("M010", Skill::ProblemSolving, DifficultyCode::A, "Organize your digital files or desktop for <strong>[DURATION_Y]</strong> minutes.")
            .var("DURATION_Y", range(10, 20, Decimal::new(5, 1)))
            .xp(9, 4)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("F001", Skill::Budgeting, DifficultyCode::A, "Track all your expenses for one day meticulously.")
            .xp(10, 5),
        TaskTemplate::new("F002", Skill::FinancialLiteracy, DifficultyCode::A, "Read one article about basic personal finance (e.g., saving, debt) for <strong>[DURATION_Y]</strong> minutes.")
            .var("DURATION_Y", range(10, 20, Decimal::new(3, 1)))
            .xp(8, 4)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("F003", Skill::Investing, DifficultyCode::A, "Learn the definition of <strong>[TERM_COUNT]</strong> new investing terms.")
            .var("TERM_COUNT", range(1, 3, Decimal::new(1, 1)))
            .xp(7, 3),
        TaskTemplate::new("F004", Skill::Budgeting, DifficultyCode::B, "Create or review your weekly/monthly budget plan. Spend <strong>[DURATION_M]</strong> minutes.")
            .var("DURATION_M", range(20, 40, Decimal::ONE))
            .xp(15, 7)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("F005", Skill::FinancialLiteracy, DifficultyCode::B, "Research and compare <strong>[PRODUCT_COUNT]</strong> financial products (e.g., savings accounts, credit cards) for <strong>[DURATION_M]</strong> minutes.")
            .var("PRODUCT_COUNT", flat(2, 3))
            .var("DURATION_M", range(15, 30, Decimal::new(5, 1)))
            .xp(18, 9)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("F006", Skill::Investing, DifficultyCode::B, "Watch a <strong>[DURATION_Y]</strong> minute video explaining a basic investment strategy.")
            .var("DURATION_Y", range(10, 20, Decimal::new(5, 1)))
            .xp(16, 8)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("F007", Skill::Budgeting, DifficultyCode::C, "Identify <strong>[SAVING_IDEAS]</strong> ways to reduce your monthly expenses. Spend <strong>[DURATION_M]</strong> minutes brainstorming.")
            .var("SAVING_IDEAS", range(2, 5, Decimal::new(2, 1)))
            .var("DURATION_M", range(15, 25, Decimal::new(5, 1)))
            .xp(20, 10)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("F008", Skill::FinancialLiteracy, DifficultyCode::C, "Read a chapter from a book on personal finance or investing. Allocate <strong>[DURATION_M]</strong> minutes.")
            .var("DURATION_M", range(30, 60, Decimal::ONE))
            .xp(22, 11)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("F009", Skill::Investing, DifficultyCode::C, "Simulate making a paper trade and track its hypothetical performance for a day. Spend <strong>[DURATION_M]</strong> minutes on setup and initial analysis.")
            .var("DURATION_M", range(20, 40, Decimal::ONE))
            .xp(25, 12)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("F010", Skill::Budgeting, DifficultyCode::A, "Check your bank account balance and recent transactions.")
            .xp(5, 2),
        TaskTemplate::new("PH001", Skill::SelfAwareness, DifficultyCode::A, "Write down <strong>[AMOUNT_X]</strong> things you are grateful for today.")
            .var("AMOUNT_X", range(3, 5, Decimal::new(2, 1)))
            .xp(10, 5),
        TaskTemplate::new("PH002", Skill::Mindfulness, DifficultyCode::A, "Practice <strong>[DURATION_Y]</strong> minutes of mindful breathing.")
            .var("DURATION_Y", range(3, 7, Decimal::new(1, 1)))
            .xp(8, 4)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("PH003", Skill::GoalSetting, DifficultyCode::A, "Review your main goal for the week.")
            .xp(7, 3),
        TaskTemplate::new("PH004", Skill::Discipline, DifficultyCode::B, "Identify one time-wasting habit and consciously avoid it for <strong>[DURATION_H]</strong> hours.")
            .var("DURATION_H", range(2, 4, Decimal::new(1, 1)))
            .xp(15, 7),
        TaskTemplate::new("PH005", Skill::SelfAwareness, DifficultyCode::B, "Journal for <strong>[DURATION_Y]</strong> minutes about your thoughts and feelings today.")
            .var("DURATION_Y", range(10, 15, Decimal::new(3, 1)))
            .xp(16, 8)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("PH006", Skill::GoalSetting, DifficultyCode::B, "Define one small, achievable goal for this week and write <strong>[STEPS]</strong> steps to achieve it. Spend <strong>[DURATION_M]</strong> minutes.")
            .var("STEPS", range(2, 4, Decimal::new(1, 1)))
            .var("DURATION_M", range(10, 20, Decimal::new(5, 1)))
            .xp(18, 9)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("PH007", Skill::Mindfulness, DifficultyCode::C, "Engage in a mindful activity (e.g., mindful walking, eating) for <strong>[DURATION_Y]</strong> minutes.")
            .var("DURATION_Y", range(15, 25, Decimal::new(5, 1)))
            .xp(20, 10)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("PH008", Skill::SelfAwareness, DifficultyCode::C, "Reflect on a recent challenge and identify <strong>[LESSONS]</strong> lessons learned. Journal for <strong>[DURATION_M]</strong> minutes.")
            .var("LESSONS", range(1, 3, Decimal::new(1, 1)))
            .var("DURATION_M", range(15, 25, Decimal::new(5, 1)))
            .xp(22, 11)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
        TaskTemplate::new("PH009", Skill::Discipline, DifficultyCode::C, "Complete a task you've been procrastinating on for at least <strong>[DURATION_Y]</strong> minutes.")
            .var("DURATION_Y", range(20, 45, Decimal::ONE))
            .xp(25, 12)
            .time_limit(TimeLimit::dynamic("DURATION_Y")),
        TaskTemplate::new("PH010", Skill::Mindfulness, DifficultyCode::A, "Take <strong>[COUNT]</strong> deep, slow breaths, focusing only on your breath over <strong>[DURATION_M]</strong> minutes.")
            .var("COUNT", range(5, 10, Decimal::new(5, 1)))
            .var("DURATION_M", range(1, 3, Decimal::new(1, 1)))
            .xp(6, 3)
            .time_limit(TimeLimit::dynamic("DURATION_M")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_templates_in_four_families() {
        let templates = authored_templates();
        assert_eq!(templates.len(), 40);
        for prefix in ["P0", "M0", "F0", "PH0"] {
            let count = templates.iter().filter(|t| t.id.starts_with(prefix)).count();
            assert_eq!(count, 10, "{prefix}");
        }
    }

    #[test]
    fn book_template_uses_book_title() {
        let templates = authored_templates();
        let m001 = templates.iter().find(|t| t.id == "M001");
        assert!(m001.is_some_and(|t| t.variables.get("BOOK_TITLE") == Some(&VariableSpec::BookTitle)));
    }

    #[test]
    fn fixed_and_untimed_limits_survive() {
        let templates = authored_templates();
        let limit = |id: &str| {
            templates
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.time_limit.clone())
        };
        assert_eq!(limit("M004"), Some(TimeLimit::Fixed(25)));
        assert_eq!(limit("M007"), Some(TimeLimit::Fixed(30)));
        assert_eq!(limit("PH004"), Some(TimeLimit::Untimed));
        assert_eq!(limit("P007"), Some(TimeLimit::dynamic("DURATION_M")));
    }

    #[test]
    fn unscaled_range_is_kept() {
        let templates = authored_templates();
        let f005 = templates.iter().find(|t| t.id == "F005");
        assert!(f005.is_some_and(|t| t.variables.get("PRODUCT_COUNT") == Some(&flat(2, 3))));
    }
}
