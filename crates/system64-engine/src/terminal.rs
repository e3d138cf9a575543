//! Plain-text presenter writing to stdout.

use system64_core::{CharacterProfile, Presenter};
use system64_types::{Notification, RenderMode, ResolvedTask, Severity};

/// Renders tasks and notifications as lines of text.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    /// Create a presenter.
    pub const fn new() -> Self {
        Self
    }
}

/// Print the character profile.
pub fn print_profile(profile: &CharacterProfile) {
    println!();
    println!("== {} ==", profile.name);
    println!(
        "Age {}  |  {}  |  {} kg  |  {} cm",
        profile.age, profile.status, profile.weight, profile.height
    );
    println!(
        "Level {} ({})  XP {}/{}",
        profile.level, profile.level_name, profile.xp, profile.xp_per_level
    );
    println!("Unique skill: {}", profile.unique_skill);
    for group in &profile.domains {
        println!("  {}", group.domain);
        for line in &group.skills {
            println!("    {:<20} {}", line.name, line.level);
        }
    }
    println!();
}

impl Presenter for TerminalPresenter {
    fn present_task(&mut self, task: &ResolvedTask, mode: RenderMode) {
        println!();
        println!("-- {} [{}] --", task.title(), task.difficulty_label);
        println!("{}", strip_markup(&task.description));
        let limit = task
            .time_limit_minutes
            .map_or_else(String::new, |m| format!("  Time limit: {m} min"));
        println!(
            "Skill: {}  Reward: +{} XP  Failure: -{} XP{limit}",
            task.skill.display_name(),
            task.xp_gain,
            task.xp_failure_penalty
        );
        let actions = match mode {
            RenderMode::Initial if task.time_limit_minutes.is_some() => "accept | decline | timer",
            RenderMode::Initial => "accept | decline",
            RenderMode::Accepted if task.timer_running || task.time_limit_minutes.is_none() => {
                "done | fail"
            }
            RenderMode::Accepted => "done | fail | timer",
            RenderMode::TimerActive => "done (timer running)",
        };
        println!("> {actions}");
    }

    fn clear_task(&mut self) {}

    fn notify(&mut self, notification: Notification) {
        let marker = match notification.severity {
            Severity::Info => "*",
            Severity::Success => "+",
            Severity::Warning => "!",
            Severity::Error => "x",
        };
        println!("[{marker}] {}", strip_markup(&notification.message));
    }

    fn update_timer(&mut self, display: &str) {
        // Once a minute, then every second of the last ten.
        if display.ends_with(":00") || display.starts_with("00:0") {
            println!("   {display}");
        }
    }
}

/// Remove `<...>` tags from catalog text.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
