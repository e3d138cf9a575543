//! Multi-step confirmation before a full reset.

/// Escalating confirmation prompts, shown in order.
pub const RESET_CONFIRMATION_MESSAGES: [&str; 5] = [
    "Are you sure you want to reset all your progress? This action cannot be undone.",
    "Seriously, this will wipe everything. Are you absolutely certain?",
    "This is your final chance. Resetting will delete your character and all task history. Proceed?",
    "Okay, if you insist! Clicking 'Yes' will erase all data. Still want to do this?",
    "FINAL WARNING! Clicking 'Yes' means total data annihilation. No going back!",
];

/// Shown when the player backs out.
pub const RESET_CANCELLED_MESSAGE: &str = "Phew! Reset cancelled. Your progress is safe.";

/// Result of one confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStep {
    /// Show the next prompt.
    Prompt(&'static str),
    /// All prompts confirmed; perform the reset.
    Confirmed,
}

/// Position in the confirmation sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetConfirmation {
    step: Option<usize>,
}

impl ResetConfirmation {
    /// Whether a confirmation sequence is open.
    pub const fn is_pending(&self) -> bool {
        self.step.is_some()
    }

    /// Open the sequence and return the first prompt.
    pub const fn begin(&mut self) -> &'static str {
        self.step = Some(0);
        RESET_CONFIRMATION_MESSAGES[0]
    }

    /// Confirm the current prompt. `None` when no sequence is open.
    pub fn confirm(&mut self) -> Option<ResetStep> {
        let next = self.step?.saturating_add(1);
        if let Some(prompt) = RESET_CONFIRMATION_MESSAGES.get(next) {
            self.step = Some(next);
            Some(ResetStep::Prompt(prompt))
        } else {
            self.step = None;
            Some(ResetStep::Confirmed)
        }
    }

    /// Close the sequence. Returns whether one was open.
    pub const fn cancel(&mut self) -> bool {
        let was_pending = self.step.is_some();
        self.step = None;
        was_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifth_confirmation_resets() {
        let mut confirmation = ResetConfirmation::default();
        assert!(confirmation.confirm().is_none());

        assert_eq!(confirmation.begin(), RESET_CONFIRMATION_MESSAGES[0]);
        for expected in RESET_CONFIRMATION_MESSAGES.iter().skip(1) {
            assert_eq!(confirmation.confirm(), Some(ResetStep::Prompt(expected)));
        }
        assert_eq!(confirmation.confirm(), Some(ResetStep::Confirmed));
        assert!(!confirmation.is_pending());
    }

    #[test]
    fn cancel_returns_to_start() {
        let mut confirmation = ResetConfirmation::default();
        confirmation.begin();
        let _ = confirmation.confirm();
        assert!(confirmation.cancel());
        assert!(!confirmation.cancel());
        confirmation.begin();
        assert_eq!(
            confirmation.confirm(),
            Some(ResetStep::Prompt(RESET_CONFIRMATION_MESSAGES[1]))
        );
    }
}
