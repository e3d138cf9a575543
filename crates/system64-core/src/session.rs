//! The session controller.
//!
//! [`Session`] owns every piece of mutable game state: the character, the
//! global counters, the active task and its countdown, the cheat interrupt
//! and the reset confirmation. It drives the lifecycle handlers, consults
//! the progression ledger, and writes through to the store after every
//! mutation.
//!
//! # Collaborators
//!
//! | Port | Trait | Used for |
//! |------|-------|----------|
//! | Store | [`KeyValueStore`] | write-through persistence |
//! | Clock | [`Clock`] | cheat timing, cooldown expiry |
//! | Presenter | [`Presenter`] | rendered tasks and notifications |
//! | RNG | [`rand::Rng`] | template and value draws, rebuke lines |
//!
//! # Rejections
//!
//! A refused action is reported twice: as an error [`Notification`] to the
//! presenter and as a [`SessionError`] to the caller. Nothing changes.

use std::str::FromStr;

use rand::Rng;
use system64_catalog::Catalog;
use system64_db::{KeyValueStore, StoreKey, TypedStore};
use system64_ledger::{ProgressEvent, add_xp, increase_skill_level, lose_xp};
use system64_tasks::{Countdown, CountdownTick, TaskAction, TaskError, TaskPhase, generate_task};
use system64_types::{Character, Notification, RenderMode, ResolvedTask, TaskId};
use tracing::{debug, info, warn};

use crate::cheat::{CHEAT_RESET_MESSAGE, CheatVerdict, is_premature, record_offense};
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::cooldown::{Cooldown, CooldownStatus};
use crate::error::SessionError;
use crate::presenter::Presenter;
use crate::profile::{CharacterProfile, CharacterSetup};
use crate::reset::{RESET_CANCELLED_MESSAGE, ResetConfirmation, ResetStep};
use crate::skips::{SkipOutcome, SkipTracker};

/// Characters of the description quoted in completion and failure messages.
const EXCERPT_CHARS: usize = 30;

/// Shown when there is no character.
pub const WELCOME_MESSAGE: &str = "Welcome! Please create your character.";

// ---------------------------------------------------------------------------
// State types
// ---------------------------------------------------------------------------

/// The task currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTask {
    /// The resolved task.
    pub task: ResolvedTask,
    /// Lifecycle phase.
    pub phase: TaskPhase,
    /// Clock reading when the task was generated.
    pub generated_at_ms: i64,
    /// Countdown, present once a timer was started.
    pub countdown: Option<Countdown>,
}

impl ActiveTask {
    const fn new(task: ResolvedTask, generated_at_ms: i64) -> Self {
        Self {
            task,
            phase: TaskPhase::Generated,
            generated_at_ms,
            countdown: None,
        }
    }
}

/// The persisted scalar counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounters {
    /// Last scenario number handed out.
    pub sequence: u64,
    /// Cumulative premature completions.
    pub cheat_attempts: u32,
    /// When the lockout ends, if one is set.
    pub cooldown_end_ms: Option<i64>,
    /// Completions since the last lockout.
    pub session_completions: u32,
    /// Declines since the last completion or manual failure.
    pub consecutive_skips: u32,
    /// Whether declines cost XP.
    pub skip_penalty_active: bool,
}

/// What happened when a completion was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The task was completed and rewarded.
    Completed {
        /// XP awarded.
        xp_gain: u32,
        /// Every progression change, in order.
        events: Vec<ProgressEvent>,
        /// Whether this completion started the emergency cooldown.
        cooldown_started: bool,
    },
    /// Too fast. The task is held until the rebuke is acknowledged.
    CheatDetected {
        /// Offenses so far.
        attempts: u32,
        /// Rebuke shown to the player.
        message: &'static str,
    },
    /// Too fast, too often. All state was wiped.
    CheatReset {
        /// Offenses that triggered the reset.
        attempts: u32,
    },
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Single-player game session.
pub struct Session<S, C, P, R> {
    store: S,
    clock: C,
    presenter: P,
    rng: R,
    catalog: Catalog,
    config: GameConfig,
    character: Option<Character>,
    sequence: u64,
    cheat_attempts: u32,
    cooldown: Cooldown,
    skips: SkipTracker,
    active: Option<ActiveTask>,
    cheat_interrupt: Option<ActiveTask>,
    reset: ResetConfirmation,
}

impl<S, C, P, R> Session<S, C, P, R>
where
    S: KeyValueStore,
    C: Clock,
    P: Presenter,
    R: Rng,
{
    /// Restore a session from `store`.
    ///
    /// Missing keys take their defaults and unreadable values are logged and
    /// replaced by defaults. Missing skill entries are healed to level 1. A
    /// lockout that ended while the session was closed is cleared along with
    /// the completion and skip counters.
    pub fn open(
        store: S,
        clock: C,
        presenter: P,
        rng: R,
        catalog: Catalog,
        config: GameConfig,
    ) -> Result<Self, SessionError> {
        let mut dirty = false;

        let mut character = match store.load_json::<Character>(StoreKey::Character) {
            Ok(character) => character,
            Err(error) => {
                warn!(%error, "Stored character unreadable, starting without one");
                dirty = true;
                None
            }
        };
        if let Some(character) = character.as_mut() {
            let healed = character.heal_skills(catalog.skill_names());
            if healed > 0 {
                info!(healed, "Missing skill entries restored");
                dirty = true;
            }
        }

        let mut cooldown = Cooldown::new(
            load_optional(&store, StoreKey::CooldownEnd),
            load_or_default(&store, StoreKey::SessionCompletions),
        );
        let mut skips = SkipTracker::new(
            load_or_default(&store, StoreKey::ConsecutiveSkips),
            load_or_default(&store, StoreKey::SkipPenaltyActive),
        );
        if cooldown.refresh(clock.now_ms()) == CooldownStatus::Expired {
            skips.reset();
            dirty = true;
        }

        let mut session = Self {
            sequence: load_or_default(&store, StoreKey::Sequence),
            cheat_attempts: load_or_default(&store, StoreKey::CheatAttempts),
            store,
            clock,
            presenter,
            rng,
            catalog,
            config,
            character,
            cooldown,
            skips,
            active: None,
            cheat_interrupt: None,
            reset: ResetConfirmation::default(),
        };
        if dirty {
            session.persist()?;
        }
        info!(
            has_character = session.character.is_some(),
            sequence = session.sequence,
            locked = session.is_locked(),
            "Session opened"
        );
        Ok(session)
    }

    /// Put the opening screen up: setup prompt, lockout notice, or a task.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        if self.character.is_none() {
            self.presenter.notify(Notification::info(WELCOME_MESSAGE));
            return Ok(());
        }
        if let Some(remaining) = self.cooldown_remaining() {
            self.presenter.notify(Notification::error(format!(
                "SYSTEM LOCKOUT ACTIVE. Time remaining: {remaining}"
            )));
            return Ok(());
        }
        self.spawn_task().map(|_| ())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The character, if one exists.
    pub const fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    /// The task on screen, if any.
    pub const fn active_task(&self) -> Option<&ActiveTask> {
        self.active.as_ref()
    }

    /// Whether a cheat rebuke awaits acknowledgment.
    pub const fn cheat_interrupt_pending(&self) -> bool {
        self.cheat_interrupt.is_some()
    }

    /// The persisted counters.
    pub const fn counters(&self) -> SessionCounters {
        SessionCounters {
            sequence: self.sequence,
            cheat_attempts: self.cheat_attempts,
            cooldown_end_ms: self.cooldown.end_ms(),
            session_completions: self.cooldown.completions(),
            consecutive_skips: self.skips.consecutive,
            skip_penalty_active: self.skips.penalty_active,
        }
    }

    /// Whether the emergency cooldown is active right now.
    pub fn is_locked(&self) -> bool {
        self.cooldown.is_active(self.clock.now_ms())
    }

    /// Remaining lockout as `HH:MM:SS`.
    pub fn cooldown_remaining(&self) -> Option<String> {
        self.cooldown.remaining_display(self.clock.now_ms())
    }

    /// The loaded configuration.
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The template catalog.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The presentation port.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presentation port, mutably.
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Close the session and hand back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    // -----------------------------------------------------------------------
    // Character
    // -----------------------------------------------------------------------

    /// Validate `setup` and create the character.
    ///
    /// Resets the scenario and cheat counters, then presents the first task.
    pub fn create_character(&mut self, setup: CharacterSetup) -> Result<(), SessionError> {
        self.try_create_character(setup)
            .map_err(|error| self.reject(error))
    }

    fn try_create_character(&mut self, setup: CharacterSetup) -> Result<(), SessionError> {
        self.ensure_unlocked("Profile creation")?;
        if self.character.is_some() {
            return Err(SessionError::CharacterExists);
        }
        let character = setup.into_character()?;
        info!(name = %character.name, "Character created");
        self.presenter.notify(Notification::success(format!(
            "Welcome, {}! Your first scenario awaits.",
            character.name
        )));
        self.character = Some(character);
        self.sequence = 0;
        self.cheat_attempts = 0;
        self.active = None;
        self.cheat_interrupt = None;
        self.persist()?;
        self.spawn_task().map(|_| ())
    }

    /// Profile view of the character.
    pub fn profile(&mut self) -> Result<CharacterProfile, SessionError> {
        self.try_profile().map_err(|error| self.reject(error))
    }

    fn try_profile(&mut self) -> Result<CharacterProfile, SessionError> {
        self.ensure_unlocked("Profile access")?;
        let character = self.character.as_ref().ok_or(SessionError::NoCharacter)?;
        Ok(CharacterProfile::new(
            character,
            &self.catalog,
            &self.config.progression,
        ))
    }

    // -----------------------------------------------------------------------
    // Task lifecycle
    // -----------------------------------------------------------------------

    /// Generate a task, replacing one that was not yet accepted.
    ///
    /// Returns `None` when the catalog has nothing to offer; the player is
    /// told so and nothing fails.
    pub fn generate_task(&mut self) -> Result<Option<TaskId>, SessionError> {
        self.try_generate_task().map_err(|error| self.reject(error))
    }

    fn try_generate_task(&mut self) -> Result<Option<TaskId>, SessionError> {
        if self.ensure_unlocked("New tasks")? == CooldownStatus::Expired {
            // Lifting the lockout already presented a fresh task.
            return Ok(self.active.as_ref().map(|a| a.task.id));
        }
        if self.cheat_interrupt.is_some() {
            return Err(SessionError::CheatInterruptPending);
        }
        if self.character.is_none() {
            return Err(SessionError::NoCharacter);
        }
        if self.active.as_ref().is_some_and(|a| a.phase.is_in_progress()) {
            return Err(SessionError::TaskInProgress);
        }
        self.spawn_task()
    }

    /// Commit to the task.
    pub fn accept(&mut self, id: TaskId) -> Result<(), SessionError> {
        self.try_accept(id).map_err(|error| self.reject(error))
    }

    fn try_accept(&mut self, id: TaskId) -> Result<(), SessionError> {
        let next = self.check_action(id, TaskAction::Accept)?;
        let active = self.active.as_mut().ok_or(SessionError::NoActiveTask)?;
        active.phase = next;
        debug!(task_id = %id, "Task accepted");
        self.presenter.notify(Notification::info("Scenario Started."));
        self.present_active();
        Ok(())
    }

    /// Skip the task and move on to the next one.
    ///
    /// Counts toward the consecutive-skip warning and penalty.
    pub fn decline(&mut self, id: TaskId) -> Result<SkipOutcome, SessionError> {
        self.try_decline(id).map_err(|error| self.reject(error))
    }

    fn try_decline(&mut self, id: TaskId) -> Result<SkipOutcome, SessionError> {
        self.check_action(id, TaskAction::Decline)?;
        let outcome = self.skips.record_decline(&self.config.skips);

        match outcome {
            SkipOutcome::Penalized { xp } => {
                if let Some(character) = self.character.as_mut() {
                    lose_xp(character, xp);
                }
                self.presenter.notify(Notification::warning(format!(
                    "Task Skipped. -{xp} XP penalty applied."
                )));
            }
            SkipOutcome::Cancelled | SkipOutcome::Warned | SkipOutcome::PenaltyActivated => {
                self.presenter.notify(Notification::info("Scenario Cancelled."));
            }
        }
        match outcome {
            SkipOutcome::Warned => {
                self.presenter.notify(Notification::warning(format!(
                    "{} scenarios skipped in a row. Keep skipping and every skip will cost XP.",
                    self.skips.consecutive
                )));
            }
            SkipOutcome::PenaltyActivated => {
                self.presenter.notify(Notification::error(
                    "Skip penalty protocol now active. Future skips will incur XP deduction.",
                ));
            }
            SkipOutcome::Cancelled | SkipOutcome::Penalized { .. } => {}
        }

        self.finish_task();
        self.persist()?;
        self.next_task()?;
        Ok(outcome)
    }

    /// Start the countdown.
    pub fn start_timer(&mut self, id: TaskId) -> Result<(), SessionError> {
        self.try_start_timer(id).map_err(|error| self.reject(error))
    }

    fn try_start_timer(&mut self, id: TaskId) -> Result<(), SessionError> {
        let next = self.check_action(id, TaskAction::StartTimer)?;
        let active = self.active.as_mut().ok_or(SessionError::NoActiveTask)?;
        let minutes = active
            .task
            .time_limit_minutes
            .filter(|m| *m > 0)
            .ok_or(SessionError::NoTimeLimit)?;
        let countdown = Countdown::from_minutes(minutes);
        active.phase = next;
        active.task.timer_running = true;
        active.countdown = Some(countdown);
        debug!(task_id = %id, minutes, "Timer started");
        self.presenter.notify(Notification::info("Timed Scenario Started!"));
        self.present_active();
        self.presenter.update_timer(&countdown.display());
        Ok(())
    }

    /// Advance a running countdown by one second.
    ///
    /// On expiry the task moves to its decision point: the player must
    /// report it completed or unfinished. `None` when no countdown runs.
    pub fn tick_timer(&mut self) -> Option<CountdownTick> {
        let active = self.active.as_mut()?;
        if active.phase != TaskPhase::TimerRunning {
            return None;
        }
        let countdown = active.countdown.as_mut()?;
        let tick = countdown.tick();
        let display = countdown.display();
        if tick == CountdownTick::Expired {
            if let Ok(next) = active.phase.apply(TaskAction::Expire) {
                active.phase = next;
            }
            active.task.timer_running = false;
            info!(task_id = %active.task.id, "Timer expired");
            self.presenter.update_timer(&display);
            self.presenter
                .notify(Notification::info("Time's up! Assess your completion."));
            self.present_active();
        } else {
            self.presenter.update_timer(&display);
        }
        Some(tick)
    }

    /// Report the task completed.
    ///
    /// A completion that comes too soon after generation is rejected as
    /// cheating; see [`CompletionOutcome`].
    pub fn complete(&mut self, id: TaskId) -> Result<CompletionOutcome, SessionError> {
        self.try_complete(id).map_err(|error| self.reject(error))
    }

    fn try_complete(&mut self, id: TaskId) -> Result<CompletionOutcome, SessionError> {
        self.check_action(id, TaskAction::Complete)?;
        let now = self.clock.now_ms();
        let generated_at = self
            .active
            .as_ref()
            .map_or(now, |active| active.generated_at_ms);

        if is_premature(generated_at, now, &self.config.anti_cheat) {
            return self.handle_cheat();
        }

        let Some(active) = self.active.take() else {
            return Err(SessionError::NoActiveTask);
        };
        let task = active.task;
        self.presenter.notify(Notification::success(format!(
            "\"{}...\" completed successfully!",
            excerpt(&task.description)
        )));

        let character = self.character.as_mut().ok_or(SessionError::NoCharacter)?;
        let mut events = add_xp(character, task.xp_gain, &self.config.progression)?;
        events.extend(increase_skill_level(
            character,
            task.skill,
            &self.config.progression,
        )?);
        info!(
            task_id = %task.id,
            xp_gain = task.xp_gain,
            skill = %task.skill,
            level = character.level,
            "Task completed"
        );
        self.notify_progress(&events);

        let cooldown_started = self
            .cooldown
            .record_completion(now, &self.config.cooldown);
        if self.skips.reset() {
            self.presenter.notify(Notification::success(
                "Good work! Skip penalty protocol has been reset.",
            ));
        }
        self.persist()?;
        if cooldown_started {
            self.presenter.notify(Notification::warning(
                "Excessive system engagement! Emergency Cooldown initiated.",
            ));
        }

        self.presenter.clear_task();
        self.next_task()?;
        Ok(CompletionOutcome::Completed {
            xp_gain: task.xp_gain,
            events,
            cooldown_started,
        })
    }

    fn handle_cheat(&mut self) -> Result<CompletionOutcome, SessionError> {
        match record_offense(
            &mut self.cheat_attempts,
            &self.config.anti_cheat,
            &mut self.rng,
        ) {
            CheatVerdict::Reset { attempts } => {
                self.full_reset()?;
                self.presenter.notify(Notification::error(CHEAT_RESET_MESSAGE));
                Ok(CompletionOutcome::CheatReset { attempts })
            }
            CheatVerdict::Rebuke { attempts, message } => {
                self.cheat_interrupt = self.active.take();
                self.persist()?;
                self.presenter.clear_task();
                self.presenter.notify(Notification::error(message));
                Ok(CompletionOutcome::CheatDetected { attempts, message })
            }
        }
    }

    /// Dismiss the rebuke and put the same task back in its prior mode.
    pub fn acknowledge_cheat(&mut self) -> Result<(), SessionError> {
        self.try_acknowledge_cheat()
            .map_err(|error| self.reject(error))
    }

    fn try_acknowledge_cheat(&mut self) -> Result<(), SessionError> {
        let restored = self
            .cheat_interrupt
            .take()
            .ok_or(SessionError::NoCheatInterrupt)?;
        debug!(task_id = %restored.task.id, "Task restored after rebuke");
        self.active = Some(restored);
        self.present_active();
        self.presenter.notify(Notification::warning(
            "Task reloaded. Please complete it fairly.",
        ));
        Ok(())
    }

    /// Report the task unfinished.
    ///
    /// Failing an expired task counts as an automatic failure, which does
    /// not reset the skip counter.
    pub fn fail(&mut self, id: TaskId) -> Result<(), SessionError> {
        self.try_fail(id).map_err(|error| self.reject(error))
    }

    fn try_fail(&mut self, id: TaskId) -> Result<(), SessionError> {
        self.check_action(id, TaskAction::Fail)?;
        let automatic = self
            .active
            .as_ref()
            .is_some_and(|a| a.phase == TaskPhase::TimeExpired);
        self.resolve_failure(automatic)
    }

    /// Answer the expired timer's decision point.
    ///
    /// Returns the completion outcome when `completed` is set.
    pub fn report_expired(
        &mut self,
        completed: bool,
    ) -> Result<Option<CompletionOutcome>, SessionError> {
        let id = self.expired_task_id().map_err(|error| self.reject(error))?;
        if completed {
            self.complete(id).map(Some)
        } else {
            self.fail(id).map(|()| None)
        }
    }

    /// Close the expired timer's decision point without answering.
    ///
    /// Counts as an automatic failure.
    pub fn dismiss_expired(&mut self) -> Result<(), SessionError> {
        let id = self.expired_task_id().map_err(|error| self.reject(error))?;
        self.presenter.notify(Notification::warning(
            "Task marked as unfinished due to dismissal.",
        ));
        self.fail(id)
    }

    fn expired_task_id(&self) -> Result<TaskId, SessionError> {
        self.active
            .as_ref()
            .filter(|a| a.phase == TaskPhase::TimeExpired)
            .map(|a| a.task.id)
            .ok_or(SessionError::NoExpiredTimer)
    }

    fn resolve_failure(&mut self, automatic: bool) -> Result<(), SessionError> {
        let Some(active) = self.active.take() else {
            return Err(SessionError::NoActiveTask);
        };
        let task = active.task;
        let reason = if automatic {
            " (time expired or dismissed)"
        } else {
            ""
        };
        self.presenter.notify(Notification::error(format!(
            "\"{}...\" failed{reason}.",
            excerpt(&task.description)
        )));
        if let Some(character) = self.character.as_mut() {
            let event = lose_xp(character, task.xp_failure_penalty);
            self.notify_progress(&[event]);
        }
        info!(task_id = %task.id, automatic, penalty = task.xp_failure_penalty, "Task failed");

        if !automatic && self.skips.reset() {
            self.presenter.notify(Notification::info(
                "Task attempt noted. Skip penalty protocol reset.",
            ));
        }
        self.persist()?;
        self.presenter.clear_task();
        self.next_task()
    }

    // -----------------------------------------------------------------------
    // Cooldown
    // -----------------------------------------------------------------------

    /// Lift the lockout if it has run out, then present a fresh task.
    pub fn refresh_cooldown(&mut self) -> Result<CooldownStatus, SessionError> {
        let status = self.cooldown.refresh(self.clock.now_ms());
        if status == CooldownStatus::Expired {
            self.skips.reset();
            self.persist()?;
            self.presenter.notify(Notification::success(
                "Cooldown Finished. System returning to normal.",
            ));
            self.next_task()?;
        }
        Ok(status)
    }

    fn ensure_unlocked(&mut self, action: &'static str) -> Result<CooldownStatus, SessionError> {
        match self.refresh_cooldown()? {
            CooldownStatus::Active { .. } => Err(SessionError::Lockout { action }),
            status @ (CooldownStatus::Inactive | CooldownStatus::Expired) => Ok(status),
        }
    }

    // -----------------------------------------------------------------------
    // Reset
    // -----------------------------------------------------------------------

    /// Open the five-step reset confirmation and show its first prompt.
    pub fn begin_reset(&mut self) -> Result<&'static str, SessionError> {
        self.try_begin_reset().map_err(|error| self.reject(error))
    }

    fn try_begin_reset(&mut self) -> Result<&'static str, SessionError> {
        self.ensure_unlocked("Reset")?;
        if self.cheat_interrupt.is_some() {
            return Err(SessionError::CheatInterruptPending);
        }
        if self
            .active
            .as_ref()
            .is_some_and(|a| a.phase == TaskPhase::TimerRunning)
        {
            return Err(SessionError::ResetDuringTimer);
        }
        let prompt = self.reset.begin();
        self.presenter.notify(Notification::warning(prompt));
        Ok(prompt)
    }

    /// Confirm the current prompt; the fifth confirmation resets.
    pub fn confirm_reset(&mut self) -> Result<ResetStep, SessionError> {
        self.try_confirm_reset().map_err(|error| self.reject(error))
    }

    fn try_confirm_reset(&mut self) -> Result<ResetStep, SessionError> {
        let step = self.reset.confirm().ok_or(SessionError::ResetNotStarted)?;
        match step {
            ResetStep::Prompt(prompt) => self.presenter.notify(Notification::warning(prompt)),
            ResetStep::Confirmed => self.full_reset()?,
        }
        Ok(step)
    }

    /// Back out of the reset confirmation.
    pub fn cancel_reset(&mut self) -> Result<(), SessionError> {
        if self.reset.cancel() {
            self.presenter.notify(Notification::info(RESET_CANCELLED_MESSAGE));
            Ok(())
        } else {
            Err(self.reject(SessionError::ResetNotStarted))
        }
    }

    /// Wipe every piece of owned state back to its initial default.
    ///
    /// Idempotent: a second call leaves the same state as the first.
    pub fn full_reset(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.character = None;
        self.sequence = 0;
        self.cheat_attempts = 0;
        self.cooldown = Cooldown::default();
        self.skips = SkipTracker::default();
        self.active = None;
        self.cheat_interrupt = None;
        self.reset = ResetConfirmation::default();
        info!("Full reset");
        self.presenter.clear_task();
        self.presenter.notify(Notification::info(WELCOME_MESSAGE));
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Common guards for actions on the active task. Returns the phase the
    /// action leads to without committing it.
    fn check_action(&mut self, id: TaskId, action: TaskAction) -> Result<TaskPhase, SessionError> {
        self.ensure_unlocked("Actions")?;
        if self.cheat_interrupt.is_some() {
            return Err(SessionError::CheatInterruptPending);
        }
        let active = self.active.as_ref().ok_or(SessionError::NoActiveTask)?;
        if active.task.id != id {
            return Err(SessionError::TaskMismatch);
        }
        Ok(active.phase.apply(action)?)
    }

    /// Generate and present a task unconditionally.
    fn spawn_task(&mut self) -> Result<Option<TaskId>, SessionError> {
        let Some(character) = self.character.as_ref() else {
            return Err(SessionError::NoCharacter);
        };
        let generated = generate_task(
            character,
            &self.catalog,
            &self.config.rewards,
            &mut self.sequence,
            &mut self.rng,
        );
        self.presenter.clear_task();
        match generated {
            Ok(task) => {
                let id = task.id;
                self.presenter.present_task(&task, RenderMode::Initial);
                self.active = Some(ActiveTask::new(task, self.clock.now_ms()));
                self.persist()?;
                Ok(Some(id))
            }
            Err(TaskError::NoTemplatesAvailable) => {
                warn!("No templates available");
                self.active = None;
                self.presenter.notify(Notification::error("No tasks available!"));
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// After a resolution: a new task unless locked out.
    fn next_task(&mut self) -> Result<(), SessionError> {
        if self.character.is_none() || self.is_locked() {
            return Ok(());
        }
        self.spawn_task().map(|_| ())
    }

    fn finish_task(&mut self) {
        self.active = None;
        self.presenter.clear_task();
    }

    fn present_active(&mut self) {
        if let Some(active) = self.active.as_ref() {
            if let Some(mode) = active.phase.render_mode() {
                self.presenter.present_task(&active.task, mode);
            }
        }
    }

    fn notify_progress(&mut self, events: &[ProgressEvent]) {
        for event in events {
            let notification = match *event {
                ProgressEvent::XpGained { amount } => Notification::success(format!("+{amount} XP!")),
                ProgressEvent::XpLost { amount } => Notification::error(format!("-{amount} XP.")),
                ProgressEvent::LevelUp { level } => Notification::success(format!(
                    "Level Up! Reached Rank: {}",
                    self.catalog.level_name(level)
                )),
                ProgressEvent::SkillImproved { skill, level } => Notification::success(format!(
                    "{} improved to Level {level}.",
                    skill.display_name()
                )),
                ProgressEvent::Milestone { level, .. } => Notification::success(format!(
                    "Skill Milestone! Overall Rank Upgraded to: {}",
                    self.catalog.level_name(level)
                )),
                ProgressEvent::UniqueSkillUnlocked { unique_skill } => {
                    Notification::success(format!("Unique Skill Unlocked: {unique_skill}!"))
                }
            };
            self.presenter.notify(notification);
        }
    }

    fn reject(&mut self, error: SessionError) -> SessionError {
        if error.is_rejection() {
            debug!(%error, "Action rejected");
            self.presenter.notify(Notification::error(error.to_string()));
        } else {
            warn!(%error, "Session operation failed");
        }
        error
    }

    /// Write every owned value through to the store.
    fn persist(&mut self) -> Result<(), SessionError> {
        match self.character.as_ref() {
            Some(character) => self.store.save_json(StoreKey::Character, character)?,
            None => self.store.remove(StoreKey::Character)?,
        }
        self.store.save_scalar(StoreKey::Sequence, self.sequence)?;
        self.store
            .save_scalar(StoreKey::CheatAttempts, self.cheat_attempts)?;
        match self.cooldown.end_ms() {
            Some(end) => self.store.save_scalar(StoreKey::CooldownEnd, end)?,
            None => self.store.remove(StoreKey::CooldownEnd)?,
        }
        self.store
            .save_scalar(StoreKey::SessionCompletions, self.cooldown.completions())?;
        self.store
            .save_scalar(StoreKey::ConsecutiveSkips, self.skips.consecutive)?;
        self.store
            .save_scalar(StoreKey::SkipPenaltyActive, self.skips.penalty_active)?;
        Ok(())
    }
}

/// Read a scalar; `None` when missing or unreadable.
fn load_optional<S: KeyValueStore, T: FromStr>(store: &S, key: StoreKey) -> Option<T> {
    store.load_scalar::<T>(key).unwrap_or_else(|error| {
        warn!(%key, %error, "Stored value unreadable, using default");
        None
    })
}

/// Read a scalar, falling back to its default when missing or unreadable.
fn load_or_default<S: KeyValueStore, T: FromStr + Default>(store: &S, key: StoreKey) -> T {
    load_optional(store, key).unwrap_or_default()
}

/// Leading characters of a description with markup tags removed.
fn excerpt(description: &str) -> String {
    let mut in_tag = false;
    description
        .chars()
        .filter(|&c| match c {
            '<' => {
                in_tag = true;
                false
            }
            '>' if in_tag => {
                in_tag = false;
                false
            }
            _ => !in_tag,
        })
        .take(EXCERPT_CHARS)
        .collect()
}
