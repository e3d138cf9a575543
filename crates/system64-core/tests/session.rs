//! End-to-end session scenarios against the in-memory store, a manual clock
//! and a recording presenter.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rust_decimal_macros::dec;
use system64_catalog::build_catalog;
use system64_core::config::CooldownConfig;
use system64_core::{
    CharacterSetup, CompletionOutcome, GameConfig, ManualClock, RecordingPresenter, ResetStep,
    Session, SessionCounters, SessionError, SkipOutcome,
};
use system64_db::{KeyValueStore, MemoryStore, StoreKey, TypedStore};
use system64_tasks::{CountdownTick, LifecycleError, TaskPhase};
use system64_types::{Character, RenderMode, Severity, Skill, TaskId};

type TestSession<'c> = Session<MemoryStore, &'c ManualClock, RecordingPresenter, SmallRng>;

const START_MS: i64 = 1_700_000_000_000;
const PATIENT_MS: i64 = 7_000;

fn open_with(clock: &ManualClock, store: MemoryStore, config: GameConfig) -> TestSession<'_> {
    Session::open(
        store,
        clock,
        RecordingPresenter::new(),
        SmallRng::seed_from_u64(64),
        build_catalog(),
        config,
    )
    .expect("session opens")
}

fn setup() -> CharacterSetup {
    CharacterSetup {
        name: String::from("Ada"),
        age: Some(30),
        status: String::from("Engineer"),
        weight: Some(dec!(62)),
        height: Some(dec!(170)),
    }
}

fn stored_character(xp: u32) -> Character {
    let mut character = Character::new(
        String::from("Ada"),
        30,
        String::from("Engineer"),
        dec!(62),
        dec!(170),
    );
    character.xp = xp;
    character
}

fn with_character(clock: &ManualClock) -> TestSession<'_> {
    let mut session = open_with(clock, MemoryStore::new(), GameConfig::default());
    session.create_character(setup()).expect("character created");
    session
}

fn active_id(session: &TestSession<'_>) -> TaskId {
    session.active_task().expect("a task is active").task.id
}

fn phase(session: &TestSession<'_>) -> Option<TaskPhase> {
    session.active_task().map(|a| a.phase)
}

/// Accept the active task, wait long enough, and complete it.
fn complete_patiently(session: &mut TestSession<'_>, clock: &ManualClock) -> CompletionOutcome {
    let id = active_id(session);
    session.accept(id).expect("accepted");
    clock.advance(PATIENT_MS);
    session.complete(id).expect("completed")
}

/// Replace the generated task until one has a time limit.
fn roll_timed_task(session: &mut TestSession<'_>) -> TaskId {
    (0..500)
        .find_map(|_| {
            let active = session.active_task()?;
            if active.task.time_limit_minutes.is_some() {
                return Some(active.task.id);
            }
            session.generate_task().ok()?;
            None
        })
        .expect("the catalog contains timed templates")
}

// ---------------------------------------------------------------------------
// Character and generation
// ---------------------------------------------------------------------------

#[test]
fn new_character_gets_a_first_task() {
    let clock = ManualClock::new(START_MS);
    let session = with_character(&clock);

    assert_eq!(session.character().map(|c| c.level), Some(1));
    assert_eq!(session.counters().sequence, 1);
    assert_eq!(phase(&session), Some(TaskPhase::Generated));
    assert_eq!(
        session.presenter().last_task(),
        Some((active_id(&session), RenderMode::Initial))
    );
    assert!(session.store().load(StoreKey::Character).unwrap().is_some());
    assert_eq!(session.store().load(StoreKey::Sequence).unwrap().as_deref(), Some("1"));
}

#[test]
fn invalid_setup_is_reported_and_nothing_created() {
    let clock = ManualClock::new(START_MS);
    let mut session = open_with(&clock, MemoryStore::new(), GameConfig::default());
    let result = session.create_character(CharacterSetup::default());

    assert!(matches!(result, Err(SessionError::Setup(_))));
    assert!(session.character().is_none());
    assert!(session.presenter().saw(Severity::Error, "Error: Name missing."));
}

#[test]
fn second_character_is_refused() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let result = session.create_character(setup());
    assert!(matches!(result, Err(SessionError::CharacterExists)));
}

#[test]
fn generate_replaces_unaccepted_task_but_not_accepted_one() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let first = active_id(&session);

    let second = session.generate_task().unwrap().unwrap();
    assert_ne!(first, second);
    assert_eq!(session.counters().sequence, 2);

    session.accept(second).unwrap();
    let result = session.generate_task();
    assert!(matches!(result, Err(SessionError::TaskInProgress)));
    assert!(session.presenter().saw(Severity::Error, "Resolve current task."));
    assert_eq!(active_id(&session), second);
}

#[test]
fn empty_catalog_reports_no_tasks() {
    let clock = ManualClock::new(START_MS);
    let catalog = build_catalog().with_templates(Vec::new()).unwrap();
    let mut session: TestSession<'_> = Session::open(
        MemoryStore::new(),
        &clock,
        RecordingPresenter::new(),
        SmallRng::seed_from_u64(1),
        catalog,
        GameConfig::default(),
    )
    .unwrap();

    session.create_character(setup()).unwrap();
    assert!(session.active_task().is_none());
    assert!(session.presenter().saw(Severity::Error, "No tasks available!"));
    assert_eq!(session.generate_task().unwrap(), None);
}

// ---------------------------------------------------------------------------
// Lifecycle guards
// ---------------------------------------------------------------------------

#[test]
fn stale_id_is_a_mismatch() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let result = session.accept(TaskId::new());

    assert!(matches!(result, Err(SessionError::TaskMismatch)));
    assert!(session.presenter().saw(Severity::Error, "Task mismatch."));
    assert_eq!(phase(&session), Some(TaskPhase::Generated));
}

#[test]
fn accepted_task_cannot_be_declined() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let id = active_id(&session);
    session.accept(id).unwrap();

    let result = session.decline(id);
    assert!(matches!(
        result,
        Err(SessionError::Lifecycle(LifecycleError::TaskInProgress { .. }))
    ));
    assert_eq!(session.counters().consecutive_skips, 0);
}

#[test]
fn running_timer_blocks_accept_fail_and_reset() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let id = roll_timed_task(&mut session);

    session.start_timer(id).unwrap();
    assert_eq!(phase(&session), Some(TaskPhase::TimerRunning));
    assert!(session.active_task().unwrap().task.timer_running);
    assert_eq!(session.presenter().last_task(), Some((id, RenderMode::TimerActive)));

    assert!(matches!(
        session.accept(id),
        Err(SessionError::Lifecycle(LifecycleError::TimerActive { .. }))
    ));
    assert!(matches!(
        session.fail(id),
        Err(SessionError::Lifecycle(LifecycleError::TimerActive { .. }))
    ));
    assert!(matches!(
        session.start_timer(id),
        Err(SessionError::Lifecycle(LifecycleError::TimerActive { .. }))
    ));
    assert!(matches!(session.begin_reset(), Err(SessionError::ResetDuringTimer)));
}

#[test]
fn untimed_task_has_no_timer() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let untimed = (0..500).find_map(|_| {
        let active = session.active_task()?;
        if active.task.time_limit_minutes.is_none() {
            return Some(active.task.id);
        }
        session.generate_task().ok()?;
        None
    });
    let Some(id) = untimed else { return };

    assert!(matches!(session.start_timer(id), Err(SessionError::NoTimeLimit)));
    assert!(
        session
            .presenter()
            .saw(Severity::Error, "does not have a valid time limit")
    );
}

// ---------------------------------------------------------------------------
// Completion and failure
// ---------------------------------------------------------------------------

#[test]
fn patient_completion_rewards_and_moves_on() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let first = active_id(&session);
    let skill = session.active_task().unwrap().task.skill;

    let outcome = complete_patiently(&mut session, &clock);
    assert!(matches!(outcome, CompletionOutcome::Completed { .. }));
    let CompletionOutcome::Completed { xp_gain, events, cooldown_started } = outcome else {
        return;
    };
    assert!(xp_gain > 0);
    assert!(!events.is_empty());
    assert!(!cooldown_started);

    let character = session.character().unwrap();
    assert_eq!(character.skill_level(skill), 2);
    assert!(character.xp < 100);
    assert_eq!(session.counters().session_completions, 1);
    assert_ne!(active_id(&session), first);
    assert_eq!(session.counters().sequence, 2);
    assert!(session.presenter().saw(Severity::Success, "completed successfully!"));
}

#[test]
fn cheat_threshold_resets_on_the_fifth_attempt() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let id = active_id(&session);
    session.accept(id).unwrap();

    for attempt in 1..=4 {
        let outcome = session.complete(id).unwrap();
        assert!(
            matches!(outcome, CompletionOutcome::CheatDetected { attempts, .. } if attempts == attempt)
        );
        assert!(session.cheat_interrupt_pending());
        assert!(session.active_task().is_none());
        assert!(matches!(
            session.generate_task(),
            Err(SessionError::CheatInterruptPending)
        ));

        session.acknowledge_cheat().unwrap();
        assert_eq!(active_id(&session), id);
        assert_eq!(phase(&session), Some(TaskPhase::Accepted));
        assert_eq!(session.presenter().last_task(), Some((id, RenderMode::Accepted)));
    }
    assert_eq!(session.counters().cheat_attempts, 4);
    assert!(session.character().is_some());

    let outcome = session.complete(id).unwrap();
    assert_eq!(outcome, CompletionOutcome::CheatReset { attempts: 5 });
    assert!(session.character().is_none());
    assert_eq!(session.counters(), SessionCounters::default());
    assert!(session.store().is_empty());
    assert!(
        session
            .presenter()
            .saw(Severity::Error, "Cheaters get what they deserve.")
    );
}

#[test]
fn restored_task_completes_once_enough_time_passed() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let id = active_id(&session);
    session.accept(id).unwrap();

    clock.advance(1_000);
    assert!(matches!(
        session.complete(id).unwrap(),
        CompletionOutcome::CheatDetected { attempts: 1, .. }
    ));
    session.acknowledge_cheat().unwrap();
    assert!(matches!(session.acknowledge_cheat(), Err(SessionError::NoCheatInterrupt)));

    clock.advance(PATIENT_MS);
    assert!(matches!(
        session.complete(id).unwrap(),
        CompletionOutcome::Completed { .. }
    ));
    assert_eq!(session.counters().cheat_attempts, 1);
}

#[test]
fn manual_failure_resets_skips() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    for _ in 0..2 {
        session.decline(active_id(&session)).unwrap();
    }
    assert_eq!(session.counters().consecutive_skips, 2);

    let id = active_id(&session);
    session.accept(id).unwrap();
    session.fail(id).unwrap();
    assert_eq!(session.counters().consecutive_skips, 0);
    assert!(session.presenter().saw(Severity::Error, "failed."));
    assert_eq!(phase(&session), Some(TaskPhase::Generated));
}

#[test]
fn expired_timer_dismissal_is_an_automatic_failure() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    for _ in 0..3 {
        session.decline(active_id(&session)).unwrap();
    }
    let id = roll_timed_task(&mut session);
    let minutes = session.active_task().unwrap().task.time_limit_minutes.unwrap();

    session.start_timer(id).unwrap();
    let mut ticks: u32 = 0;
    while let Some(tick) = session.tick_timer() {
        ticks = ticks.saturating_add(1);
        if tick == CountdownTick::Expired {
            break;
        }
    }
    assert_eq!(ticks, minutes.saturating_mul(60));
    assert_eq!(phase(&session), Some(TaskPhase::TimeExpired));
    assert!(!session.active_task().unwrap().task.timer_running);
    assert!(session.tick_timer().is_none());
    assert!(session.presenter().saw(Severity::Info, "Time's up!"));

    session.dismiss_expired().unwrap();
    assert!(session.presenter().saw(Severity::Warning, "due to dismissal"));
    assert!(
        session
            .presenter()
            .saw(Severity::Error, "(time expired or dismissed)")
    );
    assert_eq!(session.counters().consecutive_skips, 3);
    assert_ne!(active_id(&session), id);
    assert!(matches!(session.dismiss_expired(), Err(SessionError::NoExpiredTimer)));
}

#[test]
fn expired_timer_can_be_reported_completed() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let id = roll_timed_task(&mut session);
    session.start_timer(id).unwrap();
    while session.tick_timer() != Some(CountdownTick::Expired) {}
    clock.advance(PATIENT_MS);

    let outcome = session.report_expired(true).unwrap();
    assert!(matches!(outcome, Some(CompletionOutcome::Completed { .. })));
    assert_eq!(session.counters().session_completions, 1);
}

// ---------------------------------------------------------------------------
// Skips
// ---------------------------------------------------------------------------

#[test]
fn skip_penalty_activates_after_thirty_five_declines() {
    let clock = ManualClock::new(START_MS);
    let mut store = MemoryStore::new();
    store
        .save_json(StoreKey::Character, &stored_character(90))
        .unwrap();
    let mut session = open_with(&clock, store, GameConfig::default());
    session.resume().unwrap();

    for n in 1..=35_u32 {
        let outcome = session.decline(active_id(&session)).unwrap();
        match n {
            25 => assert_eq!(outcome, SkipOutcome::Warned),
            35 => assert_eq!(outcome, SkipOutcome::PenaltyActivated),
            _ => assert_eq!(outcome, SkipOutcome::Cancelled),
        }
    }
    assert_eq!(session.character().unwrap().xp, 90);
    assert!(session.counters().skip_penalty_active);

    for expected_xp in [85, 80] {
        let outcome = session.decline(active_id(&session)).unwrap();
        assert_eq!(outcome, SkipOutcome::Penalized { xp: 5 });
        assert_eq!(session.character().unwrap().xp, expected_xp);
    }
    assert!(session.presenter().saw(Severity::Warning, "-5 XP penalty applied"));

    complete_patiently(&mut session, &clock);
    let counters = session.counters();
    assert_eq!(counters.consecutive_skips, 0);
    assert!(!counters.skip_penalty_active);
    assert!(
        session
            .presenter()
            .saw(Severity::Success, "Skip penalty protocol has been reset.")
    );
}

// ---------------------------------------------------------------------------
// Cooldown
// ---------------------------------------------------------------------------

#[test]
fn cooldown_locks_actions_until_it_expires() {
    let clock = ManualClock::new(START_MS);
    let config = GameConfig {
        cooldown: CooldownConfig {
            tasks_before_cooldown: 2,
            duration_ms: 60_000,
        },
        ..GameConfig::default()
    };
    let mut session = open_with(&clock, MemoryStore::new(), config);
    session.create_character(setup()).unwrap();

    complete_patiently(&mut session, &clock);
    let outcome = complete_patiently(&mut session, &clock);
    assert!(matches!(
        outcome,
        CompletionOutcome::Completed { cooldown_started: true, .. }
    ));
    assert!(session.is_locked());
    assert!(session.active_task().is_none());
    assert_eq!(session.cooldown_remaining().as_deref(), Some("00:01:00"));

    assert!(matches!(
        session.generate_task(),
        Err(SessionError::Lockout { .. })
    ));
    assert!(matches!(session.profile(), Err(SessionError::Lockout { .. })));
    assert!(matches!(session.begin_reset(), Err(SessionError::Lockout { .. })));
    assert!(
        session
            .presenter()
            .saw(Severity::Error, "System Lockout: New tasks unavailable.")
    );

    clock.advance(60_000);
    let id = session.generate_task().unwrap();
    assert!(id.is_some());
    assert!(!session.is_locked());
    assert_eq!(session.counters().session_completions, 0);
    assert_eq!(session.counters().cooldown_end_ms, None);
    assert!(session.presenter().saw(Severity::Success, "Cooldown Finished."));
}

#[test]
fn expired_cooldown_is_cleared_on_load() {
    let clock = ManualClock::new(START_MS);
    let mut store = MemoryStore::new();
    store.save_json(StoreKey::Character, &stored_character(0)).unwrap();
    store.save_scalar(StoreKey::CooldownEnd, START_MS.saturating_sub(1)).unwrap();
    store.save_scalar(StoreKey::SessionCompletions, 20).unwrap();
    store.save_scalar(StoreKey::ConsecutiveSkips, 30).unwrap();
    store.save_scalar(StoreKey::SkipPenaltyActive, true).unwrap();

    let session = open_with(&clock, store, GameConfig::default());
    let counters = session.counters();
    assert_eq!(counters.cooldown_end_ms, None);
    assert_eq!(counters.session_completions, 0);
    assert_eq!(counters.consecutive_skips, 0);
    assert!(!counters.skip_penalty_active);
    assert!(session.store().load(StoreKey::CooldownEnd).unwrap().is_none());
}

#[test]
fn pending_cooldown_survives_reload() {
    let clock = ManualClock::new(START_MS);
    let mut store = MemoryStore::new();
    store.save_json(StoreKey::Character, &stored_character(0)).unwrap();
    store.save_scalar(StoreKey::CooldownEnd, START_MS.saturating_add(5_000)).unwrap();
    store.save_scalar(StoreKey::SessionCompletions, 20).unwrap();

    let mut session = open_with(&clock, store, GameConfig::default());
    session.resume().unwrap();
    assert!(session.is_locked());
    assert!(session.active_task().is_none());
    assert!(session.presenter().saw(Severity::Error, "SYSTEM LOCKOUT ACTIVE"));
    assert_eq!(session.counters().session_completions, 20);
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn loading_heals_skills_and_tolerates_bad_values() {
    let clock = ManualClock::new(START_MS);
    let mut character = stored_character(40);
    character.skills.remove(&Skill::Investing);
    let mut store = MemoryStore::new();
    store.save_json(StoreKey::Character, &character).unwrap();
    store.save(StoreKey::Sequence, "not a number").unwrap();
    store.save_scalar(StoreKey::CheatAttempts, 3).unwrap();

    let session = open_with(&clock, store, GameConfig::default());
    let loaded = session.character().unwrap();
    assert_eq!(loaded.skill_level(Skill::Investing), 1);
    assert_eq!(loaded.xp, 40);
    assert_eq!(session.counters().sequence, 0);
    assert_eq!(session.counters().cheat_attempts, 3);

    let stored: Character = session
        .store()
        .load_json(StoreKey::Character)
        .unwrap()
        .unwrap();
    assert_eq!(stored.skill_level(Skill::Investing), 1);
}

#[test]
fn empty_store_opens_to_setup() {
    let clock = ManualClock::new(START_MS);
    let mut session = open_with(&clock, MemoryStore::new(), GameConfig::default());
    session.resume().unwrap();

    assert!(session.character().is_none());
    assert_eq!(session.counters(), SessionCounters::default());
    assert!(session.presenter().saw(Severity::Info, "Please create your character."));
    assert!(matches!(session.generate_task(), Err(SessionError::NoCharacter)));
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

#[test]
fn reset_needs_five_confirmations() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    assert!(matches!(session.confirm_reset(), Err(SessionError::ResetNotStarted)));

    session.begin_reset().unwrap();
    for _ in 0..4 {
        assert!(matches!(session.confirm_reset().unwrap(), ResetStep::Prompt(_)));
        assert!(session.character().is_some());
    }
    assert_eq!(session.confirm_reset().unwrap(), ResetStep::Confirmed);
    assert!(session.character().is_none());
    assert!(session.store().is_empty());
}

#[test]
fn cancelled_reset_keeps_progress() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    session.begin_reset().unwrap();
    session.confirm_reset().unwrap();
    session.cancel_reset().unwrap();

    assert!(session.character().is_some());
    assert!(session.presenter().saw(Severity::Info, "Reset cancelled."));
    assert!(matches!(session.cancel_reset(), Err(SessionError::ResetNotStarted)));
}

#[test]
fn full_reset_is_idempotent() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    complete_patiently(&mut session, &clock);
    session.decline(active_id(&session)).unwrap();

    session.full_reset().unwrap();
    let once = (
        session.character().cloned(),
        session.counters(),
        session.active_task().cloned(),
        session.store().clone(),
    );
    session.full_reset().unwrap();
    let twice = (
        session.character().cloned(),
        session.counters(),
        session.active_task().cloned(),
        session.store().clone(),
    );

    assert_eq!(once, twice);
    assert_eq!(once.1, SessionCounters::default());
    assert!(once.3.is_empty());
}

#[test]
fn profile_reflects_progress() {
    let clock = ManualClock::new(START_MS);
    let mut session = with_character(&clock);
    let skill = session.active_task().unwrap().task.skill;
    complete_patiently(&mut session, &clock);

    let profile = session.profile().unwrap();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.unique_skill, "None");
    let level = profile
        .domains
        .iter()
        .flat_map(|d| d.skills.iter())
        .find(|line| line.skill == skill)
        .map(|line| line.level);
    assert_eq!(level, Some(2));
}
