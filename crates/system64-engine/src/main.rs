//! Terminal front-end for the System 64 progression engine.
//!
//! Reads one command per line from stdin and drives a [`Session`] backed by
//! a JSON state file. A one-second interval advances running countdowns and
//! lifts an expired cooldown while the player is idle.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `system64-config.yaml`
//! 2. Initialize structured logging (tracing, to stderr)
//! 3. Open the state file
//! 4. Seed the RNG
//! 5. Open the session and put the opening screen up
//! 6. Run the command loop until `quit` or end of input

mod commands;
mod error;
mod terminal;

use std::path::Path;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use system64_catalog::build_catalog;
use system64_core::{GameConfig, Presenter, Session, SessionError, SystemClock};
use system64_db::{JsonFileStore, KeyValueStore};
use system64_types::{Notification, TaskId};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::commands::{Command, HELP_TEXT};
use crate::error::EngineError;
use crate::terminal::{TerminalPresenter, print_profile};

const CONFIG_PATH: &str = "system64-config.yaml";

type TerminalSession<S> = Session<S, SystemClock, TerminalPresenter, SmallRng>;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if startup fails or a session operation fails
/// internally. Refused player actions are reported in-game and do not end
/// the process.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), EngineError> {
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    info!(
        state_path = %config.storage.path.display(),
        seeded = config.rng_seed.is_some(),
        "system64-engine starting"
    );

    let store = JsonFileStore::open(&config.storage.path)?;
    let rng = config
        .rng_seed
        .map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);

    let mut session = Session::open(
        store,
        SystemClock::new(),
        TerminalPresenter::new(),
        rng,
        build_catalog(),
        config,
    )?;
    println!("System 64. Type `help` for commands.");
    settle(session.resume())?;

    run(&mut session).await?;
    info!("system64-engine stopped");
    Ok(())
}

/// Load `system64-config.yaml`, falling back to defaults when it is absent.
fn load_config() -> Result<GameConfig, EngineError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Ok(GameConfig::from_file(path)?)
    } else {
        let mut config = GameConfig::default();
        config.storage.apply_env_overrides();
        Ok(config)
    }
}

/// Multiplex stdin commands with the one-second tick.
async fn run<S: KeyValueStore>(session: &mut TerminalSession<S>) -> Result<(), EngineError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                session.tick_timer();
                session.refresh_cooldown()?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => dispatch(session, command)?,
                    Err(error) => println!("{error}"),
                }
            }
        }
    }
    Ok(())
}

/// Apply one command to the session.
fn dispatch<S: KeyValueStore>(
    session: &mut TerminalSession<S>,
    command: Command,
) -> Result<(), EngineError> {
    debug!(?command, "Command received");
    let result = match command {
        Command::Create(setup) => session.create_character(setup),
        Command::Next => session.generate_task().map(|_| ()),
        Command::Accept => on_active(session, |s, id| s.accept(id)),
        Command::Decline => on_active(session, |s, id| s.decline(id).map(|_| ())),
        Command::Timer => on_active(session, |s, id| s.start_timer(id)),
        Command::Done => on_active(session, |s, id| s.complete(id).map(|_| ())),
        Command::Fail => on_active(session, |s, id| s.fail(id)),
        Command::Expired(completed) => session.report_expired(completed).map(|_| ()),
        Command::Dismiss => session.dismiss_expired(),
        Command::Ack => session.acknowledge_cheat(),
        Command::Profile => session.profile().map(|profile| print_profile(&profile)),
        Command::Reset => session.begin_reset().map(|_| ()),
        Command::Confirm => session.confirm_reset().map(|_| ()),
        Command::Cancel => session.cancel_reset(),
        Command::Help => {
            println!("{HELP_TEXT}");
            Ok(())
        }
        Command::Quit => Ok(()),
    };
    settle(result)
}

/// Run `action` against the active task, or say there is none.
fn on_active<S: KeyValueStore>(
    session: &mut TerminalSession<S>,
    action: impl FnOnce(&mut TerminalSession<S>, TaskId) -> Result<(), SessionError>,
) -> Result<(), SessionError> {
    match session.active_task().map(|active| active.task.id) {
        Some(id) => action(session, id),
        None => {
            let error = SessionError::NoActiveTask;
            session
                .presenter_mut()
                .notify(Notification::error(error.to_string()));
            Err(error)
        }
    }
}

/// Swallow rejections, which the player has already seen; keep internal
/// failures.
fn settle(result: Result<(), SessionError>) -> Result<(), EngineError> {
    match result {
        Err(error) if error.is_rejection() => Ok(()),
        other => other.map_err(EngineError::from),
    }
}
