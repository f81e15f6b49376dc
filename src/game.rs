//! The Start → Playing → GameOver state machine.

use std::thread;
use std::time::Instant;

use anyhow::Context;
use rand::Rng;
use tracing::{info, warn};

use crate::compute::{init_state, quit_game, start_game, tick};
use crate::config::Settings;
use crate::entities::{GameState, GameStatus};
use crate::frame::{compose, Screen};
use crate::input::{Command, InputQueue};

/// Play one round and return the final state.
///
/// Blocks on the title screen until the player starts or quits, then runs
/// one simulation tick per frame until the game is over.  A frame the
/// screen fails to present is logged and skipped.
pub fn run_game<S: Screen, R: Rng>(
    screen: &mut S,
    input: &InputQueue,
    settings: &Settings,
    rng: &mut R,
) -> anyhow::Result<GameState> {
    let state = init_state();
    screen
        .show_start()
        .context("failed to draw the title screen")?;

    let state = match wait_for_start(input) {
        Command::Start => start_game(&state),
        _ => {
            info!("quit from title screen");
            return Ok(quit_game(&state));
        }
    };
    info!(aliens = state.aliens.len(), "game started");

    Ok(game_loop(screen, state, input, settings, rng))
}

/// Only Start and Quit mean anything on the title screen.
fn wait_for_start(input: &InputQueue) -> Command {
    loop {
        match input.wait() {
            command @ (Command::Start | Command::Quit) => return command,
            _ => {}
        }
    }
}

fn game_loop<S: Screen, R: Rng>(
    screen: &mut S,
    mut state: GameState,
    input: &InputQueue,
    settings: &Settings,
    rng: &mut R,
) -> GameState {
    while state.status == GameStatus::Playing {
        let frame_start = Instant::now();

        state = tick(&state, input.poll(), settings, rng);

        if let Err(e) = screen.present(&compose(&state)) {
            warn!(error = %e, tick = state.tick, "failed to present frame");
        }

        if state.status == GameStatus::GameOver {
            info!(
                score = state.score,
                outcome = ?state.outcome,
                ticks = state.tick,
                "game over"
            );
            thread::sleep(settings.game_over_pause);
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < settings.tick_interval {
            thread::sleep(settings.tick_interval - elapsed);
        }
    }
    state
}
