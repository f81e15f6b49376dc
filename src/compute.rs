//! Game logic.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus settings and, where needed, an RNG handle) and returns a
//! brand-new `GameState`.  Side effects are limited to the injected RNG and
//! log output.

use rand::Rng;
use tracing::{debug, trace};

use crate::config::{
    Settings, ALIENS_PER_ROW, ALIEN_ROW_Y, ALIEN_SPACING, BEAM_OFFSET_X, BEAM_REST_Y,
    BOMB_OFFSET_X,
};
use crate::entities::{
    create_beam, create_bomb, create_cannon, create_formation, Actor, Direction, GameState,
    GameStatus, Outcome, Variant,
};
use crate::geometry::overlaps;
use crate::input::Command;

// ── Constructors & transitions ───────────────────────────────────────────────

/// Fresh round sitting on the title screen, formation already in place.
pub fn init_state() -> GameState {
    GameState {
        cannon: create_cannon(),
        beam: create_beam(),
        aliens: create_formation(ALIENS_PER_ROW, ALIEN_SPACING, &ALIEN_ROW_Y),
        bombs: Vec::new(),
        direction: Direction::Right,
        score: 0,
        tick: 0,
        status: GameStatus::Start,
        outcome: None,
    }
}

/// Start → Playing.  Any other status is left untouched.
pub fn start_game(state: &GameState) -> GameState {
    if state.status != GameStatus::Start {
        return state.clone();
    }
    GameState {
        status: GameStatus::Playing,
        ..state.clone()
    }
}

/// End the game at the player's request.  Nothing leaves GameOver, so an
/// already finished game keeps its outcome.
pub fn quit_game(state: &GameState) -> GameState {
    let mut next = state.clone();
    end_game(&mut next, Outcome::Quit);
    next
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_cannon_left(state: &GameState, settings: &Settings) -> GameState {
    GameState {
        cannon: shift_cannon(&state.cannon, -settings.cannon_step, settings),
        ..state.clone()
    }
}

pub fn move_cannon_right(state: &GameState, settings: &Settings) -> GameState {
    GameState {
        cannon: shift_cannon(&state.cannon, settings.cannon_step, settings),
        ..state.clone()
    }
}

fn shift_cannon(cannon: &Actor, dx: i32, settings: &Settings) -> Actor {
    let mut x = cannon.position.x + dx;
    if settings.clamp_cannon {
        x = x.clamp(0, settings.world.width - cannon.size.width);
    }
    let mut cannon = cannon.clone();
    cannon.position.x = x;
    cannon
}

// ── Per-frame tick (nearly pure, RNG is injected) ─────────────────────────

/// Advance the simulation by one frame, applying at most one command.
/// All randomness comes through `rng` so callers control determinism.
pub fn tick(
    state: &GameState,
    command: Option<Command>,
    settings: &Settings,
    rng: &mut impl Rng,
) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    // ── 1. Apply input ───────────────────────────────────────────────────────
    let mut beam_requested = false;
    let mut next = match command {
        Some(Command::Quit) => return quit_game(state),
        Some(Command::MoveLeft) => move_cannon_left(state, settings),
        Some(Command::MoveRight) => move_cannon_right(state, settings),
        Some(Command::FireBeam) => {
            beam_requested = !state.beam.alive;
            state.clone()
        }
        Some(Command::Start) | None => state.clone(),
    };

    // ── 2. Move and animate the formation ────────────────────────────────────
    advance_aliens(&mut next, settings);

    // ── 3. Beam ↔ aliens ─────────────────────────────────────────────────────
    resolve_beam_hit(&mut next);

    // ── 4. Aliens drop bombs ─────────────────────────────────────────────────
    drop_bombs(&mut next, settings, rng);

    // ── 5. Bombs fall; bombs ↔ cannon ────────────────────────────────────────
    advance_bombs(&mut next, settings);

    // ── 6. Formation bounces off the walls ───────────────────────────────────
    bounce_formation(&mut next, settings);

    // ── 7. Beam launch and flight ────────────────────────────────────────────
    advance_beam(&mut next, beam_requested, settings);

    // ── 8. Invasion / wave cleared ───────────────────────────────────────────
    check_round_over(&mut next, settings);

    next.tick += 1;
    next
}

fn advance_aliens(state: &mut GameState, settings: &Settings) {
    let dx = settings.alien_speed * state.direction.sign();
    let variant = if state.tick % 2 == 0 {
        Variant::Primary
    } else {
        Variant::Alternate
    };
    for alien in &mut state.aliens {
        if alien.alive {
            alien.position.x += dx;
            alien.variant = variant;
        } else if alien.variant == Variant::Exploding {
            // the explosion has had its frame
            alien.variant = Variant::Primary;
        }
    }
}

/// First alive alien (in creation order) under the beam dies.  One hit per
/// tick at most.
fn resolve_beam_hit(state: &mut GameState) {
    if !state.beam.alive {
        return;
    }
    let Some(index) = state
        .aliens
        .iter()
        .position(|alien| alien.alive && overlaps(alien, &state.beam))
    else {
        return;
    };

    let alien = &mut state.aliens[index];
    alien.alive = false;
    alien.variant = Variant::Exploding;
    state.score += alien.points;
    debug!(
        alien = index,
        points = alien.points,
        score = state.score,
        "alien destroyed"
    );
    reset_beam(&mut state.beam);
}

fn drop_bombs(state: &mut GameState, settings: &Settings, rng: &mut impl Rng) {
    let p = settings.bomb_probability;
    let spawned: Vec<Actor> = state
        .aliens
        .iter()
        .filter(|alien| alien.alive)
        .filter(|_| rng.gen::<f64>() < p)
        .map(|alien| create_bomb(alien.position.x + BOMB_OFFSET_X, alien.position.y))
        .collect();
    for bomb in &spawned {
        trace!(x = bomb.position.x, y = bomb.position.y, "bomb dropped");
    }
    state.bombs.extend(spawned);
}

fn advance_bombs(state: &mut GameState, settings: &Settings) {
    for bomb in state.bombs.iter_mut().filter(|b| b.alive) {
        bomb.position.y += settings.bomb_speed;
    }
    // Off the bottom of the window: gone for good.
    state.bombs.retain(|b| b.alive && b.position.y < settings.world.height);

    let cannon_hit = state.cannon.alive
        && state
            .bombs
            .iter()
            .any(|bomb| overlaps(bomb, &state.cannon));
    if cannon_hit {
        state.cannon.alive = false;
        state.cannon.variant = Variant::Exploding;
        debug!(x = state.cannon.position.x, "cannon destroyed");
        end_game(state, Outcome::CannonDestroyed);
    }
}

/// Reverse and drop the formation once its leftmost or rightmost alive
/// alien reaches a wall margin.
fn bounce_formation(state: &mut GameState, settings: &Settings) {
    let (Some(left), Some(right)) = (
        state.alive_aliens().map(|a| a.position.x).min(),
        state.alive_aliens().map(|a| a.position.x).max(),
    ) else {
        return;
    };

    if left < ALIEN_SPACING || right > settings.world.width - 2 * ALIEN_SPACING {
        state.direction = state.direction.reversed();
        for alien in state.aliens.iter_mut().filter(|a| a.alive) {
            alien.position.y += settings.alien_descent;
        }
    }
}

fn advance_beam(state: &mut GameState, beam_requested: bool, settings: &Settings) {
    if beam_requested {
        state.beam.position = state.cannon.position;
        state.beam.position.x += BEAM_OFFSET_X;
        state.beam.position.y = BEAM_REST_Y;
        state.beam.alive = true;
        debug!(x = state.beam.position.x, "beam fired");
    }

    if state.beam.alive {
        state.beam.position.y -= settings.beam_speed;
        if state.beam.position.y < 0 {
            reset_beam(&mut state.beam);
        }
    }
}

fn reset_beam(beam: &mut Actor) {
    beam.alive = false;
    beam.position.y = BEAM_REST_Y;
}

fn check_round_over(state: &mut GameState, settings: &Settings) {
    if state
        .alive_aliens()
        .any(|a| a.position.y > settings.invasion_line)
    {
        end_game(state, Outcome::Invaded);
    } else if state.alive_aliens().next().is_none() {
        end_game(state, Outcome::Cleared);
    }
}

/// First outcome wins; GameOver is terminal.
fn end_game(state: &mut GameState, outcome: Outcome) {
    if state.status == GameStatus::GameOver {
        return;
    }
    state.status = GameStatus::GameOver;
    state.outcome = Some(outcome);
}
