use std::time::Duration;

use anyhow::ensure;

use crate::geometry::{Point, Size};

// ── World ─────────────────────────────────────────────────────────────────────

pub const WORLD_WIDTH: i32 = 400;
pub const WORLD_HEIGHT: i32 = 300;

// ── Formation ─────────────────────────────────────────────────────────────────

pub const ALIENS_PER_ROW: usize = 8;
pub const ALIEN_START_X: i32 = 100;
/// Horizontal pitch of the formation.  Also the wall margin used by the
/// bounce check.
pub const ALIEN_SPACING: i32 = 30;
/// Top-left y of each row, top row first.
pub const ALIEN_ROW_Y: [i32; 3] = [30, 55, 80];
pub const ALIEN_SPEED: i32 = 5;
pub const ALIEN_DESCENT: i32 = 10;
/// An alien whose y passes this line has invaded.
pub const INVASION_LINE: i32 = 180;

// ── Cannon, beam, bombs ───────────────────────────────────────────────────────

pub const CANNON_START: Point = Point::new(50, 250);
pub const CANNON_STEP: i32 = 10;
/// Horizontal offset that centres the beam over the cannon.
pub const BEAM_OFFSET_X: i32 = 7;
pub const BEAM_REST_Y: i32 = 250;
pub const BEAM_SPEED: i32 = 10;
/// Horizontal offset of a bomb relative to the alien dropping it.
pub const BOMB_OFFSET_X: i32 = 7;
pub const BOMB_SPEED: i32 = 10;
pub const BOMB_PROBABILITY: f64 = 0.005;

// ── Runtime ───────────────────────────────────────────────────────────────────

pub const INPUT_QUEUE_CAPACITY: usize = 1000;
pub const TICK_INTERVAL: Duration = Duration::from_millis(33); // ≈30 FPS
pub const GAME_OVER_PAUSE: Duration = Duration::from_secs(1);

/// Tunable settings.  `Default` reproduces the classic arcade feel; the
/// binary overrides individual fields from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub world: Size,
    pub alien_speed: i32,
    pub alien_descent: i32,
    pub invasion_line: i32,
    pub cannon_step: i32,
    /// Keep the cannon inside the window.  When false the cannon can wander
    /// off either edge.
    pub clamp_cannon: bool,
    pub beam_speed: i32,
    pub bomb_speed: i32,
    /// Chance per alive alien per tick of dropping a bomb.
    pub bomb_probability: f64,
    pub tick_interval: Duration,
    pub game_over_pause: Duration,
    pub input_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world: Size::new(WORLD_WIDTH, WORLD_HEIGHT),
            alien_speed: ALIEN_SPEED,
            alien_descent: ALIEN_DESCENT,
            invasion_line: INVASION_LINE,
            cannon_step: CANNON_STEP,
            clamp_cannon: true,
            beam_speed: BEAM_SPEED,
            bomb_speed: BOMB_SPEED,
            bomb_probability: BOMB_PROBABILITY,
            tick_interval: TICK_INTERVAL,
            game_over_pause: GAME_OVER_PAUSE,
            input_capacity: INPUT_QUEUE_CAPACITY,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.bomb_probability),
            "bomb probability must be within [0, 1], got {}",
            self.bomb_probability
        );
        ensure!(self.input_capacity > 0, "input queue capacity must be non-zero");
        ensure!(
            self.alien_speed > 0 && self.beam_speed > 0 && self.bomb_speed > 0,
            "speeds must be positive"
        );
        ensure!(self.alien_descent > 0, "alien descent must be positive");
        ensure!(self.cannon_step > 0, "cannon step must be positive");

        let formation_right = ALIEN_START_X + ALIEN_SPACING * ALIENS_PER_ROW as i32;
        ensure!(
            self.world.width > formation_right + ALIEN_SPACING
                && self.world.height > CANNON_START.y,
            "world {}x{} is too small for the alien formation",
            self.world.width,
            self.world.height
        );
        Ok(())
    }
}
