//! All game entity types, plus the factories that create them.

use crate::config::{ALIEN_START_X, BEAM_OFFSET_X, BEAM_REST_Y, CANNON_START};
use crate::geometry::{Point, Rect, Size};

// ── Sprite sheet ──────────────────────────────────────────────────────────────

/// Named regions of the sprite sheet.  Actor sizes come from the region of
/// their primary sprite, so hitboxes always match what is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Cannon,
    CannonExplode,
    Alien1,
    Alien1Alt,
    Alien2,
    Alien2Alt,
    Alien3,
    Alien3Alt,
    AlienExplode,
    Beam,
    Bomb,
}

impl SpriteId {
    /// Region of the sheet holding this sprite.
    pub const fn region(self) -> Rect {
        match self {
            SpriteId::Cannon => Rect::from_corners(20, 47, 38, 59),
            SpriteId::CannonExplode => Rect::from_corners(0, 47, 16, 57),
            SpriteId::Alien1 => Rect::from_corners(0, 0, 20, 14),
            SpriteId::Alien1Alt => Rect::from_corners(20, 0, 40, 14),
            SpriteId::Alien2 => Rect::from_corners(0, 14, 20, 26),
            SpriteId::Alien2Alt => Rect::from_corners(20, 14, 40, 26),
            SpriteId::Alien3 => Rect::from_corners(0, 27, 20, 40),
            SpriteId::Alien3Alt => Rect::from_corners(20, 27, 40, 40),
            SpriteId::AlienExplode => Rect::from_corners(0, 60, 16, 68),
            SpriteId::Beam => Rect::from_corners(20, 60, 22, 65),
            SpriteId::Bomb => Rect::from_corners(0, 70, 10, 79),
        }
    }
}

// ── Actor kinds ───────────────────────────────────────────────────────────────

/// Which row of the formation an alien belongs to.  Decides its look and
/// its worth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlienRow {
    Top,
    Middle,
    Bottom,
}

impl AlienRow {
    pub const ALL: [AlienRow; 3] = [AlienRow::Top, AlienRow::Middle, AlienRow::Bottom];

    pub const fn points(self) -> u32 {
        match self {
            AlienRow::Top => 30,
            AlienRow::Middle => 20,
            AlienRow::Bottom => 10,
        }
    }

    /// Primary and alternate animation frames.
    pub const fn sprites(self) -> (SpriteId, SpriteId) {
        match self {
            AlienRow::Top => (SpriteId::Alien1, SpriteId::Alien1Alt),
            AlienRow::Middle => (SpriteId::Alien2, SpriteId::Alien2Alt),
            AlienRow::Bottom => (SpriteId::Alien3, SpriteId::Alien3Alt),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Cannon,
    Beam,
    Alien(AlienRow),
    Bomb,
}

impl ActorKind {
    /// Sprite drawn for this kind in its primary variant.
    pub const fn sprite(self) -> SpriteId {
        match self {
            ActorKind::Cannon => SpriteId::Cannon,
            ActorKind::Beam => SpriteId::Beam,
            ActorKind::Alien(row) => row.sprites().0,
            ActorKind::Bomb => SpriteId::Bomb,
        }
    }
}

/// Which representation the renderer should use for an actor this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Alternate,
    /// Shown for the single frame in which the actor dies.
    Exploding,
}

// ── Actor ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub kind: ActorKind,
    /// Top-left corner in world pixels.
    pub position: Point,
    /// Fixed at creation.
    pub size: Size,
    /// Dead actors neither move nor collide.  For the beam this doubles as
    /// "in flight".
    pub alive: bool,
    /// Score awarded when an alien is shot down.  Zero for everything else.
    pub points: u32,
    pub variant: Variant,
}

impl Actor {
    fn new(kind: ActorKind, position: Point, alive: bool, points: u32) -> Self {
        Self {
            kind,
            position,
            size: kind.sprite().region().size(),
            alive,
            points,
            variant: Variant::Primary,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.position, self.size)
    }

    /// Whether the renderer should show this actor at all.
    pub fn is_visible(&self) -> bool {
        self.alive || self.variant == Variant::Exploding
    }
}

// ── Factories ─────────────────────────────────────────────────────────────────

/// `row` picks the sprite pair; `points` is what shooting it is worth.  The
/// formation passes `row.points()`.
pub fn create_alien(x: i32, y: i32, row: AlienRow, points: u32) -> Actor {
    Actor::new(ActorKind::Alien(row), Point::new(x, y), true, points)
}

pub fn create_bomb(origin_x: i32, origin_y: i32) -> Actor {
    Actor::new(ActorKind::Bomb, Point::new(origin_x, origin_y), true, 0)
}

pub fn create_cannon() -> Actor {
    Actor::new(ActorKind::Cannon, CANNON_START, true, 0)
}

/// The beam starts docked over the cannon and inactive.
pub fn create_beam() -> Actor {
    Actor::new(
        ActorKind::Beam,
        Point::new(CANNON_START.x + BEAM_OFFSET_X, BEAM_REST_Y),
        false,
        0,
    )
}

/// Three rows of `per_row` aliens starting at `ALIEN_START_X`, `spacing`
/// pixels apart, in creation order (row by row, left to right).
pub fn create_formation(per_row: usize, spacing: i32, rows_y: &[i32]) -> Vec<Actor> {
    AlienRow::ALL
        .iter()
        .zip(rows_y)
        .flat_map(|(&row, &y)| {
            (0..per_row).map(move |i| {
                create_alien(ALIEN_START_X + spacing * i as i32, y, row, row.points())
            })
        })
        .collect()
}

// ── Game state ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen, waiting for start or quit.
    Start,
    Playing,
    /// Terminal.
    GameOver,
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    CannonDestroyed,
    /// An alien crossed the invasion line.
    Invaded,
    /// Every alien was shot down.
    Cleared,
}

/// Horizontal heading of the formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The entire game state.  Owned by the game loop and threaded through the
/// simulation by value.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub cannon: Actor,
    /// Singleton; `alive` means in flight.
    pub beam: Actor,
    /// Populated once per round, in creation order.  Only ever shrinks in
    /// effect, by aliens dying.
    pub aliens: Vec<Actor>,
    pub bombs: Vec<Actor>,
    pub direction: Direction,
    pub score: u32,
    /// Monotonic tick counter; drives the animation parity.
    pub tick: u64,
    pub status: GameStatus,
    pub outcome: Option<Outcome>,
}

impl GameState {
    pub fn alive_aliens(&self) -> impl Iterator<Item = &Actor> {
        self.aliens.iter().filter(|a| a.alive)
    }
}
