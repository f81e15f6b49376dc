//! What to draw this tick.  The simulation never talks to the terminal; it
//! hands a `Frame` to whatever `Screen` the game loop was given.

use std::io;

use crate::entities::{ActorKind, GameState, GameStatus, Outcome, SpriteId, Variant};
use crate::geometry::Point;

/// One sprite placed at a world position, composited over what came before.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub sprite: SpriteId,
    pub position: Point,
}

/// A composed frame: background first, then `draws` in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub draws: Vec<Draw>,
    pub score: u32,
    pub status: GameStatus,
    pub outcome: Option<Outcome>,
}

/// Renderer plus display transport.
pub trait Screen {
    /// Title screen, shown while waiting for the player to start.
    fn show_start(&mut self) -> io::Result<()>;

    /// Push one composed frame to the output device.
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Sprite for an actor in its current variant.
pub fn sprite_for(kind: ActorKind, variant: Variant) -> SpriteId {
    match (kind, variant) {
        (ActorKind::Alien(_), Variant::Exploding) => SpriteId::AlienExplode,
        (ActorKind::Alien(row), Variant::Alternate) => row.sprites().1,
        (ActorKind::Cannon, Variant::Exploding) => SpriteId::CannonExplode,
        (kind, _) => kind.sprite(),
    }
}

/// Snapshot → frame.  Draw order is aliens, bombs, cannon, beam.
pub fn compose(state: &GameState) -> Frame {
    let beam = state.beam.alive.then_some(&state.beam);
    let draws = state
        .aliens
        .iter()
        .chain(&state.bombs)
        .chain(std::iter::once(&state.cannon))
        .filter(|actor| actor.is_visible())
        .chain(beam)
        .map(|actor| Draw {
            sprite: sprite_for(actor.kind, actor.variant),
            position: actor.position,
        })
        .collect();

    Frame {
        draws,
        score: state.score,
        status: state.status,
        outcome: state.outcome,
    }
}
