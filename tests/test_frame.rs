use term_invaders::compute::{init_state, start_game};
use term_invaders::entities::*;
use term_invaders::frame::*;
use term_invaders::geometry::Point;

fn playing() -> GameState {
    start_game(&init_state())
}

fn sprites(frame: &Frame) -> Vec<SpriteId> {
    frame.draws.iter().map(|d| d.sprite).collect()
}

#[test]
fn fresh_round_draws_formation_then_cannon() {
    let frame = compose(&playing());
    assert_eq!(frame.draws.len(), 25);
    assert_eq!(
        frame.draws[0],
        Draw {
            sprite: SpriteId::Alien1,
            position: Point::new(100, 30),
        }
    );
    assert_eq!(frame.draws[8].sprite, SpriteId::Alien2);
    assert_eq!(frame.draws[16].sprite, SpriteId::Alien3);
    assert_eq!(
        frame.draws[24],
        Draw {
            sprite: SpriteId::Cannon,
            position: Point::new(50, 250),
        }
    );
    assert_eq!(frame.score, 0);
    assert_eq!(frame.status, GameStatus::Playing);
}

#[test]
fn beam_is_drawn_last_while_in_flight() {
    let mut s = playing();
    s.beam.alive = true;
    s.beam.position = Point::new(57, 120);
    s.bombs.push(create_bomb(200, 100));

    let frame = compose(&s);
    let names = sprites(&frame);
    assert_eq!(names.len(), 27);
    assert_eq!(names[24], SpriteId::Bomb);
    assert_eq!(names[25], SpriteId::Cannon);
    assert_eq!(
        frame.draws[26],
        Draw {
            sprite: SpriteId::Beam,
            position: Point::new(57, 120),
        }
    );
}

#[test]
fn dead_aliens_show_explosion_once_then_vanish() {
    let mut s = playing();
    s.aliens[0].alive = false;
    s.aliens[0].variant = Variant::Exploding;
    s.aliens[1].alive = false;

    let frame = compose(&s);
    assert_eq!(frame.draws.len(), 24);
    assert_eq!(frame.draws[0].sprite, SpriteId::AlienExplode);
    assert_eq!(frame.draws[1].sprite, SpriteId::Alien1);
    assert_eq!(frame.draws[1].position, Point::new(160, 30));
}

#[test]
fn alternate_variant_uses_alternate_sprites() {
    assert_eq!(
        sprite_for(ActorKind::Alien(AlienRow::Top), Variant::Alternate),
        SpriteId::Alien1Alt
    );
    assert_eq!(
        sprite_for(ActorKind::Alien(AlienRow::Middle), Variant::Alternate),
        SpriteId::Alien2Alt
    );
    assert_eq!(
        sprite_for(ActorKind::Alien(AlienRow::Bottom), Variant::Primary),
        SpriteId::Alien3
    );
    assert_eq!(sprite_for(ActorKind::Bomb, Variant::Alternate), SpriteId::Bomb);
}

#[test]
fn destroyed_cannon_is_drawn_exploding() {
    let mut s = playing();
    s.cannon.alive = false;
    s.cannon.variant = Variant::Exploding;
    s.status = GameStatus::GameOver;
    s.outcome = Some(Outcome::CannonDestroyed);
    s.score = 120;

    let frame = compose(&s);
    assert_eq!(frame.draws.last().map(|d| d.sprite), Some(SpriteId::CannonExplode));
    assert_eq!(frame.score, 120);
    assert_eq!(frame.status, GameStatus::GameOver);
    assert_eq!(frame.outcome, Some(Outcome::CannonDestroyed));
}
