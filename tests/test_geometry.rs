use proptest::prelude::*;

use term_invaders::entities::{create_alien, create_beam, create_bomb, AlienRow};
use term_invaders::geometry::{overlaps, Point, Rect};

#[test]
fn from_corners_matches_explicit_size() {
    let r = Rect::from_corners(20, 47, 38, 59);
    assert_eq!(r, Rect::new(20, 47, 18, 12));
    assert_eq!(r.max_x(), 38);
    assert_eq!(r.max_y(), 59);
}

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.overlaps(&Rect::new(10, 0, 10, 10))); // right edge
    assert!(!a.overlaps(&Rect::new(0, 10, 10, 10))); // bottom edge
    assert!(!a.overlaps(&Rect::new(-10, 0, 10, 10))); // left edge
    assert!(!a.overlaps(&Rect::new(10, 10, 5, 5))); // corner
}

#[test]
fn containment_overlaps() {
    let outer = Rect::new(0, 0, 20, 14);
    let inner = Rect::new(7, 5, 2, 5);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn actors_collide_with_their_own_sizes() {
    // A 2x5 beam inside a 10x9 bomb.  Sizing both boxes from the beam would
    // shrink the bomb to [0, 2) and miss.
    let bomb = create_bomb(0, 0);
    let mut beam = create_beam();
    beam.position = Point::new(5, 0);

    assert!(overlaps(&beam, &bomb));
    assert!(overlaps(&bomb, &beam));
}

#[test]
fn small_actor_reaches_large_actors_far_side() {
    // Beam near the right edge of a 20-wide alien.
    let alien = create_alien(100, 30, AlienRow::Top, 30);
    let mut beam = create_beam();
    beam.position = Point::new(117, 40);

    assert!(overlaps(&beam, &alien));
    assert!(overlaps(&alien, &beam));

    beam.position.x = 120;
    assert!(!overlaps(&beam, &alien));
}

proptest! {
    #[test]
    fn overlap_is_symmetric(
        ax in -300i32..300, ay in -300i32..300, aw in 1i32..60, ah in 1i32..60,
        bx in -300i32..300, by in -300i32..300, bw in 1i32..60, bh in 1i32..60,
    ) {
        let a = Rect::new(ax, ay, aw, ah);
        let b = Rect::new(bx, by, bw, bh);
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn actor_overlap_is_symmetric(
        ax in 0i32..400, ay in 0i32..300,
        bx in 0i32..400, by in 0i32..300,
    ) {
        let alien = create_alien(ax, ay, AlienRow::Middle, 20);
        let bomb = create_bomb(bx, by);
        prop_assert_eq!(overlaps(&alien, &bomb), overlaps(&bomb, &alien));
    }

    #[test]
    fn separated_rects_never_overlap(
        x in -300i32..300, y in -300i32..300, w in 1i32..60, h in 1i32..60,
        gap in 0i32..50, other_w in 1i32..60, other_h in 1i32..60,
    ) {
        let a = Rect::new(x, y, w, h);
        let right = Rect::new(x + w + gap, y, other_w, other_h);
        let below = Rect::new(x, y + h + gap, other_w, other_h);
        prop_assert!(!a.overlaps(&right));
        prop_assert!(!a.overlaps(&below));
    }

    #[test]
    fn non_empty_rect_overlaps_itself(
        x in -300i32..300, y in -300i32..300, w in 1i32..60, h in 1i32..60,
    ) {
        let a = Rect::new(x, y, w, h);
        prop_assert!(a.overlaps(&a));
    }
}
