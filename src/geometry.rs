//! Integer geometry in world pixels.  Origin is the top-left corner of the
//! window, y grows downward.

use crate::entities::Actor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned, half-open rectangle `[x, x+width) × [y, y+height)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build from the `min`/`max` corners, the way sprite sheet regions are
    /// usually written down.
    pub const fn from_corners(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub const fn at(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn max_x(&self) -> i32 {
        self.x + self.width
    }

    pub const fn max_y(&self) -> i32 {
        self.y + self.height
    }

    /// True iff the interiors intersect.  Rectangles that only share an
    /// edge do not overlap.
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && self.max_x() > other.x
            && self.y < other.max_y()
            && self.max_y() > other.y
    }
}

/// Collision test between two actors, each taken at its current position
/// with its own size.  Callers filter out dead actors first.
pub fn overlaps(a: &Actor, b: &Actor) -> bool {
    a.rect().overlaps(&b.rect())
}
