//! Axis-aligned rectangles and the overlap test shared by every entity.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True if the rectangle lies entirely inside `[0, width] × [0, height]`.
    pub fn inside(&self, width: f32, height: f32) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= width && self.bottom() <= height
    }
}

/// Anything that occupies a rectangle in the arena.
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Strict overlap: rectangles that only share an edge do not collide.
pub fn overlaps(a: &impl Bounded, b: &impl Bounded) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
