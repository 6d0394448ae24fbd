//! Integer-plane geometry for hitboxes and effect areas.
//!
//! Containment is inclusive on every boundary. Shape-versus-rect intersection
//! samples corners only: two shapes intersect when one contains a corner of
//! the other. Overlaps that leave no corner inside either shape (two rects
//! crossing plus-sign style) are not detected; collision and targeting are
//! built on this approximation, so tightening it changes gameplay.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// 2D integer vector, used both as a point and as a displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Vec2) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// Width and height are signed but treated as non-negative; a rect with
/// non-positive width or height is degenerate and has no area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top_left: Vec2,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            top_left: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// True when the rect has no positive area.
    pub const fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Midpoint of the rect, or `top_left` itself when the rect is
    /// degenerate.
    pub fn center(&self) -> Vec2 {
        if self.is_degenerate() {
            return self.top_left;
        }
        Vec2::new(
            self.top_left.x + self.width / 2,
            self.top_left.y + self.height / 2,
        )
    }

    /// The four corners, clockwise from `top_left`.
    pub fn corners(&self) -> [Vec2; 4] {
        let Vec2 { x, y } = self.top_left;
        [
            Vec2::new(x, y),
            Vec2::new(x + self.width, y),
            Vec2::new(x + self.width, y + self.height),
            Vec2::new(x, y + self.height),
        ]
    }

    /// Inclusive containment on both axes.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.top_left.x + self.width
            && point.y >= self.top_left.y
            && point.y <= self.top_left.y + self.height
    }

    /// True when all four corners of `other` lie inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.corners().iter().all(|&corner| self.contains_point(corner))
    }

    /// Corner-sampled intersection test: true when either rect holds a
    /// corner of the other. Not a separating-axis test; see the module docs
    /// for the overlaps it misses.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.corners().iter().any(|&corner| self.contains_point(corner))
            || self.corners().iter().any(|&corner| other.contains_point(corner))
    }

    /// The same rect shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect {
            top_left: self.top_left + offset,
            ..*self
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}x{}", self.top_left, self.width, self.height)
    }
}

/// Circle with Euclidean point containment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Vec2,
    pub radius: i32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Inclusive Euclidean containment.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.center.distance_to(point) <= f64::from(self.radius)
    }

    /// True when all four corners of `rect` lie inside the circle.
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        rect.corners().iter().all(|&corner| self.contains_point(corner))
    }

    /// Corner-sampled intersection: true when any corner of `rect` lies
    /// inside the circle. Same approximation policy as [`Rect::intersects`];
    /// a circle buried inside a large rect is not detected.
    pub fn intersects(&self, rect: &Rect) -> bool {
        rect.corners().iter().any(|&corner| self.contains_point(corner))
    }
}
