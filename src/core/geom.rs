//! Geometry primitives for hit-testing and board layout.
//!
//! The engine never draws anything; it only reasons about axis-aligned
//! rectangles. The rendering layer feeds pointer positions in the same
//! coordinate space the `Layout` describes.

use serde::{Deserialize, Serialize};

/// A point in board coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An offset between consecutive cards in a fanned stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub dx: f32,
    pub dy: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    #[must_use]
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn at(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            w: size.w,
            h: size.h,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    #[must_use]
    pub fn area(&self) -> f32 {
        self.w.max(0.0) * self.h.max(0.0)
    }

    /// Point containment; edges on the left/top are inside, right/bottom out.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// Rectangle translated by an offset.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.dx, self.y + offset.dy, self.w, self.h)
    }

    /// Overlapping region with another rectangle, if any.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.w).min(other.x + other.w);
        let y1 = (self.y + self.h).min(other.y + other.h);
        if x1 > x0 && y1 > y0 {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }

    /// Area of overlap with another rectangle; zero when disjoint.
    #[must_use]
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        self.intersection(other).map_or(0.0, |r| r.area())
    }

    /// Rectangle covering `count` cards fanned from this one.
    ///
    /// With `count` of zero or one this is the single-card box; the fan
    /// offset may point in any direction.
    #[must_use]
    pub fn fanned(&self, fan: Vec2, count: usize) -> Rect {
        let steps = count.saturating_sub(1) as f32;
        let sx = fan.dx * steps;
        let sy = fan.dy * steps;
        Rect::new(
            self.x + sx.min(0.0),
            self.y + sy.min(0.0),
            self.w + sx.abs(),
            self.h + sy.abs(),
        )
    }
}

/// Board layout table: card box, cell spacing, and fan offsets.
///
/// Slots are placed on a grid of cells, one cell per card plus gutters,
/// the way the original play area is carved up. All values are plain
/// board units; the rendering layer maps them to pixels however it likes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Single-card bounding box.
    pub card: Size,
    /// Space between adjacent cells.
    pub gutter: Size,
    /// Offset between consecutive cards in a tableau column.
    pub tableau_fan: Vec2,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            card: Size::new(100.0, 145.0),
            gutter: Size::new(20.0, 15.0),
            tableau_fan: Vec2::new(0.0, 30.0),
        }
    }
}

impl Layout {
    /// Cell size: one card plus its gutter.
    #[must_use]
    pub fn cell(&self) -> Size {
        Size::new(self.card.w + self.gutter.w, self.card.h + self.gutter.h)
    }

    /// Single-card rectangle for the slot at grid cell (col, row).
    ///
    /// Rows may be fractional for layouts that stagger slots.
    #[must_use]
    pub fn slot_rect(&self, col: f32, row: f32) -> Rect {
        let cell = self.cell();
        Rect::at(Point::new(col * cell.w, row * cell.h), self.card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(50.0, 30.0)));
        assert!(!r.contains(Point::new(110.0, 30.0)));
        assert!(!r.contains(Point::new(9.9, 30.0)));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, Rect::new(50.0, 50.0, 50.0, 50.0));
        assert_eq!(a.overlap_area(&b), 2500.0);

        let c = Rect::new(200.0, 200.0, 10.0, 10.0);
        assert!(a.intersection(&c).is_none());
        assert_eq!(a.overlap_area(&c), 0.0);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 100.0, 100.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_fanned() {
        let r = Rect::new(10.0, 10.0, 100.0, 145.0);

        // Downward fan of 3 cards.
        let f = r.fanned(Vec2::new(0.0, 30.0), 3);
        assert_eq!(f, Rect::new(10.0, 10.0, 100.0, 205.0));

        // One card or empty keeps the single box.
        assert_eq!(r.fanned(Vec2::new(0.0, 30.0), 1), r);
        assert_eq!(r.fanned(Vec2::new(0.0, 30.0), 0), r);

        // Upward fans grow toward the origin.
        let up = r.fanned(Vec2::new(0.0, -30.0), 2);
        assert_eq!(up, Rect::new(10.0, -20.0, 100.0, 175.0));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_layout_grid() {
        let layout = Layout::default();
        let r = layout.slot_rect(2.0, 1.0);
        assert_eq!(r.origin(), Point::new(240.0, 160.0));
        assert_eq!(r.size(), layout.card);
    }
}
