//! Axis-aligned rectangle in logical pixels.

use crate::coords::vec2::Vec2;

/// Rectangle described by its top-left corner and size.
///
/// A rect with zero or negative size is considered empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rect of the given size centered on `center`.
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    /// Top-left corner.
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Point-in-rect test, half-open: the top/left edges are inside, the
    /// bottom/right edges are outside. Adjacent rects never both claim a
    /// shared boundary point.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        p.x >= min.x && p.x < max.x && p.y >= min.y && p.y < max.y
    }

    /// Intersection of two rects, or `None` when they do not overlap.
    /// Touching edges count as no overlap (the shared region is empty).
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min_x = self.min().x.max(other.min().x);
        let min_y = self.min().y.max(other.min().y);
        let max_x = self.max().x.min(other.max().x);
        let max_y = self.max().y.min(other.max().y);
        if min_x < max_x && min_y < max_y {
            Some(Rect::new(
                Vec2::new(min_x, min_y),
                Vec2::new(max_x - min_x, max_y - min_y),
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    // ── containment ──

    #[test]
    fn contains_is_half_open() {
        let r = rect(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(29.9, 29.9)));
        assert!(!r.contains(Vec2::new(30.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.0, 30.0)));
    }

    #[test]
    fn adjacent_rects_do_not_share_points() {
        let left = rect(0.0, 0.0, 10.0, 10.0);
        let right = rect(10.0, 0.0, 10.0, 10.0);
        let boundary = Vec2::new(10.0, 5.0);
        assert!(!left.contains(boundary));
        assert!(right.contains(boundary));
    }

    // ── intersection ──

    #[test]
    fn intersect_overlapping() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), Some(rect(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_disjoint_is_none() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 20.0, 5.0, 5.0);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn intersect_touching_edges_is_none() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn intersect_contained_returns_inner() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(25.0, 25.0, 10.0, 10.0);
        assert_eq!(outer.intersect(&inner), Some(inner));
    }

    // ── construction ──

    #[test]
    fn from_center_round_trips() {
        let r = Rect::from_center(Vec2::new(50.0, 40.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.origin, Vec2::new(40.0, 35.0));
        assert_eq!(r.center(), Vec2::new(50.0, 40.0));
    }
}
