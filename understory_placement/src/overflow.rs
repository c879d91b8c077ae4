// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow scoring and boundary clamping.
//!
//! All functions here measure a content box of a given size drawn at `offset`
//! against a boundary shrunk by [`PlacementParams::margin`] on every side.

use core::cmp::Ordering;

use kurbo::{Point, Rect, Size};

use crate::PlacementParams;

bitflags::bitflags! {
    /// Boundary edges a content box protrudes past.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Past the top edge.
        const TOP    = 0b0001;
        /// Past the bottom edge.
        const BOTTOM = 0b0010;
        /// Past the left edge.
        const LEFT   = 0b0100;
        /// Past the right edge.
        const RIGHT  = 0b1000;
    }
}

/// How far a content box protrudes past the margin-shrunk boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Overflow {
    /// Sum of the positive penetration past each edge. Zero means fully inside.
    pub score: f64,
    /// The edges that were crossed.
    pub edges: Edges,
}

impl Overflow {
    /// Returns `true` when no edge is crossed.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Compare two overflows by score; lower is better.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
    }
}

/// Boundary shrunk by the margin on all four sides.
///
/// The result may be inverted when the boundary is smaller than twice the margin;
/// callers compare against its edges directly and never normalize it.
fn inner(boundary: Rect, params: &PlacementParams) -> Rect {
    let m = params.margin;
    Rect::new(
        boundary.x0 + m,
        boundary.y0 + m,
        boundary.x1 - m,
        boundary.y1 - m,
    )
}

/// Measure the overflow of `content` drawn at `offset`.
pub fn overflow(offset: Point, content: Size, boundary: Rect, params: &PlacementParams) -> Overflow {
    let inner = inner(boundary, params);
    let right = offset.x + content.width;
    let bottom = offset.y + content.height;

    let mut out = Overflow::default();
    if offset.x < inner.x0 {
        out.score += inner.x0 - offset.x;
        out.edges |= Edges::LEFT;
    }
    if offset.y < inner.y0 {
        out.score += inner.y0 - offset.y;
        out.edges |= Edges::TOP;
    }
    if right > inner.x1 {
        out.score += right - inner.x1;
        out.edges |= Edges::RIGHT;
    }
    if bottom > inner.y1 {
        out.score += bottom - inner.y1;
        out.edges |= Edges::BOTTOM;
    }
    out
}

/// Sum of the positive penetration past each margin-shrunk boundary edge.
pub fn overflow_score(offset: Point, content: Size, boundary: Rect, params: &PlacementParams) -> f64 {
    overflow(offset, content, boundary, params).score
}

/// Returns `true` when all four edges of the content lie inside the margin-shrunk boundary.
pub fn is_within_bounds(
    offset: Point,
    content: Size,
    boundary: Rect,
    params: &PlacementParams,
) -> bool {
    let inner = inner(boundary, params);
    offset.x >= inner.x0
        && offset.y >= inner.y0
        && offset.x + content.width <= inner.x1
        && offset.y + content.height <= inner.y1
}

/// Move `offset` so the content stays inside the margin-shrunk boundary.
///
/// Each axis is corrected independently. A box starting before the near (left or
/// top) edge is pinned to it; otherwise a box running past the far edge is pinned
/// to the far edge. Content larger than the available space still overflows, by
/// the minimal amount.
pub fn clamp_to_boundary(
    offset: Point,
    content: Size,
    boundary: Rect,
    params: &PlacementParams,
) -> Point {
    let inner = inner(boundary, params);
    Point::new(
        clamp_axis(offset.x, content.width, inner.x0, inner.x1),
        clamp_axis(offset.y, content.height, inner.y0, inner.y1),
    )
}

fn clamp_axis(start: f64, extent: f64, min: f64, max: f64) -> f64 {
    if start < min {
        min
    } else if start + extent > max {
        max - extent
    } else {
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 100.0)
    }

    #[test]
    fn inside_has_zero_score() {
        let params = PlacementParams::default();
        let ov = overflow(
            Point::new(6.0, 6.0),
            Size::new(188.0, 88.0),
            viewport(),
            &params,
        );
        assert_eq!(ov.score, 0.0);
        assert!(ov.is_empty());
        assert!(is_within_bounds(
            Point::new(6.0, 6.0),
            Size::new(188.0, 88.0),
            viewport(),
            &params
        ));
    }

    #[test]
    fn score_sums_each_edge() {
        let params = PlacementParams::default();
        // 10 past the left margin, 4 past the top margin, and 12 past the bottom margin.
        let ov = overflow(
            Point::new(-4.0, 2.0),
            Size::new(50.0, 104.0),
            viewport(),
            &params,
        );
        assert_eq!(ov.score, 10.0 + 4.0 + 12.0);
        assert_eq!(ov.edges, Edges::LEFT | Edges::TOP | Edges::BOTTOM);
        assert!(!is_within_bounds(
            Point::new(-4.0, 2.0),
            Size::new(50.0, 104.0),
            viewport(),
            &params
        ));
    }

    #[test]
    fn margin_counts_as_overflow() {
        let params = PlacementParams::default();
        let ov = overflow(
            Point::new(3.0, 50.0),
            Size::new(10.0, 10.0),
            viewport(),
            &params,
        );
        assert_eq!(ov.score, 3.0);
        assert_eq!(ov.edges, Edges::LEFT);
    }

    #[test]
    fn clamp_moves_each_axis_independently() {
        let params = PlacementParams::default();
        let size = Size::new(40.0, 20.0);
        let p = clamp_to_boundary(Point::new(180.0, 50.0), size, viewport(), &params);
        assert_eq!(p, Point::new(154.0, 50.0));
        let p = clamp_to_boundary(Point::new(-10.0, 90.0), size, viewport(), &params);
        assert_eq!(p, Point::new(6.0, 74.0));
        let p = clamp_to_boundary(Point::new(20.0, 20.0), size, viewport(), &params);
        assert_eq!(p, Point::new(20.0, 20.0));
    }

    #[test]
    fn oversized_content_pins_to_one_edge() {
        let params = PlacementParams::default();
        let size = Size::new(300.0, 20.0);
        let p = clamp_to_boundary(Point::new(-50.0, 10.0), size, viewport(), &params);
        assert_eq!(p.x, 6.0);
        // Starting inside but running past the right edge pulls left past the near margin.
        let p = clamp_to_boundary(Point::new(10.0, 10.0), size, viewport(), &params);
        assert_eq!(p.x, 194.0 - 300.0);
    }

    #[test]
    fn cmp_score_orders_lower_first() {
        let a = Overflow {
            score: 1.0,
            edges: Edges::TOP,
        };
        let b = Overflow {
            score: 2.0,
            edges: Edges::LEFT,
        };
        assert_eq!(a.cmp_score(&b), Ordering::Less);
        assert_eq!(b.cmp_score(&a), Ordering::Greater);
    }
}
