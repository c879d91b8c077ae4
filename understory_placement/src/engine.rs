// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement computation: decision table, auto resolution, flip, clamp and arrow.

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::overflow::{Overflow, clamp_to_boundary, is_within_bounds, overflow, overflow_score};
use crate::placement::{Align, Axis, Placement, PlacementRequest, Side};
use crate::PlacementParams;

/// Position of the arrow decoration inside the content box.
///
/// Only the axis matching the placement's orientation is meaningful: `left` for
/// top/bottom placements and `top` for left/right placements. The other field is `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowOffset {
    /// Distance from the content's top edge to the arrow center.
    pub top: f64,
    /// Distance from the content's left edge to the arrow center.
    pub left: f64,
}

impl ArrowOffset {
    /// The meaningful coordinate for content on `side`.
    pub fn along(&self, side: Side) -> f64 {
        match side.axis() {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }
}

/// Output of [`compute_placement`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementResult {
    /// The resolved placement after auto resolution and flipping.
    pub placement: Placement,
    /// Top-left corner of the content box in boundary coordinates.
    pub offset: Point,
    /// Arrow position inside the content box.
    pub arrow: ArrowOffset,
    /// Content size the geometry was computed for.
    ///
    /// Differs from the measured size only when
    /// [`PlacementParams::match_target_width`] is set.
    pub content_size: Size,
}

impl PlacementResult {
    /// Side of the target the content ended up on.
    ///
    /// Offset appliers use this to pick orientation styling for the arrow.
    pub fn side(&self) -> Side {
        self.placement.side()
    }

    /// The content box at its final position.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.content_size)
    }

    /// Residual overflow of the final position against `boundary`.
    ///
    /// Non-zero only when the content does not fit the boundary at all.
    pub fn overflow(&self, boundary: Rect, params: &PlacementParams) -> Overflow {
        overflow(self.offset, self.content_size, boundary, params)
    }
}

/// A concrete placement evaluated during auto resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// The placement evaluated.
    pub placement: Placement,
    /// Its unclamped offset.
    pub offset: Point,
    /// Overflow of that offset against the boundary.
    pub overflow: Overflow,
}

/// Unclamped offset of content of size `content` placed at `placement` around `target`.
///
/// The main axis leaves a gap of [`PlacementParams::arrow_size`] between target and
/// content. The cross axis is centered for bare sides and edge-aligned otherwise.
pub fn raw_offset(
    target: Rect,
    content: Size,
    placement: Placement,
    params: &PlacementParams,
) -> Point {
    let gap = params.arrow_size;
    let center = target.center();
    let side = placement.side();

    let main = match side {
        Side::Top => target.y0 - content.height - gap,
        Side::Bottom => target.y1 + gap,
        Side::Left => target.x0 - content.width - gap,
        Side::Right => target.x1 + gap,
    };
    let cross = match (side.axis(), placement.align()) {
        (Axis::Horizontal, Align::Center) => center.x - content.width / 2.0,
        (Axis::Horizontal, Align::Start) => target.x0,
        (Axis::Horizontal, Align::End) => target.x1 - content.width,
        (Axis::Vertical, Align::Center) => center.y - content.height / 2.0,
        (Axis::Vertical, Align::Start) => target.y0,
        (Axis::Vertical, Align::End) => target.y1 - content.height,
    };

    match side.axis() {
        Axis::Horizontal => Point::new(cross, main),
        Axis::Vertical => Point::new(main, cross),
    }
}

/// Pick the best concrete placement for an auto request.
///
/// Placements are tried in [`Placement::ALL`] order. The first one with the lowest
/// overflow score wins, and the search stops at the first placement that fits.
/// This is a priority search rather than a global optimum.
pub fn resolve_auto(
    target: Rect,
    content: Size,
    boundary: Rect,
    params: &PlacementParams,
) -> Placement {
    let mut best = Placement::Bottom;
    let mut best_score = f64::INFINITY;

    for placement in Placement::ALL {
        let offset = raw_offset(target, content, placement, params);
        let score = overflow_score(offset, content, boundary, params);
        if score < best_score {
            best_score = score;
            best = placement;
        }
        if score == 0.0 {
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(placement = %best, score = best_score, "resolved auto placement");

    best
}

/// Evaluate every concrete placement, in search order, without stopping early.
///
/// Useful for diagnostics; [`resolve_auto`] returns the first entry with the
/// lowest score from this list (or an earlier perfect fit).
pub fn rank_candidates(
    target: Rect,
    content: Size,
    boundary: Rect,
    params: &PlacementParams,
) -> SmallVec<[Candidate; 12]> {
    Placement::ALL
        .into_iter()
        .map(|placement| {
            let offset = raw_offset(target, content, placement, params);
            Candidate {
                placement,
                offset,
                overflow: overflow(offset, content, boundary, params),
            }
        })
        .collect()
}

/// Arrow position inside content drawn at `offset`, pointing at the target's center.
///
/// The position is clamped to
/// `[arrow_offset + arrow_size, extent - arrow_offset - arrow_size]` so the arrow
/// stays clear of the content's corners. When content is too small for that range
/// the lower bound wins.
pub fn arrow_offset(
    target: Rect,
    content: Size,
    offset: Point,
    placement: Placement,
    params: &PlacementParams,
) -> ArrowOffset {
    let center = target.center();
    match placement.side().axis() {
        Axis::Horizontal => ArrowOffset {
            top: 0.0,
            left: clamp_arrow(center.x - offset.x, content.width, params),
        },
        Axis::Vertical => ArrowOffset {
            top: clamp_arrow(center.y - offset.y, content.height, params),
            left: 0.0,
        },
    }
}

fn clamp_arrow(desired: f64, extent: f64, params: &PlacementParams) -> f64 {
    let min = params.arrow_min();
    let max = params.arrow_max(extent);
    let clamped = desired.min(max).max(min);

    #[cfg(feature = "tracing")]
    if clamped != desired {
        tracing::trace!(desired, clamped, min, max, "arrow clamped to content");
    }

    clamped
}

/// Compute where to draw `content` next to `target`, using default parameters.
///
/// Only the size of `content` is used. `boundary` must share a coordinate space with
/// `target`. See [`compute_placement_with`].
pub fn compute_placement(
    target: Rect,
    content: Rect,
    preferred: PlacementRequest,
    flip: bool,
    boundary: Rect,
) -> PlacementResult {
    compute_placement_with(
        target,
        content,
        preferred,
        flip,
        boundary,
        &PlacementParams::default(),
    )
}

/// Compute where to draw `content` next to `target`.
///
/// 1. Auto requests are resolved with [`resolve_auto`].
/// 2. The raw offset comes from [`raw_offset`].
/// 3. With `flip`, an out-of-bounds placement is replaced by its
///    [flipped](Placement::flipped) counterpart when that fits or overflows strictly less.
/// 4. The offset is clamped into the boundary with [`clamp_to_boundary`].
/// 5. The arrow is aligned with [`arrow_offset`].
///
/// Never fails; degenerate input produces a best-effort clamped position.
pub fn compute_placement_with(
    target: Rect,
    content: Rect,
    preferred: PlacementRequest,
    flip: bool,
    boundary: Rect,
    params: &PlacementParams,
) -> PlacementResult {
    let content = if params.match_target_width {
        Size::new(target.width(), content.height())
    } else {
        content.size()
    };

    let mut placement = match preferred {
        PlacementRequest::Concrete(p) => p,
        PlacementRequest::Auto(_) => resolve_auto(target, content, boundary, params),
    };
    let mut offset = raw_offset(target, content, placement, params);

    if flip && !is_within_bounds(offset, content, boundary, params) {
        let flipped = placement.flipped();
        let flipped_offset = raw_offset(target, content, flipped, params);
        if is_within_bounds(flipped_offset, content, boundary, params)
            || overflow_score(flipped_offset, content, boundary, params)
                < overflow_score(offset, content, boundary, params)
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(from = %placement, to = %flipped, "flipped placement");
            placement = flipped;
            offset = flipped_offset;
        }
    }

    let clamped = clamp_to_boundary(offset, content, boundary, params);

    #[cfg(feature = "tracing")]
    if clamped != offset {
        tracing::debug!(
            placement = %placement,
            dx = clamped.x - offset.x,
            dy = clamped.y - offset.y,
            "clamped placement to boundary"
        );
    }

    PlacementResult {
        placement,
        offset: clamped,
        arrow: arrow_offset(target, content, clamped, placement, params),
        content_size: content,
    }
}
