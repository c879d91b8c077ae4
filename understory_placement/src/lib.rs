// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: target-relative placement for popovers and tooltips.
//!
//! Given the bounds of a target, the size of a floating content box, a preferred
//! [`Placement`] and a boundary, [`compute_placement`] returns where to draw the
//! content so it stays anchored to its target without leaving the boundary.
//!
//! - Concrete placements come from a fixed table: twelve placements, one per side
//!   and cross-axis alignment, separated from the target by an arrow gap.
//! - Auto requests ([`AutoPlacement`]) try placements in a fixed priority order
//!   (bottom, top, right, left, then the edge-aligned variants) and take the first
//!   one with the lowest overflow.
//! - With flipping enabled, an overflowing placement is swapped for the opposite
//!   side when that fits or overflows less.
//! - The result is then clamped into the boundary minus a margin, and an arrow
//!   offset is computed that points at the target's center.
//!
//! Everything here is a pure function of its inputs. Hosts measure rectangles,
//! call the engine on every open, resize or scroll, and apply the returned
//! offset themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_placement::{Placement, compute_placement};
//!
//! let target = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
//! let content = Rect::from_origin_size((0.0, 0.0), (80.0, 40.0));
//! let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
//!
//! let result = compute_placement(target, content, Placement::Bottom.into(), true, viewport);
//! assert_eq!(result.placement, Placement::Bottom);
//! assert_eq!(result.offset, Point::new(85.0, 134.0));
//! // The arrow sits 40px into the content, under the target's center.
//! assert_eq!(result.arrow.left, 40.0);
//! ```
//!
//! ## Names
//!
//! Placements parse from their kebab-case names. Both `top-left` and the
//! Popper-style `top-start` spellings are accepted, as are `auto`, `auto-start`
//! and `auto-end`:
//!
//! ```rust
//! use understory_placement::{Placement, PlacementRequest};
//!
//! let p: PlacementRequest = "right-end".parse().unwrap();
//! assert_eq!(p, PlacementRequest::Concrete(Placement::RightBottom));
//! assert!("auto-start".parse::<PlacementRequest>().unwrap().is_auto());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds relying on `libm` for `kurbo`'s floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for placements (as their names), parameters and results.
//! - `tracing`: emits `trace`/`debug` events for auto resolution, flips and clamps.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod boundary;
mod engine;
mod overflow;
mod params;
mod placement;

pub use boundary::{Boundary, ParseBoundaryError};
pub use engine::{
    ArrowOffset, Candidate, PlacementResult, arrow_offset, compute_placement,
    compute_placement_with, rank_candidates, raw_offset, resolve_auto,
};
pub use overflow::{
    Edges, Overflow, clamp_to_boundary, is_within_bounds, overflow, overflow_score,
};
pub use params::{ARROW_OFFSET, ARROW_SIZE, POPOVER_MARGIN, PlacementParams};
pub use placement::{
    Align, AutoPlacement, Axis, ParsePlacementError, Placement, PlacementRequest, Side,
};
