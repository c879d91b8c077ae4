// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants for placement.

/// Gap reserved between target and content for the arrow decoration.
pub const ARROW_SIZE: f64 = 14.0;

/// Minimum distance between the arrow and the content's corners, in addition to [`ARROW_SIZE`].
pub const ARROW_OFFSET: f64 = 8.0;

/// Margin kept between the content and every edge of the boundary.
pub const POPOVER_MARGIN: f64 = 6.0;

/// Parameters controlling placement geometry.
///
/// The defaults match the arrow triangle drawn by the popover stylesheet; change
/// them together with the styling.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementParams {
    /// Gap between target and content along the main axis.
    pub arrow_size: f64,
    /// Extra inset keeping the arrow away from the content's rounded corners.
    pub arrow_offset: f64,
    /// Inset applied to every boundary edge before fitting and clamping.
    pub margin: f64,
    /// Size the content to the target's width before placing it.
    ///
    /// The width actually used is reported in
    /// [`PlacementResult::content_size`](crate::PlacementResult::content_size).
    pub match_target_width: bool,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            arrow_size: ARROW_SIZE,
            arrow_offset: ARROW_OFFSET,
            margin: POPOVER_MARGIN,
            match_target_width: false,
        }
    }
}

impl PlacementParams {
    /// Smallest arrow position along the content's cross axis.
    pub fn arrow_min(&self) -> f64 {
        self.arrow_offset + self.arrow_size
    }

    /// Largest arrow position for content of the given extent.
    pub fn arrow_max(&self, extent: f64) -> f64 {
        extent - self.arrow_offset - self.arrow_size
    }
}
