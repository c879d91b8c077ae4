// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named placement boundaries.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};
use kurbo::{Point, Rect, Size};

/// The region content should be kept inside.
///
/// Named boundaries are resolved against a viewport size supplied by the host,
/// which owns layout measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Boundary {
    /// The visible viewport.
    #[default]
    Viewport,
    /// The window; same extent as the viewport.
    Window,
    /// The nearest scrolling ancestor. Currently resolved as the viewport.
    ScrollParent,
    /// An explicit rectangle, e.g. the measured bounds of a container element.
    Rect(Rect),
}

impl Boundary {
    /// Resolve to a rectangle in the same space as the viewport, whose origin is `(0, 0)`.
    pub fn resolve(self, viewport: Size) -> Rect {
        match self {
            Self::Viewport | Self::Window | Self::ScrollParent => {
                Rect::from_origin_size(Point::ORIGIN, viewport)
            }
            Self::Rect(rect) => rect,
        }
    }
}

impl From<Rect> for Boundary {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl FromStr for Boundary {
    type Err = ParseBoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("viewport") {
            Ok(Self::Viewport)
        } else if s.eq_ignore_ascii_case("window") {
            Ok(Self::Window)
        } else if s.eq_ignore_ascii_case("scrollParent") {
            Ok(Self::ScrollParent)
        } else {
            Err(ParseBoundaryError {
                input: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport => f.write_str("viewport"),
            Self::Window => f.write_str("window"),
            Self::ScrollParent => f.write_str("scrollParent"),
            Self::Rect(r) => write!(f, "{r:?}"),
        }
    }
}

/// Error returned when a boundary name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown boundary `{input}`, expected viewport, window or scrollParent")]
pub struct ParseBoundaryError {
    input: String,
}

impl ParseBoundaryError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_boundaries_cover_the_viewport() {
        let viewport = Size::new(1280.0, 720.0);
        let expected = Rect::new(0.0, 0.0, 1280.0, 720.0);
        for b in [Boundary::Viewport, Boundary::Window, Boundary::ScrollParent] {
            assert_eq!(b.resolve(viewport), expected, "{b}");
        }
    }

    #[test]
    fn explicit_rect_ignores_viewport() {
        let r = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert_eq!(Boundary::from(r).resolve(Size::new(5.0, 5.0)), r);
    }

    #[test]
    fn parses_names() {
        assert_eq!("viewport".parse::<Boundary>(), Ok(Boundary::Viewport));
        assert_eq!("Window".parse::<Boundary>(), Ok(Boundary::Window));
        assert_eq!("scrollparent".parse::<Boundary>(), Ok(Boundary::ScrollParent));
        let err = "body".parse::<Boundary>().expect_err("not a boundary name");
        assert_eq!(err.input(), "body");
    }
}
