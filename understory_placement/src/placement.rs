// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement vocabulary: concrete placements, auto requests, sides and alignment.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// One of the twelve concrete placements of a content box relative to its target.
///
/// The first word names the [`Side`] of the target the content sits on. The
/// optional second word names the target edge the content aligns with along the
/// cross axis; bare sides are centered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Above the target, horizontally centered.
    Top,
    /// Above the target, left edges aligned.
    TopLeft,
    /// Above the target, right edges aligned.
    TopRight,
    /// Below the target, horizontally centered.
    Bottom,
    /// Below the target, left edges aligned.
    BottomLeft,
    /// Below the target, right edges aligned.
    BottomRight,
    /// Left of the target, vertically centered.
    Left,
    /// Left of the target, top edges aligned.
    LeftTop,
    /// Left of the target, bottom edges aligned.
    LeftBottom,
    /// Right of the target, vertically centered.
    Right,
    /// Right of the target, top edges aligned.
    RightTop,
    /// Right of the target, bottom edges aligned.
    RightBottom,
}

impl Placement {
    /// All concrete placements, in the order auto resolution evaluates them.
    ///
    /// Bottom comes first, then top, then the sides, then the edge-aligned variants.
    pub const ALL: [Self; 12] = [
        Self::Bottom,
        Self::Top,
        Self::Right,
        Self::Left,
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopLeft,
        Self::TopRight,
        Self::RightTop,
        Self::RightBottom,
        Self::LeftTop,
        Self::LeftBottom,
    ];

    /// Build a placement from its side and cross-axis alignment.
    pub const fn from_parts(side: Side, align: Align) -> Self {
        match (side, align) {
            (Side::Top, Align::Center) => Self::Top,
            (Side::Top, Align::Start) => Self::TopLeft,
            (Side::Top, Align::End) => Self::TopRight,
            (Side::Bottom, Align::Center) => Self::Bottom,
            (Side::Bottom, Align::Start) => Self::BottomLeft,
            (Side::Bottom, Align::End) => Self::BottomRight,
            (Side::Left, Align::Center) => Self::Left,
            (Side::Left, Align::Start) => Self::LeftTop,
            (Side::Left, Align::End) => Self::LeftBottom,
            (Side::Right, Align::Center) => Self::Right,
            (Side::Right, Align::Start) => Self::RightTop,
            (Side::Right, Align::End) => Self::RightBottom,
        }
    }

    /// The side of the target this placement puts the content on.
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Side::Top,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Side::Bottom,
            Self::Left | Self::LeftTop | Self::LeftBottom => Side::Left,
            Self::Right | Self::RightTop | Self::RightBottom => Side::Right,
        }
    }

    /// Cross-axis alignment of the content against the target.
    ///
    /// `Start` is the left edge for top/bottom placements and the top edge for
    /// left/right placements.
    pub const fn align(self) -> Align {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => Align::Center,
            Self::TopLeft | Self::BottomLeft | Self::LeftTop | Self::RightTop => Align::Start,
            Self::TopRight | Self::BottomRight | Self::LeftBottom | Self::RightBottom => {
                Align::End
            }
        }
    }

    /// The geometrically opposite placement, keeping the alignment edge.
    ///
    /// `top-left` flips to `bottom-left`, `right-bottom` to `left-bottom`, and so on.
    pub const fn flipped(self) -> Self {
        Self::from_parts(self.side().opposite(), self.align())
    }

    /// Returns `true` for placements above or below the target.
    pub const fn is_horizontal(self) -> bool {
        matches!(self.side().axis(), Axis::Horizontal)
    }

    /// Returns `true` for placements left or right of the target.
    pub const fn is_vertical(self) -> bool {
        matches!(self.side().axis(), Axis::Vertical)
    }

    /// Canonical kebab-case name, e.g. `"bottom-left"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Left => "left",
            Self::LeftTop => "left-top",
            Self::LeftBottom => "left-bottom",
            Self::Right => "right",
            Self::RightTop => "right-top",
            Self::RightBottom => "right-bottom",
        }
    }

    /// Look up a placement by name, accepting both `top-left` and `top-start` styles.
    ///
    /// Matching is ASCII case-insensitive. Auto names are not concrete and yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let (side, rest) = match name.split_once('-') {
            Some((side, rest)) => (side, Some(rest)),
            None => (name, None),
        };
        let side = Side::from_name(side)?;
        let align = match rest {
            None => Align::Center,
            Some(rest) if rest.eq_ignore_ascii_case("start") => Align::Start,
            Some(rest) if rest.eq_ignore_ascii_case("end") => Align::End,
            Some(rest) => {
                let edge = Side::from_name(rest)?;
                // The alignment edge must lie on the cross axis.
                if edge.axis() == side.axis() {
                    return None;
                }
                match edge {
                    Side::Left | Side::Top => Align::Start,
                    Side::Right | Side::Bottom => Align::End,
                }
            }
        };
        Some(Self::from_parts(side, align))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParsePlacementError::new(s))
    }
}

/// Side of the target a placement puts the content on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Side {
    /// Above the target.
    Top,
    /// Below the target.
    Bottom,
    /// Left of the target.
    Left,
    /// Right of the target.
    Right,
}

impl Side {
    /// The opposite side.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Axis along which content on this side is stacked next to the target.
    ///
    /// Top and bottom placements are laid out along a horizontal edge and carry a
    /// horizontal arrow offset.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Horizontal,
            Self::Left | Self::Right => Axis::Vertical,
        }
    }

    /// Lowercase name, e.g. `"top"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        [Self::Top, Self::Bottom, Self::Left, Self::Right]
            .into_iter()
            .find(|side| side.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Cross-axis alignment of content against its target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Align {
    /// Centers of content and target line up.
    Center,
    /// Left (or top) edges line up.
    Start,
    /// Right (or bottom) edges line up.
    End,
}

/// Orientation of the edge shared by target and content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Content is above or below the target.
    Horizontal,
    /// Content is left or right of the target.
    Vertical,
}

/// The three auto pseudo-placements.
///
/// All three currently resolve the same way; the start/end variants are kept
/// so callers can round-trip what they were given.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum AutoPlacement {
    /// `auto`
    #[default]
    Auto,
    /// `auto-start`
    AutoStart,
    /// `auto-end`
    AutoEnd,
}

impl AutoPlacement {
    /// Canonical name, e.g. `"auto-start"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::AutoStart => "auto-start",
            Self::AutoEnd => "auto-end",
        }
    }
}

/// A requested placement: either concrete or one of the auto modes.
///
/// With the `serde` feature, placements and requests serialize as their
/// canonical names and deserialize from any name [`FromStr`] accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlacementRequest {
    /// Use this placement (subject to flipping).
    Concrete(Placement),
    /// Pick the best fitting placement.
    Auto(AutoPlacement),
}

impl PlacementRequest {
    /// Returns the concrete placement, if this is not an auto request.
    pub const fn concrete(self) -> Option<Placement> {
        match self {
            Self::Concrete(p) => Some(p),
            Self::Auto(_) => None,
        }
    }

    /// Returns `true` for any of the auto modes.
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto(_))
    }

    /// Canonical name, e.g. `"top-left"` or `"auto"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concrete(p) => p.as_str(),
            Self::Auto(a) => a.as_str(),
        }
    }
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self::Auto(AutoPlacement::Auto)
    }
}

impl From<Placement> for PlacementRequest {
    fn from(p: Placement) -> Self {
        Self::Concrete(p)
    }
}

impl From<AutoPlacement> for PlacementRequest {
    fn from(a: AutoPlacement) -> Self {
        Self::Auto(a)
    }
}

impl fmt::Display for PlacementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PlacementRequest {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let auto = [
            AutoPlacement::Auto,
            AutoPlacement::AutoStart,
            AutoPlacement::AutoEnd,
        ]
        .into_iter()
        .find(|a| a.as_str().eq_ignore_ascii_case(s));
        match auto {
            Some(a) => Ok(Self::Auto(a)),
            None => s.parse().map(Self::Concrete),
        }
    }
}

/// Error returned when a placement name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown placement `{input}`")]
pub struct ParsePlacementError {
    input: String,
}

impl ParsePlacementError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(feature = "serde")]
mod serde_names {
    use core::fmt;
    use core::marker::PhantomData;
    use core::str::FromStr;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Placement, PlacementRequest};

    struct NameVisitor<T>(PhantomData<T>);

    impl<T> Visitor<'_> for NameVisitor<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a placement name")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
            v.parse().map_err(E::custom)
        }
    }

    macro_rules! by_name {
        ($($ty:ty),*) => {$(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_str(NameVisitor(PhantomData))
                }
            }
        )*};
    }

    by_name!(Placement, PlacementRequest);

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_preserves_alignment_edge() {
        assert_eq!(Placement::Top.flipped(), Placement::Bottom);
        assert_eq!(Placement::TopLeft.flipped(), Placement::BottomLeft);
        assert_eq!(Placement::BottomRight.flipped(), Placement::TopRight);
        assert_eq!(Placement::LeftTop.flipped(), Placement::RightTop);
        assert_eq!(Placement::RightBottom.flipped(), Placement::LeftBottom);
        for p in Placement::ALL {
            assert_eq!(p.flipped().flipped(), p, "double flip of {p}");
            assert_eq!(p.flipped().align(), p.align());
        }
    }

    #[test]
    fn search_order_covers_every_placement_once() {
        for (i, a) in Placement::ALL.iter().enumerate() {
            for b in &Placement::ALL[i + 1..] {
                assert_ne!(a, b, "duplicate in search order");
            }
        }
        assert_eq!(Placement::ALL[0], Placement::Bottom);
        assert_eq!(Placement::ALL[11], Placement::LeftBottom);
    }

    #[test]
    fn popper_names_normalize() {
        let cases = [
            ("top-start", Placement::TopLeft),
            ("top-end", Placement::TopRight),
            ("bottom-start", Placement::BottomLeft),
            ("bottom-end", Placement::BottomRight),
            ("left-start", Placement::LeftTop),
            ("left-end", Placement::LeftBottom),
            ("right-start", Placement::RightTop),
            ("right-end", Placement::RightBottom),
        ];
        for (name, expected) in cases {
            assert_eq!(name.parse::<Placement>(), Ok(expected), "{name}");
        }
    }

    #[test]
    fn names_round_trip_and_ignore_case() {
        for p in Placement::ALL {
            assert_eq!(p.as_str().parse::<Placement>(), Ok(p));
        }
        assert_eq!("Bottom-Left".parse::<Placement>(), Ok(Placement::BottomLeft));
        assert_eq!("RIGHT-END".parse::<Placement>(), Ok(Placement::RightBottom));
    }

    #[test]
    fn rejects_unknown_and_same_axis_names() {
        let err = "top-bottom".parse::<Placement>().expect_err("same axis edge");
        assert_eq!(err.input(), "top-bottom");
        assert!("middle".parse::<Placement>().is_err());
        assert!("auto".parse::<Placement>().is_err());
        assert!("left-left".parse::<Placement>().is_err());
    }

    #[test]
    fn request_parses_auto_modes() {
        assert_eq!(
            "auto".parse::<PlacementRequest>(),
            Ok(PlacementRequest::Auto(AutoPlacement::Auto))
        );
        assert_eq!(
            "Auto-End".parse::<PlacementRequest>(),
            Ok(PlacementRequest::Auto(AutoPlacement::AutoEnd))
        );
        assert_eq!(
            "left-start".parse::<PlacementRequest>(),
            Ok(PlacementRequest::Concrete(Placement::LeftTop))
        );
        assert!(PlacementRequest::default().is_auto());
    }

    #[test]
    fn orientation_helpers() {
        assert!(Placement::TopRight.is_horizontal());
        assert!(!Placement::TopRight.is_vertical());
        assert!(Placement::LeftBottom.is_vertical());
        assert_eq!(Placement::LeftBottom.side(), Side::Left);
        assert_eq!(Placement::BottomLeft.side().as_str(), "bottom");
    }
}
