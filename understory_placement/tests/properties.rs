// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties that hold for every target, content and boundary combination.

use kurbo::Rect;
use proptest::prelude::*;
use understory_placement::{
    AutoPlacement, Placement, PlacementParams, PlacementRequest, compute_placement,
    overflow_score, raw_offset, resolve_auto,
};

const EPS: f64 = 1e-9;

fn rect(x: i32, y: i32, w: u16, h: u16) -> Rect {
    Rect::from_origin_size((f64::from(x), f64::from(y)), (f64::from(w), f64::from(h)))
}

fn target() -> impl Strategy<Value = Rect> {
    (-200_i32..1400, -200_i32..1000, 0_u16..300, 0_u16..200)
        .prop_map(|(x, y, w, h)| rect(x, y, w, h))
}

fn content() -> impl Strategy<Value = Rect> {
    (0_u16..600, 0_u16..400).prop_map(|(w, h)| rect(0, 0, w, h))
}

fn boundary() -> impl Strategy<Value = Rect> {
    (-100_i32..100, -100_i32..100, 1_u16..1600, 1_u16..1000)
        .prop_map(|(x, y, w, h)| rect(x, y, w, h))
}

fn request() -> impl Strategy<Value = PlacementRequest> {
    prop_oneof![
        (0_usize..12).prop_map(|i| PlacementRequest::Concrete(Placement::ALL[i])),
        Just(PlacementRequest::Auto(AutoPlacement::Auto)),
        Just(PlacementRequest::Auto(AutoPlacement::AutoStart)),
        Just(PlacementRequest::Auto(AutoPlacement::AutoEnd)),
    ]
}

proptest! {
    #[test]
    fn results_are_deterministic(
        t in target(), c in content(), b in boundary(), req in request(), flip in any::<bool>(),
    ) {
        prop_assert_eq!(
            compute_placement(t, c, req, flip, b),
            compute_placement(t, c, req, flip, b)
        );
    }

    #[test]
    fn clamped_inside_when_content_fits(
        t in target(), c in content(), b in boundary(), req in request(), flip in any::<bool>(),
    ) {
        let m = PlacementParams::default().margin;
        let r = compute_placement(t, c, req, flip, b);
        if c.width() <= b.width() - 2.0 * m {
            prop_assert!(r.offset.x >= b.x0 + m - EPS);
            prop_assert!(r.offset.x + c.width() <= b.x1 - m + EPS);
        }
        if c.height() <= b.height() - 2.0 * m {
            prop_assert!(r.offset.y >= b.y0 + m - EPS);
            prop_assert!(r.offset.y + c.height() <= b.y1 - m + EPS);
        }
    }

    #[test]
    fn residual_overflow_is_minimal(
        t in target(), c in content(), b in boundary(), req in request(), flip in any::<bool>(),
    ) {
        let params = PlacementParams::default();
        let m = params.margin;
        let r = compute_placement(t, c, req, flip, b);
        let excess_w = (c.width() - (b.width() - 2.0 * m)).max(0.0);
        let excess_h = (c.height() - (b.height() - 2.0 * m)).max(0.0);
        let score = r.overflow(b, &params).score;
        prop_assert!((score - (excess_w + excess_h)).abs() < 1e-6, "score {score}");
    }

    #[test]
    fn flipping_never_increases_overflow(
        t in target(), c in content(), b in boundary(), i in 0_usize..12,
    ) {
        let params = PlacementParams::default();
        let preferred = Placement::ALL[i];
        let size = c.size();
        let r = compute_placement(t, c, preferred.into(), true, b);
        prop_assert!(r.placement == preferred || r.placement == preferred.flipped());

        let before = overflow_score(raw_offset(t, size, preferred, &params), size, b, &params);
        let after = overflow_score(raw_offset(t, size, r.placement, &params), size, b, &params);
        prop_assert!(after <= before);
    }

    #[test]
    fn auto_resolves_to_searched_placement(
        t in target(), c in content(), b in boundary(),
    ) {
        let params = PlacementParams::default();
        let r = compute_placement(t, c, PlacementRequest::default(), false, b);
        prop_assert_eq!(r.placement, resolve_auto(t, c.size(), b, &params));
        prop_assert!(Placement::ALL.contains(&r.placement));
    }

    #[test]
    fn arrow_stays_within_its_range(
        t in target(), c in content(), b in boundary(), req in request(), flip in any::<bool>(),
    ) {
        let params = PlacementParams::default();
        let r = compute_placement(t, c, req, flip, b);
        let extent = if r.placement.is_horizontal() {
            prop_assert_eq!(r.arrow.top, 0.0);
            c.width()
        } else {
            prop_assert_eq!(r.arrow.left, 0.0);
            c.height()
        };
        let value = r.arrow.along(r.side());
        let (min, max) = (params.arrow_min(), params.arrow_max(extent));
        prop_assert!(value >= min);
        if min <= max {
            prop_assert!(value <= max);
        }
    }
}
