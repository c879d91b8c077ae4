// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover a target, wait for the popover to open, then place it.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example popover_placement`

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_event_state::popover::{
    InteractionKind, PopoverTrigger, Transition, TriggerConfig,
};
use understory_placement::{Boundary, PlacementParams, PlacementRequest, compute_placement_with};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let viewport = Size::new(800.0, 600.0);
    let boundary: Boundary = "viewport".parse().expect("known boundary name");
    let boundary = boundary.resolve(viewport);
    let content = Rect::from_origin_size((0.0, 0.0), (180.0, 90.0));
    let params = PlacementParams::default();

    let mut trigger = PopoverTrigger::new(TriggerConfig {
        kind: InteractionKind::Hover,
        ..TriggerConfig::default()
    });

    // Targets near each corner and the middle of the viewport.
    let targets = [
        ("top-left", Rect::from_origin_size((10.0, 10.0), (60.0, 24.0))),
        ("top-right", Rect::from_origin_size((730.0, 10.0), (60.0, 24.0))),
        ("center", Rect::from_origin_size((370.0, 288.0), (60.0, 24.0))),
        ("bottom-left", Rect::from_origin_size((10.0, 566.0), (60.0, 24.0))),
        ("bottom-right", Rect::from_origin_size((730.0, 566.0), (60.0, 24.0))),
    ];

    let mut now = 0_u64;
    for (name, target) in targets {
        trigger.on_target_enter(now);
        let Some(deadline) = trigger.next_deadline() else {
            continue;
        };
        now = deadline;
        if trigger.poll(now) != Some(Transition::Opened) {
            continue;
        }

        for request in ["auto", "top", "right-start"] {
            let request: PlacementRequest = request.parse().expect("known placement name");
            let result =
                compute_placement_with(target, content, request, true, boundary, &params);
            println!(
                "{name:>12} {request:>11} -> {:<12} at ({:>6.1}, {:>6.1}) arrow {:>5.1}",
                result.placement,
                result.offset.x,
                result.offset.y,
                result.arrow.along(result.side()),
            );
        }

        trigger.on_target_leave(now, false);
        now = trigger.next_deadline().unwrap_or(now);
        trigger.poll(now);
    }
}
