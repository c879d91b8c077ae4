// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: small interaction state machines for UI events.
//!
//! These helpers hold the state that sits between raw input events and widget
//! behavior. They never own timers or touch a scene; callers pass timestamps in
//! and act on the returned results.
//!
//! - [`popover`]: open/close state for popovers and tooltips, with hover delays
//!   expressed as deadlines on the caller's clock.
//!
//! Positioning an open popover is handled separately by `understory_placement`.
//!
//! ## Features
//!
//! - `tracing`: emits a `trace` event for every open/close transition.
//!
//! This crate is `no_std`.

#![no_std]

pub mod popover;
