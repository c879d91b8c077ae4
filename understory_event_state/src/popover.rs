// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/close state for popovers and tooltips.
//!
//! [`PopoverTrigger`] decides when a popover opens and closes in response to
//! clicks, hover, focus and keys. Hover interactions are delayed: instead of
//! owning timers, the state machine records deadlines on the caller's clock and
//! the caller calls [`PopoverTrigger::poll`] when its own timer fires.
//!
//! ## Usage
//!
//! Click-to-toggle:
//! ```
//! use understory_event_state::popover::{PopoverTrigger, Transition, TriggerConfig};
//!
//! let mut trigger = PopoverTrigger::new(TriggerConfig::default());
//! assert_eq!(trigger.on_target_click(0), Some(Transition::Opened));
//! assert_eq!(trigger.on_target_click(10), Some(Transition::Closed));
//! ```
//!
//! Hover with delays:
//! ```
//! use understory_event_state::popover::{
//!     InteractionKind, PopoverTrigger, Transition, TriggerConfig,
//! };
//!
//! let mut trigger = PopoverTrigger::new(TriggerConfig {
//!     kind: InteractionKind::Hover,
//!     ..TriggerConfig::default()
//! });
//!
//! // Entering schedules an open 150ms later.
//! assert_eq!(trigger.on_target_enter(1000), None);
//! assert_eq!(trigger.next_deadline(), Some(1150));
//! assert_eq!(trigger.poll(1100), None);
//! assert_eq!(trigger.poll(1150), Some(Transition::Opened));
//!
//! // Moving into the popover content does not start a close.
//! assert_eq!(trigger.on_target_leave(1200, true), None);
//! assert_eq!(trigger.next_deadline(), None);
//! ```
//!
//! ## Rules
//!
//! 1. **Disabled**: every handler is a no-op.
//! 2. **Click kinds**: clicking the target, Enter and Space toggle immediately.
//! 3. **Hover kinds**: entering or focusing the target cancels a pending close and
//!    schedules an open; leaving or blurring cancels a pending open and schedules a
//!    close, unless the pointer or focus moved into the target or content.
//! 4. **Content hover**: entering the content cancels a pending close. Only
//!    [`InteractionKind::Hover`] also schedules an open from the content.
//! 5. **Escape** closes an open popover immediately for every kind.
//! 6. A delay of `0` applies the change immediately instead of scheduling it.

#[cfg(feature = "tracing")]
use tracing::trace;

/// How a popover is opened and closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Click the target to toggle; content interactions are ignored.
    #[default]
    Click,
    /// Like [`Click`](Self::Click), restricted to the target element.
    ClickTargetOnly,
    /// Hover the target or the content to open.
    Hover,
    /// Hover only the target to open; hovering the content keeps it open.
    HoverTargetOnly,
}

impl InteractionKind {
    /// Returns `true` for the click-driven kinds.
    pub const fn is_click(self) -> bool {
        matches!(self, Self::Click | Self::ClickTargetOnly)
    }

    /// Returns `true` for the hover-driven kinds.
    pub const fn is_hover(self) -> bool {
        matches!(self, Self::Hover | Self::HoverTargetOnly)
    }
}

/// Configuration for a [`PopoverTrigger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Interaction that opens and closes the popover.
    pub kind: InteractionKind,
    /// Delay in milliseconds between hovering the target and opening.
    pub open_delay: u64,
    /// Delay in milliseconds between leaving and closing.
    ///
    /// The pending close is canceled if the pointer comes back before it expires.
    pub close_delay: u64,
    /// A disabled trigger never opens.
    pub disabled: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            kind: InteractionKind::Click,
            open_delay: 150,
            close_delay: 300,
            disabled: false,
        }
    }
}

impl TriggerConfig {
    /// Tooltip defaults: opens on target hover after 100ms and closes immediately.
    pub fn tooltip() -> Self {
        Self {
            kind: InteractionKind::HoverTargetOnly,
            open_delay: 100,
            close_delay: 0,
            disabled: false,
        }
    }
}

/// A change in open state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The popover opened.
    Opened,
    /// The popover closed.
    Closed,
}

/// Keys the trigger reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Closes an open popover.
    Escape,
    /// Toggles click popovers.
    Enter,
    /// Toggles click popovers.
    Space,
    /// Any other key; ignored.
    Other,
}

/// Open/close state machine for a single popover.
///
/// Timestamps are milliseconds on a clock chosen by the caller and must not go
/// backwards. Dropping the owner (or calling [`cancel`](Self::cancel) on unmount)
/// discards any pending deadlines.
#[derive(Clone, Debug)]
pub struct PopoverTrigger {
    config: TriggerConfig,
    open: bool,
    /// Time at which a scheduled open fires.
    open_at: Option<u64>,
    /// Time at which a scheduled close fires.
    close_at: Option<u64>,
}

impl PopoverTrigger {
    /// Create a closed trigger.
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            open: false,
            open_at: None,
            close_at: None,
        }
    }

    /// Create a trigger that starts open, like an uncontrolled `default_open`.
    pub fn new_open(config: TriggerConfig) -> Self {
        Self {
            open: !config.disabled,
            ..Self::new(config)
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Pending deadlines are kept unless the new configuration disables the trigger.
    pub fn set_config(&mut self, config: TriggerConfig) {
        self.config = config;
        if config.disabled {
            self.open = false;
            self.cancel();
        }
    }

    /// Whether the popover is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Deadline of a scheduled open, if any.
    pub fn open_deadline(&self) -> Option<u64> {
        self.open_at
    }

    /// Deadline of a scheduled close, if any.
    pub fn close_deadline(&self) -> Option<u64> {
        self.close_at
    }

    /// Earliest pending deadline; the caller should [`poll`](Self::poll) at that time.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.open_at, self.close_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire any deadline that has passed at `now`.
    pub fn poll(&mut self, now: u64) -> Option<Transition> {
        if self.open_at.is_some_and(|t| now >= t) {
            self.open_at = None;
            return self.set_state(true);
        }
        if self.close_at.is_some_and(|t| now >= t) {
            self.close_at = None;
            return self.set_state(false);
        }
        None
    }

    /// Drop all pending deadlines, e.g. when the popover is unmounted.
    pub fn cancel(&mut self) {
        self.open_at = None;
        self.close_at = None;
    }

    /// Force the open state, as a controlled popover does. Pending deadlines are dropped.
    pub fn set_open(&mut self, open: bool) -> Option<Transition> {
        self.cancel();
        self.set_state(open)
    }

    /// The target was clicked.
    pub fn on_target_click(&mut self, _now: u64) -> Option<Transition> {
        if self.config.disabled || !self.config.kind.is_click() {
            return None;
        }
        self.set_state(!self.open)
    }

    /// The pointer entered the target.
    pub fn on_target_enter(&mut self, now: u64) -> Option<Transition> {
        if self.config.disabled || !self.config.kind.is_hover() {
            return None;
        }
        self.close_at = None;
        self.schedule_open(now)
    }

    /// The pointer left the target.
    ///
    /// `related_inside` is `true` when it moved into the target or the content.
    pub fn on_target_leave(&mut self, now: u64, related_inside: bool) -> Option<Transition> {
        self.leave(now, related_inside)
    }

    /// The target gained focus.
    pub fn on_focus(&mut self, now: u64) -> Option<Transition> {
        self.on_target_enter(now)
    }

    /// The target lost focus.
    ///
    /// `related_inside` is `true` when focus moved into the target or the content.
    pub fn on_blur(&mut self, now: u64, related_inside: bool) -> Option<Transition> {
        self.leave(now, related_inside)
    }

    /// The pointer entered the popover content.
    pub fn on_content_enter(&mut self, now: u64) -> Option<Transition> {
        if self.config.disabled || !self.config.kind.is_hover() {
            return None;
        }
        self.close_at = None;
        if self.config.kind == InteractionKind::Hover {
            self.schedule_open(now)
        } else {
            None
        }
    }

    /// The pointer left the popover content.
    pub fn on_content_leave(&mut self, now: u64, related_inside: bool) -> Option<Transition> {
        self.leave(now, related_inside)
    }

    /// A key was pressed while the target had focus.
    pub fn on_key(&mut self, key: Key, _now: u64) -> Option<Transition> {
        if self.config.disabled {
            return None;
        }
        match key {
            Key::Escape if self.open => {
                self.cancel();
                self.set_state(false)
            }
            Key::Enter | Key::Space if self.config.kind.is_click() => self.set_state(!self.open),
            _ => None,
        }
    }

    /// The overlay asked to close (outside click, close button).
    pub fn on_outside_close(&mut self) -> Option<Transition> {
        if self.config.disabled {
            return None;
        }
        self.set_state(false)
    }

    fn leave(&mut self, now: u64, related_inside: bool) -> Option<Transition> {
        if self.config.disabled || !self.config.kind.is_hover() || related_inside {
            return None;
        }
        self.open_at = None;
        if !self.open || self.close_at.is_some() {
            return None;
        }
        if self.config.close_delay == 0 {
            return self.set_state(false);
        }
        self.close_at = Some(now.saturating_add(self.config.close_delay));
        None
    }

    fn schedule_open(&mut self, now: u64) -> Option<Transition> {
        if self.open || self.open_at.is_some() {
            return None;
        }
        if self.config.open_delay == 0 {
            return self.set_state(true);
        }
        self.open_at = Some(now.saturating_add(self.config.open_delay));
        None
    }

    fn set_state(&mut self, open: bool) -> Option<Transition> {
        if self.config.disabled || self.open == open {
            return None;
        }
        self.open = open;
        let transition = if open {
            Transition::Opened
        } else {
            Transition::Closed
        };
        #[cfg(feature = "tracing")]
        trace!(?transition, "popover trigger transition");
        Some(transition)
    }
}
