//! Blinker visibility state machine.
//!
//! Each side is a two-state machine {Hidden, Visible} advanced exactly one
//! step per tick. The host owns the timer and calls [`BlinkController::tick`]
//! at the nominal period ([`BLINK_PERIOD`], 1000 ms); the controller never
//! schedules itself. Both sides share the tick but are logically
//! independent: enabling one side does not affect the other's phase.
//!
//! Transition per tick and side:
//! - enabled  -> flip Hidden <-> Visible
//! - disabled -> force Hidden (no toggle memory is retained, so re-enabling
//!   always starts the blink from Hidden)
//!
//! The controller writes only the two derived icon-visibility flags on
//! [`DashboardState`] and raises the redraw flag the same way a setter
//! does.

use std::time::Duration;

use crate::state::{DashboardState, Side};

/// Nominal tick period the host is expected to schedule.
pub const BLINK_PERIOD: Duration = Duration::from_millis(1000);

/// Per-side blink phase.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
enum BlinkPhase {
    #[default]
    Hidden,
    Visible,
}

impl BlinkPhase {
    const fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Periodic state machine driving the left/right blinker icons.
#[derive(Clone, Copy, Default, Debug)]
pub struct BlinkController {
    left: BlinkPhase,
    right: BlinkPhase,
}

impl BlinkController {
    /// Both sides start Hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance both sides by one step and publish the result to `state`.
    ///
    /// Call once per [`BLINK_PERIOD`]; the machine itself is untimed and
    /// steps exactly once per invocation regardless of wall-clock drift.
    pub fn tick(&mut self, state: &mut DashboardState) {
        self.left = Self::step(self.left, state.blinker_enabled(Side::Left));
        self.right = Self::step(self.right, state.blinker_enabled(Side::Right));
        state.apply_blink(self.left.is_visible(), self.right.is_visible());
    }

    const fn step(phase: BlinkPhase, enabled: bool) -> BlinkPhase {
        if enabled { phase.toggled() } else { BlinkPhase::Hidden }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
