//! Color constants for the dashboard palette.
//!
//! The cluster targets a desktop-sized simulator surface, so colors are
//! full 24-bit [`Rgb888`] rather than a display-native 16-bit format.
//! Values come straight from the visual design: a near-black backdrop,
//! gray track arcs, and the blue/red gauge hues.

use embedded_graphics::pixelcolor::Rgb888;

// =============================================================================
// Surface & chrome
// =============================================================================

/// Full-surface background fill. Near-black so the gauges dominate.
pub const BACKGROUND: Rgb888 = Rgb888::new(30, 30, 30);

/// Thin outer ring enclosing the whole dial.
pub const OUTER_RING: Rgb888 = Rgb888::new(200, 200, 200);

// =============================================================================
// Gauge arcs
// =============================================================================

/// Static gauge track ("empty" arc behind the value arc).
pub const TRACK: Rgb888 = Rgb888::new(100, 100, 100);

/// Left gauge fill at the full end of the gradient (current gauge, blue).
pub const LEFT_FILL: Rgb888 = Rgb888::new(0, 122, 204);

/// Right gauge fill at the full end of the gradient (motor speed, red).
pub const RIGHT_FILL: Rgb888 = Rgb888::new(204, 0, 0);

/// Charging-page progress ring fill.
pub const CHARGE_FILL: Rgb888 = Rgb888::new(200, 200, 200);

// =============================================================================
// Ticks & text
// =============================================================================

/// Tick marks on the gauge tracks. White for contrast over the gradient.
pub const TICK: Rgb888 = Rgb888::new(255, 255, 255);

/// All text: readouts, captions, labels.
pub const TEXT: Rgb888 = Rgb888::new(200, 200, 200);
