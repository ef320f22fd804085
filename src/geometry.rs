//! Pure gauge geometry: value-to-sweep mapping, tick layout, polar math,
//! and the angular gradient used to fade the value arcs.
//!
//! Everything here is a total, side-effect-free function of its inputs.
//! Values are interpreted as fractions of 100 but are never clamped:
//! out-of-domain inputs extrapolate to overlong or negative sweeps instead
//! of failing, and the renderer draws whatever comes back.
//!
//! # Angle convention
//!
//! Angles are degrees in the mathematical convention: 0 at 3 o'clock,
//! positive counter-clockwise. Screen space has y growing downward, so
//! [`polar_point`] negates the sine term. A negative sweep runs clockwise.
//!
//! # The two gauges
//!
//! The left gauge opens at [`LEFT_START_DEG`] (250) and sweeps clockwise;
//! the right gauge opens at [`RIGHT_START_DEG`] (-70) and sweeps
//! counter-clockwise. Both therefore grow toward the top of the dial and
//! leave a shared dead zone at the bottom center for the readout, icons,
//! and temperature rows.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;

// =============================================================================
// Angular constants
// =============================================================================

/// Start angle of the left gauge. Sweeps are negative (clockwise) from here.
pub const LEFT_START_DEG: f32 = 250.0;

/// Start angle of the right gauge. Sweeps are positive (counter-clockwise).
pub const RIGHT_START_DEG: f32 = -70.0;

/// Start angle of the charging progress ring: top of the circle. The ring
/// sweeps in the negative direction as charge increases.
pub const CHARGE_START_DEG: f32 = 90.0;

/// Number of tick positions on each gauge track.
pub const TICK_COUNT: usize = 21;

// =============================================================================
// Value-to-sweep mapping
// =============================================================================

/// Angular range a value of 100 maps onto.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArcRange {
    /// Semicircular gauge: 100 units span 180 degrees.
    Half,
    /// Charging ring: 100 units span the full 360 degrees.
    Full,
}

impl ArcRange {
    /// Degrees spanned by a value of 100.
    pub const fn degrees(self) -> f32 {
        match self {
            Self::Half => 180.0,
            Self::Full => 360.0,
        }
    }
}

/// Linear value-to-sweep map: `range.degrees() * value / 100`.
///
/// Total over all reals. Values above 100 (or below 0) produce sweeps
/// beyond the nominal range rather than saturating; in particular the
/// value arc is NOT capped to [`background_sweep`], so values above the
/// configured ceiling visually overrun the track. That mismatch is the
/// instrument's observed behavior and is kept as-is.
pub fn arc_sweep(value: f32, range: ArcRange) -> f32 {
    range.degrees() * value / 100.0
}

/// Sweep of the static gauge track: `180 * max_degree / 100`.
///
/// Depends only on the configured ceiling, never on live values. At the
/// default ceiling of 70 this is exactly 126 degrees, leaving a dead zone
/// below the horizontal where tick labels and icons live.
pub fn background_sweep(max_degree: f32) -> f32 {
    180.0 * max_degree / 100.0
}

// =============================================================================
// Tick marks
// =============================================================================

/// Tick tiers, in decreasing visual weight.
///
/// Cadence over the 21 positions: every 4th is major (6 in total), the
/// remaining even positions are medium, odd positions are minor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickTier {
    Major,
    Medium,
    Minor,
}

impl TickTier {
    /// Tier for tick position `index` (0..=20).
    pub const fn from_index(index: usize) -> Self {
        if index % 4 == 0 {
            Self::Major
        } else if index % 2 == 0 {
            Self::Medium
        } else {
            Self::Minor
        }
    }

    /// Radial line length for this tier, as a share of the bar thickness.
    pub fn length(self, bar_thickness: f32) -> f32 {
        let factor = match self {
            Self::Major => 0.30,
            Self::Medium => 0.20,
            Self::Minor => 0.12,
        };
        bar_thickness * factor
    }

    /// Stroke width for this tier.
    pub const fn stroke_width(self) -> u32 {
        match self {
            Self::Major => 5,
            Self::Medium => 3,
            Self::Minor => 2,
        }
    }
}

/// One calibration mark on a gauge track.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TickMark {
    /// Position index, 0..=20 from the gauge start angle.
    pub index: usize,
    /// Absolute angle of the mark in degrees.
    pub angle_deg: f32,
    pub tier: TickTier,
    /// Numeric label, present on major ticks only:
    /// `(index / 4) * (max_degree / 5)`.
    pub label: Option<f32>,
}

/// Lay out the 21 equidistant tick positions spanning the background sweep.
///
/// `sign` is +1.0 for a counter-clockwise gauge (right side) and -1.0 for
/// a clockwise one (left side). With the default ceiling of 70 the major
/// labels come out as 0, 14, 28, 42, 56, 70 regardless of live values.
pub fn tick_marks(max_degree: f32, start_deg: f32, sign: f32) -> [TickMark; TICK_COUNT] {
    let step = background_sweep(max_degree) / (TICK_COUNT - 1) as f32;
    core::array::from_fn(|i| {
        let tier = TickTier::from_index(i);
        let label = match tier {
            TickTier::Major => Some((i / 4) as f32 * (max_degree / 5.0)),
            _ => None,
        };
        TickMark {
            index: i,
            angle_deg: start_deg + sign * step * i as f32,
            tier,
            label,
        }
    })
}

// =============================================================================
// Radii & polar conversion
// =============================================================================

/// Radius of the dial: half the smaller surface dimension.
pub fn outer_radius(surface: Size) -> f32 {
    surface.width.min(surface.height) as f32 / 2.0
}

/// Centerline radius of the gauge arc stroke.
pub fn gauge_radius(surface: Size, bar_thickness: f32) -> f32 {
    outer_radius(surface) - bar_thickness / 2.0
}

/// Radius at which major tick labels are anchored. Strictly inside the
/// tick line radius so labels never collide with the tick stroke or the
/// outer ring.
pub fn tick_label_radius(outer_radius: f32, bar_thickness: f32) -> f32 {
    outer_radius - bar_thickness * 0.5
}

/// Convert polar coordinates around `center` to a screen point.
///
/// Screen y grows downward, so the sine term is negated; this matches the
/// dial's counter-clockwise-positive angle convention.
pub fn polar_point(center: Point, radius: f32, angle_deg: f32) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(
        center.x + (radius * rad.cos()) as i32,
        center.y - (radius * rad.sin()) as i32,
    )
}

/// Endpoints of a radial tick line: from `outer - length` out to `outer`.
pub fn tick_line(center: Point, outer: f32, length: f32, angle_deg: f32) -> (Point, Point) {
    (
        polar_point(center, outer - length, angle_deg),
        polar_point(center, outer, angle_deg),
    )
}

// =============================================================================
// Angular gradient
// =============================================================================

/// Sweep-following color fade for a value arc.
///
/// `start` is the color at the arc's start angle (the empty end, where the
/// fade stands in for transparency over the track) and `end` the solid hue
/// at the far end of the sweep. The left gauge ends blue going clockwise
/// and the right ends red going counter-clockwise, so the two read as
/// mirror images.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AngularGradient {
    pub start: Rgb888,
    pub end: Rgb888,
}

/// Build the fade from the empty-end color to the full-end hue.
pub const fn angular_fade(start: Rgb888, end: Rgb888) -> AngularGradient {
    AngularGradient { start, end }
}

impl AngularGradient {
    /// Color at fraction `t` (0 = start, 1 = end) along the sweep.
    ///
    /// Integer 8-bit fixed-point interpolation; `t` outside [0, 1] is
    /// clamped so extrapolated sweeps still get defined colors.
    pub fn color_at(&self, t: f32) -> Rgb888 {
        let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;
        let lerp = |a: u8, b: u8| -> u8 {
            let a = i32::from(a);
            let b = i32::from(b);
            (a + ((b - a) * t_fixed >> 8)) as u8
        };
        Rgb888::new(
            lerp(self.start.r(), self.end.r()),
            lerp(self.start.g(), self.end.g()),
            lerp(self.start.b(), self.end.b()),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Sweep mapping
    // -------------------------------------------------------------------------

    #[test]
    fn test_arc_sweep_half_is_linear() {
        for value in 0..=100 {
            let value = value as f32;
            let sweep = arc_sweep(value, ArcRange::Half);
            assert!(
                (sweep - 1.8 * value).abs() < 1e-4,
                "semicircular sweep should be 1.8 degrees per unit, got {sweep} at {value}"
            );
        }
    }

    #[test]
    fn test_arc_sweep_full_is_linear() {
        for value in 0..=100 {
            let value = value as f32;
            let sweep = arc_sweep(value, ArcRange::Full);
            assert!(
                (sweep - 3.6 * value).abs() < 1e-4,
                "charging-ring sweep should be 3.6 degrees per unit, got {sweep} at {value}"
            );
        }
    }

    #[test]
    fn test_arc_sweep_is_total_out_of_domain() {
        // No clamping: extrapolated inputs yield extrapolated sweeps.
        assert_eq!(arc_sweep(150.0, ArcRange::Half), 270.0, "overrange extrapolates");
        assert_eq!(arc_sweep(-50.0, ArcRange::Half), -90.0, "negative values yield negative sweeps");
    }

    #[test]
    fn test_background_sweep_default_ceiling() {
        assert_eq!(
            background_sweep(70.0),
            126.0,
            "track sweep at the default ceiling should be exactly 126 degrees"
        );
    }

    #[test]
    fn test_background_sweep_independent_of_value() {
        // Only the ceiling matters; there is no live-value input at all.
        assert_eq!(background_sweep(100.0), 180.0);
        assert_eq!(background_sweep(50.0), 90.0);
    }

    // -------------------------------------------------------------------------
    // Tick marks
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_marks_count() {
        let ticks = tick_marks(70.0, LEFT_START_DEG, -1.0);
        assert_eq!(ticks.len(), TICK_COUNT, "every gauge has exactly 21 ticks");
    }

    #[test]
    fn test_tick_tier_cadence() {
        let ticks = tick_marks(70.0, RIGHT_START_DEG, 1.0);
        let majors: Vec<usize> = ticks
            .iter()
            .filter(|t| t.tier == TickTier::Major)
            .map(|t| t.index)
            .collect();
        assert_eq!(majors, vec![0, 4, 8, 12, 16, 20], "major ticks sit at every 4th index");

        for tick in &ticks {
            let expected = if tick.index % 4 == 0 {
                TickTier::Major
            } else if tick.index % 2 == 0 {
                TickTier::Medium
            } else {
                TickTier::Minor
            };
            assert_eq!(tick.tier, expected, "tier cadence broken at index {}", tick.index);
        }
    }

    #[test]
    fn test_tick_major_labels_default_ceiling() {
        let ticks = tick_marks(70.0, RIGHT_START_DEG, 1.0);
        let labels: Vec<f32> = ticks.iter().filter_map(|t| t.label).collect();
        assert_eq!(
            labels,
            vec![0.0, 14.0, 28.0, 42.0, 56.0, 70.0],
            "major labels must span the configured ceiling evenly"
        );
    }

    #[test]
    fn test_tick_minor_medium_have_no_labels() {
        let ticks = tick_marks(70.0, RIGHT_START_DEG, 1.0);
        assert!(
            ticks
                .iter()
                .filter(|t| t.tier != TickTier::Major)
                .all(|t| t.label.is_none()),
            "only major ticks carry labels"
        );
    }

    #[test]
    fn test_tick_angles_left_gauge() {
        // Left side: clockwise-negative from 250 degrees.
        let ticks = tick_marks(70.0, LEFT_START_DEG, -1.0);
        assert_eq!(ticks[0].angle_deg, 250.0, "first left tick at the start angle");
        assert!(
            (ticks[20].angle_deg - 124.0).abs() < 1e-3,
            "last left tick at 250 - 126 = 124 degrees, got {}",
            ticks[20].angle_deg
        );
    }

    #[test]
    fn test_tick_angles_right_gauge() {
        // Right side: counter-clockwise-positive from -70 degrees.
        let ticks = tick_marks(70.0, RIGHT_START_DEG, 1.0);
        assert_eq!(ticks[0].angle_deg, -70.0, "first right tick at the start angle");
        assert!(
            (ticks[20].angle_deg - 56.0).abs() < 1e-3,
            "last right tick at -70 + 126 = 56 degrees, got {}",
            ticks[20].angle_deg
        );
    }

    #[test]
    fn test_tick_spacing_is_uniform() {
        let ticks = tick_marks(70.0, RIGHT_START_DEG, 1.0);
        let step = background_sweep(70.0) / 20.0;
        for pair in ticks.windows(2) {
            let gap = pair[1].angle_deg - pair[0].angle_deg;
            assert!((gap - step).abs() < 1e-4, "ticks must be angularly equidistant");
        }
    }

    // -------------------------------------------------------------------------
    // Radii & polar conversion
    // -------------------------------------------------------------------------

    #[test]
    fn test_radii_from_surface() {
        let surface = Size::new(900, 900);
        assert_eq!(outer_radius(surface), 450.0);
        assert_eq!(gauge_radius(surface, 80.0), 410.0, "gauge centerline sits half a stroke in");
    }

    #[test]
    fn test_outer_radius_uses_smaller_dimension() {
        assert_eq!(outer_radius(Size::new(1200, 900)), 450.0, "dial fits the short edge");
    }

    #[test]
    fn test_label_radius_inside_tick_lines() {
        let outer = outer_radius(Size::new(900, 900));
        let thickness = 80.0;
        let tick_inner = outer - TickTier::Major.length(thickness);
        assert!(
            tick_label_radius(outer, thickness) < tick_inner,
            "labels must sit strictly inside the tick line radius"
        );
    }

    #[test]
    fn test_polar_point_cardinal_directions() {
        let center = Point::new(100, 100);
        assert_eq!(polar_point(center, 50.0, 0.0), Point::new(150, 100), "0 degrees is 3 o'clock");
        assert_eq!(polar_point(center, 50.0, 90.0), Point::new(100, 50), "90 degrees is straight up");
        assert_eq!(polar_point(center, 50.0, 180.0), Point::new(50, 100), "180 degrees is 9 o'clock");
    }

    #[test]
    fn test_tick_line_is_radial() {
        let center = Point::new(0, 0);
        let (inner, outer) = tick_line(center, 100.0, 25.0, 0.0);
        assert_eq!(inner, Point::new(75, 0));
        assert_eq!(outer, Point::new(100, 0));
    }

    // -------------------------------------------------------------------------
    // Angular gradient
    // -------------------------------------------------------------------------

    #[test]
    fn test_gradient_endpoints() {
        let grad = angular_fade(Rgb888::new(100, 100, 100), Rgb888::new(0, 122, 204));
        assert_eq!(grad.color_at(0.0), Rgb888::new(100, 100, 100), "t=0 is the empty-end color");
        // t=1 lands within one fixed-point step of the solid hue.
        let end = grad.color_at(1.0);
        assert!(end.b() >= 203, "t=1 should reach the solid hue, got {end:?}");
    }

    #[test]
    fn test_gradient_midpoint_blends() {
        let grad = angular_fade(Rgb888::new(0, 0, 0), Rgb888::new(200, 100, 50));
        let mid = grad.color_at(0.5);
        assert_eq!(mid, Rgb888::new(100, 50, 25), "midpoint should be the integer average");
    }

    #[test]
    fn test_gradient_clamps_out_of_range() {
        let grad = angular_fade(Rgb888::new(10, 10, 10), Rgb888::new(20, 20, 20));
        assert_eq!(grad.color_at(-2.0), grad.color_at(0.0), "t below 0 clamps to the start");
        assert_eq!(grad.color_at(5.0), grad.color_at(1.0), "t above 1 clamps to the end");
    }
}
