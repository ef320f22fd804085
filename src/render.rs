//! Frame assembly: from dashboard state to an ordered draw-command list.
//!
//! [`render_frame`] is a pure function of (state, config, surface size).
//! It emits a [`Frame`] — an ordered `Vec<DrawCmd>` — and nothing else;
//! later commands paint over earlier ones, which is the only layering
//! mechanism. The host executes frames via [`crate::surface`], but any
//! consumer can inspect them, which is how the tests pin down draw order
//! and page content deterministically.
//!
//! Two pages exist. Page choice is a pure function of the charging flag
//! and switching is instantaneous on the next frame:
//!
//! - **Normal**: background, outer ring, left gauge (track, gradient value
//!   arc, ticks, axis label), right gauge mirrored, center readout with
//!   `%` and model caption, temperature rows, icon row.
//! - **Charging**: background, center readout with `%`, "Charging"
//!   caption, full-circle track ring, progress ring swept negative from
//!   the top of the circle.
//!
//! Text centering is computed per draw from the configured font metrics;
//! nothing is cached between frames.

use core::fmt::Write;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::Alignment;
use heapless::String;

use crate::config::{DashboardConfig, FontRole};
use crate::geometry::{
    AngularGradient, ArcRange, CHARGE_START_DEG, LEFT_START_DEG, RIGHT_START_DEG, angular_fade, arc_sweep,
    background_sweep, gauge_radius, outer_radius, polar_point, tick_label_radius, tick_line, tick_marks,
};
use crate::state::{DashboardState, DriveMode};

// =============================================================================
// Draw-command vocabulary
// =============================================================================

/// Text payload of a draw command. Stack-allocated; every string the
/// renderer emits (readouts, captions, tick labels) fits in 16 bytes.
pub type Label = String<16>;

/// Icons the core can ask for. Asset resolution is a host concern: the
/// renderer only decides *whether* an icon is drawn and where, never how
/// it looks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    BlinkerLeft,
    /// Middle status icon, warning variant (priority over drive mode).
    Warning,
    /// Middle status icon while driving forward.
    Driving,
    /// Middle status icon while reversing.
    Reverse,
    BlinkerRight,
}

/// One paint operation. A frame is an ordered sequence of these; ordering
/// is significant and there is no z-index.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCmd {
    /// Axis-aligned filled rectangle.
    FillRect { top_left: Point, size: Size, color: Rgb888 },
    /// Stroked circle outline.
    StrokeEllipse {
        center: Point,
        radius: f32,
        stroke_width: u32,
        color: Rgb888,
    },
    /// Stroked circular arc. `sweep_deg` is signed: negative runs
    /// clockwise. An optional gradient fades the stroke along the sweep.
    StrokeArc {
        center: Point,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        stroke_width: u32,
        color: Rgb888,
        gradient: Option<AngularGradient>,
    },
    /// Straight stroked line segment.
    Line {
        start: Point,
        end: Point,
        stroke_width: u32,
        color: Rgb888,
    },
    /// Positioned text. `position` is the baseline anchor; horizontal
    /// placement follows `align`.
    Text {
        text: Label,
        position: Point,
        font: FontRole,
        color: Rgb888,
        align: Alignment,
    },
    /// Icon placeholder resolved by the host (bitmap assets or glyphs).
    Icon { kind: IconKind, top_left: Point, size: Size },
}

/// One frame's worth of draw commands, in paint order.
pub type Frame = Vec<DrawCmd>;

// =============================================================================
// Frame assembly
// =============================================================================

/// Render one frame for the given surface size.
///
/// Pure and side-effect free: callable at any time, any number of times,
/// without touching the state. Total over all inputs — out-of-range values
/// yield extrapolated arcs, and a too-small surface yields overlapping
/// output rather than an error.
pub fn render_frame(state: &DashboardState, config: &DashboardConfig, surface: Size) -> Frame {
    let mut frame = Frame::new();

    frame.push(DrawCmd::FillRect {
        top_left: Point::zero(),
        size: surface,
        color: config.palette.background,
    });

    if state.charging_mode() {
        push_charging_page(&mut frame, state, config, surface);
    } else {
        push_normal_page(&mut frame, state, config, surface);
    }

    frame
}

fn surface_center(surface: Size) -> Point {
    Point::new(surface.width as i32 / 2, surface.height as i32 / 2)
}

// -----------------------------------------------------------------------------
// Normal page
// -----------------------------------------------------------------------------

fn push_normal_page(frame: &mut Frame, state: &DashboardState, config: &DashboardConfig, surface: Size) {
    let center = surface_center(surface);

    frame.push(DrawCmd::StrokeEllipse {
        center,
        radius: outer_radius(surface),
        stroke_width: 1,
        color: config.palette.outer_ring,
    });

    // Left gauge: clockwise from 250 degrees, fading to blue.
    push_gauge(
        frame,
        config,
        surface,
        state.left_value(),
        LEFT_START_DEG,
        -1.0,
        config.palette.left_fill,
        config.left_axis_label,
        config.label_distance,
    );

    // Right gauge: counter-clockwise from -70 degrees, fading to red.
    push_gauge(
        frame,
        config,
        surface,
        state.right_value(),
        RIGHT_START_DEG,
        1.0,
        config.palette.right_fill,
        config.right_axis_label,
        surface.width as i32 - config.label_distance,
    );

    push_center_readout(frame, state, config, surface);
    push_caption(frame, config, surface, config.model_caption, FontRole::Caption);
    push_temperatures(frame, state, config, surface);
    push_icons(frame, state, config, surface);
}

/// One semicircular gauge: track arc, gradient value arc, tick marks with
/// major labels, and the axis caption.
#[allow(clippy::too_many_arguments)]
fn push_gauge(
    frame: &mut Frame,
    config: &DashboardConfig,
    surface: Size,
    value: f32,
    start_deg: f32,
    sign: f32,
    fill: Rgb888,
    axis_label: &str,
    axis_label_x: i32,
) {
    let center = surface_center(surface);
    let radius = gauge_radius(surface, config.bar_thickness);
    let outer = outer_radius(surface);
    let stroke_width = config.bar_thickness as u32;

    // Static track: spans the configured ceiling, never the live value.
    frame.push(DrawCmd::StrokeArc {
        center,
        radius,
        start_deg,
        sweep_deg: sign * background_sweep(config.max_degree),
        stroke_width,
        color: config.palette.track,
        gradient: None,
    });

    // Value arc: maps the full 0..100 onto 180 degrees, deliberately not
    // capped to the track sweep (values above the ceiling overrun it).
    frame.push(DrawCmd::StrokeArc {
        center,
        radius,
        start_deg,
        sweep_deg: sign * arc_sweep(value, ArcRange::Half),
        stroke_width,
        color: fill,
        gradient: Some(angular_fade(config.palette.track, fill)),
    });

    // Tick marks over the arcs, labels strictly inside the tick lines.
    let label_radius = tick_label_radius(outer, config.bar_thickness);
    for tick in tick_marks(config.max_degree, start_deg, sign) {
        let (inner, outer_pt) = tick_line(center, outer, tick.tier.length(config.bar_thickness), tick.angle_deg);
        frame.push(DrawCmd::Line {
            start: inner,
            end: outer_pt,
            stroke_width: tick.tier.stroke_width(),
            color: config.palette.tick,
        });

        if let Some(value) = tick.label {
            let mut text = Label::new();
            let _ = write!(text, "{value:.0}");
            frame.push(DrawCmd::Text {
                text,
                position: polar_point(center, label_radius, tick.angle_deg),
                font: FontRole::TickLabel,
                color: config.palette.text,
                align: Alignment::Center,
            });
        }
    }

    let metrics = config.fonts.metrics(FontRole::AxisLabel);
    frame.push(DrawCmd::Text {
        text: label(axis_label),
        position: Point::new(axis_label_x, center.y + metrics.char_height as i32 / 4),
        font: FontRole::AxisLabel,
        color: config.palette.text,
        align: Alignment::Center,
    });
}

/// Central percentage readout, shared by both pages: the value centered on
/// the dial with the `%` glyph hanging off its right edge.
fn push_center_readout(frame: &mut Frame, state: &DashboardState, config: &DashboardConfig, surface: Size) {
    let center = surface_center(surface);
    let metrics = config.fonts.metrics(FontRole::CenterValue);

    let mut text = Label::new();
    let _ = write!(text, "{:.0}", state.center_value());
    let half_width = metrics.text_width(&text) as i32 / 2;
    let baseline_y = center.y + metrics.char_height as i32 / 4;

    frame.push(DrawCmd::Text {
        text,
        position: Point::new(center.x, baseline_y),
        font: FontRole::CenterValue,
        color: config.palette.text,
        align: Alignment::Center,
    });

    frame.push(DrawCmd::Text {
        text: label("%"),
        position: Point::new(center.x + half_width + 5, baseline_y),
        font: FontRole::Percent,
        color: config.palette.text,
        align: Alignment::Left,
    });
}

fn push_caption(frame: &mut Frame, config: &DashboardConfig, surface: Size, text: &str, font: FontRole) {
    let center = surface_center(surface);
    frame.push(DrawCmd::Text {
        text: label(text),
        position: Point::new(center.x, center.y + config.caption_y_offset),
        font,
        color: config.palette.text,
        align: Alignment::Center,
    });
}

/// Temperature rows: label column left of center, value column right of
/// center, motor above battery.
fn push_temperatures(frame: &mut Frame, state: &DashboardState, config: &DashboardConfig, surface: Size) {
    let center = surface_center(surface);
    let metrics = config.fonts.metrics(FontRole::Temperature);
    let line_height = metrics.char_height as i32;

    let rows = [("Motor", state.motor_temp()), ("Battery", state.battery_temp())];
    for (i, (name, temp)) in rows.iter().enumerate() {
        let y = center.y + config.temp_y_offset + i as i32 * line_height;

        frame.push(DrawCmd::Text {
            text: label(name),
            position: Point::new(center.x - config.temp_x_offset, y),
            font: FontRole::Temperature,
            color: config.palette.text,
            align: Alignment::Center,
        });

        let mut value = Label::new();
        let _ = write!(value, "{temp:.0} \u{00b0}C");
        frame.push(DrawCmd::Text {
            text: value,
            position: Point::new(center.x + config.temp_x_offset, y),
            font: FontRole::Temperature,
            color: config.palette.text,
            align: Alignment::Center,
        });
    }
}

/// Icon row: left blinker, middle status, right blinker. The middle glyph
/// is picked by one deterministic rule: warning beats drive mode.
fn push_icons(frame: &mut Frame, state: &DashboardState, config: &DashboardConfig, surface: Size) {
    let center = surface_center(surface);
    let icon = config.icon_size as i32;
    let pitch = icon + config.icon_spacing as i32;
    let row_width = icon * 3 + config.icon_spacing as i32 * 2;
    let x0 = center.x + config.icons_x_offset - row_width / 2;
    let y = center.y + config.icons_y_offset;
    let size = Size::new(config.icon_size, config.icon_size);

    if state.icon1_visible() {
        frame.push(DrawCmd::Icon {
            kind: IconKind::BlinkerLeft,
            top_left: Point::new(x0, y),
            size,
        });
    }

    if state.icon2_visible() {
        let kind = if state.warning_state() {
            IconKind::Warning
        } else {
            match state.drive_mode() {
                DriveMode::Driving => IconKind::Driving,
                DriveMode::Reverse => IconKind::Reverse,
            }
        };
        frame.push(DrawCmd::Icon {
            kind,
            top_left: Point::new(x0 + pitch, y),
            size,
        });
    }

    if state.icon3_visible() {
        frame.push(DrawCmd::Icon {
            kind: IconKind::BlinkerRight,
            top_left: Point::new(x0 + pitch * 2, y),
            size,
        });
    }
}

// -----------------------------------------------------------------------------
// Charging page
// -----------------------------------------------------------------------------

fn push_charging_page(frame: &mut Frame, state: &DashboardState, config: &DashboardConfig, surface: Size) {
    let center = surface_center(surface);
    let radius = gauge_radius(surface, config.bar_thickness);
    let stroke_width = config.bar_thickness as u32;

    push_center_readout(frame, state, config, surface);
    push_caption(frame, config, surface, config.charging_caption, FontRole::ChargingCaption);

    // Full-circle track behind the progress ring.
    frame.push(DrawCmd::StrokeArc {
        center,
        radius,
        start_deg: RIGHT_START_DEG,
        sweep_deg: 360.0,
        stroke_width,
        color: config.palette.track,
        gradient: None,
    });

    // Progress ring: grows counter-clockwise-negative from the top.
    frame.push(DrawCmd::StrokeArc {
        center,
        radius,
        start_deg: CHARGE_START_DEG,
        sweep_deg: -arc_sweep(state.center_value(), ArcRange::Full),
        stroke_width,
        color: config.palette.charge_fill,
        gradient: None,
    });
}

fn label(text: &str) -> Label {
    let mut s = Label::new();
    let _ = s.push_str(text);
    s
}

// =============================================================================
// Unit Tests
// =============================================================================
