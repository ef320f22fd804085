//! Frame execution onto an [`embedded_graphics::draw_target::DrawTarget`].
//!
//! [`draw_frame`] replays a [`Frame`] command by command, in order, onto
//! any `Rgb888` target. This is the only module that touches drawing
//! primitives; everything upstream of it is pure data.
//!
//! Arcs are rasterized as short chord segments, one per degree of sweep,
//! which keeps the angle convention (counter-clockwise positive, screen y
//! down) in one place ([`polar_point`]) instead of depending on a
//! primitive's own notion of angles. Gradient arcs get their color
//! per-segment from the sweep fraction.
//!
//! Icons are resolved here as simple vector glyphs standing in for the
//! external bitmap assets; the renderer only decides placement.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Text};
use profont::PROFONT_24_POINT;

use crate::geometry::{AngularGradient, polar_point};
use crate::render::{DrawCmd, Frame, IconKind};
use crate::styles;

/// Stand-in glyph colors for the external bitmap icons.
const BLINKER_COLOR: Rgb888 = Rgb888::new(0, 200, 0);
const WARNING_COLOR: Rgb888 = Rgb888::new(255, 170, 0);
const DRIVE_MODE_COLOR: Rgb888 = Rgb888::new(200, 200, 200);

/// Replay one frame onto `target`, in command order.
pub fn draw_frame<D>(target: &mut D, frame: &Frame) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    for cmd in frame {
        match cmd {
            DrawCmd::FillRect { top_left, size, color } => {
                Rectangle::new(*top_left, *size)
                    .into_styled(PrimitiveStyle::with_fill(*color))
                    .draw(target)?;
            }
            DrawCmd::StrokeEllipse {
                center,
                radius,
                stroke_width,
                color,
            } => {
                Circle::with_center(*center, (*radius * 2.0) as u32)
                    .into_styled(PrimitiveStyle::with_stroke(*color, *stroke_width))
                    .draw(target)?;
            }
            DrawCmd::StrokeArc {
                center,
                radius,
                start_deg,
                sweep_deg,
                stroke_width,
                color,
                gradient,
            } => {
                draw_arc(
                    target,
                    *center,
                    *radius,
                    *start_deg,
                    *sweep_deg,
                    *stroke_width,
                    *color,
                    *gradient,
                )?;
            }
            DrawCmd::Line {
                start,
                end,
                stroke_width,
                color,
            } => {
                Line::new(*start, *end)
                    .into_styled(PrimitiveStyle::with_stroke(*color, *stroke_width))
                    .draw(target)?;
            }
            DrawCmd::Text {
                text,
                position,
                font,
                color,
                align,
            } => {
                let style = MonoTextStyle::new(styles::font_for(*font), *color);
                Text::with_alignment(text.as_str(), *position, style, *align).draw(target)?;
            }
            DrawCmd::Icon { kind, top_left, size } => {
                draw_icon(target, *kind, *top_left, *size)?;
            }
        }
    }
    Ok(())
}

/// Rasterize one arc as chord segments along the stroke centerline.
///
/// A zero sweep draws nothing at all; without the early return the
/// degenerate first chord would still paint a thick dot at the start
/// angle.
#[allow(clippy::too_many_arguments)]
fn draw_arc<D>(
    target: &mut D,
    center: Point,
    radius: f32,
    start_deg: f32,
    sweep_deg: f32,
    stroke_width: u32,
    color: Rgb888,
    gradient: Option<AngularGradient>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if sweep_deg.abs() < f32::EPSILON {
        return Ok(());
    }

    // One chord per degree of sweep is well under a pixel of sagitta at
    // the radii this dial uses.
    let segments = sweep_deg.abs().ceil().max(1.0) as u32;
    let mut prev = polar_point(center, radius, start_deg);
    for i in 0..segments {
        let t_end = (i + 1) as f32 / segments as f32;
        let next = polar_point(center, radius, start_deg + sweep_deg * t_end);
        let segment_color = match gradient {
            // Sample the fade at the segment midpoint.
            Some(grad) => grad.color_at((i as f32 + 0.5) / segments as f32),
            None => color,
        };
        Line::new(prev, next)
            .into_styled(PrimitiveStyle::with_stroke(segment_color, stroke_width))
            .draw(target)?;
        prev = next;
    }
    Ok(())
}

/// Draw the vector stand-in glyph for one icon cell.
fn draw_icon<D>(target: &mut D, kind: IconKind, top_left: Point, size: Size) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let width = size.width as i32;
    let height = size.height as i32;
    let center = Point::new(top_left.x + width / 2, top_left.y + height / 2);

    match kind {
        IconKind::BlinkerLeft => {
            // Solid arrow pointing left.
            Triangle::new(
                Point::new(top_left.x, center.y),
                Point::new(top_left.x + width, top_left.y),
                Point::new(top_left.x + width, top_left.y + height),
            )
            .into_styled(PrimitiveStyle::with_fill(BLINKER_COLOR))
            .draw(target)?;
        }
        IconKind::BlinkerRight => {
            // Mirror of the left arrow.
            Triangle::new(
                Point::new(top_left.x + width, center.y),
                Point::new(top_left.x, top_left.y),
                Point::new(top_left.x, top_left.y + height),
            )
            .into_styled(PrimitiveStyle::with_fill(BLINKER_COLOR))
            .draw(target)?;
        }
        IconKind::Warning => {
            Triangle::new(
                Point::new(center.x, top_left.y),
                Point::new(top_left.x, top_left.y + height),
                Point::new(top_left.x + width, top_left.y + height),
            )
            .into_styled(PrimitiveStyle::with_stroke(WARNING_COLOR, 4))
            .draw(target)?;
            let style = MonoTextStyle::new(&PROFONT_24_POINT, WARNING_COLOR);
            Text::with_alignment("!", Point::new(center.x, top_left.y + height - 12), style, Alignment::Center)
                .draw(target)?;
        }
        IconKind::Driving | IconKind::Reverse => {
            let glyph = if kind == IconKind::Driving { "D" } else { "R" };
            let style = MonoTextStyle::new(&PROFONT_24_POINT, DRIVE_MODE_COLOR);
            Text::with_alignment(glyph, Point::new(center.x, center.y + 8), style, Alignment::Center).draw(target)?;
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
