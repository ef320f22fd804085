//! Immutable dashboard configuration.
//!
//! The core never reads globals: every geometric constant, color, and font
//! metric is injected through [`DashboardConfig`] and treated as read-only
//! for the lifetime of the process. [`DashboardConfig::default`] yields the
//! calibration the instrument was designed against (900x900 surface,
//! 70-unit angular ceiling, 80px arc thickness).
//!
//! # Font metrics
//!
//! Text centering is computed per draw from glyph metrics, not cached.
//! [`FontMetrics::of`] derives the metrics from the actual ProFont faces
//! (see [`crate::styles`]), so layout math and rasterized output can never
//! disagree.

use embedded_graphics::geometry::Size;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb888;

use crate::colors;
use crate::styles;

// =============================================================================
// Font roles & metrics
// =============================================================================

/// Text roles drawn by the renderer. Each maps to one font face and one
/// set of metrics; the executor resolves the face via [`crate::styles`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FontRole {
    /// Large central percentage readout.
    CenterValue,
    /// The `%` glyph next to the central readout.
    Percent,
    /// Model-name caption above the readout.
    Caption,
    /// `[A]` / `[rpm]` gauge axis labels.
    AxisLabel,
    /// Temperature row labels and values.
    Temperature,
    /// Numeric labels on major tick marks.
    TickLabel,
    /// "Charging" caption on the charging page.
    ChargingCaption,
}

/// Monospace glyph cell for one font role.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FontMetrics {
    /// Advance width of one glyph, including inter-character spacing.
    pub char_width: u32,
    /// Glyph cell height.
    pub char_height: u32,
}

impl FontMetrics {
    /// Derive metrics from a mono font face.
    pub const fn of(font: &MonoFont<'_>) -> Self {
        Self {
            char_width: font.character_size.width + font.character_spacing,
            char_height: font.character_size.height,
        }
    }

    /// Pixel width of `text` when set in this font.
    pub const fn text_width(&self, text: &str) -> u32 {
        self.char_width * text.len() as u32
    }
}

/// Metrics for every [`FontRole`], derived from the active font table.
#[derive(Clone, Copy, Debug)]
pub struct FontTable {
    pub center: FontMetrics,
    pub percent: FontMetrics,
    pub caption: FontMetrics,
    pub axis_label: FontMetrics,
    pub temperature: FontMetrics,
    pub tick_label: FontMetrics,
    pub charging: FontMetrics,
}

impl FontTable {
    /// Metrics for a given role.
    pub const fn metrics(&self, role: FontRole) -> FontMetrics {
        match role {
            FontRole::CenterValue => self.center,
            FontRole::Percent => self.percent,
            FontRole::Caption => self.caption,
            FontRole::AxisLabel => self.axis_label,
            FontRole::Temperature => self.temperature,
            FontRole::TickLabel => self.tick_label,
            FontRole::ChargingCaption => self.charging,
        }
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self {
            center: FontMetrics::of(styles::font_for(FontRole::CenterValue)),
            percent: FontMetrics::of(styles::font_for(FontRole::Percent)),
            caption: FontMetrics::of(styles::font_for(FontRole::Caption)),
            axis_label: FontMetrics::of(styles::font_for(FontRole::AxisLabel)),
            temperature: FontMetrics::of(styles::font_for(FontRole::Temperature)),
            tick_label: FontMetrics::of(styles::font_for(FontRole::TickLabel)),
            charging: FontMetrics::of(styles::font_for(FontRole::ChargingCaption)),
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Full color table for one rendered frame.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Rgb888,
    pub outer_ring: Rgb888,
    pub track: Rgb888,
    pub left_fill: Rgb888,
    pub right_fill: Rgb888,
    pub charge_fill: Rgb888,
    pub tick: Rgb888,
    pub text: Rgb888,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            outer_ring: colors::OUTER_RING,
            track: colors::TRACK,
            left_fill: colors::LEFT_FILL,
            right_fill: colors::RIGHT_FILL,
            charge_fill: colors::CHARGE_FILL,
            tick: colors::TICK,
            text: colors::TEXT,
        }
    }
}

// =============================================================================
// Dashboard configuration
// =============================================================================

/// Immutable parameter object injected into the render core.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    /// Target window size. The renderer itself takes the live surface size
    /// per frame; this is the size the demo window opens at.
    pub window_size: Size,

    /// Angular ceiling of each gauge in value units. The gauge track spans
    /// `180 * max_degree / 100` degrees; major tick labels run 0..=max_degree.
    pub max_degree: f32,

    /// Stroke thickness of the gauge arcs in pixels.
    pub bar_thickness: f32,

    /// Distance of the `[A]` / `[rpm]` axis labels from the surface edge.
    pub label_distance: i32,

    /// Icon cell edge length in pixels.
    pub icon_size: u32,
    /// Horizontal gap between icon cells.
    pub icon_spacing: u32,
    /// Vertical offset of the icon row from surface center.
    pub icons_y_offset: i32,
    /// Horizontal offset of the icon row from surface center (0 = centered).
    pub icons_x_offset: i32,

    /// Horizontal offset of the temperature label/value columns from center.
    pub temp_x_offset: i32,
    /// Vertical offset of the first temperature row from center.
    pub temp_y_offset: i32,

    /// Vertical offset of the caption above the center readout (negative = up).
    pub caption_y_offset: i32,

    /// Model-name caption on the normal page.
    pub model_caption: &'static str,
    /// Left gauge axis label.
    pub left_axis_label: &'static str,
    /// Right gauge axis label.
    pub right_axis_label: &'static str,
    /// Caption on the charging page.
    pub charging_caption: &'static str,

    pub palette: Palette,
    pub fonts: FontTable,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_size: Size::new(900, 900),
            max_degree: 70.0,
            bar_thickness: 80.0,
            label_distance: 135,
            icon_size: 80,
            icon_spacing: 60,
            icons_y_offset: 120,
            icons_x_offset: 0,
            temp_x_offset: 120,
            temp_y_offset: 250,
            caption_y_offset: -150,
            model_caption: "MZ 200e",
            left_axis_label: "[A]",
            right_axis_label: "[rpm]",
            charging_caption: "Charging",
            palette: Palette::default(),
            fonts: FontTable::default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
