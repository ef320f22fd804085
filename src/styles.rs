//! Font table mapping text roles to ProFont faces.
//!
//! The renderer emits [`FontRole`](crate::config::FontRole) tags in its
//! draw commands instead of font references, keeping the frame pure data.
//! The executor resolves roles to faces here, and
//! [`crate::config::FontTable`] derives its layout metrics from the same
//! faces, so the two can never drift apart.
//!
//! Faces are picked to follow the dial's size hierarchy: a large
//! face for the central readout, medium for captions and axis labels,
//! small for temperatures and tick labels.

use embedded_graphics::mono_font::MonoFont;
use profont::{PROFONT_10_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::config::FontRole;

/// Resolve a text role to its mono font face.
pub const fn font_for(role: FontRole) -> &'static MonoFont<'static> {
    match role {
        FontRole::CenterValue | FontRole::Caption => &PROFONT_24_POINT,
        FontRole::Percent | FontRole::AxisLabel | FontRole::ChargingCaption => &PROFONT_18_POINT,
        FontRole::Temperature => &PROFONT_14_POINT,
        FontRole::TickLabel => &PROFONT_10_POINT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_face_is_largest() {
        // The central readout must dominate the dial.
        let center = font_for(FontRole::CenterValue).character_size;
        let tick = font_for(FontRole::TickLabel).character_size;
        assert!(
            center.height > tick.height,
            "center readout face should be taller than tick labels"
        );
    }

    #[test]
    fn test_caption_shares_center_face() {
        assert_eq!(
            font_for(FontRole::Caption).character_size,
            font_for(FontRole::CenterValue).character_size,
            "caption and center readout use the same face"
        );
    }
}
