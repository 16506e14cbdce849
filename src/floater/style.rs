//! Immutable look of the selector, computed once from settings

use std::time::Duration;

use egui::{Color32, FontFamily, Stroke};

use crate::config::FloaterSettings;
use crate::gui::theme::{ACCENT_TEAL, OVERLAY, TEXT_DIM, TEXT_PRIMARY};

/// Colors, metrics and timing of the selector
#[derive(Debug, Clone, PartialEq)]
pub struct FloaterStyle {
    pub overlay: Color32,
    pub passive_text: Color32,
    pub active_text: Color32,
    pub active_box: Color32,
    pub separator: Stroke,
    pub padding: f32,
    pub bleed: f32,
    pub passive_scale: f32,
    /// Font family of the active label; hosts that register a bold face set it here
    pub active_family: FontFamily,
    /// Book index followed by a separator line
    pub testament_boundary: Option<usize>,
    pub long_press_delay: Duration,
}

impl FloaterStyle {
    pub fn with_active_family(mut self, family: FontFamily) -> Self {
        self.active_family = family;
        self
    }

    pub fn from_settings(settings: &FloaterSettings) -> Self {
        Self {
            overlay: Color32::from_rgba_unmultiplied(
                OVERLAY.r(),
                OVERLAY.g(),
                OVERLAY.b(),
                settings.overlay_alpha,
            ),
            passive_text: TEXT_DIM,
            active_text: TEXT_PRIMARY,
            active_box: ACCENT_TEAL,
            separator: Stroke::new(1.0, TEXT_DIM),
            padding: settings.padding.max(0.0),
            bleed: settings.bleed.max(0.0),
            passive_scale: settings.passive_scale,
            active_family: FontFamily::Proportional,
            testament_boundary: settings
                .show_testament_separator
                .then_some(settings.testament_boundary),
            long_press_delay: Duration::from_millis(settings.long_press_delay_ms),
        }
    }
}

impl Default for FloaterStyle {
    fn default() -> Self {
        Self::from_settings(&FloaterSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_can_be_disabled() {
        let settings = FloaterSettings {
            show_testament_separator: false,
            ..FloaterSettings::default()
        };
        assert_eq!(FloaterStyle::from_settings(&settings).testament_boundary, None);
        assert_eq!(FloaterStyle::default().testament_boundary, Some(38));
    }

    #[test]
    fn test_overlay_alpha_from_settings() {
        let settings = FloaterSettings {
            overlay_alpha: 0xd0,
            ..FloaterSettings::default()
        };
        assert_eq!(FloaterStyle::from_settings(&settings).overlay.a(), 0xd0);
        assert_eq!(FloaterStyle::default().overlay, Color32::BLACK);
    }
}
