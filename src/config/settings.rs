//! Selector widget settings

use serde::{Deserialize, Serialize};

use crate::floater::LONG_PRESS_DELAY_MILLIS;

/// Settings for the reference selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloaterSettings {
    /// How long (ms) a cell has to stay hovered before it is committed
    #[serde(default = "default_long_press_delay_ms")]
    pub long_press_delay_ms: u64,

    /// Book index after which the book grid draws a separator line.
    /// 38 is the last Old Testament book in the protestant ordering.
    #[serde(default = "default_testament_boundary")]
    pub testament_boundary: usize,

    /// Draw the separator at all (turn off for canons with another ordering)
    #[serde(default = "default_show_testament_separator")]
    pub show_testament_separator: bool,

    /// Inner padding (points) between the widget bounds and the grid
    #[serde(default = "default_padding")]
    pub padding: f32,

    /// Margin (points) around the active label's highlight box
    #[serde(default = "default_bleed")]
    pub bleed: f32,

    /// Passive label size relative to the row height
    #[serde(default = "default_passive_scale")]
    pub passive_scale: f32,

    /// Alpha of the dark overlay behind the grid (255 = opaque)
    #[serde(default = "default_overlay_alpha")]
    pub overlay_alpha: u8,
}

fn default_long_press_delay_ms() -> u64 {
    LONG_PRESS_DELAY_MILLIS
}

fn default_testament_boundary() -> usize {
    38
}

fn default_show_testament_separator() -> bool {
    true
}

fn default_padding() -> f32 {
    8.0
}

fn default_bleed() -> f32 {
    4.0
}

fn default_passive_scale() -> f32 {
    0.9
}

fn default_overlay_alpha() -> u8 {
    255
}

impl Default for FloaterSettings {
    fn default() -> Self {
        Self {
            long_press_delay_ms: default_long_press_delay_ms(),
            testament_boundary: default_testament_boundary(),
            show_testament_separator: default_show_testament_separator(),
            padding: default_padding(),
            bleed: default_bleed(),
            passive_scale: default_passive_scale(),
            overlay_alpha: default_overlay_alpha(),
        }
    }
}
