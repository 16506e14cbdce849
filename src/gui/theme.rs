//! GUI Theme: dark overlay with a teal highlight
//!
//! Color constants for the Floater GUI.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Demo window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(18, 20, 24);
/// Secondary background for panels and the drag handle
pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 28, 34);
/// Overlay painted behind the selector grid (alpha comes from settings)
pub const OVERLAY: Color32 = Color32::from_rgb(0, 0, 0);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Active label
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
/// Passive labels and the separator line
pub const TEXT_DIM: Color32 = Color32::from_rgb(208, 208, 208);
/// Hints in the demo window
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 124, 130);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Highlight box under the active label
pub const ACCENT_TEAL: Color32 = Color32::from_rgb(36, 124, 148);
