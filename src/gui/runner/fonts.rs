//! Font configuration for the GUI

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::{debug, info};

/// Family name the active label is drawn with once a bold face is found
pub(super) const BOLD_FAMILY: &str = "bold";

/// Register a system bold face as the [`BOLD_FAMILY`] family.
///
/// Returns false when none of the known paths exist; the caller then keeps the
/// regular proportional family for active labels.
pub(super) fn configure_fonts(ctx: &egui::Context) -> bool {
    let mut fonts = FontDefinitions::default();

    // Each entry: (name, path) - will be tried in order
    #[cfg(target_os = "macos")]
    let bold_candidates: &[(&str, &str)] = &[
        ("helvetica_bold", "/System/Library/Fonts/Supplemental/Arial Bold.ttf"),
        ("sf_bold", "/Library/Fonts/Arial Bold.ttf"),
    ];

    #[cfg(target_os = "windows")]
    let bold_candidates: &[(&str, &str)] = &[
        ("segoe_bold", "C:\\Windows\\Fonts\\segoeuib.ttf"),
        ("arial_bold", "C:\\Windows\\Fonts\\arialbd.ttf"),
    ];

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let bold_candidates: &[(&str, &str)] = &[
        (
            "dejavu_bold",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        ),
        (
            "noto_bold",
            "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
        ),
        (
            "liberation_bold",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        ),
    ];

    for (name, path) in bold_candidates {
        let Ok(font_data) = std::fs::read(path) else {
            debug!("[floater] No bold font at {}", path);
            continue;
        };

        fonts
            .font_data
            .insert((*name).to_owned(), FontData::from_owned(font_data).into());

        // Bold face first, regular faces behind it for missing glyphs
        let mut family = vec![(*name).to_owned()];
        if let Some(proportional) = fonts.families.get(&FontFamily::Proportional) {
            family.extend(proportional.iter().cloned());
        }
        fonts
            .families
            .insert(FontFamily::Name(BOLD_FAMILY.into()), family);

        info!("[floater] Loaded bold font '{}' from: {}", name, path);
        ctx.set_fonts(fonts);
        return true;
    }

    false
}
