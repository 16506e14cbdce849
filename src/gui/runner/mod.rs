//! GUI runner - launches the Floater demo window

mod fonts;

use std::path::Path;
use std::sync::mpsc;

use anyhow::{Context, Result};
use eframe::egui::{self, FontFamily};
use tracing::{info, warn};

use super::app::FloaterApp;
use crate::config::Config;
use crate::domain::{Ari, Canon};
use crate::floater::{Floater, FloaterStyle};

use fonts::{BOLD_FAMILY, configure_fonts};

/// Load the canon to show: an explicit file, else the bundled sample
pub fn load_canon(canon_path: Option<&Path>) -> Result<Canon> {
    let canon = match canon_path {
        Some(path) => Canon::from_file(path)
            .with_context(|| format!("Failed to load canon: {}", path.display()))?,
        None => Canon::sample()?,
    };
    info!(
        "[floater] Canon '{}' with {} books",
        canon.name(),
        canon.books().len()
    );
    Ok(canon)
}

/// Run the demo GUI
pub fn run_gui(canon_path: Option<&Path>, config_path: Option<&Path>) -> Result<()> {
    let config = match Config::load(config_path) {
        Ok(cfg) => cfg,
        Err(e) if config_path.is_none() => {
            warn!("[floater] Failed to load global config: {}. Falling back to defaults.", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    let canon = load_canon(canon_path)?;

    // Completions arrive through the listener; the app drains them each frame
    let (selection_tx, selection_rx) = mpsc::channel::<Ari>();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 760.0])
            .with_min_inner_size([320.0, 480.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "floater",
        options,
        Box::new(move |cc| {
            let mut style = FloaterStyle::from_settings(&config.floater);
            if configure_fonts(&cc.egui_ctx) {
                style = style.with_active_family(FontFamily::Name(BOLD_FAMILY.into()));
            }

            let mut floater = Floater::new(style);
            floater.set_listener(move |ari| {
                let _ = selection_tx.send(ari);
            });

            Ok(Box::new(FloaterApp::new(canon, floater, selection_rx)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
