//! Demo application hosting the selector
//!
//! A drag handle sits on the right edge. Pressing it opens the selector over
//! the whole window; the gesture keeps flowing to the handle's response until
//! the pointer is released.

use std::sync::mpsc;

use eframe::egui::{self, RichText, Sense, Stroke, Vec2};

use super::theme::{ACCENT_TEAL, BG_PRIMARY, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::domain::{Ari, Canon};
use crate::floater::Floater;

/// Most recent selections kept on screen
const HISTORY_LEN: usize = 12;

pub struct FloaterApp {
    canon: Canon,
    floater: Floater,
    selection_rx: mpsc::Receiver<Ari>,
    history: Vec<Ari>,
}

impl FloaterApp {
    pub fn new(canon: Canon, floater: Floater, selection_rx: mpsc::Receiver<Ari>) -> Self {
        Self {
            canon,
            floater,
            selection_rx,
            history: Vec::new(),
        }
    }

    /// Human-readable reference, e.g. "Mrk 4:12"
    fn describe(&self, ari: Ari) -> String {
        match self.canon.books().iter().find(|b| b.book_id == ari.book_id()) {
            Some(book) => format!("{} {}:{}", book.short_name, ari.chapter(), ari.verse()),
            None => ari.to_string(),
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = true;
        style.visuals.panel_fill = BG_PRIMARY;
        style.visuals.window_fill = BG_PRIMARY;
        style.visuals.extreme_bg_color = BG_SECONDARY;
        style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
        ctx.set_style(style);
    }

    fn drain_selections(&mut self) {
        while let Ok(ari) = self.selection_rx.try_recv() {
            self.history.insert(0, ari);
            self.history.truncate(HISTORY_LEN);
        }
    }

    fn render_history(&self, ui: &mut egui::Ui) {
        ui.heading(RichText::new(self.canon.name()).color(TEXT_PRIMARY));
        ui.label(
            RichText::new("Press the handle on the right and drag. Hold a book or chapter to open it.")
                .color(TEXT_MUTED),
        );
        ui.add_space(16.0);

        let Some((latest, older)) = self.history.split_first() else {
            ui.label(RichText::new("No selection yet").italics().color(TEXT_DIM));
            return;
        };

        ui.label(
            RichText::new(self.describe(*latest))
                .size(32.0)
                .strong()
                .color(ACCENT_TEAL),
        );
        ui.label(RichText::new(format!("ARI 0x{:06x}", latest.raw())).monospace().color(TEXT_DIM));
        ui.add_space(12.0);

        for ari in older {
            ui.label(RichText::new(self.describe(*ari)).color(TEXT_DIM));
        }
    }
}

impl eframe::App for FloaterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        let handle = egui::SidePanel::right("drag_handle")
            .exact_width(36.0)
            .resizable(false)
            .frame(egui::Frame::NONE.fill(BG_SECONDARY))
            .show(ctx, |ui| {
                let size = Vec2::new(ui.available_width(), ui.available_height());
                let (rect, response) = ui.allocate_exact_size(size, Sense::drag());
                let thumb = egui::Rect::from_center_size(rect.center(), Vec2::new(8.0, 64.0));
                let color = if response.hovered() || response.dragged() {
                    ACCENT_TEAL
                } else {
                    TEXT_MUTED
                };
                ui.painter().rect_filled(thumb, 4.0, color);
                response
            })
            .inner;

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_history(ui);
        });

        self.floater.set_bounds(ctx.screen_rect());
        self.floater.show(ctx, &handle, &self.canon);

        self.drain_selections();
    }
}
