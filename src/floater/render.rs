//! Rendering: a pure plan of what goes where, then painting it with egui

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, pos2, vec2};

use super::layout::GridLayout;
use super::stage::{Selection, Stage};
use super::style::FloaterStyle;
use super::Floater;
use crate::domain::Book;

/// Text of one grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub index: usize,
    pub text: String,
    /// Cell the label sits in; text is anchored at its bottom-left corner
    pub cell: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separator {
    pub from: Pos2,
    pub to: Pos2,
}

/// Everything needed to paint one frame of the selector
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub stage: Stage,
    pub grid: GridLayout,
    pub bounds: Rect,
    pub overlay: Color32,
    pub passive: Vec<Label>,
    pub active: Option<Label>,
    pub separator: Option<Separator>,
    pub passive_size: f32,
    pub active_size: f32,
}

impl RenderPlan {
    /// Plan the current frame; `None` when there is nothing to show
    pub fn build(floater: &Floater) -> Option<Self> {
        let (stage, grid, count) = floater.current_grid()?;
        let books = floater.books()?;
        let style = floater.style();
        let content = floater.content_rect();

        let (book, chapter) = match floater.selection() {
            Selection::Idle => return None,
            Selection::Book { .. } => (None, None),
            Selection::Chapter { book, .. } => (Some(books.get(book)?), None),
            Selection::Verse { book, chapter, .. } => (Some(books.get(book)?), Some(chapter)),
        };

        let hovered = floater.selection().hovered().filter(|&i| i < count);
        let prefix = label_prefix(stage, book, chapter, grid);
        let label = |index: usize| Label {
            index,
            text: match stage {
                Stage::Book => books[index].short_name.clone(),
                Stage::Chapter | Stage::Verse => format!("{}{}", prefix, index + 1),
            },
            cell: grid.cell_rect(content, index),
        };

        let passive = (0..count)
            .filter(|&i| Some(i) != hovered)
            .map(&label)
            .collect();
        let active = hovered.map(&label);

        let separator = match (stage, style.testament_boundary) {
            (Stage::Book, Some(boundary)) if boundary < count => {
                let cell = grid.cell_rect(content, boundary);
                Some(Separator {
                    from: pos2(cell.min.x - style.bleed, cell.max.y),
                    to: pos2(cell.min.x + grid.column_width(content) - style.bleed, cell.max.y),
                })
            }
            _ => None,
        };

        let row_height = grid.row_height(content);
        Some(Self {
            stage,
            grid,
            bounds: floater.bounds(),
            overlay: style.overlay,
            passive,
            active,
            separator,
            passive_size: style.passive_scale * row_height,
            active_size: row_height,
        })
    }

    pub fn paint(&self, painter: &Painter, style: &FloaterStyle) {
        painter.rect_filled(self.bounds, 0.0, self.overlay);

        if self.passive_size > 0.0 {
            let font = FontId::proportional(self.passive_size);
            for label in &self.passive {
                painter.text(
                    label.cell.left_bottom(),
                    Align2::LEFT_BOTTOM,
                    &label.text,
                    font.clone(),
                    style.passive_text,
                );
            }
        }

        if let Some(separator) = self.separator {
            painter.line_segment([separator.from, separator.to], style.separator);
        }

        if let Some(label) = &self.active {
            if self.active_size <= 0.0 {
                return;
            }
            let galley = painter.layout_no_wrap(
                label.text.clone(),
                FontId::new(self.active_size, style.active_family.clone()),
                style.active_text,
            );
            let pos = label.cell.left_bottom() - vec2(0.0, galley.size().y);
            let highlight = Rect::from_min_size(pos, galley.size()).expand(style.bleed);
            painter.rect_filled(highlight, 0.0, style.active_box);
            painter.galley(pos, galley, style.active_text);
        }
    }
}

/// Chapter and verse labels name the book while columns are wide enough
fn label_prefix(
    stage: Stage,
    book: Option<&Book>,
    chapter: Option<usize>,
    grid: GridLayout,
) -> String {
    let book_prefix = match book {
        Some(book) if grid.columns <= 2 => format!("{} ", book.short_name),
        _ => String::new(),
    };
    match (stage, chapter) {
        (Stage::Verse, Some(chapter)) => format!("{}{}:", book_prefix, chapter + 1),
        (Stage::Chapter, _) => book_prefix,
        _ => String::new(),
    }
}
