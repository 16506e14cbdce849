//! Grid layout calculator and hit testing
//!
//! Items fill the grid column-major: index `i` sits in column `i / rows`,
//! row `i % rows`.

use egui::{Pos2, Rect, pos2, vec2};

use super::stage::Stage;

/// Rows used while a stage fits in at most two columns
pub const MAX_ROWS: usize = 33;

/// Column/row shape of the grid for one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Compute the grid for `count` items of `stage`
    pub fn for_stage(stage: Stage, count: usize) -> Self {
        let wide_columns = match stage {
            Stage::Book => 3,
            Stage::Chapter | Stage::Verse => 4,
        };

        if count <= MAX_ROWS && stage != Stage::Verse {
            Self {
                columns: 1,
                rows: MAX_ROWS,
            }
        } else if count <= 2 * MAX_ROWS {
            Self {
                columns: 2,
                rows: MAX_ROWS,
            }
        } else {
            Self {
                columns: wide_columns,
                rows: count.div_ceil(wide_columns),
            }
        }
    }

    /// (column, row) of an item index
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.rows, index % self.rows)
    }

    pub fn column_width(&self, content: Rect) -> f32 {
        content.width() / self.columns as f32
    }

    pub fn row_height(&self, content: Rect) -> f32 {
        content.height() / self.rows as f32
    }

    /// Screen rectangle of an item's cell inside `content`
    pub fn cell_rect(&self, content: Rect, index: usize) -> Rect {
        let (column, row) = self.cell(index);
        let w = self.column_width(content);
        let h = self.row_height(content);
        Rect::from_min_size(
            pos2(content.min.x + column as f32 * w, content.min.y + row as f32 * h),
            vec2(w, h),
        )
    }

    /// Map a point to an item index, or `None` when the point is off the grid.
    ///
    /// Dragging above or below the content escapes the selection. Horizontal
    /// overshoot is only caught by the item range check.
    pub fn hit_test(&self, content: Rect, pos: Pos2, count: usize) -> Option<usize> {
        let w = content.width();
        let h = content.height();
        if w <= 0.0 || h <= 0.0 {
            return None;
        }

        let x = pos.x - content.min.x;
        let y = pos.y - content.min.y;
        if !(0.0..=h).contains(&y) {
            return None;
        }

        let column = (x / w * self.columns as f32).floor() as i64;
        // y == h lands on the bottom edge and belongs to the last row
        let row = ((y / h * self.rows as f32).floor() as i64).min(self.rows as i64 - 1);

        let index = column * self.rows as i64 + row;
        if index < 0 || index >= count as i64 {
            return None;
        }
        Some(index as usize)
    }
}
