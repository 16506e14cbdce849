//! The press-and-drag reference selector
//!
//! A single gesture drills down from books to chapters to verses:
//!
//! - `on_drag_start` opens the book grid.
//! - `on_drag_move` hovers the cell under the pointer. Holding a book or
//!   chapter cell for the long-press delay commits it and swaps in the next
//!   grid, so the user keeps dragging without lifting.
//! - `on_drag_complete` resolves whatever stage is showing into an [`Ari`]
//!   and returns to idle.
//!
//! Long-press checks are polled from the host's frame loop through
//! [`Floater::poll_timers`].

mod haptics;
mod layout;
mod long_press;
mod render;
mod stage;
mod style;
mod timer;
mod widget;

pub use haptics::{Haptics, LogHaptics};
pub use layout::{GridLayout, MAX_ROWS};
pub use long_press::{LONG_PRESS_DELAY_MILLIS, LongPressTracker};
pub use render::{Label, RenderPlan, Separator};
pub use stage::{Selection, Stage};
pub use style::FloaterStyle;
pub use timer::{Clock, ManualClock, SystemClock, TimerHandle, TimerQueue};
pub use widget::FloaterResponse;

use std::sync::Arc;
use std::time::Duration;

use egui::{Pos2, Rect};
use tracing::{debug, info};

use crate::domain::{Ari, Book, Version};

type Listener = Box<dyn FnMut(Ari)>;

/// Book → chapter → verse selector driven by one drag gesture
pub struct Floater {
    style: FloaterStyle,
    books: Option<Arc<[Book]>>,
    selection: Selection,
    bounds: Rect,
    visible: bool,
    needs_redraw: bool,
    book_press: LongPressTracker,
    chapter_press: LongPressTracker,
    timers: TimerQueue,
    clock: Box<dyn Clock>,
    haptics: Box<dyn Haptics>,
    listener: Option<Listener>,
}

impl Floater {
    pub fn new(style: FloaterStyle) -> Self {
        Self {
            style,
            books: None,
            selection: Selection::Idle,
            bounds: Rect::NOTHING,
            visible: false,
            needs_redraw: false,
            book_press: LongPressTracker::new(Stage::Book),
            chapter_press: LongPressTracker::new(Stage::Chapter),
            timers: TimerQueue::new(),
            clock: Box::new(SystemClock),
            haptics: Box::new(LogHaptics),
            listener: None,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Called with the packed reference whenever a gesture resolves
    pub fn set_listener(&mut self, listener: impl FnMut(Ari) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Outer bounds of the widget in screen coordinates
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Bounds minus padding; the grid fills this rectangle
    pub fn content_rect(&self) -> Rect {
        self.bounds.shrink(self.style.padding)
    }

    pub fn style(&self) -> &FloaterStyle {
        &self.style
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Book list of the running gesture; `None` while idle
    pub fn books(&self) -> Option<&[Book]> {
        self.books.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_active(&self) -> bool {
        !self.selection.is_idle()
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Returns whether something changed since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Current stage, its grid and item count
    pub fn current_grid(&self) -> Option<(Stage, GridLayout, usize)> {
        let books = self.books.as_ref()?;
        let (stage, count) = match self.selection {
            Selection::Idle => return None,
            Selection::Book { .. } => (Stage::Book, books.len()),
            Selection::Chapter { book, .. } => (Stage::Chapter, books.get(book)?.chapter_count),
            Selection::Verse { book, chapter, .. } => {
                (Stage::Verse, books.get(book)?.verse_count(chapter))
            }
        };
        Some((stage, GridLayout::for_stage(stage, count), count))
    }

    /// Begin a gesture with the books of `version`
    pub fn on_drag_start(&mut self, version: &dyn Version) {
        self.timers.cancel_all();
        self.book_press.reset(&mut self.timers);
        self.chapter_press.reset(&mut self.timers);

        let books = version.consecutive_books();
        debug!("Floater drag start with {} books", books.len());

        self.books = Some(books);
        self.selection = Selection::Book { hovered: None };
        self.visible = true;
        self.needs_redraw = true;
    }

    /// Track the pointer; ignored while idle
    pub fn on_drag_move(&mut self, pos: Pos2) {
        let Some((stage, grid, count)) = self.current_grid() else {
            return;
        };

        let hovered = grid.hit_test(self.content_rect(), pos, count);
        self.selection.set_hovered(hovered);

        let now = self.clock.now();
        let delay = self.style.long_press_delay;
        match stage {
            Stage::Book => self.book_press.observe(hovered, now, delay, &mut self.timers),
            Stage::Chapter => self
                .chapter_press
                .observe(hovered, now, delay, &mut self.timers),
            Stage::Verse => {}
        }

        self.needs_redraw = true;
    }

    /// Finish the gesture: resolve the current stage and go idle
    pub fn on_drag_complete(&mut self, _pos: Pos2) {
        self.complete();
        self.finish();
    }

    /// Run due long-press checks.
    ///
    /// Returns how long until the next pending check, so the host can wake up
    /// in time.
    pub fn poll_timers(&mut self) -> Option<Duration> {
        let now = self.clock.now();

        for handle in self.timers.take_due(now) {
            let hovered = self.selection.hovered();
            match handle.stage {
                Stage::Book => {
                    let live = self.book_press.fire(handle, hovered);
                    if live && matches!(self.selection, Selection::Book { .. }) {
                        self.haptics.long_press();
                        self.commit_book();
                    }
                }
                Stage::Chapter => {
                    let live = self.chapter_press.fire(handle, hovered);
                    if live && matches!(self.selection, Selection::Chapter { .. }) {
                        self.haptics.long_press();
                        self.commit_chapter();
                    }
                }
                Stage::Verse => {}
            }
        }

        self.timers
            .next_due()
            .map(|due| due.saturating_duration_since(now))
    }

    /// Fix the hovered book. A single-chapter book resolves the whole
    /// gesture right away; otherwise the chapter grid opens.
    pub fn commit_book(&mut self) {
        let Selection::Book { hovered: Some(index) } = self.selection else {
            return;
        };
        let Some(books) = self.books.clone() else {
            return;
        };
        let Some(book) = books.get(index) else {
            return;
        };

        self.book_press.cancel(&mut self.timers);

        if book.chapter_count == 1 {
            self.emit(Ari::encode(book.book_id, 1, 1));
            self.finish();
        } else {
            debug!("Floater committed book {}", book.short_name);
            self.selection = Selection::Chapter {
                book: index,
                hovered: None,
            };
            self.chapter_press.reset(&mut self.timers);
            self.needs_redraw = true;
        }
    }

    /// Fix the hovered chapter and open the verse grid
    pub fn commit_chapter(&mut self) {
        let Selection::Chapter {
            book,
            hovered: Some(chapter),
        } = self.selection
        else {
            return;
        };

        self.chapter_press.cancel(&mut self.timers);
        debug!("Floater committed chapter {}", chapter + 1);
        self.selection = Selection::Verse {
            book,
            chapter,
            hovered: None,
        };
        self.needs_redraw = true;
    }

    /// Resolve the current stage and notify the listener.
    ///
    /// Nothing is emitted unless every index the stage depends on is set.
    pub fn complete(&mut self) -> Option<Ari> {
        let ari = self.resolve()?;
        self.emit(ari);
        Some(ari)
    }

    fn resolve(&self) -> Option<Ari> {
        let books = self.books.as_ref()?;
        match self.selection {
            Selection::Idle => None,
            Selection::Book { hovered } => {
                let book = books.get(hovered?)?;
                Some(Ari::encode(book.book_id, 1, 1))
            }
            Selection::Chapter { book, hovered } => {
                let book = books.get(book)?;
                let chapter = hovered?;
                (chapter < book.chapter_count)
                    .then(|| Ari::encode(book.book_id, chapter as u32 + 1, 1))
            }
            Selection::Verse {
                book,
                chapter,
                hovered,
            } => {
                let book = books.get(book)?;
                let verse = hovered?;
                (verse < book.verse_count(chapter))
                    .then(|| Ari::encode(book.book_id, chapter as u32 + 1, verse as u32 + 1))
            }
        }
    }

    fn emit(&mut self, ari: Ari) {
        info!("Floater selected {}", ari);
        if let Some(listener) = self.listener.as_mut() {
            listener(ari);
        }
    }

    /// Drop all gesture state, including the book list, and hide
    fn finish(&mut self) {
        self.timers.cancel_all();
        self.book_press.reset(&mut self.timers);
        self.chapter_press.reset(&mut self.timers);
        self.books = None;
        self.selection = Selection::Idle;
        self.visible = false;
        self.needs_redraw = true;
    }
}

impl Default for Floater {
    fn default() -> Self {
        Self::new(FloaterStyle::default())
    }
}

impl std::fmt::Debug for Floater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Floater")
            .field("selection", &self.selection)
            .field("books", &self.books.as_ref().map(|b| b.len()))
            .field("bounds", &self.bounds)
            .field("visible", &self.visible)
            .field("pending_timers", &self.timers.len())
            .finish()
    }
}
