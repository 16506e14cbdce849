//! egui integration: forwards a drag on some handle to the selector and
//! paints it as a foreground overlay

use egui::{self, Id, LayerId, Order, Pos2, Response};

use super::Floater;
use super::render::RenderPlan;
use crate::domain::Version;

/// What happened to the selector this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FloaterResponse {
    /// A gesture is running
    pub active: bool,
    /// State changed this frame
    pub changed: bool,
}

impl Floater {
    /// Drive the selector from the drag of `source` and paint it.
    ///
    /// `source` is the widget the user presses (a scrollbar thumb, a handle);
    /// egui keeps routing the drag to it even after the pointer leaves it, so
    /// the whole gesture arrives here. Call [`Floater::set_bounds`] first.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        source: &Response,
        version: &dyn Version,
    ) -> FloaterResponse {
        let pointer = source
            .interact_pointer_pos()
            .or_else(|| ctx.input(|i| i.pointer.latest_pos()))
            .unwrap_or(Pos2::ZERO);

        if source.drag_started() {
            self.on_drag_start(version);
        }
        if source.dragged() {
            self.on_drag_move(pointer);
        }
        if source.drag_stopped() {
            self.on_drag_complete(pointer);
        }

        if let Some(wait) = self.poll_timers() {
            ctx.request_repaint_after(wait);
        }

        if self.is_visible() {
            if let Some(plan) = RenderPlan::build(self) {
                let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("floater")));
                plan.paint(&painter, self.style());
            }
        }

        let changed = self.take_redraw();
        if changed {
            ctx.request_repaint();
        }

        FloaterResponse {
            active: self.is_active(),
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use egui::{Event, Modifiers, PointerButton, RawInput, Rect, Sense, pos2, vec2};

    use super::*;
    use crate::domain::{Ari, Book, Canon};
    use crate::floater::{ManualClock, Selection};

    const HANDLE: Rect = Rect::from_min_max(pos2(400.0, 300.0), pos2(440.0, 400.0));

    fn canon() -> Canon {
        let books = (0..10)
            .map(|i| Book::new(i, format!("B{i}"), vec![20; 3]))
            .collect();
        Canon::new("test", books)
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Runs one egui pass with `events` and the selector driven by the handle
    fn frame(
        ctx: &egui::Context,
        floater: &mut Floater,
        canon: &Canon,
        time: f64,
        events: Vec<Event>,
    ) -> FloaterResponse {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(600.0, 700.0))),
            time: Some(time),
            events,
            ..Default::default()
        };

        let mut response = FloaterResponse::default();
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let handle = ui.interact(HANDLE, Id::new("handle"), Sense::drag());
                response = floater.show(ctx, &handle, canon);
            });
        });
        response
    }

    fn setup() -> (Floater, Rc<RefCell<Vec<Ari>>>) {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let mut floater = Floater::default().with_clock(ManualClock::new());
        let sink = Rc::clone(&selected);
        floater.set_listener(move |ari| sink.borrow_mut().push(ari));
        floater.set_bounds(Rect::from_min_size(Pos2::ZERO, vec2(316.0, 676.0)));
        (floater, selected)
    }

    #[test]
    fn test_drag_on_handle_drives_a_gesture() {
        let ctx = egui::Context::default();
        let canon = canon();
        let (mut floater, selected) = setup();
        let press = HANDLE.center();

        // first pass lays out the handle so the press can hit it
        frame(&ctx, &mut floater, &canon, 0.0, vec![Event::PointerMoved(press)]);
        frame(&ctx, &mut floater, &canon, 0.1, vec![button(press, true)]);
        assert!(floater.is_active());
        assert!(floater.is_visible());

        let (_, grid, _) = floater.current_grid().expect("gesture running");
        let target = grid.cell_rect(floater.content_rect(), 7).center();

        let response = frame(&ctx, &mut floater, &canon, 0.2, vec![Event::PointerMoved(target)]);
        assert!(response.active);
        assert!(response.changed);
        assert_eq!(floater.selection(), Selection::Book { hovered: Some(7) });

        frame(&ctx, &mut floater, &canon, 0.3, vec![button(target, false)]);
        let response = frame(&ctx, &mut floater, &canon, 0.4, vec![]);

        assert!(!response.active);
        assert_eq!(*selected.borrow(), vec![Ari::encode(7, 1, 1)]);
        assert!(!floater.is_visible());
        assert_eq!(floater.selection(), Selection::Idle);
    }

    #[test]
    fn test_pointer_without_press_leaves_selector_idle() {
        let ctx = egui::Context::default();
        let canon = canon();
        let (mut floater, selected) = setup();

        frame(&ctx, &mut floater, &canon, 0.0, vec![Event::PointerMoved(HANDLE.center())]);
        let response = frame(
            &ctx,
            &mut floater,
            &canon,
            0.1,
            vec![Event::PointerMoved(pos2(100.0, 100.0))],
        );

        assert!(!response.active);
        assert!(!floater.is_visible());
        assert!(selected.borrow().is_empty());
    }
}
