//! End-to-end gestures through the public API
//!
//! A canon is loaded from TOML, the selector runs on a manual clock, and the
//! pointer is steered to cell centres the way a finger would.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use egui::{Pos2, Rect, pos2, vec2};
use floater::config::FloaterSettings;
use floater::domain::{Ari, Canon};
use floater::floater::{
    Floater, FloaterStyle, LONG_PRESS_DELAY_MILLIS, ManualClock, RenderPlan, Selection,
};

const CANON: &str = r#"
name = "Two books"

[[books]]
book_id = 18
short_name = "Psa"
verse_counts = [6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6, 10, 22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26, 17, 11, 9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20, 7, 35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18, 52, 17, 16, 15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10, 9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24, 13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6]

[[books]]
book_id = 56
short_name = "Phm"
verse_counts = [25]
"#;

fn setup(settings: &FloaterSettings) -> (Floater, ManualClock, Rc<RefCell<Vec<Ari>>>) {
    let clock = ManualClock::new();
    let selected = Rc::new(RefCell::new(Vec::new()));

    let mut floater =
        Floater::new(FloaterStyle::from_settings(settings)).with_clock(clock.clone());
    let sink = Rc::clone(&selected);
    floater.set_listener(move |ari| sink.borrow_mut().push(ari));
    floater.set_bounds(Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 800.0)));

    (floater, clock, selected)
}

fn center_of(floater: &Floater, index: usize) -> Pos2 {
    let (_, grid, _) = floater.current_grid().expect("gesture running");
    grid.cell_rect(floater.content_rect(), index).center()
}

fn steer(floater: &mut Floater, index: usize) {
    let pos = center_of(floater, index);
    floater.on_drag_move(pos);
}

#[test]
fn psalm_119_in_one_gesture() {
    let canon = Canon::from_toml_str(CANON).unwrap();
    let (mut floater, clock, selected) = setup(&FloaterSettings::default());
    let delay = Duration::from_millis(LONG_PRESS_DELAY_MILLIS);

    floater.on_drag_start(&canon);
    steer(&mut floater, 0);
    clock.advance(delay);
    floater.poll_timers();

    // 150 chapters: four columns, labels without the book name
    let (_, grid, count) = floater.current_grid().unwrap();
    assert_eq!((grid.columns, grid.rows, count), (4, 38, 150));

    steer(&mut floater, 118);
    let plan = RenderPlan::build(&floater).unwrap();
    assert_eq!(plan.active.as_ref().unwrap().text, "119");
    assert!(plan.separator.is_none());

    clock.advance(delay);
    floater.poll_timers();
    let (_, grid, count) = floater.current_grid().unwrap();
    assert_eq!((grid.columns, grid.rows, count), (4, 44, 176));

    steer(&mut floater, 104);
    let plan = RenderPlan::build(&floater).unwrap();
    assert_eq!(plan.active.as_ref().unwrap().text, "119:105");

    let release = center_of(&floater, 104);
    floater.on_drag_complete(release);

    assert_eq!(*selected.borrow(), vec![Ari::encode(18, 119, 105)]);
    assert_eq!(floater.selection(), Selection::Idle);
    assert!(floater.books().is_none());
    assert!(!floater.is_visible());
}

#[test]
fn single_chapter_book_resolves_on_hold() {
    let canon = Canon::from_toml_str(CANON).unwrap();
    let (mut floater, clock, selected) = setup(&FloaterSettings::default());

    floater.on_drag_start(&canon);
    steer(&mut floater, 1);
    clock.advance(Duration::from_millis(LONG_PRESS_DELAY_MILLIS));
    floater.poll_timers();

    assert_eq!(*selected.borrow(), vec![Ari::encode(56, 1, 1)]);
    assert!(!floater.is_visible());

    floater.on_drag_move(pos2(10.0, 10.0));
    floater.on_drag_complete(pos2(10.0, 10.0));
    assert_eq!(selected.borrow().len(), 1);
}

#[test]
fn configured_delay_is_honoured() {
    let canon = Canon::from_toml_str(CANON).unwrap();
    let settings = FloaterSettings {
        long_press_delay_ms: 200,
        ..FloaterSettings::default()
    };
    let (mut floater, clock, _) = setup(&settings);

    floater.on_drag_start(&canon);
    steer(&mut floater, 0);

    clock.advance(Duration::from_millis(150));
    assert_eq!(floater.poll_timers(), Some(Duration::from_millis(50)));
    assert_eq!(floater.selection(), Selection::Book { hovered: Some(0) });

    clock.advance(Duration::from_millis(50));
    assert_eq!(floater.poll_timers(), None);
    assert_eq!(
        floater.selection(),
        Selection::Chapter {
            book: 0,
            hovered: None
        }
    );
}
