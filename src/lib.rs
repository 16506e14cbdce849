//! Floater - press-and-drag Bible reference selector
//!
//! One continuous drag picks a book, then a chapter, then a verse. Holding a
//! cell opens it; lifting the finger resolves whatever is under it into a
//! packed reference ([`Ari`]).
//!
//! ## Layout
//!
//! - [`floater`]: the selector itself (state machine, grid, long-press timers,
//!   rendering) and its egui adapter
//! - [`domain`]: books, canons and the packed reference codec
//! - [`config`]: TOML settings
//! - [`gui`]: the eframe demo window

pub mod config;
pub mod domain;
pub mod floater;
pub mod gui;

pub use domain::*;
pub use floater::{Floater, FloaterStyle, Selection, Stage};
