//! GUI module: the demo window hosting the reference selector

pub mod app;
pub mod runner;
pub mod theme;

pub use app::FloaterApp;
pub use runner::{load_canon, run_gui};
