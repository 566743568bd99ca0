//! UI module for Sortscope Player
//!
//! Built with iced - a cross-platform GUI library for Rust.
//! The run itself happens on a worker thread; the UI reads its published
//! frames at tick rate.

pub mod app;
pub mod canvas;

pub use app::App;
