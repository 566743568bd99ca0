//! Sortscope Core - step-synchronized playback engine for sorting visualization

pub mod algorithms;
pub mod cancel;
pub mod clock;
pub mod pitch;
pub mod run;
pub mod step;
pub mod types;

pub use types::*;
