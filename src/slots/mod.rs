//! Slot reel engine: shuffled symbol streams, the display boundary, the
//! staggered stop plan and the start/stop controller.

pub mod controller;
pub mod display;
pub mod generator;
pub mod scheduler;
pub mod shuffle;
pub mod stagger;

pub use controller::{SpinController, SpinState};
pub use scheduler::TaskScheduler;
