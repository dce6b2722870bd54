//! Sliding-window plumbing: geometry, history ring, window gather, triggers.

mod assembler;
mod history;
mod scheduler;
mod spec;

pub use assembler::WindowAssembler;
pub use history::CircularBuffer;
pub use scheduler::TriggerScheduler;
pub use spec::{ModelPreset, WindowSpec};
