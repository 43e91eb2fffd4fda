pub mod busy;
pub mod clipboard;
pub mod input;
pub mod orchestrator;

pub use orchestrator::{ConversionState, Orchestrator, Timings};
