// Muxkeys Dispatch
// Modal key dispatch and config reload

pub mod engine;
pub mod handle;

pub use engine::{DispatchOutcome, DispatchState, Dispatcher};
pub use handle::ConfigHandle;
