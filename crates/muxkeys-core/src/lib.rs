// Muxkeys Core Library
// Key-binding config compiler and modal dispatcher

pub mod action;
pub mod config;
pub mod dispatch;
pub mod key;

pub use action::{Action, ActionHandler, ActionRegistry};
pub use config::{
    compile, default_config_path, load_and_compile, load_or_generate, CompileWarning,
    CompiledConfig, ConfigError, GeneralSettings, RawConfig, DEFAULT_CONFIG,
};
pub use dispatch::{ConfigHandle, DispatchOutcome, DispatchState, Dispatcher};
pub use key::KeyId;
