// Muxkeys Config API
// Document parsing, compilation and loading

pub mod compiler;
pub mod loader;
pub mod parser;

pub use compiler::{compile, CompileWarning, CompiledConfig};
pub use loader::{default_config_path, load_and_compile, load_or_generate, DEFAULT_CONFIG};
pub use parser::{
    BindingEntry, BindingSet, ConfigError, GeneralSettings, MalformedEntry, ModeSpec, RawConfig,
};
