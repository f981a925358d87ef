// Muxkeys Config Loader
// Finds the config file, generating the default document on first run

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::compiler::{compile, CompiledConfig};
use super::parser::{ConfigError, RawConfig};
use crate::action::ActionRegistry;

/// Get the default config path (~/.config/muxkeys/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("muxkeys").join("config.toml"))
}

/// Read the config document at `path`.
///
/// When the file does not exist, [`DEFAULT_CONFIG`] is returned and written
/// to `path` for future runs. Failing to write it back is logged, not fatal.
pub fn load_or_generate<P: AsRef<Path>>(path: P) -> Result<String, ConfigError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            match write_default(path) {
                Ok(()) => log::info!("Wrote default config to {}", path.display()),
                Err(e) => log::warn!(
                    "Could not write default config to {}: {}",
                    path.display(),
                    e
                ),
            }
            Ok(DEFAULT_CONFIG.to_string())
        }
        Err(e) => Err(e.into()),
    }
}

fn write_default(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)
}

/// Load (or generate), parse and compile the config at `path`
pub fn load_and_compile<P: AsRef<Path>>(
    path: P,
    registry: &ActionRegistry,
) -> Result<CompiledConfig, ConfigError> {
    let content = load_or_generate(path)?;
    compile(RawConfig::from_toml(&content)?, registry)
}

/// Document used when no config file exists yet
pub const DEFAULT_CONFIG: &str = r#"[general]

enable-help-bar = false
enable-status-bar = true

[keys]

new-pane  = ['Alt+n', 'Alt+Enter']
kill-pane = ['Alt+q']

all-pane-kill = ['Alt+Shift+Q']

#all-session-kill-quit     = ['Clt+q']
#all-session-keep-detach   = ['Clt+x']

toggle-fullscreen = ['Alt+f']
toggle-search = ['Alt+/']

hide-help-bar = ['Alt+\']

split-pane-vert  = ['Alt+v']
split-pane-horiz = ['ALt+h']

move-pane-up    = ['Alt+Shift+Up'    ]
move-pane-down  = ['Alt+Shift+Down'  ]
move-pane-left  = ['Alt+Shift+Left'  ]
move-pane-right = ['Alt+Shift+Right' ]

move-selection-up    = ['Alt+Up'    ]
move-selection-down  = ['Alt+Down'  ]
move-selection-left  = ['Alt+Left'  ]
move-selection-right = ['Alt+Right' ]

[modes.resize]
mode-start  = ['Alt+R']
mode-sticky = true

resize-up    = ['Up',    'j']
resize-down  = ['Down',  'k']
resize-left  = ['Left',  'h']
resize-right = ['Right', 'l']


"#;
