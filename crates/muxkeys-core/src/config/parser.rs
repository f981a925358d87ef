// Muxkeys Config Parser - TOML with Serde
// Loads the raw document and validates mode structure

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

/// Reserved mode key listing the keys that start the mode
pub const MODE_START_KEY: &str = "mode-start";
/// Reserved mode key marking the mode sticky
pub const MODE_STICKY_KEY: &str = "mode-sticky";

/// Configuration errors that abort loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Could not find starter for mode '{mode}'")]
    MissingStarter { mode: String },

    #[error("Expected a list of strings for mode-start in mode '{mode}', found {found}")]
    StarterType { mode: String, found: String },

    #[error("Expected a boolean for mode-sticky in mode '{mode}', found {found}")]
    StickyType { mode: String, found: String },
}

/// The `[general]` block, passed through to the host untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralSettings {
    /// Show the key help bar
    #[serde(default)]
    pub enable_help_bar: bool,
    /// Show the status bar
    #[serde(default)]
    pub enable_status_bar: bool,
}

/// Document as loaded, before validation.
///
/// Mode tables and binding values are kept loosely typed here; the
/// structural checks happen in [`ModeSpec::from_table`] and
/// [`BindingSet::from_entries`]. Maps keep document order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Default bindings: action name -> trigger list
    #[serde(default)]
    pub keys: IndexMap<String, toml::Value>,

    /// Named modes
    #[serde(default)]
    pub modes: IndexMap<String, toml::Table>,
}

impl RawConfig {
    /// Parse a TOML configuration file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))
    }
}

/// One action name with its trigger strings, as written in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingEntry {
    pub action: String,
    pub triggers: Vec<String>,
}

/// An entry whose value was not a list of strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry {
    pub action: String,
    pub found: String,
}

/// Binding entries of one section, split into usable and malformed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingSet {
    pub entries: Vec<BindingEntry>,
    pub malformed: Vec<MalformedEntry>,
}

impl BindingSet {
    /// Sort `(action, value)` pairs by whether the value is a string list
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a toml::Value)>,
    {
        let mut set = BindingSet::default();
        for (action, value) in entries {
            match string_list(value) {
                Some(triggers) => set.entries.push(BindingEntry {
                    action: action.clone(),
                    triggers,
                }),
                None => set.malformed.push(MalformedEntry {
                    action: action.clone(),
                    found: describe(value),
                }),
            }
        }
        set
    }
}

/// A mode after structural validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSpec {
    pub name: String,
    /// Raw starter strings (not yet normalized)
    pub starters: Vec<String>,
    pub sticky: bool,
    pub bindings: BindingSet,
}

impl ModeSpec {
    /// Validate a mode table.
    ///
    /// The sticky flag is checked first, then the starter list, which must
    /// hold at least one key. The reserved keys never reach the binding set.
    pub fn from_table(name: &str, table: &toml::Table) -> Result<Self, ConfigError> {
        let sticky = match table.get(MODE_STICKY_KEY) {
            None => false,
            Some(toml::Value::Boolean(sticky)) => *sticky,
            Some(other) => {
                return Err(ConfigError::StickyType {
                    mode: name.to_string(),
                    found: describe(other),
                })
            }
        };

        let starters = match table.get(MODE_START_KEY) {
            None => {
                return Err(ConfigError::MissingStarter {
                    mode: name.to_string(),
                })
            }
            Some(value) => string_list(value).ok_or_else(|| ConfigError::StarterType {
                mode: name.to_string(),
                found: describe(value),
            })?,
        };
        if starters.is_empty() {
            return Err(ConfigError::MissingStarter {
                mode: name.to_string(),
            });
        }

        let bindings = BindingSet::from_entries(
            table
                .iter()
                .filter(|(key, _)| key.as_str() != MODE_STICKY_KEY && key.as_str() != MODE_START_KEY),
        );

        Ok(ModeSpec {
            name: name.to_string(),
            starters,
            sticky,
            bindings,
        })
    }
}

/// `Some` only for an array whose elements are all strings
fn string_list(value: &toml::Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn describe(value: &toml::Value) -> String {
    match value {
        toml::Value::Array(items) => match items.iter().find(|item| !item.is_str()) {
            Some(item) => format!("array containing {}", item.type_str()),
            None => "array".to_string(),
        },
        other => other.type_str().to_string(),
    }
}
