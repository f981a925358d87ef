// Muxkeys Config Compiler
// Turns a validated document into lookup tables for the dispatcher

use std::collections::HashMap;
use std::fmt;

use super::parser::{BindingSet, ConfigError, GeneralSettings, ModeSpec, RawConfig};
use crate::action::{Action, ActionRegistry};
use crate::key::KeyId;

/// Section name of the default binding set
pub const DEFAULT_SECTION: &str = "keys";

/// A problem that was skipped instead of failing compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileWarning {
    /// Action name not present in the registry
    UnknownAction { section: String, action: String },
    /// Binding value that is not a list of strings
    MalformedBinding {
        section: String,
        action: String,
        found: String,
    },
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileWarning::UnknownAction { section, action } => {
                write!(f, "Incorrect keybinding '{}' in [{}]", action, section)
            }
            CompileWarning::MalformedBinding {
                section,
                action,
                found,
            } => write!(
                f,
                "Could not read binding '{}' in [{}]: expected a list of strings, found {}",
                action, section, found
            ),
        }
    }
}

/// Runtime lookup tables built from a config document.
///
/// All keys are [`KeyId`]s, so lookups are case-insensitive. Immutable once
/// built; reload by compiling a fresh one and swapping it in.
#[derive(Debug, Clone, Default)]
pub struct CompiledConfig {
    mode_starters: HashMap<KeyId, String>,
    is_sticky: HashMap<String, bool>,
    default_bindings: HashMap<KeyId, Action>,
    mode_bindings: HashMap<String, HashMap<KeyId, Action>>,
    general: GeneralSettings,
    warnings: Vec<CompileWarning>,
}

impl CompiledConfig {
    /// Mode started by this key, if any
    pub fn mode_for_starter(&self, key: &KeyId) -> Option<&str> {
        self.mode_starters.get(key).map(String::as_str)
    }

    /// Whether a mode stays active across matched keys.
    ///
    /// Unknown modes report `false`.
    pub fn is_sticky(&self, mode: &str) -> bool {
        self.is_sticky.get(mode).copied().unwrap_or(false)
    }

    /// Default-table action for this key
    pub fn default_binding(&self, key: &KeyId) -> Option<Action> {
        self.default_bindings.get(key).copied()
    }

    /// Mode-table action for this key
    pub fn mode_binding(&self, mode: &str, key: &KeyId) -> Option<Action> {
        self.mode_bindings.get(mode)?.get(key).copied()
    }

    pub fn mode_starters(&self) -> &HashMap<KeyId, String> {
        &self.mode_starters
    }

    pub fn default_bindings(&self) -> &HashMap<KeyId, Action> {
        &self.default_bindings
    }

    /// Binding table of one mode
    pub fn mode_bindings(&self, mode: &str) -> Option<&HashMap<KeyId, Action>> {
        self.mode_bindings.get(mode)
    }

    /// Names of all compiled modes
    pub fn mode_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.mode_bindings.keys().map(String::as_str)
    }

    pub fn general(&self) -> &GeneralSettings {
        &self.general
    }

    /// Entries skipped during compilation
    pub fn warnings(&self) -> &[CompileWarning] {
        &self.warnings
    }
}

/// Compile a raw document against an action registry.
///
/// Structural problems in a mode (missing or mistyped `mode-start`, mistyped
/// `mode-sticky`) abort with an error naming the mode. Unknown action names
/// and malformed binding values are logged, recorded as warnings and left
/// out of the tables.
pub fn compile(raw: RawConfig, registry: &ActionRegistry) -> Result<CompiledConfig, ConfigError> {
    let mut config = CompiledConfig {
        general: raw.general,
        ..CompiledConfig::default()
    };

    for (name, table) in &raw.modes {
        let spec = ModeSpec::from_table(name, table)?;
        let section = format!("modes.{}", spec.name);

        config.is_sticky.insert(spec.name.clone(), spec.sticky);
        for starter in &spec.starters {
            let key = KeyId::new(starter);
            if let Some(previous) = config.mode_starters.insert(key.clone(), spec.name.clone()) {
                if previous != spec.name {
                    log::debug!(
                        "Starter '{}' moved from mode '{}' to mode '{}'",
                        key, previous, spec.name
                    );
                }
            }
        }

        let bindings = compile_bindings(&section, &spec.bindings, registry, &mut config.warnings);
        log::debug!(
            "Mode '{}' compiled with {} starters, {} bindings, sticky={}",
            spec.name,
            spec.starters.len(),
            bindings.len(),
            spec.sticky
        );
        config.mode_bindings.insert(spec.name, bindings);
    }

    let defaults = BindingSet::from_entries(&raw.keys);
    config.default_bindings =
        compile_bindings(DEFAULT_SECTION, &defaults, registry, &mut config.warnings);
    log::debug!(
        "Default bindings compiled with {} keys",
        config.default_bindings.len()
    );

    Ok(config)
}

fn compile_bindings(
    section: &str,
    bindings: &BindingSet,
    registry: &ActionRegistry,
    warnings: &mut Vec<CompileWarning>,
) -> HashMap<KeyId, Action> {
    let mut compiled = HashMap::new();

    for entry in &bindings.malformed {
        let warning = CompileWarning::MalformedBinding {
            section: section.to_string(),
            action: entry.action.clone(),
            found: entry.found.clone(),
        };
        log::warn!("{}", warning);
        warnings.push(warning);
    }

    for entry in &bindings.entries {
        let Some(action) = registry.lookup(&entry.action) else {
            let warning = CompileWarning::UnknownAction {
                section: section.to_string(),
                action: entry.action.clone(),
            };
            log::warn!("{}", warning);
            warnings.push(warning);
            continue;
        };

        for trigger in &entry.triggers {
            let key = KeyId::new(trigger);
            if let Some(previous) = compiled.insert(key.clone(), action) {
                if previous != action {
                    log::debug!(
                        "Trigger '{}' in [{}] rebound from {} to {}",
                        key, section, previous, action
                    );
                }
            }
        }
    }

    compiled
}
