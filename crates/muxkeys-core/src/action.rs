// Muxkeys Actions
// Window-manager commands that key bindings resolve to

use std::collections::HashMap;
use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// A window-manager command a binding can invoke.
///
/// The config file names actions in kebab-case (`split-pane-vert`); the
/// string form of each variant is exactly that name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    NewPane,
    KillPane,
    AllPaneKill,
    ToggleFullscreen,
    ToggleSearch,
    HideHelpBar,
    SplitPaneVert,
    SplitPaneHoriz,
    MovePaneUp,
    MovePaneDown,
    MovePaneLeft,
    MovePaneRight,
    MoveSelectionUp,
    MoveSelectionDown,
    MoveSelectionLeft,
    MoveSelectionRight,
    ResizeUp,
    ResizeDown,
    ResizeLeft,
    ResizeRight,
}

impl Action {
    /// The config-file name of this action
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receiver of resolved actions.
///
/// Implemented by the host application's root context. The dispatcher passes
/// the context through untouched and calls `perform` once per consumed key
/// that maps to an action.
pub trait ActionHandler {
    fn perform(&mut self, action: Action);
}

impl<F> ActionHandler for F
where
    F: FnMut(Action),
{
    fn perform(&mut self, action: Action) {
        self(action)
    }
}

/// Read-only lookup from action name to [`Action`].
///
/// The host establishes the registry before compiling a config; the compiler
/// only queries it. Names missing from the registry are skipped with a
/// warning at compile time.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    by_name: HashMap<&'static str, Action>,
}

impl ActionRegistry {
    /// Registry with every built-in action under its kebab-case name
    pub fn builtin() -> Self {
        Self::from_actions(Action::iter())
    }

    /// Registry restricted to the given actions
    pub fn from_actions<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        Self {
            by_name: actions.into_iter().map(|a| (a.name(), a)).collect(),
        }
    }

    /// Resolve an action name
    pub fn lookup(&self, name: &str) -> Option<Action> {
        self.by_name.get(name).copied()
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
