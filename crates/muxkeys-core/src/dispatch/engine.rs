// Muxkeys Modal Dispatcher
// Classifies key events against the default table and the active mode

use super::handle::ConfigHandle;
use crate::action::{Action, ActionHandler};
use crate::config::CompiledConfig;
use crate::key::KeyId;

/// Which binding table the next key is checked against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DispatchState {
    /// No mode active; starters and default bindings apply
    #[default]
    Idle,
    /// A mode was started; its table applies to the next key
    InMode(String),
}

/// What a single key event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Key was a mode starter; no action ran
    ModeStarted(String),
    /// Key resolved to an action, which was performed
    Performed(Action),
    /// Key matched nothing; the caller should forward it
    Unmatched,
}

impl DispatchOutcome {
    /// Whether the key was used by the dispatcher
    pub fn is_consumed(&self) -> bool {
        !matches!(self, DispatchOutcome::Unmatched)
    }
}

/// Modal key dispatcher.
///
/// Holds the only mutable dispatch state, the active mode. Events are fed
/// one at a time through `&mut self`, so no locking is needed for the state
/// itself; the config is read through a [`ConfigHandle`] snapshot per event.
#[derive(Debug)]
pub struct Dispatcher {
    config: ConfigHandle,
    state: DispatchState,
}

impl Dispatcher {
    /// Create a dispatcher owning a fresh handle to `config`
    pub fn new(config: CompiledConfig) -> Self {
        Self::with_handle(ConfigHandle::new(config))
    }

    /// Create a dispatcher reading from a shared handle
    pub fn with_handle(config: ConfigHandle) -> Self {
        Self {
            config,
            state: DispatchState::Idle,
        }
    }

    /// Handle used for reloading
    pub fn handle(&self) -> &ConfigHandle {
        &self.config
    }

    pub fn state(&self) -> &DispatchState {
        &self.state
    }

    /// Name of the active mode, if any
    pub fn current_mode(&self) -> Option<&str> {
        match &self.state {
            DispatchState::Idle => None,
            DispatchState::InMode(mode) => Some(mode),
        }
    }

    /// Drop any active mode
    pub fn reset(&mut self) {
        self.state = DispatchState::Idle;
    }

    /// Dispatch one key event, returning whether it was consumed
    pub fn dispatch<H>(&mut self, event: &str, ctx: &mut H) -> bool
    where
        H: ActionHandler + ?Sized,
    {
        self.process_event(event, ctx).is_consumed()
    }

    /// Dispatch one key event.
    ///
    /// Idle: a starter arms its mode, otherwise the default table is tried.
    /// Starters win over default bindings on the same key.
    ///
    /// In a mode: a one-shot mode is spent before the key is looked at. A
    /// match in the mode table performs the action and, for a sticky mode,
    /// keeps the mode. A miss returns to idle without trying the default
    /// table, even for a sticky mode.
    pub fn process_event<H>(&mut self, event: &str, ctx: &mut H) -> DispatchOutcome
    where
        H: ActionHandler + ?Sized,
    {
        let key = KeyId::new(event);
        let config = self.config.snapshot();

        let outcome = match std::mem::take(&mut self.state) {
            DispatchState::Idle => {
                if let Some(mode) = config.mode_for_starter(&key) {
                    self.state = DispatchState::InMode(mode.to_string());
                    DispatchOutcome::ModeStarted(mode.to_string())
                } else if let Some(action) = config.default_binding(&key) {
                    ctx.perform(action);
                    DispatchOutcome::Performed(action)
                } else {
                    DispatchOutcome::Unmatched
                }
            }
            DispatchState::InMode(mode) => match config.mode_binding(&mode, &key) {
                Some(action) => {
                    if config.is_sticky(&mode) {
                        self.state = DispatchState::InMode(mode);
                    }
                    ctx.perform(action);
                    DispatchOutcome::Performed(action)
                }
                None => DispatchOutcome::Unmatched,
            },
        };

        log::trace!("key='{}' outcome={:?} state={:?}", key, outcome, self.state);
        outcome
    }
}
