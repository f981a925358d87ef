// Muxkeys Config Handle
// Shared, swappable compiled config for live reload

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::CompiledConfig;

/// Shared reference to the active [`CompiledConfig`].
///
/// Clones point at the same slot. `replace` swaps the whole config at once,
/// and readers take a snapshot before looking anything up, so an event is
/// never evaluated against a mix of old and new tables.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<Arc<CompiledConfig>>>,
}

impl ConfigHandle {
    pub fn new(config: CompiledConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    /// Current config
    pub fn snapshot(&self) -> Arc<CompiledConfig> {
        self.inner.read().clone()
    }

    /// Install a new config, returning the previous one
    pub fn replace(&self, config: CompiledConfig) -> Arc<CompiledConfig> {
        let mut slot = self.inner.write();
        std::mem::replace(&mut *slot, Arc::new(config))
    }
}
