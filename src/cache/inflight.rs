//! Single-flight registry for background list generation.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

/// Set of targets whose generation is currently running.
///
/// Registration is an atomic check-and-insert under one lock, so at most one
/// [`InflightGuard`] exists per target at any time.
#[derive(Debug, Default)]
pub struct InflightRegistry {
    targets: Mutex<HashSet<String>>,
}

impl InflightRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers `target` unless it is already in flight.
    ///
    /// The returned guard releases the registration when dropped, on every exit path.
    pub fn try_register(self: &Arc<Self>, target: &str) -> Option<InflightGuard> {
        if !self.targets.lock().insert(target.to_string()) {
            return None;
        }

        Some(InflightGuard {
            registry: Arc::clone(self),
            target: target.to_string(),
        })
    }

    pub fn contains(&self, target: &str) -> bool {
        self.targets.lock().contains(target)
    }

    pub fn len(&self) -> usize {
        self.targets.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.lock().is_empty()
    }
}

/// Registration token for one in-flight target.
#[derive(Debug)]
pub struct InflightGuard {
    registry: Arc<InflightRegistry>,
    target: String,
}

impl InflightGuard {
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        self.registry.targets.lock().remove(&self.target);
    }
}
