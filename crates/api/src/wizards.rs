//! Create-marketplace wizards for signed-in clients.

use std::collections::HashMap;
use std::sync::Arc;

use nftfy_core::submit::SubmitGate;
use nftfy_core::wizard::WizardState;
use tokio::sync::{Mutex, RwLock};

/// A client's wizard plus the gate guarding its submit control.
#[derive(Default)]
pub struct WizardSlot {
    pub state: Mutex<WizardState>,
    pub gate: SubmitGate,
}

/// All live wizards, keyed by the owning client's token hash.
///
/// A wizard is created on first access and discarded explicitly or when the
/// owning client signs out.
pub struct WizardRegistry {
    slots: RwLock<HashMap<String, Arc<WizardSlot>>>,
}

impl Default for WizardRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardRegistry {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// The wizard owned by `owner`, created empty if it does not exist yet.
    pub async fn get_or_create(&self, owner: &str) -> Arc<WizardSlot> {
        if let Some(slot) = self.slots.read().await.get(owner) {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write().await;
        Arc::clone(slots.entry(owner.to_string()).or_default())
    }

    /// The wizard owned by `owner`, if one has been started.
    pub async fn get(&self, owner: &str) -> Option<Arc<WizardSlot>> {
        self.slots.read().await.get(owner).cloned()
    }

    /// Drop the wizard owned by `owner`. Returns `true` if one existed.
    pub async fn discard(&self, owner: &str) -> bool {
        self.slots.write().await.remove(owner).is_some()
    }

    /// Number of live wizards.
    pub async fn count(&self) -> usize {
        self.slots.read().await.len()
    }
}
