use crate::types::{AppId, ContextId, Inventories};
use crate::response::Inventory;
use std::collections::HashSet;
use std::sync::Arc;

/// Inventories loaded so far along with the partitions which failed to load.
#[derive(Debug, Default)]
pub(crate) struct InventoryStore {
    inventories: Inventories,
    failed: HashSet<(AppId, ContextId)>,
}

impl InventoryStore {
    /// Inserts `inventory` unless an inventory for its app and context is already stored.
    /// Returns whether it was inserted.
    pub fn insert_if_absent(&mut self, inventory: Inventory) -> bool {
        let key = (inventory.appid, inventory.contextid);
        let contexts = self.inventories
            .entry(inventory.appid)
            .or_default();
        
        if contexts.contains_key(&inventory.contextid) {
            return false;
        }
        
        contexts.insert(inventory.contextid, Arc::new(inventory));
        self.failed.remove(&key);
        true
    }
    
    /// Records that a partition failed to load. Ignored if the partition was already loaded.
    pub fn mark_failed(&mut self, appid: AppId, contextid: ContextId) {
        if self.get(appid, contextid).is_none() {
            self.failed.insert((appid, contextid));
        }
    }
    
    pub fn get(&self, appid: AppId, contextid: ContextId) -> Option<&Arc<Inventory>> {
        self.inventories
            .get(&appid)
            .and_then(|contexts| contexts.get(&contextid))
    }
    
    pub fn is_failed(&self, appid: AppId, contextid: ContextId) -> bool {
        self.failed.contains(&(appid, contextid))
    }
    
    pub fn inventories(&self) -> &Inventories {
        &self.inventories
    }
}
