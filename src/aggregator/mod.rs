//! Loads many inventories of one owner concurrently.

mod builder;
mod store;

pub use builder::{InventoryAggregatorBuilder, DEFAULT_PAGE_SIZE, DEFAULT_FOREIGN_PAGE_SIZE};

use store::InventoryStore;
use crate::error::Error;
use crate::fetcher::{Fetch, WebFetcher};
use crate::page_fetcher::PageFetcher;
use crate::request::PageRequest;
use crate::resolver::resolve_partition;
use crate::response::Inventory;
use crate::types::{AppId, AssetId, ContextId, Inventories};
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::atomic::{AtomicBool, Ordering};
use futures::future::join_all;
use steamid_ng::SteamID;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

type PartitionTask = ((AppId, ContextId), JoinHandle<()>);

/// The state of one requested inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionStatus {
    /// The inventory is still loading.
    Pending,
    /// The inventory was loaded.
    Resolved,
    /// The inventory could not be loaded.
    Failed,
    /// The inventory was never requested.
    NotRequested,
}

/// Loads the inventories of one owner across many apps and contexts at once.
///
/// Loading begins as soon as the aggregator is started; every inventory is loaded in its own
/// task. Use [`InventoryAggregator::inventories`] to wait for all of them. An inventory which
/// fails to load is left out of the results rather than failing the whole aggregation.
#[derive(Debug, Clone)]
pub struct InventoryAggregator {
    steamid: SteamID,
    requested: Arc<HashSet<(AppId, ContextId)>>,
    store: Arc<RwLock<InventoryStore>>,
    fetcher: PageFetcher,
    foreign_page_size: u32,
    max_pages: u32,
    loaded: Arc<watch::Sender<bool>>,
    success: Arc<AtomicBool>,
}

impl InventoryAggregator {
    /// Starts loading the inventories of `steamid` for each app and context pair using the
    /// default options. Accepts any map of app IDs to context IDs.
    pub fn start<I>(
        steamid: SteamID,
        partitions: I,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (AppId, ContextId)>,
    {
        Self::builder(steamid)
            .partitions(partitions)
            .start()
    }
    
    /// Builder for constructing an [`InventoryAggregator`].
    pub fn builder(steamid: SteamID) -> InventoryAggregatorBuilder {
        InventoryAggregatorBuilder::new(steamid)
    }
    
    pub(crate) fn launch(builder: InventoryAggregatorBuilder) -> Result<Self, Error> {
        let runtime = Handle::try_current()
            .map_err(|_error| Error::Parameter("Inventories must be loaded within a Tokio runtime"))?;
        let fetcher: Arc<dyn Fetch> = match builder.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(WebFetcher::new()?),
        };
        let fetcher = PageFetcher::new(fetcher)
            .hostname(builder.hostname)
            .max_attempts(builder.max_attempts)
            .retry_delay(builder.retry_delay);
        let (loaded, _) = watch::channel(false);
        let aggregator = Self {
            steamid: builder.steamid,
            requested: Arc::new(builder.partitions.iter().copied().collect()),
            store: Arc::new(RwLock::new(InventoryStore::default())),
            fetcher,
            foreign_page_size: builder.foreign_page_size,
            max_pages: builder.max_pages,
            loaded: Arc::new(loaded),
            success: Arc::new(AtomicBool::new(true)),
        };
        let construct = runtime.spawn(Self::spawn_partitions(
            aggregator.clone(),
            builder.partitions,
            builder.page_size,
            builder.start_assetid,
        ));
        
        runtime.spawn(Self::wait_partitions(aggregator.clone(), construct));
        
        Ok(aggregator)
    }
    
    async fn spawn_partitions(
        self,
        partitions: Vec<(AppId, ContextId)>,
        page_size: u32,
        start_assetid: Option<AssetId>,
    ) -> Vec<PartitionTask> {
        partitions
            .into_iter()
            .map(|(appid, contextid)| {
                let aggregator = self.clone();
                let request = PageRequest {
                    steamid: self.steamid,
                    appid,
                    contextid,
                    count: page_size,
                    start_assetid,
                };
                let task = tokio::spawn(async move {
                    let inventory = resolve_partition(
                        &aggregator.fetcher,
                        request,
                        aggregator.max_pages,
                    ).await;
                    
                    aggregator.store_result(appid, contextid, inventory);
                });
                
                ((appid, contextid), task)
            })
            .collect()
    }
    
    async fn wait_partitions(self, construct: JoinHandle<Vec<PartitionTask>>) {
        let tasks = match construct.await {
            Ok(tasks) => tasks,
            Err(error) => {
                log::error!("Failed to start loading inventories: {error}");
                self.success.store(false, Ordering::SeqCst);
                Vec::new()
            },
        };
        let (keys, handles): (Vec<_>, Vec<_>) = tasks.into_iter().unzip();
        let results = join_all(handles).await;
        
        for ((appid, contextid), result) in keys.into_iter().zip(results) {
            if let Err(error) = result {
                log::warn!("Task loading inventory {appid}:{contextid} failed: {error}");
                self.write_store().mark_failed(appid, contextid);
            }
        }
        
        self.loaded.send_if_modified(|loaded| {
            if *loaded {
                return false;
            }
            
            *loaded = true;
            true
        });
    }
    
    fn store_result(&self, appid: AppId, contextid: ContextId, inventory: Option<Inventory>) -> bool {
        let mut store = self.write_store();
        
        match inventory {
            Some(inventory) => {
                let inserted = store.insert_if_absent(inventory);
                
                if !inserted {
                    log::debug!("Inventory {appid}:{contextid} was already loaded");
                }
                
                inserted
            },
            None => {
                store.mark_failed(appid, contextid);
                false
            },
        }
    }
    
    fn read_store(&self) -> RwLockReadGuard<'_, InventoryStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }
    
    fn write_store(&self) -> RwLockWriteGuard<'_, InventoryStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
    
    async fn wait_loaded(&self) {
        let mut receiver = self.loaded.subscribe();
        // The sender lives as long as self so this cannot fail.
        let _ = receiver.wait_for(|loaded| *loaded).await;
    }
    
    /// The owner of the inventories.
    pub fn steamid(&self) -> SteamID {
        self.steamid
    }
    
    /// Waits for every inventory to finish loading, then returns them keyed by app ID and
    /// context ID. Inventories which failed to load are absent.
    pub async fn inventories(&self) -> Inventories {
        self.wait_loaded().await;
        self.read_store().inventories().clone()
    }
    
    /// Waits for every inventory to finish loading, then gets the inventory for `appid` and
    /// `contextid`.
    ///
    /// Fails with [`Error::NotFound`] if the inventory was not requested or failed to load. Use
    /// [`InventoryAggregator::status`] to tell these apart.
    pub async fn get_inventory(
        &self,
        appid: AppId,
        contextid: ContextId,
    ) -> Result<Arc<Inventory>, Error> {
        self.wait_loaded().await;
        self.read_store()
            .get(appid, contextid)
            .cloned()
            .ok_or(Error::NotFound {
                appid,
                contextid,
            })
    }
    
    /// Loads an inventory belonging to any owner and adds it to the results, unless an inventory
    /// for the same app and context is already present. Returns whether it was added.
    pub async fn add_inventory(
        &self,
        steamid: SteamID,
        appid: AppId,
        contextid: ContextId,
    ) -> bool {
        let request = PageRequest::new(steamid, appid, contextid, self.foreign_page_size);
        let inventory = resolve_partition(&self.fetcher, request, self.max_pages).await;
        
        self.store_result(appid, contextid, inventory)
    }
    
    /// The loading state of the inventory for `appid` and `contextid`.
    pub fn status(&self, appid: AppId, contextid: ContextId) -> PartitionStatus {
        let store = self.read_store();
        
        if store.get(appid, contextid).is_some() {
            PartitionStatus::Resolved
        } else if store.is_failed(appid, contextid) {
            PartitionStatus::Failed
        } else if self.requested.contains(&(appid, contextid)) {
            PartitionStatus::Pending
        } else {
            PartitionStatus::NotRequested
        }
    }
    
    /// Subscribes to the notification sent once every inventory has finished loading. The value
    /// becomes `true` exactly once and never changes afterwards.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.loaded.subscribe()
    }
    
    /// Whether every inventory has finished loading.
    pub fn is_loaded(&self) -> bool {
        *self.loaded.borrow()
    }
    
    /// Whether loading was started successfully. This is unaffected by individual inventories
    /// failing to load.
    pub fn success(&self) -> bool {
        self.success.load(Ordering::SeqCst)
    }
}
