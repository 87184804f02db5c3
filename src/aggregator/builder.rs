use super::InventoryAggregator;
use crate::error::Error;
use crate::fetcher::{Fetch, WebFetcher};
use crate::helpers::HOSTNAME;
use crate::page_fetcher::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};
use crate::resolver::DEFAULT_MAX_PAGES;
use crate::types::{AppId, AssetId, ContextId};
use std::sync::Arc;
use std::time::Duration;
use reqwest_middleware::ClientWithMiddleware;
use steamid_ng::SteamID;

/// The number of items to fetch per page when loading inventories.
pub const DEFAULT_PAGE_SIZE: u32 = 500;
/// The number of items to fetch per page when loading inventories with
/// [`InventoryAggregator::add_inventory`].
pub const DEFAULT_FOREIGN_PAGE_SIZE: u32 = 5000;

/// Builder for constructing an [`InventoryAggregator`].
#[derive(Clone)]
pub struct InventoryAggregatorBuilder {
    /// The owner of the inventories.
    pub(crate) steamid: SteamID,
    /// The app and context pairs to load.
    pub(crate) partitions: Vec<(AppId, ContextId)>,
    /// The number of items to fetch per page. Defaults to 500.
    pub(crate) page_size: u32,
    /// The number of items to fetch per page for inventories added later. Defaults to 5000.
    pub(crate) foreign_page_size: u32,
    /// The asset ID to start loading each inventory after.
    pub(crate) start_assetid: Option<AssetId>,
    /// The most pages to load per inventory. Defaults to 1000.
    pub(crate) max_pages: u32,
    /// The number of times each page request is attempted. Defaults to 3.
    pub(crate) max_attempts: u32,
    /// The time to wait between attempts. Defaults to 1 second.
    pub(crate) retry_delay: Duration,
    /// The host to request inventories from.
    pub(crate) hostname: String,
    /// Fetcher to use for requests.
    pub(crate) fetcher: Option<Arc<dyn Fetch>>,
}

impl InventoryAggregatorBuilder {
    /// Creates a new [`InventoryAggregatorBuilder`] for the inventories of `steamid`.
    pub fn new(steamid: SteamID) -> Self {
        Self {
            steamid,
            partitions: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            foreign_page_size: DEFAULT_FOREIGN_PAGE_SIZE,
            start_assetid: None,
            max_pages: DEFAULT_MAX_PAGES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            hostname: HOSTNAME.to_string(),
            fetcher: None,
        }
    }
    
    /// Adds an inventory to load.
    pub fn partition(mut self, appid: AppId, contextid: ContextId) -> Self {
        self.partitions.push((appid, contextid));
        self
    }
    
    /// Adds inventories to load. Accepts any map of app IDs to context IDs.
    pub fn partitions<I>(mut self, partitions: I) -> Self
    where
        I: IntoIterator<Item = (AppId, ContextId)>,
    {
        self.partitions.extend(partitions);
        self
    }
    
    /// The number of items to fetch per page. Defaults to 500.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
    
    /// The number of items to fetch per page for inventories added with
    /// [`InventoryAggregator::add_inventory`]. Defaults to 5000.
    pub fn foreign_page_size(mut self, page_size: u32) -> Self {
        self.foreign_page_size = page_size;
        self
    }
    
    /// The asset ID to start loading each inventory after.
    pub fn start_assetid(mut self, start_assetid: AssetId) -> Self {
        self.start_assetid = Some(start_assetid);
        self
    }
    
    /// The most pages to load per inventory. Inventories with more pages are returned
    /// incomplete. Defaults to 1000.
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }
    
    /// The number of times each page request is attempted. Defaults to 3.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
    
    /// The time to wait between attempts. Defaults to 1 second.
    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }
    
    /// The host to request inventories from. Defaults to `https://steamcommunity.com`.
    pub fn hostname<T>(mut self, hostname: T) -> Self
    where
        T: Into<String>,
    {
        self.hostname = hostname.into();
        self
    }
    
    /// Fetcher to use for requests.
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetch>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }
    
    /// Client to use for requests. Useful if you need to proxy your requests.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.fetcher = Some(Arc::new(WebFetcher::with_client(client)));
        self
    }
    
    /// Validates the options and starts loading every inventory. Must be called from within a
    /// Tokio runtime.
    pub fn start(self) -> Result<InventoryAggregator, Error> {
        if self.partitions.is_empty() {
            return Err(Error::Parameter("At least one inventory must be requested"));
        }
        
        if self.page_size == 0 || self.foreign_page_size == 0 {
            return Err(Error::Parameter("Page size must be greater than zero"));
        }
        
        if self.max_pages == 0 {
            return Err(Error::Parameter("Max pages must be greater than zero"));
        }
        
        InventoryAggregator::launch(self)
    }
}
