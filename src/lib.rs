//! Loads a Steam user's inventories across many apps and contexts at once.
//!
//! Each inventory is loaded in its own task, following page cursors until the whole inventory
//! is fetched, and the results are available once every inventory has finished loading.
//!
//! ```no_run
//! use steam_inventory_aggregator::{InventoryAggregator, SteamID};
//!
//! # async fn run() -> Result<(), steam_inventory_aggregator::Error> {
//! let aggregator = InventoryAggregator::builder(SteamID::from(76561198000000000))
//!     .partition(440, 2)
//!     .partition(730, 2)
//!     .start()?;
//! let inventory = aggregator.get_inventory(730, 2).await?;
//!
//! println!("{} items", inventory.len());
//! # Ok(())
//! # }
//! ```

pub mod enums;
pub mod error;
pub mod fetcher;
pub mod helpers;
pub mod page_fetcher;
pub mod request;
pub mod resolver;
pub mod response;
pub mod serialize;
pub mod types;

mod aggregator;

#[cfg(test)]
mod test_helpers;

pub use aggregator::{
    InventoryAggregator,
    InventoryAggregatorBuilder,
    PartitionStatus,
    DEFAULT_PAGE_SIZE,
    DEFAULT_FOREIGN_PAGE_SIZE,
};
pub use error::{Error, MissingDescriptionError};
pub use fetcher::{Fetch, WebFetcher};
pub use page_fetcher::PageFetcher;
pub use resolver::resolve_partition;
pub use response::{Inventory, InventoryPage, Item, ItemDescription};
pub use types::Inventories;
pub use steamid_ng::SteamID;
