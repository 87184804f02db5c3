//! Loads every page of a single inventory.

use crate::error::Error;
use crate::page_fetcher::PageFetcher;
use crate::request::PageRequest;
use crate::response::Inventory;

/// The most pages loaded for a single inventory before giving up on the rest.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Loads the inventory described by `request`, following page cursors until the server reports
/// no more items, and merges the pages in the order they were received.
///
/// Returns `None` if the first page could not be loaded. A private inventory is returned as an
/// empty inventory marked private. If a later page fails, or `max_pages` pages have been loaded,
/// the items loaded so far are returned with `is_complete` unset.
pub async fn resolve_partition(
    fetcher: &PageFetcher,
    mut request: PageRequest,
    max_pages: u32,
) -> Option<Inventory> {
    let PageRequest {
        steamid,
        appid,
        contextid,
        ..
    } = request;
    let mut page = match fetcher.fetch_page(&request).await {
        Ok(page) => page,
        Err(Error::PrivateInventory) => {
            log::debug!("Inventory {appid}:{contextid} for {} is private", u64::from(steamid));
            return Some(Inventory::private(steamid, appid, contextid));
        },
        Err(error) => {
            log::warn!("Failed to load inventory {appid}:{contextid} for {}: {error}", u64::from(steamid));
            return None;
        },
    };
    let mut inventory = Inventory {
        total_inventory_count: page.total_inventory_count,
        ..Inventory::new(steamid, appid, contextid)
    };
    let mut pages = 1;
    
    loop {
        let more_items = page.more_items;
        let next_cursor = page.next_cursor();
        
        inventory.append_page(page);
        
        let Some(cursor) = next_cursor else {
            if more_items {
                log::warn!("Inventory {appid}:{contextid} reported more items without a cursor");
            } else {
                inventory.is_complete = true;
            }
            
            break;
        };
        
        // shouldn't occur, but we wouldn't want to call this endlessly if it does...
        if request.start_assetid == Some(cursor) {
            log::warn!("Inventory {appid}:{contextid} repeated cursor {cursor}");
            break;
        }
        
        if pages >= max_pages {
            log::warn!("Stopped loading inventory {appid}:{contextid} after {pages} pages");
            break;
        }
        
        request = request.after(cursor);
        page = match fetcher.fetch_page(&request).await {
            Ok(page) => page,
            Err(error) => {
                log::warn!("Failed to load inventory {appid}:{contextid} after {cursor}: {error}");
                break;
            },
        };
        pages += 1;
        log::debug!("Loaded page {pages} of inventory {appid}:{contextid}");
    }
    
    Some(inventory)
}
