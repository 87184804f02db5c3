use super::{InventoryPage, Item, ItemDescription};
use crate::types::{AppId, ContextId, ClassKey};
use crate::error::MissingDescriptionError;
use std::collections::HashMap;
use steamid_ng::SteamID;

/// An item joined with its description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asset<'a> {
    pub item: &'a Item,
    pub description: &'a ItemDescription,
}

/// The merged inventory of one app and context, combining every page fetched for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    /// The owner of this inventory.
    pub steamid: SteamID,
    /// The app ID of this inventory.
    pub appid: AppId,
    /// The context ID of this inventory.
    pub contextid: ContextId,
    /// Items in the order they were received, page by page.
    pub items: Vec<Item>,
    /// Descriptions in the order they were received, page by page. The same description may
    /// appear more than once if it was included on multiple pages.
    pub descriptions: Vec<ItemDescription>,
    /// The number of items the server reported for the whole inventory.
    pub total_inventory_count: u32,
    /// Whether every page of the inventory was loaded.
    pub is_complete: bool,
    /// Whether the owner's inventory could not be accessed.
    pub is_private: bool,
}

impl Inventory {
    /// Creates a new empty [`Inventory`].
    pub fn new(
        steamid: SteamID,
        appid: AppId,
        contextid: ContextId,
    ) -> Self {
        Self {
            steamid,
            appid,
            contextid,
            items: Vec::new(),
            descriptions: Vec::new(),
            total_inventory_count: 0,
            is_complete: false,
            is_private: false,
        }
    }
    
    /// Creates an empty [`Inventory`] for an owner whose inventory is not accessible.
    pub fn private(
        steamid: SteamID,
        appid: AppId,
        contextid: ContextId,
    ) -> Self {
        Self {
            is_complete: true,
            is_private: true,
            ..Self::new(steamid, appid, contextid)
        }
    }
    
    /// Appends the contents of a page after everything received so far. The total count is
    /// left as reported by the first page.
    pub(crate) fn append_page(&mut self, page: InventoryPage) {
        self.items.extend(page.items);
        self.descriptions.extend(page.descriptions);
    }
    
    /// The number of items in this inventory.
    pub fn len(&self) -> usize {
        self.items.len()
    }
    
    /// Whether this inventory contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    
    /// Finds the item described by `description`.
    ///
    /// Descriptions are expected to describe at most one item in the inventory. If more than one
    /// item matches, which one is returned is unspecified.
    pub fn find_item(&self, description: &ItemDescription) -> Option<&Item> {
        let key = description.class_key();
        
        self.items
            .iter()
            .find(|item| item.class_key() == key)
    }
    
    /// Finds the first description for `item`. Returns `None` if no item is given or if no
    /// description matches.
    pub fn find_description<'a, I>(&self, item: I) -> Option<&ItemDescription>
    where
        I: Into<Option<&'a Item>>,
    {
        let key = item.into()?.class_key();
        
        self.descriptions
            .iter()
            .find(|description| description.class_key() == key)
    }
    
    /// Joins each item with its description, keeping item order.
    pub fn assets(&self) -> Result<Vec<Asset<'_>>, MissingDescriptionError> {
        let map = self.description_map();
        
        self.items
            .iter()
            .map(|item| {
                map.get(&item.class_key())
                    .copied()
                    .map(|description| Asset {
                        item,
                        description,
                    })
                    .ok_or(MissingDescriptionError {
                        appid: item.appid,
                        classid: item.classid,
                        instanceid: item.instanceid,
                    })
            })
            .collect()
    }
    
    /// Items whose description marks them as tradable. Items without a description are skipped.
    pub fn tradable_items(&self) -> Vec<&Item> {
        let map = self.description_map();
        
        self.items
            .iter()
            .filter(|item| {
                map.get(&item.class_key())
                    .map(|description| description.is_tradable)
                    .unwrap_or(false)
            })
            .collect()
    }
    
    // The first description wins when descriptions repeat across pages.
    fn description_map(&self) -> HashMap<ClassKey, &ItemDescription> {
        let mut map = HashMap::with_capacity(self.descriptions.len());
        
        for description in &self.descriptions {
            map.entry(description.class_key()).or_insert(description);
        }
        
        map
    }
}
