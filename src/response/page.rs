use super::{Item, ItemDescription};
use crate::types::AssetId;
use crate::serialize;
use serde::Deserialize;

/// A single page of an inventory as returned by the `inventory` endpoint.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct InventoryPage {
    /// The items on this page.
    #[serde(default)]
    #[serde(rename = "assets")]
    #[serde(deserialize_with = "serialize::null_as_empty")]
    pub items: Vec<Item>,
    /// The descriptions for the items on this page.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::null_as_empty")]
    pub descriptions: Vec<ItemDescription>,
    /// Whether the request was successful.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub success: bool,
    /// Whether more pages follow this one.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub more_items: bool,
    /// The cursor for the next page.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::option_str_to_number")]
    pub last_assetid: Option<AssetId>,
    /// The number of items in the whole inventory, across all pages.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub total_inventory_count: u32,
}

impl InventoryPage {
    /// The cursor to request the page following this one, if there is one.
    pub fn next_cursor(&self) -> Option<AssetId> {
        if self.more_items {
            self.last_assetid
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn parses_inventory_page() {
        let page: InventoryPage = serde_json::from_str(include_str!("fixtures/inventory_page_1.json")).unwrap();
        
        assert!(page.success);
        assert!(page.more_items);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.descriptions.len(), 2);
        assert_eq!(page.total_inventory_count, 3);
        assert_eq!(page.next_cursor(), Some(100));
    }
    
    #[test]
    fn parses_last_page() {
        let page: InventoryPage = serde_json::from_str(include_str!("fixtures/inventory_page_2.json")).unwrap();
        
        assert!(!page.more_items);
        assert_eq!(page.next_cursor(), None);
        assert_eq!(page.items.first().map(|item| item.assetid), Some(105));
    }
    
    #[test]
    fn parses_empty_inventory() {
        let page: InventoryPage = serde_json::from_str(r#"{"total_inventory_count":0,"success":1,"rwgrsn":-2}"#).unwrap();
        
        assert!(page.success);
        assert!(page.items.is_empty());
    }
}
