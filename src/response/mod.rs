//! Models for inventory responses.

mod description;
mod inventory;
mod item;
mod page;

pub use description::{Action, AppData, Color, Description, ItemDescription, Tag, NOT_USABLE_IN_CRAFTING};
pub use inventory::{Asset, Inventory};
pub use item::Item;
pub use page::InventoryPage;
