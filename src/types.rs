//! Types for common values in Steam inventory responses.

/// Uniquely identifies an application on Steam. For example: 440 for Team Fortress 2.
pub type AppId = u32;
/// A context ID belonging to an [`AppId`].
pub type ContextId = u64;
/// An asset ID unique to an [`AppId`] + [`ContextId`] combination.
pub type AssetId = u64;
/// An amount for stackable items. For non-stackable items this is simply `1`.
pub type Amount = u32;
/// An ID for an [`crate::response::ItemDescription`] which provides a general overview of an
/// item.
pub type ClassId = u64;
/// A more specific instance of a class, for example a Team Fortress 2 item which is painted.
/// Items without a specific instance use `0`.
pub type InstanceId = u64;

/// The identifying triple shared by an item and its description.
pub type ClassKey = (AppId, ClassId, InstanceId);

use crate::response::Inventory;
use std::sync::Arc;
use std::collections::HashMap;

/// Inventories for one application, keyed by context ID.
pub type ContextInventories = HashMap<ContextId, Arc<Inventory>>;
/// The result of an aggregation, keyed by app ID then by context ID.
pub type Inventories = HashMap<AppId, ContextInventories>;
