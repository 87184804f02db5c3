use crate::types::{AppId, ContextId, AssetId, ClassId, InstanceId, Amount, ClassKey};
use crate::serialize;
use serde::{Serialize, Deserialize};

/// An item in an inventory. Items only identify an asset; names and other details live in the
/// [`super::ItemDescription`] sharing its [`Item::class_key`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Item {
    /// The app ID e.g. 440 for Team Fortress 2 or 730 for Counter-Strike.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub appid: AppId,
    /// The context ID.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub contextid: ContextId,
    /// The unique asset ID. This value is unique to the item's `appid` and `contextid`.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub assetid: AssetId,
    /// The ID of the description.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub classid: ClassId,
    /// The specific instance ID of the description belonging to the class ID.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub instanceid: InstanceId,
    /// The amount. If this item is not stackable the amount will be `1`.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub amount: Amount,
}

impl Item {
    /// The (app, class, instance) triple used to match this item with its description.
    pub fn class_key(&self) -> ClassKey {
        (self.appid, self.classid, self.instanceid)
    }
}
