use crate::types::{AppId, ClassId, InstanceId, ClassKey};
use crate::serialize;
use serde::{Serialize, Deserialize};

/// The description line Steam adds to items which cannot be used in crafting.
pub const NOT_USABLE_IN_CRAFTING: &str = "( Not Usable in Crafting )";

/// Contains details about an item including names and descriptions.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ItemDescription {
    /// The item's app ID.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub appid: AppId,
    /// The ID for this description.
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub classid: ClassId,
    /// The specific instance ID for this description.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::string_or_number")]
    pub instanceid: InstanceId,
    /// Whether this item is a currency.
    #[serde(default)]
    #[serde(rename = "currency")]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub is_currency: bool,
    /// The URL to the icon for the item.
    #[serde(default)]
    pub icon_url: String,
    /// The URL to the large icon for the item.
    #[serde(default)]
    pub icon_url_large: Option<String>,
    /// The URL to the icon displayed while dragging the item.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::empty_string_is_none")]
    pub icon_drag_url: Option<String>,
    /// The display name of the item.
    #[serde(rename = "name")]
    pub display_name: String,
    /// The market hash name. This is used to link to the item on the Steam Community Market.
    #[serde(default)]
    pub market_hash_name: String,
    /// The name of the item on the Steam Community Market.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::empty_string_is_none")]
    pub market_name: Option<String>,
    /// The color of the item's name.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::empty_string_is_none")]
    pub name_color: Option<String>,
    /// The background color for the item.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::empty_string_is_none")]
    pub background_color: Option<String>,
    /// The item's type. This is displayed underneath the name of the game in inventories.
    #[serde(default)]
    #[serde(rename = "type")]
    pub r#type: String,
    /// Whether this item can be traded or not.
    #[serde(default)]
    #[serde(rename = "tradable")]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub is_tradable: bool,
    /// Whether this item is marketable or not.
    #[serde(default)]
    #[serde(rename = "marketable")]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub is_marketable: bool,
    /// Whether this item is a commodity item on the Steam Community Market.
    #[serde(default)]
    #[serde(rename = "commodity")]
    #[serde(deserialize_with = "serialize::into_bool")]
    pub is_commodity: bool,
    /// The app which receives the fee for market sales of this item.
    #[serde(default)]
    pub market_fee_app: Option<AppId>,
    /// Descriptions for this item.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::null_as_empty")]
    pub descriptions: Vec<Description>,
    /// Actions for this item.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::null_as_empty")]
    pub actions: Vec<Action>,
    /// Actions only visible to the owner of this item.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::null_as_empty")]
    pub owner_actions: Vec<Action>,
    /// Tags for this item.
    #[serde(default)]
    #[serde(deserialize_with = "serialize::null_as_empty")]
    pub tags: Vec<Tag>,
    /// Extra data from the app's internal schema. Not every app includes this.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_data: AppData,
}

impl ItemDescription {
    /// The (app, class, instance) triple used to match this description with its items.
    pub fn class_key(&self) -> ClassKey {
        (self.appid, self.classid, self.instanceid)
    }
    
    /// The market name if one is present, otherwise the display name.
    pub fn name(&self) -> &str {
        match &self.market_name {
            Some(market_name) if !market_name.is_empty() => market_name,
            _ => &self.display_name,
        }
    }
    
    /// Whether the item can be used in crafting.
    pub fn is_craftable(&self) -> bool {
        !self.descriptions
            .iter()
            .any(|description| description.value == NOT_USABLE_IN_CRAFTING)
    }
    
    /// Gets a tag by its category e.g. "Quality".
    pub fn get_tag(&self, category: &str) -> Option<&Tag> {
        self.tags
            .iter()
            .find(|tag| tag.category == category)
    }
    
    /// Convenience method for parsing a value from `app_data`. Parses string or number values
    /// into any generic that implements [`std::str::FromStr`].
    pub fn get_app_data_value_parsed<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.app_data
            .as_ref()?
            .get(key)
            .and_then(|value| match value {
                serde_json::Value::String(string) => string.parse::<T>().ok(),
                serde_json::Value::Number(number) => number.to_string().parse::<T>().ok(),
                _ => None,
            })
    }
    
    /// Gets `def_index` value out of app_data.
    pub fn get_app_data_defindex(&self) -> Option<u16> {
        self.get_app_data_value_parsed("def_index")
    }
    
    /// Gets `quality` value out of app_data.
    pub fn get_app_data_quality(&self) -> Option<u32> {
        self.get_app_data_value_parsed("quality")
    }
}

/// A color.
pub type Color = String;

/// A description.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Description {
    /// The type of description e.g. `"html"`.
    #[serde(default)]
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    /// The description message.
    pub value: String,
    /// A string representing the color e.g. `"FFFFFF"`
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// A tag.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Tag {
    /// The game's internal name of this tag e.g. "Unique" for items under the "Quality"
    /// category.
    pub internal_name: String,
    /// The name of this tag. This value has the alias of `localized_tag_name`.
    #[serde(alias = "localized_tag_name")]
    pub name: String,
    /// The category of this tag e.g. "Quality".
    pub category: String,
    /// The color associated with this tag.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// The category name of this tag. This value has the alias of `localized_category_name`.
    #[serde(default)]
    #[serde(alias = "localized_category_name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// An action, such as a link to inspect the item in-game.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Action {
    /// The label of the action.
    pub name: String,
    /// The link for the action.
    pub link: String,
}

/// App data.
pub type AppData = Option<serde_json::Map<String, serde_json::Value>>;

#[cfg(test)]
mod tests {
    use super::*;
    
    fn description() -> ItemDescription {
        serde_json::from_str(include_str!("fixtures/description_csgo.json")).unwrap()
    }
    
    #[test]
    fn parses_description() {
        let description = description();
        
        assert_eq!(description.class_key(), (730, 310776560, 302028390));
        assert!(description.is_tradable);
        assert!(description.is_marketable);
        assert!(!description.is_commodity);
        assert!(!description.is_currency);
        assert_eq!(description.actions.len(), 1);
        assert_eq!(description.get_tag("Rarity").map(|tag| tag.name.as_str()), Some("Classified"));
    }
    
    #[test]
    fn prefers_market_name() {
        let mut description = description();
        
        assert_eq!(description.name(), "AK-47 | Redline (Field-Tested)");
        
        description.market_name = None;
        
        assert_eq!(description.name(), "AK-47 | Redline");
    }
    
    #[test]
    fn detects_craftability() {
        let mut description = description();
        
        assert!(description.is_craftable());
        
        description.descriptions.push(Description {
            r#type: None,
            value: NOT_USABLE_IN_CRAFTING.into(),
            color: None,
        });
        
        assert!(!description.is_craftable());
    }
    
    #[test]
    fn parses_app_data() {
        let description: ItemDescription = serde_json::from_str(
            r#"{"appid":440,"classid":"101785959","instanceid":"11040578","name":"Mann Co. Supply Crate Key","tradable":1,"marketable":1,"commodity":1,"app_data":{"def_index":"5021","quality":6}}"#
        ).unwrap();
        
        assert_eq!(description.get_app_data_defindex(), Some(5021));
        assert_eq!(description.get_app_data_quality(), Some(6));
        assert_eq!(description.name(), "Mann Co. Supply Crate Key");
    }
}
