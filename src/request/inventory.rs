use crate::types::{AppId, ContextId, AssetId};
use crate::error::Error;
use steamid_ng::SteamID;
use url::Url;

/// A request for one page of a user's inventory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    /// The owner's Steam ID.
    pub steamid: SteamID,
    /// App ID of inventory.
    pub appid: AppId,
    /// Context ID of inventory.
    pub contextid: ContextId,
    /// The number of items to fetch on this page.
    pub count: u32,
    /// The asset ID to continue after. `None` requests the first page.
    pub start_assetid: Option<AssetId>,
}

impl PageRequest {
    /// Creates a new [`PageRequest`] for the first page.
    pub fn new(
        steamid: SteamID,
        appid: AppId,
        contextid: ContextId,
        count: u32,
    ) -> Self {
        Self {
            steamid,
            appid,
            contextid,
            count,
            start_assetid: None,
        }
    }
    
    /// The request for the page continuing after `start_assetid`.
    pub fn after(&self, start_assetid: AssetId) -> Self {
        Self {
            start_assetid: Some(start_assetid),
            ..*self
        }
    }
    
    /// Builds the URL for this page on `hostname` e.g. `https://steamcommunity.com`.
    pub fn url(&self, hostname: &str) -> Result<Url, Error> {
        let sid = u64::from(self.steamid);
        let uri = format!("{hostname}/inventory/{sid}/{}/{}", self.appid, self.contextid);
        let mut params = vec![
            ("count", self.count.to_string()),
        ];
        
        if let Some(start_assetid) = self.start_assetid {
            params.push(("start_assetid", start_assetid.to_string()));
        }
        
        Ok(Url::parse_with_params(&uri, &params)?)
    }
}
