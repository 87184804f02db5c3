//! Canned HTTP responses for tests.

use crate::error::Error;
use crate::fetcher::Fetch;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

pub const OWNER: u64 = 76500000000000001;

#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(StatusCode),
}

/// Serves scripted replies per URL, in order. Once a URL's script runs out it keeps failing with
/// a server error.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn delayed(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }
    
    pub fn reply(self, url: &str, reply: Reply) -> Self {
        self.replies.lock().unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(reply);
        self
    }
    
    pub fn body(self, url: &str, body: &str) -> Self {
        self.reply(url, Reply::Body(body.to_string()))
    }
    
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
    
    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().unwrap()
            .iter()
            .filter(|call| *call == url)
            .count()
    }
}

#[async_trait]
impl Fetch for ScriptedFetcher {
    async fn fetch(&self, url: &str, method: Method) -> Result<String, Error> {
        assert_eq!(method, Method::GET);
        
        self.calls.lock().unwrap().push(url.to_string());
        
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        
        let reply = self.replies.lock().unwrap()
            .get_mut(url)
            .and_then(|replies| replies.pop_front());
        
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(Error::Http(status)),
            None => Err(Error::Http(StatusCode::INTERNAL_SERVER_ERROR)),
        }
    }
}

pub fn inventory_url(appid: u32, contextid: u64, count: u32, start_assetid: Option<u64>) -> String {
    let base = format!("https://steamcommunity.com/inventory/{OWNER}/{appid}/{contextid}?count={count}");
    
    match start_assetid {
        Some(start_assetid) => format!("{base}&start_assetid={start_assetid}"),
        None => base,
    }
}

/// A page with one item per asset ID.
pub fn page_json(appid: u32, contextid: u64, assetids: &[u64], last_assetid: Option<u64>) -> String {
    let assets = assetids
        .iter()
        .map(|assetid| serde_json::json!({
            "appid": appid,
            "contextid": contextid.to_string(),
            "assetid": assetid.to_string(),
            "classid": assetid.to_string(),
            "instanceid": "0",
            "amount": "1",
        }))
        .collect::<Vec<_>>();
    let descriptions = assetids
        .iter()
        .map(|assetid| serde_json::json!({
            "appid": appid,
            "classid": assetid.to_string(),
            "instanceid": "0",
            "name": format!("Item {assetid}"),
            "market_hash_name": format!("Item {assetid}"),
            "tradable": 1,
            "marketable": 1,
            "commodity": 0,
        }))
        .collect::<Vec<_>>();
    let mut page = serde_json::json!({
        "assets": assets,
        "descriptions": descriptions,
        "total_inventory_count": assetids.len(),
        "success": 1,
        "more_items": 0,
    });
    
    if let Some(last_assetid) = last_assetid {
        page["more_items"] = serde_json::json!(1);
        page["last_assetid"] = serde_json::json!(last_assetid.to_string());
    }
    
    page.to_string()
}
