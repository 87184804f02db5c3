//! Fetches single inventory pages.

use crate::error::Error;
use crate::fetcher::Fetch;
use crate::helpers::HOSTNAME;
use crate::request::PageRequest;
use crate::response::InventoryPage;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use reqwest::{Method, StatusCode};

/// The number of times a page request is attempted before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// The time to wait between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Fetches and decodes inventory pages, retrying failed requests a fixed number of times with a
/// fixed delay between attempts.
#[derive(Clone)]
pub struct PageFetcher {
    fetcher: Arc<dyn Fetch>,
    hostname: String,
    max_attempts: u32,
    retry_delay: Duration,
}

impl fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PageFetcher")
            .field("hostname", &self.hostname)
            .field("max_attempts", &self.max_attempts)
            .field("retry_delay", &self.retry_delay)
            .finish_non_exhaustive()
    }
}

impl PageFetcher {
    /// Creates a new [`PageFetcher`] with the default host, attempts and delay.
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            fetcher,
            hostname: HOSTNAME.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
    
    /// The host to request inventories from.
    pub fn hostname(mut self, hostname: String) -> Self {
        self.hostname = hostname;
        self
    }
    
    /// The number of times a request is attempted. At least one attempt is always made.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
    
    /// The time to wait between attempts.
    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }
    
    /// Fetches and decodes one page.
    ///
    /// Transport errors are retried. When every attempt fails the body is treated as empty and
    /// [`Error::EmptyResponse`] is returned. A `403 Forbidden` response is not retried and returns
    /// [`Error::PrivateInventory`].
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<InventoryPage, Error> {
        let url = request.url(&self.hostname)?;
        let body = self.fetch_with_retries(url.as_str()).await?;
        
        if body.is_empty() {
            return Err(Error::EmptyResponse);
        }
        
        let page: InventoryPage = serde_json::from_str(&body)?;
        
        if !page.success {
            return Err(Error::ResponseUnsuccessful);
        }
        
        Ok(page)
    }
    
    async fn fetch_with_retries(&self, url: &str) -> Result<String, Error> {
        for attempt in 1..=self.max_attempts {
            match self.fetcher.fetch(url, Method::GET).await {
                Ok(body) => return Ok(body),
                Err(Error::Http(StatusCode::FORBIDDEN)) => return Err(Error::PrivateInventory),
                Err(error) => {
                    log::warn!("Attempt {attempt}/{} for {url} failed: {error}", self.max_attempts);
                },
            }
            
            if attempt < self.max_attempts {
                tokio::time::sleep(self.retry_delay).await;
            }
        }
        
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{inventory_url, page_json, Reply, ScriptedFetcher, OWNER};
    use steamid_ng::SteamID;
    
    fn request() -> PageRequest {
        PageRequest::new(SteamID::from(OWNER), 730, 2, 2)
    }
    
    #[tokio::test]
    async fn fetches_page() {
        let url = inventory_url(730, 2, 2, None);
        let fetcher = Arc::new(ScriptedFetcher::new()
            .body(&url, &page_json(730, 2, &[1, 2], Some(2))));
        let page = PageFetcher::new(fetcher.clone())
            .fetch_page(&request())
            .await
            .unwrap();
        
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor(), Some(2));
        assert_eq!(fetcher.calls(), vec![url]);
    }
    
    #[tokio::test(start_paused = true)]
    async fn retries_transport_errors() {
        let url = inventory_url(730, 2, 2, None);
        let fetcher = Arc::new(ScriptedFetcher::new()
            .reply(&url, Reply::Status(StatusCode::BAD_GATEWAY))
            .reply(&url, Reply::Status(StatusCode::TOO_MANY_REQUESTS))
            .body(&url, &page_json(730, 2, &[1], None)));
        let started = tokio::time::Instant::now();
        let page = PageFetcher::new(fetcher.clone())
            .fetch_page(&request())
            .await
            .unwrap();
        
        assert_eq!(page.items.len(), 1);
        assert_eq!(fetcher.calls_to(&url), 3);
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }
    
    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_attempts() {
        let url = inventory_url(730, 2, 2, None);
        let fetcher = Arc::new(ScriptedFetcher::new());
        let started = tokio::time::Instant::now();
        let result = PageFetcher::new(fetcher.clone())
            .fetch_page(&request())
            .await;
        
        assert!(matches!(result, Err(Error::EmptyResponse)));
        assert_eq!(fetcher.calls_to(&url), 3);
        // no delay after the last attempt
        assert!(started.elapsed() < Duration::from_millis(2500));
    }
    
    #[tokio::test]
    async fn does_not_retry_private_inventory() {
        let url = inventory_url(730, 2, 2, None);
        let fetcher = Arc::new(ScriptedFetcher::new()
            .reply(&url, Reply::Status(StatusCode::FORBIDDEN)));
        let result = PageFetcher::new(fetcher.clone())
            .fetch_page(&request())
            .await;
        
        assert!(matches!(result, Err(Error::PrivateInventory)));
        assert_eq!(fetcher.calls_to(&url), 1);
    }
    
    #[tokio::test]
    async fn fails_on_malformed_body() {
        let url = inventory_url(730, 2, 2, None);
        let fetcher = Arc::new(ScriptedFetcher::new()
            .body(&url, "<html>Sorry!</html>"));
        let result = PageFetcher::new(fetcher.clone())
            .fetch_page(&request())
            .await;
        
        assert!(matches!(result, Err(Error::Parse(_))));
        assert_eq!(fetcher.calls_to(&url), 1);
    }
    
    #[tokio::test]
    async fn fails_on_unsuccessful_response() {
        let url = inventory_url(730, 2, 2, None);
        let fetcher = Arc::new(ScriptedFetcher::new()
            .body(&url, r#"{"success":0}"#));
        let result = PageFetcher::new(fetcher)
            .fetch_page(&request())
            .await;
        
        assert!(matches!(result, Err(Error::ResponseUnsuccessful)));
    }
    
    #[tokio::test]
    async fn uses_configured_hostname() {
        let url = format!("http://localhost:8080/inventory/{OWNER}/730/2?count=2");
        let fetcher = Arc::new(ScriptedFetcher::new()
            .body(&url, &page_json(730, 2, &[1], None)));
        let page = PageFetcher::new(fetcher)
            .hostname("http://localhost:8080".into())
            .fetch_page(&request())
            .await;
        
        assert!(page.is_ok());
    }
}
