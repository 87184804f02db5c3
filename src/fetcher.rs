//! Fetching response bodies over HTTP.

use crate::error::Error;
use crate::helpers::{check_response, decode_body, get_default_client, USER_AGENT_STRING};
use async_trait::async_trait;
use reqwest::Method;
use reqwest_middleware::ClientWithMiddleware;

/// Fetches the body of a URL. Implement this to route requests through your own transport, or
/// to serve canned responses.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetches `url` using `method`, returning the response body.
    async fn fetch(&self, url: &str, method: Method) -> Result<String, Error>;
}

/// Fetches bodies with a [`reqwest`] client.
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: ClientWithMiddleware,
}

impl WebFetcher {
    /// Creates a new [`WebFetcher`] using the default client.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            client: get_default_client(USER_AGENT_STRING)?,
        })
    }
    
    /// Creates a new [`WebFetcher`] using `client`. Useful if you need to proxy your requests.
    pub fn with_client(client: ClientWithMiddleware) -> Self {
        Self {
            client,
        }
    }
}

#[async_trait]
impl Fetch for WebFetcher {
    async fn fetch(&self, url: &str, method: Method) -> Result<String, Error> {
        let response = self.client.request(method, url)
            .send()
            .await?;
        let body = check_response(response).await?;
        
        decode_body(body)
    }
}
