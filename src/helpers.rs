use crate::error::Error;
use reqwest::header;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

/// The host serving inventories.
pub const HOSTNAME: &str = "https://steamcommunity.com";
pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// Builds the client used for requests when none is given. No retry middleware is attached;
/// retries are made by the page fetcher.
pub fn get_default_client(user_agent_string: &'static str) -> Result<ClientWithMiddleware, Error> {
    let mut headers = header::HeaderMap::new();
    
    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));
    
    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .gzip(true)
        .build()?;
    
    Ok(ClientBuilder::new(client).build())
}

/// Checks the status of a response, returning its body on success.
pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();
    
    match status.as_u16() {
        400..=599 => Err(Error::Http(status)),
        _ => Ok(response.bytes().await?),
    }
}

/// Decodes a response body as UTF-8.
pub fn decode_body(body: bytes::Bytes) -> Result<String, Error> {
    Ok(String::from_utf8(body.to_vec())?)
}
