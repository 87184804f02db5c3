use crate::types::{AppId, ClassId, ContextId, InstanceId};
use reqwest::StatusCode;

/// Any error that can occur while loading inventories.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {}", .0)]
    Parameter(&'static str),
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    #[error("Error {}", .0)]
    Http(StatusCode),
    #[error("Error parsing URL: {}", .0)]
    Url(#[from] url::ParseError),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    #[error("Error decoding response: {}", .0)]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Empty response")]
    EmptyResponse,
    #[error("Response unsuccessful")]
    ResponseUnsuccessful,
    #[error("This profile is private")]
    PrivateInventory,
    #[error("No inventory for {appid}:{contextid}")]
    NotFound {
        appid: AppId,
        contextid: ContextId,
    },
}

impl Error {
    /// Whether this error is a failure of the transport rather than of the response contents.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Reqwest(_) | Self::ReqwestMiddleware(_) | Self::Http(_)
        )
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// An item has no matching description in its inventory.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Missing description for {appid}:{classid}:{instanceid}")]
pub struct MissingDescriptionError {
    pub appid: AppId,
    pub classid: ClassId,
    pub instanceid: InstanceId,
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn formats_not_found() {
        let error = Error::NotFound {
            appid: 730,
            contextid: 2,
        };
        
        assert_eq!(error.to_string(), "No inventory for 730:2");
    }
    
    #[test]
    fn formats_missing_description() {
        let error = MissingDescriptionError {
            appid: 440,
            classid: 101785959,
            instanceid: 11040578,
        };
        
        assert_eq!(error.to_string(), "Missing description for 440:101785959:11040578");
    }
    
    #[test]
    fn classifies_transport_errors() {
        assert!(Error::Http(StatusCode::INTERNAL_SERVER_ERROR).is_transport());
        assert!(!Error::EmptyResponse.is_transport());
        assert!(!Error::PrivateInventory.is_transport());
    }
}
