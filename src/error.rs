//! Request Errors

use thiserror::Error;

/// Failure of one asynchronous form submission
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// 401 from the server; the body names the login page
    #[error("unauthorized, login at {login_url}")]
    Unauthorized { login_url: String },
    #[error("server responded {status} {text}")]
    Status { status: u16, text: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to build request: {0}")]
    Build(String),
    #[error("anti-forgery token cookie is missing")]
    MissingCsrf,
}

impl RequestError {
    pub fn login_url(&self) -> Option<&str> {
        match self {
            RequestError::Unauthorized { login_url } => Some(login_url),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for RequestError {
    fn from(error: gloo_net::Error) -> Self {
        RequestError::Network(error.to_string())
    }
}
