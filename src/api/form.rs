//! Form Payloads
//!
//! Request bodies and the anti-forgery token.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;

use crate::error::RequestError;

/// Characters left as-is in form values
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'*');

/// Field carrying the anti-forgery token
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Ordered field/value pairs of one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(&'static str, String)>,
}

impl FormPayload {
    /// Payload for a mutating request, starting with the anti-forgery token
    pub fn with_csrf(token: &str) -> Self {
        Self {
            fields: vec![(CSRF_FIELD, token.to_string())],
        }
    }

    pub fn field(mut self, name: &'static str, value: impl ToString) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}={}", name, utf8_percent_encode(value, FORM_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Read the anti-forgery token from the document cookies
pub fn csrf_token(cookie_name: &str) -> Result<String, RequestError> {
    let cookies = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default();
    find_cookie(&cookies, cookie_name).ok_or(RequestError::MissingCsrf)
}

/// Look up one cookie in a `document.cookie` string
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}
