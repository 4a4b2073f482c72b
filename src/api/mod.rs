//! Storefront AJAX Endpoints
//!
//! Frontend bindings to the server's form-post endpoints, organized by domain.
//! Every call is one `POST` with a form-encoded body; the reply is JSON.

mod form;
mod cart;
mod discount;
mod favorite;
mod goods;
mod captcha;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::error::RequestError;
use crate::models::UnauthorizedBody;

// Re-export all public items
pub use form::*;
pub use cart::*;
pub use discount::*;
pub use favorite::*;
pub use goods::*;
pub use captcha::*;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Submit `payload` to `url` and decode the JSON reply
async fn post_form<T: DeserializeOwned>(url: &str, payload: &FormPayload) -> Result<T, RequestError> {
    let request = Request::post(url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        // The server only accepts AJAX posts
        .header("X-Requested-With", "XMLHttpRequest")
        .body(payload.encode())
        .map_err(|e| RequestError::Build(e.to_string()))?;

    let response = request.send().await?;
    let status = response.status();
    let status_text = response.status_text();
    let raw = response.text().await?;
    decode_reply(status, &status_text, &raw)
}

/// Classify a finished response: 401 carries the login page, any other
/// non-2xx is a status error, 2xx must decode as `T`
fn decode_reply<T: DeserializeOwned>(status: u16, status_text: &str, raw: &str) -> Result<T, RequestError> {
    if status == 401 || status_text == "Unauthorized" {
        let body: UnauthorizedBody = serde_json::from_str(raw).unwrap_or_default();
        return Err(RequestError::Unauthorized { login_url: body.login_page_url });
    }
    if !(200..=299).contains(&status) {
        return Err(RequestError::Status { status, text: status_text.to_string() });
    }
    serde_json::from_str(raw).map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FavoriteReply;

    #[test]
    fn test_decode_success() {
        let reply: FavoriteReply = decode_reply(200, "OK", r#"{"success": true, "amount_prods": 4}"#).unwrap();
        assert_eq!(reply.amount_prods, 4);
    }

    #[test]
    fn test_decode_unauthorized() {
        let err = decode_reply::<FavoriteReply>(401, "Unauthorized", r#"{"login_page_url": "/account/login/"}"#)
            .unwrap_err();
        assert_eq!(err.login_url(), Some("/account/login/"));

        // Body without a login url still classifies as unauthorized
        let bare = decode_reply::<FavoriteReply>(401, "", "").unwrap_err();
        assert_eq!(bare, RequestError::Unauthorized { login_url: String::new() });
    }

    #[test]
    fn test_decode_status_and_garbage() {
        let err = decode_reply::<FavoriteReply>(400, "Bad Request", "").unwrap_err();
        assert_eq!(err, RequestError::Status { status: 400, text: "Bad Request".to_string() });

        let garbage = decode_reply::<FavoriteReply>(200, "OK", "<html>").unwrap_err();
        assert!(matches!(garbage, RequestError::Decode(_)));
    }
}
