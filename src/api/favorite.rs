//! Favorites Endpoint

use super::{post_form, FormPayload};
use crate::error::RequestError;
use crate::models::FavoriteReply;
use crate::view_models::FavoriteAction;

pub async fn set_favorite(url: &str, csrf: &str, product_id: u32, action: FavoriteAction) -> Result<FavoriteReply, RequestError> {
    let payload = FormPayload::with_csrf(csrf)
        .field("action", action.as_str())
        .field("product_id", product_id);
    post_form(url, &payload).await
}
