//! Cart Endpoints

use super::{post_form, FormPayload};
use crate::error::RequestError;
use crate::models::CartReply;

pub async fn add_to_cart(url: &str, csrf: &str, product_id: u32, quantity: u32) -> Result<CartReply, RequestError> {
    let payload = FormPayload::with_csrf(csrf)
        .field("product_id", product_id)
        .field("quantity", quantity);
    post_form(url, &payload).await
}

pub async fn update_quantity(url: &str, csrf: &str, product_id: u32, quantity: u32) -> Result<CartReply, RequestError> {
    let payload = FormPayload::with_csrf(csrf)
        .field("product_id", product_id)
        .field("quantity", quantity);
    post_form(url, &payload).await
}

pub async fn remove_from_cart(url: &str, csrf: &str, product_id: u32) -> Result<CartReply, RequestError> {
    let payload = FormPayload::with_csrf(csrf).field("product_id", product_id);
    post_form(url, &payload).await
}
