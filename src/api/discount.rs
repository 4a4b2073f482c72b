//! Coupon / Gift-Card Endpoints
//!
//! Apply and cancel share one reply shape; which URL is hit decides the action.

use super::{post_form, FormPayload};
use crate::error::RequestError;
use crate::models::DiscountReply;

pub async fn submit_discount_code(url: &str, csrf: &str, code: &str) -> Result<DiscountReply, RequestError> {
    let payload = FormPayload::with_csrf(csrf).field("code", code);
    post_form(url, &payload).await
}
