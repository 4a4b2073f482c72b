//! Product Endpoints
//!
//! Star rating and comment likes.

use super::{post_form, FormPayload};
use crate::error::RequestError;
use crate::models::{RatingReply, VoteReply};
use crate::view_models::Vote;

pub async fn rate_product(url: &str, csrf: &str, product_id: u32, star: u8) -> Result<RatingReply, RequestError> {
    let payload = FormPayload::with_csrf(csrf)
        .field("star", star)
        .field("product_id", product_id);
    post_form(url, &payload).await
}

pub async fn vote_comment(url: &str, csrf: &str, comment_id: u32, vote: Vote) -> Result<VoteReply, RequestError> {
    let payload = FormPayload::with_csrf(csrf)
        .field("comment_id", comment_id)
        .field("action", vote.as_str());
    post_form(url, &payload).await
}
