//! Captcha Endpoint

use serde::Deserialize;

use super::{post_form, FormPayload};
use crate::error::RequestError;
use crate::models::CaptchaReply;

/// Requested captcha image geometry
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CaptchaSize {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
}

impl Default for CaptchaSize {
    fn default() -> Self {
        Self { width: 200, height: 60, font_size: 30 }
    }
}

pub async fn refresh_captcha(url: &str, csrf: &str, size: CaptchaSize) -> Result<CaptchaReply, RequestError> {
    let payload = FormPayload::with_csrf(csrf)
        .field("width", size.width)
        .field("height", size.height)
        .field("font_size", size.font_size);
    post_form(url, &payload).await
}

/// `src` attribute for a base64 PNG
pub fn captcha_src(image: &str) -> String {
    format!("data:image/png;base64,{}", image)
}
