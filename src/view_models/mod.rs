//! View Models
//!
//! Per-widget state with explicit transitions. Components render from these
//! and never read state back out of the DOM.

mod cart;
mod comment_vote;
mod discount;
mod favorites;
mod navigation;
mod price_filter;
mod rating;
mod toggles;

pub use cart::*;
pub use comment_vote::*;
pub use discount::*;
pub use favorites::*;
pub use navigation::*;
pub use price_filter::*;
pub use rating::*;
pub use toggles::*;
