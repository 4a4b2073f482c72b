//! UI Components
//!
//! One Leptos component per widget kind; each takes its options decoded
//! from the mount point.

mod add_to_cart;
mod captcha;
mod cart_lines;
mod cart_summary;
mod comment_vote;
mod discount_form;
mod favorites;
mod header_badges;
mod language_switcher;
mod navigation;
mod price_filter;
mod star_rating;
mod toggles;

pub use add_to_cart::{AddToCart, AddToCartOptions};
pub use captcha::{CaptchaImage, CaptchaOptions};
pub use cart_lines::{CartLines, CartLinesOptions};
pub use cart_summary::{CartSummary, CartSummaryOptions};
pub use comment_vote::{CommentVote, CommentVoteOptions};
pub use discount_form::{DiscountForm, DiscountFormOptions};
pub use favorites::{FavoriteToggle, FavoriteToggleOptions, FavoritesList, FavoritesListOptions};
pub use header_badges::{CartBadge, CartBadgeOptions, FavoritesBadge, FavoritesBadgeOptions};
pub use language_switcher::{LanguageSwitcher, LanguageSwitcherOptions};
pub use navigation::{MenuLayout, MenuLayoutOptions, NavTabs, NavTabsOptions, OrderHighlight, OrderHighlightOptions};
pub use price_filter::{PriceFilter, PriceFilterOptions};
pub use star_rating::{StarRating, StarRatingOptions};
pub use toggles::{
    Collapsible, CollapsibleOptions, DeliveryFields, DeliveryFieldsOptions, FilterPanel, FilterPanelOptions,
    OrderExpander, OrderExpanderOptions, PasswordField, PasswordFieldOptions,
};
