//! Favorites Models

use serde::Deserialize;

use crate::config::Labels;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
}

impl FavoriteAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FavoriteAction::Add => "add",
            FavoriteAction::Remove => "remove",
        }
    }
}

/// Product page add/remove button
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FavoriteToggle {
    favorited: bool,
}

impl FavoriteToggle {
    pub fn new(favorited: bool) -> Self {
        Self { favorited }
    }

    /// Action the button performs next
    pub fn action(&self) -> FavoriteAction {
        if self.favorited {
            FavoriteAction::Remove
        } else {
            FavoriteAction::Add
        }
    }

    pub fn confirm(&mut self, action: FavoriteAction) {
        self.favorited = action == FavoriteAction::Add;
    }

    pub fn label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self.action() {
            FavoriteAction::Add => &labels.add_favorite,
            FavoriteAction::Remove => &labels.remove_favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FavoriteEntry {
    pub product_id: u32,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub price: String,
}

/// Account page favorites listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesListing {
    entries: Vec<FavoriteEntry>,
    remaining: u32,
}

impl FavoritesListing {
    pub fn new(entries: Vec<FavoriteEntry>) -> Self {
        let remaining = entries.len() as u32;
        Self { entries, remaining }
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Apply a confirmed removal; `amount` is the server's remaining count
    pub fn removed(&mut self, product_id: u32, amount: u32) {
        self.entries.retain(|e| e.product_id != product_id);
        self.remaining = amount;
    }

    /// Placeholder shown once the server reports no favorites left
    pub fn show_placeholder(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32) -> FavoriteEntry {
        FavoriteEntry {
            product_id: id,
            title: format!("Product {}", id),
            url: String::new(),
            image: String::new(),
            price: String::new(),
        }
    }

    #[test]
    fn test_toggle_label_follows_state() {
        let labels = Labels::default();
        let mut toggle = FavoriteToggle::new(false);
        assert_eq!(toggle.action(), FavoriteAction::Add);
        assert_eq!(toggle.label(&labels), "Add to Favorite");

        toggle.confirm(FavoriteAction::Add);
        assert_eq!(toggle.action(), FavoriteAction::Remove);
        assert_eq!(toggle.label(&labels), "Remove from Favorite");

        toggle.confirm(FavoriteAction::Remove);
        assert_eq!(toggle.action(), FavoriteAction::Add);
    }

    #[test]
    fn test_listing_placeholder_after_last_removal() {
        let mut listing = FavoritesListing::new(vec![entry(1), entry(2)]);
        listing.removed(1, 1);
        assert!(!listing.show_placeholder());
        listing.removed(2, 0);
        assert!(listing.show_placeholder());
        assert!(listing.entries().is_empty());
    }
}
