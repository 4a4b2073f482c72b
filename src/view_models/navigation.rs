//! Navigation Helpers
//!
//! Active category tab and order highlighting, resolved from URLs.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavTab {
    pub label: String,
    pub href: String,
}

/// Index of the tab to mark active for `current_url`.
///
/// The first tab ("All") is active on the index page, on `mainlist`
/// listings and on paginated index pages. Otherwise the first later tab
/// whose href occurs in the URL, or whose label is one of its path
/// segments, wins.
pub fn active_tab(current_url: &str, index_url: &str, tabs: &[NavTab]) -> Option<usize> {
    if tabs.is_empty() {
        return None;
    }

    let on_index = current_url == index_url
        || current_url.contains("mainlist")
        || current_url
            .strip_prefix(index_url)
            .map_or(false, |rest| rest.starts_with("?page"));
    if on_index {
        return Some(0);
    }

    let segments: Vec<&str> = current_url.split('/').collect();
    let label_match = tabs
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, tab)| {
            let label = tab.label.trim().to_lowercase();
            segments.iter().any(|segment| *segment == label)
        })
        .map(|(i, _)| i);

    tabs.iter()
        .enumerate()
        .skip(1)
        .find(|(i, tab)| {
            tab.href != "/" && (current_url.contains(tab.href.as_str()) || Some(*i) == label_match)
        })
        .map(|(i, _)| i)
}

/// Site root built from the configured domain
pub fn index_url(domain: &str, secure: bool) -> String {
    let protocol = if secure { "https" } else { "http" };
    format!("{}://{}/", protocol, domain)
}

/// Order id from a `highlight=order-<id>` query parameter
pub fn highlighted_order(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "highlight")
        .and_then(|(_, value)| value.strip_prefix("order-"))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Orders page URL that highlights `order_id`
pub fn highlight_url(base: &str, order_id: &str) -> String {
    format!("{}?highlight=order-{}", base, order_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<NavTab> {
        [("All", "/"), ("Phones", "/phones/"), ("Chargers", "/chargers/"), ("Cables", "/goods/cables/")]
            .iter()
            .map(|(label, href)| NavTab { label: label.to_string(), href: href.to_string() })
            .collect()
    }

    #[test]
    fn test_index_variants_pick_all() {
        let index = index_url("shop.example", true);
        assert_eq!(index, "https://shop.example/");
        assert_eq!(active_tab(&index, &index, &tabs()), Some(0));
        assert_eq!(active_tab("https://shop.example/?page=2", &index, &tabs()), Some(0));
        assert_eq!(active_tab("https://shop.example/mainlist/price/", &index, &tabs()), Some(0));
    }

    #[test]
    fn test_category_by_href_or_segment() {
        let index = index_url("shop.example", false);
        assert_eq!(active_tab("http://shop.example/chargers/fast/", &index, &tabs()), Some(2));
        // label as a path segment, href not in the URL
        assert_eq!(active_tab("http://shop.example/sort/cables/price/", &index, &tabs()), Some(3));
        assert_eq!(active_tab("http://shop.example/account/", &index, &tabs()), None);
        assert_eq!(active_tab("http://shop.example/", &index, &[]), None);
    }

    #[test]
    fn test_highlighted_order() {
        assert_eq!(highlighted_order("/account/orders/?highlight=order-17"), Some("17".to_string()));
        assert_eq!(highlighted_order("/orders/?page=2&highlight=order-5#top"), Some("5".to_string()));
        assert_eq!(highlighted_order("/account/orders/"), None);
        assert_eq!(highlighted_order("/orders/?highlight=order-"), None);
        assert_eq!(highlight_url("/account/orders/", "17"), "/account/orders/?highlight=order-17");
    }
}
