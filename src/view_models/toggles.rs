//! View-State Toggles
//!
//! Small two-state switches that never talk to the server.

/// Delivery method of the order form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMethod {
    Unselected,
    SelfDelivery,
    PostOffice,
    Apartment,
}

impl DeliveryMethod {
    pub fn from_value(value: &str) -> Self {
        match value {
            "Post office" => DeliveryMethod::PostOffice,
            "Apartment" => DeliveryMethod::Apartment,
            "Self-delivery" => DeliveryMethod::SelfDelivery,
            _ => DeliveryMethod::Unselected,
        }
    }

    pub fn shows_office_number(self) -> bool {
        self == DeliveryMethod::PostOffice
    }

    pub fn shows_address(self) -> bool {
        self == DeliveryMethod::Apartment
    }
}

/// Password input visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordVisibility {
    visible: bool,
}

impl PasswordVisibility {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn input_type(&self) -> &'static str {
        if self.visible { "text" } else { "password" }
    }

    pub fn icon(&self) -> &'static str {
        if self.visible { "visibility" } else { "visibility_off" }
    }
}

/// Icon of an order expander
pub fn expander_icon(expanded: bool) -> &'static str {
    if expanded { "expand_less" } else { "expand_more" }
}

/// Flag size (width, height) in the language switcher
pub fn flag_size(is_current: bool) -> (u32, u32) {
    if is_current { (26, 20) } else { (25, 19) }
}

/// Account sidebar goes horizontal on narrow windows
pub fn is_compact_layout(window_width: f64, min_width: f64) -> bool {
    window_width <= min_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_field_visibility() {
        let post = DeliveryMethod::from_value("Post office");
        assert!(post.shows_office_number());
        assert!(!post.shows_address());

        let apartment = DeliveryMethod::from_value("Apartment");
        assert!(apartment.shows_address());
        assert!(!apartment.shows_office_number());

        for value in ["Self-delivery", ""] {
            let method = DeliveryMethod::from_value(value);
            assert!(!method.shows_address());
            assert!(!method.shows_office_number());
        }
    }

    #[test]
    fn test_password_toggle() {
        let mut visibility = PasswordVisibility::default();
        assert_eq!(visibility.input_type(), "password");
        assert_eq!(visibility.icon(), "visibility_off");
        visibility.toggle();
        assert_eq!(visibility.input_type(), "text");
        assert_eq!(visibility.icon(), "visibility");
    }

    #[test]
    fn test_small_switches() {
        assert_eq!(expander_icon(true), "expand_less");
        assert_eq!(expander_icon(false), "expand_more");
        assert_eq!(flag_size(true), (26, 20));
        assert_eq!(flag_size(false), (25, 19));
        assert!(is_compact_layout(1000.0, 1000.0));
        assert!(!is_compact_layout(1001.0, 1000.0));
    }
}
