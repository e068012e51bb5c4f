//! Navigation menus

use super::html::link_to;
use crate::config::Settings;

/// Mobile navigation, one `<li>` per menu item
pub fn generate_mobile_menu(settings: &Settings) -> String {
    settings
        .mobile_menu
        .iter()
        .map(|item| format!("<li>{}</li>", link_to(&item.url, &item.label)))
        .collect()
}

/// Footer links, separated by newlines
pub fn generate_footer_menu(settings: &Settings) -> String {
    settings
        .footer_menu
        .iter()
        .map(|item| link_to(&item.url, &item.label))
        .collect::<Vec<_>>()
        .join("\n")
}
