//! Class names shared across pages. The rules live in `assets/main.css`.

use crate::domain::TruckCategory;

pub const PANEL: &str = "panel";
pub const LABEL: &str = "label";
pub const MUTED: &str = "muted";
pub const INPUT: &str = "input";
pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_SECONDARY: &str = "btn btn-secondary";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-button nav-button-active"
    } else {
        "nav-button"
    }
}

pub fn category_class(category: TruckCategory) -> &'static str {
    match category {
        TruckCategory::Standard => "category-dry dry-glow",
        TruckCategory::TemperatureControlled => "category-reefer reefer-glow",
    }
}
