use crate::components::categories::Categories;
use crate::components::dark_mode_selector::DarkModeSelector;
use crate::components::language_selector::LanguageSelector;
use crate::components::products::Products;
use crate::hooks::use_catalog::{use_categories, use_products};
use dioxus::prelude::*;

/// The product catalog: theme and language controls and the category
/// navigation on the side, the products of `category` (all when `None`) in the
/// main area. Both lists load independently.
#[component]
pub fn CatalogPage(#[props(!optional)] category: Option<String>) -> Element {
    let products = use_products(category);
    let categories = use_categories();

    rsx! {
        div {
            class: "catalog",
            aside {
                class: "sidebar",
                DarkModeSelector {}
                LanguageSelector {}
                hr {}
                Categories { status: categories }
            }
            Products { status: products }
        }
    }
}
