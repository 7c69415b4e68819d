use crate::i18n::{t, use_lang, Text};
use crate::query::QueryStatus;
use crate::Route;
use dioxus::prelude::*;

/// One link of the category navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub label: String,
    pub route: Route,
}

/// The constant `home` entry followed by one entry per category, in order.
pub fn nav_entries(categories: &[String]) -> Vec<NavEntry> {
    let home = NavEntry {
        label: "home".to_string(),
        route: Route::AllProducts {},
    };
    std::iter::once(home)
        .chain(categories.iter().map(|category| NavEntry {
            label: category.clone(),
            route: Route::ProductsByCategory {
                category: category.clone(),
            },
        }))
        .collect()
}

#[component]
pub fn Categories(status: QueryStatus<Vec<String>>) -> Element {
    let lang = use_lang()();

    let (entries, message) = match &status {
        QueryStatus::Success(categories) => (nav_entries(categories), None),
        QueryStatus::Loading => (nav_entries(&[]), Some(t(lang, Text::CategoriesLoading))),
        QueryStatus::Error(_) => (nav_entries(&[]), Some(t(lang, Text::CategoriesFailure))),
    };

    rsx! {
        nav {
            class: "categories",
            ul {
                for entry in entries {
                    li {
                        key: "{entry.label}",
                        Link { to: entry.route, "{entry.label}" }
                    }
                }
            }
            if let Some(message) = message {
                p { "{message}" }
            }
        }
    }
}
