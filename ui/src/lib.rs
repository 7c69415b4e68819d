// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
pub mod components;
pub mod hooks;
pub mod i18n;
pub mod query;
mod screens;
pub mod theme;

use api::prefs::user_prefs::UserPrefs;
use api::StoreClient;
use components::pico::Container;
use dioxus_logger::tracing::{info, warn};
use hooks::use_catalog::use_query_client_provider;
use i18n::{use_lang_provider, Lang};
use screens::catalog::CatalogPage;
use std::str::FromStr;
use theme::{use_dark_mode_provider, ThemeScope};

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Both routes render the catalog; the path segment, when present, selects the category.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    AllProducts {},
    #[route("/:category")]
    ProductsByCategory { category: String },
}

impl Route {
    /// Category selected by this location, verbatim. `None` lists every product.
    ///
    /// Unknown categories are passed through; the store API decides.
    pub fn category(&self) -> Option<String> {
        match self {
            Route::AllProducts {} => None,
            Route::ProductsByCategory { category } => Some(category.clone()),
        }
    }
}

#[component]
fn AllProducts() -> Element {
    catalog_for(Route::AllProducts {})
}

#[component]
fn ProductsByCategory(category: String) -> Element {
    catalog_for(Route::ProductsByCategory { category })
}

fn catalog_for(route: Route) -> Element {
    rsx! {
        CatalogPage { category: route.category() }
    }
}

/// Owns the application-wide state (dark mode, language, query client) and
/// renders the router beneath it.
///
/// `dark_mode` overrides the persisted mode on first initialisation only.
#[component]
pub fn RootShell(
    #[props(!optional)] dark_mode: Option<bool>,
    #[props(default)] dark_mode_default: bool,
    lang: Lang,
    store: StoreClient,
) -> Element {
    use_dark_mode_provider(dark_mode, dark_mode_default);
    use_lang_provider(lang);
    use_query_client_provider(store);

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet { href: PICO_CSS }
        document::Stylesheet { href: MAIN_CSS }
        ThemeScope {
            Container {
                Router::<Route> {}
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let (prefs, store) = use_hook(|| {
        let prefs = UserPrefs::from_env();
        let store = StoreClient::from_prefs(&prefs);
        info!("store api: {}", store.base_url());
        (prefs, store)
    });

    let lang = Lang::from_str(prefs.language()).unwrap_or_else(|_| {
        warn!("unsupported APP_LANG {:?}, using default", prefs.language());
        Lang::default()
    });

    rsx! {
        RootShell {
            dark_mode: None,
            dark_mode_default: prefs.dark_mode_default(),
            lang,
            store,
        }
    }
}
