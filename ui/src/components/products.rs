use crate::components::empty_state::EmptyState;
use crate::components::product_preview::ProductPreview;
use crate::i18n::{t, use_lang, Text};
use crate::query::QueryStatus;
use api::product::Product;
use dioxus::prelude::*;

#[component]
pub fn Products(status: QueryStatus<Vec<Product>>) -> Element {
    let lang = use_lang()();

    rsx! {
        section {
            class: "products",
            match status {
                QueryStatus::Loading => {
                    let message = t(lang, Text::ProductsLoading);
                    rsx! {
                        p { "aria-busy": "true", "{message}" }
                    }
                }
                QueryStatus::Error(_) => {
                    let message = t(lang, Text::ProductsFailure);
                    rsx! {
                        p { class: "error", "{message}" }
                    }
                }
                QueryStatus::Success(products) if products.is_empty() => rsx! {
                    EmptyState {
                        title: t(lang, Text::NoProducts).to_string(),
                        description: Some(t(lang, Text::NoProductsHint).to_string()),
                    }
                },
                QueryStatus::Success(products) => rsx! {
                    div {
                        class: "product-grid",
                        for product in products.iter() {
                            ProductPreview {
                                key: "{product.id}",
                                product: product.clone(),
                            }
                        }
                    }
                },
            }
        }
    }
}
