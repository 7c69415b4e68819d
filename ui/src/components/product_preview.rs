use crate::components::pico::Card;
use crate::i18n::{rating, use_lang};
use api::product::Product;
use dioxus::prelude::*;

#[component]
pub fn ProductPreview(product: Product) -> Element {
    let lang = use_lang()();
    let rating_text = rating(lang, product.rating.rate, product.rating.count);

    rsx! {
        Card {
            class: "product-preview".to_string(),
            img {
                src: "{product.image}",
                alt: "{product.title}",
                width: "50",
                height: "50",
            }
            div {
                h3 { class: "product-title", "{product.title}" }
                span { class: "product-price", "{product.price}$" }
                span { class: "product-rating", "{rating_text}" }
            }
        }
    }
}
