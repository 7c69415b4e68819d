use crate::i18n::{t, use_lang, Lang, Text};
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[component]
pub fn LanguageSelector() -> Element {
    let mut lang = use_lang();
    let current = lang();
    let label = t(current, Text::Language);

    rsx! {
        label {
            "{label}"
            select {
                value: current.code(),
                onchange: move |evt| match Lang::from_str(&evt.value()) {
                    Ok(next) => lang.set(next),
                    Err(_) => warn!("unsupported language {:?}", evt.value()),
                },
                for option_lang in Lang::iter() {
                    option {
                        key: "{option_lang.code()}",
                        value: option_lang.code(),
                        selected: option_lang == current,
                        "{option_lang.name()}"
                    }
                }
            }
        }
    }
}
