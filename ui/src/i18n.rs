//! UI strings in every supported language.

use dioxus::prelude::*;

/// Supported languages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Lang {
    #[default]
    #[strum(serialize = "en")]
    En,
    #[strum(serialize = "fr")]
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Human readable name, in the language itself.
    pub fn name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Fr => "Français",
        }
    }
}

/// Translatable UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    SwitchToLightMode,
    SwitchToDarkMode,
    CategoriesLoading,
    CategoriesFailure,
    ProductsLoading,
    ProductsFailure,
    NoProducts,
    NoProductsHint,
    Language,
}

pub fn t(lang: Lang, text: Text) -> &'static str {
    match (lang, text) {
        (Lang::En, Text::SwitchToLightMode) => "Switch to lightmode",
        (Lang::En, Text::SwitchToDarkMode) => "Switch to darkmode",
        (Lang::En, Text::CategoriesLoading) => "Loading categories...",
        (Lang::En, Text::CategoriesFailure) => "Failed to load categories",
        (Lang::En, Text::ProductsLoading) => "Loading products...",
        (Lang::En, Text::ProductsFailure) => "Failed to load products",
        (Lang::En, Text::NoProducts) => "No products found",
        (Lang::En, Text::NoProductsHint) => "Pick another category.",
        (Lang::En, Text::Language) => "Language",

        (Lang::Fr, Text::SwitchToLightMode) => "Passer au lightmode",
        (Lang::Fr, Text::SwitchToDarkMode) => "Passer au darkmode",
        (Lang::Fr, Text::CategoriesLoading) => "Chargement des catégories...",
        (Lang::Fr, Text::CategoriesFailure) => "Erreur lors du chargement des catégories",
        (Lang::Fr, Text::ProductsLoading) => "Chargement des produits...",
        (Lang::Fr, Text::ProductsFailure) => "Erreur lors du chargement des produits",
        (Lang::Fr, Text::NoProducts) => "Aucun produit trouvé",
        (Lang::Fr, Text::NoProductsHint) => "Choisissez une autre catégorie.",
        (Lang::Fr, Text::Language) => "Langue",
    }
}

/// Rating line of a product preview.
pub fn rating(lang: Lang, rate: f64, count: u32) -> String {
    match lang {
        Lang::En => format!("{} rating for {} reviews", rate, count),
        Lang::Fr => format!("{} note moyenne pour {} notes", rate, count),
    }
}

/// Provides the language signal to the component tree.
pub fn use_lang_provider(initial: Lang) -> Signal<Lang> {
    use_context_provider(|| Signal::new(initial))
}

pub fn use_lang() -> Signal<Lang> {
    use_context::<Signal<Lang>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Lang::from_str("fr").unwrap(), Lang::Fr);
        assert_eq!(Lang::from_str("EN").unwrap(), Lang::En);
        assert!(Lang::from_str("de").is_err());
    }

    #[test]
    fn code_round_trips() {
        for lang in Lang::iter() {
            assert_eq!(Lang::from_str(lang.code()).unwrap(), lang);
        }
    }

    #[test]
    fn french_toggle_labels() {
        assert_eq!(t(Lang::Fr, Text::SwitchToDarkMode), "Passer au darkmode");
        assert_eq!(t(Lang::Fr, Text::SwitchToLightMode), "Passer au lightmode");
    }

    #[test]
    fn rating_interpolates_rate_and_count() {
        assert_eq!(rating(Lang::En, 3.9, 120), "3.9 rating for 120 reviews");
        assert_eq!(rating(Lang::Fr, 4.0, 7), "4 note moyenne pour 7 notes");
    }
}
