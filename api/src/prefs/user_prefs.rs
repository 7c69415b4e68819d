use std::env;

/// Base url of the public store API.
pub const DEFAULT_STORE_API_URL: &str = "https://fakestoreapi.com";

/// Language code used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Represents all user prefs.
#[derive(Clone, PartialEq, Debug)]
pub struct UserPrefs {
    store_api_url: String,
    language: String,
    dark_mode_default: bool,
}

impl UserPrefs {
    /// Creates a UserPrefs instance from environment variables,
    /// with conservative in-code defaults.
    ///
    /// Each variable is read at runtime first and then at compile time, since a
    /// browser build has no process environment.
    ///
    /// # Environment Variables
    /// - `STORE_API_URL`: base url of the store API.
    /// - `APP_LANG`: initial UI language code, "en" or "fr".
    /// - `DARK_MODE_DEFAULT`: "true" or "1" to start in dark mode when nothing
    ///   has been persisted yet. Case-insensitive.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            let compiled = match name {
                "STORE_API_URL" => option_env!("STORE_API_URL"),
                "APP_LANG" => option_env!("APP_LANG"),
                "DARK_MODE_DEFAULT" => option_env!("DARK_MODE_DEFAULT"),
                _ => None,
            };
            env::var(name).ok().or_else(|| compiled.map(str::to_string))
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_api_url = lookup("STORE_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_API_URL.to_string());

        let language = lookup("APP_LANG")
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let dark_mode_default = lookup("DARK_MODE_DEFAULT")
            .map(|val| parse_flag(&val))
            .unwrap_or(false);

        Self {
            store_api_url,
            language,
            dark_mode_default,
        }
    }

    pub fn store_api_url(&self) -> &str {
        &self.store_api_url
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn dark_mode_default(&self) -> bool {
        self.dark_mode_default
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim();
    val.eq_ignore_ascii_case("true") || val == "1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefs_with(vars: &[(&str, &str)]) -> UserPrefs {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserPrefs::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let prefs = prefs_with(&[]);
        assert_eq!(prefs.store_api_url(), DEFAULT_STORE_API_URL);
        assert_eq!(prefs.language(), "en");
        assert!(!prefs.dark_mode_default());
    }

    #[test]
    fn reads_every_setting() {
        let prefs = prefs_with(&[
            ("STORE_API_URL", "http://localhost:3000"),
            ("APP_LANG", "fr"),
            ("DARK_MODE_DEFAULT", "TRUE"),
        ]);
        assert_eq!(prefs.store_api_url(), "http://localhost:3000");
        assert_eq!(prefs.language(), "fr");
        assert!(prefs.dark_mode_default());
    }

    #[test]
    fn blank_values_fall_back() {
        let prefs = prefs_with(&[("STORE_API_URL", "  "), ("APP_LANG", "")]);
        assert_eq!(prefs.store_api_url(), DEFAULT_STORE_API_URL);
        assert_eq!(prefs.language(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("True"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("0"));
    }
}
