pub mod user_prefs;
