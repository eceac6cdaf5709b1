//! Translation lookup for the login screen
//!
//! Strings are embedded as static tables. A lookup falls back to English
//! when the active language lacks a key, and to the key itself when English
//! lacks it too, so a missing translation shows up as its key instead of
//! an empty label.

use leptos::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Synchronous message lookup for the active language
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Cs,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Cs => "cs",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "cs" => Some(Language::Cs),
            _ => None,
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Cs]
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Cs => "Čeština",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

const EN: &[(&str, &str)] = &[
    ("username_required", "Username is required"),
    ("password_required", "Password is required"),
    ("user_not_found", "User not found"),
    ("invalid_password", "Invalid password"),
    ("login_failed", "Login failed, please try again"),
    ("Username", "Username"),
    ("Password", "Password"),
    ("Log In", "Log In"),
    ("signed_in_as", "Signed in as"),
];

const CS: &[(&str, &str)] = &[
    ("username_required", "Uživatelské jméno je povinné"),
    ("password_required", "Heslo je povinné"),
    ("user_not_found", "Uživatel nenalezen"),
    ("invalid_password", "Neplatné heslo"),
    ("login_failed", "Přihlášení se nezdařilo, zkuste to znovu"),
    ("Username", "Uživatelské jméno"),
    ("Password", "Heslo"),
    ("Log In", "Přihlásit se"),
    ("signed_in_as", "Přihlášen jako"),
];

fn catalog_for(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::Cs => CS,
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look up `key` in `lang`, falling back to English and then to the key
pub fn t(lang: Language, key: &str) -> String {
    lookup(catalog_for(lang), key)
        .or_else(|| lookup(EN, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Fixed-language catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    pub language: Language,
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        t(self.language, key)
    }
}

/// Reactive catalog whose language can be switched at runtime
#[derive(Debug, Clone, Copy)]
pub struct I18n {
    pub language: RwSignal<Language>,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self {
            language: create_rw_signal(language),
        }
    }

    pub fn set_language(&self, language: Language) {
        tracing::debug!(language = %language, "switching language");
        self.language.set(language);
    }
}

impl Translate for I18n {
    fn translate(&self, key: &str) -> String {
        self.language.with(|lang| t(*lang, key))
    }
}

pub fn provide_i18n(language: Language) -> I18n {
    let i18n = I18n::new(language);
    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| I18n::new(Language::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_in_requested_language() {
        assert_eq!(t(Language::En, "user_not_found"), "User not found");
        assert_eq!(t(Language::Cs, "invalid_password"), "Neplatné heslo");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(t(Language::Cs, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_every_czech_key_exists_in_english() {
        for (key, _) in CS {
            assert!(lookup(EN, key).is_some(), "missing English entry for {}", key);
        }
    }

    #[test]
    fn test_language_codes() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn test_reactive_catalog_follows_switch() {
        let runtime = create_runtime();

        let i18n = I18n::new(Language::En);
        assert_eq!(i18n.translate("Log In"), "Log In");
        i18n.set_language(Language::Cs);
        assert_eq!(i18n.translate("Log In"), "Přihlásit se");

        runtime.dispose();
    }
}
