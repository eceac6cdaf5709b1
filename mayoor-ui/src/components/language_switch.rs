use crate::i18n::{use_i18n, Language};
use gloo_storage::{LocalStorage, Storage};
use leptos::*;

const LANGUAGE_KEY: &str = "mayoor-language";

/// Language picked with the switch in an earlier visit
pub fn stored_language() -> Option<Language> {
    LocalStorage::raw()
        .get_item(LANGUAGE_KEY)
        .ok()
        .flatten()
        .and_then(|code| Language::from_code(&code))
}

#[component]
pub fn LanguageSwitch() -> impl IntoView {
    let i18n = use_i18n();

    let choose = move |lang: Language| {
        i18n.set_language(lang);
        if let Err(e) = LocalStorage::raw().set_item(LANGUAGE_KEY, lang.code()) {
            tracing::warn!(error = ?e, "could not remember language");
        }
    };

    view! {
        <div class="language-switch">
            {Language::all()
                .iter()
                .copied()
                .map(|lang| {
                    view! {
                        <button
                            type="button"
                            class=move || if i18n.language.get() == lang { "lang-btn active" } else { "lang-btn" }
                            on:click=move |_| choose(lang)
                        >
                            {lang.native_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
