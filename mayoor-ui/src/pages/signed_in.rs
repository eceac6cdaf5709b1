use crate::i18n::{use_i18n, Translate};
use crate::session::use_app_context;
use leptos::*;

/// Placeholder shown once a user is set; routing past the login screen
/// belongs to the host application.
#[component]
pub fn SignedIn() -> impl IntoView {
    let session = use_app_context();
    let i18n = use_i18n();

    let name = move || {
        session.state.with(|state| {
            state
                .current_user
                .as_ref()
                .and_then(|user| user.display_name().map(str::to_string))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="centered-wrapper">
            <p class="signed-in">{move || i18n.translate("signed_in_as")}" "<strong>{name}</strong></p>
        </div>
    }
}
