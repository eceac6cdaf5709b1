use crate::api::GraphqlClient;
use crate::components::{CredentialField, LanguageSwitch};
use crate::config::ClientConfig;
use crate::form::{Field, FormState};
use crate::i18n::{use_i18n, Translate};
use crate::login::LoginForm;
use crate::session::use_app_context;
use crate::storage::LocalTokenStorage;
use leptos::*;
use std::rc::Rc;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let i18n = use_i18n();
    let session = use_app_context();

    let tokens = LocalTokenStorage::new(config.token_key.clone());
    let client = GraphqlClient::new(config.graphql_endpoint.clone()).with_token(tokens.load_token());
    let form = Rc::new(
        LoginForm::new(client, session, tokens, i18n).report_unknown_errors(config.report_unknown_errors),
    );
    let state = create_rw_signal(form.initial_state());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = Rc::clone(&form);
        // Once the page is unmounted the signal is gone and only the side
        // effects of the login survive.
        spawn_local(async move {
            if let Err(e) = form.submit(&state).await {
                tracing::error!(error = %e, "login succeeded but the session could not be established");
            }
        });
    };

    let loading = move || state.with(FormState::is_loading);
    let general_error = move || state.with(|s| s.general_error().map(str::to_string));

    view! {
        <div class="centered-wrapper">
            <form class="login-wrapper" on:submit=on_submit>
                <img class="logo" src="/images/mayoor_logo.svg" alt="mayoor"/>
                {move || general_error().map(|message| view! { <div class="alert alert-error">{message}</div> })}
                <CredentialField field=Field::Username state=state icon="user"/>
                <CredentialField field=Field::Password state=state input_type="password" icon="lock"/>
                <button
                    type="submit"
                    class=move || if loading() { "btn btn-fill btn-loading" } else { "btn btn-fill" }
                    disabled=move || !state.with(FormState::can_submit)
                >
                    {move || if loading() {
                        view! { <span class="spinner"></span> }.into_view()
                    } else {
                        view! { <span class="icon-log-in"></span>{i18n.translate("Log In")} }.into_view()
                    }}
                </button>
                <div class="language-switch-wrapper">
                    <LanguageSwitch/>
                </div>
            </form>
        </div>
    }
}
