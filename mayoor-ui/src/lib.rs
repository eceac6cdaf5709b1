//! mayoor-ui
//!
//! Login screen of the mayoor web client, built with Leptos. The form logic
//! (`form`, `login`) is plain Rust behind small collaborator traits, so it
//! runs and is tested without a browser; `pages` and `components` wire it to
//! the DOM.

use leptos::*;
use leptos_meta::*;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod login;
mod pages;
pub mod session;
pub mod storage;

use components::stored_language;
use config::ClientConfig;
use i18n::provide_i18n;
use logging::LoggingConfig;
use pages::{LoginPage, SignedIn};
use session::provide_app_context;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let language = stored_language().unwrap_or(config.language);
    provide_i18n(language);
    let session = provide_app_context();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/mayoor-ui.css"/>
        <Title text="mayoor"/>
        <Show when=move || session.is_logged_in() fallback=|| view! { <LoginPage/> }>
            <SignedIn/>
        </Show>
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::load();
    if let Err(e) = LoggingConfig::from_client(&config).init() {
        leptos::logging::warn!("logging was already initialised: {}", e);
    }
    tracing::info!(endpoint = %config.graphql_endpoint, "starting mayoor-ui");

    mount_to_body(move || view! { <App config=config.clone()/> });
}
