use crate::form::{Field, FormState};
use crate::i18n::{use_i18n, Translate};
use leptos::*;

/// One input of the login form with its helper text
#[component]
pub fn CredentialField(
    field: Field,
    state: RwSignal<FormState>,
    /// HTML input type
    #[prop(default = "text")]
    input_type: &'static str,
    /// Icon shown left of the input
    icon: &'static str,
) -> impl IntoView {
    let i18n = use_i18n();

    let helper = move || state.with(|s| s.visible_error(field).map(str::to_string));
    let group_class = move || format!("form-group {}", state.with(|s| s.intent(field).class()));

    view! {
        <div class=group_class>
            <div class="input-group">
                <span class=format!("input-icon icon-{}", icon)></span>
                <input
                    type=input_type
                    name=field.name()
                    placeholder=move || i18n.translate(field.label_key())
                    prop:value=move || state.with(|s| s.values().get(field).to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.handle_change(field, value, &i18n));
                    }
                    on:blur=move |_| state.update(|s| s.handle_blur(field))
                />
            </div>
            {move || helper().map(|message| view! { <div class="helper-text">{message}</div> })}
        </div>
    }
}
