//! Login controller
//!
//! Bridges the form state and the three collaborators a login touches: the
//! remote [`LoginService`], the [`SessionStore`] and the [`TokenStorage`].
//! The form state is reached through a [`FormCell`] so that it is never
//! borrowed across the remote call, and so that a form dropped mid-call is
//! simply not updated when the call resolves.

use crate::api::LoginService;
use crate::error::SideEffectError;
use crate::form::{Field, FormState, SubmitOutcome};
use crate::i18n::Translate;
use crate::session::SessionStore;
use crate::storage::TokenStorage;
use leptos::{RwSignal, SignalUpdate};
use mayoor_common::{ErrorCode, LoginPayload, LoginVariables};
use std::cell::RefCell;
use std::rc::Weak;
use tracing::{debug, info, warn};

/// Handle to form state that may outlive the form itself
pub trait FormCell {
    /// Run `f` on the state, or return `None` if the form is gone
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl FormCell for RwSignal<FormState> {
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormCell for Weak<RefCell<FormState>> {
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.upgrade().map(|state| f(&mut state.borrow_mut()))
    }
}

/// Field and message key for a rejection code, if the code belongs to a field
pub fn field_for_code(code: &ErrorCode) -> Option<(Field, &'static str)> {
    match code {
        ErrorCode::UserNotFound => Some((Field::Username, "user_not_found")),
        ErrorCode::InvalidPassword => Some((Field::Password, "invalid_password")),
        ErrorCode::Other(_) => None,
    }
}

pub struct LoginForm<A, S, T, L> {
    service: A,
    session: S,
    tokens: T,
    translator: L,
    report_unknown_errors: bool,
}

impl<A, S, T, L> LoginForm<A, S, T, L>
where
    A: LoginService,
    S: SessionStore,
    T: TokenStorage,
    L: Translate,
{
    pub fn new(service: A, session: S, tokens: T, translator: L) -> Self {
        Self {
            service,
            session,
            tokens,
            translator,
            report_unknown_errors: false,
        }
    }

    /// Show a generic message for failures that map to no field
    pub fn report_unknown_errors(mut self, enabled: bool) -> Self {
        self.report_unknown_errors = enabled;
        self
    }

    pub fn translator(&self) -> &L {
        &self.translator
    }

    /// Empty form state, validated with this form's translator
    pub fn initial_state(&self) -> FormState {
        FormState::new(&self.translator)
    }

    /// Validate, call the service if valid, and feed the outcome back into
    /// the form. Remote failures end up in the returned outcome; only a
    /// failed side effect after a successful login is an error.
    pub async fn submit<C: FormCell>(&self, form: &C) -> Result<SubmitOutcome, SideEffectError> {
        let credentials = form
            .update_form(|state| state.begin_submit(&self.translator))
            .flatten();

        let Some(credentials) = credentials else {
            return Ok(SubmitOutcome::Invalid);
        };

        let result = self.authenticate(&credentials).await;

        let outcome = result.as_ref().unwrap_or(&SubmitOutcome::Unrecognized);
        let applied = form.update_form(|state| {
            state.finish_submit(outcome, &self.translator, self.report_unknown_errors)
        });
        if applied.is_none() {
            debug!("login form went away before the login call resolved");
        }

        result
    }

    /// Call the service and perform the side effects of a successful login
    pub async fn authenticate(&self, credentials: &LoginVariables) -> Result<SubmitOutcome, SideEffectError> {
        debug!(username = %credentials.email, "submitting login");

        match self.service.login(credentials).await {
            Ok(data) => match data.login {
                Some(payload) => {
                    self.establish_session(payload)?;
                    Ok(SubmitOutcome::LoggedIn)
                }
                None => {
                    warn!("login response carried no payload");
                    Ok(SubmitOutcome::Unrecognized)
                }
            },
            Err(e) => {
                let mapped = e.code().as_ref().and_then(field_for_code);
                match mapped {
                    Some((field, message_key)) => {
                        debug!(%field, code = message_key, "login rejected");
                        Ok(SubmitOutcome::Rejected { field, message_key })
                    }
                    None => {
                        warn!(error = %e, "login failed");
                        Ok(SubmitOutcome::Unrecognized)
                    }
                }
            }
        }
    }

    fn establish_session(&self, payload: LoginPayload) -> Result<(), SideEffectError> {
        let LoginPayload { user, token } = payload;
        self.session.set_current_user(user)?;
        self.tokens.store_token(&token)?;
        info!("logged in");
        Ok(())
    }
}
