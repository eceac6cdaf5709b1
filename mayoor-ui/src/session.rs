//! Application-wide session state

use crate::error::SessionError;
use leptos::*;
use mayoor_common::User;

/// Receiver of the authenticated user
pub trait SessionStore {
    fn set_current_user(&self, user: User) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub current_user: Option<User>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SetCurrentUser(User),
}

impl AppState {
    pub fn reduce(&mut self, action: AppAction) {
        match action {
            AppAction::SetCurrentUser(user) => self.current_user = Some(user),
        }
    }
}

/// Session store held in a Leptos context
#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<AppState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(AppState::default()),
        }
    }

    /// Apply `action`. Fails once the owning scope has been disposed.
    pub fn dispatch(&self, action: AppAction) -> Result<(), SessionError> {
        self.state
            .try_update(|state| state.reduce(action))
            .ok_or(SessionError::Unavailable)
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.with(|state| state.current_user.is_some())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for AppContext {
    fn set_current_user(&self, user: User) -> Result<(), SessionError> {
        self.dispatch(AppAction::SetCurrentUser(user))
    }
}

pub fn provide_app_context() -> AppContext {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> User {
        serde_json::from_value(json!({ "id": 1, "name": "Alice" })).unwrap()
    }

    #[test]
    fn test_reduce_sets_current_user() {
        let mut state = AppState::default();
        state.reduce(AppAction::SetCurrentUser(alice()));
        assert_eq!(state.current_user, Some(alice()));
    }

    #[test]
    fn test_context_dispatch() {
        let runtime = create_runtime();

        let ctx = AppContext::new();
        assert!(!ctx.is_logged_in());
        ctx.set_current_user(alice()).unwrap();
        assert!(ctx.is_logged_in());

        runtime.dispose();
    }

    #[test]
    fn test_dispatch_after_dispose_fails() {
        let runtime = create_runtime();
        let ctx = AppContext::new();
        ctx.state.dispose();

        assert_eq!(ctx.set_current_user(alice()), Err(SessionError::Unavailable));

        runtime.dispose();
    }
}
