//! Authentication and login types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Authenticated user as returned by the `login` mutation.
///
/// The client never interprets the user beyond display purposes; the whole
/// object is handed to the session store as received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Map<String, Value>);

impl User {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Name to greet the user with, falling back to the e-mail address
    pub fn display_name(&self) -> Option<&str> {
        self.get("name")
            .and_then(Value::as_str)
            .or_else(|| self.get("email").and_then(Value::as_str))
    }
}

/// Variables of the `login` mutation.
///
/// The server calls the login identifier `email` even though the form
/// labels it "username".
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginVariables {
    pub email: String,
    pub password: String,
}

impl LoginVariables {
    /// Build mutation variables from the form's username and password fields
    pub fn from_form(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginVariables")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub user: User,
    pub token: String,
}

/// `data` member of the `login` mutation response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginMutation {
    #[serde(default)]
    pub login: Option<LoginPayload>,
}

/// Machine-readable code carried in a GraphQL error's `extensions.code`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UserNotFound,
    InvalidPassword,
    Other(String),
}

impl ErrorCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "USER_NOT_FOUND" => Self::UserNotFound,
            "INVALID_PASSWORD" => Self::InvalidPassword,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_variables_use_email_on_the_wire() {
        let vars = LoginVariables::from_form("alice", "secret");
        let json = serde_json::to_value(&vars).unwrap();

        assert_eq!(json, json!({ "email": "alice", "password": "secret" }));
    }

    #[test]
    fn test_login_variables_debug_hides_password() {
        let vars = LoginVariables::from_form("alice", "secret");
        let debug = format!("{:?}", vars);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_user_is_kept_opaque() {
        let payload: LoginMutation = serde_json::from_value(json!({
            "login": {
                "user": { "id": 1, "name": "Alice", "role": "FACTORY" },
                "token": "tok123"
            }
        }))
        .unwrap();

        let login = payload.login.unwrap();
        assert_eq!(login.token, "tok123");
        assert_eq!(login.user.get("role"), Some(&json!("FACTORY")));
        assert_eq!(
            serde_json::to_value(&login.user).unwrap(),
            json!({ "id": 1, "name": "Alice", "role": "FACTORY" })
        );
    }

    #[test]
    fn test_null_login_payload() {
        let payload: LoginMutation = serde_json::from_value(json!({ "login": null })).unwrap();
        assert!(payload.login.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: User = serde_json::from_value(json!({ "id": 2, "email": "bob@example.com" })).unwrap();
        assert_eq!(user.display_name(), Some("bob@example.com"));
    }

    #[test]
    fn test_error_code_parsing() {
        assert_eq!(ErrorCode::parse("USER_NOT_FOUND"), ErrorCode::UserNotFound);
        assert_eq!(ErrorCode::parse("INVALID_PASSWORD"), ErrorCode::InvalidPassword);
        assert_eq!(
            ErrorCode::parse("UNAUTHENTICATED"),
            ErrorCode::Other("UNAUTHENTICATED".to_string())
        );
        assert_eq!(ErrorCode::Other("X".to_string()).to_string(), "X");
    }
}
