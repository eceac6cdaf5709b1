//! GraphQL request and response envelopes

use crate::auth::ErrorCode;
use serde::{Deserialize, Serialize};

/// Document of the `login` mutation
pub const LOGIN_MUTATION: &str = r#"mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    user {
      id
      email
      name
      role
    }
    token
  }
}"#;

/// Body of a GraphQL POST request
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'a str>,
    pub variables: V,
}

impl<'a, V: Serialize> GraphqlRequest<'a, V> {
    pub fn new(query: &'a str, variables: V) -> Self {
        Self {
            query,
            operation_name: None,
            variables,
        }
    }

    pub fn with_operation(mut self, name: &'a str) -> Self {
        self.operation_name = Some(name);
        self
    }
}

/// Body of a GraphQL response. A server may send `data` and `errors` together;
/// any error makes the whole operation a rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    pub fn into_result(self) -> Result<Option<T>, Vec<GraphqlError>> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(self.errors)
        }
    }
}

/// One entry of a GraphQL `errors` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ErrorExtensions>,
}

impl GraphqlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extensions: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extensions: Some(ErrorExtensions {
                code: Some(code.into()),
            }),
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.code.as_deref())
            .map(ErrorCode::parse)
    }
}

/// Server-specific error metadata. Only `code` is read; everything else the
/// server puts here (stack traces in development builds) is ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorExtensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
