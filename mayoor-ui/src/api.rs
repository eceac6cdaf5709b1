//! GraphQL client for the mayoor backend

use crate::error::LoginError;
use async_trait::async_trait;
use mayoor_common::{GraphqlRequest, GraphqlResponse, LoginMutation, LoginVariables, LOGIN_MUTATION};
use serde::{de::DeserializeOwned, Serialize};

/// Remote side of the login form
#[async_trait(?Send)]
pub trait LoginService {
    async fn login(&self, variables: &LoginVariables) -> Result<LoginMutation, LoginError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlClient {
    endpoint: String,
    token: Option<String>,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
        }
    }

    /// Send `token` as a bearer credential with every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one operation and return its `data`
    pub async fn execute<V: Serialize, T: DeserializeOwned>(
        &self,
        query: &str,
        operation: &str,
        variables: &V,
    ) -> Result<Option<T>, LoginError> {
        let request = GraphqlRequest::new(query, variables).with_operation(operation);
        let body = serde_json::to_string(&request).map_err(|e| LoginError::Decode(e.to_string()))?;

        let mut builder = reqwasm::http::Request::post(&self.endpoint).header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = builder
            .body(body)
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;

        tracing::debug!(operation, status, "graphql response received");
        interpret_response(status, &text)
    }
}

#[async_trait(?Send)]
impl LoginService for GraphqlClient {
    async fn login(&self, variables: &LoginVariables) -> Result<LoginMutation, LoginError> {
        let data = self
            .execute::<_, LoginMutation>(LOGIN_MUTATION, "Login", variables)
            .await?;
        Ok(data.unwrap_or_default())
    }
}

/// Turn an HTTP status and body into the operation result. GraphQL errors win
/// over the status code because servers report rejections with 200 as well as
/// with 4xx.
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, LoginError> {
    let success = (200..300).contains(&status);
    match serde_json::from_str::<GraphqlResponse<T>>(body) {
        Ok(response) if !success && response.data.is_none() && response.errors.is_empty() => {
            Err(LoginError::Network(format!("HTTP {}", status)))
        }
        Ok(response) => response.into_result().map_err(LoginError::Graphql),
        Err(_) if !success => Err(LoginError::Network(format!("HTTP {}", status))),
        Err(e) => Err(LoginError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mayoor_common::ErrorCode;

    #[test]
    fn test_interpret_success() {
        let body = r#"{"data":{"login":{"user":{"id":1,"name":"Alice"},"token":"tok123"}}}"#;
        let data: LoginMutation = interpret_response(200, body).unwrap().unwrap();

        assert_eq!(data.login.unwrap().token, "tok123");
    }

    #[test]
    fn test_interpret_rejection_with_ok_status() {
        let body = r#"{"data":null,"errors":[{"message":"nope","extensions":{"code":"INVALID_PASSWORD"}}]}"#;
        let err = interpret_response::<LoginMutation>(200, body).unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::InvalidPassword));
    }

    #[test]
    fn test_interpret_rejection_with_error_status() {
        let body = r#"{"errors":[{"message":"nope","extensions":{"code":"USER_NOT_FOUND"}}]}"#;
        let err = interpret_response::<LoginMutation>(400, body).unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::UserNotFound));
    }

    #[test]
    fn test_interpret_gateway_error() {
        let err = interpret_response::<LoginMutation>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, LoginError::Network("HTTP 502".to_string()));
    }

    #[test]
    fn test_interpret_non_graphql_json_error() {
        let err = interpret_response::<LoginMutation>(500, r#"{"error":"db down"}"#).unwrap_err();
        assert_eq!(err, LoginError::Network("HTTP 500".to_string()));
    }

    #[test]
    fn test_interpret_empty_data_with_ok_status() {
        let data = interpret_response::<LoginMutation>(200, r#"{"data":null}"#).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_interpret_garbage_with_ok_status() {
        let err = interpret_response::<LoginMutation>(200, "not json").unwrap_err();
        assert!(matches!(err, LoginError::Decode(_)));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_client_builder() {
        let client = GraphqlClient::new("/graphql").with_token(Some("tok".to_string()));
        assert_eq!(client.endpoint(), "/graphql");
        assert_eq!(client.token.as_deref(), Some("tok"));
    }
}
