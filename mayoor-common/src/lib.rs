//! Common types shared between the mayoor server and mayoor-ui
//!
//! Only the authentication slice of the GraphQL contract lives here: the
//! `login` mutation, its variables and payload, and the error envelope the
//! server uses to reject it.

pub mod auth;
pub mod graphql;

pub use auth::{ErrorCode, LoginMutation, LoginPayload, LoginVariables, User};
pub use graphql::{ErrorExtensions, GraphqlError, GraphqlRequest, GraphqlResponse, LOGIN_MUTATION};
