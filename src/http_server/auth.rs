//! Bearer token shim
//!
//! Every protected route calls [`authenticate`] before touching the body.
//! Tokens are not verified: any non-empty bearer token maps to the demo user.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use serde::Serialize;

use super::errors::ApiError;

/// Account the shim resolves every token to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoUser {
    pub user_id: String,
    pub credits: u32,
}

impl DemoUser {
    pub const USER_ID: &'static str = "demo_user";

    pub fn new(credits: u32) -> Self {
        Self {
            user_id: Self::USER_ID.to_string(),
            credits,
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Resolve the caller, or 401
pub fn authenticate(headers: &HeaderMap, credits: u32) -> Result<DemoUser, ApiError> {
    bearer_token(headers)
        .map(|_| DemoUser::new(credits))
        .ok_or(ApiError::Unauthorized)
}
