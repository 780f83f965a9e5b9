//! `X-Username` request header.
//!
//! Clients may say who is calling; the list endpoint logs it. Nothing checks it,
//! so the extractor never rejects a request.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use std::convert::Infallible;

pub const USERNAME_HEADER: &str = "X-Username";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Username(pub Option<String>);

impl Username {
    /// Header value with surrounding whitespace removed. An empty value or one
    /// that is not visible ASCII reads as no caller.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let name = headers
            .get(USERNAME_HEADER)
            .and_then(|raw| raw.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from);
        Username(name)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Username
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Username::from_headers(&parts.headers))
    }
}
