//! HTTP handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into params, call a service and
//! convert the domain result back into a DTO. Business rules stay in the service layer.

pub mod admin;
pub mod article;
pub mod car;
pub mod comment;
pub mod member;
pub mod notification;

use axum::http::HeaderMap;
use serde::Deserialize;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, model::page::PageParam, state::AppState,
};

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

impl PaginationParams {
    pub fn into_page(self) -> Result<PageParam, AppError> {
        PageParam::new(self.page, self.limit)
    }
}

/// Builds the auth guard for a request.
pub fn guard<'a>(state: &'a AppState, headers: &'a HeaderMap) -> AuthGuard<'a> {
    AuthGuard::new(&state.db, state.authenticator.as_ref(), headers)
}
