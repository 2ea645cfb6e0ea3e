use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use entity::{prelude::Member, sea_orm_active_enums::{MemberStatus, MemberType}};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, GatewayTokenAuthenticator, Permission},
};
use test_utils::{builder::TestBuilder, factory};

mod jwt;
mod optional;
mod require;

fn bearer(member_id: i32) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", member_id)).unwrap(),
    );
    headers
}
