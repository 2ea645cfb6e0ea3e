use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use super::*;
use crate::server::middleware::auth::{Authenticator, Claims, JwtAuthenticator};

const SECRET: &str = "test-secret-for-member-access-tokens";

fn token(sub: &str, secret: &str, ttl_secs: i64) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        exp: (Utc::now().timestamp() + ttl_secs) as u64,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn bearer_token(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Expected: Ok(42) from the `sub` claim
#[test]
fn resolves_member_id_from_sub() {
    let authenticator = JwtAuthenticator::new(SECRET);

    assert_eq!(authenticator.resolve(&token("42", SECRET, 3600)).unwrap(), 42);
}

/// Expected: Err(AuthError::InvalidCredential) for a token signed with another secret
#[test]
fn rejects_foreign_signature() {
    let authenticator = JwtAuthenticator::new(SECRET);

    let result = authenticator.resolve(&token("42", "some-other-secret-entirely", 3600));

    assert!(matches!(result, Err(AuthError::InvalidCredential)));
}

/// Expected: Err(AuthError::InvalidCredential) for an expired token
#[test]
fn rejects_expired_token() {
    let authenticator = JwtAuthenticator::new(SECRET);

    let result = authenticator.resolve(&token("42", SECRET, -3600));

    assert!(matches!(result, Err(AuthError::InvalidCredential)));
}

/// Expected: Err(AuthError::InvalidCredential) for a non-numeric subject
#[test]
fn rejects_non_numeric_sub() {
    let authenticator = JwtAuthenticator::new(SECRET);

    let result = authenticator.resolve(&token("alice", SECRET, 3600));

    assert!(matches!(result, Err(AuthError::InvalidCredential)));
}

/// A raw member id is no longer accepted as a credential.
///
/// Expected: Err(AuthError::InvalidCredential) even though the member exists
#[tokio::test]
async fn guard_rejects_raw_member_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let headers = bearer(member.id);

    let result = AuthGuard::new(db, &JwtAuthenticator::new(SECRET), &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredential))
    ));

    Ok(())
}

/// Expected: Ok(Member) for a signed token naming an active member
#[tokio::test]
async fn guard_accepts_signed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let headers = bearer_token(&token(&member.id.to_string(), SECRET, 3600));

    let resolved = AuthGuard::new(db, &JwtAuthenticator::new(SECRET), &headers)
        .require(&[])
        .await?;

    assert_eq!(resolved.id, member.id);

    Ok(())
}
