use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::sea_orm_active_enums::MemberType;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    model::member::Member,
};

/// Resolves a bearer credential to a member id.
///
/// Token issuance lives outside this service; implementations only verify what an
/// identity provider already handed out.
pub trait Authenticator: Send + Sync {
    fn resolve(&self, token: &str) -> Result<i32, AuthError>;
}

/// Claims carried by member access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Member id as a decimal string.
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
}

/// Verifies HS256 access tokens signed with the shared secret and reads the member id
/// from the `sub` claim.
pub struct JwtAuthenticator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAuthenticator {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl Authenticator for JwtAuthenticator {
    fn resolve(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token.trim(), &self.key, &self.validation).map_err(|e| {
            tracing::debug!("Rejected access token: {}", e);
            AuthError::InvalidCredential
        })?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidCredential)
    }
}

/// Takes the bearer token as the member id verbatim; lets handler tests skip token minting.
#[cfg(test)]
pub struct GatewayTokenAuthenticator;

#[cfg(test)]
impl Authenticator for GatewayTokenAuthenticator {
    fn resolve(&self, token: &str) -> Result<i32, AuthError> {
        token
            .trim()
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidCredential)
    }
}

pub enum Permission {
    Admin,
    Agent,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    authenticator: &'a dyn Authenticator,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        authenticator: &'a dyn Authenticator,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            authenticator,
            headers,
        }
    }

    /// Loads the calling member and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(Member)` - Active member holding all permissions
    /// - `Err(AuthError::MissingCredential)` - No bearer header
    /// - `Err(AuthError::InvalidCredential | MemberNotFound)` - Credential does not map to a member
    /// - `Err(AuthError::MemberInactive)` - Member is blocked or deleted
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Member, AppError> {
        let Some(token) = self.bearer()? else {
            return Err(AuthError::MissingCredential.into());
        };

        let member = self.load(token).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if member.member_type != MemberType::Admin {
                        return Err(AuthError::AccessDenied(
                            member.id,
                            "Member attempted an admin action without the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Agent => {
                    if !matches!(member.member_type, MemberType::Agent | MemberType::Admin) {
                        return Err(AuthError::AccessDenied(
                            member.id,
                            "Member attempted to list a car without the agent role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(member)
    }

    /// Loads the calling member when a credential is present.
    ///
    /// Anonymous requests yield `Ok(None)`; a credential that is present but invalid is
    /// still rejected.
    pub async fn optional(&self) -> Result<Option<Member>, AppError> {
        match self.bearer()? {
            Some(token) => Ok(Some(self.load(token).await?)),
            None => Ok(None),
        }
    }

    fn bearer(&self) -> Result<Option<&'a str>, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let value = value.to_str().map_err(|_| AuthError::InvalidCredential)?;

        value
            .strip_prefix("Bearer ")
            .map(Some)
            .ok_or(AuthError::InvalidCredential)
    }

    async fn load(&self, token: &str) -> Result<Member, AppError> {
        let member_id = self.authenticator.resolve(token)?;

        let Some(member) = MemberRepository::new(self.db).find_by_id(member_id).await? else {
            return Err(AuthError::MemberNotFound(member_id).into());
        };

        if !member.is_active() {
            return Err(AuthError::MemberInactive(member.id).into());
        }

        Ok(member)
    }
}
