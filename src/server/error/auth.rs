use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a request that needs one.
    #[error("Missing bearer credential")]
    MissingCredential,

    /// The credential could not be resolved to a member.
    #[error("Invalid bearer credential")]
    InvalidCredential,

    /// The credential resolved to a member id that is not in the database.
    #[error("Member {0} from credential not found in database")]
    MemberNotFound(i32),

    /// The member is blocked or deleted.
    #[error("Member {0} is not active")]
    MemberInactive(i32),

    /// The member lacks a required role.
    ///
    /// # Fields
    /// - Member id
    /// - Description of the denied action, logged only
    #[error("Member {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - Missing or unresolvable credential
/// - 403 Forbidden - Inactive member or missing role
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingCredential | Self::InvalidCredential | Self::MemberNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Please login first")
            }
            Self::MemberInactive(_) => (StatusCode::FORBIDDEN, "Your account is not active"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
