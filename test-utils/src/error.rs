use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised while preparing a test database.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] DbErr),
}
