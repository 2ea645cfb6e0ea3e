//! Shared helper utilities for factory methods.

use sea_orm::{ConnectionTrait, DbErr};

/// Counter for generating unique nicknames and titles in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an agent together with one available car they own.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((agent, car))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_with_owner<C: ConnectionTrait>(
    db: &C,
) -> Result<(entity::member::Model, entity::car::Model), DbErr> {
    let agent = crate::factory::member::create_agent(db).await?;
    let car = crate::factory::car::create_car(db, agent.id).await?;

    Ok((agent, car))
}

/// Creates a member together with one active article they wrote.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, article))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_author<C: ConnectionTrait>(
    db: &C,
) -> Result<(entity::member::Model, entity::board_article::Model), DbErr> {
    let author = crate::factory::member::create_member(db).await?;
    let article = crate::factory::board_article::create_article(db, author.id).await?;

    Ok((author, article))
}
