use crate::server::{error::AppError, model::member::Member};
use test_utils::builder::TestBuilder;


/// Test database with every table the services touch.
async fn setup() -> test_utils::context::TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}

fn member(model: entity::member::Model) -> Member {
    Member::from_entity(model)
}

/// Re-reads a member after the service under test changed its counters.
async fn reload(db: &sea_orm::DatabaseConnection, id: i32) -> Result<Member, AppError> {
    use sea_orm::EntityTrait;

    let model = entity::prelude::Member::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

    Ok(Member::from_entity(model))
}
