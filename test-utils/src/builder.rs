use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables (in dependency order) and any indexes, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Car, Member};
///
/// let test = TestBuilder::new()
///     .with_table(Member)
///     .with_table(Car)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in insertion order.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed once every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index created after all tables.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the member, car and article tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_target_tables(self) -> Self {
        self.with_table(Member)
            .with_table(Car)
            .with_table(BoardArticle)
    }

    /// Adds the target tables plus likes, views and follows with the same unique
    /// indexes the migrations create.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_engagement_tables(self) -> Self {
        self.with_target_tables()
            .with_table(Like)
            .with_table(View)
            .with_table(Follow)
            .with_index(
                Index::create()
                    .name("idx_like_unique")
                    .table(Like)
                    .col(entity::like::Column::MemberId)
                    .col(entity::like::Column::LikeGroup)
                    .col(entity::like::Column::TargetId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_view_unique")
                    .table(View)
                    .col(entity::view::Column::MemberId)
                    .col(entity::view::Column::ViewGroup)
                    .col(entity::view::Column::TargetId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_follow_unique")
                    .table(Follow)
                    .col(entity::follow::Column::FollowerId)
                    .col(entity::follow::Column::FollowingId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds every table the server uses.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_all_tables().build().await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_engagement_tables()
            .with_table(Comment)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables and indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database, tables and indexes ready
    /// - `Err(TestError::Database)` - Failed to connect or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
