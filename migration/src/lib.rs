pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_member_table;
mod m20260301_000002_create_car_table;
mod m20260301_000003_create_board_article_table;
mod m20260302_000004_create_like_table;
mod m20260302_000005_create_view_table;
mod m20260302_000006_create_follow_table;
mod m20260303_000007_create_comment_table;
mod m20260303_000008_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_member_table::Migration),
            Box::new(m20260301_000002_create_car_table::Migration),
            Box::new(m20260301_000003_create_board_article_table::Migration),
            Box::new(m20260302_000004_create_like_table::Migration),
            Box::new(m20260302_000005_create_view_table::Migration),
            Box::new(m20260302_000006_create_follow_table::Migration),
            Box::new(m20260303_000007_create_comment_table::Migration),
            Box::new(m20260303_000008_create_notification_table::Migration),
        ]
    }
}
