use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Like::Table)
                    .if_not_exists()
                    .col(pk_auto(Like::Id))
                    .col(string(Like::LikeGroup))
                    .col(integer(Like::TargetId))
                    .col(integer(Like::MemberId))
                    .col(
                        timestamp_with_time_zone(Like::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Like::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_member_id")
                            .from(Like::Table, Like::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One like per member and target
        manager
            .create_index(
                Index::create()
                    .name("idx_like_unique")
                    .table(Like::Table)
                    .col(Like::MemberId)
                    .col(Like::LikeGroup)
                    .col(Like::TargetId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Like::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Like {
    Table,
    Id,
    LikeGroup,
    TargetId,
    MemberId,
    CreatedAt,
    UpdatedAt,
}
