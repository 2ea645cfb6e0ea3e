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
                    .table(View::Table)
                    .if_not_exists()
                    .col(pk_auto(View::Id))
                    .col(string(View::ViewGroup))
                    .col(integer(View::TargetId))
                    .col(integer(View::MemberId))
                    .col(
                        timestamp_with_time_zone(View::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(View::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_view_member_id")
                            .from(View::Table, View::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One view per member and target
        manager
            .create_index(
                Index::create()
                    .name("idx_view_unique")
                    .table(View::Table)
                    .col(View::MemberId)
                    .col(View::ViewGroup)
                    .col(View::TargetId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(View::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum View {
    Table,
    Id,
    ViewGroup,
    TargetId,
    MemberId,
    CreatedAt,
    UpdatedAt,
}
