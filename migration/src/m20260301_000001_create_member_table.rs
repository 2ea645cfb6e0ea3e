use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string(Member::MemberType))
                    .col(string(Member::MemberStatus))
                    .col(string_uniq(Member::MemberNick))
                    .col(string_null(Member::MemberFullName))
                    .col(string_null(Member::MemberImage))
                    .col(integer(Member::MemberCars).default(0))
                    .col(integer(Member::MemberArticles).default(0))
                    .col(integer(Member::MemberFollowers).default(0))
                    .col(integer(Member::MemberFollowings).default(0))
                    .col(integer(Member::MemberViews).default(0))
                    .col(integer(Member::MemberLikes).default(0))
                    .col(integer(Member::MemberComments).default(0))
                    .col(integer(Member::MemberRank).default(0))
                    .col(
                        timestamp_with_time_zone(Member::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Member::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    MemberType,
    MemberStatus,
    MemberNick,
    MemberFullName,
    MemberImage,
    MemberCars,
    MemberArticles,
    MemberFollowers,
    MemberFollowings,
    MemberViews,
    MemberLikes,
    MemberComments,
    MemberRank,
    CreatedAt,
    UpdatedAt,
}
