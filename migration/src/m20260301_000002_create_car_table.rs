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
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(integer(Car::MemberId))
                    .col(string(Car::CarStatus))
                    .col(string(Car::Brand))
                    .col(string(Car::Model))
                    .col(integer(Car::CarYear))
                    .col(big_integer(Car::CarPrice))
                    .col(integer(Car::DiscountPercent).default(0))
                    .col(big_integer(Car::DiscountedPrice))
                    .col(integer(Car::CarViews).default(0))
                    .col(integer(Car::CarLikes).default(0))
                    .col(integer(Car::CarComments).default(0))
                    .col(integer(Car::CarRank).default(0))
                    .col(timestamp_with_time_zone_null(Car::SoldAt))
                    .col(timestamp_with_time_zone_null(Car::DeletedAt))
                    .col(
                        timestamp_with_time_zone(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Car::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_member_id")
                            .from(Car::Table, Car::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_status_rank")
                    .table(Car::Table)
                    .col(Car::CarStatus)
                    .col(Car::CarRank)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    MemberId,
    CarStatus,
    Brand,
    Model,
    CarYear,
    CarPrice,
    DiscountPercent,
    DiscountedPrice,
    CarViews,
    CarLikes,
    CarComments,
    CarRank,
    SoldAt,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
