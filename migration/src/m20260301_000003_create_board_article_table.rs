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
                    .table(BoardArticle::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardArticle::Id))
                    .col(integer(BoardArticle::MemberId))
                    .col(string(BoardArticle::ArticleCategory))
                    .col(string(BoardArticle::ArticleStatus))
                    .col(string(BoardArticle::ArticleTitle))
                    .col(text(BoardArticle::ArticleContent))
                    .col(integer(BoardArticle::ArticleViews).default(0))
                    .col(integer(BoardArticle::ArticleLikes).default(0))
                    .col(integer(BoardArticle::ArticleComments).default(0))
                    .col(integer(BoardArticle::ArticleRank).default(0))
                    .col(
                        timestamp_with_time_zone(BoardArticle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(BoardArticle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_article_member_id")
                            .from(BoardArticle::Table, BoardArticle::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardArticle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardArticle {
    Table,
    Id,
    MemberId,
    ArticleCategory,
    ArticleStatus,
    ArticleTitle,
    ArticleContent,
    ArticleViews,
    ArticleLikes,
    ArticleComments,
    ArticleRank,
    CreatedAt,
    UpdatedAt,
}
