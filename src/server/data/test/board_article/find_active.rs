use super::*;

/// Tests deleted articles are left out of the board listing.
///
/// Expected: only the active article, total 1
#[tokio::test]
async fn skips_deleted_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let active = factory::create_article(db, author.id).await?;
    factory::board_article::ArticleFactory::new(db, author.id)
        .status(ArticleStatus::Delete)
        .build()
        .await?;

    let page = ArticleRepository::new(db)
        .find_active(None, PageParam::new(1, 10).unwrap())
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].id, active.id);

    Ok(())
}

/// Tests the category filter.
///
/// Expected: only the NEWS article when filtering by NEWS
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    factory::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    let news = repo
        .create(
            author.id,
            CreateArticleParam {
                category: ArticleCategory::News,
                title: "Price drop".to_string(),
                content: "Sedans are cheaper this month".to_string(),
            },
        )
        .await?;

    let page = repo
        .find_active(Some(ArticleCategory::News), PageParam::new(1, 10).unwrap())
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].id, news.id);
    assert_eq!(page.list[0].category, ArticleCategory::News);

    Ok(())
}
