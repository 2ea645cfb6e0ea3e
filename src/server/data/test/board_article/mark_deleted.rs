use super::*;

/// Tests deleting an article only once.
///
/// Expected: true on the first call, false on the second
#[tokio::test]
async fn deletes_active_article_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let article = factory::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.mark_deleted(article.id).await?);
    assert!(!repo.mark_deleted(article.id).await?);

    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.status, ArticleStatus::Delete);

    Ok(())
}
