use super::*;

/// Tests removing a comment.
///
/// Expected: true once, then false; the comment disappears from the listing
#[tokio::test]
async fn deletes_active_comment_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;
    let member = factory::create_member(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(member.id, comment_on(TargetKind::Article, article.id, "Agreed"))
        .await?;

    assert!(repo.mark_deleted(comment.id).await?);
    assert!(!repo.mark_deleted(comment.id).await?);
    assert!(repo.find_active(comment.id).await?.is_none());

    let page = repo
        .find_by_target(TargetKind::Article, article.id, PageParam::new(1, 10).unwrap())
        .await?;
    assert_eq!(page.total, 0);

    Ok(())
}
