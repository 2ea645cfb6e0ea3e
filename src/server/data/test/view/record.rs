use super::*;

/// Tests that only the first view by a member is recorded.
///
/// Expected: true then false, one view record
#[tokio::test]
async fn records_first_view_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;
    let member = factory::create_member(db).await?;

    let repo = ViewRepository::new(db);
    let first = repo.record(member.id, TargetKind::Article, article.id).await?;
    let second = repo.record(member.id, TargetKind::Article, article.id).await?;

    assert!(first);
    assert!(!second);
    assert_eq!(entity::prelude::View::find().count(db).await?, 1);

    Ok(())
}

/// Tests that each member gets their own first view.
///
/// Expected: true for both members
#[tokio::test]
async fn records_first_view_per_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;
    let a = factory::create_member(db).await?;
    let b = factory::create_member(db).await?;

    let repo = ViewRepository::new(db);

    assert!(repo.record(a.id, TargetKind::Article, article.id).await?);
    assert!(repo.record(b.id, TargetKind::Article, article.id).await?);
    assert_eq!(entity::prelude::View::find().count(db).await?, 2);

    Ok(())
}
