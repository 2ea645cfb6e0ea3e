use super::*;

/// Tests that the presence flag follows the toggle state.
///
/// Expected: false, true after liking, false after unliking
#[tokio::test]
async fn reflects_current_toggle_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;
    let member = factory::create_member(db).await?;

    let repo = LikeRepository::new(db);
    assert!(!repo.exists(member.id, TargetKind::Article, article.id).await?);

    repo.toggle(member.id, TargetKind::Article, article.id).await?;
    assert!(repo.exists(member.id, TargetKind::Article, article.id).await?);

    repo.toggle(member.id, TargetKind::Article, article.id).await?;
    assert!(!repo.exists(member.id, TargetKind::Article, article.id).await?);

    Ok(())
}

/// Tests that another member's like is not reported as the caller's.
///
/// Expected: false for the member who did not like
#[tokio::test]
async fn ignores_other_members_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let liker = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;

    let repo = LikeRepository::new(db);
    repo.toggle(liker.id, TargetKind::Car, car.id).await?;

    assert!(!repo.exists(other.id, TargetKind::Car, car.id).await?);

    Ok(())
}
