use super::*;

/// Tests subscribing one member to another.
///
/// Expected: follow record created and reported by exists, not in reverse
#[tokio::test]
async fn creates_follow() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_member(db).await?;
    let agent = factory::create_agent(db).await?;

    let repo = FollowRepository::new(db);
    let follow = repo.create(follower.id, agent.id).await?;

    assert_eq!(follow.follower_id, follower.id);
    assert_eq!(follow.following_id, agent.id);
    assert!(repo.exists(follower.id, agent.id).await?);
    assert!(!repo.exists(agent.id, follower.id).await?);

    Ok(())
}

/// Tests that the same pair cannot be followed twice.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_follow() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_member(db).await?;
    let agent = factory::create_agent(db).await?;

    let repo = FollowRepository::new(db);
    repo.create(follower.id, agent.id).await?;
    let err = repo.create(follower.id, agent.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
