use super::*;

/// Tests unsubscribing.
///
/// Expected: true on the first delete, false once nothing is left
#[tokio::test]
async fn deletes_existing_follow_once() -> Result<(), DbErr> {
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

    assert!(repo.delete(follower.id, agent.id).await?);
    assert!(!repo.delete(follower.id, agent.id).await?);
    assert!(!repo.exists(follower.id, agent.id).await?);

    Ok(())
}
