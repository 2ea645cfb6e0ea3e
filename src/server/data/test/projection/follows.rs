use super::*;

/// Tests that followers and followings are resolved from the follow records.
///
/// `a` and `b` both follow `c`; `c` follows `a`.
///
/// Expected: c has followers a and b, a follows only c
#[tokio::test]
async fn lists_followers_and_followings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_member(db).await?;
    let b = factory::create_member(db).await?;
    let c = factory::create_agent(db).await?;

    let follows = FollowRepository::new(db);
    follows.create(a.id, c.id).await?;
    follows.create(b.id, c.id).await?;
    follows.create(c.id, a.id).await?;

    let repo = ProjectionRepository::new(db);
    let page = PageParam::new(1, 10).unwrap();

    let (followers, followers_total) = repo.followers(c.id, page).await?;
    let mut follower_ids: Vec<i32> = followers.iter().map(|m| m.id).collect();
    follower_ids.sort();
    assert_eq!(followers_total, 2);
    assert_eq!(follower_ids, vec![a.id, b.id]);

    let (followings, followings_total) = repo.followings(a.id, page).await?;
    assert_eq!(followings_total, 1);
    assert_eq!(followings[0].id, c.id);

    Ok(())
}

/// Tests that a member nobody follows has no followers.
///
/// Expected: empty list with total 0
#[tokio::test]
async fn returns_empty_without_followers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let (list, total) = ProjectionRepository::new(db)
        .followers(member.id, PageParam::new(1, 10).unwrap())
        .await?;

    assert!(list.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
