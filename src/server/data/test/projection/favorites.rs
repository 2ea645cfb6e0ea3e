use super::*;

/// Tests that a member without likes gets an empty page.
///
/// Expected: empty list with total 0
#[tokio::test]
async fn returns_empty_without_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let (list, total) = ProjectionRepository::new(db)
        .cars(
            EngagementSource::Like,
            member.id,
            PageParam::new(1, 10).unwrap(),
        )
        .await?;

    assert!(list.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that only liked targets of the requested kind are returned.
///
/// The member likes one car and one article sharing a numeric id range.
///
/// Expected: the car listing contains only the liked car
#[tokio::test]
async fn filters_by_member_and_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let liked = factory::create_car(db, agent.id).await?;
    let other = factory::create_car(db, agent.id).await?;
    let article = factory::create_article(db, agent.id).await?;
    let member = factory::create_member(db).await?;
    let stranger = factory::create_member(db).await?;

    let likes = LikeRepository::new(db);
    likes.toggle(member.id, TargetKind::Car, liked.id).await?;
    likes.toggle(member.id, TargetKind::Article, article.id).await?;
    likes.toggle(stranger.id, TargetKind::Car, other.id).await?;

    let (list, total) = ProjectionRepository::new(db)
        .cars(
            EngagementSource::Like,
            member.id,
            PageParam::new(1, 10).unwrap(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, liked.id);

    Ok(())
}

/// Tests that unliking removes the target from favorites.
///
/// Expected: empty list after the second toggle
#[tokio::test]
async fn drops_unliked_targets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;
    let member = factory::create_member(db).await?;

    let likes = LikeRepository::new(db);
    likes.toggle(member.id, TargetKind::Article, article.id).await?;
    likes.toggle(member.id, TargetKind::Article, article.id).await?;

    let (list, total) = ProjectionRepository::new(db)
        .articles(
            EngagementSource::Like,
            member.id,
            PageParam::new(1, 10).unwrap(),
        )
        .await?;

    assert!(list.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that pages split the results while the total covers all of them.
///
/// Expected: 2 items on page 1, 1 item on page 2, total 3 on both
#[tokio::test]
async fn paginates_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let member = factory::create_member(db).await?;
    let likes = LikeRepository::new(db);
    for _ in 0..3 {
        let car = factory::create_car(db, agent.id).await?;
        likes.toggle(member.id, TargetKind::Car, car.id).await?;
    }

    let repo = ProjectionRepository::new(db);
    let (first, first_total) = repo
        .cars(EngagementSource::Like, member.id, PageParam::new(1, 2).unwrap())
        .await?;
    let (second, second_total) = repo
        .cars(EngagementSource::Like, member.id, PageParam::new(2, 2).unwrap())
        .await?;

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert_eq!(first_total, 3);
    assert_eq!(second_total, 3);
    assert!(first.iter().all(|car| car.id != second[0].id));

    Ok(())
}

/// Tests the tie-break for likes sharing one `updated_at`.
///
/// Cars are liked in reverse creation order, so like id order differs from car id order.
///
/// Expected: page 1 holds the first two likes by id, page 2 the last two
#[tokio::test]
async fn breaks_timestamp_ties_by_like_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let member = factory::create_member(db).await?;
    let mut cars = Vec::new();
    for _ in 0..4 {
        cars.push(factory::create_car(db, agent.id).await?);
    }

    let stamp = Utc::now();
    for car in cars.iter().rev() {
        entity::like::ActiveModel {
            like_group: ActiveValue::Set(TargetKind::Car.group()),
            target_id: ActiveValue::Set(car.id),
            member_id: ActiveValue::Set(member.id),
            created_at: ActiveValue::Set(stamp),
            updated_at: ActiveValue::Set(stamp),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    let repo = ProjectionRepository::new(db);
    let (first, _) = repo
        .cars(EngagementSource::Like, member.id, PageParam::new(1, 2).unwrap())
        .await?;
    let (second, _) = repo
        .cars(EngagementSource::Like, member.id, PageParam::new(2, 2).unwrap())
        .await?;

    let ids = |list: &[entity::car::Model]| list.iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids(&first), vec![cars[3].id, cars[2].id]);
    assert_eq!(ids(&second), vec![cars[1].id, cars[0].id]);

    Ok(())
}
