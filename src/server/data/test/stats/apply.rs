use super::*;

/// Tests that a positive delta is added in place.
///
/// Expected: car likes go from 0 to 1
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let applied = StatsRepository::new(db)
        .apply(
            StatisticModifier::new(TargetKind::Car, car.id, Counter::Likes, 1),
            CounterPolicy::FloorAtZero,
        )
        .await?;

    assert!(applied);
    let stored = entity::prelude::Car::find_by_id(car.id).one(db).await?.unwrap();
    assert_eq!(stored.car_likes, 1);

    Ok(())
}

/// Tests that deltas applied one after another accumulate.
///
/// Expected: three +1 and one -1 leave views at 2
#[tokio::test]
async fn accumulates_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, article) = factory::helpers::create_article_with_author(db).await?;
    let repo = StatsRepository::new(db);

    for delta in [1, 1, -1, 1] {
        repo.apply(
            StatisticModifier::new(TargetKind::Article, article.id, Counter::Views, delta),
            CounterPolicy::FloorAtZero,
        )
        .await?;
    }

    let stored = entity::prelude::BoardArticle::find_by_id(article.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.article_views, 2);

    Ok(())
}

/// Tests that the floor policy clamps a decrement on a zero counter.
///
/// Expected: likes stay at 0
#[tokio::test]
async fn floors_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let applied = StatsRepository::new(db)
        .apply(
            StatisticModifier::new(TargetKind::Car, car.id, Counter::Likes, -1),
            CounterPolicy::FloorAtZero,
        )
        .await?;

    assert!(applied);
    let stored = entity::prelude::Car::find_by_id(car.id).one(db).await?.unwrap();
    assert_eq!(stored.car_likes, 0);

    Ok(())
}

/// Tests that the permissive policy stores the negative result.
///
/// Expected: likes become -1
#[tokio::test]
async fn allows_negative_when_configured() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    StatsRepository::new(db)
        .apply(
            StatisticModifier::new(TargetKind::Car, car.id, Counter::Likes, -1),
            CounterPolicy::AllowNegative,
        )
        .await?;

    let stored = entity::prelude::Car::find_by_id(car.id).one(db).await?.unwrap();
    assert_eq!(stored.car_likes, -1);

    Ok(())
}

/// Tests that member-only counters update the member table.
///
/// Expected: followers of the member go to 1
#[tokio::test]
async fn updates_member_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    StatsRepository::new(db)
        .apply(
            StatisticModifier::new(TargetKind::Member, member.id, Counter::Followers, 1),
            CounterPolicy::FloorAtZero,
        )
        .await?;

    let stored = entity::prelude::Member::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.member_followers, 1);

    Ok(())
}

/// Tests that a missing target is reported rather than silently ignored.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let applied = StatsRepository::new(db)
        .apply(
            StatisticModifier::new(TargetKind::Car, 999, Counter::Views, 1),
            CounterPolicy::FloorAtZero,
        )
        .await?;

    assert!(!applied);

    Ok(())
}

/// Tests that a counter without a column on the target table is rejected.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_untracked_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let result = StatsRepository::new(db)
        .apply(
            StatisticModifier::new(TargetKind::Car, car.id, Counter::Followers, 1),
            CounterPolicy::FloorAtZero,
        )
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
