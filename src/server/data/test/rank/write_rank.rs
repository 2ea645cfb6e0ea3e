use super::*;

/// Tests that unranked inputs are read with their counters.
///
/// Expected: one car input with likes 3 and views 10
#[tokio::test]
async fn reads_unranked_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let car = factory::car::CarFactory::new(db, agent.id)
        .likes(3)
        .views(10)
        .build()
        .await?;
    factory::car::CarFactory::new(db, agent.id)
        .rank(4)
        .build()
        .await?;

    let inputs = RankRepository::new(db).unranked_cars().await?;

    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].id, car.id);
    assert_eq!(inputs[0].likes, 3);
    assert_eq!(inputs[0].views, 10);

    Ok(())
}

/// Tests that a rank is only written while the stored rank is zero.
///
/// Expected: first write succeeds, second write is skipped and keeps the first value
#[tokio::test]
async fn writes_only_unranked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let repo = RankRepository::new(db);

    assert!(repo.write_rank(TargetKind::Car, car.id, 16).await?);
    assert!(!repo.write_rank(TargetKind::Car, car.id, 99).await?);

    let stored = entity::prelude::Car::find_by_id(car.id).one(db).await?.unwrap();
    assert_eq!(stored.car_rank, 16);

    Ok(())
}

/// Tests that writing the rank of a missing target reports no update.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_missing_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let written = RankRepository::new(db)
        .write_rank(TargetKind::Member, 404, 3)
        .await?;

    assert!(!written);

    Ok(())
}
