use super::*;

/// Tests that an owner's listing skips removed cars and other owners' cars.
///
/// Expected: available and sold cars of the owner, newest first
#[tokio::test]
async fn lists_own_cars_without_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let other = factory::create_agent(db).await?;
    let available = factory::create_car(db, agent.id).await?;
    let sold = factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Sold)
        .build()
        .await?;
    factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Unavailable)
        .build()
        .await?;
    factory::create_car(db, other.id).await?;

    let page = CarRepository::new(db)
        .find_by_owner(agent.id, None, PageParam::new(1, 10).unwrap())
        .await?;

    assert_eq!(page.total, 2);
    let ids: Vec<i32> = page.list.iter().map(|car| car.id).collect();
    assert!(ids.contains(&available.id));
    assert!(ids.contains(&sold.id));

    Ok(())
}

/// Tests narrowing an owner's listing to one status.
///
/// Expected: only the sold car
#[tokio::test]
async fn filters_own_cars_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    factory::create_car(db, agent.id).await?;
    let sold = factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Sold)
        .build()
        .await?;

    let page = CarRepository::new(db)
        .find_by_owner(
            agent.id,
            Some(CarStatus::Sold),
            PageParam::new(1, 10).unwrap(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].id, sold.id);

    Ok(())
}

/// Tests that the moderation listing includes every status.
///
/// Expected: all three cars without a filter, one with the Unavailable filter
#[tokio::test]
async fn find_all_includes_removed_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    factory::create_car(db, agent.id).await?;
    factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Sold)
        .build()
        .await?;
    let removed = factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Unavailable)
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let all = repo.find_all(None, PageParam::new(1, 10).unwrap()).await?;
    let unavailable = repo
        .find_all(Some(CarStatus::Unavailable), PageParam::new(1, 10).unwrap())
        .await?;

    assert_eq!(all.total, 3);
    assert_eq!(unavailable.total, 1);
    assert_eq!(unavailable.list[0].id, removed.id);

    Ok(())
}
