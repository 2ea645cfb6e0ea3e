use super::*;

/// Tests deleting a car already marked unavailable.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_unavailable_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let removed = factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Unavailable)
        .build()
        .await?;

    let repo = CarRepository::new(db);

    assert!(repo.delete_unavailable(removed.id).await?);
    assert!(repo.find_by_id(removed.id).await?.is_none());

    Ok(())
}

/// Tests that listed cars cannot be deleted outright.
///
/// Expected: Ok(false) and the car is kept
#[tokio::test]
async fn keeps_listed_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let repo = CarRepository::new(db);

    assert!(!repo.delete_unavailable(car.id).await?);
    assert!(repo.find_by_id(car.id).await?.is_some());

    Ok(())
}
