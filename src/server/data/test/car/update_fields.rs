use super::*;

/// Tests that changing only the discount recomputes the discounted price from the
/// stored price.
///
/// Expected: price kept, discounted price 20_000 * 0.85
#[tokio::test]
async fn recomputes_discount_from_stored_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let car = factory::car::CarFactory::new(db, agent.id)
        .price(20_000, 0)
        .build()
        .await?;

    let updated = CarRepository::new(db)
        .update_fields(
            car.id,
            UpdateCarParam {
                discount_percent: Some(15),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 20_000);
    assert_eq!(updated.discount_percent, 15);
    assert_eq!(updated.discounted_price, 17_000);

    Ok(())
}

/// Tests that a new price keeps the stored discount.
///
/// Expected: discounted price follows the new price at the old discount
#[tokio::test]
async fn recomputes_discount_from_new_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let car = factory::car::CarFactory::new(db, agent.id)
        .price(20_000, 10)
        .build()
        .await?;

    let updated = CarRepository::new(db)
        .update_fields(
            car.id,
            UpdateCarParam {
                price: Some(30_000),
                model: Some("Tucson".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.model, "Tucson");
    assert_eq!(updated.discounted_price, 27_000);

    Ok(())
}

/// Tests editing a car that is no longer available.
///
/// Expected: Ok(None), stored price untouched
#[tokio::test]
async fn skips_unavailable_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let sold = factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Sold)
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let updated = repo
        .update_fields(
            sold.id,
            UpdateCarParam {
                price: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());
    assert_eq!(repo.find_by_id(sold.id).await?.map(|c| c.price), Some(sold.car_price));

    Ok(())
}
