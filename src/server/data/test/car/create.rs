use super::*;

/// Tests creating a car listing.
///
/// Expected: available car with zeroed counters and a derived discounted price
#[tokio::test]
async fn creates_available_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;

    let car = CarRepository::new(db)
        .create(
            agent.id,
            CreateCarParam {
                brand: "Kia".to_string(),
                model: "K5".to_string(),
                year: 2022,
                price: 27_000,
                discount_percent: 10,
            },
        )
        .await?;

    assert_eq!(car.owner_id, agent.id);
    assert_eq!(car.status, CarStatus::Available);
    assert_eq!(car.brand, "Kia");
    assert_eq!((car.views, car.likes, car.comments, car.rank), (0, 0, 0, 0));
    assert!(car.sold_at.is_none());
    assert_eq!(car.discount_percent, 10);
    assert_eq!(car.discounted_price, 24_300);

    Ok(())
}
