use super::*;

fn list_param(sort: CarSort, direction: Direction) -> ListCarsParam {
    ListCarsParam {
        page: PageParam::new(1, 10).unwrap(),
        sort,
        direction,
        brand: None,
    }
}

/// Tests that only available cars are listed.
///
/// Expected: sold and unavailable cars are excluded from list and total
#[tokio::test]
async fn excludes_unlisted_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let available = factory::create_car(db, agent.id).await?;
    factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Sold)
        .build()
        .await?;
    factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Unavailable)
        .build()
        .await?;

    let page = CarRepository::new(db)
        .find_available(&list_param(CarSort::CreatedAt, Direction::Desc))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].id, available.id);

    Ok(())
}

/// Tests that `Asc` sorts ascending and `Desc` descending.
///
/// Expected: likes 1, 5, 9 ascending and 9, 5, 1 descending
#[tokio::test]
async fn sorts_by_requested_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    for likes in [5, 1, 9] {
        factory::car::CarFactory::new(db, agent.id)
            .likes(likes)
            .build()
            .await?;
    }

    let repo = CarRepository::new(db);
    let asc = repo
        .find_available(&list_param(CarSort::Likes, Direction::Asc))
        .await?;
    let desc = repo
        .find_available(&list_param(CarSort::Likes, Direction::Desc))
        .await?;

    let likes = |cars: &[crate::server::model::car::Car]| -> Vec<i32> {
        cars.iter().map(|car| car.likes).collect()
    };
    assert_eq!(likes(&asc.list), vec![1, 5, 9]);
    assert_eq!(likes(&desc.list), vec![9, 5, 1]);

    Ok(())
}

/// Tests the optional brand filter.
///
/// Expected: only the matching brand is returned
#[tokio::test]
async fn filters_by_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let hyundai = factory::car::CarFactory::new(db, agent.id)
        .brand("Hyundai")
        .build()
        .await?;
    factory::car::CarFactory::new(db, agent.id)
        .brand("Genesis")
        .build()
        .await?;

    let mut param = list_param(CarSort::CreatedAt, Direction::Desc);
    param.brand = Some("Hyundai".to_string());
    let page = CarRepository::new(db).find_available(&param).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].id, hyundai.id);

    Ok(())
}
