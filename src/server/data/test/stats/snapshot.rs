use super::*;

/// Tests that the snapshot reflects the latest counter values.
///
/// Expected: Some(TargetSnapshot::Car) with likes 4
#[tokio::test]
async fn reads_current_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let car = factory::car::CarFactory::new(db, agent.id)
        .likes(3)
        .build()
        .await?;

    let repo = StatsRepository::new(db);
    repo.apply(
        StatisticModifier::new(TargetKind::Car, car.id, Counter::Likes, 1),
        CounterPolicy::FloorAtZero,
    )
    .await?;

    let snapshot = repo.snapshot(TargetKind::Car, car.id).await?.unwrap();

    assert_eq!(snapshot.kind(), TargetKind::Car);
    assert_eq!(snapshot.counter(Counter::Likes), Some(4));
    assert!(matches!(snapshot, TargetSnapshot::Car(c) if c.id == car.id));

    Ok(())
}

/// Tests that a missing target has no snapshot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let snapshot = StatsRepository::new(db)
        .snapshot(TargetKind::Member, 42)
        .await?;

    assert!(snapshot.is_none());

    Ok(())
}
