use super::*;

/// Tests that a created notification starts unread with a generated title.
///
/// Expected: status Wait, listed for the receiver
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
    let liker = factory::create_member(db).await?;

    let repo = NotificationRepository::new(db);
    let created = repo
        .create(like_notification(liker.id, owner.id, car.id))
        .await?;

    assert_eq!(created.status, NotificationStatus::Wait);
    assert!(!created.title.is_empty());

    let page = repo
        .find_by_receiver(owner.id, PageParam::new(1, 10).unwrap())
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.list[0].id, created.id);

    Ok(())
}

/// Tests marking a single notification read.
///
/// Expected: 1 changed, repeating it changes nothing
#[tokio::test]
async fn marks_one_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
    let liker = factory::create_member(db).await?;

    let repo = NotificationRepository::new(db);
    let first = repo
        .create(like_notification(liker.id, owner.id, car.id))
        .await?;
    repo.create(like_notification(liker.id, owner.id, car.id))
        .await?;

    assert_eq!(repo.mark_read(owner.id, Some(first.id)).await?, 1);
    assert_eq!(repo.mark_read(owner.id, Some(first.id)).await?, 0);

    Ok(())
}

/// Tests marking all notifications read without touching other receivers.
///
/// Expected: both of the owner's notifications changed, the other receiver's stays unread
#[tokio::test]
async fn marks_all_read_for_receiver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;
    let liker = factory::create_member(db).await?;

    let repo = NotificationRepository::new(db);
    repo.create(like_notification(liker.id, owner.id, car.id))
        .await?;
    repo.create(like_notification(liker.id, owner.id, car.id))
        .await?;
    repo.create(like_notification(owner.id, liker.id, car.id))
        .await?;

    assert_eq!(repo.mark_read(owner.id, None).await?, 2);

    let others = repo
        .find_by_receiver(liker.id, PageParam::new(1, 10).unwrap())
        .await?;
    assert_eq!(others.list[0].status, NotificationStatus::Wait);

    Ok(())
}
