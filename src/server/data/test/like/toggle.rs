use super::*;

/// Tests that toggling twice adds then removes the like.
///
/// Expected: +1 then -1, with no like record left behind
#[tokio::test]
async fn toggles_on_then_off() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let member = factory::create_member(db).await?;

    let repo = LikeRepository::new(db);
    let first = repo.toggle(member.id, TargetKind::Car, car.id).await?;
    let second = repo.toggle(member.id, TargetKind::Car, car.id).await?;

    assert_eq!(first, 1);
    assert_eq!(second, -1);
    assert_eq!(first + second, 0);
    assert_eq!(entity::prelude::Like::find().count(db).await?, 0);

    Ok(())
}

/// Tests that likes on different target kinds with the same id do not collide.
///
/// Integer ids are per table, so car 1 and article 1 are distinct targets.
///
/// Expected: both toggles add a like
#[tokio::test]
async fn keeps_target_kinds_apart() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = LikeRepository::new(db);
    let car_like = repo.toggle(member.id, TargetKind::Car, 1).await?;
    let article_like = repo.toggle(member.id, TargetKind::Article, 1).await?;

    assert_eq!(car_like, 1);
    assert_eq!(article_like, 1);
    assert_eq!(entity::prelude::Like::find().count(db).await?, 2);

    Ok(())
}

/// Tests that the unique index rejects a second like record for the same key.
///
/// Simulates the losing side of a concurrent toggle by inserting the row directly.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_like_record() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_engagement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let member = factory::create_member(db).await?;

    LikeRepository::new(db)
        .toggle(member.id, TargetKind::Car, car.id)
        .await?;

    let now = chrono::Utc::now();
    let result = entity::like::ActiveModel {
        like_group: ActiveValue::Set(TargetKind::Car.group()),
        target_id: ActiveValue::Set(car.id),
        member_id: ActiveValue::Set(member.id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
