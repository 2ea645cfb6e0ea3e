use super::*;

/// Tests listing comments of one target, oldest first.
///
/// Expected: both car comments in creation order, the article comment excluded
#[tokio::test]
async fn lists_comments_of_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let member = factory::create_member(db).await?;

    let repo = CommentRepository::new(db);
    let first = repo
        .create(member.id, comment_on(TargetKind::Car, car.id, "Still for sale?"))
        .await?;
    let second = repo
        .create(member.id, comment_on(TargetKind::Car, car.id, "Mileage?"))
        .await?;
    repo.create(member.id, comment_on(TargetKind::Article, car.id, "Nice read"))
        .await?;

    let page = repo
        .find_by_target(TargetKind::Car, car.id, PageParam::new(1, 10).unwrap())
        .await?;

    assert_eq!(page.total, 2);
    let ids: Vec<i32> = page.list.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
