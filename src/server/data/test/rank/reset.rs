use super::*;

/// Tests that the target rollback only touches listed cars and active articles.
///
/// Expected: available car and active article reset, sold car and deleted article keep rank
#[tokio::test]
async fn resets_active_targets_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let available = factory::car::CarFactory::new(db, agent.id)
        .rank(7)
        .build()
        .await?;
    let sold = factory::car::CarFactory::new(db, agent.id)
        .status(CarStatus::Sold)
        .rank(7)
        .build()
        .await?;
    let active = factory::board_article::ArticleFactory::new(db, agent.id)
        .rank(5)
        .build()
        .await?;
    let deleted = factory::board_article::ArticleFactory::new(db, agent.id)
        .status(ArticleStatus::Delete)
        .rank(5)
        .build()
        .await?;

    let reset = RankRepository::new(db).reset_targets().await?;

    assert_eq!(reset, 2);
    let car_rank = |id: i32| async move {
        entity::prelude::Car::find_by_id(id)
            .one(db)
            .await
            .map(|car| car.map(|c| c.car_rank))
    };
    assert_eq!(car_rank(available.id).await?, Some(0));
    assert_eq!(car_rank(sold.id).await?, Some(7));

    let article_rank = |id: i32| async move {
        entity::prelude::BoardArticle::find_by_id(id)
            .one(db)
            .await
            .map(|article| article.map(|a| a.article_rank))
    };
    assert_eq!(article_rank(active.id).await?, Some(0));
    assert_eq!(article_rank(deleted.id).await?, Some(5));

    Ok(())
}

/// Tests that the actor rollback only touches active agents.
///
/// Expected: active agent reset, blocked agent and regular user keep rank
#[tokio::test]
async fn resets_active_agents_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::member::MemberFactory::new(db)
        .member_type(MemberType::Agent)
        .rank(9)
        .build()
        .await?;
    let blocked = factory::member::MemberFactory::new(db)
        .member_type(MemberType::Agent)
        .member_status(MemberStatus::Block)
        .rank(9)
        .build()
        .await?;
    let user = factory::member::MemberFactory::new(db)
        .rank(9)
        .build()
        .await?;

    let reset = RankRepository::new(db).reset_actors().await?;

    assert_eq!(reset, 1);
    for (id, expected) in [(agent.id, 0), (blocked.id, 9), (user.id, 9)] {
        let member = entity::prelude::Member::find_by_id(id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(member.member_rank, expected);
    }

    Ok(())
}
