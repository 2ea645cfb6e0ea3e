use super::*;

/// Tests that top agents are ordered by rank and exclude non-agents and blocked agents.
///
/// Expected: agents with rank 30 then 10, total 2
#[tokio::test]
async fn orders_active_agents_by_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let low = factory::member::MemberFactory::new(db)
        .member_type(MemberType::Agent)
        .rank(10)
        .build()
        .await?;
    let high = factory::member::MemberFactory::new(db)
        .member_type(MemberType::Agent)
        .rank(30)
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .member_type(MemberType::Agent)
        .member_status(MemberStatus::Block)
        .rank(50)
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .rank(99)
        .build()
        .await?;

    let page = MemberRepository::new(db)
        .find_top_agents(PageParam::new(1, 10).unwrap())
        .await?;

    assert_eq!(page.total, 2);
    let ids: Vec<i32> = page.list.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![high.id, low.id]);

    Ok(())
}
