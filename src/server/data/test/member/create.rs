use super::*;

/// Tests registering a member.
///
/// Expected: active member with zeroed counters
#[tokio::test]
async fn creates_active_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = MemberRepository::new(db)
        .create(CreateMemberParam {
            nick: "dealer_kim".to_string(),
            member_type: MemberType::Agent,
            full_name: Some("Kim".to_string()),
        })
        .await?;

    assert_eq!(member.nick, "dealer_kim");
    assert_eq!(member.status, MemberStatus::Active);
    assert_eq!(member.rank, 0);
    assert!(member.is_active());

    Ok(())
}

/// Tests that nicknames are unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_nick() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let param = || CreateMemberParam {
        nick: "twin".to_string(),
        member_type: MemberType::User,
        full_name: None,
    };
    repo.create(param()).await?;

    let err = repo.create(param()).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests loading several members at once.
///
/// Expected: known ids present, unknown id absent
#[tokio::test]
async fn finds_members_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_target_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_member(db).await?;
    let b = factory::create_agent(db).await?;

    let members = MemberRepository::new(db)
        .find_by_ids(vec![a.id, b.id, 999])
        .await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[&b.id].member_type, MemberType::Agent);
    assert!(!members.contains_key(&999));

    Ok(())
}
