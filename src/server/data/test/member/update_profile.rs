use super::*;

/// Tests that only provided fields are written.
///
/// Expected: image set, nickname unchanged
#[tokio::test]
async fn writes_given_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let updated = MemberRepository::new(db)
        .update_profile(
            member.id,
            UpdateMemberParam {
                image: Some("avatar.png".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.nick, member.member_nick);
    assert_eq!(updated.image.as_deref(), Some("avatar.png"));

    Ok(())
}

/// Tests that blocked members cannot edit their profile.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_inactive_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let blocked = factory::member::MemberFactory::new(db)
        .member_status(MemberStatus::Block)
        .build()
        .await?;

    let updated = MemberRepository::new(db)
        .update_profile(
            blocked.id,
            UpdateMemberParam {
                nick: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests renaming onto a taken nickname.
///
/// Expected: unique constraint violation
#[tokio::test]
async fn rejects_taken_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;

    let err = MemberRepository::new(db)
        .update_profile(
            second.id,
            UpdateMemberParam {
                nick: Some(first.member_nick),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
