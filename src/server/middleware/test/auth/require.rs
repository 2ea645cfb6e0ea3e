use super::*;

/// Tests an active member passes without permissions.
///
/// Expected: Ok(Member) matching the bearer id
#[tokio::test]
async fn returns_active_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let headers = bearer(member.id);

    let resolved = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
        .require(&[])
        .await?;

    assert_eq!(resolved.id, member.id);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingCredential)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredential))
    ));

    Ok(())
}

/// Tests a token that is not a member id.
///
/// Expected: Err(AuthError::InvalidCredential)
#[tokio::test]
async fn fails_for_malformed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer not-a-number"));

    let result = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredential))
    ));

    Ok(())
}

/// Tests a well-formed token for a member that does not exist.
///
/// Expected: Err(AuthError::MemberNotFound)
#[tokio::test]
async fn fails_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = bearer(999);
    let result = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MemberNotFound(999)))
    ));

    Ok(())
}

/// Tests blocked members are rejected before permissions are checked.
///
/// Expected: Err(AuthError::MemberInactive)
#[tokio::test]
async fn fails_for_blocked_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .member_status(MemberStatus::Block)
        .build()
        .await?;
    let headers = bearer(member.id);

    let result = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MemberInactive(id))) if id == member.id
    ));

    Ok(())
}

/// Tests the admin permission against a regular member and an admin.
///
/// Expected: Err(AuthError::AccessDenied) for the user, Ok for the admin
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_member(db).await?;
    let admin = factory::member::MemberFactory::new(db)
        .member_type(MemberType::Admin)
        .build()
        .await?;

    let user_headers = bearer(user.id);
    let denied = AuthGuard::new(db, &GatewayTokenAuthenticator, &user_headers)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let admin_headers = bearer(admin.id);
    let granted = AuthGuard::new(db, &GatewayTokenAuthenticator, &admin_headers)
        .require(&[Permission::Admin])
        .await?;
    assert_eq!(granted.id, admin.id);

    Ok(())
}

/// Tests the agent permission admits agents and admins only.
///
/// Expected: Ok for agent and admin, Err(AuthError::AccessDenied) for a user
#[tokio::test]
async fn agent_permission_admits_agents_and_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_member(db).await?;
    let agent = factory::create_agent(db).await?;
    let admin = factory::member::MemberFactory::new(db)
        .member_type(MemberType::Admin)
        .build()
        .await?;

    for allowed in [agent.id, admin.id] {
        let headers = bearer(allowed);
        let result = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
            .require(&[Permission::Agent])
            .await;
        assert!(result.is_ok());
    }

    let headers = bearer(user.id);
    let result = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
        .require(&[Permission::Agent])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
