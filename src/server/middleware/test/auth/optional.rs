use super::*;

/// Expected: Ok(None) for an anonymous request
#[tokio::test]
async fn anonymous_request_is_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let viewer = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
        .optional()
        .await?;

    assert!(viewer.is_none());

    Ok(())
}

/// Expected: Ok(Some(Member)) when a valid bearer is present
#[tokio::test]
async fn resolves_member_when_present() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let headers = bearer(member.id);

    let viewer = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
        .optional()
        .await?;

    assert_eq!(viewer.map(|m| m.id), Some(member.id));

    Ok(())
}

/// A scheme other than Bearer is rejected instead of treated as anonymous.
///
/// Expected: Err(AuthError::InvalidCredential)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Member).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));

    let result = AuthGuard::new(db, &GatewayTokenAuthenticator, &headers)
        .optional()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredential))
    ));

    Ok(())
}
