use super::*;

/// Tests memberships of soft-deleted projects are not reported.
///
/// Expected: Ok(Some) listing only the live project
#[tokio::test]
async fn lists_only_live_project_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let live = factory::create_project(db).await?;
    let deleted = factory::project::ProjectFactory::new(db)
        .deleted(true)
        .build()
        .await?;
    factory::helpers::add_project_member(db, live.id, user.id).await?;
    factory::helpers::add_project_member(db, deleted.id, user.id).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(user.id).await?.unwrap();

    assert_eq!(result.user.id, user.id);
    assert_eq!(result.project_ids, vec![live.id]);

    Ok(())
}

/// Tests a soft-deleted user is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(!repo.exists(user.id).await?);

    Ok(())
}
