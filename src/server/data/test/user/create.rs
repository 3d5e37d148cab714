use super::*;

/// Tests creating a user together with project memberships.
///
/// Expected: Ok with the user and one join row per project
#[tokio::test]
async fn creates_user_with_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_project(db).await?;
    let second = factory::create_project(db).await?;

    let repo = UserRepository::new(db);
    let created = repo
        .create(params("ada", vec![first.id, second.id]))
        .await?;

    assert_eq!(created.user.username, "ada");
    assert_eq!(created.project_ids, vec![first.id, second.id]);
    assert_eq!(entity::prelude::ProjectUser::find().count(db).await?, 2);

    Ok(())
}

/// Tests a failing membership insert rolls back the user as well.
///
/// The second project does not exist, so its foreign key fails after the user
/// row was already inserted in the same transaction.
///
/// Expected: Err with no user and no membership persisted
#[tokio::test]
async fn rolls_back_user_when_membership_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.create(params("grace", vec![project.id, 9999])).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ProjectUser::find().count(db).await?, 0);

    Ok(())
}

/// Tests the unique constraint on username.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("linus", vec![])).await?;

    let mut duplicate = params("linus", vec![]);
    duplicate.email = "other@example.com".to_string();

    assert!(repo.create(duplicate).await.is_err());

    Ok(())
}
