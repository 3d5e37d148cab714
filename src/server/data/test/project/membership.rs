use super::*;

/// Tests adding the same member twice keeps a single join row.
///
/// Expected: Ok with one membership
#[tokio::test]
async fn add_user_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    repo.add_user(project.id, user.id).await?;
    repo.add_user(project.id, user.id).await?;

    let rows = entity::prelude::ProjectUser::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].project_id, project.id);
    assert_eq!(rows[0].user_id, user.id);

    Ok(())
}

/// Tests removing a member deletes the join row only.
///
/// Expected: Ok(true) then Ok(false) on a second removal
#[tokio::test]
async fn remove_user_deletes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let user = factory::create_user(db).await?;
    factory::helpers::add_project_member(db, project.id, user.id).await?;

    let repo = ProjectRepository::new(db);

    assert!(repo.remove_user(project.id, user.id).await?);
    assert!(!repo.remove_user(project.id, user.id).await?);
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests two adds of the same member racing on one connection pool.
///
/// Expected: Ok for both and a single join row
#[tokio::test]
async fn concurrent_adds_of_same_user_both_succeed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let user = factory::create_user(db).await?;

    let repo = ProjectRepository::new(db);
    let (first, second) = tokio::join!(
        repo.add_user(project.id, user.id),
        repo.add_user(project.id, user.id)
    );
    first?;
    second?;

    assert_eq!(entity::prelude::ProjectUser::find().count(db).await?, 1);

    Ok(())
}
