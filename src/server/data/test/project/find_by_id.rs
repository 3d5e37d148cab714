use super::*;

/// Tests fetching a project attaches members, tasks and teams.
///
/// Expected: Ok(Some) with each relation loaded
#[tokio::test]
async fn attaches_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let user = factory::create_user(db).await?;
    factory::helpers::add_project_member(db, project.id, user.id).await?;
    let task = factory::create_task(db, project.id).await?;
    let team = factory::team::TeamFactory::new(db)
        .project_id(Some(project.id))
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let result = repo.find_by_id(project.id).await?.unwrap();

    assert_eq!(result.project.id, project.id);
    assert_eq!(result.users.len(), 1);
    assert_eq!(result.users[0].id, user.id);
    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.tasks[0].id, task.id);
    assert_eq!(result.teams.len(), 1);
    assert_eq!(result.teams[0].id, team.id);

    Ok(())
}

/// Tests soft-deleted relations are left out.
///
/// Expected: Ok(Some) with empty relation lists
#[tokio::test]
async fn skips_soft_deleted_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let user = factory::user::UserFactory::new(db)
        .deleted(true)
        .build()
        .await?;
    factory::helpers::add_project_member(db, project.id, user.id).await?;
    factory::task::TaskFactory::new(db, project.id)
        .deleted(true)
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let result = repo.find_by_id(project.id).await?.unwrap();

    assert!(result.users.is_empty());
    assert!(result.tasks.is_empty());
    assert!(result.teams.is_empty());

    Ok(())
}

/// Tests a soft-deleted project is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_soft_deleted_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::project::ProjectFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = ProjectRepository::new(db);

    assert!(repo.find_by_id(project.id).await?.is_none());
    assert!(!repo.exists(project.id).await?);

    Ok(())
}

/// Tests an unknown ID is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
