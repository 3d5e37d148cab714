use super::*;

/// Tests creating a task in an existing project.
///
/// Expected: Ok with project and assignee ids stored
#[tokio::test]
async fn creates_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let user = factory::create_user(db).await?;

    let repo = TaskRepository::new(db);
    let mut create = params("Design schema", project.id);
    create.assigned_to = Some(user.id);
    let task = repo.create(create).await?;

    assert_eq!(task.title, "Design schema");
    assert_eq!(task.project_id, project.id);
    assert_eq!(task.assigned_to, Some(user.id));

    Ok(())
}

/// Tests the foreign key on project_id.
///
/// Expected: Err for a project that does not exist
#[tokio::test]
async fn fails_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);

    assert!(repo.create(params("Orphan", 12345)).await.is_err());

    Ok(())
}
