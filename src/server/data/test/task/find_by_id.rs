use super::*;

/// Tests the project and assignee are attached.
///
/// Expected: Ok(Some) with both relations
#[tokio::test]
async fn attaches_project_and_assignee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let user = factory::create_user(db).await?;
    let task = factory::task::TaskFactory::new(db, project.id)
        .assigned_to(Some(user.id))
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let result = repo.find_by_id(task.id).await?.unwrap();

    assert_eq!(result.task.id, task.id);
    assert_eq!(result.project.map(|p| p.id), Some(project.id));
    assert_eq!(result.assignee.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests a task without an assignee.
///
/// Expected: Ok(Some) with no assignee
#[tokio::test]
async fn leaves_assignee_empty_when_unassigned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, task) = factory::helpers::create_task_with_project(db).await?;

    let repo = TaskRepository::new(db);
    let result = repo.find_by_id(task.id).await?.unwrap();

    assert!(result.assignee.is_none());
    assert!(result.project.is_some());

    Ok(())
}
