use super::*;

/// Tests all live tasks of one project are returned.
///
/// Expected: Ok with the live task only
#[tokio::test]
async fn returns_live_tasks_of_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let other = factory::create_project(db).await?;
    let live = factory::create_task(db, project.id).await?;
    factory::task::TaskFactory::new(db, project.id)
        .deleted(true)
        .build()
        .await?;
    factory::create_task(db, other.id).await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_by_project(project.id).await?;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, live.id);

    Ok(())
}
