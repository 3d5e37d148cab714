use super::*;

/// Tests soft-deleting a task.
///
/// Expected: Ok(true), then not found; Ok(false) for unknown ids
#[tokio::test]
async fn soft_deletes_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, task) = factory::helpers::create_task_with_project(db).await?;

    let repo = TaskRepository::new(db);

    assert!(repo.delete(task.id).await?);
    assert!(repo.find_by_id(task.id).await?.is_none());
    assert!(!repo.exists(task.id).await?);
    assert!(!repo.delete(777).await?);

    Ok(())
}
