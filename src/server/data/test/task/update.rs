use super::*;

/// Tests an update replaces title, project and assignee.
///
/// Expected: Ok(Some) with the new values and the assignee cleared
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let target = factory::create_project(db).await?;
    let user = factory::create_user(db).await?;
    let task = factory::task::TaskFactory::new(db, project.id)
        .assigned_to(Some(user.id))
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let updated = repo
        .update(task.id, params("Moved", target.id))
        .await?
        .unwrap();

    assert_eq!(updated.title, "Moved");
    assert_eq!(updated.project_id, target.id);
    assert!(updated.assigned_to.is_none());

    Ok(())
}

/// Tests updating a soft-deleted task.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_soft_deleted_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let task = factory::task::TaskFactory::new(db, project.id)
        .deleted(true)
        .build()
        .await?;

    let repo = TaskRepository::new(db);

    assert!(repo
        .update(task.id, params("Ghost", project.id))
        .await?
        .is_none());

    Ok(())
}
