use super::*;

/// Tests the optional project filter applies to the count too.
///
/// Expected: Ok with only the filtered project's tasks counted
#[tokio::test]
async fn filters_by_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_project(db).await?;
    let second = factory::create_project(db).await?;
    factory::create_task(db, first.id).await?;
    factory::create_task(db, first.id).await?;
    factory::create_task(db, second.id).await?;

    let repo = TaskRepository::new(db);

    let (tasks, total) = repo
        .get_paginated(PageRequest::default(), Some(first.id))
        .await?;
    assert_eq!(total, 2);
    assert!(tasks.iter().all(|t| t.project_id == first.id));

    let (tasks, total) = repo.get_paginated(PageRequest::default(), None).await?;
    assert_eq!(total, 3);
    assert_eq!(tasks.len(), 3);

    Ok(())
}
