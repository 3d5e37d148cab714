use super::*;

/// Tests the page window and total count.
///
/// Expected: Ok with the second page holding the remaining rows
#[tokio::test]
async fn returns_requested_page_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_project(db).await?.id);
    }

    let repo = ProjectRepository::new(db);
    let (projects, total) = repo.get_paginated(PageRequest::new(2, 2)).await?;

    assert_eq!(total, 5);
    assert_eq!(
        projects.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![ids[2], ids[3]]
    );

    Ok(())
}

/// Tests soft-deleted rows are excluded from both the page and the count.
///
/// Expected: Ok with total counting live projects only
#[tokio::test]
async fn excludes_soft_deleted_from_page_and_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::create_project(db).await?;
    factory::project::ProjectFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let (projects, total) = repo.get_paginated(PageRequest::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, live.id);

    Ok(())
}

/// Tests a page past the end is empty but still reports the total.
///
/// Expected: Ok with no items
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    let (projects, total) = repo.get_paginated(PageRequest::new(3, 10)).await?;

    assert!(projects.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
