use super::*;

/// Tests an update replaces every field.
///
/// Expected: Ok(Some) with new values, cleared dates and a bumped updated_at
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    let mut update = params("Renamed");
    update.status = "done".to_string();
    let project = repo.update(existing.id, update).await?.unwrap();

    assert_eq!(project.name, "Renamed");
    assert_eq!(project.status, "done");
    assert_eq!(project.description, "A project");
    assert!(project.start_date.is_none());
    assert!(project.updated_at >= existing.updated_at);

    Ok(())
}

/// Tests updating a missing project.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    assert!(repo.update(42, params("Nothing")).await?.is_none());

    Ok(())
}
