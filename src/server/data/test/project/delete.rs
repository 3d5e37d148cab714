use super::*;

/// Tests delete marks the row instead of removing it.
///
/// Expected: Ok(true), row still present with deleted_at set
#[tokio::test]
async fn soft_deletes_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);

    assert!(repo.delete(project.id).await?);

    let row = entity::prelude::Project::find_by_id(project.id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.deleted_at.is_some());
    assert!(repo.find_by_id(project.id).await?.is_none());

    Ok(())
}

/// Tests deleting twice or deleting an unknown ID.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_nothing_to_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    repo.delete(project.id).await?;

    assert!(!repo.delete(project.id).await?);
    assert!(!repo.delete(999).await?);

    Ok(())
}
