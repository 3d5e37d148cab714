use super::*;

/// Tests creating a project.
///
/// Expected: Ok with the row persisted and timestamps set
#[tokio::test]
async fn creates_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let project = repo.create(params("Apollo")).await?;

    assert_eq!(project.name, "Apollo");
    assert_eq!(project.status, "planned");

    let row = entity::prelude::Project::find_by_id(project.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.name, "Apollo");
    assert!(row.deleted_at.is_none());

    Ok(())
}
