use super::*;

/// Tests a team is created and read back with its project.
///
/// Expected: Ok(Some) with the project attached and no members
#[tokio::test]
async fn creates_and_finds_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo.create(params("Platform", Some(project.id))).await?;
    let found = repo.find_by_id(team.id).await?.unwrap();

    assert_eq!(found.team.name, "Platform");
    assert_eq!(found.project.map(|p| p.id), Some(project.id));
    assert!(found.users.is_empty());

    Ok(())
}

/// Tests a full update can detach the team from its project.
///
/// Expected: Ok(Some) with project_id cleared
#[tokio::test]
async fn update_detaches_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let team = factory::team::TeamFactory::new(db)
        .project_id(Some(project.id))
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(team.id, params("Detached", None))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Detached");
    assert!(updated.project_id.is_none());

    Ok(())
}

/// Tests list and delete honour soft deletion.
///
/// Expected: Ok with the deleted team gone from the page and count
#[tokio::test]
async fn delete_hides_team_from_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_team(db).await?;
    let removed = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    assert!(repo.delete(removed.id).await?);

    let (teams, total) = repo.get_paginated(PageRequest::default()).await?;
    assert_eq!(total, 1);
    assert_eq!(teams[0].id, kept.id);
    assert!(!repo.delete(removed.id).await?);

    Ok(())
}
