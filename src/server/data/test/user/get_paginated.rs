use super::*;

/// Tests memberships are attached to every user on the page.
///
/// Expected: Ok with project ids per user
#[tokio::test]
async fn attaches_memberships_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;
    let member = factory::create_user(db).await?;
    let loner = factory::create_user(db).await?;
    factory::helpers::add_project_member(db, project.id, member.id).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_paginated(PageRequest::default()).await?;

    assert_eq!(total, 2);
    assert_eq!(users[0].user.id, member.id);
    assert_eq!(users[0].project_ids, vec![project.id]);
    assert_eq!(users[1].user.id, loner.id);
    assert!(users[1].project_ids.is_empty());

    Ok(())
}
