use super::*;

/// Tests delete marks the user and hides it from lists.
///
/// Expected: Ok(true), then an empty list
#[tokio::test]
async fn soft_deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);

    let (users, total) = repo.get_paginated(PageRequest::default()).await?;
    assert!(users.is_empty());
    assert_eq!(total, 0);

    let row = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.deleted_at.is_some());

    Ok(())
}
