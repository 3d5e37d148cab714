use super::*;

/// Tests a comment is created and read back with task and author.
///
/// Expected: Ok(Some) with both relations attached
#[tokio::test]
async fn creates_and_finds_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, task) = factory::helpers::create_task_with_project(db).await?;
    let user = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            content: "Looks good".to_string(),
            task_id: task.id,
            user_id: Some(user.id),
        })
        .await?;

    let found = repo.find_by_id(comment.id).await?.unwrap();

    assert_eq!(found.comment.content, "Looks good");
    assert_eq!(found.task.map(|t| t.id), Some(task.id));
    assert_eq!(found.author.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests the task filter on the paginated list.
///
/// Expected: Ok with only the filtered task's comments
#[tokio::test]
async fn filters_by_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, task) = factory::helpers::create_task_with_project(db).await?;
    let other = factory::create_task(db, project.id).await?;
    factory::create_comment(db, task.id).await?;
    factory::create_comment(db, other.id).await?;
    factory::comment::CommentFactory::new(db, task.id)
        .deleted(true)
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let (comments, total) = repo
        .get_paginated(PageRequest::default(), Some(task.id))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(comments[0].task_id, task.id);

    Ok(())
}

/// Tests deleting a comment, and deleting one that does not exist.
///
/// Expected: Ok(true) for the live comment, Ok(false) otherwise
#[tokio::test]
async fn soft_deletes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, task) = factory::helpers::create_task_with_project(db).await?;
    let comment = factory::create_comment(db, task.id).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.delete(comment.id).await?);
    assert!(repo.find_by_id(comment.id).await?.is_none());
    assert!(!repo.delete(comment.id).await?);
    assert!(!repo.delete(4242).await?);

    Ok(())
}
