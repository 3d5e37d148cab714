use serde_json::json;

use super::*;

/// Tests commenting on a task and listing by task.
///
/// Expected: 201, then a filtered page containing the comment
#[tokio::test]
async fn create_and_list_by_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, task) = factory::helpers::create_task_with_project(db).await?;
    let user = factory::create_user(db).await?;

    let (status, created) = send(
        app(db),
        Method::POST,
        "/api/v1/comments",
        Some(json!({ "content": "Ship it", "task_id": task.id, "user_id": user.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["content"], "Ship it");

    let (status, body) = send(
        app(db),
        Method::GET,
        &format!("/api/v1/comments?task_id={}", task.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["id"], created["id"]);

    let (status, body) = send(
        app(db),
        Method::GET,
        &format!("/api/v1/comments/{}", created["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"]["id"], user.id);
    assert_eq!(body["task"]["id"], task.id);

    Ok(())
}

/// Tests a comment without content or task.
///
/// Expected: 400 listing both problems
#[tokio::test]
async fn create_rejects_empty_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db),
        Method::POST,
        "/api/v1/comments",
        Some(json!({ "content": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "content is required, task ID is required");

    Ok(())
}

/// Tests deleting a comment that never existed and one that is already deleted.
///
/// Expected: 200 the first time, 404 for both missing cases
#[tokio::test]
async fn delete_missing_comment_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), Method::DELETE, "/api/v1/comments/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "comment not found");

    let (_, task) = factory::helpers::create_task_with_project(db).await?;
    let comment = factory::create_comment(db, task.id).await?;
    let uri = format!("/api/v1/comments/{}", comment.id);

    let (status, body) = send(app(db), Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "comment deleted successfully");

    let (status, _) = send(app(db), Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
