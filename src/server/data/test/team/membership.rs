use super::*;

/// Tests members added to a team show up when it is fetched.
///
/// Expected: Ok with one join row and the user attached
#[tokio::test]
async fn added_user_is_listed_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let user = factory::create_user(db).await?;

    let repo = TeamRepository::new(db);
    repo.add_user(team.id, user.id).await?;
    repo.add_user(team.id, user.id).await?;

    assert_eq!(entity::prelude::TeamUser::find().count(db).await?, 1);

    let found = repo.find_by_id(team.id).await?.unwrap();
    assert_eq!(found.users.len(), 1);
    assert_eq!(found.users[0].id, user.id);

    Ok(())
}

/// Tests removing a member.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn remove_user_deletes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let user = factory::create_user(db).await?;
    factory::helpers::add_team_member(db, team.id, user.id).await?;

    let repo = TeamRepository::new(db);

    assert!(repo.remove_user(team.id, user.id).await?);
    assert!(!repo.remove_user(team.id, user.id).await?);

    Ok(())
}

/// Tests two adds of the same member racing on one connection pool.
///
/// Expected: Ok for both and a single join row
#[tokio::test]
async fn concurrent_adds_of_same_user_both_succeed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let user = factory::create_user(db).await?;

    let repo = TeamRepository::new(db);
    let (first, second) = tokio::join!(
        repo.add_user(team.id, user.id),
        repo.add_user(team.id, user.id)
    );
    first?;
    second?;

    assert_eq!(entity::prelude::TeamUser::find().count(db).await?, 1);

    Ok(())
}
