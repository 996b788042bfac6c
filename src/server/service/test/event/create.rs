use super::*;

/// Tests an event is stored with the organizer's profile.
///
/// Verifies that the organizer user id is resolved to the member profile.
///
/// Expected: Ok(event) with organizer_id = profile id
#[tokio::test]
async fn creates_event_for_team_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let event = EventService::new(db)
        .create(ride("Rodada a Guatapé", location.id, user.id, team.id))
        .await?;

    assert_eq!(event.name, "Rodada a Guatapé");
    assert_eq!(event.organizer_id, profile.id);
    assert_eq!(event.team_id, team.id);

    Ok(())
}

/// Tests the organizer must belong to the event's team.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_organizer_from_other_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, _team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let other_team = factory::create_team(db, location.id).await?;

    let result = EventService::new(db)
        .create(ride("Rodada nocturna", location.id, user.id, other_team.id))
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(
            message,
            "The organizer must be a member of the specified team."
        ),
        other => panic!("expected bad request, got {:?}", other),
    }

    Ok(())
}

/// Tests an organizer without a profile is reported as a missing user.
///
/// Expected: Err(AppError::NotFound("User #999 not found!"))
#[tokio::test]
async fn rejects_unknown_organizer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, _role, _user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let result = EventService::new(db)
        .create(ride("Rodada fantasma", location.id, 999, team.id))
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "User #999 not found!"),
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}

/// Tests an update checks the merged start and end dates.
///
/// Verifies that moving only the end date before the stored start date fails.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn update_checks_merged_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, _role, user, _profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let service = EventService::new(db);
    let event = service
        .create(ride("Rodada al mar", location.id, user.id, team.id))
        .await?;

    let result = service
        .update(
            event.id,
            UpdateEventParams {
                end_date: Some(at(9, 12)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
