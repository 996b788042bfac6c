use super::*;

/// Tests a member can join an event once.
///
/// Expected: Ok for the first registration, Err(AppError::BadRequest) for the second
#[tokio::test]
async fn registers_member_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let event = factory::create_event(db, location.id, profile.id, team.id).await?;

    let service = ParticipationService::new(db);
    let participation = service
        .create(event.id, user.id, CreateParticipationParams::default())
        .await?;

    assert_eq!(participation.member_id, profile.id);
    assert!(!participation.attended);

    let result = service
        .create(event.id, user.id, CreateParticipationParams::default())
        .await;
    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(
            message,
            format!("User #{} is already part of the event #{}!", user.id, event.id)
        ),
        other => panic!("expected bad request, got {:?}", other),
    }

    Ok(())
}

/// Tests participations can be narrowed by attendance.
///
/// Expected: Ok with only the attended participation
#[tokio::test]
async fn filters_by_attendance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, _role, _user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let (_other_user, other_profile) = factory::helpers::create_member_in_team(db, team.id).await?;
    let event = factory::create_event(db, location.id, profile.id, team.id).await?;
    factory::create_participation(db, profile.id, event.id, true).await?;
    factory::create_participation(db, other_profile.id, event.id, false).await?;

    let service = ParticipationService::new(db);

    assert_eq!(service.by_event(event.id, None).await?.len(), 2);
    let attended = service.by_event(event.id, Some(true)).await?;
    assert_eq!(attended.len(), 1);
    assert_eq!(attended[0].member_id, profile.id);

    Ok(())
}

/// Tests looking up a participation that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_requires_participation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, _role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;
    let event = factory::create_event(db, location.id, profile.id, team.id).await?;

    let result = ParticipationService::new(db).get(event.id, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
