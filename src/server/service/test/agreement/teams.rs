use super::*;

/// Tests linking a team returns the updated list of teams.
///
/// Expected: Ok with the linked team
#[tokio::test]
async fn links_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_agreement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (agreement, team) = agreement_and_team(db).await?;

    let teams = AgreementService::new(db)
        .add_team(agreement.id, team.id)
        .await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, team.id);

    Ok(())
}

/// Tests linking the same team twice is refused.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_agreement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (agreement, team) = agreement_and_team(db).await?;
    let service = AgreementService::new(db);
    service.add_team(agreement.id, team.id).await?;

    let result = service.add_team(agreement.id, team.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests linking an unknown team names it in the error.
///
/// Expected: Err(AppError::NotFound("Team #999 not found!"))
#[tokio::test]
async fn rejects_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_agreement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (agreement, _team) = agreement_and_team(db).await?;

    let result = AgreementService::new(db).add_team(agreement.id, 999).await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Team #999 not found!"),
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}

/// Tests an unlinked team can be linked again.
///
/// Expected: Ok with an empty list after removal and one team after relinking
#[tokio::test]
async fn unlinks_and_relinks_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_agreement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (agreement, team) = agreement_and_team(db).await?;
    let service = AgreementService::new(db);
    service.add_team(agreement.id, team.id).await?;

    service.remove_team(agreement.id, team.id).await?;
    assert!(service.teams(agreement.id).await?.is_empty());

    let teams = service.add_team(agreement.id, team.id).await?;
    assert_eq!(teams.len(), 1);

    Ok(())
}

/// Tests removing a team that was never linked.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn remove_requires_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_agreement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (agreement, team) = agreement_and_team(db).await?;

    let result = AgreementService::new(db)
        .remove_team(agreement.id, team.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
