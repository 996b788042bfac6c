use super::*;

/// Tests the card carries the member, team and club data.
///
/// Expected: Ok(card) numbered after the profile id and valid until December 31
#[tokio::test]
async fn builds_card_for_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, team, role, user, profile) =
        factory::helpers::create_member_with_dependencies(db).await?;

    let card = UserService::new(db)
        .membership_card(user.id, "Moto Club Medellín")
        .await?;

    assert_eq!(card.club_name, "Moto Club Medellín");
    assert_eq!(card.card_number, format!("{:06}", profile.id));
    assert_eq!(card.member_name, "Ana Restrepo");
    assert_eq!(card.document, format!("CC {}", profile.document_number));
    assert_eq!(card.rh, "O+");
    assert_eq!(card.role, role.name);
    assert_eq!(card.team, team.name);
    assert_eq!(card.location, location.name);

    let today = Utc::now().date_naive();
    assert_eq!(card.valid_until, date(today.year(), 12, 31));

    Ok(())
}

/// Tests an account without a profile has no card.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn requires_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_role(db).await?;
    let user = factory::create_user(db, role.id).await?;

    let result = UserService::new(db).membership_card(user.id, "Moto Club").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
