use entity::agreement;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::*;

/// Tests creating an agreement over HTTP.
///
/// Expected: 201 with the name unchanged and the row stored
#[tokio::test]
async fn creates_agreement() {
    let test = TestBuilder::new().with_agreement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let location = factory::create_location(db).await.unwrap();
    let company = factory::create_company(db, location.id).await.unwrap();

    let (status, body) = send(
        app(db),
        Method::POST,
        "/agreements",
        Some(json!({
            "name": "Valid agreement",
            "start_date": "2023-01-01",
            "end_date": "2025-12-31",
            "company_id": company.id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Valid agreement");
    assert_eq!(body["company_id"], company.id);

    let id = body["id"].as_i64().unwrap() as i32;
    let stored = agreement::Entity::find_by_id(id).one(db).await.unwrap().unwrap();
    assert_eq!(stored.name, "Valid agreement");
    assert!(!stored.deleted);
}

/// Tests an agreement ending before it starts is rejected.
///
/// Expected: 400 and no row stored
#[tokio::test]
async fn rejects_inverted_dates() {
    let test = TestBuilder::new().with_agreement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let location = factory::create_location(db).await.unwrap();
    let company = factory::create_company(db, location.id).await.unwrap();

    let (status, body) = send(
        app(db),
        Method::POST,
        "/agreements",
        Some(json!({
            "name": "Backwards agreement",
            "start_date": "2025-12-31",
            "end_date": "2023-01-01",
            "company_id": company.id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(agreement::Entity::find().count(db).await.unwrap(), 0);
}

/// Tests a soft deleted agreement disappears from reads but stays stored.
///
/// Expected: 204, then 404 on GET, and the row marked deleted
#[tokio::test]
async fn soft_delete_hides_agreement() {
    let test = TestBuilder::new().with_agreement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let location = factory::create_location(db).await.unwrap();
    let company = factory::create_company(db, location.id).await.unwrap();
    let created = factory::create_agreement(db, company.id).await.unwrap();
    let uri = format!("/agreements/{}", created.id);

    let (status, _) = send(app(db), Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(app(db), Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        format!("Agreement #{} not found!", created.id)
    );

    let stored = agreement::Entity::find_by_id(created.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.deleted);
    assert!(stored.deleted_at.is_some());
}

/// Tests a hard delete removes the row.
///
/// Expected: 204 and no row left for the id
#[tokio::test]
async fn hard_delete_removes_agreement() {
    let test = TestBuilder::new().with_agreement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let location = factory::create_location(db).await.unwrap();
    let company = factory::create_company(db, location.id).await.unwrap();
    let kept = factory::create_agreement(db, company.id).await.unwrap();
    let removed = factory::create_agreement(db, company.id).await.unwrap();

    let (status, _) = send(
        app(db),
        Method::DELETE,
        &format!("/agreements/{}?hard=true", removed.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(agreement::Entity::find_by_id(removed.id)
        .one(db)
        .await
        .unwrap()
        .is_none());
    assert!(agreement::Entity::find_by_id(kept.id)
        .one(db)
        .await
        .unwrap()
        .is_some());
}

/// Tests an unknown filter field is named in the error.
///
/// Expected: 400 with "Invalid filter field: bogus_field"
#[tokio::test]
async fn rejects_unknown_filter_field() {
    let test = TestBuilder::new().with_agreement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), Method::GET, "/companies?filter=bogus_field=1", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid filter field: bogus_field");
}

/// Tests list responses carry the page envelope.
///
/// Expected: 200 with one item on the page and a total of two
#[tokio::test]
async fn lists_companies_in_pages() {
    let test = TestBuilder::new().with_agreement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let location = factory::create_location(db).await.unwrap();
    factory::create_company(db, location.id).await.unwrap();
    factory::create_company(db, location.id).await.unwrap();

    let (status, body) = send(app(db), Method::GET, "/companies?skip=1&limit=1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["total_records"], 2);
}

/// Tests a skip beyond the database's signed range.
///
/// Expected: 200 with an empty page and the full total
#[tokio::test]
async fn huge_skip_returns_empty_page() {
    let test = TestBuilder::new().with_agreement_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let location = factory::create_location(db).await.unwrap();
    factory::create_company(db, location.id).await.unwrap();

    let (status, body) = send(
        app(db),
        Method::GET,
        "/companies?skip=18446744073709551615&limit=1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["total_records"], 1);
}
