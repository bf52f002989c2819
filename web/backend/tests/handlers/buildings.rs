use crate::fixtures::test_app;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use campuspath_core::CampusGraph;
use campuspath_web::models::BuildingsResponse;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_buildings_listed_sorted_by_id_with_name_fallback() {
    let (app, _file) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/buildings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let listing: BuildingsResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(listing.count, 4);

    let ids: Vec<&str> = listing
        .buildings
        .iter()
        .map(|option| option.id.as_str())
        .collect();
    assert_eq!(ids, vec!["engineering", "library", "rec-center", "union"]);

    // The unnamed building shows its id instead.
    assert_eq!(listing.buildings[2].name, "rec-center");
    assert_eq!(listing.buildings[1].name, "Downtown Library");
}

#[tokio::test]
async fn test_add_building_persists_and_echoes_the_dataset() {
    let (app, file) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/buildings")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"building": {"id": "observatory", "coordinates": [-79.96, 39.652], "name": "Hill Observatory"}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let echoed: CampusGraph = serde_json::from_slice(&body).unwrap();
    assert_eq!(echoed.buildings.len(), 5);
    assert_eq!(echoed.buildings["observatory"].name, "Hill Observatory");

    let persisted = CampusGraph::from_json_file(file.path()).unwrap();
    assert!(persisted.buildings.contains_key("observatory"));
}
