use crate::fixtures::test_app;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use campuspath_web::models::RouteResponse;
use tower::util::ServiceExt;

async fn get_route(uri: &str) -> RouteResponse {
    let (app, _file) = test_app();

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_route_defaults_to_bfs() {
    let route = get_route("/api/route?from=library&to=engineering").await;

    assert_eq!(route.algorithm, "bfs");
    assert!(route.found);
    assert_eq!(route.paths.len(), 1);
    // Fewest stops wins: the direct edge, not the lighter two-leg route.
    assert_eq!(route.paths[0], vec!["library", "engineering"]);
    assert_eq!(route.distance, None);
}

#[tokio::test]
async fn test_route_dijkstra_reports_distance() {
    let route = get_route("/api/route?from=library&to=engineering&algorithm=dijkstra").await;

    assert!(route.found);
    assert_eq!(route.paths[0], vec!["library", "union", "engineering"]);
    assert_eq!(route.distance, Some(8.0));
}

#[tokio::test]
async fn test_route_dfs_enumerates_alternatives() {
    let route = get_route("/api/route?from=library&to=engineering&algorithm=dfs").await;

    assert!(route.found);
    assert_eq!(route.paths.len(), 2);
    assert_eq!(route.distance, None);
}

#[tokio::test]
async fn test_route_unknown_algorithm_yields_empty_envelope() {
    let route = get_route("/api/route?from=library&to=engineering&algorithm=a-star").await;

    assert!(!route.found);
    assert!(route.paths.is_empty());
    assert_eq!(route.distance, None);
    assert!(route.geometry.is_empty());
}

#[tokio::test]
async fn test_route_to_isolated_building_is_not_found() {
    let route = get_route("/api/route?from=library&to=rec-center").await;

    assert!(!route.found);
    assert!(route.paths.is_empty());
}

#[tokio::test]
async fn test_route_accepts_display_names() {
    let route = get_route("/api/route?from=Downtown%20Library&to=Student%20Union").await;

    assert_eq!(route.from, "library");
    assert_eq!(route.to, "union");
    assert!(route.found);
}

#[tokio::test]
async fn test_route_carries_stitched_geometry() {
    let route = get_route("/api/route?from=library&to=union").await;

    // Building coordinates on both ends with the stored point between.
    assert_eq!(
        route.geometry,
        vec![[-79.92, 39.64], [-79.93, 39.645], [-79.955, 39.647]]
    );
}
