use crate::models::{
    AddBuildingRequest, BlockPathRequest, BuildingOption, BuildingsResponse, HealthResponse,
    NewBuilding, RouteQuery, RouteResponse, SearchStats, StatsResponse, UpdatePathsRequest,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use campuspath_core::{Building, CampusGraph, route_geometry};
use std::sync::Arc;
use std::time::Instant;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Campuspath API is running".to_string(),
    })
}

pub async fn get_campus(State(state): State<Arc<AppState>>) -> Json<CampusGraph> {
    Json(state.campus.read().await.clone())
}

pub async fn list_buildings(State(state): State<Arc<AppState>>) -> Json<BuildingsResponse> {
    let campus = state.campus.read().await;

    let buildings: Vec<BuildingOption> = campus
        .building_options()
        .into_iter()
        .map(|(id, name)| BuildingOption { id, name })
        .collect();
    let count = buildings.len();

    Json(BuildingsResponse { buildings, count })
}

pub async fn find_route(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteQuery>,
) -> Json<RouteResponse> {
    let campus = state.campus.read().await;

    // Accept either a building id or a display name; an unresolved query
    // falls through to the engine, which treats it as a node with no
    // neighbors and reports no route.
    let start = campus
        .find_building_id(&params.from)
        .unwrap_or_else(|_| params.from.clone());
    let end = campus
        .find_building_id(&params.to)
        .unwrap_or_else(|_| params.to.clone());

    let start_time = Instant::now();
    let outcome = campuspath_core::find_route(&campus.paths, &params.algorithm, &start, &end);
    let duration_ms = start_time.elapsed().as_millis() as u64;

    let geometry = outcome
        .primary_path()
        .map(|path| route_geometry(&campus, path))
        .unwrap_or_default();

    Json(RouteResponse {
        from: start,
        to: end,
        algorithm: params.algorithm,
        found: outcome.found(),
        distance: outcome.distance(),
        paths: outcome
            .paths()
            .into_iter()
            .map(|path| path.to_vec())
            .collect(),
        geometry,
        search_stats: SearchStats { duration_ms },
    })
}

pub async fn update_campus(
    State(state): State<Arc<AppState>>,
    Json(updated): Json<CampusGraph>,
) -> Result<Json<CampusGraph>, (StatusCode, String)> {
    let mut campus = state.campus.write().await;
    *campus = updated;

    persist_or_500(&state, &campus)?;
    Ok(Json(campus.clone()))
}

pub async fn add_building(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddBuildingRequest>,
) -> Result<Json<CampusGraph>, (StatusCode, String)> {
    let mut campus = state.campus.write().await;

    let NewBuilding {
        id,
        coordinates,
        name,
    } = request.building;
    campus.add_building(id, Building { coordinates, name });

    persist_or_500(&state, &campus)?;
    Ok(Json(campus.clone()))
}

pub async fn update_paths(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdatePathsRequest>,
) -> Result<Json<CampusGraph>, (StatusCode, String)> {
    let mut campus = state.campus.write().await;
    campus.replace_paths(request.paths);

    persist_or_500(&state, &campus)?;
    Ok(Json(campus.clone()))
}

pub async fn block_path(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BlockPathRequest>,
) -> Result<Json<CampusGraph>, (StatusCode, String)> {
    let mut campus = state.campus.write().await;

    let removed = campus.block_path(&request.start, &request.end);
    tracing::info!(
        start = %request.start,
        end = %request.end,
        removed,
        "blocked path"
    );

    persist_or_500(&state, &campus)?;
    Ok(Json(campus.clone()))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let campus = state.campus.read().await;

    Json(StatsResponse {
        total_buildings: campus.buildings.len(),
        total_paths: campus.paths.len(),
    })
}

fn persist_or_500(state: &AppState, campus: &CampusGraph) -> Result<(), (StatusCode, String)> {
    state.persist(campus).map_err(|error| {
        tracing::error!(%error, "failed to persist campus dataset");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error saving data".to_string(),
        )
    })
}
