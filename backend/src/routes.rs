use crate::error::ApiError;
use crate::session::ws_handler;
use crate::state::{AppState, Catalog, LayoutRecord};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use layout_core::collision::{validate_layout, EquipmentPosition, EquipmentSpec, LayoutReport};
use layout_core::floor::{BuildingGeometry, FloorPlane, FloorPlaneIssue};
use layout_core::geometry::{validate_simple_polygon, Point2, PolygonReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler))
        .route("/api/polygons/validate", post(validate_polygon))
        .route("/api/floor-plane", post(floor_plane))
        .route("/api/layouts/validate", post(validate_layout_batch))
        .route("/api/layouts", post(create_layout))
        .route("/api/layouts/:id", get(get_layout))
        .route("/api/layouts/:id/positions", put(update_positions))
        .route("/api/catalog", get(get_catalog))
        .route("/api/catalog/:equipment_id", put(put_catalog_entry))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Shop layout backend"
}

// === Geometry ===

#[derive(Debug, Deserialize)]
pub struct PolygonRequest {
    pub points: Vec<Point2>,
}

async fn validate_polygon(Json(req): Json<PolygonRequest>) -> Json<PolygonReport> {
    Json(validate_simple_polygon(&req.points).into())
}

#[derive(Debug, Deserialize)]
pub struct FloorPlaneRequest {
    pub geometry: BuildingGeometry,
    /// Named ring to resolve; traced from the wall segments when absent.
    #[serde(default)]
    pub ring: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlaneResponse {
    #[serde(flatten)]
    pub report: PolygonReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point2>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_sq_ft: Option<f64>,
}

impl From<Result<FloorPlane, FloorPlaneIssue>> for FloorPlaneResponse {
    fn from(result: Result<FloorPlane, FloorPlaneIssue>) -> Self {
        match result {
            Ok(plane) => Self {
                report: PolygonReport::valid(),
                area: Some(plane.area()),
                area_sq_ft: Some(plane.area_sq_ft()),
                points: Some(plane.points),
            },
            Err(issue) => Self {
                report: PolygonReport::invalid(issue.to_string()),
                points: None,
                area: None,
                area_sq_ft: None,
            },
        }
    }
}

async fn floor_plane(Json(req): Json<FloorPlaneRequest>) -> Json<FloorPlaneResponse> {
    let result = match &req.ring {
        Some(name) => req.geometry.floor_plane(name),
        None => req.geometry.floor_plane_from_walls(),
    };
    if let Err(issue) = &result {
        info!("Floor plane rejected: {} ({:?})", issue, issue.kind());
    }
    Json(result.into())
}

// === Layouts ===

#[derive(Debug, Deserialize)]
pub struct ValidateLayoutRequest {
    pub positions: Vec<EquipmentPosition>,
    pub catalog: Catalog,
}

/// Stateless audit against a caller-supplied catalog.
async fn validate_layout_batch(
    Json(req): Json<ValidateLayoutRequest>,
) -> Result<Json<LayoutReport>, ApiError> {
    let report = validate_layout(&req.positions, &req.catalog).map_err(|e| {
        warn!("Layout validation failed: {}", e);
        e
    })?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct CreateLayoutRequest {
    pub name: String,
    #[serde(default)]
    pub positions: Vec<EquipmentPosition>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePositionsRequest {
    pub positions: Vec<EquipmentPosition>,
}

fn audit(state: &AppState, positions: &[EquipmentPosition]) -> Result<LayoutReport, ApiError> {
    let catalog = state.catalog()?;
    Ok(validate_layout(positions, &*catalog)?)
}

async fn create_layout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateLayoutRequest>,
) -> Result<(StatusCode, Json<LayoutRecord>), ApiError> {
    let report = audit(&state, &req.positions)?;
    let record = LayoutRecord::new(req.name, req.positions, &report);
    info!(
        "Created layout {} '{}' ({} collisions)",
        record.id, record.name, record.collision_count
    );

    state.layouts_mut()?.insert(record.id, record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_layout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LayoutRecord>, ApiError> {
    let record = state.layouts()?.get(&id).cloned();
    record.map(Json).ok_or(ApiError::LayoutNotFound(id))
}

async fn update_positions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePositionsRequest>,
) -> Result<Json<LayoutRecord>, ApiError> {
    // Audit first: a failed audit leaves the stored record untouched
    let report = audit(&state, &req.positions)?;

    let mut layouts = state.layouts_mut()?;
    let record = layouts.get_mut(&id).ok_or(ApiError::LayoutNotFound(id))?;
    record.positions = req.positions;
    record.apply_report(&report);
    info!("Updated layout {} ({} collisions)", id, record.collision_count);
    Ok(Json(record.clone()))
}

// === Catalog ===

async fn get_catalog(State(state): State<Arc<AppState>>) -> Result<Json<Catalog>, ApiError> {
    Ok(Json(state.catalog()?.clone()))
}

async fn put_catalog_entry(
    State(state): State<Arc<AppState>>,
    Path(equipment_id): Path<String>,
    Json(spec): Json<EquipmentSpec>,
) -> Result<Json<EquipmentSpec>, ApiError> {
    info!("Catalog entry {} -> {}", equipment_id, spec.name);
    state.catalog_mut()?.insert(equipment_id, spec.clone());
    Ok(Json(spec))
}
