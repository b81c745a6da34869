
// Handler function imports
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::{header, HeaderValue, Method};
use axum::{debug_handler, routing::{get, post}, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::query::MatchRules;
use crate::store::VehicleSource;
use crate::vehicle::Vehicle;

/// Shared by every handler. Holds no data of its own: the source is asked
/// again on each request.
#[derive(Clone)]
pub struct AppState {
	pub source: Arc<dyn VehicleSource>,
	pub rules: MatchRules,
}

impl AppState {
	pub fn new(source: impl VehicleSource + 'static, rules: MatchRules) -> Self {
		Self { source: Arc::new(source), rules }
	}
}

#[derive(Debug, Serialize)]
pub struct VehicleList {
	pub success: bool,
	pub count: usize,
	pub data: Vec<Vehicle>,
}

impl VehicleList {
	fn new(data: Vec<Vehicle>) -> Self {
		Self { success: true, count: data.len(), data }
	}
}

#[derive(Debug, Serialize)]
pub struct SingleVehicle {
	pub success: bool,
	pub data: Vehicle,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
	#[serde(default)]
	pub query: Option<String>,
}

// Handler for /
#[debug_handler]
async fn api_info() -> Json<Value> {
	Json(json!({
		"success": true,
		"message": "Vehicle search API",
		"endpoints": {
			"listAll": "GET /api/vehicles",
			"getByVrm": "GET /api/vehicles/vrm/{vrm}",
			"search": "POST /api/vehicles/search",
		}
	}))
}

// Handler for /api/vehicles
#[debug_handler]
async fn list_vehicles(State(state): State<AppState>) -> Result<Json<VehicleList>, ApiError> {
	let vehicles = state.source.load_all()?;
	tracing::debug!(count = vehicles.len(), "listed vehicles");
	Ok(Json(VehicleList::new(vehicles)))
}

// Handler for /api/vehicles/vrm/{vrm}
#[debug_handler]
async fn get_vehicle_by_vrm(
	State(state): State<AppState>,
	Path(vrm): Path<String>,
) -> Result<Json<SingleVehicle>, ApiError> {
	match state.source.find_by_vrm(&vrm)? {
		Some(vehicle) => Ok(Json(SingleVehicle { success: true, data: vehicle })),
		None => {
			tracing::debug!(%vrm, "vehicle not found");
			Err(ApiError::VehicleNotFound(vrm))
		}
	}
}

// Handler for /api/vehicles/search
#[debug_handler]
async fn search_vehicles(
	State(state): State<AppState>,
	payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<VehicleList>, ApiError> {
	let query = match payload {
		Ok(Json(SearchRequest { query: Some(q) })) if !q.trim().is_empty() => q,
		Ok(_) => return Err(ApiError::MissingQuery),
		Err(rejection) => {
			tracing::debug!(error = %rejection, "unreadable search body");
			return Err(ApiError::MissingQuery);
		}
	};

	let vehicles = state.source.load_all()?;
	let found = state.rules.search(&query, vehicles);
	tracing::debug!(%query, matches = found.len(), "vehicle search");
	if found.is_empty() {
		return Err(ApiError::NoMatches(query.trim().to_string()));
	}
	Ok(Json(VehicleList::new(found)))
}

fn parse_origins(allowed_origins: &[String]) -> Vec<HeaderValue> {
	allowed_origins
		.iter()
		.filter_map(|origin| match origin.parse::<HeaderValue>() {
			Ok(value) => Some(value),
			Err(err) => {
				tracing::warn!(%origin, error = %err, "ignoring malformed CORS origin");
				None
			}
		})
		.collect()
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
	if allowed_origins.is_empty() {
		return CorsLayer::permissive();
	}
	CorsLayer::new()
		.allow_origin(AllowOrigin::list(parse_origins(allowed_origins)))
		.allow_methods([Method::GET, Method::POST])
		.allow_headers([header::CONTENT_TYPE])
}

pub fn create_app(state: AppState, cors_allowed_origins: &[String]) -> Router {
	Router::new()
		.route("/", get(api_info))
		.route("/api/vehicles", get(list_vehicles))
		.route("/api/vehicles/vrm/{vrm}", get(get_vehicle_by_vrm))
		.route("/api/vehicles/search", post(search_vehicles))
		.layer(cors_layer(cors_allowed_origins))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
