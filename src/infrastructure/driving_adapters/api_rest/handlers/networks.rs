//! Network Handlers
//!
//! HTTP handlers for creating, fetching and listing networks.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::network::{
    CreateNetworkDto, NetworkListDto, NetworkResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::JsonBody;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for network endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_networks).post(create_network))
        .route("/:name", get(get_network_by_name))
}

/// POST /network - Create a new network
///
/// # Responses
///
/// * 201 Created - Network created successfully
/// * 400 Bad Request - Invalid name or address ranges, or name already taken
/// * 500 Internal Server Error - Store failure
async fn create_network(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateNetworkDto>,
) -> Result<(StatusCode, Json<NetworkResponseDto>), ApiError> {
    dto.validate()?;

    let ctx = state.request_context();
    let network = state.create_network_use_case.execute(&ctx, dto.into()).await?;

    Ok((StatusCode::CREATED, Json(NetworkResponseDto::from(network))))
}

/// GET /network - List every network
async fn list_networks(State(state): State<AppState>) -> Result<Json<NetworkListDto>, ApiError> {
    let ctx = state.request_context();
    let networks = state.list_networks_use_case.execute(&ctx).await?;

    Ok(Json(NetworkListDto::from(networks)))
}

/// GET /network/:name - Get a network by its name
///
/// # Responses
///
/// * 200 OK - Network found
/// * 404 Not Found - No network has that name
async fn get_network_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let ctx = state.request_context();
    let network = state.get_network_by_name_use_case.execute(&ctx, &name).await?;

    Ok(Json(NetworkResponseDto::from(network)))
}
