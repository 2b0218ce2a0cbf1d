//! User Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::user::{
    CreateUserDto, UserListDto, UserQuery, UserResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::JsonBody;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_user_by_username).post(create_user))
        .route("/all", get(list_users))
}

/// POST /user - Create a new active user
///
/// # Responses
///
/// * 201 Created - User created successfully
/// * 400 Bad Request - Invalid username or username already taken
/// * 500 Internal Server Error - Store failure
async fn create_user(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    dto.validate()?;

    let ctx = state.request_context();
    let user = state.create_user_use_case.execute(&ctx, dto.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponseDto::from(user))))
}

/// GET /user?username=<name> - Get a user by username
///
/// # Responses
///
/// * 200 OK - User found
/// * 400 Bad Request - `username` query parameter missing or empty
/// * 404 Not Found - No user has that username
async fn get_user_by_username(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserResponseDto>, ApiError> {
    let username = query
        .username
        .filter(|username| !username.is_empty())
        .ok_or(ApiError::MissingQueryParameter("username"))?;

    let ctx = state.request_context();
    let user = state.get_user_by_username_use_case.execute(&ctx, &username).await?;

    Ok(Json(UserResponseDto::from(user)))
}

/// GET /user/all - List every user
async fn list_users(State(state): State<AppState>) -> Result<Json<UserListDto>, ApiError> {
    let ctx = state.request_context();
    let users = state.list_users_use_case.execute(&ctx).await?;

    Ok(Json(UserListDto::from(users)))
}
