//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateNetworkUseCase, CreateUserUseCase, GetNetworkByNameUseCase, GetUserByUsernameUseCase,
    ListNetworksUseCase, ListUsersUseCase,
};
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driven_adapters::repositories::Repositories;
use crate::shared::context::RequestContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub create_network_use_case: Arc<CreateNetworkUseCase>,
    pub get_network_by_name_use_case: Arc<GetNetworkByNameUseCase>,
    pub list_networks_use_case: Arc<ListNetworksUseCase>,
    pub create_user_use_case: Arc<CreateUserUseCase>,
    pub get_user_by_username_use_case: Arc<GetUserByUsernameUseCase>,
    pub list_users_use_case: Arc<ListUsersUseCase>,
}

impl AppState {
    /// Wire every use case to the given stores
    #[must_use]
    pub fn new(config: AppConfig, repositories: Repositories) -> Self {
        let Repositories { networks, users } = repositories;

        Self {
            config: Arc::new(config),
            create_network_use_case: Arc::new(CreateNetworkUseCase::new(networks.clone())),
            get_network_by_name_use_case: Arc::new(GetNetworkByNameUseCase::new(networks.clone())),
            list_networks_use_case: Arc::new(ListNetworksUseCase::new(networks)),
            create_user_use_case: Arc::new(CreateUserUseCase::new(users.clone())),
            get_user_by_username_use_case: Arc::new(GetUserByUsernameUseCase::new(users.clone())),
            list_users_use_case: Arc::new(ListUsersUseCase::new(users)),
        }
    }

    /// Fresh context bounded by `server.request_timeout_secs`
    #[must_use]
    pub fn request_context(&self) -> RequestContext {
        RequestContext::with_timeout(self.config.server.request_timeout())
    }
}

/// Build the full HTTP surface
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/network", handlers::networks::router())
        .nest("/user", handlers::users::router())
        .route("/healthcheck", get(handlers::health::healthcheck))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
