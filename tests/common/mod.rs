//! Common test utilities for e2e tests
//!
//! Builds the full router on top of either fresh in-memory stores or a
//! throwaway PostgreSQL container, and offers small request helpers.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use config::{Config, File, FileFormat};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use ley_manager::infrastructure::driven_adapters::config::AppConfig;
use ley_manager::infrastructure::driven_adapters::database::run_migrations;
use ley_manager::infrastructure::driven_adapters::repositories::Repositories;
use ley_manager::infrastructure::driving_adapters::api_rest::{router, AppState};

const TEST_CONFIG: &str = r#"
    [server]
    host = "127.0.0.1"
    port = 0
    request_timeout_secs = 5

    [storage]
    backend = "memory"

    [database]
    url = "postgres://unused"
    max_connections = 1
    min_connections = 0
"#;

pub fn test_config() -> AppConfig {
    Config::builder()
        .add_source(File::from_str(TEST_CONFIG, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Test application context
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Application over empty in-memory stores
    pub fn new() -> Self {
        Self::with_repositories(Repositories::in_memory())
    }

    pub fn with_repositories(repositories: Repositories) -> Self {
        Self {
            router: router(AppState::new(test_config(), repositories)),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router returned an error");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &impl Serialize) -> TestResponse {
        self.post_raw(uri, serde_json::to_string(body).unwrap()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<String>) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.into()))
                .unwrap(),
        )
        .await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|err| {
            panic!(
                "Failed to parse body {:?}: {err}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn error(&self) -> ErrorResponse {
        self.json()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A running PostgreSQL container with migrations applied
pub struct PostgresFixture {
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl PostgresFixture {
    pub async fn start() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .connect(&format!("postgres://postgres:postgres@{host}:{port}/postgres"))
            .await
            .expect("Failed to connect to test database");

        run_migrations(&pool).await.expect("Failed to run migrations");

        Self {
            pool,
            _container: container,
        }
    }

    pub fn app(&self) -> TestApp {
        TestApp::with_repositories(Repositories::postgres(self.pool.clone()))
    }
}

/// Helper struct for network creation bodies
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateNetworkRequest {
    pub name: String,
    #[serde(rename = "ipv4CIDR", skip_serializing_if = "Option::is_none")]
    pub ipv4_cidr: Option<String>,
    #[serde(rename = "ipv6CIDR", skip_serializing_if = "Option::is_none")]
    pub ipv6_cidr: Option<String>,
}

impl CreateNetworkRequest {
    pub fn ipv4(name: &str, cidr: &str) -> Self {
        Self {
            name: name.to_string(),
            ipv4_cidr: Some(cidr.to_string()),
            ipv6_cidr: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
}

impl CreateUserRequest {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Network response structure for deserialization
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "ipv4CIDR")]
    pub ipv4_cidr: Option<String>,
    #[serde(rename = "ipv6CIDR")]
    pub ipv6_cidr: Option<String>,
    pub created_on: String,
    pub modified_on: String,
}

#[derive(Debug, Deserialize)]
pub struct NetworkListResponse {
    pub networks: Vec<NetworkResponse>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub status: String,
    pub created_on: String,
    pub modified_on: String,
}

#[derive(Debug, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
