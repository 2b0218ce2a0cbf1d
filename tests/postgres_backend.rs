//! End-to-end tests for the PostgreSQL backend
//!
//! These spin up a real PostgreSQL database using testcontainers and check
//! that it answers exactly like the in-memory stores. They need a Docker
//! daemon, so they are ignored by default: `cargo test -- --ignored`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;

use common::{
    CreateNetworkRequest, CreateUserRequest, NetworkListResponse, NetworkResponse,
    PostgresFixture, TestApp, UserListResponse, UserResponse,
};
use ley_manager::application::use_cases::{CreateNetworkUseCase, CreateUserUseCase};
use ley_manager::domain::gateways::UserRepository;
use ley_manager::domain::models::network::CreateNetworkData;
use ley_manager::domain::models::user::CreateUserData;
use ley_manager::infrastructure::driven_adapters::repositories::Repositories;
use ley_manager::infrastructure::driven_adapters::user_repository::PostgresUserRepository;
use ley_manager::shared::context::RequestContext;
use ley_manager::shared::errors::ErrorKind;

/// Runs the same request script on both backends and returns
/// `(status, body)` pairs for comparison.
async fn run_script(app: &TestApp) -> Vec<(StatusCode, String)> {
    let mut outcomes = Vec::new();
    let mut record = |status: StatusCode, message: String| outcomes.push((status, message));

    let response = app.post_json("/user", &CreateUserRequest::named("jdoe")).await;
    record(response.status, response.json::<UserResponse>().name);

    for name in ["jdoe", "", "-x"] {
        let response = app.post_json("/user", &CreateUserRequest::named(name)).await;
        record(response.status, response.error().error.message);
    }

    let response = app.get("/user?username=doesnotexist").await;
    record(response.status, response.error().error.message);

    let response = app
        .post_json("/network", &CreateNetworkRequest::ipv4("office", "10.0.0.0/8"))
        .await;
    record(response.status, response.json::<NetworkResponse>().name);

    let response = app
        .post_json("/network", &CreateNetworkRequest::ipv4("office", "10.0.0.0/8"))
        .await;
    record(response.status, response.error().error.message);

    let response = app.get("/network/nowhere").await;
    record(response.status, response.error().error.message);

    // NUL can never be stored, so lookups with it simply miss.
    let response = app.get("/user?username=ab%00cd").await;
    record(response.status, response.error().error.message);

    let response = app.get("/network/ab%00cd").await;
    record(response.status, response.error().error.message);

    outcomes
}

/// Creates straight through the use cases, below the HTTP length checks.
async fn create_directly(repositories: Repositories) -> Vec<Result<String, (ErrorKind, String)>> {
    let ctx = RequestContext::new();
    let networks = CreateNetworkUseCase::new(repositories.networks);
    let users = CreateUserUseCase::new(repositories.users);
    let mut outcomes = Vec::new();

    for name in ["a".repeat(255), "a".repeat(300)] {
        let network = networks
            .execute(
                &ctx,
                CreateNetworkData {
                    name: name.clone(),
                    ipv4_cidr: Some("10.0.0.0/8".to_string()),
                    ipv6_cidr: None,
                },
            )
            .await
            .map(|n| n.name().to_string())
            .map_err(|err| (err.kind(), err.safe_message().to_string()));
        outcomes.push(network);

        let user = users
            .execute(&ctx, CreateUserData { name })
            .await
            .map(|u| u.username().to_string())
            .map_err(|err| (err.kind(), err.safe_message().to_string()));
        outcomes.push(user);
    }

    outcomes
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_backends_report_identical_outcomes() {
    let fixture = PostgresFixture::start().await;

    let in_memory = run_script(&TestApp::new()).await;
    let postgres = run_script(&fixture.app()).await;

    assert_eq!(postgres, in_memory);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_backends_agree_on_name_length_bound() {
    let fixture = PostgresFixture::start().await;

    let in_memory = create_directly(Repositories::in_memory()).await;
    let postgres = create_directly(Repositories::postgres(fixture.pool.clone())).await;

    assert_eq!(postgres, in_memory);
    assert!(in_memory[0].is_ok());
    assert_eq!(in_memory[2].as_ref().unwrap_err().0, ErrorKind::Validation);
    assert_eq!(in_memory[3].as_ref().unwrap_err().0, ErrorKind::Validation);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_user_round_trip_preserves_timestamps() {
    let fixture = PostgresFixture::start().await;
    let app = fixture.app();

    let created: UserResponse = app
        .post_json("/user", &CreateUserRequest::named("jdoe"))
        .await
        .json();
    let fetched: UserResponse = app.get("/user?username=jdoe").await.json();

    assert_eq!(fetched, created);
    assert_eq!(fetched.status, "active");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_network_round_trip_preserves_optional_ranges() {
    let fixture = PostgresFixture::start().await;
    let app = fixture.app();
    let request = CreateNetworkRequest {
        name: "v6_only".to_string(),
        ipv4_cidr: None,
        ipv6_cidr: Some("fd00::/8".to_string()),
    };

    let created: NetworkResponse = app.post_json("/network", &request).await.json();
    let fetched: NetworkResponse = app.get("/network/v6_only").await.json();

    assert_eq!(fetched, created);
    assert_eq!(fetched.ipv4_cidr, None);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_lists_follow_creation_order() {
    let fixture = PostgresFixture::start().await;
    let app = fixture.app();

    for name in ["zoe", "adam", "mia"] {
        app.post_json("/user", &CreateUserRequest::named(name)).await;
        app.post_json("/network", &CreateNetworkRequest::ipv4(name, "10.0.0.0/8"))
            .await;
    }

    let users: Vec<String> = app
        .get("/user/all")
        .await
        .json::<UserListResponse>()
        .users
        .into_iter()
        .map(|u| u.name)
        .collect();
    let networks: Vec<String> = app
        .get("/network")
        .await
        .json::<NetworkListResponse>()
        .networks
        .into_iter()
        .map(|n| n.name)
        .collect();

    assert_eq!(users, ["zoe", "adam", "mia"]);
    assert_eq!(networks, ["zoe", "adam", "mia"]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_concurrent_inserts_admit_exactly_one() {
    let fixture = PostgresFixture::start().await;
    let repo = Arc::new(PostgresUserRepository::new(fixture.pool.clone()));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.insert(
                    &RequestContext::new(),
                    CreateUserData {
                        name: "racer".to_string(),
                    },
                )
                .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(err) => {
                assert_eq!(err.kind(), ErrorKind::Validation);
                assert_eq!(err.safe_message(), "Username is already taken");
            }
        }
    }

    assert_eq!(successes, 1);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_cancelled_context_reports_system_error() {
    let fixture = PostgresFixture::start().await;
    let repo = PostgresUserRepository::new(fixture.pool.clone());
    let ctx = RequestContext::new();
    ctx.cancel();

    let err = repo
        .insert(
            &ctx,
            CreateUserData {
                name: "late".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::System);
    assert_eq!(err.safe_message(), "Unable to create new user due to a system error");
    let users = repo.list_all(&RequestContext::new()).await.unwrap();
    assert!(users.is_empty());
}
