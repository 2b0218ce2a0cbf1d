//! Liveness endpoint

/// GET /healthcheck - Answers `.` while the process is serving requests
pub async fn healthcheck() -> &'static str {
    "."
}
