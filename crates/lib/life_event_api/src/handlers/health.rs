//! Health check handler.

/// `GET /` — liveness probe.
pub async fn health_handler() -> &'static str {
    "Life Event is sitting"
}
