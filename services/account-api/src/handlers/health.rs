//! Health check handlers

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

/// GET /ready
pub async fn ready() -> &'static str {
    "READY"
}
