//! HTTP Middleware
//!
//! 探活请求日志：成功的探针只记 debug，非 2xx 记 warn/error

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 记录每次探活请求的状态码与耗时
pub async fn probe_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, elapsed_ms, "Probe failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %path, status, elapsed_ms, "Unexpected probe request");
    } else {
        tracing::debug!(%method, %path, status, elapsed_ms, "Probe answered");
    }

    response
}
