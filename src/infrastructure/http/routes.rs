//! HTTP Routes
//!
//! Endpoints:
//! - /       GET  存活探针（纯文本）
//! - /ping   GET  健康检查（JSON，含版本号）

use axum::{routing::get, Router};

use super::handlers;

/// 创建所有路由
pub fn create_routes() -> Router {
    Router::new()
        .route("/", get(handlers::liveness))
        .route("/ping", get(handlers::ping))
}
