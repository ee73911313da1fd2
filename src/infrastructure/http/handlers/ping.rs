//! Ping Handler
//!
//! 存活探针，不依赖 Bot 状态

use axum::Json;
use serde::Serialize;

/// `GET /` 的固定响应体
pub const LIVENESS_BODY: &str = "Bot is running";

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// 根路径探活
pub async fn liveness() -> &'static str {
    LIVENESS_BODY
}

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
