//! HTTP Layer - 健康检查服务
//!
//! 独立于聊天流程，供托管平台探活

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use routes::create_routes;
pub use server::{HealthServer, ServerConfig};
