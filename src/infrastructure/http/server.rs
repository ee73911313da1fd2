//! HTTP Server
//!
//! Axum 健康检查服务器启动和配置

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::probe_logging_middleware;
use super::routes::create_routes;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 健康检查服务器
pub struct HealthServer {
    config: ServerConfig,
}

impl HealthServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// 构建 Router
    fn build_router(&self) -> Router {
        create_routes()
            .layer(middleware::from_fn(probe_logging_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// 绑定端口，绑定失败直接返回错误
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr).await?;
        info!("Health server listening on {}", addr);
        Ok(listener)
    }

    /// 在已绑定的端口上提供服务（带优雅关闭）
    pub async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        shutdown_signal: F,
    ) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal)
            .await
    }
}
