//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 唯一允许的跨域来源
    pub cors_origin: HeaderValue,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8089,
            cors_origin: HeaderValue::from_static("http://localhost:4200"),
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16, cors_origin: HeaderValue) -> Self {
        Self {
            host: host.into(),
            port,
            cors_origin,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建完整应用（路由 + 中间件 + CORS）
pub fn create_app(state: Arc<AppState>, cors_origin: HeaderValue) -> Router {
    // CORS 配置 - 只允许一个固定来源
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    create_routes()
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    pub fn build_router(&self) -> Router {
        create_app(self.state.clone(), self.config.cors_origin.clone())
    }

    /// 启动服务器
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = self.build_router();
        let addr = self.config.addr();

        info!("Starting HTTP server on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::infrastructure::http::test_support::send;
    use crate::infrastructure::persistence::sqlite::{
        test_pool, SqliteDepartmentRepository, SqliteStudentRepository,
    };

    async fn sqlite_state() -> AppState {
        let pool = test_pool().await;
        AppState::new(
            Arc::new(SqliteStudentRepository::new(pool.clone())),
            Arc::new(SqliteDepartmentRepository::new(pool)),
        )
    }

    #[tokio::test]
    async fn test_ping() {
        let server = HttpServer::new(ServerConfig::default(), sqlite_state().await);
        let request = Request::builder()
            .uri("/api/ping")
            .body(Body::empty())
            .unwrap();

        let response = server.build_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_cors_uses_configured_origin() {
        let config = ServerConfig::new(
            "127.0.0.1",
            8089,
            HeaderValue::from_static("https://admin.esprit.tn"),
        );
        let server = HttpServer::new(config, sqlite_state().await);
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/students")
            .header(header::ORIGIN, "https://admin.esprit.tn")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .body(Body::empty())
            .unwrap();

        let response = server.build_router().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://admin.esprit.tn"
        );
    }

    #[tokio::test]
    async fn test_sqlite_backed_student_scenario() {
        let state = Arc::new(sqlite_state().await);
        let student = serde_json::json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@esprit.tn"
        });

        let created = send(&state, Method::POST, "/api/students", Some(student.clone())).await;
        assert_eq!(created.status, StatusCode::OK);
        assert_eq!(created.json()["idStudent"], 1);

        let fetched = send(&state, Method::GET, "/api/students/1", None).await;
        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.json()["firstName"], "John");

        let update_missing =
            send(&state, Method::PUT, "/api/students/999", Some(student)).await;
        assert_eq!(update_missing.status, StatusCode::NOT_FOUND);
        assert!(update_missing.body.is_empty());

        let deleted = send(&state, Method::DELETE, "/api/students/1", None).await;
        assert_eq!(deleted.status, StatusCode::OK);

        let gone = send(&state, Method::GET, "/api/students/1", None).await;
        assert_eq!(gone.status, StatusCode::NOT_FOUND);

        let list = send(&state, Method::GET, "/api/students", None).await;
        assert_eq!(list.json(), serde_json::json!([]));
    }
}
