//! HTTP 测试工具

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

use super::server::{create_app, ServerConfig};
use super::state::AppState;
use crate::infrastructure::memory::{InMemoryDepartmentRepository, InMemoryStudentRepository};

/// 内存仓储上的应用状态
pub(crate) fn memory_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        Arc::new(InMemoryStudentRepository::new()),
        Arc::new(InMemoryDepartmentRepository::new()),
    ))
}

pub(crate) struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// 通过完整路由（含 CORS 和中间件）发送一个请求
pub(crate) async fn oneshot(state: &Arc<AppState>, request: Request<Body>) -> Response {
    create_app(state.clone(), ServerConfig::default().cors_origin)
        .oneshot(request)
        .await
        .unwrap()
}

pub(crate) async fn send(
    state: &Arc<AppState>,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = oneshot(state, request).await;
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse { status, body }
}
