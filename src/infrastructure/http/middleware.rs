//! HTTP Middleware
//!
//! 请求日志中间件：4xx 记 warn，5xx 记 error，其余记 debug

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 按响应状态码分级记录请求日志
///
/// 404 是预期结果（查无记录），同样按 4xx 记录，便于排查前端调用。
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP request handled"
        );
    }

    response
}
