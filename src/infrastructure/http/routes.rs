//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                               GET     健康检查
//! - /api/students                           GET     列出所有学生
//! - /api/students                           POST    创建学生
//! - /api/students/search                    GET     按单个条件检索学生
//! - /api/students/:id                       GET     获取学生
//! - /api/students/:id                       PUT     更新学生（整条替换）
//! - /api/students/:id                       DELETE  删除学生
//! - /api/departments                        GET     列出院系
//! - /api/departments/:id                    GET     获取院系
//! - /api/departments/:id/students/count     GET     统计院系学生数

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(student_routes())
        .merge(department_routes())
}

/// Student 路由
fn student_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route("/students/search", get(handlers::search_students))
        .route(
            "/students/:id",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
}

/// Department 路由（只读）
fn department_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/departments", get(handlers::list_departments))
        .route("/departments/:id", get(handlers::get_department))
        .route(
            "/departments/:id/students/count",
            get(handlers::count_department_students),
        )
}
