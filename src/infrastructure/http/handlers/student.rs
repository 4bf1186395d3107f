//! Student HTTP Handlers
//!
//! `/api/students` 资源约定:
//! - 查无记录一律返回 404 空响应体，不返回 500
//! - 删除前在此处检查存在性
//! - 更新由仓储原子完成，目标缺失时返回 404，不会新建记录
//! - 更新时路径 id 覆盖请求体中的 id

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::StudentFilter;
use crate::domain::student::StudentId;
use crate::infrastructure::http::dto::{StudentRequest, StudentResponse, StudentSearchParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取所有学生
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = state.student_service.get_all_students().await?;
    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}

/// 获取学生详情
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    let Path(id) = path?;
    let id = StudentId::new(id);

    let student = state
        .student_service
        .get_student_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Student", id))?;

    Ok(Json(StudentResponse::from(student)))
}

/// 创建学生
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StudentRequest>, JsonRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    let Json(request) = payload?;
    let student = request.into_student()?;

    let saved = state.student_service.save_student(student).await?;

    Ok(Json(StudentResponse::from(saved)))
}

/// 更新学生（整条替换）
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StudentRequest>, JsonRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    let Path(id) = path?;
    let id = StudentId::new(id);
    let Json(request) = payload?;
    let student = request.into_student()?;

    let updated = state
        .student_service
        .update_student(id, student)
        .await?
        .ok_or_else(|| ApiError::not_found("Student", id))?;

    Ok(Json(StudentResponse::from(updated)))
}

/// 删除学生
///
/// 仓储层删除是幂等的，这里仍对不存在的 id 返回 404。
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    let id = StudentId::new(id);

    if state.student_service.get_student_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Student", id));
    }

    state.student_service.delete_student(id).await?;

    Ok(StatusCode::OK)
}

/// 按单个条件检索学生
pub async fn search_students(
    State(state): State<Arc<AppState>>,
    params: Result<Query<StudentSearchParams>, QueryRejection>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let Query(params) = params?;
    let filter = StudentFilter::try_from(params)?;

    let students = state.student_service.search_students(filter).await?;

    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}
