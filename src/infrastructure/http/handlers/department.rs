//! Department HTTP Handlers（只读）

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::department::DepartmentId;
use crate::infrastructure::http::dto::{DepartmentResponse, DepartmentStudentCount};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取院系列表
pub async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let departments = state.department_repo.find_all().await?;
    Ok(Json(
        departments.into_iter().map(DepartmentResponse::from).collect(),
    ))
}

/// 获取院系详情
pub async fn get_department(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let Path(id) = path?;
    let id = DepartmentId::new(id);

    let department = state
        .department_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Department", id))?;

    Ok(Json(DepartmentResponse::from(department)))
}

/// 统计院系学生数
pub async fn count_department_students(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DepartmentStudentCount>, ApiError> {
    let Path(id) = path?;
    let id = DepartmentId::new(id);

    if state.department_repo.find_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("Department", id));
    }

    let count = state.student_service.count_students_in_department(id).await?;

    Ok(Json(DepartmentStudentCount {
        department_id: id.as_i64(),
        count,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use std::sync::Arc;

    use crate::application::DepartmentRepositoryPort;
    use crate::domain::department::Department;
    use crate::infrastructure::http::state::AppState;
    use crate::infrastructure::http::test_support::send;
    use crate::infrastructure::persistence::sqlite::{
        test_pool, SqliteDepartmentRepository, SqliteStudentRepository,
    };

    /// SQLite 内存库，院系引用受外键约束
    async fn sqlite_state() -> (Arc<AppState>, Arc<SqliteDepartmentRepository>) {
        let pool = test_pool().await;
        let departments = Arc::new(SqliteDepartmentRepository::new(pool.clone()));
        let state = AppState::new(
            Arc::new(SqliteStudentRepository::new(pool)),
            departments.clone(),
        );
        (Arc::new(state), departments)
    }

    #[tokio::test]
    async fn test_get_and_list_departments() {
        let (state, departments) = sqlite_state().await;
        departments
            .save(&Department::new("Computer Science").with_head("Dr. Smith"))
            .await
            .unwrap();

        let list = send(&state, Method::GET, "/api/departments", None).await;
        assert_eq!(list.status, StatusCode::OK);
        assert_eq!(list.json()[0]["name"], "Computer Science");

        let one = send(&state, Method::GET, "/api/departments/1", None).await;
        assert_eq!(one.json()["idDepartment"], 1);
        assert_eq!(one.json()["head"], "Dr. Smith");

        let missing = send(&state, Method::GET, "/api/departments/9", None).await;
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert!(missing.body.is_empty());
    }

    #[tokio::test]
    async fn test_count_department_students() {
        let (state, departments) = sqlite_state().await;
        departments.save(&Department::new("Computer Science")).await.unwrap();

        for i in 0..2 {
            let created = send(
                &state,
                Method::POST,
                "/api/students",
                Some(json!({
                    "firstName": format!("Student{}", i),
                    "lastName": "Dept1",
                    "email": format!("student{}@esprit.tn", i),
                    "department": {"idDepartment": 1}
                })),
            )
            .await;
            assert_eq!(created.status, StatusCode::OK);
            assert_eq!(created.json()["department"]["idDepartment"], 1);
        }

        let count = send(&state, Method::GET, "/api/departments/1/students/count", None).await;
        assert_eq!(count.status, StatusCode::OK);
        assert_eq!(count.json(), json!({"departmentId": 1, "count": 2}));

        let missing = send(&state, Method::GET, "/api/departments/2/students/count", None).await;
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_department_reference_is_bad_request() {
        let (state, _) = sqlite_state().await;

        let response = send(
            &state,
            Method::POST,
            "/api/students",
            Some(json!({
                "firstName": "Lost",
                "lastName": "Student",
                "email": "lost@esprit.tn",
                "department": {"idDepartment": 77}
            })),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);

        let list = send(&state, Method::GET, "/api/students", None).await;
        assert_eq!(list.json(), json!([]));
    }
}
