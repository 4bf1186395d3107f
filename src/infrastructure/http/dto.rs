//! Data Transfer Objects
//!
//! JSON 字段使用 camelCase，与既有前端保持一致

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::StudentFilter;
use crate::domain::department::{Department, DepartmentId};
use crate::domain::student::Student;
use crate::infrastructure::http::error::ApiError;

// ============================================================================
// Student DTOs
// ============================================================================

/// 院系引用（请求中只读取 idDepartment）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRef {
    pub id_department: i64,
}

/// 创建/更新学生请求体
///
/// `idStudent` 可以出现但会被忽略：创建时由存储分配，更新时以路径为准。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
}

impl StudentRequest {
    /// 转换为未持久化的 Student，并做必填字段检查
    pub fn into_student(self) -> Result<Student, ApiError> {
        let mut student = Student::default();
        student.first_name = self.first_name;
        student.last_name = self.last_name;
        student.email = self.email;
        student.phone = self.phone;
        student.date_of_birth = self.date_of_birth;
        student.address = self.address;
        student.department_id = self.department.map(|d| DepartmentId::new(d.id_department));

        student
            .validate()
            .map_err(|msg| ApiError::BadRequest(msg.to_string()))?;

        Ok(student)
    }
}

/// 学生响应体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id_student: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub department: Option<DepartmentRef>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id_student: student.id().map(|id| id.as_i64()),
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            phone: student.phone,
            date_of_birth: student.date_of_birth,
            address: student.address,
            department: student.department_id.map(|id| DepartmentRef {
                id_department: id.as_i64(),
            }),
        }
    }
}

/// 学生检索参数，必须且只能提供一个
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSearchParams {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_contains: Option<String>,
    pub department_id: Option<i64>,
    pub born_after: Option<NaiveDate>,
}

impl TryFrom<StudentSearchParams> for StudentFilter {
    type Error = ApiError;

    fn try_from(params: StudentSearchParams) -> Result<Self, Self::Error> {
        let mut filters = Vec::with_capacity(1);
        if let Some(email) = params.email {
            filters.push(StudentFilter::Email(email));
        }
        if let Some(fragment) = params.first_name {
            filters.push(StudentFilter::FirstNameContains(fragment));
        }
        if let Some(name) = params.last_name {
            filters.push(StudentFilter::LastName(name));
        }
        if let Some(fragment) = params.email_contains {
            filters.push(StudentFilter::EmailContains(fragment));
        }
        if let Some(id) = params.department_id {
            filters.push(StudentFilter::Department(DepartmentId::new(id)));
        }
        if let Some(date) = params.born_after {
            filters.push(StudentFilter::BornAfter(date));
        }

        match filters.len() {
            1 => Ok(filters.remove(0)),
            0 => Err(ApiError::BadRequest("One search parameter is required".to_string())),
            _ => Err(ApiError::BadRequest(
                "Only one search parameter is allowed".to_string(),
            )),
        }
    }
}

// ============================================================================
// Department DTOs
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id_department: Option<i64>,
    pub name: String,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub head: Option<String>,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id_department: department.id().map(|id| id.as_i64()),
            name: department.name,
            location: department.location,
            phone: department.phone,
            head: department.head,
        }
    }
}

/// 院系学生数
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStudentCount {
    pub department_id: i64,
    pub count: u64,
}
