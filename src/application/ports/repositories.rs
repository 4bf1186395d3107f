//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::department::{Department, DepartmentId};
use crate::domain::student::{Student, StudentId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 外键等约束不满足（如引用了不存在的院系）
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Student Repository
// ============================================================================

/// Student Repository Port
#[async_trait]
pub trait StudentRepositoryPort: Send + Sync {
    /// 按插入顺序（id 升序）返回所有学生
    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError>;

    /// 根据 ID 查找学生
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, RepositoryError>;

    /// 保存学生
    ///
    /// - 没有 id：由存储分配 id，返回带 id 的记录
    /// - 有 id：整条替换该记录（不存在则以该 id 插入）
    async fn save(&self, student: &Student) -> Result<Student, RepositoryError>;

    /// 按 id 整条替换已有记录
    ///
    /// 记录不存在时返回 `Ok(None)`，不会新建记录
    async fn update(
        &self,
        id: StudentId,
        student: &Student,
    ) -> Result<Option<Student>, RepositoryError>;

    /// 删除学生（幂等，不存在时不报错）
    async fn delete_by_id(&self, id: StudentId) -> Result<(), RepositoryError>;

    /// 邮箱精确匹配
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, RepositoryError>;

    /// 名字包含片段（忽略大小写）
    async fn find_by_first_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Student>, RepositoryError>;

    /// 姓氏精确匹配
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Student>, RepositoryError>;

    /// 按院系查找
    async fn find_by_department_id(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Student>, RepositoryError>;

    /// 邮箱包含片段（区分大小写）
    async fn find_by_email_containing(&self, fragment: &str)
        -> Result<Vec<Student>, RepositoryError>;

    /// 统计院系学生数
    async fn count_by_department_id(
        &self,
        department_id: DepartmentId,
    ) -> Result<u64, RepositoryError>;

    /// 出生日期严格晚于给定日期
    async fn find_by_date_of_birth_after(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Student>, RepositoryError>;
}

// ============================================================================
// Department Repository
// ============================================================================

/// Department Repository Port
#[async_trait]
pub trait DepartmentRepositoryPort: Send + Sync {
    /// 保存院系（没有 id 时由存储分配）
    async fn save(&self, department: &Department) -> Result<Department, RepositoryError>;

    /// 根据 ID 查找院系
    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, RepositoryError>;

    /// 获取所有院系
    async fn find_all(&self) -> Result<Vec<Department>, RepositoryError>;
}
