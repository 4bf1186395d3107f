//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod department_repo;
mod student_repo;

pub use database::*;
pub use department_repo::*;
pub use student_repo::*;

use crate::application::ports::RepositoryError;

/// sqlx 错误映射：外键约束失败视为约束错误，其余为数据库错误
fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            RepositoryError::ConstraintViolation(db_err.message().to_string())
        }
        _ => RepositoryError::DatabaseError(err.to_string()),
    }
}
