//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::RepositoryError;

/// 应用层错误
///
/// "记录不存在"不是错误：服务层以 `None` 表示，由 HTTP 层决定其含义。
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（包括存储层拒绝的引用约束）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误（存储不可用等，不做重试）
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConstraintViolation(msg) => Self::ValidationError(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}
