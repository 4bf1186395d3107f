//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口（学生/院系仓储）
//! - services: 入站端口及学生服务实现
//! - queries: 学生检索条件
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationError;
pub use ports::{DepartmentRepositoryPort, RepositoryError, StudentRepositoryPort};
pub use queries::StudentFilter;
pub use services::{StudentService, StudentServicePort};
