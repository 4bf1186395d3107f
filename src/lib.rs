//! Student Management - 学生档案 CRUD 服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Student Context: 学生档案
//! - Department Context: 院系（只读引用）
//!
//! 应用层 (application/):
//! - Ports: 学生/院系仓储端口
//! - Services: StudentServicePort 及默认实现
//! - Queries: 学生检索条件
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: `/api/students` RESTful API
//! - Persistence: SQLite 存储
//! - Memory: 内存仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
