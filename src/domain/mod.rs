//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Student Context: 学生档案管理
//! - Department Context: 院系（学生的只读引用目标）

pub mod department;
pub mod student;
