//! 应用服务 - 入站端口
//!
//! HTTP 层只依赖 `StudentServicePort`，测试中可替换实现

mod student_service;

pub use student_service::{StudentService, StudentServicePort};
