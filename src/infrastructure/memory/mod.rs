//! Memory Layer - 内存仓储
//!
//! 实现学生与院系仓储端口，不依赖数据库

mod department_repo;
mod student_repo;

pub use department_repo::InMemoryDepartmentRepository;
pub use student_repo::InMemoryStudentRepository;
