//! Application State
//!
//! 处理器只依赖端口（trait 对象），不依赖具体实现

use std::sync::Arc;

use crate::application::{
    DepartmentRepositoryPort, StudentRepositoryPort, StudentService, StudentServicePort,
};

/// 应用状态
pub struct AppState {
    pub student_service: Arc<dyn StudentServicePort>,
    pub department_repo: Arc<dyn DepartmentRepositoryPort>,
}

impl AppState {
    /// 基于仓储创建默认服务
    pub fn new(
        student_repo: Arc<dyn StudentRepositoryPort>,
        department_repo: Arc<dyn DepartmentRepositoryPort>,
    ) -> Self {
        Self {
            student_service: Arc::new(StudentService::new(student_repo)),
            department_repo,
        }
    }

    /// 使用自定义服务实现（测试替换）
    pub fn with_service(
        student_service: Arc<dyn StudentServicePort>,
        department_repo: Arc<dyn DepartmentRepositoryPort>,
    ) -> Self {
        Self {
            student_service,
            department_repo,
        }
    }
}
