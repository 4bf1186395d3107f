//! In-Memory Department Repository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{DepartmentRepositoryPort, RepositoryError};
use crate::domain::department::{Department, DepartmentId};

/// 内存院系仓储
pub struct InMemoryDepartmentRepository {
    departments: DashMap<DepartmentId, Department>,
    next_id: AtomicI64,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self {
            departments: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryDepartmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DepartmentRepositoryPort for InMemoryDepartmentRepository {
    async fn save(&self, department: &Department) -> Result<Department, RepositoryError> {
        let id = match department.id() {
            Some(id) => {
                self.next_id.fetch_max(id.as_i64() + 1, Ordering::SeqCst);
                id
            }
            None => DepartmentId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
        };

        let saved = department.clone().with_id(id);
        self.departments.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, RepositoryError> {
        Ok(self.departments.get(&id).map(|d| d.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Department>, RepositoryError> {
        let mut departments: Vec<Department> =
            self.departments.iter().map(|e| e.value().clone()).collect();
        departments.sort_by_key(|d| d.id());
        Ok(departments)
    }
}
