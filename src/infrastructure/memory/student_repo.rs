//! In-Memory Student Repository
//!
//! 不依赖数据库的仓储实现，用于测试服务层与 HTTP 层。
//! 不检查院系引用是否存在。

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{RepositoryError, StudentRepositoryPort};
use crate::domain::department::DepartmentId;
use crate::domain::student::{Student, StudentId};

/// 内存学生仓储
pub struct InMemoryStudentRepository {
    students: DashMap<StudentId, Student>,
    next_id: AtomicI64,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            students: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// 按 id 升序收集满足条件的学生
    fn collect_where<F>(&self, predicate: F) -> Vec<Student>
    where
        F: Fn(&Student) -> bool,
    {
        let mut students: Vec<Student> = self
            .students
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        students.sort_by_key(|s| s.id());
        students
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepositoryPort for InMemoryStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.collect_where(|_| true))
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, RepositoryError> {
        Ok(self.students.get(&id).map(|s| s.clone()))
    }

    async fn save(&self, student: &Student) -> Result<Student, RepositoryError> {
        let id = match student.id() {
            Some(id) => {
                // 显式 id 之后分配的 id 不能与之冲突
                self.next_id.fetch_max(id.as_i64() + 1, Ordering::SeqCst);
                id
            }
            None => StudentId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
        };

        let saved = student.clone().with_id(id);
        self.students.insert(id, saved.clone());
        tracing::debug!(student_id = %id, "Student stored in memory");
        Ok(saved)
    }

    async fn update(
        &self,
        id: StudentId,
        student: &Student,
    ) -> Result<Option<Student>, RepositoryError> {
        // 持有条目写锁完成替换，期间删除无法插入
        let Some(mut entry) = self.students.get_mut(&id) else {
            return Ok(None);
        };

        let updated = student.clone().with_id(id);
        *entry = updated.clone();
        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: StudentId) -> Result<(), RepositoryError> {
        self.students.remove(&id);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, RepositoryError> {
        Ok(self
            .collect_where(|s| s.email.as_deref() == Some(email))
            .into_iter()
            .next())
    }

    async fn find_by_first_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Student>, RepositoryError> {
        let fragment = fragment.to_lowercase();
        Ok(self.collect_where(|s| {
            s.first_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&fragment))
        }))
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.collect_where(|s| s.last_name.as_deref() == Some(last_name)))
    }

    async fn find_by_department_id(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.collect_where(|s| s.department_id == Some(department_id)))
    }

    async fn find_by_email_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.collect_where(|s| s.email.as_deref().is_some_and(|e| e.contains(fragment))))
    }

    async fn count_by_department_id(
        &self,
        department_id: DepartmentId,
    ) -> Result<u64, RepositoryError> {
        Ok(self
            .students
            .iter()
            .filter(|entry| entry.department_id == Some(department_id))
            .count() as u64)
    }

    async fn find_by_date_of_birth_after(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.collect_where(|s| s.date_of_birth.is_some_and(|dob| dob > date)))
    }
}
