//! Student Service
//!
//! 仓储之上的薄门面：只做委托，以及把"查无记录"表示为 `None`。
//! 删除前的存在性检查由 HTTP 层负责；更新由仓储原子完成。

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::StudentRepositoryPort;
use crate::application::queries::StudentFilter;
use crate::domain::department::DepartmentId;
use crate::domain::student::{Student, StudentId};

/// Student Service Port
#[async_trait]
pub trait StudentServicePort: Send + Sync {
    async fn get_all_students(&self) -> Result<Vec<Student>, ApplicationError>;

    /// 不存在时返回 `Ok(None)`
    async fn get_student_by_id(&self, id: StudentId) -> Result<Option<Student>, ApplicationError>;

    async fn save_student(&self, student: Student) -> Result<Student, ApplicationError>;

    /// 替换已有记录；目标不存在时返回 `Ok(None)`，不会新建
    async fn update_student(
        &self,
        id: StudentId,
        student: Student,
    ) -> Result<Option<Student>, ApplicationError>;

    /// 不做存在性检查
    async fn delete_student(&self, id: StudentId) -> Result<(), ApplicationError>;

    async fn search_students(&self, filter: StudentFilter)
        -> Result<Vec<Student>, ApplicationError>;

    async fn count_students_in_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<u64, ApplicationError>;
}

/// 默认实现
pub struct StudentService {
    student_repo: Arc<dyn StudentRepositoryPort>,
}

impl StudentService {
    pub fn new(student_repo: Arc<dyn StudentRepositoryPort>) -> Self {
        Self { student_repo }
    }
}

#[async_trait]
impl StudentServicePort for StudentService {
    async fn get_all_students(&self) -> Result<Vec<Student>, ApplicationError> {
        Ok(self.student_repo.find_all().await?)
    }

    async fn get_student_by_id(&self, id: StudentId) -> Result<Option<Student>, ApplicationError> {
        Ok(self.student_repo.find_by_id(id).await?)
    }

    async fn save_student(&self, student: Student) -> Result<Student, ApplicationError> {
        let saved = self.student_repo.save(&student).await?;

        if let Some(id) = saved.id() {
            tracing::info!(
                student_id = %id,
                created = student.is_new(),
                "Student saved"
            );
        }

        Ok(saved)
    }

    async fn update_student(
        &self,
        id: StudentId,
        student: Student,
    ) -> Result<Option<Student>, ApplicationError> {
        let updated = self.student_repo.update(id, &student).await?;

        match &updated {
            Some(_) => tracing::info!(student_id = %id, "Student updated"),
            None => tracing::debug!(student_id = %id, "Update target missing"),
        }

        Ok(updated)
    }

    async fn delete_student(&self, id: StudentId) -> Result<(), ApplicationError> {
        self.student_repo.delete_by_id(id).await?;
        tracing::info!(student_id = %id, "Student deleted");
        Ok(())
    }

    async fn search_students(
        &self,
        filter: StudentFilter,
    ) -> Result<Vec<Student>, ApplicationError> {
        tracing::debug!(filter = %filter, "Searching students");

        let students: Vec<Student> = match filter {
            StudentFilter::Email(email) => self
                .student_repo
                .find_by_email(&email)
                .await?
                .into_iter()
                .collect(),
            StudentFilter::FirstNameContains(fragment) => {
                self.student_repo
                    .find_by_first_name_containing_ignore_case(&fragment)
                    .await?
            }
            StudentFilter::LastName(name) => self.student_repo.find_by_last_name(&name).await?,
            StudentFilter::EmailContains(fragment) => {
                self.student_repo.find_by_email_containing(&fragment).await?
            }
            StudentFilter::Department(department_id) => {
                self.student_repo.find_by_department_id(department_id).await?
            }
            StudentFilter::BornAfter(date) => {
                self.student_repo.find_by_date_of_birth_after(date).await?
            }
        };

        Ok(students)
    }

    async fn count_students_in_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<u64, ApplicationError> {
        Ok(self.student_repo.count_by_department_id(department_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::infrastructure::memory::InMemoryStudentRepository;

    fn service() -> (StudentService, Arc<InMemoryStudentRepository>) {
        let repo = Arc::new(InMemoryStudentRepository::new());
        (StudentService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_get_all_students() {
        let (service, _) = service();
        service
            .save_student(Student::new("John", "Doe", "john.doe@esprit.tn"))
            .await
            .unwrap();
        service
            .save_student(Student::new("Jane", "Smith", "jane.smith@esprit.tn"))
            .await
            .unwrap();

        let students = service.get_all_students().await.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].first_name.as_deref(), Some("John"));
        assert_eq!(students[1].first_name.as_deref(), Some("Jane"));
    }

    #[tokio::test]
    async fn test_get_student_by_id_not_found_is_none() {
        let (service, _) = service();
        let result = service.get_student_by_id(StudentId::new(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_get_returns_it() {
        let (service, _) = service();
        let saved = service
            .save_student(Student::new("New", "Student", "new.student@esprit.tn"))
            .await
            .unwrap();

        let id = saved.id().expect("id assigned");
        let found = service.get_student_by_id(id).await.unwrap().unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn test_update_student_missing_is_none() {
        let (service, repo) = service();
        let saved = service
            .save_student(Student::new("John", "Doe", "john.doe@esprit.tn"))
            .await
            .unwrap();
        let id = saved.id().unwrap();

        let updated = service
            .update_student(id, Student::new("Johnny", "Doe", "john.doe@esprit.tn"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.first_name.as_deref(), Some("Johnny"));

        let missing = service
            .update_student(StudentId::new(99), Student::new("X", "Y", "x@esprit.tn"))
            .await
            .unwrap();
        assert!(missing.is_none());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_does_not_check_existence() {
        let (service, repo) = service();
        service
            .save_student(Student::new("Keep", "Me", "keep@esprit.tn"))
            .await
            .unwrap();

        service.delete_student(StudentId::new(42)).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_by_email_yields_at_most_one() {
        let (service, _) = service();
        service
            .save_student(Student::new("John", "Doe", "john.doe@esprit.tn"))
            .await
            .unwrap();

        let found = service
            .search_students(StudentFilter::Email("john.doe@esprit.tn".into()))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        let missing = service
            .search_students(StudentFilter::Email("nobody@esprit.tn".into()))
            .await
            .unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_search_delegates_each_filter() {
        let (service, _) = service();
        let dept = DepartmentId::new(1);
        service
            .save_student(
                Student::new("John", "Doe", "john1@esprit.tn")
                    .with_department(dept)
                    .with_date_of_birth(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap()),
            )
            .await
            .unwrap();
        service
            .save_student(
                Student::new("Johnny", "Smith", "johnny@gmail.com")
                    .with_date_of_birth(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()),
            )
            .await
            .unwrap();

        let by_name = service
            .search_students(StudentFilter::FirstNameContains("JOHN".into()))
            .await
            .unwrap();
        assert_eq!(by_name.len(), 2);

        let by_last = service
            .search_students(StudentFilter::LastName("Smith".into()))
            .await
            .unwrap();
        assert_eq!(by_last.len(), 1);

        let by_domain = service
            .search_students(StudentFilter::EmailContains("esprit.tn".into()))
            .await
            .unwrap();
        assert_eq!(by_domain.len(), 1);

        let by_dept = service
            .search_students(StudentFilter::Department(dept))
            .await
            .unwrap();
        assert_eq!(by_dept.len(), 1);

        let young = service
            .search_students(StudentFilter::BornAfter(
                NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            ))
            .await
            .unwrap();
        assert_eq!(young.len(), 1);
        assert_eq!(young[0].first_name.as_deref(), Some("John"));

        assert_eq!(service.count_students_in_department(dept).await.unwrap(), 1);
    }
}
