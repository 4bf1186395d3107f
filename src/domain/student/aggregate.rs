//! Student Context - Aggregate Root

use chrono::NaiveDate;

use super::StudentId;
use crate::domain::department::DepartmentId;

/// Student 聚合根
///
/// 不变量:
/// - id 只能由存储在创建时分配一次，之后不可变
/// - 没有 id 的实例为"新建"，有 id 的实例为"已存在"
/// - 更新是整条记录替换，未提供的字段会被置空
///
/// department 引用必须指向已存在的院系，由存储层的外键约束保证。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    id: Option<StudentId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub department_id: Option<DepartmentId>,
}

impl Student {
    /// 创建新学生（尚未持久化，没有 id）
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// 绑定标识
    ///
    /// 存储层在分配 id 后调用；更新时由路径 id 覆盖请求体中的 id。
    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self
    }

    pub fn id(&self) -> Option<StudentId> {
        self.id
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// 必填字段检查（只做存在性校验）
    pub fn validate(&self) -> Result<(), &'static str> {
        if is_blank(&self.first_name) {
            return Err("firstName is required");
        }
        if is_blank(&self.last_name) {
            return Err("lastName is required");
        }
        if is_blank(&self.email) {
            return Err("email is required");
        }
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Student {
        Student::new("John", "Doe", "john.doe@esprit.tn")
            .with_phone("987-654-3210")
            .with_date_of_birth(NaiveDate::from_ymd_opt(2000, 5, 15).unwrap())
            .with_address("123 Main St, Tunis")
            .with_department(DepartmentId::new(1))
    }

    #[test]
    fn test_student_creation() {
        let student = john();

        assert!(student.is_new());
        assert_eq!(student.first_name.as_deref(), Some("John"));
        assert_eq!(student.last_name.as_deref(), Some("Doe"));
        assert_eq!(student.email.as_deref(), Some("john.doe@esprit.tn"));
        assert_eq!(student.phone.as_deref(), Some("987-654-3210"));
        assert_eq!(
            student.date_of_birth,
            NaiveDate::from_ymd_opt(2000, 5, 15)
        );
        assert_eq!(student.department_id, Some(DepartmentId::new(1)));
    }

    #[test]
    fn test_default_student_is_empty() {
        let student = Student::default();

        assert!(student.is_new());
        assert!(student.first_name.is_none());
        assert!(student.email.is_none());
        assert!(student.date_of_birth.is_none());
        assert!(student.department_id.is_none());
    }

    #[test]
    fn test_with_id_overwrites_existing_id() {
        let student = john().with_id(StudentId::new(7)).with_id(StudentId::new(3));

        assert!(!student.is_new());
        assert_eq!(student.id(), Some(StudentId::new(3)));
    }

    #[test]
    fn test_validate_requires_names_and_email() {
        assert!(john().validate().is_ok());

        let mut student = john();
        student.first_name = None;
        assert_eq!(student.validate(), Err("firstName is required"));

        let mut student = john();
        student.last_name = Some("   ".to_string());
        assert_eq!(student.validate(), Err("lastName is required"));

        let mut student = john();
        student.email = Some(String::new());
        assert_eq!(student.validate(), Err("email is required"));
    }

    #[test]
    fn test_optional_fields_are_not_required() {
        let student = Student::new("Valid", "Student", "valid@esprit.tn");
        assert!(student.validate().is_ok());
    }
}
