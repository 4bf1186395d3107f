//! SQLite Student Repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{RepositoryError, StudentRepositoryPort};
use crate::domain::department::DepartmentId;
use crate::domain::student::{Student, StudentId};

const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_STUDENTS: &str = "SELECT id, first_name, last_name, email, phone, date_of_birth, address, department_id FROM students";

/// SQLite Student Repository
pub struct SqliteStudentRepository {
    pool: DbPool,
}

impl SqliteStudentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StudentRow {
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    date_of_birth: Option<String>,
    address: Option<String>,
    department_id: Option<i64>,
}

impl TryFrom<StudentRow> for Student {
    type Error = RepositoryError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        let date_of_birth = row
            .date_of_birth
            .map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT))
            .transpose()
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        let mut student = Student::default().with_id(StudentId::new(row.id));
        student.first_name = row.first_name;
        student.last_name = row.last_name;
        student.email = row.email;
        student.phone = row.phone;
        student.date_of_birth = date_of_birth;
        student.address = row.address;
        student.department_id = row.department_id.map(DepartmentId::new);
        Ok(student)
    }
}

fn into_students(rows: Vec<StudentRow>) -> Result<Vec<Student>, RepositoryError> {
    rows.into_iter().map(Student::try_from).collect()
}

#[async_trait]
impl StudentRepositoryPort for SqliteStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        let rows: Vec<StudentRow> = sqlx::query_as(&format!("{SELECT_STUDENTS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        into_students(rows)
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, RepositoryError> {
        let row: Option<StudentRow> = sqlx::query_as(&format!("{SELECT_STUDENTS} WHERE id = ?"))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(Student::try_from).transpose()
    }

    async fn save(&self, student: &Student) -> Result<Student, RepositoryError> {
        // id 为 NULL 时由 SQLite 分配；否则整条替换（不存在则按该 id 插入）
        let result = sqlx::query(
            r#"
            INSERT INTO students (id, first_name, last_name, email, phone, date_of_birth, address, department_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                email = excluded.email,
                phone = excluded.phone,
                date_of_birth = excluded.date_of_birth,
                address = excluded.address,
                department_id = excluded.department_id
            "#,
        )
        .bind(student.id().map(|id| id.as_i64()))
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(student.date_of_birth.map(|d| d.format(DATE_FORMAT).to_string()))
        .bind(&student.address)
        .bind(student.department_id.map(|id| id.as_i64()))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let id = student
            .id()
            .unwrap_or_else(|| StudentId::new(result.last_insert_rowid()));

        Ok(student.clone().with_id(id))
    }

    async fn update(
        &self,
        id: StudentId,
        student: &Student,
    ) -> Result<Option<Student>, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE students SET
                first_name = ?,
                last_name = ?,
                email = ?,
                phone = ?,
                date_of_birth = ?,
                address = ?,
                department_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(student.date_of_birth.map(|d| d.format(DATE_FORMAT).to_string()))
        .bind(&student.address)
        .bind(student.department_id.map(|id| id.as_i64()))
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(student.clone().with_id(id)))
    }

    async fn delete_by_id(&self, id: StudentId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, RepositoryError> {
        let row: Option<StudentRow> =
            sqlx::query_as(&format!("{SELECT_STUDENTS} WHERE email = ? ORDER BY id LIMIT 1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        row.map(Student::try_from).transpose()
    }

    async fn find_by_first_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Student>, RepositoryError> {
        // SQLite 的 lower() 只处理 ASCII，大小写折叠在这里完成
        let fragment = fragment.to_lowercase();
        let rows: Vec<StudentRow> = sqlx::query_as(&format!(
            "{SELECT_STUDENTS} WHERE first_name IS NOT NULL ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(into_students(rows)?
            .into_iter()
            .filter(|s| {
                s.first_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&fragment))
            })
            .collect())
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Student>, RepositoryError> {
        let rows: Vec<StudentRow> =
            sqlx::query_as(&format!("{SELECT_STUDENTS} WHERE last_name = ? ORDER BY id"))
                .bind(last_name)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        into_students(rows)
    }

    async fn find_by_department_id(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Student>, RepositoryError> {
        let rows: Vec<StudentRow> =
            sqlx::query_as(&format!("{SELECT_STUDENTS} WHERE department_id = ? ORDER BY id"))
                .bind(department_id.as_i64())
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        into_students(rows)
    }

    async fn find_by_email_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Student>, RepositoryError> {
        // instr 区分大小写（LIKE 在 SQLite 中对 ASCII 不区分）
        let rows: Vec<StudentRow> =
            sqlx::query_as(&format!("{SELECT_STUDENTS} WHERE instr(email, ?) > 0 ORDER BY id"))
                .bind(fragment)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        into_students(rows)
    }

    async fn count_by_department_id(
        &self,
        department_id: DepartmentId,
    ) -> Result<u64, RepositoryError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM students WHERE department_id = ?")
                .bind(department_id.as_i64())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(count as u64)
    }

    async fn find_by_date_of_birth_after(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Student>, RepositoryError> {
        // ISO 日期文本的字典序与日期顺序一致
        let rows: Vec<StudentRow> =
            sqlx::query_as(&format!("{SELECT_STUDENTS} WHERE date_of_birth > ? ORDER BY id"))
                .bind(date.format(DATE_FORMAT).to_string())
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        into_students(rows)
    }
}
