//! SQLite Department Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{DepartmentRepositoryPort, RepositoryError};
use crate::domain::department::{Department, DepartmentId};

/// SQLite Department Repository
pub struct SqliteDepartmentRepository {
    pool: DbPool,
}

impl SqliteDepartmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct DepartmentRow {
    id: i64,
    name: String,
    location: Option<String>,
    phone: Option<String>,
    head: Option<String>,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        let mut department = Department::new(row.name).with_id(DepartmentId::new(row.id));
        department.location = row.location;
        department.phone = row.phone;
        department.head = row.head;
        department
    }
}

#[async_trait]
impl DepartmentRepositoryPort for SqliteDepartmentRepository {
    async fn save(&self, department: &Department) -> Result<Department, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO departments (id, name, location, phone, head)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                location = excluded.location,
                phone = excluded.phone,
                head = excluded.head
            "#,
        )
        .bind(department.id().map(|id| id.as_i64()))
        .bind(&department.name)
        .bind(&department.location)
        .bind(&department.phone)
        .bind(&department.head)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let id = department
            .id()
            .unwrap_or_else(|| DepartmentId::new(result.last_insert_rowid()));

        Ok(department.clone().with_id(id))
    }

    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, RepositoryError> {
        let row: Option<DepartmentRow> = sqlx::query_as(
            "SELECT id, name, location, phone, head FROM departments WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Department::from))
    }

    async fn find_all(&self) -> Result<Vec<Department>, RepositoryError> {
        let rows: Vec<DepartmentRow> = sqlx::query_as(
            "SELECT id, name, location, phone, head FROM departments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Department::from).collect())
    }
}
