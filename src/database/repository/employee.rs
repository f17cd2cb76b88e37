use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Employee, KeyEmployee};

pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Most recent starters first
    pub async fn key_employees(&self, limit: i64) -> Result<Vec<KeyEmployee>, DatabaseError> {
        let rows = sqlx::query_as::<_, KeyEmployee>(
            r#"
            SELECT userid, firstname, surname, jobtitle
            FROM employeedetails
            ORDER BY companystartdate DESC NULLS LAST
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_userid(&self, userid: i32) -> Result<Employee, DatabaseError> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT userid, firstname, surname, jobtitle, email, companystartdate, managerid
            FROM employeedetails
            WHERE userid = $1
            "#,
        )
        .bind(userid)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("No employee found for userid {}", userid)))
    }
}
