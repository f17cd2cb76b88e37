use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Account, AccountCredentials};

pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn credentials_for(&self, username: &str) -> Result<Option<AccountCredentials>, DatabaseError> {
        let row = sqlx::query_as::<_, AccountCredentials>(
            "SELECT userid, password FROM account WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn find_by_id(&self, userid: i32) -> Result<Account, DatabaseError> {
        sqlx::query_as::<_, Account>("SELECT userid, username FROM account WHERE userid = $1")
            .bind(userid)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound("User not found".to_string()))
    }

    /// Insert a new account whose password expires `expiry_days` from today
    pub async fn create(&self, username: &str, password_hash: &str, expiry_days: i32) -> Result<i32, DatabaseError> {
        let userid: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO account (username, password, passwordexpirydate)
            VALUES ($1, $2, CURRENT_DATE + $3::int)
            RETURNING userid
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(expiry_days)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_write(e, format!("Username '{}' is already taken", username)))?;
        Ok(userid)
    }
}
