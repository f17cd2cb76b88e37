use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::SecurityConfig;
use crate::database::manager::DatabaseError;
use crate::database::repository::AccountRepository;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Account creation and password checks. bcrypt work runs on the blocking
/// pool so it never stalls the async workers.
pub struct AccountService {
    accounts: AccountRepository,
    bcrypt_cost: u32,
    password_expiry_days: i32,
}

impl AccountService {
    pub fn new(pool: PgPool, security: &SecurityConfig) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
            bcrypt_cost: security.bcrypt_cost,
            password_expiry_days: security.password_expiry_days,
        }
    }

    /// Returns the user id when the password matches the stored hash
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<i32, AccountError> {
        let (username, password) = require_credentials(username, password)?;

        let Some(credentials) = self.accounts.credentials_for(username).await? else {
            warn!("Login rejected: unknown username '{}'", username);
            return Err(AccountError::InvalidCredentials);
        };

        let candidate = password.to_string();
        let hash = credentials.password_hash;
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(candidate, &hash))
            .await
            .map_err(|e| AccountError::Hashing(e.to_string()))?
            .map_err(|e| AccountError::Hashing(e.to_string()))?;

        if !matches {
            warn!("Login rejected: bad password for '{}'", username);
            return Err(AccountError::InvalidCredentials);
        }

        info!("User {} ({}) authenticated", credentials.userid, username);
        Ok(credentials.userid)
    }

    pub async fn create_user(&self, username: &str, password: &str) -> Result<i32, AccountError> {
        let (username, password) = require_credentials(username, password)?;

        let plain = password.to_string();
        let cost = self.bcrypt_cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|e| AccountError::Hashing(e.to_string()))?
            .map_err(|e| AccountError::Hashing(e.to_string()))?;

        let userid = self.accounts.create(username, &hash, self.password_expiry_days).await?;
        info!("Created account {} for '{}'", userid, username);
        Ok(userid)
    }
}

fn require_credentials<'a>(username: &'a str, password: &'a str) -> Result<(&'a str, &'a str), AccountError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AccountError::MissingCredentials);
    }
    Ok((username, password))
}
