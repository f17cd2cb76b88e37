use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public view of a row in `account`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub userid: i32,
    pub username: String,
}

/// Login lookup; the hash never leaves the service layer
#[derive(Debug, Clone, FromRow)]
pub struct AccountCredentials {
    pub userid: i32,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}
