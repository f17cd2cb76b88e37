use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub userid: i32,
    pub firstname: String,
    pub surname: String,
    pub jobtitle: Option<String>,
    pub email: Option<String>,
    pub companystartdate: Option<NaiveDate>,
    pub managerid: Option<i32>,
}

/// Directory card shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct KeyEmployee {
    pub userid: i32,
    pub firstname: String,
    pub surname: String,
    pub jobtitle: Option<String>,
}
