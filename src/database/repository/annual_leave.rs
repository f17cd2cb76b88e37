use chrono::NaiveDate;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::annual_leave::LeaveDayRow;
use crate::database::models::{LeaveDay, LeaveRequest, LeaveStatus};

pub struct LeaveRepository {
    pool: PgPool,
}

impl LeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Leave days in `[from, until)`
    pub async fn days_between(&self, userid: i32, from: NaiveDate, until: NaiveDate) -> Result<Vec<LeaveDay>, DatabaseError> {
        let rows = sqlx::query_as::<_, LeaveDayRow>(
            r#"
            SELECT date, approval_status
            FROM annualleave
            WHERE userid = $1
              AND date >= $2
              AND date < $3
            ORDER BY date
            "#,
        )
        .bind(userid)
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(LeaveDay::from).collect())
    }

    pub async fn status_on(&self, userid: i32, date: NaiveDate) -> Result<LeaveStatus, DatabaseError> {
        let status = sqlx::query_scalar::<_, String>(
            "SELECT approval_status FROM annualleave WHERE userid = $1 AND date = $2",
        )
        .bind(userid)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(status.map(|s| LeaveStatus::from_db(&s)).unwrap_or(LeaveStatus::Unknown))
    }

    /// Mark each date as pending approval, creating rows that don't exist yet
    pub async fn request_days(&self, userid: i32, dates: &[NaiveDate]) -> Result<(), DatabaseError> {
        let pending = LeaveStatus::PendingApproval.as_str();
        let mut tx = self.pool.begin().await?;
        for date in dates {
            sqlx::query(
                r#"
                UPDATE annualleave
                SET approval_status = $3
                WHERE userid = $1 AND date = $2
                "#,
            )
            .bind(userid)
            .bind(date)
            .bind(pending)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                r#"
                INSERT INTO annualleave (userid, date, approval_status)
                SELECT $1, $2, $3
                WHERE NOT EXISTS (
                    SELECT 1 FROM annualleave WHERE userid = $1 AND date = $2
                )
                "#,
            )
            .bind(userid)
            .bind(date)
            .bind(pending)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    pub async fn cancel_days(&self, userid: i32, dates: &[NaiveDate]) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            DELETE FROM annualleave
            WHERE userid = $1
              AND date = ANY($2)
            "#,
        )
        .bind(userid)
        .bind(dates)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn pending_for_manager(&self, managerid: i32) -> Result<Vec<LeaveRequest>, DatabaseError> {
        let rows = sqlx::query_as::<_, LeaveRequest>(
            r#"
            SELECT a.leaveentryid, a.userid, a.date, a.description
            FROM annualleave a
            INNER JOIN employeedetails e ON a.userid = e.userid
            WHERE e.managerid = $1
              AND a.approval_status = $2
            ORDER BY a.date, a.userid
            "#,
        )
        .bind(managerid)
        .bind(LeaveStatus::PendingApproval.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Decide a direct report's leave entry
    pub async fn set_status(&self, managerid: i32, entry_id: i32, status: LeaveStatus) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE annualleave a
            SET approval_status = $3
            FROM employeedetails e
            WHERE a.userid = e.userid
              AND e.managerid = $1
              AND a.leaveentryid = $2
            "#,
        )
        .bind(managerid)
        .bind(entry_id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Leave entry {} not found", entry_id)));
        }
        Ok(())
    }
}
