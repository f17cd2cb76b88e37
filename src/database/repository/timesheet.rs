use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::debug;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewTimesheetEntry, PendingTimesheet, TimesheetEntry};
use crate::services::allocation_service::TimesheetStore;

pub struct TimesheetRepository {
    pool: PgPool,
}

impl TimesheetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn entries_between(
        &self,
        userid: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TimesheetEntry>, DatabaseError> {
        let rows = sqlx::query_as::<_, TimesheetEntry>(
            r#"
            SELECT bookingcode, date, starttime::text AS starttime, endtime::text AS endtime, approved
            FROM timesheets
            WHERE userid = $1
              AND date BETWEEN $2 AND $3
            ORDER BY date, starttime
            "#,
        )
        .bind(userid)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert all rows or none
    pub async fn insert_many(&self, userid: i32, entries: &[NewTimesheetEntry]) -> Result<u64, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO timesheets (userid, bookingcode, date, starttime, endtime)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(userid)
            .bind(&entry.booking_code)
            .bind(entry.date)
            .bind(entry.start_time)
            .bind(entry.end_time)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        debug!("Inserted {} timesheet rows for user {}", entries.len(), userid);
        Ok(entries.len() as u64)
    }

    /// Distinct booking codes ordered by the latest day each was used
    pub async fn recent_booking_codes(&self, userid: i32, limit: i64) -> Result<Vec<String>, DatabaseError> {
        let codes = sqlx::query_scalar::<_, String>(
            r#"
            SELECT bookingcode
            FROM timesheets
            WHERE userid = $1
            GROUP BY bookingcode
            ORDER BY MAX(date) DESC
            LIMIT $2
            "#,
        )
        .bind(userid)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(codes)
    }

    pub async fn pending_for_manager(&self, managerid: i32) -> Result<Vec<PendingTimesheet>, DatabaseError> {
        let rows = sqlx::query_as::<_, PendingTimesheet>(
            r#"
            SELECT t.timesheetentryid, t.userid, t.bookingcode, t.date,
                   t.starttime::text AS starttime, t.endtime::text AS endtime
            FROM timesheets t
            INNER JOIN employeedetails e ON t.userid = e.userid
            WHERE t.approved <> TRUE
              AND e.managerid = $1
            ORDER BY t.date, t.userid
            "#,
        )
        .bind(managerid)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Set the approval flag on a direct report's entry
    pub async fn set_approved(&self, managerid: i32, entry_id: i32, approved: bool) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE timesheets t
            SET approved = $3
            FROM employeedetails e
            WHERE t.userid = e.userid
              AND e.managerid = $1
              AND t.timesheetentryid = $2
            "#,
        )
        .bind(managerid)
        .bind(entry_id)
        .bind(approved)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Timesheet entry {} not found", entry_id)));
        }
        Ok(())
    }
}

#[async_trait]
impl TimesheetStore for TimesheetRepository {
    async fn timesheets_in_range(
        &self,
        userid: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TimesheetEntry>, DatabaseError> {
        self.entries_between(userid, from, to).await
    }
}
