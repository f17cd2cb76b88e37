use chrono::NaiveDate;

use crate::error::ApiError;

/// Parse a numeric id from the path, e.g. `/api/manager/timesheets/:id/approve`
pub(crate) fn parse_id(raw: &str, name: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {}. Must be a number.", name)))
}

/// Required `YYYY-MM-DD` query value
pub(crate) fn parse_required_date(raw: Option<&str>, name: &str) -> Result<NaiveDate, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(format!("Missing {} parameter", name)))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request(format!("Invalid {} parameter, expected YYYY-MM-DD", name)))
}

/// Required `YYYY-MM` query value, returned as `[first day, first day of next month)`
pub(crate) fn parse_month(raw: Option<&str>) -> Result<(NaiveDate, NaiveDate), ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing month parameter"))?;
    let invalid = || ApiError::bad_request("Invalid month parameter, expected YYYY-MM");

    let start = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d").map_err(|_| invalid())?;
    let end = start.checked_add_months(chrono::Months::new(1)).ok_or_else(invalid)?;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids() {
        assert_eq!(parse_id("123", "timesheetentryid").unwrap(), 123);
        let err = parse_id("not-a-number", "leaveentryid").unwrap_err();
        assert_eq!(err.message(), "Invalid leaveentryid. Must be a number.");
    }

    #[test]
    fn month_spans_to_next_month() {
        let (start, end) = parse_month(Some("2025-12")).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn rejects_missing_or_malformed_month() {
        assert_eq!(parse_month(None).unwrap_err().message(), "Missing month parameter");
        assert!(parse_month(Some("2025-13")).is_err());
        assert!(parse_month(Some("July")).is_err());
    }

    #[test]
    fn requires_calendar_date() {
        assert!(parse_required_date(Some("2025-08-04"), "date").is_ok());
        assert_eq!(parse_required_date(Some(" "), "date").unwrap_err().message(), "Missing date parameter");
        assert!(parse_required_date(Some("04-08-2025"), "date").is_err());
    }
}
