use chrono::{Datelike, Duration, NaiveDate};

/// The Sunday-to-Saturday week containing `today`, shifted by `week_offset`
/// weeks. Offset 0 is the current week, negative is the past.
pub fn week_bounds(today: NaiveDate, week_offset: i32) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64)
        + Duration::weeks(week_offset as i64);

    (start, start + Duration::days(6))
}
