use chrono::{NaiveDateTime, Utc};

/// The current UTC time as stored in the datetime columns.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
