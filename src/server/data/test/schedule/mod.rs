mod load;
mod save;

use chrono::{DateTime, TimeZone, Utc};

/// Midnight UTC shorthand for window and delivery dates.
fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}
