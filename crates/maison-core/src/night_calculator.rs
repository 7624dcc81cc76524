use chrono::{DateTime, NaiveDate, TimeZone};

/// Derives the number of nights between check-in and check-out.
pub struct NightCalculator;

impl NightCalculator {
    /// Returns `0` when either date is absent or the range is reversed.
    ///
    /// Calendar dates carry no time of day, so the day difference is already
    /// whole and needs no rounding.
    pub fn nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> u32 {
        match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => Self::days_between(check_in, check_out),
            _ => 0,
        }
    }

    /// Night count for timestamps: each side is reduced to its calendar date
    /// in its own offset before subtracting, so time-of-day never shifts the
    /// result.
    pub fn nights_between<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> u32 {
        Self::days_between(start.date_naive(), end.date_naive())
    }

    fn days_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
        let days = check_out.signed_duration_since(check_in).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }
}

pub fn nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> u32 {
    NightCalculator::nights(check_in, check_out)
}
