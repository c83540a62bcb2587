use std::sync::OnceLock;

use time::{Date, Duration, OffsetDateTime, UtcOffset};

pub const DEFAULT_HORIZON_DAYS: u8 = 5;
pub const DEFAULT_LOOKAHEAD_DAYS: u8 = 3;

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Captures the machine's UTC offset. Call before spawning threads: on Unix
/// the offset can only be read while the process is single-threaded.
pub fn init_local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| {
        UtcOffset::current_local_offset().unwrap_or_else(|_| {
            tracing::warn!("local UTC offset unavailable, using UTC calendar days");
            UtcOffset::UTC
        })
    })
}

/// Days the forecast source can answer for: `today ..= today + horizon`.
///
/// Every calendar date in the planner, including which day a forecast
/// reading belongs to, is taken in `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForecastWindow {
    today: Date,
    horizon_days: u8,
    offset: UtcOffset,
}

impl ForecastWindow {
    /// A window on UTC calendar days.
    pub fn new(today: Date, horizon_days: u8) -> Self {
        Self {
            today,
            horizon_days,
            offset: UtcOffset::UTC,
        }
    }

    /// The window containing `now` as seen at `offset`.
    pub fn at(now: OffsetDateTime, offset: UtcOffset, horizon_days: u8) -> Self {
        Self {
            today: now.to_offset(offset).date(),
            horizon_days,
            offset,
        }
    }

    /// The window starting on the machine's local date.
    pub fn starting_today(horizon_days: u8) -> Self {
        Self::at(OffsetDateTime::now_utc(), init_local_offset(), horizon_days)
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// The calendar day `instant` falls on.
    pub fn date_of(&self, instant: OffsetDateTime) -> Date {
        instant.to_offset(self.offset).date()
    }

    pub fn last_day(&self) -> Date {
        self.today
            .checked_add(Duration::days(i64::from(self.horizon_days)))
            .unwrap_or(Date::MAX)
    }

    pub fn contains(&self, date: Date) -> bool {
        date >= self.today && date <= self.last_day()
    }

    pub fn available_dates(&self) -> Vec<Date> {
        days_after(self.today, 0, self.horizon_days)
    }

    /// `date + 1 ..= date + lookahead`, limited to the window.
    pub fn candidates_after(&self, date: Date, lookahead_days: u8) -> Vec<Date> {
        days_after(date, 1, lookahead_days)
            .into_iter()
            .filter(|candidate| self.contains(*candidate))
            .collect()
    }
}

fn days_after(start: Date, from: u8, to: u8) -> Vec<Date> {
    (from..=to)
        .filter_map(|offset| start.checked_add(Duration::days(i64::from(offset))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn available_dates_cover_today_through_horizon() {
        let window = ForecastWindow::new(date!(2026 - 10 - 18), 5);
        let dates = window.available_dates();
        assert_eq!(dates.len(), 6);
        assert_eq!(dates.first(), Some(&date!(2026 - 10 - 18)));
        assert_eq!(dates.last(), Some(&date!(2026 - 10 - 23)));
    }

    #[test]
    fn candidates_are_clipped_to_the_window() {
        let window = ForecastWindow::new(date!(2026 - 10 - 18), 5);

        assert_eq!(
            window.candidates_after(date!(2026 - 10 - 18), 3),
            [date!(2026 - 10 - 19), date!(2026 - 10 - 20), date!(2026 - 10 - 21)]
        );
        assert_eq!(
            window.candidates_after(date!(2026 - 10 - 22), 3),
            [date!(2026 - 10 - 23)]
        );
        assert!(window.candidates_after(date!(2026 - 10 - 23), 3).is_empty());
    }

    #[test]
    fn today_and_readings_share_one_calendar() {
        let edt = UtcOffset::from_hms(-4, 0, 0).unwrap();
        // 02:00 UTC on the 19th is still the evening of the 18th at UTC-4.
        let now = datetime!(2026 - 10 - 19 02:00 UTC);
        let window = ForecastWindow::at(now, edt, 5);

        assert_eq!(window.today(), date!(2026 - 10 - 18));
        assert_eq!(window.date_of(now), window.today());
        assert!(window.contains(date!(2026 - 10 - 18)));
        assert_eq!(window.last_day(), date!(2026 - 10 - 23));

        let utc = ForecastWindow::at(now, UtcOffset::UTC, 5);
        assert_eq!(utc.today(), date!(2026 - 10 - 19));
        assert!(!utc.contains(date!(2026 - 10 - 18)));
    }

    #[test]
    fn contains_is_inclusive() {
        let window = ForecastWindow::new(date!(2026 - 12 - 30), 5);
        assert!(window.contains(date!(2026 - 12 - 30)));
        assert!(window.contains(date!(2027 - 01 - 04)));
        assert!(!window.contains(date!(2027 - 01 - 05)));
        assert!(!window.contains(date!(2026 - 12 - 29)));
    }
}
