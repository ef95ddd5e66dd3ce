use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Utc};

/// Default shop offset: India Standard Time (UTC+5:30)
pub const IST_OFFSET_MINUTES: i32 = 330;

/// Shop-local calendar handling.
/// All timestamps are stored as UTC; business days, months and invoice years
/// follow the shop's local offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopClock {
    offset: FixedOffset,
}

impl ShopClock {
    /// Build a clock from an offset east of UTC in minutes
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, String> {
        FixedOffset::east_opt(minutes * 60)
            .map(|offset| Self { offset })
            .ok_or_else(|| format!("Invalid UTC offset: {} minutes", minutes))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Convert a UTC timestamp to shop-local time
    pub fn local(&self, utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
        utc_time.with_timezone(&self.offset)
    }

    /// Shop-local calendar year
    pub fn year(&self, utc_time: DateTime<Utc>) -> i32 {
        self.local(utc_time).year()
    }

    /// UTC instant at which the shop-local day containing `utc_time` starts
    pub fn day_start(&self, utc_time: DateTime<Utc>) -> DateTime<Utc> {
        self.midnight_utc(self.local(utc_time).date_naive())
    }

    /// UTC instant at which the previous shop-local day starts
    pub fn previous_day_start(&self, utc_time: DateTime<Utc>) -> DateTime<Utc> {
        self.day_start(utc_time) - Duration::days(1)
    }

    /// UTC instant at which the shop-local month containing `utc_time` starts
    pub fn month_start(&self, utc_time: DateTime<Utc>) -> DateTime<Utc> {
        let local = self.local(utc_time);
        let first = NaiveDate::from_ymd_opt(local.year(), local.month(), 1)
            .unwrap_or_else(|| local.date_naive());
        self.midnight_utc(first)
    }

    fn midnight_utc(&self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        // A fixed offset has exactly one mapping for every local time
        match self.offset.from_local_datetime(&midnight).single() {
            Some(local) => local.with_timezone(&Utc),
            None => Utc.from_utc_datetime(&midnight),
        }
    }
}

impl Default for ShopClock {
    fn default() -> Self {
        let offset = FixedOffset::east_opt(IST_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix());
        Self { offset }
    }
}

/// Format timestamp as ISO 8601 UTC for API responses
pub fn format_iso8601(utc_time: DateTime<Utc>) -> String {
    utc_time.to_rfc3339()
}
