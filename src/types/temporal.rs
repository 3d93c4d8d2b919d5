//! Calendar timestamp value type.
//!
//! A decoded DATE/TIMESTAMP is a plain wall-clock reading in the proleptic
//! Gregorian calendar. Calendar legality is not checked here: day 31 in
//! April passes through the codec unchanged, and turning a [`Timestamp`]
//! into a real instant is the caller's concern (see
//! [`Timestamp::to_chrono`] under the `chrono` feature).

/// UTC offset recorded on a decoded TIMESTAMP WITH TIME ZONE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    pub hours: i32,
    pub minutes: i32,
}

/// A calendar date-time as carried by the wire format.
///
/// All fields are public; the type is a passive value with no invariants of
/// its own. `offset: None` means the reading is tagged UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// 1-31, not validated against the month length.
    pub day: u32,
    /// 0-23.
    pub hour: u32,
    /// 0-59.
    pub minute: u32,
    /// 0-59.
    pub second: u32,
    /// 0-999_999_999.
    pub nanosecond: u32,
    pub offset: Option<UtcOffset>,
}

impl Timestamp {
    /// A timestamp with whole-second precision, tagged UTC.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond: 0,
            offset: None,
        }
    }

    /// Same timestamp with the sub-second field set.
    pub fn with_nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = nanosecond;
        self
    }

    /// Build a timestamp from possibly out-of-range components, carrying
    /// each excess into the next larger unit: nanoseconds into seconds,
    /// seconds into minutes, minutes into hours, hours into days, months
    /// into years, and finally day overflow/underflow through real month
    /// lengths (leap years included). Month 11 day 31 becomes December 1;
    /// hour -1 borrows a day.
    ///
    /// This is the only calendar arithmetic in the crate; the decoder uses
    /// it so that an applied timezone shift rolls the date correctly.
    pub fn normalized(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
    ) -> Self {
        let (second, nanosecond) = carry(second, nanosecond, 1_000_000_000);
        let (minute, second) = carry(minute, second, 60);
        let (hour, minute) = carry(hour, minute, 60);
        let (day, hour) = carry(day, hour, 24);
        let (mut year, month0) = carry(year, month - 1, 12);
        let mut month = month0 + 1;

        let mut day = day;
        while day < 1 {
            month -= 1;
            if month < 1 {
                month = 12;
                year -= 1;
            }
            day += days_in_month(year, month);
        }
        while day > days_in_month(year, month) {
            day -= days_in_month(year, month);
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
            hour: hour as u32,
            minute: minute as u32,
            second: second as u32,
            nanosecond: nanosecond as u32,
            offset: None,
        }
    }
}

/// Carry the out-of-range part of `lo` into `hi`, leaving `lo` in
/// `0..base`.
fn carry(hi: i64, lo: i64, base: i64) -> (i64, i64) {
    (hi + lo.div_euclid(base), lo.rem_euclid(base))
}

fn days_in_month(year: i64, month: i64) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(feature = "chrono")]
impl Timestamp {
    /// Resolve to a `chrono` UTC instant.
    ///
    /// The codec never validates, so this is the first place calendar
    /// legality is checked: returns `None` when the fields do not name a
    /// real date-time (April 31, hour 24, ...). A recorded [`UtcOffset`] is
    /// subtracted, turning the local reading into the UTC instant.
    pub fn to_chrono(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let naive = chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_nano_opt(self.hour, self.minute, self.second, self.nanosecond)?;
        let utc = naive.and_utc();
        match self.offset {
            None => Some(utc),
            Some(off) => {
                let seconds = i64::from(off.hours) * 3600 + i64::from(off.minutes) * 60;
                Some(utc - chrono::Duration::seconds(seconds))
            }
        }
    }

    /// The wall-clock reading of `dt` in its own time zone.
    ///
    /// No zone conversion is performed and no offset is recorded; encoding
    /// the result sends the clock exactly as it reads.
    pub fn from_chrono<Tz: chrono::TimeZone>(dt: &chrono::DateTime<Tz>) -> Self {
        use chrono::{Datelike, Timelike};
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            nanosecond: dt.nanosecond(),
            offset: None,
        }
    }
}
