use chrono::{
    DateTime, Datelike as _, FixedOffset, LocalResult, NaiveDate, NaiveTime, Offset as _, TimeDelta,
    TimeZone,
};

/// Weeks open one minute past midnight on Monday.
pub fn week_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 1, 0).unwrap_or_default()
}

/// The first Sunday on or after `today`.
pub fn upcoming_sunday(today: NaiveDate) -> NaiveDate {
    let days = (7 - today.weekday().num_days_from_sunday()) % 7;
    today + TimeDelta::days(days.into())
}

/// Monday of the week that ends on the upcoming Sunday.
pub fn week_monday(today: NaiveDate) -> NaiveDate {
    upcoming_sunday(today) - TimeDelta::days(6)
}

/// Resolves Monday 00:01 in `tz`.
///
/// Ambiguous wall clocks take the earlier instant. A wall clock skipped by a
/// forward transition is read with the offset in force before it, which moves
/// it forward by the length of the gap.
pub fn week_start_at<Tz: TimeZone>(tz: &Tz, monday: NaiveDate) -> DateTime<FixedOffset> {
    let naive = monday.and_time(week_start_time());
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(start) | LocalResult::Ambiguous(start, _) => start.fixed_offset(),
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(naive - TimeDelta::days(1))).fix();
            let utc = naive - TimeDelta::seconds(before.local_minus_utc().into());
            tz.from_utc_datetime(&utc).fixed_offset()
        }
    }
}

/// Start of the week containing `now`, in `now`'s time zone.
pub fn current_week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<FixedOffset> {
    week_start_at(&now.timezone(), week_monday(now.date_naive()))
}
