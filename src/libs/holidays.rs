//! Public holiday calendar.
//!
//! Holidays are computed per year into a `HashSet<NaiveDate>`, then
//! completed with the days off declared in the configuration. Easter is
//! derived with the anonymous Gregorian algorithm; every movable holiday
//! is an offset from it.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Answers whether a date is a public holiday.
pub trait HolidayPredicate {
    fn is_public_holiday(&self, date: NaiveDate) -> bool;
}

/// Region whose public holidays apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HolidayZone {
    /// Metropolitan France
    #[default]
    Metropole,
    /// Metropole plus Good Friday and St Stephen's Day
    AlsaceMoselle,
}

#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    zone: HolidayZone,
    extra_days_off: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new(zone: HolidayZone) -> Self {
        Self {
            zone,
            extra_days_off: HashSet::new(),
        }
    }

    /// Adds personal days off, treated exactly like public holidays.
    pub fn with_extra_days_off<I: IntoIterator<Item = NaiveDate>>(mut self, dates: I) -> Self {
        self.extra_days_off.extend(dates);
        self
    }

    /// Public holidays of `year` for the configured zone.
    pub fn holidays(&self, year: i32) -> HashSet<NaiveDate> {
        let fixed = [(1, 1), (5, 1), (5, 8), (7, 14), (8, 15), (11, 1), (11, 11), (12, 25)];
        let mut dates: HashSet<NaiveDate> = fixed
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .collect();

        if self.zone == HolidayZone::AlsaceMoselle {
            dates.extend(NaiveDate::from_ymd_opt(year, 12, 26));
        }

        if let Some(easter) = easter_sunday(year) {
            // Easter Monday, Ascension, Whit Monday
            dates.extend([1, 39, 50].iter().map(|&offset| easter + Duration::days(offset)));
            if self.zone == HolidayZone::AlsaceMoselle {
                dates.insert(easter - Duration::days(2));
            }
        }

        dates
    }
}

impl HolidayPredicate for HolidayCalendar {
    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.extra_days_off.contains(&date) || self.holidays(date.year()).contains(&date)
    }
}

/// Easter Sunday of `year` in the Gregorian calendar.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
