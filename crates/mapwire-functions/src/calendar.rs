// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business calendar shared by date functions.

use std::collections::{BTreeSet, HashSet};
use std::ops::Bound::{Excluded, Included};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use mapwire_config::model::CalendarConfig;

/// Weekend days and public holidays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    weekend: HashSet<Weekday>,
    holidays: BTreeSet<NaiveDate>,
}

impl BusinessCalendar {
    pub fn new(
        weekend: impl IntoIterator<Item = Weekday>,
        holidays: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            weekend: weekend.into_iter().collect(),
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::new(config.weekend.iter().copied(), config.holidays.iter().copied())
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    /// Move `days` business days away from `date`, backwards when negative.
    ///
    /// The start date itself is never counted, so `0` returns `date` as is.
    /// Returns `None` if every weekday is a weekend day or the result leaves
    /// the supported date range.
    pub fn add_business_days(&self, date: NaiveDate, days: i64) -> Option<NaiveDate> {
        if self.weekend.len() >= 7 {
            return None;
        }

        let forward = days > 0;
        let mut remaining = days.unsigned_abs();
        // Every business day is a calendar day, so overshooting the date range is known up front.
        let room = if forward {
            (NaiveDate::MAX - date).num_days()
        } else {
            (date - NaiveDate::MIN).num_days()
        };
        if remaining > room.unsigned_abs() {
            return None;
        }

        // Whole weeks hold a fixed number of weekdays; holidays inside the
        // skipped span are added back to what is left to walk.
        let per_week = (7 - self.weekend.len()) as u64;
        let mut current = date;
        while remaining > 2 * per_week {
            let weeks = remaining / per_week - 1;
            let span = Days::new(weeks * 7);
            let next = if forward {
                current.checked_add_days(span)?
            } else {
                current.checked_sub_days(span)?
            };
            let skipped_holidays = if forward {
                self.holidays.range((Excluded(current), Included(next)))
            } else {
                self.holidays.range((Included(next), Excluded(current)))
            }
            .filter(|day| !self.is_weekend(**day))
            .count() as u64;
            remaining = remaining - weeks * per_week + skipped_holidays;
            current = next;
        }

        while remaining > 0 {
            current = if forward {
                current.checked_add_days(Days::new(1))?
            } else {
                current.checked_sub_days(Days::new(1))?
            };
            if self.is_business_day(current) {
                remaining -= 1;
            }
        }
        Some(current)
    }
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::from_config(&CalendarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn calendar() -> BusinessCalendar {
        BusinessCalendar::new(
            [Weekday::Sat, Weekday::Sun],
            [date("2024-12-25"), date("2024-12-26")],
        )
    }

    #[test]
    fn weekends_and_holidays_are_not_business_days() {
        let cal = calendar();
        assert!(cal.is_business_day(date("2024-12-20")));
        assert!(!cal.is_business_day(date("2024-12-21")));
        assert!(!cal.is_business_day(date("2024-12-25")));
    }

    #[test]
    fn adding_skips_weekends_and_holidays() {
        let cal = calendar();
        // Fri 20th + 3 => Mon 23rd, Tue 24th, (25th, 26th holidays) Fri 27th.
        assert_eq!(
            cal.add_business_days(date("2024-12-20"), 3),
            Some(date("2024-12-27"))
        );
    }

    #[test]
    fn negative_days_move_backwards() {
        let cal = calendar();
        assert_eq!(
            cal.add_business_days(date("2024-12-27"), -1),
            Some(date("2024-12-24"))
        );
    }

    #[test]
    fn zero_days_is_identity_even_on_weekend() {
        let cal = calendar();
        assert_eq!(
            cal.add_business_days(date("2024-12-21"), 0),
            Some(date("2024-12-21"))
        );
    }

    #[test]
    fn all_weekend_calendar_cannot_advance() {
        let cal = BusinessCalendar::new(
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ],
            [],
        );
        assert_eq!(cal.add_business_days(date("2024-01-01"), 1), None);
    }

    #[test]
    fn default_calendar_uses_saturday_and_sunday() {
        let cal = BusinessCalendar::default();
        assert!(cal.is_weekend(date("2024-06-01")));
        assert!(cal.is_weekend(date("2024-06-02")));
        assert!(!cal.is_weekend(date("2024-06-03")));
        assert_eq!(cal.holidays().count(), 0);
    }

    #[test]
    fn huge_offsets_fail_fast() {
        let cal = calendar();
        assert_eq!(cal.add_business_days(date("2024-01-01"), i64::MAX), None);
        assert_eq!(cal.add_business_days(date("2024-01-01"), i64::MIN), None);
    }

    #[test]
    fn large_offsets_stay_exact() {
        let cal = calendar();
        // 1000 business days with two holidays per year in range.
        let end = cal.add_business_days(date("2024-01-01"), 1000).unwrap();
        assert_eq!(end, step_by_day(&cal, date("2024-01-01"), 1000));
        assert!(cal.is_business_day(end));
    }

    fn step_by_day(cal: &BusinessCalendar, start: NaiveDate, days: i64) -> NaiveDate {
        let mut current = start;
        let mut remaining = days.unsigned_abs();
        while remaining > 0 {
            current = if days > 0 {
                current.succ_opt().unwrap()
            } else {
                current.pred_opt().unwrap()
            };
            if cal.is_business_day(current) {
                remaining -= 1;
            }
        }
        current
    }

    proptest! {
        #[test]
        fn week_skipping_matches_stepping(offset in 0i64..3650, days in -400i64..400) {
            let cal = BusinessCalendar::new(
                [Weekday::Fri, Weekday::Sat],
                (0..40).map(|n| date("2020-01-06") + chrono::Duration::days(n * 37)),
            );
            let start = date("2020-01-01") + chrono::Duration::days(offset);
            prop_assert_eq!(
                cal.add_business_days(start, days),
                Some(step_by_day(&cal, start, days))
            );
        }

        #[test]
        fn result_is_always_a_business_day(offset in 0i64..3650, days in 1i64..60) {
            let cal = calendar();
            let start = date("2020-01-01") + chrono::Duration::days(offset);
            let end = cal.add_business_days(start, days).unwrap();
            prop_assert!(end > start);
            prop_assert!(cal.is_business_day(end));
        }
    }
}
