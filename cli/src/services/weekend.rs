use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::utils::time::DateLayout;

/// How a holiday next to a weekend stretches the days off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekendExtension {
    /// Three consecutive days off, both ends inclusive.
    ThreeDays { first: NaiveDate, last: NaiveDate },
    /// Already inside the break; it continues up to this day.
    LastsUntil(NaiveDate),
    None,
}

impl WeekendExtension {
    pub fn for_holiday(holiday: NaiveDate, today: NaiveDate) -> Self {
        let day = Duration::days(1);
        match holiday.weekday() {
            Weekday::Fri | Weekday::Sat => WeekendExtension::ThreeDays {
                first: holiday,
                last: holiday + day * 2,
            },
            Weekday::Sun if holiday == today => WeekendExtension::LastsUntil(holiday + day),
            Weekday::Sun => WeekendExtension::ThreeDays {
                first: holiday - day,
                last: holiday + day,
            },
            Weekday::Mon if holiday - day == today => WeekendExtension::LastsUntil(holiday + day),
            Weekday::Mon if holiday != today => WeekendExtension::ThreeDays {
                first: holiday - day * 2,
                last: holiday,
            },
            _ => WeekendExtension::None,
        }
    }

    pub fn render(&self, layout: &DateLayout) -> String {
        match self {
            WeekendExtension::ThreeDays { first, last } => format!(
                ", and the weekend lasts 3 days: {} - {}",
                layout.format(*first),
                layout.format(*last)
            ),
            WeekendExtension::LastsUntil(until) => {
                format!(", and the weekend will last to {}", layout.format(*until))
            }
            WeekendExtension::None => String::new(),
        }
    }
}

/// Clause appended to a holiday report, empty when the weekend is unaffected.
pub fn describe(holiday: NaiveDate, today: NaiveDate, layout: &DateLayout) -> String {
    WeekendExtension::for_holiday(holiday, today).render(layout)
}
