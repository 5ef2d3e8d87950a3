use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError};

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

pub fn parse_timezone(name: &str) -> Result<Tz, AppError> {
    name.parse()
        .map_err(|_| AppError::InvalidTimezone(name.to_string()))
}

/// A strftime pattern that is known to render any calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateLayout(pub(crate) String);

impl DateLayout {
    pub fn new(pattern: impl Into<String>) -> Result<Self, AppError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::InvalidLayout(pattern));
        }
        // Time-of-day specifiers parse fine but fail when rendering a NaiveDate.
        let probe = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        let mut rendered = String::new();
        if write!(rendered, "{}", probe.format(&pattern)).is_err() {
            return Err(AppError::InvalidLayout(pattern));
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self, value: &str) -> Result<NaiveDate, AppError> {
        NaiveDate::parse_from_str(value, &self.0).map_err(|source| AppError::InvalidDate {
            value: value.to_string(),
            layout: self.0.clone(),
            source,
        })
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.0).to_string()
    }
}

impl TryFrom<String> for DateLayout {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DateLayout> for String {
    fn from(value: DateLayout) -> Self {
        value.0
    }
}

impl fmt::Display for DateLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of "today" for holiday selection.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Whether the date was injected rather than read from the system.
    fn is_fixed(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct SystemClock {
    time_zone: Tz,
}

impl SystemClock {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        today_local(&self.time_zone)
    }
}

#[derive(Debug, Clone)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn is_fixed(&self) -> bool {
        true
    }
}

/// Builds the clock selected by `use_fake_date`. The time zone is validated
/// even for a fixed date so a bad `Location` never goes unnoticed.
pub fn clock_from_config(config: &Config) -> Result<Box<dyn Clock>, AppError> {
    let time_zone = parse_timezone(&config.location)?;
    if config.use_fake_date {
        let date = config.api_layout.parse(&config.date)?;
        tracing::debug!(%date, "Using fixed date");
        Ok(Box::new(FixedClock::new(date)))
    } else {
        tracing::debug!(%time_zone, "Using system clock");
        Ok(Box::new(SystemClock::new(time_zone)))
    }
}
