use std::{cmp::Ordering, fmt};

use chrono::{Datelike, NaiveDate};

use crate::{
    config::Config,
    error::AppError,
    models::holiday::Holiday,
    services::{holiday_source::HolidaySource, weekend},
    utils::time::{Clock, DateLayout},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Today,
    Upcoming,
}

/// The single line printed for a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub name: String,
    pub date: NaiveDate,
    pub formatted_date: String,
    pub weekend: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lead = match self.kind {
            ReportKind::Today => "Today is",
            ReportKind::Upcoming => "The next holiday is",
        };
        write!(
            f,
            "{} {}, {}{}",
            lead, self.name, self.formatted_date, self.weekend
        )
    }
}

/// Recoverable conditions noticed while selecting a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    YearMismatch { configured: i32, actual: i32 },
    ListExhausted { year: i32, next_year: i32 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::YearMismatch { configured, actual } => write!(
                f,
                "API data has wrong date ({} instead of {}), retrieving actual data...",
                configured, actual
            ),
            Diagnostic::ListExhausted { year, next_year } => write!(
                f,
                "wrong configuration or no more holidays in {}, trying to retrieve first holiday in {}...",
                year, next_year
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub today: NaiveDate,
    /// Year of the holiday list the report was taken from.
    pub year: i32,
    pub report: Report,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan<'a> {
    Found {
        kind: ReportKind,
        holiday: &'a Holiday,
        date: NaiveDate,
    },
    Exhausted,
}

/// Walks `holidays` in order and stops at the first entry on or after
/// `today`. The list is trusted to be ascending.
pub fn scan<'a>(
    holidays: &'a [Holiday],
    today: NaiveDate,
    layout: &DateLayout,
) -> Result<Scan<'a>, AppError> {
    for holiday in holidays {
        let date = holiday.parse_date(layout)?;
        let kind = match date.cmp(&today) {
            Ordering::Less => continue,
            Ordering::Equal => ReportKind::Today,
            Ordering::Greater => ReportKind::Upcoming,
        };
        tracing::debug!(%date, name = %holiday.name, ?kind, "Selected holiday");
        return Ok(Scan::Found {
            kind,
            holiday,
            date,
        });
    }
    Ok(Scan::Exhausted)
}

#[derive(Debug, Clone)]
pub struct SelectionSettings {
    pub year: i32,
    pub api_layout: DateLayout,
    pub output_layout: DateLayout,
    pub use_local_name: bool,
}

impl From<&Config> for SelectionSettings {
    fn from(config: &Config) -> Self {
        Self {
            year: config.year,
            api_layout: config.api_layout.clone(),
            output_layout: config.output_layout.clone(),
            use_local_name: config.use_local_name,
        }
    }
}

pub struct NextHolidayFinder<'a> {
    source: &'a dyn HolidaySource,
    clock: &'a dyn Clock,
    settings: SelectionSettings,
}

impl<'a> NextHolidayFinder<'a> {
    pub fn new(
        source: &'a dyn HolidaySource,
        clock: &'a dyn Clock,
        settings: SelectionSettings,
    ) -> Self {
        Self {
            source,
            clock,
            settings,
        }
    }

    pub fn find(&self) -> Result<Outcome, AppError> {
        let today = self.clock.today();
        let mut diagnostics = Vec::new();

        let mut year = self.settings.year;
        if self.source.is_live() && year != today.year() {
            diagnostics.push(Diagnostic::YearMismatch {
                configured: year,
                actual: today.year(),
            });
            year = today.year();
        }
        let holidays = self.source.fetch(year)?;

        let report = match scan(&holidays, today, &self.settings.api_layout)? {
            Scan::Found {
                kind,
                holiday,
                date,
            } => self.report(kind, holiday, date, today),
            Scan::Exhausted => {
                let next_year = year
                    .checked_add(1)
                    .ok_or_else(|| AppError::InvalidSetting {
                        key: "Year",
                        message: format!("{} has no following year", year),
                    })?;
                if !self.source.is_live() || self.clock.is_fixed() {
                    diagnostics.push(Diagnostic::ListExhausted { year, next_year });
                } else {
                    tracing::info!(year, "No holidays left this year");
                }
                year = next_year;
                tracing::info!(year, "Retrieving holidays of the following year");
                let following = self.source.fetch(year)?;
                let first = following.first().ok_or(AppError::NoHolidays { year })?;
                let date = first.parse_date(&self.settings.api_layout)?;
                self.report(ReportKind::Upcoming, first, date, today)
            }
        };

        Ok(Outcome {
            today,
            year,
            report,
            diagnostics,
        })
    }

    fn report(
        &self,
        kind: ReportKind,
        holiday: &Holiday,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Report {
        tracing::debug!(
            name = %holiday.name,
            fixed = holiday.fixed,
            global = holiday.global,
            counties = ?holiday.counties(),
            launch_year = ?holiday.launch_year(),
            holiday_type = ?holiday.holiday_type,
            "Reporting holiday"
        );
        let layout = &self.settings.output_layout;
        Report {
            kind,
            name: holiday
                .display_name(self.settings.use_local_name)
                .to_string(),
            date,
            formatted_date: layout.format(date),
            weekend: weekend::describe(date, today, layout),
        }
    }
}
