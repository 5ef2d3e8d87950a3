use serde::{Deserialize, Serialize};

use crate::{error::AppError, utils::time::DateLayout};
use chrono::NaiveDate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum HolidayType {
    #[default]
    Public,
    Bank,
    School,
    Authorities,
    Optional,
    Observance,
    #[serde(other)]
    Other,
}

/// One entry of the public holiday API. `date` is kept as received and
/// parsed under the configured API layout when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: String,
    pub local_name: String,
    pub name: String,
    pub country_code: String,
    #[serde(default)]
    pub fixed: bool,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    #[serde(default)]
    pub launch_year: Option<i32>,
    #[serde(rename = "type", default)]
    pub holiday_type: HolidayType,
}

impl Holiday {
    pub fn new(
        date: impl Into<String>,
        local_name: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            local_name: local_name.into(),
            name: name.into(),
            country_code: country_code.into(),
            fixed: false,
            global: true,
            counties: None,
            launch_year: None,
            holiday_type: HolidayType::Public,
        }
    }

    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn parse_date(&self, layout: &DateLayout) -> Result<NaiveDate, AppError> {
        layout.parse(&self.date)
    }

    /// Region codes; empty for nationwide holidays.
    pub fn counties(&self) -> &[String] {
        self.counties.as_deref().unwrap_or_default()
    }

    /// The first year the holiday was observed, if known. The API reports
    /// unknown as either `null` or `0`.
    pub fn launch_year(&self) -> Option<i32> {
        self.launch_year.filter(|year| *year != 0)
    }

    pub fn display_name(&self, use_local_name: bool) -> &str {
        if use_local_name {
            &self.local_name
        } else {
            &self.name
        }
    }
}
