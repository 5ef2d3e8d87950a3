#![allow(dead_code)]
use chrono::NaiveDate;
use std::{cell::RefCell, collections::HashMap};

use next_holiday::{
    error::AppError,
    models::holiday::Holiday,
    services::holiday_source::HolidaySource,
    utils::time::DateLayout,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn holiday(date: &str, name: &str) -> Holiday {
    Holiday::new(date, name, name, "UA")
}

pub fn api_layout() -> DateLayout {
    DateLayout::new("%Y-%m-%d").expect("api layout")
}

pub fn output_layout() -> DateLayout {
    DateLayout::new("%b %d").expect("output layout")
}

/// Live-looking source backed by per-year lists that remembers every
/// requested year.
pub struct RecordingSource {
    years: HashMap<i32, Vec<Holiday>>,
    requested: RefCell<Vec<i32>>,
}

impl RecordingSource {
    pub fn new(years: impl IntoIterator<Item = (i32, Vec<Holiday>)>) -> Self {
        Self {
            years: years.into_iter().collect(),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<i32> {
        self.requested.borrow().clone()
    }
}

impl HolidaySource for RecordingSource {
    fn fetch(&self, year: i32) -> Result<Vec<Holiday>, AppError> {
        self.requested.borrow_mut().push(year);
        Ok(self.years.get(&year).cloned().unwrap_or_default())
    }
}
