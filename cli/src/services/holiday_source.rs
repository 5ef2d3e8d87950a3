use std::time::Duration;

use reqwest::blocking::Client;

use crate::{
    config::Config,
    error::AppError,
    models::holiday::{Holiday, HolidayType},
};

const USER_AGENT: &str = concat!("next-holiday/", env!("CARGO_PKG_VERSION"));

/// Supplies the public holidays of one year, ordered by date.
#[cfg_attr(test, mockall::automock)]
pub trait HolidaySource {
    fn fetch(&self, year: i32) -> Result<Vec<Holiday>, AppError>;

    /// False for canned data that ignores the requested year.
    fn is_live(&self) -> bool {
        true
    }
}

/// Client for the Nager.Date public holiday API.
pub struct NagerClient {
    client: Client,
    base_url: String,
    country_code: String,
}

impl NagerClient {
    /// `timeout` of `None` waits for the API indefinitely.
    pub fn new(
        base_url: &str,
        country_code: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            country_code: country_code.to_string(),
        })
    }

    pub fn url_for(&self, year: i32) -> String {
        format!("{}/{}/{}", self.base_url, year, self.country_code)
    }
}

impl HolidaySource for NagerClient {
    fn fetch(&self, year: i32) -> Result<Vec<Holiday>, AppError> {
        let url = self.url_for(year);
        tracing::debug!(%url, "Fetching public holidays");

        let holidays: Vec<Holiday> = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        tracing::debug!(year, count = holidays.len(), "Fetched public holidays");
        Ok(holidays)
    }
}

/// Built-in Ukrainian holidays for 2020, served for any requested year.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    holidays: Vec<Holiday>,
}

impl FixtureSource {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        let entry = |date: &str, local_name: &str, name: &str, fixed: bool| {
            let mut holiday = Holiday::new(date, local_name, name, "UA").fixed(fixed);
            holiday.counties = Some(Vec::new());
            holiday.launch_year = Some(0);
            holiday.holiday_type = HolidayType::Public;
            holiday
        };

        Self::new(vec![
            entry("2020-01-01", "Новий Рік", "New Year's Day", true),
            entry("2020-01-07", "Різдво", "(Julian) Christmas", true),
            entry(
                "2020-03-08",
                "Міжнародний жіночий день",
                "International Women's Day",
                true,
            ),
            entry("2020-04-19", "Великдень", "(Julian) Easter Sunday", false),
            entry("2020-05-01", "День праці", "International Workers' Day", true),
            entry(
                "2020-05-09",
                "День перемоги над нацизмом у Другій світовій війні",
                "Victory day over Nazism in World War II",
                true,
            ),
            entry("2020-06-07", "Трійця", "(Julian) Pentecost", false),
            entry("2020-06-28", "День Конституції", "Constitution Day", true),
            entry("2020-08-24", "День Незалежності", "Independence Day", true),
            entry(
                "2020-10-14",
                "День захисника України",
                "Defender of Ukraine Day",
                true,
            ),
            entry(
                "2020-12-25",
                "Різдво",
                "(Gregorian and Revised Julian) Christmas",
                true,
            ),
        ])
    }
}

impl HolidaySource for FixtureSource {
    fn fetch(&self, year: i32) -> Result<Vec<Holiday>, AppError> {
        tracing::debug!(year, "Serving built-in holiday list");
        Ok(self.holidays.clone())
    }

    fn is_live(&self) -> bool {
        false
    }
}

pub fn source_from_config(config: &Config) -> Result<Box<dyn HolidaySource>, AppError> {
    if config.use_fake_api {
        Ok(Box::new(FixtureSource::default()))
    } else {
        Ok(Box::new(NagerClient::new(
            &config.api,
            &config.country_code,
            config.request_timeout(),
        )?))
    }
}
