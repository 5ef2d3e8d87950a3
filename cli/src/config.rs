use std::{env, fs, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{error::AppError, utils::time::DateLayout};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

const DEFAULT_API: &str = "https://date.nager.at/api/v2/publicholidays/";
const DEFAULT_YEAR: i32 = 2020;
const DEFAULT_COUNTRY_CODE: &str = "UA";
const DEFAULT_LOCATION: &str = "Europe/Kiev";
const DEFAULT_API_LAYOUT: &str = "%Y-%m-%d";
const DEFAULT_OUTPUT_LAYOUT: &str = "%b %d";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DATE: &str = "2020-05-18";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "API", alias = "api")]
    pub api: String,
    #[serde(rename = "Year", alias = "year")]
    pub year: i32,
    #[serde(rename = "CountryCode", alias = "country_code")]
    pub country_code: String,
    #[serde(rename = "Location", alias = "location")]
    pub location: String,
    #[serde(rename = "APILayout", alias = "api_layout")]
    pub api_layout: DateLayout,
    #[serde(rename = "OutputLayout", alias = "output_layout")]
    pub output_layout: DateLayout,
    #[serde(rename = "APITimeout", alias = "api_timeout")]
    pub api_timeout: u64,
    #[serde(rename = "UseFakeAPI", alias = "use_fake_api")]
    pub use_fake_api: bool,
    #[serde(rename = "UseFakeDate", alias = "use_fake_date")]
    pub use_fake_date: bool,
    #[serde(rename = "Date", alias = "date")]
    pub date: String,
    #[serde(rename = "UseLocalName", alias = "use_local_name")]
    pub use_local_name: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: DEFAULT_API.to_string(),
            year: DEFAULT_YEAR,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            api_layout: DateLayout(DEFAULT_API_LAYOUT.to_string()),
            output_layout: DateLayout(DEFAULT_OUTPUT_LAYOUT.to_string()),
            api_timeout: DEFAULT_API_TIMEOUT_SECS,
            use_fake_api: false,
            use_fake_date: false,
            date: DEFAULT_DATE.to_string(),
            use_local_name: false,
        }
    }
}

impl Config {
    /// Loads the configuration from `source`, then applies environment
    /// overrides (including a `.env` file when present).
    pub fn load(source: ConfigSource) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let mut config = match source {
            ConfigSource::Defaults => Config::default(),
            ConfigSource::File(path) => Config::from_file(path)?,
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: PathBuf) -> Result<Self, AppError> {
        let raw = fs::read_to_string(&path).map_err(|source| AppError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| AppError::ConfigParse { path, source })
    }

    /// HTTP timeout for the holiday API; `APITimeout` of 0 disables it.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.api_timeout > 0).then(|| Duration::from_secs(self.api_timeout))
    }

    /// Overrides individual settings from `lookup`, keyed by environment
    /// variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api) = lookup("HOLIDAY_API_URL") {
            self.api = api;
        }
        if let Some(year) = lookup("HOLIDAY_YEAR") {
            self.year = year.trim().parse().map_err(|_| AppError::InvalidSetting {
                key: "HOLIDAY_YEAR",
                message: format!("{:?} is not a year", year),
            })?;
        }
        if let Some(country_code) = lookup("HOLIDAY_COUNTRY_CODE") {
            self.country_code = country_code;
        }
        if let Some(location) = lookup("APP_TIMEZONE") {
            self.location = location;
        }
        if let Some(timeout) = lookup("HOLIDAY_API_TIMEOUT") {
            self.api_timeout = timeout.trim().parse().map_err(|_| AppError::InvalidSetting {
                key: "HOLIDAY_API_TIMEOUT",
                message: format!("{:?} is not a number of seconds", timeout),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_target_ukraine_2020() {
        let config = Config::default();
        assert_eq!(config.year, 2020);
        assert_eq!(config.country_code, "UA");
        assert_eq!(config.location, "Europe/Kiev");
        assert_eq!(config.api_layout.as_str(), "%Y-%m-%d");
        assert_eq!(config.output_layout.as_str(), "%b %d");
        assert_eq!(config.api_timeout, 10);
        assert!(!config.use_fake_api);
        assert!(!config.use_fake_date);
    }

    #[test]
    fn default_layouts_are_valid() {
        let config = Config::default();
        assert!(DateLayout::new(config.api_layout.as_str()).is_ok());
        assert!(DateLayout::new(config.output_layout.as_str()).is_ok());
    }

    #[test]
    fn overrides_replace_selected_fields() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup_from(&[
                ("HOLIDAY_YEAR", "2024"),
                ("HOLIDAY_COUNTRY_CODE", "PL"),
                ("APP_TIMEZONE", "Europe/Warsaw"),
                ("HOLIDAY_API_TIMEOUT", " 3 "),
            ]))
            .unwrap();
        assert_eq!(config.year, 2024);
        assert_eq!(config.country_code, "PL");
        assert_eq!(config.location, "Europe/Warsaw");
        assert_eq!(config.api_timeout, 3);
        assert_eq!(config.api, DEFAULT_API);
    }

    #[test]
    fn zero_timeout_means_no_timeout() {
        let config = Config {
            api_timeout: 0,
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), None);
        assert_eq!(
            Config::default().request_timeout(),
            Some(Duration::from_secs(10))
        );
    }

    #[test]
    fn invalid_year_override_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("HOLIDAY_YEAR", "next")]));
        assert!(matches!(
            result,
            Err(AppError::InvalidSetting { key: "HOLIDAY_YEAR", .. })
        ));
    }

    #[test]
    fn json_keys_accept_both_spellings() {
        let config: Config = serde_json::from_str(
            r#"{"CountryCode": "DE", "use_fake_api": true, "OutputLayout": "%d.%m."}"#,
        )
        .unwrap();
        assert_eq!(config.country_code, "DE");
        assert!(config.use_fake_api);
        assert_eq!(config.output_layout.as_str(), "%d.%m.");
        assert_eq!(config.year, 2020);
    }

    #[test]
    fn json_with_bad_layout_is_rejected() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"APILayout": "%Y-%m-%d %H"}"#);
        assert!(result.is_err());
    }
}
