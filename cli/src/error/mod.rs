use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read configuration file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration value for {key}: {message}")]
    InvalidSetting { key: &'static str, message: String },

    #[error("invalid date layout {0:?}")]
    InvalidLayout(String),

    #[error("unknown time zone {0:?}")]
    InvalidTimezone(String),

    #[error("cannot parse {value:?} with layout {layout:?}: {source}")]
    InvalidDate {
        value: String,
        layout: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("holiday API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no holidays returned for {year}")]
    NoHolidays { year: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn invalid_date_reports_value_and_layout() {
        let source = NaiveDate::parse_from_str("2020-13-01", "%Y-%m-%d").unwrap_err();
        let err = AppError::InvalidDate {
            value: "2020-13-01".to_string(),
            layout: "%Y-%m-%d".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.contains("\"2020-13-01\""));
        assert!(message.contains("\"%Y-%m-%d\""));
    }

    #[test]
    fn config_read_includes_path() {
        let err = AppError::ConfigRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read configuration file missing.json: not found"
        );
    }
}
