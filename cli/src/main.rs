use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use next_holiday::{
    config::{Config, ConfigSource, DEFAULT_CONFIG_FILE},
    services::{
        holiday_source::source_from_config,
        next_holiday::{NextHolidayFinder, SelectionSettings},
    },
    utils::time::clock_from_config,
};

/// Prints the next public holiday of the configured country.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Load configuration from a JSON file instead of the built-in defaults.
    #[arg(long, default_value_t = false)]
    conf: bool,

    /// Configuration file read when `--conf` is given.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report line.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "next_holiday=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // AppError messages already carry their cause.
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let source = if cli.conf {
        ConfigSource::File(cli.config)
    } else {
        ConfigSource::Defaults
    };
    let config = Config::load(source)?;
    tracing::info!(
        api = %config.api,
        year = config.year,
        country_code = %config.country_code,
        location = %config.location,
        use_fake_api = config.use_fake_api,
        use_fake_date = config.use_fake_date,
        "Loaded configuration"
    );

    let clock = clock_from_config(&config)?;
    let holidays = source_from_config(&config)?;
    let finder = NextHolidayFinder::new(
        holidays.as_ref(),
        clock.as_ref(),
        SelectionSettings::from(&config),
    );
    let outcome = finder.find()?;

    for diagnostic in &outcome.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }
    println!("{}", outcome.report);
    Ok(())
}
