use std::path::PathBuf;

use alveus_datetime::config::Config;
use alveus_datetime::logger;
use alveus_datetime::utils::date::{format_partial_date_string, sort_partial_date_string};
use alveus_datetime::utils::datetime::{
    format_date_time, format_date_time_local, format_date_time_parts, format_date_time_relative,
    get_short_timezone_name, DateStyle, FormatConfig, LocaleConfig, TimePrecision, DATETIME_ALVEUS_ZONE,
    DATETIME_ALVEUS_ZONE_SHORT,
};
use alveus_datetime::utils::duration::{format_seconds, DurationConfig};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

#[derive(Parser)]
#[command(name = "alveus-datetime")]
#[command(about = "Format dates, times and durations for display", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./alveus-datetime.toml or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format an RFC 3339 instant (or "now")
    Format {
        instant: String,

        #[arg(long)]
        style: Option<StyleArg>,

        #[arg(long)]
        time: Option<TimeArg>,

        /// Append the zone name
        #[arg(long, conflicts_with = "no_timezone")]
        timezone: bool,

        /// Never append the zone name
        #[arg(long)]
        no_timezone: bool,

        /// Locale tag, e.g. en-GB
        #[arg(long)]
        locale: Option<String>,

        /// IANA zone, e.g. America/Chicago
        #[arg(long)]
        zone: Option<String>,

        /// Replace the date with Today/Tomorrow when it applies
        #[arg(long, conflicts_with_all = ["local", "parts"])]
        relative: bool,

        /// Use the system locale and zone
        #[arg(long, conflicts_with = "parts")]
        local: bool,

        /// Print the formatted parts as JSON
        #[arg(long)]
        parts: bool,
    },
    /// Format a number of seconds
    Duration {
        seconds: f64,

        #[arg(long, default_value = "short")]
        style: StyleArg,

        /// Hide the seconds component
        #[arg(long)]
        no_seconds: bool,
    },
    /// Format partial dates (YYYY, YYYY-MM, YYYY-MM-DD), most recent first
    Partial { values: Vec<String> },
    /// Print a short time zone name
    Zone {
        #[arg(long)]
        locale: Option<String>,

        /// Defaults to the organizational zone
        #[arg(long)]
        zone: Option<String>,
    },
    /// Write a default configuration file
    InitConfig { path: Option<PathBuf> },
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Short,
    Long,
}

impl From<StyleArg> for DateStyle {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::Short => DateStyle::Short,
            StyleArg::Long => DateStyle::Long,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TimeArg {
    None,
    Minutes,
    Seconds,
}

impl From<TimeArg> for TimePrecision {
    fn from(value: TimeArg) -> Self {
        match value {
            TimeArg::None => TimePrecision::None,
            TimeArg::Minutes => TimePrecision::Minutes,
            TimeArg::Seconds => TimePrecision::Seconds,
        }
    }
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    if value.eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Invalid RFC 3339 instant: {}", value))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Command::Format {
            instant,
            style,
            time,
            timezone,
            no_timezone,
            locale,
            zone,
            relative,
            local,
            parts,
        } => {
            let instant = parse_instant(&instant)?;

            let mut format_config: FormatConfig = config.format_config();
            if let Some(style) = style {
                format_config.style = style.into();
            }
            if let Some(time) = time {
                format_config.time = time.into();
            }
            if timezone {
                format_config.timezone = Some(true);
            } else if no_timezone {
                format_config.timezone = Some(false);
            }

            if local {
                println!("{}", format_date_time_local(instant, &format_config));
                return Ok(());
            }

            let locale_config = LocaleConfig::from_names(
                locale.as_deref().or(config.display.locale.as_deref()),
                zone.as_deref().or(config.display.zone.as_deref()),
            )?;

            if parts {
                let parts = format_date_time_parts(instant, &format_config, &locale_config);
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else if relative {
                println!("{}", format_date_time_relative(instant, &format_config, &locale_config)?);
            } else {
                println!("{}", format_date_time(instant, &format_config, &locale_config));
            }
        }
        Command::Duration {
            seconds,
            style,
            no_seconds,
        } => {
            println!("{}", format_seconds(seconds, &DurationConfig::new(style.into(), !no_seconds)));
        }
        Command::Partial { mut values } => {
            values.sort_by(|a, b| sort_partial_date_string(Some(a.as_str()), Some(b.as_str())));
            for value in &values {
                println!("{}\t{}", value, format_partial_date_string(Some(value.as_str())));
            }
        }
        Command::Zone { locale, zone } => {
            let name = match (&locale, &zone) {
                (None, None) => (*DATETIME_ALVEUS_ZONE_SHORT).clone(),
                _ => get_short_timezone_name(locale.as_deref(), Some(zone.as_deref().unwrap_or(DATETIME_ALVEUS_ZONE))),
            };
            match name {
                Some(name) => println!("{}", name),
                None => anyhow::bail!("Unknown time zone: {}", zone.as_deref().unwrap_or(DATETIME_ALVEUS_ZONE)),
            }
        }
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)?;
        }
    }

    Ok(())
}
