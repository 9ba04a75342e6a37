use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub mod history_model;
pub mod notice_model;
pub mod schedule_model;
pub mod weather_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json with paths, city code and weather endpoint. The file is optional,
///    every value has a default and can be overridden with `NOTICE_*` environment variables.
/// 2. Verbosity switch for debug logging.
/// 3. The command to run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the notice for a date, print it and record it in the history
    Generate(GenerateArgs),
    /// Turn a (possibly hand-edited) text notice into the mobile page
    Page {
        #[arg(long, value_name = "FILE")]
        notice_path: PathBuf,
        /// Date used for the output file name, taken from the notice when omitted
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
        /// Fail instead of warning when a section cannot be found
        #[arg(long)]
        strict: bool,
    },
    /// Look up the weather line for a date
    Weather {
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    #[command(subcommand)]
    History(HistoryCommand),
    #[command(subcommand)]
    Schedule(ScheduleCommand),
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    /// Target date, tomorrow when omitted
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
    #[arg(long, value_name = "TEXT", conflicts_with = "notes_file")]
    pub notes: Option<String>,
    #[arg(long, value_name = "FILE")]
    pub notes_file: Option<PathBuf>,
    /// Use this weather line instead of querying the forecast
    #[arg(long, value_name = "TEXT")]
    pub weather: Option<String>,
    /// Also write the mobile page
    #[arg(long)]
    pub page: bool,
    #[arg(long)]
    pub no_history: bool,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    List {
        /// Print the whole notice of every record
        #[arg(long)]
        full: bool,
    },
    Delete {
        #[arg(long = "timestamp", value_name = "TIMESTAMP", required = true)]
        timestamps: Vec<NaiveDateTime>,
    },
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    /// Check a schedule file, the configured one when omitted
    Validate { path: Option<PathBuf> },
    /// Validate a schedule file and store it as the current schedule
    Import { path: PathBuf },
    Show {
        #[arg(long, value_name = "LABEL")]
        weekday: Option<String>,
    },
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. City code understood by the forecast service
/// 2. Base URL of the forecast service, the city code is appended to it
/// 3. Timeout for the forecast request, in seconds
/// 4. How long a cached weather line stays valid, in minutes
/// 5. Locations of the schedule, its backups, the history log, the weather cache and the output pages
/// 6. How many history records are kept
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub city_code: String,
    pub weather_api_base: String,
    pub weather_timeout_secs: u64,
    pub weather_cache_ttl_minutes: i64,
    pub schedule_json_path: PathBuf,
    pub backup_dir: PathBuf,
    pub history_json_path: PathBuf,
    pub history_limit: usize,
    pub weather_cache_json_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            city_code: "101240701".to_owned(),
            weather_api_base: "http://t.weather.sojson.com/api/weather/city".to_owned(),
            weather_timeout_secs: 5,
            weather_cache_ttl_minutes: 60,
            schedule_json_path: PathBuf::from("schedule_data.json"),
            backup_dir: PathBuf::from("data/backups"),
            history_json_path: PathBuf::from("data/history_records.json"),
            history_limit: 100,
            weather_cache_json_path: PathBuf::from("data/weather_cache.json"),
            output_dir: PathBuf::from("output"),
        }
    }
}
