use std::{fs, path::Path};

use chrono::{Datelike, Duration, Local, NaiveDate};
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{info, warn};

use super::{
    error::NoticeResult,
    history::HistoryStore,
    models::{
        notice_model::Notice,
        schedule_model::{ScheduleDocument, SchoolDay},
        Args, Command, Config, GenerateArgs, HistoryCommand, ScheduleCommand,
    },
    parser::parse,
    renderer::write_page,
    schedule_store::{load_schedule, save_schedule},
    session::{tomorrow, GenerateRequest, Session},
    weather_getter::ForecastGetter,
};

pub async fn run<FG: ForecastGetter>(getter: FG, args: &Args, config: Config) -> NoticeResult<()> {
    let today = Local::now().date_naive();
    match &args.command {
        Command::Generate(generate_args) => {
            let mut session = Session::open(config);
            let request = generate_request(generate_args)?;
            let generated = session.generate(&getter, request, today).await?;
            println!("{}", generated.text);
            if let Some(page) = generated.page {
                println!("Mobile page written to {}", page.display());
            }
        }
        Command::Page {
            notice_path,
            date,
            strict,
        } => {
            let parsed = parse(&fs::read_to_string(notice_path)?);
            let notice = if *strict {
                parsed.into_strict()?
            } else {
                for section in &parsed.unmatched {
                    warn!("Section '{}' not found in {}", section, notice_path.display());
                }
                parsed.notice
            };
            let target = date.unwrap_or_else(|| notice_date(&notice, today));
            let (_, path) = write_page(&notice, target, &config.output_dir)?;
            println!("Mobile page written to {}", path.display());
        }
        Command::Weather { date } => {
            let mut session = Session::with_schedule(config, Default::default());
            let target = date.unwrap_or_else(tomorrow);
            println!("{}", session.weather_for(&getter, target, today).await);
        }
        Command::History(command) => {
            let history = Session::with_schedule(config, Default::default()).history();
            run_history(command, &history)?;
        }
        Command::Schedule(command) => run_schedule(command, &config)?,
    }
    Ok(())
}

fn generate_request(args: &GenerateArgs) -> NoticeResult<GenerateRequest> {
    let special_notes = match (&args.notes, &args.notes_file) {
        (Some(notes), _) => notes.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => String::new(),
    };
    Ok(GenerateRequest {
        target: args.date.unwrap_or_else(tomorrow),
        special_notes,
        weather: args.weather.clone(),
        write_page: args.page,
        record_history: !args.no_history,
    })
}

/// Date of an imported notice: the occurrence of its month and day closest to
/// `today`, so a `1月1日` notice read on New Year's Eve lands in the next year.
/// The day after `today` when the header is unreadable.
fn notice_date(notice: &Notice, today: NaiveDate) -> NaiveDate {
    notice
        .month_day()
        .and_then(|(month, day)| {
            [today.year() - 1, today.year(), today.year() + 1]
                .into_iter()
                .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
                .min_by_key(|date| (*date - today).num_days().abs())
        })
        .unwrap_or(today + Duration::days(1))
}

fn run_history(command: &HistoryCommand, history: &HistoryStore) -> NoticeResult<()> {
    match command {
        HistoryCommand::List { full } => {
            let records = history.list()?;
            println!("共找到 {} 条历史记录", records.len());
            for record in records.iter().rev() {
                println!("[{}]", record.timestamp.format("%Y-%m-%dT%H:%M:%S%.f"));
                print!("{}", record);
                if *full {
                    println!("{}", record.reminder_content);
                }
                println!();
            }
        }
        HistoryCommand::Delete { timestamps } => {
            let removed = history.delete(|record| timestamps.contains(&record.timestamp))?;
            println!("成功删除 {} 条记录", removed);
        }
        HistoryCommand::Clear => history.clear()?,
    }
    Ok(())
}

fn run_schedule(command: &ScheduleCommand, config: &Config) -> NoticeResult<()> {
    match command {
        ScheduleCommand::Validate { path } => {
            let path = path.as_deref().unwrap_or(config.schedule_json_path.as_path());
            load_schedule(path)?;
            println!("{} is a valid schedule", path.display());
        }
        ScheduleCommand::Import { path } => {
            let schedule = load_schedule(path)?;
            save_schedule(&schedule, &config.schedule_json_path, &config.backup_dir)?;
            info!(
                "Imported schedule from {} into {}",
                path.display(),
                config.schedule_json_path.display()
            );
        }
        ScheduleCommand::Show { weekday } => {
            let schedule = load_schedule(&config.schedule_json_path)?;
            let labels = match weekday {
                Some(label) => vec![label.as_str()],
                None => SchoolDay::ALL.iter().map(|day| day.label()).collect(),
            };
            for label in labels {
                print_day(&schedule, label);
            }
        }
    }
    Ok(())
}

fn print_day(schedule: &ScheduleDocument, label: &str) {
    let day = schedule.day(label);
    println!("{}", label);
    match day.courses {
        Some(courses) => {
            println!("  上午: {}", courses.morning.join(", "));
            println!("  下午: {}", courses.afternoon.join(", "));
        }
        None => println!("  无课程安排"),
    }
    for club in day.clubs {
        println!("  社团 {}: {}", club.name, club.members.join(", "));
    }
    if !day.duty.is_empty() {
        println!("  值日: {}", day.duty);
    }
}

/// Reads `config.json` (if present) and `NOTICE_*` environment variables.
pub fn load_config(config_json_path: &Path) -> NoticeResult<Config> {
    let config: Config = Figment::new()
        .merge(Json::file(config_json_path))
        .merge(Env::prefixed("NOTICE_"))
        .extract()?;
    info!(
        "Read config.json from {}",
        std::path::absolute(config_json_path)?.display()
    );
    Ok(config)
}

#[cfg(test)]
#[path = "tests/run_tool_tests.rs"]
mod tests;
