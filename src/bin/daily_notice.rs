use lib::daily_notice::models::Args;
use lib::daily_notice::run_tool::{load_config, run};
use lib::daily_notice::weather_getter::HttpForecast;

use std::time::Duration;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    /* Get config from config.json and environment */
    let config = match load_config(&args.config_json_path) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    /* Build the forecast client */
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(config.weather_timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            error!("Could not build HTTP client: {}", err);
            std::process::exit(1);
        }
    };
    let forecast = HttpForecast {
        client,
        api_base: config.weather_api_base.clone(),
    };

    if let Err(err) = run(forecast, &args, config).await {
        error!("{}", err);
        std::process::exit(1);
    }
}
