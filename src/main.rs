use clap::Parser;
use colored::Colorize;
use log::debug;
use scenesheet::cli::{Cli, CliCommand, CliContext, CliError};
use scenesheet::config::{find_config_file, Config, CONFIG};
use scenesheet::warn_fn;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Load configuration first
    let (config, config_path) = match &cli.config {
        Some(path) => (Config::from_path(path)?, Some(path.clone())),
        None => {
            let config = CONFIG.as_ref().map_err(|e| e.clone())?.clone();
            (config, find_config_file()?)
        }
    };

    // Initialize logging with configured level
    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level());
    init_logging(&log_level);
    debug!("Using config file: {:?}", config_path);
    for warning in config.validate()? {
        warn_fn!("run", "Config warning: {}", warning);
    }

    let ctx = CliContext::new(&cli, config, config_path)?;
    cli.command.execute(&ctx).await
}

fn init_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'warn'", log_level);
            log::LevelFilter::Warn
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
