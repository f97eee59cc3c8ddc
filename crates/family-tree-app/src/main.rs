use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use family_tree_app::{run, AppConfig, Cli};
use log::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config);
    let filter = match &config {
        Ok(config) => config.log_filter.clone(),
        Err(_) => AppConfig::default().log_filter,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    match config.and_then(|config| run(cli, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
