mod app;
mod cli;
mod config;
mod consts;
mod creator;
mod error;
mod template;
mod utils;

use std::process::ExitCode;

use clap::CommandFactory;

use cli::Cli;
use config::Config;
use error::AppError;
use utils::set_debug;

fn main() -> ExitCode {
    let config = Config::load();
    let cli = Cli::parse_env().with_config(&config);
    set_debug(cli.debug);

    if cli.debug
        && let Some(path) = &config.source
    {
        eprintln!("[DEBUG] Loaded config from {}", path.display());
    }

    match app::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(AppError::HelpRequested | AppError::NoFiles) => {
            let help = Cli::command().render_help();
            eprintln!("{help}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
