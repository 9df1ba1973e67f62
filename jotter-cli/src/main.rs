mod cli;
mod commands;

use clap::{crate_name, Parser};
use figment::Figment;
use jotter::config::figment::read_app_config;
use jotter::error_exit;
use jotter::logging::{init_logging, UseSyslog};
use log::debug;

use crate::cli::CliConfig;
use crate::commands::execute;

fn main() {
    let cli_config = CliConfig::parse();
    init_logging(UseSyslog::from(cli_config.syslog));

    debug!("{} starting up", crate_name!());

    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }
    let app_config = read_app_config(&cli_config.config_file, Figment::new())
        .unwrap_or_else(|e| error_exit!("failed to read configuration: {e}"));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| error_exit!("failed to start the runtime: {e}"));

    if let Err(e) = runtime.block_on(execute(&app_config, cli_config.command)) {
        error_exit!("{e}");
    }
}
