//! REDCap metadata toolkit CLI.

use clap::{ColorChoice, Parser};
use redcap_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_choices, run_field_types, run_metadata, run_missing, run_records};
use crate::summary::{
    print_choices_summary, print_field_types_summary, print_metadata_summary,
    print_missing_summary, print_records_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config_path = cli.config.clone();
    let exit_code = match cli.command {
        Command::Records(args) => match run_records(&args, &config_path) {
            Ok(result) => {
                print_records_summary(&result);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Metadata(args) => match run_metadata(&args, &config_path) {
            Ok(result) => {
                print_metadata_summary(&result);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Missing(args) => match run_missing(&args, &config_path) {
            Ok(result) => {
                print_missing_summary(&result);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::FieldTypes(args) => match run_field_types(&args, &config_path) {
            Ok(result) => {
                print_field_types_summary(&result);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Choices(args) => match run_choices(&args, &config_path) {
            Ok(result) => {
                print_choices_summary(&result);
                0
            }
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
