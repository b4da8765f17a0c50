// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use cpdir::app;
use cpdir::cli::{Args, USAGE};
use cpdir::config::Config;
use cpdir::error::AppError;
use cpdir::logging;

const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::TooManyValues => {
                println!("{USAGE}");
                return ExitCode::from(EXIT_USAGE);
            }
            // --help, --version and malformed option values
            _ => err.exit(),
        },
    };

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("cpdir: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };
    logging::init(config.log_level);

    match app::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        // Each failure was printed as it was reported.
        Err(AppError::Incomplete { .. }) => ExitCode::from(EXIT_FAILURE),
        Err(e) => {
            eprintln!("cpdir: {e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
