use std::process::ExitCode;

use clap::Parser;
use version_calculator::action::{self, CliRuntime};
use version_calculator::cli::Args;
use version_calculator::logging::log_error;

fn main() -> ExitCode {
    let args = Args::parse();
    let mut runtime = CliRuntime::new(args);

    let Some(versions) = action::run(&mut runtime) else {
        return ExitCode::FAILURE;
    };

    if let Err(err) = runtime.finish(&versions) {
        log_error(&format!("{:#}", err));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
