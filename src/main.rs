use std::process::ExitCode;

use clap::Parser;
use tolgee_sync::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    tolgee_sync::logging::init(args.global.verbose);

    match tolgee_sync::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
