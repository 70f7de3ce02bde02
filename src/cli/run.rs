use clap::CommandFactory;

use super::{
    args::{Arguments, Command, LanguageArgs},
    commands::{CommandResult, init::init, jobs, targets::targets},
    context::JobContext,
    exit_status::ExitStatus,
    report,
};
use anyhow::Result;

/// Main entry point for the CLI.
///
/// Dispatches to the job named by the subcommand. Configuration problems, I/O errors and
/// an unreachable server come back as `Err`; failures of single languages are reported
/// and turn into [`ExitStatus::Failure`]. Steps that finished before an error are still
/// printed.
pub fn run_cli(Arguments { global, command }: Arguments) -> Result<ExitStatus> {
    let Some(command) = command else {
        Arguments::command().print_help().ok();
        return Ok(ExitStatus::Success);
    };

    if let Command::Init = command {
        return init();
    }

    let ctx = JobContext::load(&global)?;
    let mut result = CommandResult::default();
    let outcome = match command {
        Command::Upload(LanguageArgs { language }) => {
            jobs::upload(&ctx, &ctx.client()?, language.as_deref(), &mut result)
        }
        Command::Download(LanguageArgs { language }) => {
            jobs::download(&ctx, &ctx.client()?, language.as_deref(), &mut result)
        }
        Command::UploadAll => jobs::upload_all(&ctx, &ctx.client()?, &mut result),
        Command::DownloadAll => jobs::download_all(&ctx, &ctx.client()?, &mut result),
        Command::Generate => jobs::generate(&ctx, &mut result),
        Command::Targets => {
            report::print_targets(&targets(&ctx.config));
            return Ok(ExitStatus::Success);
        }
        Command::Init => unreachable!("handled above"),
    };

    report::print_result(&result);
    outcome?;
    Ok(result.exit_status())
}
