use super::super::exit_status::ExitStatus;
use crate::pipeline::JobReport;

/// Outcome of one pipeline inside a command.
#[derive(Debug)]
pub struct StepResult {
    pub name: String,
    pub report: JobReport,
}

/// Result of running a job command: one step per pipeline, in run order.
#[derive(Debug, Default)]
pub struct CommandResult {
    pub steps: Vec<StepResult>,
}

impl CommandResult {
    pub fn push(&mut self, name: impl Into<String>, report: JobReport) {
        self.steps.push(StepResult {
            name: name.into(),
            report,
        });
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.steps.iter().any(|s| s.report.has_failures()) {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
