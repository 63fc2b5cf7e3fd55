use prof_client::ProcessOutcome;

use crate::cli::GlobalFlags;
use crate::output::{notice, output};
use crate::progress::Progress;

/// Clear the spinner only when extraction actually ran.
pub fn finish_progress<E>(progress: &Progress, outcome: &Result<ProcessOutcome, E>) {
    match outcome {
        Ok(ProcessOutcome::Processed { .. }) => progress.finish_clear(),
        Ok(_) | Err(_) => progress.finish_err("processing did not complete"),
    }
}

/// Print the outcome of a faculty page submission. A backend refusal is an
/// error; a page seen before is not.
pub fn report_outcome(outcome: &ProcessOutcome, flags: &GlobalFlags) -> anyhow::Result<()> {
    notice(&outcome_notice(outcome)?, flags);
    output(outcome, flags.format)
}

fn outcome_notice(outcome: &ProcessOutcome) -> anyhow::Result<String> {
    match outcome {
        ProcessOutcome::Rejected { message } => anyhow::bail!("{message}"),
        ProcessOutcome::AlreadyProcessed => Ok(
            "This faculty page was processed before; nothing new was stored. \
             Pass --force to process it again."
                .to_string(),
        ),
        ProcessOutcome::Processed { total, .. } => Ok(format!("Stored {total} professor(s).")),
    }
}
