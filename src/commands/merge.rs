//! Merge command implementation
//!
//! Resolves the job, then either prints the plan (`--dry-run`) or writes the
//! merged document. A missing input directory or an empty input set is
//! reported and ends the run successfully unless `--strict` is given.

use tracing::debug;

use crate::cli::MergeArgs;
use crate::config::MergeJob;
use crate::error::Result;
use crate::merge;
use crate::ui::status;
use crate::ui::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};

/// Run merge command
pub fn run(args: MergeArgs) -> Result<()> {
    let job = MergeJob::resolve(&args)?;
    debug!(?job, "resolved merge job");

    let result = if args.dry_run {
        merge::plan(&job).map(|files| status::print_plan(&files, &job.output_file))
    } else {
        let mut reporter: Box<dyn ProgressReporter> = if args.quiet {
            Box::new(SilentProgressReporter)
        } else {
            Box::new(InteractiveProgressReporter::new())
        };
        merge::merge(&job, reporter.as_mut()).map(|report| {
            debug!(articles = ?report.articles, "merged articles");
            if !args.quiet {
                status::print_success(&report);
            }
        })
    };

    match result {
        Err(e) if e.is_recoverable() && !args.strict => {
            status::print_notice(&e);
            Ok(())
        }
        other => other,
    }
}
