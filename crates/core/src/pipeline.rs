use crate::apply::{apply_plan, ApplyResult, Renamer};
use crate::config::RenameConfig;
use crate::confirm::confirm;
use crate::console::Console;
use crate::error::RenameError;
use crate::inspect::{inspect, InspectReport};
use crate::pattern::Matcher;
use crate::planner::generate_plan;
use crate::preview::{render_preview, render_stats, PreviewFormat};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug)]
pub enum RunOutcome {
    Inspected(InspectReport),
    Cancelled,
    Applied(ApplyResult),
}

/// Runs one invocation: inspect only, or plan, preview, confirm and apply.
pub fn run<S, R, O, E>(
    config: &RenameConfig,
    paths: &[S],
    console: &mut Console<R, O, E>,
    renamer: &dyn Renamer,
) -> Result<RunOutcome, RenameError>
where
    S: AsRef<str>,
    R: BufRead,
    O: Write,
    E: Write,
{
    let Some(sample) = paths.first() else {
        return Err(RenameError::Usage);
    };

    if config.test_only {
        let report = inspect(&config.pattern, sample.as_ref());
        console.out.write_all(report.summary().as_bytes())?;
        if let Some(problem) = report.problem() {
            writeln!(console.err, "{problem}")?;
        }
        return Ok(RunOutcome::Inspected(report));
    }

    let matcher = Matcher::compile(&config.pattern)?;
    debug!(
        "pattern={} template={} separator={:?}",
        matcher, config.template, config.separator
    );
    let plan = generate_plan(paths, &matcher, &config.template, config.separator)?;

    console
        .out
        .write_all(render_preview(&plan, config.preview_format)?.as_bytes())?;
    if config.preview_format == PreviewFormat::Table {
        console.out.write_all(render_stats(&plan).as_bytes())?;
    }

    let proceed = config.auto_confirm || confirm(console)?;
    if !proceed {
        writeln!(console.out, "Rename canceled.")?;
        return Ok(RunOutcome::Cancelled);
    }

    let result = apply_plan(&plan, renamer);
    for (_, reason) in result.failures() {
        writeln!(console.err, "{reason}")?;
    }
    writeln!(
        console.out,
        "renamed {} file(s), {} failed",
        result.applied(),
        result.failed()
    )?;
    Ok(RunOutcome::Applied(result))
}
