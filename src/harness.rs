#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{path::Path, time::Instant};

use tracing::{debug, info};

use crate::{
    error::GradeError,
    grade::{Assertion, Report, ResultDocument, Totals, evaluate},
    layout::Parser,
};

/// Stages of a grading run, in execution order. A run that fails while
/// loading or validating jumps straight to `Normalizing` in error mode;
/// `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No work started yet.
    Idle,
    /// Reading and parsing the submitted artifact.
    Loading,
    /// Evaluating assertions against the parsed tree.
    Validating,
    /// Reducing outcomes into counts.
    Aggregating,
    /// Producing the bounded score and the result document.
    Normalizing,
    /// The document is ready.
    Done,
}

/// Runs the full pipeline for the artifact at `path`. This function is
/// total: every failure collapses into the zero-score error document, and
/// the caller decides nothing about process exit based on it. Failures are
/// data, not process outcomes.
pub fn grade(path: Option<&Path>, assertions: &[Assertion]) -> ResultDocument {
    match run_stages(path, assertions) {
        Ok(document) => document,
        Err(err) => {
            info!(error = %err, "grading run failed, emitting zero-score document");
            ResultDocument::from_error(&err)
        }
    }
}

/// Drives the stage machine once, start to finish. Each stage runs exactly
/// once; every assertion is a pure function of the parsed tree, so there
/// is nothing to retry.
fn run_stages(
    path: Option<&Path>,
    assertions: &[Assertion],
) -> Result<ResultDocument, GradeError> {
    let started = Instant::now();
    let mut stage = Stage::Idle;
    debug!(?stage);

    stage = Stage::Loading;
    debug!(?stage);
    let path = path.ok_or(GradeError::MissingArgument)?;
    let parser = Parser::load(path)?;

    stage = Stage::Validating;
    debug!(?stage);
    let results = evaluate(parser.root(), assertions);

    stage = Stage::Aggregating;
    debug!(?stage);
    let totals = Totals::aggregate(&results);

    stage = Stage::Normalizing;
    debug!(?stage);
    let document = Report::render(&results, totals, started.elapsed().as_secs_f64());

    stage = Stage::Done;
    debug!(?stage);
    info!(
        total = totals.total,
        passed = totals.passed,
        failed = totals.failed,
        "grading run complete"
    );

    Ok(document)
}
