#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # laygrade
//!
//! A structural autograder for Android layout submissions.
//!
//! The `grade` command reads a submitted `activity_main.xml`, evaluates a
//! declarative rule set against its element tree, and prints a single JSON
//! result document to stdout. That command always exits successfully: the
//! grading platform consumes failures as fields inside the document, never
//! as exit codes.

use std::path::PathBuf;

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use laygrade::{
    error::GradeError,
    grade::{self, ResultDocument},
    harness, layout,
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade a submission and emit the platform result document.
    Grade {
        /// Path to the submitted layout file.
        artifact: Option<PathBuf>,
        /// Optional declarative rule file.
        rules:    Option<PathBuf>,
        /// Suppress the stderr overview table.
        no_table: bool,
    },
    /// Check that a layout file is well-formed.
    Check(PathBuf),
    /// Print the parsed element tree as JSON.
    Info(PathBuf),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    let artifact = positional::<PathBuf>("ARTIFACT")
        .help("Path to the submitted layout file")
        .optional();
    let rules = long("rules")
        .help("Path to a declarative rule file; defaults to the built-in Hi Android set")
        .argument::<PathBuf>("FILE")
        .optional();
    let no_table = long("no-table")
        .help("Suppress the grading overview table printed to stderr")
        .switch();

    let grade = construct!(Cmd::Grade {
        rules,
        no_table,
        artifact
    })
    .to_options()
    .command("grade")
    .help("Grade a submission and print the result document");

    let check_file = positional::<PathBuf>("FILENAME").help("Path to a layout file");
    let check = construct!(Cmd::Check(check_file))
        .to_options()
        .command("check")
        .help("Check a layout file for well-formedness");

    let info_file = positional::<PathBuf>("FILENAME").help("Path to a layout file");
    let info = construct!(Cmd::Info(info_file))
        .to_options()
        .command("info")
        .help("Print the parsed layout tree as JSON");

    let cmd = construct!([grade, check, info]);

    cmd.to_options()
        .descr("Structural autograder for Android layout submissions")
        .run()
}

/// Runs the grading pipeline and prints the result document to stdout.
/// This path never reports failure to the caller: a rule file that cannot
/// be loaded, a missing artifact, or a malformed submission all become
/// fields of the emitted document.
fn run_grade(artifact: Option<PathBuf>, rules: Option<PathBuf>, no_table: bool) {
    let document = match rules.map(|p| grade::load_rules(&p)).transpose() {
        Ok(loaded) => {
            let assertions = loaded.unwrap_or_else(grade::hi_android);
            harness::grade(artifact.as_deref(), &assertions)
        }
        Err(e) => ResultDocument::from_error(&GradeError::internal(e)),
    };

    if let ResultDocument::Success(report) = &document {
        if !no_table {
            grade::show_result(report);
        }
    }

    println!("{}", document.to_json());
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Grade {
            artifact,
            rules,
            no_table,
        } => {
            run_grade(artifact, rules, no_table);
            Ok(())
        }
        Cmd::Check(f) => match layout::Parser::load(&f) {
            Ok(_) => {
                println!("{} is well-formed", f.display());
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
        Cmd::Info(f) => {
            let parser = layout::Parser::load(&f)?;
            println!("{}", serde_json::to_string_pretty(parser.root())?);
            Ok(())
        }
    }
}
