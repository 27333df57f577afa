//! # stackdetect
//!
//! A CLI tool that scans a repository for Pulumi stack definition files and
//! emits a deployment matrix for CI pipelines.
//!
//! ## Overview
//!
//! stackdetect is built on top of stackdetectlib and provides the
//! command-line surface a pipeline step invokes. It finds every
//! `Pulumi.<stack>.yaml`/`.yml` under a working directory, optionally
//! filters by stack name, and reports the resulting matrix together with
//! `count` and `has_stacks` so downstream jobs can fan out (or skip
//! deployment entirely when nothing was found).
//!
//! ## Usage
//!
//! ```bash
//! # Detect stacks under the current directory
//! stackdetect
//!
//! # Detect stacks under a checkout
//! stackdetect --working-directory ./repo
//!
//! # Only deploy dev and prod stacks
//! stackdetect --include-stacks dev,prod
//!
//! # Deploy everything except staging
//! stackdetect --exclude-stacks staging
//! ```
//!
//! When the `GITHUB_OUTPUT` environment variable names a file, the three
//! `matrix=`/`count=`/`has_stacks=` lines are appended to it; otherwise the
//! results only go to the console.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use console::Style;
use stackdetectlib::{discover_stacks, MatrixReport, StackFilter};

/// Environment variable naming the key=value reporting sink.
const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("stackdetect")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detect Pulumi stacks and generate a deployment matrix")
        .arg(
            Arg::new("working-directory")
                .short('d')
                .long("working-directory")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(".")
                .help("Directory to search for stack files"),
        )
        .arg(
            Arg::new("include-stacks")
                .long("include-stacks")
                .help("Comma-separated list of stack names to include"),
        )
        .arg(
            Arg::new("exclude-stacks")
                .long("exclude-stacks")
                .help("Comma-separated list of stack names to exclude"),
        )
}

/// Build the stack name filter from matches
fn build_filter(matches: &ArgMatches) -> StackFilter {
    let mut filter = StackFilter::new();

    if let Some(list) = matches.get_one::<String>("include-stacks") {
        filter = filter.include_names(list);
    }
    if let Some(list) = matches.get_one::<String>("exclude-stacks") {
        filter = filter.exclude_names(list);
    }

    filter
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let root = matches
        .get_one::<PathBuf>("working-directory")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let heading = Style::new().bold();
    let stack_style = Style::new().green();

    eprintln!("{}", heading.apply_to("=== Pulumi Stack Detection ==="));
    eprintln!("Searching for stack files in: {}", root.display());

    let discovered = discover_stacks(&root)
        .with_context(|| format!("failed to scan '{}'", root.display()))?;
    eprintln!("Total unique stacks found: {}", discovered.len());
    for entry in &discovered {
        eprintln!(
            "  {} in project {}",
            stack_style.apply_to(&entry.stack),
            entry.project
        );
    }

    let filter = build_filter(matches);
    let stacks = if filter.is_empty() {
        discovered
    } else {
        if !filter.include.is_empty() {
            eprintln!("Applying include filter: {:?}", filter.include);
        }
        if !filter.exclude.is_empty() {
            eprintln!("Applying exclude filter: {:?}", filter.exclude);
        }
        filter.apply(discovered)
    };

    let report = MatrixReport::from_entries(&stacks)?;

    println!("Final matrix: {}", report.matrix);
    println!("Count: {}", report.count);
    println!("Has stacks: {}", report.has_stacks());

    // Only write pipeline outputs when a sink is configured; a missing
    // sink is the local-run case, not an error.
    if let Ok(sink) = std::env::var(OUTPUT_ENV) {
        if !sink.is_empty() {
            report
                .append_to(&sink)
                .with_context(|| format!("failed to write outputs to {OUTPUT_ENV}"))?;
            eprintln!("Wrote outputs to {sink}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
