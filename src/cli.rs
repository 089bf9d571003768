// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};

use crate::{
    append::{self, AppendOutcome},
    audit::{self, contrast},
    config::{consts::DEFAULT_CSV_PATH, options::AppOptions},
    core::source::Source,
    progress::Progress,
    testimonials::{self, LOAD_FAILED_MESSAGE},
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Unifhorce testimonial + accessibility tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively append a testimonial to the CSV file (default)
    Add {
        /// Data file to append to
        #[arg(long, default_value = DEFAULT_CSV_PATH)]
        csv: PathBuf,
    },
    /// Load the CSV and print every record
    List(ListArgs),
    /// Run the accessibility checks against an HTML page
    Audit {
        /// File path or http:// URL (defaults to the bundled page)
        #[arg(long)]
        site: Option<String>,
    },
    /// Contrast ratio of two hex colours, e.g. `contrast '#333333' '#ffffff'`
    Contrast { fg: String, bg: String },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// File path or http:// URL (defaults to the bundled CSV)
    #[arg(long, conflicts_with = "url")]
    csv: Option<String>,
    #[arg(long)]
    url: Option<String>,
    /// Also report rows dropped for a wrong field count
    #[arg(long, short)]
    diagnostics: bool,
}

/// Prints load progress to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Add { csv: PathBuf::from(DEFAULT_CSV_PATH) });

    match command {
        Command::Add { csv } => run_add(csv),
        Command::List(args) => run_list(args),
        Command::Audit { site } => run_audit(site),
        Command::Contrast { fg, bg } => run_contrast(&fg, &bg),
    }
}

fn run_add(csv: PathBuf) -> Result<()> {
    let stdin = io::stdin();
    // Validation failures are printed by the flow and are not a process error.
    let outcome = append::run_interactive(&csv, stdin.lock(), io::stdout())?;
    if let AppendOutcome::Invalid(e) = outcome {
        logd!("Append: Exited after validation error ({e})");
    }
    Ok(())
}

fn run_list(args: ListArgs) -> Result<()> {
    let source = args.url.as_deref().or(args.csv.as_deref());
    if let Some(s) = source {
        Source::parse(s)?;
    }
    let options = AppOptions::from_env().with_overrides(source, None);
    let source = &options.source.csv;

    let report = match testimonials::load(source, Some(&mut CliProgress)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{LOAD_FAILED_MESSAGE}");
            return Err(e.into());
        }
    };

    let mut out = io::stdout().lock();
    for (i, t) in report.testimonials.iter().enumerate() {
        let flag = match t.missing_field() {
            Some(field) => format!("  [incomplete: {field}]"),
            None => s!(),
        };
        writeln!(
            out,
            "{:>3}. {} ({}, {}) {} → {}: \"{}\" [{}]{flag}",
            i + 1,
            t.name,
            t.title,
            t.hospital,
            t.location_from,
            t.location_to,
            t.quote,
            t.initials,
        )?;
    }

    if args.diagnostics {
        for d in &report.dropped {
            writeln!(out, "dropped line {}: {} fields, expected {}", d.line, d.found, d.expected)?;
        }
    }
    writeln!(out, "{} testimonial(s) from {source}", report.testimonials.len())?;
    Ok(())
}

fn run_audit(site: Option<String>) -> Result<()> {
    if let Some(s) = site.as_deref() {
        // Validate explicitly so a typo isn't silently replaced by the default.
        Source::parse(s)?;
    }
    let options = AppOptions::from_env().with_overrides(None, site.as_deref());
    let target = &options.audit.target;

    let results = audit::audit_source(target)?;

    let mut out = io::stdout().lock();
    writeln!(out, "Accessibility Test Results — {target}")?;
    for r in &results {
        writeln!(out, "{} {}: {}", r.status.icon(), r.name, r.message)?;
    }
    Ok(())
}

fn run_contrast(fg: &str, bg: &str) -> Result<()> {
    let ratio = contrast::contrast_ratio_hex(fg, bg)
        .ok_or_else(|| eyre!("Invalid colour(s): {fg:?}, {bg:?} (expected #rrggbb)"))?;

    let verdict = |ok: bool| if ok { "pass" } else { "fail" };
    println!("Contrast ratio: {ratio:.2}:1");
    println!("AA normal text (4.5:1): {}", verdict(contrast::meets_contrast_requirements(ratio, false)));
    println!("AA large text (3:1):    {}", verdict(contrast::meets_contrast_requirements(ratio, true)));
    Ok(())
}
