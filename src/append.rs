// src/append.rs
//
// Interactive "add a testimonial" flow: prompt → validate → preview → confirm →
// append one line. Generic over reader/writer so it runs without a terminal.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    core::sanitize,
    file::{self, PathError},
    testimonials::Testimonial,
};

/// A required answer was empty.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{field} is required and cannot be empty")]
pub struct ValidationError {
    pub field: &'static str,
}

#[derive(Debug, Error)]
pub enum AppendError {
    #[error("CSV file not found at: {}", .0.display())]
    MissingCsv(PathBuf),
    #[error("CSV path is not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not append to {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppendOutcome {
    Added(Testimonial),
    Declined,
    Invalid(ValidationError),
}

/// Trimmed answer, or the labelled error.
pub fn validate_input(input: &str, field: &'static str) -> Result<String, ValidationError> {
    let t = input.trim();
    if t.is_empty() {
        return Err(ValidationError { field });
    }
    Ok(s!(t))
}

/// Blank → generated from the name; otherwise upper-cased.
pub fn resolve_initials(input: &str, name: &str) -> String {
    let t = input.trim();
    if t.is_empty() { sanitize::initials(name) } else { t.to_uppercase() }
}

pub fn is_confirmation(answer: &str) -> bool {
    let a = answer.trim();
    a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")
}

struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// EOF reads as an empty answer.
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = s!();
        self.input.read_line(&mut line)?;
        Ok(s!(line.trim_end_matches(['\r', '\n'])))
    }

    fn required(
        &mut self,
        prompt: &str,
        field: &'static str,
    ) -> io::Result<Result<String, ValidationError>> {
        let answer = self.ask(prompt)?;
        Ok(validate_input(&answer, field))
    }
}

fn collect<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> io::Result<Result<Testimonial, ValidationError>> {
    macro_rules! required {
        ($prompt:expr, $field:expr) => {
            match p.required($prompt, $field)? {
                Ok(v) => v,
                Err(e) => return Ok(Err(e)),
            }
        };
    }

    let name = required!("Full Name: ", "Name");
    let title = required!("Job Title (e.g., ICU Nurse, Charge Nurse): ", "Title");
    let hospital = required!("Hospital/Facility Name: ", "Hospital");
    let location_from = required!("Location in Philippines (e.g., Manila, Cebu): ", "Location From");
    let location_to = required!("Location in USA (e.g., Los Angeles, Houston): ", "Location To");
    let quote = required!("Testimonial Quote: ", "Quote");

    let suggested = sanitize::initials(&name);
    let answer = p.ask(&format!("Initials (press Enter for auto-generated: {suggested}): "))?;
    let initials = resolve_initials(&answer, &name);

    Ok(Ok(Testimonial { name, title, hospital, location_from, location_to, quote, initials }))
}

fn preview<W: Write>(out: &mut W, t: &Testimonial) -> io::Result<()> {
    writeln!(out, "\nPreview:")?;
    writeln!(out, "Name: {}", t.name)?;
    writeln!(out, "Title: {}", t.title)?;
    writeln!(out, "Hospital: {}", t.hospital)?;
    writeln!(out, "From: {} to {}", t.location_from, t.location_to)?;
    writeln!(out, "Quote: {}", dquote!(&t.quote))?;
    writeln!(out, "Initials: {}", t.initials)
}

/// Run the whole flow against `csv_path`.
///
/// A missing file is an error (callers exit non-zero). A validation failure or
/// a declined confirmation is a normal outcome and leaves the file untouched.
pub fn run_interactive<R: BufRead, W: Write>(
    csv_path: &Path,
    input: R,
    out: W,
) -> Result<AppendOutcome, AppendError> {
    if let Err(e) = file::ensure_file(csv_path) {
        loge!("Append: {e}");
        return Err(match e {
            PathError::Missing(p) => AppendError::MissingCsv(p),
            PathError::NotAFile(p) => AppendError::NotAFile(p),
        });
    }

    let mut p = Prompter { input, out };
    writeln!(p.out, "\nAdd New Testimonial to Unifhorce CSV\n")?;
    writeln!(p.out, "Please provide the following information:\n")?;

    let t = match collect(&mut p)? {
        Ok(t) => t,
        Err(e) => {
            logd!("Append: Validation failed: {e}");
            writeln!(p.out, "\nError: {e}")?;
            return Ok(AppendOutcome::Invalid(e));
        }
    };

    preview(&mut p.out, &t)?;
    let answer = p.ask("\nAdd this testimonial? (y/N): ")?;
    if !is_confirmation(&answer) {
        writeln!(p.out, "Testimonial not added.")?;
        return Ok(AppendOutcome::Declined);
    }

    let line = t.to_csv_line();
    file::append_line(csv_path, &line).map_err(|e| AppendError::Write {
        path: csv_path.to_path_buf(),
        reason: e.to_string(),
    })?;
    logf!("Append: Added {:?} → {}", t.name, csv_path.display());

    writeln!(p.out, "\nTestimonial successfully added to CSV!")?;
    writeln!(p.out, "File: {}", csv_path.display())?;
    writeln!(p.out, "Tip: Reload the testimonials to see the new entry.")?;

    Ok(AppendOutcome::Added(t))
}
