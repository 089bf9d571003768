// src/testimonials.rs
//
// Testimonial records: positional mapping from CSV rows, completeness check,
// encoding back to a CSV line, and the fetch → parse loader.

use crate::{
    core::source::{LoadError, Source},
    csv,
    progress::Progress,
};

/// Number of positional columns in the data file.
pub const FIELD_COUNT: usize = 7;

/// Human labels, in column order.
pub const FIELD_LABELS: [&str; FIELD_COUNT] = [
    "Name",
    "Title",
    "Hospital",
    "Location From",
    "Location To",
    "Quote",
    "Initials",
];

/// Shown by frontends when the data file can't be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load testimonials. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Testimonial {
    pub name: String,
    pub title: String,
    pub hospital: String,
    pub location_from: String,
    pub location_to: String,
    pub quote: String,
    pub initials: String,
}

impl Testimonial {
    /// Positional mapping. Missing trailing fields become empty; extras are ignored.
    pub fn from_fields(fields: Vec<String>) -> Self {
        let mut it = fields.into_iter();
        let mut next = || it.next().unwrap_or_default();
        Self {
            name: next(),
            title: next(),
            hospital: next(),
            location_from: next(),
            location_to: next(),
            quote: next(),
            initials: next(),
        }
    }

    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.name,
            &self.title,
            &self.hospital,
            &self.location_from,
            &self.location_to,
            &self.quote,
            &self.initials,
        ]
    }

    /// Label of the first empty field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        self.fields()
            .iter()
            .zip(FIELD_LABELS)
            .find(|(value, _)| value.trim().is_empty())
            .map(|(_, label)| label)
    }

    /// One CSV line, no terminator.
    pub fn to_csv_line(&self) -> String {
        csv::format_row(&self.fields())
    }
}

/// True iff all seven fields are non-empty after trimming.
pub fn validate_testimonial(t: &Testimonial) -> bool {
    t.missing_field().is_none()
}

/// A data row that was skipped because its field count didn't match the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedRow {
    /// 1-based line in the source text
    pub line: usize,
    pub found: usize,
    pub expected: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub testimonials: Vec<Testimonial>,
    pub dropped: Vec<DroppedRow>,
}

/// Parse and keep track of which rows were skipped.
pub fn parse_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let mut lines = csv::records(text);

    let Some((_, header)) = lines.next() else {
        logd!("Parse: Empty input, no header");
        return report;
    };
    let expected = csv::parse_line(header).len();

    for (line, raw) in lines {
        let fields = csv::parse_line(raw);
        if fields.len() == expected {
            report.testimonials.push(Testimonial::from_fields(fields));
        } else {
            logd!("Parse: Dropping line {line}: {} fields, expected {expected}", fields.len());
            report.dropped.push(DroppedRow { line, found: fields.len(), expected });
        }
    }

    report
}

/// Parse CSV text into testimonials. Rows with the wrong field count are dropped silently.
pub fn parse_testimonials(text: &str) -> Vec<Testimonial> {
    parse_report(text).testimonials
}

/// Fetch the data file and parse it.
pub fn load(
    source: &Source,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ParseReport, LoadError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log(&format!("Loading testimonials from {source}…"));
    }
    logf!("Load: Begin source={source}");

    let result = source.fetch().map(|text| parse_report(&text));

    match &result {
        Ok(report) => {
            logf!(
                "Load: OK records={} dropped={}",
                report.testimonials.len(),
                report.dropped.len()
            );
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(report.testimonials.len());
            }
        }
        Err(e) => loge!("Load: Error source={source}: {e}"),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fields_pads_and_truncates() {
        let t = Testimonial::from_fields(vec![s!("A"), s!("B")]);
        assert_eq!(t.name, "A");
        assert_eq!(t.title, "B");
        assert_eq!(t.initials, "");

        let many: Vec<String> = (0..9).map(|i| i.to_string()).collect();
        let t = Testimonial::from_fields(many);
        assert_eq!(t.initials, "6");
    }

    #[test]
    fn missing_field_names_first_gap() {
        let mut t = Testimonial::from_fields(
            ["Ana", "RN", "St. Luke's", "Cebu", "Houston", "Great", "A"]
                .map(String::from)
                .to_vec(),
        );
        assert_eq!(t.missing_field(), None);
        t.hospital = s!("   ");
        t.quote = s!();
        assert_eq!(t.missing_field(), Some("Hospital"));
    }
}
