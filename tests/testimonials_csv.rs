// tests/testimonials_csv.rs
use std::fs;
use std::path::PathBuf;

use unifhorce::core::source::{LoadError, Source};
use unifhorce::csv;
use unifhorce::progress::NullProgress;
use unifhorce::testimonials::{
    self, parse_report, parse_testimonials, validate_testimonial, DroppedRow, Testimonial,
};

const HEADER: &str = "name,title,hospital,locationFrom,locationTo,quote,initials";

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("unifhorce_csv_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample(name: &str) -> Testimonial {
    Testimonial {
        name: name.into(),
        title: "ICU Nurse".into(),
        hospital: "St. Luke's".into(),
        location_from: "Manila".into(),
        location_to: "Los Angeles".into(),
        quote: "Life changing".into(),
        initials: "XX".into(),
    }
}

#[test]
fn header_plus_rows_yields_one_record_per_row() {
    let text = format!(
        "{HEADER}\nA,B,C,D,E,F,G\nH,I,J,K,L,M,N\nO,P,Q,R,S,T,U"
    );
    let out = parse_testimonials(&text);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].name, "A");
    assert_eq!(out[1].quote, "M");
    assert_eq!(out[2].initials, "U");
}

#[test]
fn quoted_comma_survives_encode_and_parse() {
    let mut t = sample("Maria Dela Cruz");
    t.hospital = "Hospital, Inc.".into();
    let line = t.to_csv_line();
    assert!(line.contains("\"Hospital, Inc.\""));

    let out = parse_testimonials(&format!("{HEADER}\n{line}"));
    assert_eq!(out, vec![t]);
}

#[test]
fn embedded_quotes_are_doubled() {
    let mut t = sample("Jose Reyes");
    t.quote = "She said \"great\"".into();
    let line = t.to_csv_line();
    assert!(line.contains("\"She said \"\"great\"\"\""));

    let fields = csv::parse_line(&line);
    assert_eq!(fields[5], "She said \"great\"");
}

#[test]
fn short_rows_are_dropped_with_their_line_number() {
    let text = format!("{HEADER}\nA,B,C,D,E,F,G\n\nonly,three,fields\nH,I,J,K,L,M,N");
    let report = parse_report(&text);
    assert_eq!(report.testimonials.len(), 2);
    assert_eq!(
        report.dropped,
        vec![DroppedRow { line: 4, found: 3, expected: 7 }]
    );
}

#[test]
fn row_missing_its_trailing_field_is_dropped() {
    let text = format!("{HEADER}\nA,B,C,D,E,F,G\nH,I,J,K,L,M");
    let report = parse_report(&text);
    assert_eq!(report.testimonials.len(), 1);
    assert_eq!(report.testimonials[0].name, "A");
    assert_eq!(
        report.dropped,
        vec![DroppedRow { line: 3, found: 6, expected: 7 }]
    );
}

#[test]
fn trailing_comma_keeps_an_empty_last_field() {
    let text = format!("{HEADER}\nA,B,C,D,E,F,");
    let report = parse_report(&text);
    assert!(report.dropped.is_empty());
    assert_eq!(report.testimonials.len(), 1);

    let t = &report.testimonials[0];
    assert_eq!(t.quote, "F");
    assert_eq!(t.initials, "");
    assert!(!validate_testimonial(t));
    assert_eq!(t.missing_field(), Some("Initials"));
}

#[test]
fn crlf_and_blank_lines_are_tolerated() {
    let text = format!("{HEADER}\r\nA,B,C,D,E,F,G\r\n\r\n   \r\nH,I,J,K,L,M,N\r\n");
    let out = parse_testimonials(&text);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].initials, "G");
    assert_eq!(out[1].initials, "N");
}

#[test]
fn empty_input_is_empty() {
    assert!(parse_testimonials("").is_empty());
    assert!(parse_testimonials(HEADER).is_empty());
}

#[test]
fn validation_requires_every_field() {
    let t = sample("Ana Santos");
    assert!(validate_testimonial(&t));

    let mut blank_quote = t.clone();
    blank_quote.quote = "   ".into();
    assert!(!validate_testimonial(&blank_quote));
    assert_eq!(blank_quote.missing_field(), Some("Quote"));
}

#[test]
fn load_reads_a_file_source() {
    let dir = tmp_dir("load");
    let path = dir.join("testimonials.csv");
    fs::write(&path, format!("{HEADER}\n{}", sample("Ramon").to_csv_line())).unwrap();

    let report = testimonials::load(&Source::File(path), Some(&mut NullProgress)).unwrap();
    assert_eq!(report.testimonials.len(), 1);
    assert_eq!(report.testimonials[0].name, "Ramon");
}

#[test]
fn load_missing_file_is_an_error() {
    let dir = tmp_dir("missing");
    let err = testimonials::load(&Source::File(dir.join("nope.csv")), None).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
}

#[test]
fn bundled_data_file_parses_cleanly() {
    let text = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/data/testimonials.csv"
    ))
    .unwrap();
    let report = parse_report(&text);
    assert!(report.dropped.is_empty());
    assert!(report.testimonials.iter().all(validate_testimonial));
    assert_eq!(report.testimonials[1].quote, "My recruiter said \"you've got this\" and she was right.");
}
