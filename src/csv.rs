// src/csv.rs
use std::borrow::Cow;
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Scanner state for one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scan {
    Unquoted,
    Quoted,
}

/// Non-blank lines with their 1-based line numbers.
/// Splits on `\n` only; a trailing `\r` is left for field trimming to eat.
pub fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
}

/// Split one CSV line into trimmed fields.
///
/// Quotes toggle the scanner between `Unquoted` and `Quoted`; inside quotes a
/// doubled `""` emits one literal quote. Commas only separate while unquoted.
/// Never fails: an unterminated quote swallows the rest of the line.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut state = Scan::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match (state, ch) {
            (Scan::Quoted, '"') if chars.peek() == Some(&'"') => {
                chars.next(); // double-quote escape
                field.push('"');
            }
            (Scan::Quoted, '"') => state = Scan::Unquoted,
            (Scan::Unquoted, '"') => state = Scan::Quoted,
            (Scan::Unquoted, ',') => {
                fields.push(s!(field.trim()));
                field.clear();
            }
            _ => field.push(ch),
        }
    }

    let last = take(&mut field);
    fields.push(s!(last.trim()));
    fields
}

/* ---------------- Writing ---------------- */

pub fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"')
}

/// Quote + escape a field if and only if it holds a comma or a quote.
pub fn format_field(field: &str) -> Cow<'_, str> {
    if needs_quotes(field) {
        Cow::Owned(dquote!(&field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Encode a row as one CSV line (no line terminator).
pub fn format_row<S: AsRef<str>>(row: &[S]) -> String {
    row.iter()
        .map(|cell| format_field(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
