use log::{debug, trace};

use crate::IniStore;

/// A line that was neither blank, a comment, a section header nor `key=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// The line with surrounding whitespace removed.
    pub content: String,
}

/// Lines dropped while parsing. Skipped lines never make a parse fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

enum Line<'a> {
    Blank,
    Comment,
    Header(&'a str),
    Entry { key: &'a str, value: &'a str },
    Malformed,
}

/// Whitespace as understood by C `isspace`: ASCII only, vertical tab included.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

fn strip_inline_comment(value: &str) -> &str {
    match value.find([';', '#']) {
        Some(pos) => trim(&value[..pos]),
        None => value,
    }
}

fn classify(raw: &str) -> Line<'_> {
    let line = trim(raw);
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(';') || line.starts_with('#') {
        return Line::Comment;
    }
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        return Line::Header(trim(&line[1..line.len() - 1]));
    }
    let Some((key, value)) = line.split_once('=') else {
        return Line::Malformed;
    };
    Line::Entry {
        key: trim(key),
        value: strip_inline_comment(trim(value)),
    }
}

/// Parse INI text. Malformed lines are dropped.
pub fn parse(text: &str) -> IniStore {
    parse_with_report(text).0
}

/// Parse INI text and also return the lines that were dropped.
pub fn parse_with_report(text: &str) -> (IniStore, ParseReport) {
    let mut store = IniStore::new();
    let mut report = ParseReport::default();
    let mut current_section = String::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        match classify(raw_line) {
            Line::Blank | Line::Comment => {}
            Line::Header(name) => {
                trace!("line {line_no}: entering section [{name}]");
                current_section = name.to_string();
            }
            Line::Entry { key, value } => {
                store.insert(current_section.as_str(), key, value);
            }
            Line::Malformed => {
                let content = trim(raw_line).to_string();
                debug!("skipping line {line_no}: no '=' in {content:?}");
                report.skipped.push(SkippedLine {
                    line: line_no,
                    content,
                });
            }
        }
    }

    (store, report)
}
