/// Diagnostic reporting using ariadne for readable issue messages
use crate::parser::ParseIssue;
use ariadne::{Color, Label, Report, ReportKind, Source};

/// Report a single parse issue against the raw survey text
pub fn report_issue(source_name: &str, source: &str, issue: &ParseIssue) -> String {
    let mut output = Vec::new();
    let span = issue.span();

    let report = match issue {
        ParseIssue::UnrecognizedKind { keyword, line, .. } => {
            Report::build(ReportKind::Error, source_name, span.start)
                .with_message(format!("Unrecognized type of block: '{}'", keyword))
                .with_label(
                    Label::new((source_name, span.range()))
                        .with_message(format!("line {} declares an unknown block kind", line))
                        .with_color(Color::Red),
                )
                .with_note(
                    "Known kinds: Text, Random Text, Radio, Random Radio, Checkbox, Random Checkbox",
                )
                .finish()
        }
        ParseIssue::MalformedBlock {
            keyword,
            line,
            detail,
            ..
        } => Report::build(ReportKind::Error, source_name, span.start)
            .with_message(format!("Malformed {} block: {}", keyword, detail))
            .with_label(
                Label::new((source_name, span.range()))
                    .with_message(format!("line {} is formatted incorrectly", line))
                    .with_color(Color::Red),
            )
            .with_help("Fields are tab-separated: kind, required marker, then the kind's payload")
            .finish(),
        ParseIssue::LengthMismatch { keyword, line, .. } => {
            Report::build(ReportKind::Error, source_name, span.start)
                .with_message(format!(
                    "{} labels and output texts do not pair up",
                    keyword
                ))
                .with_label(
                    Label::new((source_name, span.range()))
                        .with_message(format!("line {} leaves a label without its text", line))
                        .with_color(Color::Red),
                )
                .with_help("Every display label needs a matching output text")
                .finish()
        }
    };

    report
        .write((source_name, Source::from(source)), &mut output)
        .expect("Failed to write diagnostic");

    String::from_utf8(output).expect("Invalid UTF-8 in diagnostic output")
}

/// Report every issue of a parse call, in input order
pub fn report_issues(source_name: &str, source: &str, issues: &[ParseIssue]) -> String {
    issues
        .iter()
        .map(|issue| report_issue(source_name, source, issue))
        .collect()
}
