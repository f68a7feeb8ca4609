/// Tokenizer for the tab-delimited block language
use crate::span::Span;

/// A retained (non-blank) logical line of the survey text. The index counts
/// every line of the input, including dropped blanks, so indices of retained
/// lines may have gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    pub index: usize,
    pub raw: &'a str,
    pub span: Span,
}

/// Split raw text into non-blank lines, preserving each line's original
/// index and byte span.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for (index, raw) in input.split('\n').enumerate() {
        let next_offset = offset + raw.len() + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if !raw.trim().is_empty() {
            lines.push(Line {
                index,
                raw,
                span: Span::new(offset, offset + raw.len()),
            });
        }
        offset = next_offset;
    }

    lines
}

/// Split a line into its tab-separated fields. Field 0 is the kind keyword,
/// field 1 the required marker, fields 2.. the kind-specific payload.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split('\t').collect()
}

/// Find every index i where field i and field i+1 are both empty. The two
/// randomized kinds use these "double-blank" dividers to pack several
/// option groups onto one line; each divider i marks "the next group's
/// label begins at i+2".
pub fn find_dividers(fields: &[&str]) -> Vec<usize> {
    let mut dividers = Vec::new();

    for i in 0..fields.len().saturating_sub(1) {
        if fields[i].is_empty() && fields[i + 1].is_empty() {
            dividers.push(i);
        }
    }

    dividers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blanks_keeps_indices() {
        let input = "first\n\n  \nsecond\n";
        let lines = split_lines(input);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].index, 0);
        assert_eq!(lines[0].raw, "first");
        assert_eq!(lines[1].index, 3);
        assert_eq!(lines[1].raw, "second");
    }

    #[test]
    fn test_split_lines_spans_cover_raw_text() {
        let input = "abc\n\ndef";
        let lines = split_lines(input);
        assert_eq!(&input[lines[0].span.range()], "abc");
        assert_eq!(&input[lines[1].span.range()], "def");
    }

    #[test]
    fn test_split_lines_handles_crlf() {
        let lines = split_lines("a\tb\r\nc\td\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].raw, "a\tb");
        assert_eq!(lines[1].raw, "c\td");
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields("Text\tRequired\thello"), vec![
            "Text", "Required", "hello"
        ]);
        assert_eq!(split_fields("solo"), vec!["solo"]);
        assert_eq!(split_fields("a\t\tb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_find_dividers() {
        let fields = vec!["Radio", "", "title", "", "", "a", "x", "", "", "b", "y"];
        assert_eq!(find_dividers(&fields), vec![3, 7]);
    }

    #[test]
    fn test_find_dividers_excludes_final_index() {
        // The final field can complete a divider pair but cannot start one
        let fields = vec!["a", "", ""];
        assert_eq!(find_dividers(&fields), vec![1]);
        let fields = vec!["a", ""];
        assert_eq!(find_dividers(&fields), Vec::<usize>::new());
    }

    #[test]
    fn test_find_dividers_triple_blank_reports_both() {
        let fields = vec!["a", "", "", "", "b"];
        assert_eq!(find_dividers(&fields), vec![1, 2]);
    }
}
