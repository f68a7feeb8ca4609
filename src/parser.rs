/// Block factory - builds typed blocks from tokenized lines
///
/// Every issue is line-scoped and non-fatal: the offending line contributes
/// no block, the issue is recorded, and parsing continues with the next
/// line.
use crate::block::{
    Block, BlockKind, ChoiceOption, MultiOption, RandomChoiceOption, RandomMultiOption, Survey,
};
use crate::span::Span;
use crate::tokenizer::{find_dividers, split_fields, split_lines, Line};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseIssue {
    /// Field 0 is not a known kind keyword or alias
    UnrecognizedKind {
        keyword: String,
        line: usize,
        raw: String,
        span: Span,
    },
    /// Field count too small or misaligned for the declared kind
    MalformedBlock {
        keyword: String,
        line: usize,
        raw: String,
        span: Span,
        detail: String,
    },
    /// Label list and text/candidate list lengths differ
    LengthMismatch {
        keyword: String,
        line: usize,
        raw: String,
        span: Span,
    },
}

impl ParseIssue {
    pub fn span(&self) -> Span {
        match self {
            ParseIssue::UnrecognizedKind { span, .. }
            | ParseIssue::MalformedBlock { span, .. }
            | ParseIssue::LengthMismatch { span, .. } => *span,
        }
    }
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseIssue::UnrecognizedKind { keyword, line, raw, .. } => write!(
                f,
                "Unrecognized type of block '{}' at line {}; ignoring and moving to the next line: {}",
                keyword, line, raw
            ),
            ParseIssue::MalformedBlock { keyword, line, raw, detail, .. } => write!(
                f,
                "Failed to load {} at line {}: {}; here's the text I stumbled over: {}",
                keyword, line, detail, raw
            ),
            ParseIssue::LengthMismatch { keyword, line, raw, .. } => write!(
                f,
                "Failed to load {} at line {}: labels and output texts do not pair up; here's the text I stumbled over: {}",
                keyword, line, raw
            ),
        }
    }
}

impl std::error::Error for ParseIssue {}

/// Result of one parse call: the retained blocks plus every line-scoped
/// issue encountered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub survey: Survey,
    pub issues: Vec<ParseIssue>,
}

/// Parse raw survey text into a block collection, accumulating issues
/// instead of aborting. Blank input yields an empty survey and no issues.
pub fn parse(input: &str) -> Parsed {
    let mut survey = Survey::new();
    let mut issues = Vec::new();

    for line in split_lines(input) {
        let fields = split_fields(line.raw);
        if let Some(block) = build_block(&fields, &line, &mut issues) {
            survey.push(block);
        }
    }

    Parsed { survey, issues }
}

/// Keyword matching is case, space, and underscore insensitive so the short
/// aliases and the legacy long-form names resolve to the same kinds.
fn normalize_keyword(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Shared per-line context for building issues
struct LineCtx<'a> {
    keyword: &'a str,
    line: &'a Line<'a>,
}

impl LineCtx<'_> {
    fn malformed(&self, detail: &str) -> ParseIssue {
        ParseIssue::MalformedBlock {
            keyword: self.keyword.to_string(),
            line: self.line.index,
            raw: self.line.raw.to_string(),
            span: self.line.span,
            detail: detail.to_string(),
        }
    }

    fn mismatch(&self) -> ParseIssue {
        ParseIssue::LengthMismatch {
            keyword: self.keyword.to_string(),
            line: self.line.index,
            raw: self.line.raw.to_string(),
            span: self.line.span,
        }
    }
}

fn build_block(fields: &[&str], line: &Line<'_>, issues: &mut Vec<ParseIssue>) -> Option<Block> {
    let keyword = fields[0];
    let ctx = LineCtx { keyword, line };

    let built = match normalize_keyword(keyword).as_str() {
        "statictext" | "staticblock" | "text" => build_static_text(fields, &ctx),
        "randomstatictext" | "randomizedstaticblock" | "randomtext" => {
            build_random_static_text(fields, &ctx)
        }
        "singlechoice" | "dynamicblock" | "radio" => build_single_choice(fields, &ctx),
        "randomizedsinglechoice" | "randomizeddynamicblock" | "randomradio" => {
            build_randomized_single_choice(fields, &ctx)
        }
        "multichoice" | "multipledynamicblock" | "checkbox" => build_multi_choice(fields, &ctx),
        "randomizedmultichoice" | "multiplerandomizeddynamicblock" | "randomcheckbox" => {
            build_randomized_multi_choice(fields, &ctx, issues)
        }
        _ => {
            issues.push(ParseIssue::UnrecognizedKind {
                keyword: keyword.to_string(),
                line: line.index,
                raw: line.raw.to_string(),
                span: line.span,
            });
            return None;
        }
    };

    match built {
        Ok(kind) => {
            let mut block = Block::new(line.index, kind);
            if fields
                .get(1)
                .map_or(false, |f| f.eq_ignore_ascii_case("required"))
            {
                block.required = true;
            }
            Some(block)
        }
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

fn build_static_text(fields: &[&str], ctx: &LineCtx<'_>) -> Result<BlockKind, ParseIssue> {
    match fields.get(2) {
        Some(text) => Ok(BlockKind::StaticText {
            text: (*text).to_string(),
        }),
        None => Err(ctx.malformed("not enough items")),
    }
}

fn build_random_static_text(fields: &[&str], ctx: &LineCtx<'_>) -> Result<BlockKind, ParseIssue> {
    if fields.len() < 3 {
        return Err(ctx.malformed("not enough items"));
    }
    Ok(BlockKind::RandomStaticText {
        candidates: fields[2..].iter().map(|f| f.to_string()).collect(),
    })
}

/// Layout: title, then alternating label/text pairs
fn build_single_choice(fields: &[&str], ctx: &LineCtx<'_>) -> Result<BlockKind, ParseIssue> {
    let title = fields.get(2).ok_or_else(|| ctx.malformed("not enough items"))?;
    // A bare title is a zero-option group; it renders as an empty fieldset
    let rest = &fields[3..];
    if rest.len() % 2 != 0 {
        // A trailing label without its output text
        return Err(ctx.mismatch());
    }

    let options = rest
        .chunks_exact(2)
        .map(|pair| ChoiceOption {
            label: pair[0].to_string(),
            text: pair[1].to_string(),
        })
        .collect();

    Ok(BlockKind::SingleChoice {
        title: (*title).to_string(),
        options,
    })
}

/// Layout: title, then divider-separated groups of (label, candidate...).
/// Each divider index i starts a group whose label sits at i+2; the group's
/// candidates run to the next divider, or to the end of the line for the
/// final group.
fn build_randomized_single_choice(
    fields: &[&str],
    ctx: &LineCtx<'_>,
) -> Result<BlockKind, ParseIssue> {
    let title = fields.get(2).ok_or_else(|| ctx.malformed("not enough items"))?;
    let dividers = find_dividers(fields);
    if dividers.is_empty() {
        return Err(ctx.malformed("no option groups; separate groups with double-tab dividers"));
    }

    let mut options: Vec<RandomChoiceOption> = Vec::new();

    for (i, &divider) in dividers.iter().enumerate() {
        let label_at = divider + 2;
        if label_at >= fields.len() {
            return Err(ctx.malformed("not enough items"));
        }
        let end = dividers.get(i + 1).copied().unwrap_or(fields.len());
        let candidates: Vec<String> = if end > label_at + 1 {
            fields[label_at + 1..end].iter().map(|f| f.to_string()).collect()
        } else {
            Vec::new()
        };
        if candidates.is_empty() {
            // A label with nothing to draw from
            return Err(ctx.mismatch());
        }

        let label = fields[label_at];
        // Duplicate labels: last-seen payload wins, first-seen position kept
        if let Some(existing) = options.iter_mut().find(|o| o.label == label) {
            existing.candidates = candidates;
        } else {
            options.push(RandomChoiceOption {
                label: label.to_string(),
                candidates,
            });
        }
    }

    Ok(BlockKind::RandomizedSingleChoice {
        title: (*title).to_string(),
        options,
    })
}

/// Layout: title, then consecutive (label, text, connector) triples
fn build_multi_choice(fields: &[&str], ctx: &LineCtx<'_>) -> Result<BlockKind, ParseIssue> {
    let title = fields.get(2).ok_or_else(|| ctx.malformed("not enough items"))?;
    // A bare title is a zero-option group, as with SingleChoice
    let rest = &fields[3..];
    if rest.len() % 3 != 0 {
        return Err(ctx.malformed(
            "options must come as label, text, connector triples",
        ));
    }

    let options = rest
        .chunks_exact(3)
        .map(|triple| MultiOption {
            label: triple[0].to_string(),
            text: triple[1].to_string(),
            connector: triple[2].to_string(),
        })
        .collect();

    Ok(BlockKind::MultiChoice {
        title: (*title).to_string(),
        options,
    })
}

/// Layout: title, then divider-separated groups of
/// (label, candidate..., connector). The connector is the field immediately
/// preceding the next divider, or the last field of the line for the final
/// group. A group too short to carry both a candidate and a connector is
/// reported and dropped; the remaining groups still build the block.
fn build_randomized_multi_choice(
    fields: &[&str],
    ctx: &LineCtx<'_>,
    issues: &mut Vec<ParseIssue>,
) -> Result<BlockKind, ParseIssue> {
    let title = fields.get(2).ok_or_else(|| ctx.malformed("not enough items"))?;
    let dividers = find_dividers(fields);
    if dividers.is_empty() {
        return Err(ctx.malformed("no option groups; separate groups with double-tab dividers"));
    }

    let mut options: Vec<RandomMultiOption> = Vec::new();

    for (i, &divider) in dividers.iter().enumerate() {
        let label_at = divider + 2;
        if label_at >= fields.len() {
            return Err(ctx.malformed("not enough items"));
        }
        let end = dividers.get(i + 1).copied().unwrap_or(fields.len());
        let rest: &[&str] = if end > label_at + 1 {
            &fields[label_at + 1..end]
        } else {
            &[]
        };
        if rest.len() < 2 {
            issues.push(ctx.malformed("not enough items, or missing tabs"));
            continue;
        }

        let connector = rest[rest.len() - 1];
        let candidates: Vec<String> = rest[..rest.len() - 1]
            .iter()
            .map(|f| f.to_string())
            .collect();

        let label = fields[label_at];
        if let Some(existing) = options.iter_mut().find(|o| o.label == label) {
            existing.candidates = candidates;
            existing.connector = connector.to_string();
        } else {
            options.push(RandomMultiOption {
                label: label.to_string(),
                candidates,
                connector: connector.to_string(),
            });
        }
    }

    Ok(BlockKind::RandomizedMultiChoice {
        title: (*title).to_string(),
        options,
    })
}
