/// Unform - a letter-block survey language core
///
/// This library implements the tab-delimited mini-language that describes a
/// set of fill-in-the-blank letter choices: a typed block model with six
/// record kinds, a line-oriented parser with per-line error recovery, a
/// permutation counter over unbounded-precision integers, and a renderer
/// that turns the block collection into an interactive choice form.
///
/// # Example
///
/// ```
/// use unform::validate_with_seed;
///
/// let survey = "Text\tRequired\tDear councilmember,\nRadio\t\tTone\tpolite\tPlease\tblunt\tNow";
/// let outcome = validate_with_seed(survey, 42);
/// assert!(outcome.is_valid());
/// ```
pub mod block;
pub mod diagnostic;
pub mod parser;
pub mod permutations;
pub mod render;
pub mod span;
pub mod tokenizer;
pub mod validate;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Re-export main types for convenience
pub use block::{Block, BlockKind, FieldId, FieldRole, Survey};
pub use parser::{parse, Parsed, ParseIssue};
pub use permutations::{block_permutations, total_permutations};
pub use render::{render, RenderOptions};
pub use span::Span;
pub use validate::{validate, ValidationOutcome};

/// Render a parsed survey with a deterministic choice of all randomized
/// texts
///
/// # Example
/// ```
/// use unform::{parse, render_with_seed, RenderOptions};
///
/// let parsed = parse("Random Text\t\tHi\tHello");
/// let markup = render_with_seed(&parsed.survey, &RenderOptions::new("id"), 42);
/// assert!(markup.contains("static0"));
/// ```
pub fn render_with_seed(survey: &Survey, options: &RenderOptions, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    render(survey, options, &mut rng)
}

/// Validate raw survey text with a deterministic preview
pub fn validate_with_seed(input: &str, seed: u64) -> ValidationOutcome {
    validate::validate_with_seed(input, seed)
}
