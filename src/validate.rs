/// Validation orchestrator - parse, count, and preview without persistence
use crate::parser::parse;
use crate::permutations::total_permutations;
use crate::render::{
    render, RenderOptions, OUTPUT_FIELD_HIDDEN, OUTPUT_FIELD_VISIBLE, SUBMIT_SNIPPET,
};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Survey identifier echoed into preview renders; previews are never
/// persisted, so the id carries no meaning.
const PREVIEW_SURVEY_ID: &str = "0";

/// Outcome of validating raw survey text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValidationOutcome {
    /// No issues: a preview render plus the total permutation count. The
    /// preview suppresses submission and shows the output field for
    /// inspection.
    Valid {
        preview: String,
        permutations: BigUint,
    },
    /// At least one issue: the ordered error strings, never a partial
    /// preview
    Invalid { errors: Vec<String> },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }
}

/// Run the block factory over raw text, compute the total count, and render
/// a preview. Nothing is persisted.
pub fn validate<R: Rng>(input: &str, rng: &mut R) -> ValidationOutcome {
    let parsed = parse(input);

    if !parsed.issues.is_empty() {
        return ValidationOutcome::Invalid {
            errors: parsed.issues.iter().map(ToString::to_string).collect(),
        };
    }

    let permutations = total_permutations(&parsed.survey);
    let markup = render(&parsed.survey, &RenderOptions::new(PREVIEW_SURVEY_ID), rng);

    ValidationOutcome::Valid {
        preview: preview_transform(&markup),
        permutations,
    }
}

/// Validate with a deterministic preview
pub fn validate_with_seed(input: &str, seed: u64) -> ValidationOutcome {
    let mut rng = StdRng::seed_from_u64(seed);
    validate(input, &mut rng)
}

/// Disarm the submit call and make the assembled-output field visible
fn preview_transform(markup: &str) -> String {
    markup
        .replace(SUBMIT_SNIPPET, "")
        .replace(OUTPUT_FIELD_HIDDEN, OUTPUT_FIELD_VISIBLE)
}
