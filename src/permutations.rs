/// Permutation counting for blocks and whole surveys
///
/// Counts use unbounded-precision integers: RandomizedMultiChoice grows as
/// a product over options and overflows fixed-width integers for modestly
/// sized surveys.
use crate::block::{Block, BlockKind, Survey};
use num_bigint::BigUint;

/// Number of distinct letter fragments one block can produce.
///
/// SingleChoice and RandomizedSingleChoice select exactly one of N groups,
/// so candidates are summed; RandomizedMultiChoice options are each
/// independently present or absent, so per-option counts multiply. The
/// extra 1 on optional blocks stands for "no selection".
pub fn block_permutations(block: &Block) -> BigUint {
    let one_if_optional = if block.required { 0usize } else { 1usize };

    match &block.kind {
        BlockKind::StaticText { .. } => BigUint::from(1u8),
        BlockKind::RandomStaticText { candidates } => BigUint::from(candidates.len()),
        BlockKind::SingleChoice { options, .. } => {
            // A zero-option block renders an empty group and contributes
            // exactly one outcome, required or not
            BigUint::from((options.len() + one_if_optional).max(1))
        }
        BlockKind::RandomizedSingleChoice { options, .. } => {
            let choices: usize = options.iter().map(|o| o.candidates.len()).sum();
            BigUint::from(choices + one_if_optional)
        }
        BlockKind::MultiChoice { options, .. } => {
            // 2^N subsets; a required block excludes the all-empty one,
            // unless there are no options to select at all
            let subsets = BigUint::from(1u8) << options.len();
            if block.required && !options.is_empty() {
                subsets - BigUint::from(1u8)
            } else {
                subsets
            }
        }
        BlockKind::RandomizedMultiChoice { options, .. } => options
            .iter()
            .map(|o| BigUint::from(o.candidates.len() + one_if_optional))
            .product(),
    }
}

/// Total count for the whole survey: the product over all retained blocks.
/// An empty survey yields 1, the empty product.
pub fn total_permutations(survey: &Survey) -> BigUint {
    survey.blocks().iter().map(block_permutations).product()
}
