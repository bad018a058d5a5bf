/*!
 * Pass Planning
 * Deterministic 1-or-2 pass plans computed from the merge options
 */

use serde::{Deserialize, Serialize};

use super::options::MergeOptions;

/// Well-known work paths inside the per-operation filesystem
pub mod work_paths {
    /// Per-index input path, 1-based
    pub fn input(index: usize) -> String {
        format!("/work/input-{}.pdf", index + 1)
    }

    pub const COVER: &str = "/work/cover.pdf";
    pub const INTERMEDIATE: &str = "/work/docs-with-dividers.pdf";
    pub const OUTPUT: &str = "/work/output.pdf";
}

/// One engine invocation in the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    pub inputs: Vec<String>,
    pub output: String,
    pub divider: bool,
}

/// Compute the pass plan for `input_count` staged documents
///
/// Cover and divider together force two passes: dividers go between the
/// original documents in pass 1, and pass 2 prepends the cover without a
/// second round of dividers, so the cover sits directly before the divided
/// block.
pub fn plan_passes(input_count: usize, options: &MergeOptions) -> Vec<Pass> {
    let inputs: Vec<String> = (0..input_count).map(work_paths::input).collect();

    if !options.add_cover {
        return vec![Pass {
            inputs,
            output: work_paths::OUTPUT.to_string(),
            divider: options.insert_divider,
        }];
    }

    if !options.insert_divider {
        let mut with_cover = vec![work_paths::COVER.to_string()];
        with_cover.extend(inputs);
        return vec![Pass {
            inputs: with_cover,
            output: work_paths::OUTPUT.to_string(),
            divider: false,
        }];
    }

    vec![
        Pass {
            inputs,
            output: work_paths::INTERMEDIATE.to_string(),
            divider: true,
        },
        Pass {
            inputs: vec![
                work_paths::COVER.to_string(),
                work_paths::INTERMEDIATE.to_string(),
            ],
            output: work_paths::OUTPUT.to_string(),
            divider: false,
        },
    ]
}
