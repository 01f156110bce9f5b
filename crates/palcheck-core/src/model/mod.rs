pub mod evaluation;
pub mod options;

pub use evaluation::{EvaluationResult, Stats, Verdict};
pub use options::NormalizationOptions;
