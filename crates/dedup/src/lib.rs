pub mod config;
pub mod criteria;
pub mod engine;
pub mod grouping;
pub mod text;

pub use config::DedupConfig;
pub use criteria::{Confidence, MatchCriterion};
pub use engine::{evaluate_pair, PairVerdict};
pub use grouping::{scan, DuplicateGroup, ScanOutcome, ScanStats};
