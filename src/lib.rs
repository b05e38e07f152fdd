mod error;
mod evaluate;
mod types;

pub use error::DecisionError;
pub use types::{
    EvaluationReport, FallbackKind, Reply, Rule, RuleTable, RuleTableBuilder, When,
};
