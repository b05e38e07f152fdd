mod evaluation_report;
mod fallback;
mod rule;
mod ruleset;

pub use evaluation_report::EvaluationReport;
pub(crate) use fallback::Fallback;
pub use fallback::FallbackKind;
pub use rule::Rule;
pub use ruleset::{Reply, RuleTable, RuleTableBuilder, When};
