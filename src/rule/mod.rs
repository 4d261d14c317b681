mod types;
mod set;

pub use types::{Declaration, Polarity, Predicate, Rule};
pub use set::RuleSet;
