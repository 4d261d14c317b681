pub mod error;
pub mod config;
pub mod snapshot;
pub mod rule;
pub mod diff;
pub mod change;
pub mod matcher;
pub mod report;
pub mod expect;
pub mod registry;

pub use error::{ChangeCollectionError, Result};
pub use config::MatcherConfig;
pub use snapshot::Snapshot;
pub use rule::{Declaration, Polarity, Predicate, Rule, RuleSet};
pub use diff::{DiffEngine, Violation, ViolationCategory, ViolationReport};
pub use change::{Change, ChangeDetails};
pub use matcher::{CollectionChange, Matcher, MatcherState};
pub use report::Reporter;
pub use expect::{expect, Expectation};
pub use registry::{
    change, change_with_collection, change_without_collection, is_registered, register,
    registered_config,
};
