mod collection;
mod state;

pub use collection::CollectionChange;
pub use state::MatcherState;

use crate::error::Result;

/// The assertion protocol the `expect` glue drives.
pub trait Matcher {
    /// Runs `action` and reports whether the expectation holds.
    fn matches(&mut self, action: &mut dyn FnMut()) -> bool;

    /// Negated form. Matchers that cannot be negated return
    /// `NegationUnsupported` without running the action.
    fn does_not_match(&mut self, action: &mut dyn FnMut()) -> Result<bool>;

    fn failure_message(&self) -> String;

    fn failure_message_when_negated(&self) -> Result<String>;

    fn description(&self) -> String;
}
