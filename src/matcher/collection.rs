use std::ops::{Add, Sub};

use tracing::debug;

use crate::change::{Change, ChangeDetails};
use crate::config::MatcherConfig;
use crate::diff::{DiffEngine, ViolationReport};
use crate::error::{ChangeCollectionError, Result};
use crate::report::Reporter;
use crate::rule::{Declaration, Polarity, Predicate, RuleSet};
use crate::snapshot::Snapshot;
use super::state::MatcherState;
use super::Matcher;

/// `change` matcher extended with `to_include` / `to_exclude` rules.
///
/// With no rules declared it behaves exactly like [`Change`].
pub struct CollectionChange<'a, V: Snapshot> {
    base: Change<'a, V>,
    rules: RuleSet<V::Item>,
    config: MatcherConfig,
    state: MatcherState,
    parent_matches: bool,
    report: ViolationReport<V::Item>,
}

impl<'a, V: Snapshot> CollectionChange<'a, V> {
    pub fn new(accessor: impl FnMut() -> V + 'a) -> Self {
        Self {
            base: Change::new(accessor),
            rules: RuleSet::new(),
            config: MatcherConfig::default(),
            state: MatcherState::Unevaluated,
            parent_matches: false,
            report: ViolationReport::new(),
        }
    }

    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.base = self.base.described_as(description);
        self
    }

    pub fn from(mut self, value: V) -> Self {
        self.base = self.base.from(value);
        self
    }

    pub fn to(mut self, value: V) -> Self {
        self.base = self.base.to(value);
        self
    }

    pub fn to_include(self, declaration: impl Into<Declaration<V::Item>>) -> Result<Self> {
        self.declare(Polarity::Include, declaration.into())
    }

    pub fn to_exclude(self, declaration: impl Into<Declaration<V::Item>>) -> Result<Self> {
        self.declare(Polarity::Exclude, declaration.into())
    }

    pub fn to_include_where(self, predicate: impl Fn(&V::Item) -> bool + 'static) -> Result<Self> {
        self.to_include(Predicate::new(predicate))
    }

    pub fn to_exclude_where(self, predicate: impl Fn(&V::Item) -> bool + 'static) -> Result<Self> {
        self.to_exclude(Predicate::new(predicate))
    }

    fn declare(mut self, polarity: Polarity, declaration: Declaration<V::Item>) -> Result<Self> {
        self.rules.declare(polarity, declaration)?;
        Ok(self)
    }

    pub fn rules(&self) -> &RuleSet<V::Item> {
        &self.rules
    }

    pub fn report(&self) -> &ViolationReport<V::Item> {
        &self.report
    }

    pub fn state(&self) -> MatcherState {
        self.state
    }

    pub fn details(&self) -> Option<&ChangeDetails<V>> {
        self.base.details()
    }

    pub fn expects_collection_change(&self) -> bool {
        self.rules.has_rules()
    }

    fn diff_snapshots(&mut self) {
        let Some(details) = self.base.details() else {
            return;
        };
        let before = details.actual_before.items();
        let after = details.actual_after.items();
        self.report = DiffEngine::from_rules(&self.rules).diff(before.as_deref(), after.as_deref());
    }
}

impl<'a, V> CollectionChange<'a, V>
where
    V: Snapshot + PartialOrd + Add<Output = V> + Sub<Output = V> + 'a,
{
    pub fn by(mut self, delta: V) -> Self {
        self.base = self.base.by(delta);
        self
    }
}

impl<'a, V: Snapshot> Matcher for CollectionChange<'a, V> {
    fn matches(&mut self, action: &mut dyn FnMut()) -> bool {
        self.rules.seal();
        self.parent_matches = self.base.matches(action);

        if self.expects_collection_change() {
            self.diff_snapshots();
        }

        let passed = self.parent_matches && self.report.is_clean();
        debug!(
            include_rules = self.rules.include().len(),
            exclude_rules = self.rules.exclude().len(),
            changed = self.parent_matches,
            violations = self.report.total(),
            passed,
            "evaluated collection change"
        );
        self.state = MatcherState::Evaluated { passed };
        passed
    }

    fn does_not_match(&mut self, action: &mut dyn FnMut()) -> Result<bool> {
        if self.expects_collection_change() {
            self.state = MatcherState::NegatedUnsupported;
            return Err(negation_unsupported());
        }

        self.rules.seal();
        let passed = self.base.does_not_match(action)?;
        self.state = MatcherState::Evaluated { passed };
        Ok(passed)
    }

    fn failure_message(&self) -> String {
        let base_failure = if self.parent_matches {
            None
        } else {
            Some(self.base.failure_message())
        };
        let report = self.expects_collection_change().then_some(&self.report);

        Reporter::new(&self.config).render(base_failure.as_deref(), report, self.base.details())
    }

    fn failure_message_when_negated(&self) -> Result<String> {
        if self.expects_collection_change() {
            return Err(negation_unsupported());
        }
        self.base.failure_message_when_negated()
    }

    fn description(&self) -> String {
        let mut text = self.base.description();
        if !self.rules.include().is_empty() {
            text.push_str(&format!(" to include {} rule(s)", self.rules.include().len()));
        }
        if !self.rules.exclude().is_empty() {
            text.push_str(&format!(" to exclude {} rule(s)", self.rules.exclude().len()));
        }
        text
    }
}

fn negation_unsupported() -> ChangeCollectionError {
    ChangeCollectionError::NegationUnsupported(
        "`to_include` / `to_exclude` rules cannot be negated".to_string(),
    )
}
