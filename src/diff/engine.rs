use tracing::trace;

use crate::rule::{Rule, RuleSet};
use super::report::{Violation, ViolationReport};

/// Compares a before and an after snapshot against include/exclude rules.
///
/// Pure: no state beyond the borrowed rules. A `None` snapshot is not a
/// collection and contributes no violations.
pub struct DiffEngine<'a, T> {
    include: &'a [Rule<T>],
    exclude: &'a [Rule<T>],
}

impl<'a, T: Clone + PartialEq> DiffEngine<'a, T> {
    pub fn new(include: &'a [Rule<T>], exclude: &'a [Rule<T>]) -> Self {
        Self { include, exclude }
    }

    pub fn from_rules(rules: &'a RuleSet<T>) -> Self {
        Self::new(rules.include(), rules.exclude())
    }

    pub fn diff(&self, before: Option<&[T]>, after: Option<&[T]>) -> ViolationReport<T> {
        let mut report = ViolationReport::new();

        if let Some(before) = before {
            report.missing_in_original = missing_items(self.exclude, before);
            report.extra_in_original = matching_items(before, self.include);
        }

        if let Some(after) = after {
            report.missing_in_final = missing_items(self.include, after);
            report.extra_in_final = matching_items(after, self.exclude);
        }

        trace!(
            missing_in_original = report.missing_in_original.len(),
            extra_in_original = report.extra_in_original.len(),
            missing_in_final = report.missing_in_final.len(),
            extra_in_final = report.extra_in_final.len(),
            "collection diff computed"
        );

        report
    }
}

/// Literal values absent from `items` (duplicates kept), then every predicate
/// no item satisfies.
fn missing_items<T: Clone + PartialEq>(rules: &[Rule<T>], items: &[T]) -> Vec<Violation<T>> {
    let literals = rules.iter().filter_map(|rule| match rule {
        Rule::Literal(values) => Some(values),
        Rule::Predicate(_) => None,
    });

    let mut missing: Vec<Violation<T>> = literals
        .flatten()
        .filter(|value| !items.contains(value))
        .cloned()
        .map(Violation::Item)
        .collect();

    for rule in rules {
        if let Rule::Predicate(predicate) = rule {
            if !items.iter().any(|item| predicate.test(item)) {
                missing.push(Violation::Predicate(predicate.label().to_string()));
            }
        }
    }

    missing
}

/// Distinct items satisfying any rule, in first-seen order.
fn matching_items<T: Clone + PartialEq>(items: &[T], rules: &[Rule<T>]) -> Vec<T> {
    let mut matched: Vec<T> = Vec::new();
    for item in items {
        if rules.iter().any(|rule| rule.matches(item)) && !matched.contains(item) {
            matched.push(item.clone());
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Predicate;

    fn check(engine: &DiffEngine<'_, i32>, before: &[i32], after: &[i32]) -> ViolationReport<i32> {
        engine.diff(Some(before), Some(after))
    }

    fn even() -> Rule<i32> {
        Rule::Predicate(Predicate::named("even", |n: &i32| n % 2 == 0))
    }

    #[test]
    fn test_include_added_item_is_clean() {
        let include = vec![Rule::Literal(vec![1])];
        let engine = DiffEngine::new(&include, &[]);
        let report = check(&engine, &[], &[1]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_include_already_present_is_extra_in_original() {
        let include = vec![Rule::Literal(vec![1])];
        let engine = DiffEngine::new(&include, &[]);
        let report = check(&engine, &[1], &[1]);
        assert_eq!(report.extra_in_original, vec![1]);
        assert!(report.missing_in_final.is_empty());
    }

    #[test]
    fn test_include_not_added_is_missing_in_final() {
        let include = vec![Rule::Literal(vec![1, 2])];
        let engine = DiffEngine::new(&include, &[]);
        let report = check(&engine, &[], &[1]);
        assert_eq!(report.missing_in_final, vec![Violation::Item(2)]);
    }

    #[test]
    fn test_exclude_never_present_is_missing_in_original() {
        let exclude = vec![Rule::Literal(vec![1, 2])];
        let engine = DiffEngine::new(&[], &exclude);
        let report = check(&engine, &[1], &[]);
        assert_eq!(report.missing_in_original, vec![Violation::Item(2)]);
        assert!(report.extra_in_final.is_empty());
    }

    #[test]
    fn test_exclude_still_present_is_extra_in_final() {
        let exclude = vec![Rule::Literal(vec![1, 2])];
        let engine = DiffEngine::new(&[], &exclude);
        let report = check(&engine, &[1, 2], &[1]);
        assert!(report.missing_in_original.is_empty());
        assert_eq!(report.extra_in_final, vec![1]);
    }

    #[test]
    fn test_literals_flatten_across_rules_keeping_duplicates() {
        let include = vec![Rule::Literal(vec![5]), Rule::Literal(vec![5, 6])];
        let engine = DiffEngine::new(&include, &[]);
        let report = check(&engine, &[], &[]);
        assert_eq!(
            report.missing_in_final,
            vec![Violation::Item(5), Violation::Item(5), Violation::Item(6)]
        );
    }

    #[test]
    fn test_extra_items_are_distinct() {
        let include = vec![Rule::Literal(vec![1])];
        let engine = DiffEngine::new(&include, &[]);
        let report = check(&engine, &[1, 1, 2], &[1, 1, 2]);
        assert_eq!(report.extra_in_original, vec![1]);
    }

    #[test]
    fn test_include_predicate_satisfied_by_new_item() {
        let include = vec![even()];
        let engine = DiffEngine::new(&include, &[]);
        let report = check(&engine, &[1, 3], &[1, 3, 2]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_include_predicate_unsatisfied_after() {
        let include = vec![even()];
        let engine = DiffEngine::new(&include, &[]);
        let report = check(&engine, &[1, 3], &[1, 3, 5]);
        assert_eq!(report.missing_in_final, vec![Violation::Predicate("even".to_string())]);
    }

    #[test]
    fn test_exclude_predicate_on_empty_before_is_missing() {
        let exclude = vec![even()];
        let engine = DiffEngine::new(&[], &exclude);
        let report = check(&engine, &[], &[3]);
        assert_eq!(report.missing_in_original, vec![Violation::Predicate("even".to_string())]);
        assert!(report.extra_in_final.is_empty());
    }

    #[test]
    fn test_exclude_predicate_still_matching_after() {
        let exclude = vec![even()];
        let engine = DiffEngine::new(&[], &exclude);
        let report = check(&engine, &[1, 2, 3], &[1, 2]);
        assert!(report.missing_in_original.is_empty());
        assert_eq!(report.extra_in_final, vec![2]);
    }

    #[test]
    fn test_literal_violations_precede_predicates() {
        let exclude = vec![even(), Rule::Literal(vec![9])];
        let engine = DiffEngine::new(&[], &exclude);
        let report = check(&engine, &[1], &[]);
        assert_eq!(
            report.missing_in_original,
            vec![Violation::Item(9), Violation::Predicate("even".to_string())]
        );
    }

    #[test]
    fn test_non_collection_snapshots_skip_checks() {
        let include = vec![Rule::Literal(vec![1])];
        let exclude = vec![Rule::Literal(vec![2])];
        let engine = DiffEngine::new(&include, &exclude);
        let report = engine.diff(None, None);
        assert!(report.is_clean());

        let report = engine.diff(None, Some(&[2][..]));
        assert!(report.missing_in_original.is_empty());
        assert_eq!(report.missing_in_final, vec![Violation::Item(1)]);
        assert_eq!(report.extra_in_final, vec![2]);
    }

    #[test]
    fn test_from_rule_set() {
        let mut rules: RuleSet<i32> = RuleSet::new();
        rules
            .declare(crate::rule::Polarity::Exclude, vec![1].into())
            .unwrap();
        let engine = DiffEngine::from_rules(&rules);
        let report = check(&engine, &[1], &[]);
        assert!(report.is_clean());
    }
}
