use std::fmt::Debug;
use std::ops::{Add, Sub};

use tracing::debug;

use crate::error::{ChangeCollectionError, Result};
use crate::matcher::Matcher;
use super::details::ChangeDetails;

const DEFAULT_DESCRIPTION: &str = "value";

struct Delta<'a, V> {
    expected: String,
    check: Box<dyn Fn(&V, &V) -> (bool, String) + 'a>,
}

/// Plain "did this value change" matcher with `from`, `to` and `by` helpers.
pub struct Change<'a, V> {
    description: String,
    accessor: Box<dyn FnMut() -> V + 'a>,
    expected_before: Option<V>,
    expected_after: Option<V>,
    expected_delta: Option<Delta<'a, V>>,
    details: Option<ChangeDetails<V>>,
}

impl<'a, V: PartialEq + Debug> Change<'a, V> {
    pub fn new(accessor: impl FnMut() -> V + 'a) -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            accessor: Box::new(accessor),
            expected_before: None,
            expected_after: None,
            expected_delta: None,
            details: None,
        }
    }

    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn from(mut self, value: V) -> Self {
        self.expected_before = Some(value);
        self
    }

    pub fn to(mut self, value: V) -> Self {
        self.expected_after = Some(value);
        self
    }

    pub fn details(&self) -> Option<&ChangeDetails<V>> {
        self.details.as_ref()
    }

    fn capture(&mut self, action: &mut dyn FnMut()) -> &ChangeDetails<V> {
        let details = ChangeDetails::capture(&mut self.accessor, action);
        debug!(
            description = %self.description,
            changed = details.changed(),
            "captured change details"
        );
        self.details.insert(details)
    }

    fn before_matches(&self, details: &ChangeDetails<V>) -> bool {
        self.expected_before
            .as_ref()
            .map_or(true, |expected| *expected == details.actual_before)
    }

    fn after_matches(&self, details: &ChangeDetails<V>) -> bool {
        self.expected_after
            .as_ref()
            .map_or(true, |expected| *expected == details.actual_after)
    }

    fn delta_matches(&self, details: &ChangeDetails<V>) -> Option<(bool, String)> {
        self.expected_delta
            .as_ref()
            .map(|delta| (delta.check)(&details.actual_before, &details.actual_after))
    }

    fn passed(&self, details: &ChangeDetails<V>) -> bool {
        let changed = match self.delta_matches(details) {
            Some((ok, _)) => ok,
            None => details.changed(),
        };
        self.before_matches(details) && changed && self.after_matches(details)
    }

    fn not_evaluated_message(&self) -> String {
        format!(
            "expected `{}` to have changed, but the matcher was never evaluated",
            self.description
        )
    }
}

impl<'a, V> Change<'a, V>
where
    V: PartialEq + PartialOrd + Debug + Clone + Add<Output = V> + Sub<Output = V> + 'a,
{
    /// Expects `before + delta == after`; an unchanged value satisfies `by` of zero.
    pub fn by(mut self, delta: V) -> Self {
        let expected = format!("{:?}", delta);
        self.expected_delta = Some(Delta {
            expected,
            check: Box::new(move |before: &V, after: &V| {
                let ok = before.clone() + delta.clone() == *after;
                (ok, actual_delta(before, after))
            }),
        });
        self
    }
}

/// Signed rendering of `after - before` that never subtracts below zero.
fn actual_delta<V>(before: &V, after: &V) -> String
where
    V: PartialOrd + Debug + Clone + Sub<Output = V>,
{
    if after >= before {
        format!("{:?}", after.clone() - before.clone())
    } else {
        format!("-{:?}", before.clone() - after.clone())
    }
}

impl<'a, V: PartialEq + Debug> Matcher for Change<'a, V> {
    fn matches(&mut self, action: &mut dyn FnMut()) -> bool {
        self.capture(action);
        match self.details.as_ref() {
            Some(details) => self.passed(details),
            None => false,
        }
    }

    fn does_not_match(&mut self, action: &mut dyn FnMut()) -> Result<bool> {
        if self.expected_after.is_some() {
            return Err(ChangeCollectionError::NegationUnsupported(
                "`not_to(change(..).to(..))` is not supported".to_string(),
            ));
        }
        if self.expected_delta.is_some() {
            return Err(ChangeCollectionError::NegationUnsupported(
                "`not_to(change(..).by(..))` is not supported".to_string(),
            ));
        }

        self.capture(action);
        Ok(match self.details.as_ref() {
            Some(details) => self.before_matches(details) && !details.changed(),
            None => false,
        })
    }

    fn failure_message(&self) -> String {
        let Some(details) = self.details.as_ref() else {
            return self.not_evaluated_message();
        };
        let desc = &self.description;

        if let Some(expected) = self.expected_before.as_ref() {
            if !self.before_matches(details) {
                return format!(
                    "expected `{}` to have initially been {:?}, but was {:?}",
                    desc, expected, details.actual_before
                );
            }
        }

        if let (Some(delta), Some((false, actual))) =
            (self.expected_delta.as_ref(), self.delta_matches(details))
        {
            return format!(
                "expected `{}` to have changed by {}, but was changed by {}",
                desc, delta.expected, actual
            );
        }

        if self.expected_delta.is_none() && !details.changed() {
            return match self.expected_after.as_ref() {
                Some(expected) => format!(
                    "expected `{}` to have changed to {:?}, but did not change",
                    desc, expected
                ),
                None => format!(
                    "expected `{}` to have changed, but is still {:?}",
                    desc, details.actual_before
                ),
            };
        }

        if let Some(expected) = self.expected_after.as_ref() {
            if !self.after_matches(details) {
                return format!(
                    "expected `{}` to have changed to {:?}, but is now {:?}",
                    desc, expected, details.actual_after
                );
            }
        }

        String::new()
    }

    fn failure_message_when_negated(&self) -> Result<String> {
        let Some(details) = self.details.as_ref() else {
            return Ok(format!(
                "expected `{}` not to have changed, but the matcher was never evaluated",
                self.description
            ));
        };

        if let Some(expected) = self.expected_before.as_ref() {
            if !self.before_matches(details) {
                return Ok(format!(
                    "expected `{}` to have initially been {:?}, but was {:?}",
                    self.description, expected, details.actual_before
                ));
            }
        }

        Ok(format!(
            "expected `{}` not to have changed, but did change from {:?} to {:?}",
            self.description, details.actual_before, details.actual_after
        ))
    }

    fn description(&self) -> String {
        let mut text = format!("change `{}`", self.description);
        if let Some(before) = self.expected_before.as_ref() {
            text.push_str(&format!(" from {:?}", before));
        }
        if let Some(after) = self.expected_after.as_ref() {
            text.push_str(&format!(" to {:?}", after));
        }
        if let Some(delta) = self.expected_delta.as_ref() {
            text.push_str(&format!(" by {}", delta.expected));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_detects_simple_change() {
        let array = RefCell::new(Vec::<i32>::new());
        let mut matcher = Change::new(|| array.borrow().clone());
        assert!(matcher.matches(&mut || *array.borrow_mut() = vec![1]));
        assert!(matcher.details().is_some());
    }

    #[test]
    fn test_unchanged_value_fails_with_message() {
        let count = RefCell::new(0usize);
        let mut matcher = Change::new(|| *count.borrow()).described_as("count");
        assert!(!matcher.matches(&mut || {}));
        assert_eq!(
            matcher.failure_message(),
            "expected `count` to have changed, but is still 0"
        );
    }

    #[test]
    fn test_from_to_mismatch() {
        let array = RefCell::new(Vec::<i32>::new());
        let mut matcher = Change::new(|| array.borrow().len()).from(0).to(2);
        assert!(!matcher.matches(&mut || array.borrow_mut().push(1)));
        assert_eq!(
            matcher.failure_message(),
            "expected `value` to have changed to 2, but is now 1"
        );
    }

    #[test]
    fn test_from_mismatch_reported_first() {
        let count = RefCell::new(5i32);
        let mut matcher = Change::new(|| *count.borrow()).from(1);
        assert!(!matcher.matches(&mut || *count.borrow_mut() += 1));
        assert!(matcher.failure_message().contains("to have initially been 1, but was 5"));
    }

    #[test]
    fn test_by_helper() {
        let count = RefCell::new(0i64);
        let mut matcher = Change::new(|| *count.borrow()).by(2);
        assert!(!matcher.matches(&mut || *count.borrow_mut() += 1));
        assert_eq!(
            matcher.failure_message(),
            "expected `value` to have changed by 2, but was changed by 1"
        );

        let mut matcher = Change::new(|| *count.borrow()).by(3);
        assert!(matcher.matches(&mut || *count.borrow_mut() += 3));
    }

    #[test]
    fn test_by_on_shrinking_unsigned_value() {
        let array = RefCell::new(vec![1, 2, 3]);
        let mut matcher = Change::new(|| array.borrow().len()).by(1);
        assert!(!matcher.matches(&mut || {
            array.borrow_mut().pop();
        }));
        assert_eq!(
            matcher.failure_message(),
            "expected `value` to have changed by 1, but was changed by -1"
        );
    }

    #[test]
    fn test_by_zero_passes_without_change() {
        let count = RefCell::new(7i32);
        let mut matcher = Change::new(|| *count.borrow()).by(0);
        assert!(matcher.matches(&mut || {}));
    }

    #[test]
    fn test_negated_passes_when_unchanged() {
        let count = RefCell::new(1u32);
        let mut matcher = Change::new(|| *count.borrow());
        assert!(matcher.does_not_match(&mut || {}).unwrap());
    }

    #[test]
    fn test_negated_fails_when_changed() {
        let array = RefCell::new(Vec::<i32>::new());
        let mut matcher = Change::new(|| array.borrow().len());
        assert!(!matcher.does_not_match(&mut || array.borrow_mut().push(1)).unwrap());
        assert_eq!(
            matcher.failure_message_when_negated().unwrap(),
            "expected `value` not to have changed, but did change from 0 to 1"
        );
    }

    #[test]
    fn test_negated_to_and_by_unsupported() {
        let count = RefCell::new(0i32);
        let mut matcher = Change::new(|| *count.borrow()).to(1);
        assert!(matcher.does_not_match(&mut || {}).unwrap_err().is_negation_unsupported());

        let mut matcher = Change::new(|| *count.borrow()).by(1);
        assert!(matcher.does_not_match(&mut || {}).unwrap_err().is_negation_unsupported());
    }

    #[test]
    fn test_description() {
        let matcher = Change::new(|| 0i32).described_as("total").from(0).to(3);
        assert_eq!(matcher.description(), "change `total` from 0 to 3");
    }

    #[test]
    fn test_unevaluated_message() {
        let matcher = Change::new(|| 0i32);
        assert!(matcher.failure_message().contains("never evaluated"));
    }
}
