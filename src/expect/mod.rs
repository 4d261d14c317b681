//! Minimal host-framework glue: runs an action against a matcher and turns a
//! false verdict into `AssertionFailed`.

use crate::error::{ChangeCollectionError, Result};
use crate::matcher::Matcher;

pub struct Expectation<A> {
    action: A,
}

pub fn expect<A: FnMut()>(action: A) -> Expectation<A> {
    Expectation { action }
}

impl<A: FnMut()> Expectation<A> {
    pub fn to<M: Matcher>(mut self, mut matcher: M) -> Result<()> {
        if matcher.matches(&mut self.action) {
            Ok(())
        } else {
            Err(ChangeCollectionError::AssertionFailed(matcher.failure_message()))
        }
    }

    pub fn not_to<M: Matcher>(mut self, mut matcher: M) -> Result<()> {
        if matcher.does_not_match(&mut self.action)? {
            Ok(())
        } else {
            Err(ChangeCollectionError::AssertionFailed(
                matcher.failure_message_when_negated()?,
            ))
        }
    }

    pub fn to_not<M: Matcher>(self, matcher: M) -> Result<()> {
        self.not_to(matcher)
    }
}
