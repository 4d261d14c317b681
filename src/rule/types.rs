use std::fmt;

use crate::error::{ChangeCollectionError, Result};

pub const DEFAULT_PREDICATE_LABEL: &str = "<predicate>";

/// A one-argument test over collection items, labelled for diagnostics.
pub struct Predicate<T> {
    label: String,
    func: Box<dyn Fn(&T) -> bool>,
}

impl<T> Predicate<T> {
    pub fn new(func: impl Fn(&T) -> bool + 'static) -> Self {
        Self::named(DEFAULT_PREDICATE_LABEL, func)
    }

    pub fn named(label: impl Into<String>, func: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            label: label.into(),
            func: Box::new(func),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn test(&self, item: &T) -> bool {
        (self.func)(item)
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<predicate {}>", self.label)
    }
}

#[derive(Debug)]
pub enum Rule<T> {
    Literal(Vec<T>),
    Predicate(Predicate<T>),
}

impl<T: PartialEq> Rule<T> {
    pub fn matches(&self, item: &T) -> bool {
        match self {
            Rule::Literal(items) => items.contains(item),
            Rule::Predicate(predicate) => predicate.test(item),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Include,
    Exclude,
}

impl Polarity {
    pub fn method_name(&self) -> &'static str {
        match self {
            Polarity::Include => "to_include",
            Polarity::Exclude => "to_exclude",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Include => write!(f, "include"),
            Polarity::Exclude => write!(f, "exclude"),
        }
    }
}

/// The arguments of a single `to_include` / `to_exclude` call.
#[derive(Debug)]
pub struct Declaration<T> {
    items: Vec<T>,
    predicate: Option<Predicate<T>>,
}

impl<T> Declaration<T> {
    pub fn items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            predicate: None,
        }
    }

    pub fn predicate(predicate: Predicate<T>) -> Self {
        Self {
            items: Vec::new(),
            predicate: Some(predicate),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_predicate(mut self, predicate: Predicate<T>) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Validates the declaration and turns it into exactly one rule.
    ///
    /// An empty literal declaration is legal and yields an empty literal rule.
    pub fn into_rule(self, polarity: Polarity) -> Result<Rule<T>> {
        match (self.items.is_empty(), self.predicate) {
            (false, Some(_)) => Err(ChangeCollectionError::both_items_and_predicate(
                polarity.method_name(),
            )),
            (true, Some(predicate)) => Ok(Rule::Predicate(predicate)),
            (_, None) => Ok(Rule::Literal(self.items)),
        }
    }
}

impl<T> From<Vec<T>> for Declaration<T> {
    fn from(items: Vec<T>) -> Self {
        Declaration::items(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Declaration<T> {
    fn from(items: [T; N]) -> Self {
        Declaration::items(items)
    }
}

impl<T> From<Predicate<T>> for Declaration<T> {
    fn from(predicate: Predicate<T>) -> Self {
        Declaration::predicate(predicate)
    }
}
