use crate::error::{ChangeCollectionError, Result};
use super::types::{Declaration, Polarity, Rule};

/// Include and exclude rules accumulated by the fluent builder.
///
/// Append-only while building; sealed once the matcher evaluates.
#[derive(Debug)]
pub struct RuleSet<T> {
    include: Vec<Rule<T>>,
    exclude: Vec<Rule<T>>,
    sealed: bool,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            sealed: false,
        }
    }
}

impl<T> RuleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, polarity: Polarity, declaration: Declaration<T>) -> Result<()> {
        if self.sealed {
            return Err(ChangeCollectionError::declared_after_evaluation(
                polarity.method_name(),
            ));
        }

        let rule = declaration.into_rule(polarity)?;
        match polarity {
            Polarity::Include => self.include.push(rule),
            Polarity::Exclude => self.exclude.push(rule),
        }
        Ok(())
    }

    pub fn include(&self) -> &[Rule<T>] {
        &self.include
    }

    pub fn exclude(&self) -> &[Rule<T>] {
        &self.exclude
    }

    /// `true` when any rule of either polarity was declared.
    pub fn has_rules(&self) -> bool {
        !self.include.is_empty() || !self.exclude.is_empty()
    }

    pub fn len(&self) -> usize {
        self.include.len() + self.exclude.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_rules()
    }

    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }
}
