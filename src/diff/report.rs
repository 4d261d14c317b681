use std::fmt;

use serde::Serialize;

/// An item, or a predicate's identity, that failed its presence/absence rule.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation<T> {
    Item(T),
    Predicate(String),
}

impl<T: fmt::Debug> fmt::Debug for Violation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Item(item) => item.fmt(f),
            Violation::Predicate(label) => write!(f, "#<predicate {}>", label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCategory {
    MissingInOriginal,
    ExtraInOriginal,
    MissingInFinal,
    ExtraInFinal,
}

impl ViolationCategory {
    pub const ALL: [ViolationCategory; 4] = [
        ViolationCategory::MissingInOriginal,
        ViolationCategory::ExtraInOriginal,
        ViolationCategory::MissingInFinal,
        ViolationCategory::ExtraInFinal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCategory::MissingInOriginal => "missing_in_original",
            ViolationCategory::ExtraInOriginal => "extra_in_original",
            ViolationCategory::MissingInFinal => "missing_in_final",
            ViolationCategory::ExtraInFinal => "extra_in_final",
        }
    }
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationReport<T> {
    /// Excluded items (or predicates) absent before the action.
    pub missing_in_original: Vec<Violation<T>>,
    /// Before-items that already satisfied an include rule.
    pub extra_in_original: Vec<T>,
    /// Included items (or predicates) absent after the action.
    pub missing_in_final: Vec<Violation<T>>,
    /// After-items that still satisfy an exclude rule.
    pub extra_in_final: Vec<T>,
}

impl<T> Default for ViolationReport<T> {
    fn default() -> Self {
        Self {
            missing_in_original: Vec::new(),
            extra_in_original: Vec::new(),
            missing_in_final: Vec::new(),
            extra_in_final: Vec::new(),
        }
    }
}

impl<T> ViolationReport<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_violations(&self) -> bool {
        !self.is_clean()
    }

    pub fn is_clean(&self) -> bool {
        self.missing_in_original.is_empty()
            && self.extra_in_original.is_empty()
            && self.missing_in_final.is_empty()
            && self.extra_in_final.is_empty()
    }

    pub fn count(&self, category: ViolationCategory) -> usize {
        match category {
            ViolationCategory::MissingInOriginal => self.missing_in_original.len(),
            ViolationCategory::ExtraInOriginal => self.extra_in_original.len(),
            ViolationCategory::MissingInFinal => self.missing_in_final.len(),
            ViolationCategory::ExtraInFinal => self.extra_in_final.len(),
        }
    }

    pub fn total(&self) -> usize {
        ViolationCategory::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn failed_categories(&self) -> Vec<ViolationCategory> {
        ViolationCategory::ALL
            .into_iter()
            .filter(|c| self.count(*c) > 0)
            .collect()
    }
}
