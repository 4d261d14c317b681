use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangeCollectionError {
    #[error("`{method}` {reason}")]
    InvalidDeclaration {
        method: &'static str,
        reason: String,
    },

    #[error("Matcher does not support negation: {0}")]
    NegationUnsupported(String),

    #[error("{0}")]
    AssertionFailed(String),

    #[error("change matcher already registered with a different configuration")]
    AlreadyRegistered,
}

impl ChangeCollectionError {
    pub fn both_items_and_predicate(method: &'static str) -> Self {
        ChangeCollectionError::InvalidDeclaration {
            method,
            reason: format!(
                "requires either objects (`{method}(obj1, obj2, ...)`) or a predicate \
                 (`{method}_where(|item| ...)`) but not both"
            ),
        }
    }

    pub fn declared_after_evaluation(method: &'static str) -> Self {
        ChangeCollectionError::InvalidDeclaration {
            method,
            reason: "cannot declare rules after the matcher has been evaluated".to_string(),
        }
    }

    pub fn is_invalid_declaration(&self) -> bool {
        matches!(self, ChangeCollectionError::InvalidDeclaration { .. })
    }

    pub fn is_negation_unsupported(&self) -> bool {
        matches!(self, ChangeCollectionError::NegationUnsupported(_))
    }

    pub fn is_assertion_failed(&self) -> bool {
        matches!(self, ChangeCollectionError::AssertionFailed(_))
    }
}

pub type Result<T> = std::result::Result<T, ChangeCollectionError>;
