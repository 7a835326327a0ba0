use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Invalid term type {0}, expected a variable, named node, blank node or literal")]
    InvalidTermType(String),
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
}

impl TransformError {
    /// A well formed term that simply has no expression value, as opposed to a
    /// missing or malformed input.
    pub fn is_invalid_term_type(&self) -> bool {
        matches!(self, TransformError::InvalidTermType(_))
    }
}
