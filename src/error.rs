use itertools::Itertools;
use thiserror::Error;

/// Errors raised while building or validating a truth table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TruthError {
    /// One or more output expressions could not be parsed
    #[error("Syntax error in outputs: {}", .0.iter().join("; "))]
    Syntax(Vec<SyntaxError>),

    /// A truth table needs at least one input
    #[error("Must have at least one input")]
    NoInputs,

    /// Too many inputs to enumerate all their assignments
    #[error("Too many inputs: {count} declared, at most {limit} supported")]
    TooManyInputs { count: usize, limit: usize },

    /// An expression uses a variable which is not a declared input
    #[error("The variable '{variable}' used in '{expression}' is not a declared input")]
    UnboundVariable {
        variable: String,
        expression: String,
    },

    /// The name is not a declared input
    #[error("There is no input named '{0}'")]
    NoSuchInput(String),

    /// The name is invalid
    #[error("The name '{0}' is invalid")]
    InvalidName(String),

    /// The name conflicts with another input
    #[error("The name '{0}' conflicts with an other input")]
    ConflictingName(String),

    /// The value style is not one of the supported glyph pairs
    #[error("Unknown value style '{0}'")]
    UnknownStyle(String),
}

/// Failure to parse a single expression.
///
/// The position is a byte offset in the source, when the parser could locate the failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{expression}'{}: {message}", at_offset(.position))]
pub struct SyntaxError {
    pub(crate) expression: String,
    pub(crate) position: Option<usize>,
    pub(crate) message: String,
}

impl SyntaxError {
    pub(crate) fn new(source: &str, position: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            expression: source.to_string(),
            position,
            message: message.into(),
        }
    }

    /// The expression that failed to parse, as given by the caller
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Furthest offset reached by the parser
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn at_offset(position: &Option<usize>) -> String {
    position.map(|p| format!(" at offset {}", p)).unwrap_or_default()
}

impl From<SyntaxError> for TruthError {
    fn from(e: SyntaxError) -> Self {
        TruthError::Syntax(vec![e])
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::error::Error;
    use test_log::test;

    #[test]
    fn display_syntax_errors() {
        let err = parse_expression("p&&").unwrap_err();
        assert!(err.to_string().starts_with("'p&&' at offset 3: expected "));
        assert!(err.source().is_none());

        let err = SyntaxError::new("(p", None, "incomplete expression");
        assert_eq!(err.to_string(), "'(p': incomplete expression");

        let batch = TruthError::from(err);
        assert_eq!(batch.to_string(), "Syntax error in outputs: '(p': incomplete expression");
    }
}
