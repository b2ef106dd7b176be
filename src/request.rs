use crate::*;

use log::warn;

/// A truth table request as collected by a host application.
///
/// Inputs and outputs are given as raw comma separated lists, along with the style of the values.
/// Building the request validates everything before any evaluation: all invalid outputs are reported
/// together, then the inputs are checked, and no partial table is ever produced.
///
/// ```
/// use truthkit::{TableRequest, ValueStyle};
/// # use truthkit::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let request = TableRequest::new("p, q", "!p+q, !(p.q)").with_style(ValueStyle::Digits);
/// let text = request.render()?;
/// assert!(text.starts_with("| p | q | !p+q | !(p.q) |\n"));
///
/// let invalid = TableRequest::new("p", "p&&, p, (p");
/// assert!(invalid.render().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRequest {
    inputs: String,
    outputs: String,
    style: ValueStyle,
    enumerator: Enumerator,
}

impl TableRequest {
    pub fn new(inputs: impl Into<String>, outputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            outputs: outputs.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: ValueStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_enumerator(mut self, enumerator: Enumerator) -> Self {
        self.enumerator = enumerator;
        self
    }

    pub fn style(&self) -> ValueStyle {
        self.style
    }

    /// Validate the request and enumerate its truth table
    pub fn build(&self) -> Result<TruthTable, TruthError> {
        self.try_build().map_err(|e| {
            warn!("Rejected truth table request: {}", e);
            e
        })
    }

    /// Build the table and render it with the selected style
    pub fn render(&self) -> Result<String, TruthError> {
        self.build().map(|table| table.render(self.style))
    }

    fn try_build(&self) -> Result<TruthTable, TruthError> {
        let outputs = parse_outputs(split_list(&self.outputs))?;
        let inputs = InputSpace::parse_list(&self.inputs)?;
        self.enumerator.enumerate(inputs, outputs)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use test_log::test;

    #[test]
    fn render_request() -> Result<(), TruthError> {
        let request = TableRequest::new("p, q", "!p+q").with_style(ValueStyle::Initials);
        assert_eq!(
            request.render()?,
            "| p | q | !p+q |\n| - | - | - |\n| F | F | T |\n| F | T | T |\n| T | F | F |\n| T | T | T |\n"
        );
        Ok(())
    }

    #[test]
    fn all_syntax_errors_reported() {
        let request = TableRequest::new("p, q", "p&&, p+q, !!q");
        match request.build() {
            Err(TruthError::Syntax(errors)) => {
                let sources: Vec<&str> = errors.iter().map(|e| e.expression()).collect();
                assert_eq!(sources, vec!["p&&", "!!q"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn syntax_checked_before_inputs() {
        let request = TableRequest::new("", "p&&");
        assert!(matches!(request.build(), Err(TruthError::Syntax(_))));
    }

    #[test]
    fn missing_inputs() {
        assert_eq!(TableRequest::new("", "").build(), Err(TruthError::NoInputs));
        assert_eq!(TableRequest::new(" , ", "1").build(), Err(TruthError::NoInputs));
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(
            TableRequest::new("p, p", "p").build(),
            Err(TruthError::ConflictingName("p".into()))
        );
        assert_eq!(
            TableRequest::new("p, 2q", "p").build(),
            Err(TruthError::InvalidName("2q".into()))
        );
    }

    #[test]
    fn bounded_inputs() {
        let request = TableRequest::new("a, b, c", "a")
            .with_enumerator(Enumerator::default().with_max_inputs(2));
        assert_eq!(
            request.build(),
            Err(TruthError::TooManyInputs { count: 3, limit: 2 })
        );
    }

    #[test]
    fn inputs_only() -> Result<(), TruthError> {
        let text = TableRequest::new("x", "").with_style(ValueStyle::Lowercase).render()?;
        assert_eq!(text, "| x |\n| - |\n| false |\n| true |\n");
        Ok(())
    }
}
