use crate::efmt::{ExprFormatter, InfixFormatter};
use crate::{Assignment, TruthError, VariableName};
use itertools::Itertools;
use std::fmt;

/// Common API for Boolean rules.
///
/// This trait defines the API to evaluate and display Boolean rules.
/// Evaluation only reads the rule and the given assignment: repeated calls with the same
/// assignment always give the same result.
pub trait Rule {
    /// Display the rule using the selected formatter
    fn fmt_with(&self, f: &mut dyn ExprFormatter) -> fmt::Result;

    /// Display the rule using the default infix formatter
    fn fmt_rule(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_with(&mut InfixFormatter::new(f))
    }

    /// Evaluate the rule on the given assignment.
    ///
    /// Fails if the rule uses a variable which is not bound by the assignment.
    fn eval(&self, assignment: &Assignment) -> Result<bool, TruthError>;

    /// Add all variables used by the rule to the list (duplicates included)
    fn collect_variables<'a>(&'a self, variables: &mut Vec<&'a VariableName>);

    /// Construct the list of variables used in the rule, in order of first appearance
    fn get_variables(&self) -> Vec<&VariableName> {
        let mut variables = Vec::new();
        self.collect_variables(&mut variables);
        variables.into_iter().unique().collect()
    }
}

impl Rule for VariableName {
    fn fmt_with(&self, f: &mut dyn ExprFormatter) -> fmt::Result {
        f.write_variable(self)
    }

    fn eval(&self, assignment: &Assignment) -> Result<bool, TruthError> {
        assignment
            .get(self.as_str())
            .ok_or_else(|| TruthError::UnboundVariable {
                variable: self.to_string(),
                expression: self.to_string(),
            })
    }

    fn collect_variables<'a>(&'a self, variables: &mut Vec<&'a VariableName>) {
        variables.push(self);
    }
}

impl Rule for bool {
    fn fmt_with(&self, f: &mut dyn ExprFormatter) -> fmt::Result {
        f.write_bool(*self)
    }

    fn eval(&self, _assignment: &Assignment) -> Result<bool, TruthError> {
        Ok(*self)
    }

    fn collect_variables<'a>(&'a self, _variables: &mut Vec<&'a VariableName>) {}
}
