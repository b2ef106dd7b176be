//! Enumeration of truth tables

use crate::*;

use log::{debug, info};

/// Default bound on the number of inputs of a truth table (65536 rows)
pub const DEFAULT_MAX_INPUTS: usize = 16;

/// Largest bound accepted by an [Enumerator]
pub const MAX_SUPPORTED_INPUTS: usize = 24;

/// An output column: an expression with the source text used as label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    source: String,
    expr: Expr,
}

/// A row of a truth table: the values of the inputs and of each output, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    inputs: Vec<bool>,
    outputs: Vec<bool>,
}

/// A fully evaluated truth table.
///
/// The table carries the ordered inputs, the ordered outputs and one row for each assignment of the inputs,
/// following the canonical binary counting order: the first input is the most significant bit and
/// the first row assigns false to all inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    inputs: InputSpace,
    outputs: Vec<Output>,
    rows: Vec<Row>,
}

/// Build truth tables with a bound on the number of inputs.
///
/// The number of rows doubles with each input, the bound rejects requests which would
/// allocate unreasonable tables.
///
/// ```
/// use truthkit::{Enumerator, InputSpace, TruthError};
///
/// let inputs = InputSpace::from_names(["a", "b", "c"]).unwrap();
/// let enumerator = Enumerator::default().with_max_inputs(2);
/// assert_eq!(
///     enumerator.enumerate(inputs, vec![]),
///     Err(TruthError::TooManyInputs { count: 3, limit: 2 })
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enumerator {
    max_inputs: usize,
}

impl Output {
    pub fn new(source: &str, expr: Expr) -> Self {
        Self {
            source: source.to_string(),
            expr,
        }
    }

    /// Parse the source text of an output
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        parse_expression(source).map(|expr| Self::new(source, expr))
    }

    /// The source text, used verbatim as column label
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl Row {
    /// Values of the inputs, in declaration order
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// Values of the outputs, in declaration order
    pub fn outputs(&self) -> &[bool] {
        &self.outputs
    }

    /// Iterate over the values of all columns: inputs first, then outputs
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.inputs.iter().chain(self.outputs.iter()).copied()
    }

    /// Rebuild the assignment of the inputs for this row
    pub fn assignment<'a>(&self, space: &'a InputSpace) -> Result<Assignment<'a>, TruthError> {
        let mut assignment = Assignment::new(space);
        for (name, value) in space.iter().zip(&self.inputs) {
            assignment.set(name.as_str(), *value)?;
        }
        Ok(assignment)
    }
}

impl TruthTable {
    pub fn inputs(&self) -> &InputSpace {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of columns: inputs then outputs
    pub fn width(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }

    /// Render the table as markdown text, see [render_table]
    pub fn render(&self, style: ValueStyle) -> String {
        render_table(self, style)
    }
}

impl Default for Enumerator {
    fn default() -> Self {
        Self {
            max_inputs: DEFAULT_MAX_INPUTS,
        }
    }
}

impl Enumerator {
    /// Change the bound on the number of inputs, capped to [MAX_SUPPORTED_INPUTS]
    pub fn with_max_inputs(self, max_inputs: usize) -> Self {
        Self {
            max_inputs: max_inputs.min(MAX_SUPPORTED_INPUTS),
        }
    }

    pub fn max_inputs(&self) -> usize {
        self.max_inputs
    }

    /// Check that the inputs can be enumerated
    pub fn check_inputs(&self, inputs: &InputSpace) -> Result<(), TruthError> {
        if inputs.is_empty() {
            return Err(TruthError::NoInputs);
        }
        if inputs.len() > self.max_inputs {
            return Err(TruthError::TooManyInputs {
                count: inputs.len(),
                limit: self.max_inputs,
            });
        }
        Ok(())
    }

    /// Check that all outputs use only declared inputs.
    ///
    /// Reports the first unbound variable, labelled with the source of the output using it.
    pub fn check_outputs(&self, inputs: &InputSpace, outputs: &[Output]) -> Result<(), TruthError> {
        for output in outputs {
            if let Some(name) = inputs.unbound_variable(&output.expr) {
                return Err(TruthError::UnboundVariable {
                    variable: name.to_string(),
                    expression: output.source.clone(),
                });
            }
        }
        Ok(())
    }

    /// Evaluate all outputs for all assignments of the inputs.
    ///
    /// All checks are done before the enumeration: no partial table is ever built.
    pub fn enumerate(&self, inputs: InputSpace, outputs: Vec<Output>) -> Result<TruthTable, TruthError> {
        self.check_inputs(&inputs)?;
        self.check_outputs(&inputs, &outputs)?;

        let count = 1usize << inputs.len();
        info!(
            "Enumerating {} rows for {} input(s) and {} output(s)",
            count,
            inputs.len(),
            outputs.len()
        );

        let mut rows = Vec::with_capacity(count);
        for assignment in inputs.assignments() {
            let values = outputs
                .iter()
                .map(|output| output.expr.eval(&assignment))
                .collect::<Result<Vec<bool>, TruthError>>()?;
            debug!("row {}: {:?}", &assignment, &values);
            rows.push(Row {
                inputs: assignment.values().collect(),
                outputs: values,
            });
        }

        Ok(TruthTable {
            inputs,
            outputs,
            rows,
        })
    }
}

/// Build the truth table of a list of outputs with the default [Enumerator]
///
/// ```
/// use truthkit::{build_truth_table, parse_outputs, InputSpace};
/// # use truthkit::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let inputs = InputSpace::from_names(["p", "q"])?;
/// let table = build_truth_table(inputs, parse_outputs(["!p+q"])?)?;
///
/// let column: Vec<bool> = table.rows().iter().map(|r| r.outputs()[0]).collect();
/// assert_eq!(column, vec![true, true, false, true]);
/// # Ok(())
/// # }
/// ```
pub fn build_truth_table(inputs: InputSpace, outputs: Vec<Output>) -> Result<TruthTable, TruthError> {
    Enumerator::default().enumerate(inputs, outputs)
}
