//! Parse Boolean expressions and enumerate their truth tables.
//!
//! [Boolean expressions](Expr) are written in a flexible syntax accepting several spellings for each
//! operator (```.``` or ```&``` for AND, ```+``` or ```|``` for OR, ```!``` for NOT), the ```0``` and ```1```
//! literals, and free-form variable names tolerating LaTeX markup such as ```p_{1}``` or ```\alpha```.
//! See [parse_expression] for the full grammar.
//!
//! ```
//! use truthkit::{parse_expression, Expr, InputSpace, Rule};
//! # use truthkit::TruthError;
//! # fn main() -> Result<(), TruthError> {
//!
//! let expr = parse_expression("!p + q")?;
//! assert_eq!(expr, !Expr::variable("p")? | Expr::variable("q")?);
//!
//! // Evaluate the expression in a single assignment of the inputs
//! let inputs = InputSpace::from_names(["p", "q"])?;
//! let assignment = inputs.assignment(0b10);
//! assert!(!expr.eval(&assignment)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Truth tables
//!
//! A [truth table](TruthTable) evaluates a list of output expressions for every [assignment](Assignment)
//! of an ordered list of [inputs](InputSpace). The rows follow the binary counting order, where the first
//! input is the most significant bit. Each output is parsed once and the table is checked before the
//! enumeration starts: an invalid expression, a missing input or a variable which is not a declared input
//! is reported as an error and no table is built.
//!
//! ```
//! use truthkit::{build_truth_table, parse_outputs, InputSpace, ValueStyle};
//! # use truthkit::TruthError;
//! # fn main() -> Result<(), TruthError> {
//!
//! let inputs = InputSpace::parse_list("p, q")?;
//! let outputs = parse_outputs(["!p+q", "p.q"])?;
//! let table = build_truth_table(inputs, outputs)?;
//! assert_eq!(table.rows().len(), 4);
//!
//! print!("{}", table.render(ValueStyle::Initials));
//! # Ok(())
//! # }
//! ```
//!
//! # Host requests
//!
//! Applications collecting the inputs and outputs as raw text can use a [TableRequest], which splits
//! the comma separated lists, validates everything and renders the result as a markdown table.
//!
//! ```
//! use truthkit::{TableRequest, TruthError};
//!
//! let text = TableRequest::new("p", "!(p)").render().unwrap();
//! assert_eq!(text, "| p | !(p) |\n| - | - |\n| F | T |\n| T | F |\n");
//!
//! // All syntax errors are reported together
//! match TableRequest::new("p", "p&&, (p").render() {
//!     Err(TruthError::Syntax(errors)) => assert_eq!(errors.len(), 2),
//!     _ => unreachable!(),
//! }
//! ```

mod assignment;
pub mod efmt;
mod error;
mod expr;
mod parse;
mod request;
mod rules;
mod space;
mod style;
mod table;
mod variable;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use assignment::Assignment;
pub use error::{SyntaxError, TruthError};
pub use expr::{Expr, Operator};
pub use parse::{parse_expression, parse_outputs, split_list};
pub use request::TableRequest;
pub use rules::Rule;
pub use space::InputSpace;
pub use style::{render_table, ValueStyle};
pub use table::{build_truth_table, Enumerator, Output, Row, TruthTable};
pub use table::{DEFAULT_MAX_INPUTS, MAX_SUPPORTED_INPUTS};
pub use variable::{is_valid_name, VariableName};
