//! Boolean expressions defined as trees

use core::ops::BitAnd;
use core::ops::BitOr;
use core::ops::Not;
use std::cmp::max;
use std::str::FromStr;

use crate::efmt::{ExprFormatter, Position};
use crate::*;

/// A Boolean expression tree.
///
/// Represents a Boolean expression as a tree where internal nodes are classical Boolean operations
/// and leaves are named variables or fixed Boolean values.
/// Parenthesized groups of the source text are transparent: they shape the tree but leave no node.
///
/// Unlike more elaborate rule representations, the tree is kept exactly as written: constants and
/// double negations are never simplified, so the tree of a parsed expression mirrors its source.
/// Expressions overload the ```&```, ```|```, and ```!``` operators to facilitate their definition
/// as readable rust statements.
///
/// Expressions can not be [copied](Copy) but they can be [cloned](Clone) in constant time.
///
/// ```
/// use truthkit::{Expr, InputSpace, Rule};
/// # use truthkit::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let p = Expr::variable("p")?;
/// let q = Expr::variable("q")?;
/// let expr = !&p | &q;
///
/// // Same tree as the parsed text
/// assert_eq!(expr, "!p + q".parse::<Expr>()?);
///
/// let inputs = InputSpace::from_names(["p", "q"])?;
/// let assignment = inputs.assignment(0b10);
/// assert_eq!(expr.eval(&assignment)?, false);
/// # Ok(())
/// # }
/// ```
///
/// # Parsing expressions
///
/// Expressions are parsed from strings where several spellings are accepted for each operator:
/// ```. & && *``` for ```AND```, ```+ | ||``` for ```OR``` and ```!``` for ```NOT```.
/// See [parse_expression] for the details of the grammar.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    /// A fixed Boolean value
    Literal(bool),

    /// A single named variable
    Variable(VariableName),

    /// The complement of a sub-expression
    Not(Arc<Expr>),

    /// Two expressions connected with a binary operator
    Operation(Operator, Arc<(Expr, Expr)>),
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
/// Expression trees can use the AND and OR operators.
pub enum Operator {
    /// AND operator: both children need to be true
    And,
    /// OR operator: at least one child needs to be true
    Or,
}

impl Expr {
    /// Create a variable leaf, checking the validity of its name
    pub fn variable(name: &str) -> Result<Self, TruthError> {
        VariableName::new(name).map(Expr::Variable)
    }

    /// Negate an expression
    pub fn negate(e: impl Into<Expr>) -> Self {
        Expr::Not(Arc::new(e.into()))
    }

    pub fn and(e1: impl Into<Expr>, e2: impl Into<Expr>) -> Self {
        Operator::And.join(e1, e2)
    }

    pub fn or(e1: impl Into<Expr>, e2: impl Into<Expr>) -> Self {
        Operator::Or.join(e1, e2)
    }

    /// Get the fixed value associated to this expression, or none if it is not a literal
    pub fn get_fixed(&self) -> Option<bool> {
        match self {
            Expr::Literal(b) => Some(*b),
            _ => None,
        }
    }

    /// Number of nodes on the longest path from the root to a leaf
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => 1,
            Expr::Not(e) => 1 + e.depth(),
            Expr::Operation(_, children) => 1 + max(children.0.depth(), children.1.depth()),
        }
    }

    /// Test if this node is a leaf (a literal or a variable)
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Literal(_) | Expr::Variable(_))
    }

    pub(crate) fn fmt_expr(&self, f: &mut dyn ExprFormatter, position: Position) -> fmt::Result {
        match self {
            Expr::Literal(b) => f.write_bool(*b),
            Expr::Variable(name) => f.write_variable(name),
            Expr::Not(e) => {
                f.start_negation(e.is_atom())?;
                e.fmt_expr(f, Position::Negated)?;
                f.end_negation(e.is_atom())
            }
            Expr::Operation(op, children) => {
                f.start_operation(*op, position)?;
                children.0.fmt_expr(f, Position::Left)?;
                f.sep_operation(*op)?;
                children.1.fmt_expr(f, Position::Right)?;
                f.end_operation(*op, position)
            }
        }
    }

    /// Evaluate the tree, returning the first unbound variable in case of failure
    fn eval_node<'a>(&'a self, assignment: &Assignment) -> Result<bool, &'a VariableName> {
        match self {
            Expr::Literal(b) => Ok(*b),
            Expr::Variable(name) => assignment.get(name.as_str()).ok_or(name),
            Expr::Not(e) => e.eval_node(assignment).map(|b| !b),
            Expr::Operation(op, children) => match (op, children.0.eval_node(assignment)?) {
                (Operator::And, false) => Ok(false),
                (Operator::Or, true) => Ok(true),
                _ => children.1.eval_node(assignment),
            },
        }
    }
}

impl Operator {
    /// Build the operation node joining two expressions
    pub fn join(self, e1: impl Into<Expr>, e2: impl Into<Expr>) -> Expr {
        Expr::Operation(self, Arc::new((e1.into(), e2.into())))
    }

    /// Apply the operator on two Boolean values
    pub fn apply(self, b1: bool, b2: bool) -> bool {
        match self {
            Operator::And => b1 && b2,
            Operator::Or => b1 || b2,
        }
    }
}

impl Rule for Expr {
    fn fmt_with(&self, f: &mut dyn ExprFormatter) -> fmt::Result {
        self.fmt_expr(f, Position::Root)
    }

    fn eval(&self, assignment: &Assignment) -> Result<bool, TruthError> {
        self.eval_node(assignment)
            .map_err(|name| TruthError::UnboundVariable {
                variable: name.to_string(),
                expression: self.to_string(),
            })
    }

    fn collect_variables<'a>(&'a self, variables: &mut Vec<&'a VariableName>) {
        match self {
            Expr::Literal(_) => (),
            Expr::Variable(name) => variables.push(name),
            Expr::Not(e) => e.collect_variables(variables),
            Expr::Operation(_, children) => {
                children.0.collect_variables(variables);
                children.1.collect_variables(variables);
            }
        }
    }
}

impl FromStr for Expr {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_expression(s)?)
    }
}

impl From<&Expr> for Expr {
    fn from(e: &Expr) -> Self {
        e.clone()
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Literal(b)
    }
}

impl From<VariableName> for Expr {
    fn from(name: VariableName) -> Self {
        Expr::Variable(name)
    }
}

impl From<&VariableName> for Expr {
    fn from(name: &VariableName) -> Self {
        Expr::Variable(name.clone())
    }
}

impl From<Arc<Expr>> for Expr {
    fn from(r: Arc<Expr>) -> Self {
        Arc::try_unwrap(r).unwrap_or_else(|r| Expr::clone(&r))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", efmt::DEFAULT_FMT_CFG.operator(*self))
    }
}

// Delegate Display to the rule trait
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rule::fmt_rule(self, f)
    }
}

/* ************************************************************************************* */
/* ******************************   Operator overloading  ****************************** */
/* ************************************************************************************* */

impl Not for Expr {
    type Output = Self;
    fn not(self) -> Self::Output {
        Expr::negate(self)
    }
}

impl Not for &Expr {
    type Output = Expr;
    fn not(self) -> Self::Output {
        Expr::negate(self.clone())
    }
}

impl<T: Into<Expr>> BitAnd<T> for Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Operator::And.join(self, rhs)
    }
}

impl<T: Into<Expr>> BitAnd<T> for &Expr {
    type Output = Expr;
    fn bitand(self, rhs: T) -> Self::Output {
        Operator::And.join(self, rhs)
    }
}

impl<T: Into<Expr>> BitOr<T> for Expr {
    type Output = Self;
    fn bitor(self, rhs: T) -> Self::Output {
        Operator::Or.join(self, rhs)
    }
}

impl<T: Into<Expr>> BitOr<T> for &Expr {
    type Output = Expr;
    fn bitor(self, rhs: T) -> Self::Output {
        Operator::Or.join(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn construct_and_display() -> Result<(), TruthError> {
        let a = Expr::variable("a")?;
        let b = Expr::variable("b")?;
        let c = Expr::variable("c")?;

        assert_eq!(format!("{}", !&a | &b), "!a | b");
        assert_eq!(format!("{}", !(&a | &b)), "!(a | b)");
        assert_eq!(format!("{}", (&a | &b) & &c), "(a | b) & c");
        assert_eq!(format!("{}", &a | (&b & &c)), "a | b & c");
        assert_eq!(format!("{}", !!a.clone()), "!(!a)");
        assert_eq!(format!("{}", Expr::from(true) & false), "1 & 0");

        Ok(())
    }

    #[test]
    fn display_parses_back() -> Result<(), TruthError> {
        for src in [
            "!p+q",
            "(a+b).c",
            "a+b.c",
            "!(!(p))",
            "((a&&b)||c)*!(d|0)",
            "x_{1} & \\alpha + 1",
        ] {
            let e: Expr = src.parse()?;
            let e2: Expr = e.to_string().parse()?;
            assert_eq!(e, e2, "{} => {}", src, e);
        }
        Ok(())
    }

    #[test]
    fn eval() -> Result<(), TruthError> {
        let inputs = InputSpace::from_names(["p", "q", "r"])?;
        let e = parse_expression("(p & q) | (!r & 1)")?;

        let expected = [true, false, true, false, true, false, true, true];
        for (row, value) in expected.iter().enumerate() {
            assert_eq!(e.eval(&inputs.assignment(row))?, *value, "row {}", row);
        }
        Ok(())
    }

    #[test]
    fn eval_unbound() -> Result<(), TruthError> {
        let inputs = InputSpace::from_names(["p"])?;
        let e = parse_expression("p & q")?;
        assert_eq!(e.eval(&inputs.assignment(0))?, false);
        assert_eq!(
            e.eval(&inputs.assignment(1)),
            Err(TruthError::UnboundVariable {
                variable: "q".into(),
                expression: "p & q".into(),
            })
        );
        Ok(())
    }

    #[test]
    fn depth_and_variables() -> Result<(), TruthError> {
        let e = parse_expression("!(a + b) . a")?;
        assert_eq!(e.depth(), 4);
        let names: Vec<&str> = e.get_variables().iter().map(|v| v.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(Expr::from(false).get_fixed(), Some(false));
        assert_eq!(e.get_fixed(), None);
        Ok(())
    }
}
