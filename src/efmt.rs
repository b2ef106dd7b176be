//! Formatting API for expressions

use crate::{Operator, Rule, VariableName};
use delegate::delegate;

use std::fmt;

/// Spelling of the operators in infix notation
pub struct FormatterConfig<'a> {
    s_and: &'a str,
    s_or: &'a str,
    s_not: &'a str,
}

pub static DEFAULT_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: "&",
    s_or: "|",
    s_not: "!",
};

/// Arithmetic-like spelling, as commonly used in truth tables of logic courses
pub static ARITH_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: ".",
    s_or: "+",
    s_not: "!",
};

/// Place of a node relative to its parent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// No parent
    Root,
    /// First operand of a binary operation
    Left,
    /// Second operand of a binary operation
    Right,
    /// Child of a negation
    Negated,
}

pub struct InfixFormatted<'a, T: Rule + ?Sized> {
    rule: &'a T,
    cfg: &'a FormatterConfig<'a>,
}

/// Define hooks to display separate parts of expressions.
///
/// This trait provide entry points used by [Rule::fmt_with] to control the presentation of the expression.
/// The expression visits the inner tree and calls the hooks defined in this trait for each node and leaf.
///
/// Binary operators share the same priority and chains of operations are grouped on the right,
/// infix formatters must then add parenthesis around operations used as left operand.
pub trait ExprFormatter {
    /// Pass-through function calling an internal [fmt::Formatter].
    ///
    /// This function enables the use of the ```write!``` macro in other functions.
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;

    /// Write a fixed Boolean node
    fn write_bool(&mut self, b: bool) -> fmt::Result;

    /// Write a single variable
    fn write_variable(&mut self, name: &VariableName) -> fmt::Result;

    /// Start writing a negation, the flag indicates if the negated child is a leaf
    fn start_negation(&mut self, atom: bool) -> fmt::Result;

    /// Stop writing a negation
    fn end_negation(&mut self, atom: bool) -> fmt::Result;

    /// Start writing an operation
    fn start_operation(&mut self, op: Operator, position: Position) -> fmt::Result;

    /// Stop writing an operation
    fn end_operation(&mut self, op: Operator, position: Position) -> fmt::Result;

    /// Separate operands in the ongoing operation
    fn sep_operation(&mut self, op: Operator) -> fmt::Result;
}

impl FormatterConfig<'_> {
    pub fn operator(&self, op: Operator) -> &str {
        match op {
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
        }
    }

    pub fn infix<'a, T: Rule + ?Sized>(&'a self, rule: &'a T) -> InfixFormatted<'a, T> {
        InfixFormatted { rule, cfg: self }
    }
}

pub struct InfixFormatter<'a, 'b>(&'a mut fmt::Formatter<'b>, &'a FormatterConfig<'a>);
pub struct PrefixFormatter<'a, 'b>(InfixFormatter<'a, 'b>);

impl<'a, 'b> InfixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(f, &DEFAULT_FMT_CFG)
    }
    pub fn with(f: &'a mut fmt::Formatter<'b>, cfg: &'a FormatterConfig) -> Self {
        Self(f, cfg)
    }
}

impl<'a, 'b> PrefixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(InfixFormatter::new(f))
    }
}

impl ExprFormatter for InfixFormatter<'_, '_> {
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        fmt::Formatter::write_fmt(self.0, args)
    }

    fn write_bool(&mut self, b: bool) -> fmt::Result {
        match b {
            false => write!(self, "0"),
            true => write!(self, "1"),
        }
    }

    fn write_variable(&mut self, name: &VariableName) -> fmt::Result {
        write!(self, "{}", name)
    }

    fn start_negation(&mut self, atom: bool) -> fmt::Result {
        match atom {
            true => write!(self, "{}", self.1.s_not),
            false => write!(self, "{}(", self.1.s_not),
        }
    }

    fn end_negation(&mut self, atom: bool) -> fmt::Result {
        match atom {
            true => Ok(()),
            false => write!(self, ")"),
        }
    }

    fn start_operation(&mut self, _op: Operator, position: Position) -> fmt::Result {
        match position {
            Position::Left => write!(self, "("),
            _ => Ok(()),
        }
    }

    fn end_operation(&mut self, _op: Operator, position: Position) -> fmt::Result {
        match position {
            Position::Left => write!(self, ")"),
            _ => Ok(()),
        }
    }

    fn sep_operation(&mut self, op: Operator) -> fmt::Result {
        write!(self, " {} ", self.1.operator(op))
    }
}

/// Display a rule in prefix notation: ```(| (! a) b)```
pub struct PrefixFormatted<'a, R: Rule + ?Sized>(pub &'a R);

impl<'a, R: Rule + ?Sized> fmt::Display for PrefixFormatted<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = PrefixFormatter::new(f);
        self.0.fmt_with(&mut ef)
    }
}

impl<T: Rule + ?Sized> fmt::Display for InfixFormatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = InfixFormatter::with(f, self.cfg);
        self.rule.fmt_with(&mut ef)
    }
}

impl ExprFormatter for PrefixFormatter<'_, '_> {
    delegate! {
        to self.0 {
            fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;
            fn write_bool(&mut self, b: bool) -> fmt::Result;
            fn write_variable(&mut self, name: &VariableName) -> fmt::Result;
        }
    }

    fn start_negation(&mut self, _atom: bool) -> fmt::Result {
        write!(self, "(! ")
    }

    fn end_negation(&mut self, _atom: bool) -> fmt::Result {
        write!(self, ")")
    }

    fn start_operation(&mut self, op: Operator, _position: Position) -> fmt::Result {
        match op {
            Operator::And => write!(self, "(& "),
            Operator::Or => write!(self, "(| "),
        }
    }

    fn end_operation(&mut self, _op: Operator, _position: Position) -> fmt::Result {
        write!(self, ")")
    }

    fn sep_operation(&mut self, _op: Operator) -> fmt::Result {
        write!(self, " ")
    }
}
