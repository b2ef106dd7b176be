use crate::*;

use itertools::Itertools;
use std::slice::Iter;

/// The ordered collection of declared input variables.
///
/// The order of the names defines the columns of a truth table and the significance of each input
/// when enumerating the rows: the first input is the most significant bit of the row index.
/// Names must be valid [variable names](VariableName) and can not be declared twice.
///
/// The collection only carries the names and their position, the values of the inputs for a given row
/// are stored in a separate [Assignment] borrowing the collection.
///
/// ```
/// use truthkit::{InputSpace, parse_expression};
/// # use truthkit::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let mut inputs = InputSpace::default();
/// inputs.add("p")?;
/// inputs.add("q")?;
/// assert!(inputs.add("p").is_err());
///
/// assert_eq!(inputs.position("q"), Some(1));
///
/// // Check that an expression uses only declared inputs
/// assert!(inputs.check_rule(&parse_expression("!p+q")?).is_ok());
/// assert!(inputs.check_rule(&parse_expression("p+r")?).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct InputSpace {
    /// The list of names, in declaration order
    names: Vec<VariableName>,

    /// Find the position of an input by name
    name2pos: HashMap<VariableName, usize>,
}

impl InputSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from a list of names.
    ///
    /// Returns an error on the first invalid or repeated name.
    pub fn from_names<I, S>(names: I) -> Result<Self, TruthError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut space = Self::default();
        names
            .into_iter()
            .try_for_each(|name| space.add(name.as_ref()).map(|_| ()))?;
        Ok(space)
    }

    /// Parse a comma separated list of names, see [split_list]
    pub fn parse_list(s: &str) -> Result<Self, TruthError> {
        Self::from_names(split_list(s))
    }

    /// Declare a new input and return its position.
    ///
    /// Returns an error if the name is invalid or already declared, in this case the collection is not modified.
    pub fn add(&mut self, name: &str) -> Result<usize, TruthError> {
        let name = VariableName::new(name)?;
        if self.name2pos.contains_key(&name) {
            return Err(TruthError::ConflictingName(name.to_string()));
        }
        let pos = self.names.len();
        self.name2pos.insert(name.clone(), pos);
        self.names.push(name);
        Ok(pos)
    }

    /// Get the number of declared inputs
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return whether there are no inputs in this collection
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check if a name is part of the collection
    pub fn contains(&self, name: &str) -> bool {
        self.name2pos.contains_key(name)
    }

    /// Search the position of the input with the given name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.name2pos.get(name).copied()
    }

    /// Search the position of the input with the given name
    pub fn position_or_err(&self, name: &str) -> Result<usize, TruthError> {
        self.position(name)
            .ok_or_else(|| TruthError::NoSuchInput(name.to_string()))
    }

    /// Get the name of the input at the given position
    pub fn name(&self, pos: usize) -> Option<&VariableName> {
        self.names.get(pos)
    }

    pub fn names(&self) -> &[VariableName] {
        &self.names
    }

    /// Iterate on the names of the inputs in declaration order
    pub fn iter(&self) -> Iter<VariableName> {
        self.names.iter()
    }

    /// Number of distinct assignments of the inputs, none if it does not fit in a usize
    pub fn row_count(&self) -> Option<usize> {
        u32::try_from(self.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
    }

    /// Build the assignment of the inputs at the given row index.
    ///
    /// The input at position ```i``` takes the value of the bit ```n-1-i``` of the row index:
    /// rows follow the binary counting order, with the first input as most significant bit.
    pub fn assignment(&self, row: usize) -> Assignment {
        Assignment::from_row_index(self, row)
    }

    /// Iterate over all assignments in the canonical order
    pub fn assignments(&self) -> impl Iterator<Item = Assignment<'_>> + '_ {
        (0..self.row_count().unwrap_or(0)).map(move |row| self.assignment(row))
    }

    /// Find the first variable used by the rule which is not part of this collection
    pub fn unbound_variable<'a, R: Rule + ?Sized>(&self, rule: &'a R) -> Option<&'a VariableName> {
        rule.get_variables()
            .into_iter()
            .find(|name| !self.contains(name.as_str()))
    }

    /// Check that a rule uses only variables included in this collection
    pub fn check_rule<R: Rule + ?Sized>(&self, rule: &R) -> Result<(), TruthError> {
        match self.unbound_variable(rule) {
            None => Ok(()),
            Some(name) => Err(TruthError::UnboundVariable {
                variable: name.to_string(),
                expression: efmt::DEFAULT_FMT_CFG.infix(rule).to_string(),
            }),
        }
    }
}

impl<'a> IntoIterator for &'a InputSpace {
    type Item = &'a VariableName;
    type IntoIter = Iter<'a, VariableName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl fmt::Display for InputSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.iter().join(", "))
    }
}
