use crate::{InputSpace, TruthError, VariableName};
use bit_set::BitSet;
use std::fmt;

/// A complete binding of the declared inputs to Boolean values.
///
/// Assignments are defined as sets of the positions of all true inputs (using bit-sets internally), all other
/// inputs are implicitly false. An assignment thus always provides exactly one value for each input of the
/// [InputSpace] it borrows, and no value for any other name.
///
/// ```
/// use truthkit::InputSpace;
/// # use truthkit::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let inputs = InputSpace::from_names(["p", "q", "r"])?;
///
/// // Row 6 is 110 in binary: p and q are true
/// let mut assignment = inputs.assignment(6);
/// assert_eq!(assignment.get("p"), Some(true));
/// assert_eq!(assignment.get("r"), Some(false));
/// assert_eq!(assignment.get("s"), None);
///
/// assignment.set("r", true)?;
/// assert_eq!(assignment.row_index(), 7);
/// assert_eq!(format!("{}", assignment), "111");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment<'a> {
    space: &'a InputSpace,
    active: BitSet,
}

impl<'a> Assignment<'a> {
    /// Assignment with all inputs set to false
    pub fn new(space: &'a InputSpace) -> Self {
        Self {
            space,
            active: BitSet::with_capacity(space.len()),
        }
    }

    /// Assignment of the inputs at the given index in the canonical order of rows.
    ///
    /// The input at position ```i``` is true if the bit ```n-1-i``` of the row index is set.
    /// Bits beyond the number of inputs are ignored.
    pub fn from_row_index(space: &'a InputSpace, row: usize) -> Self {
        let n = space.len();
        let mut assignment = Self::new(space);
        for pos in 0..n {
            let shift = n - 1 - pos;
            if shift < usize::BITS as usize && (row >> shift) & 1 == 1 {
                assignment.active.insert(pos);
            }
        }
        assignment
    }

    /// The inputs bound by this assignment
    pub fn space(&self) -> &'a InputSpace {
        self.space
    }

    /// Get the value of an input, or none if the name is not a declared input
    pub fn get(&self, name: &str) -> Option<bool> {
        self.space.position(name).map(|pos| self.active.contains(pos))
    }

    /// Get the value of the input at the given position
    pub fn value_at(&self, pos: usize) -> bool {
        self.active.contains(pos)
    }

    /// Change the value of an input
    pub fn set(&mut self, name: &str, value: bool) -> Result<(), TruthError> {
        let pos = self.space.position_or_err(name)?;
        match value {
            true => self.active.insert(pos),
            false => self.active.remove(pos),
        };
        Ok(())
    }

    /// Iterate over the values of all inputs in declaration order
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.space.len()).map(move |pos| self.active.contains(pos))
    }

    /// Iterate over the names of the inputs with their value
    pub fn iter(&self) -> impl Iterator<Item = (&'a VariableName, bool)> + '_ {
        self.space.iter().zip(self.values())
    }

    /// Index of this assignment in the canonical order of rows
    pub fn row_index(&self) -> usize {
        self.values().fold(0, |row, b| (row << 1) | b as usize)
    }
}

impl fmt::Display for Assignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.values() {
            match b {
                true => write!(f, "1")?,
                false => write!(f, "0")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn canonical_order() -> Result<(), TruthError> {
        let inputs = InputSpace::from_names(["p", "q"])?;
        let rows: Vec<Vec<bool>> = inputs.assignments().map(|a| a.values().collect()).collect();
        assert_eq!(
            rows,
            vec![
                vec![false, false],
                vec![false, true],
                vec![true, false],
                vec![true, true],
            ]
        );
        Ok(())
    }

    #[test]
    fn row_index_round_trip() -> Result<(), TruthError> {
        let inputs = InputSpace::from_names(["a", "b", "c", "d"])?;
        for (row, assignment) in inputs.assignments().enumerate() {
            assert_eq!(assignment.row_index(), row);
            assert_eq!(assignment, inputs.assignment(row));
        }
        Ok(())
    }

    #[test]
    fn set_values() -> Result<(), TruthError> {
        let inputs = InputSpace::from_names(["x", "y"])?;
        let mut assignment = Assignment::new(&inputs);
        assert_eq!(format!("{}", assignment), "00");

        assignment.set("x", true)?;
        assert_eq!(assignment.get("x"), Some(true));
        assert_eq!(assignment.row_index(), 2);
        assignment.set("x", false)?;
        assert_eq!(assignment.get("x"), Some(false));
        assert_eq!(assignment.set("z", true), Err(TruthError::NoSuchInput("z".into())));

        let pairs: Vec<(String, bool)> = inputs
            .assignment(1)
            .iter()
            .map(|(n, b)| (n.to_string(), b))
            .collect();
        assert_eq!(pairs, vec![("x".to_string(), false), ("y".to_string(), true)]);
        Ok(())
    }
}
