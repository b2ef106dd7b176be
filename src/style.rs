//! Rendering of truth tables

use crate::{TruthError, TruthTable};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Glyphs used to display Boolean values in a rendered table.
///
/// The set of styles is closed: each style is identified by a label ```true/false``` (for example ```T/F```),
/// which can be parsed to select the style.
///
/// ```
/// use truthkit::ValueStyle;
///
/// let style: ValueStyle = "yes/no".parse().unwrap();
/// assert_eq!(style.glyphs(), ("no", "yes"));
/// assert_eq!(ValueStyle::default().glyph(true), "T");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValueStyle {
    /// ```1/0```
    Digits,
    /// ```T/F```
    #[default]
    Initials,
    /// ```true/false```
    Lowercase,
    /// ```True/False```
    Capitalized,
    /// ```Y/N```
    YesNoInitials,
    /// ```yes/no```
    YesNoLowercase,
    /// ```Yes/No```
    YesNoCapitalized,
}

impl ValueStyle {
    /// All available styles
    pub const ALL: [ValueStyle; 7] = [
        ValueStyle::Digits,
        ValueStyle::Initials,
        ValueStyle::Lowercase,
        ValueStyle::Capitalized,
        ValueStyle::YesNoInitials,
        ValueStyle::YesNoLowercase,
        ValueStyle::YesNoCapitalized,
    ];

    /// The pair of glyphs for the false and true values
    pub fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            ValueStyle::Digits => ("0", "1"),
            ValueStyle::Initials => ("F", "T"),
            ValueStyle::Lowercase => ("false", "true"),
            ValueStyle::Capitalized => ("False", "True"),
            ValueStyle::YesNoInitials => ("N", "Y"),
            ValueStyle::YesNoLowercase => ("no", "yes"),
            ValueStyle::YesNoCapitalized => ("No", "Yes"),
        }
    }

    /// The glyph representing a value
    pub fn glyph(self, value: bool) -> &'static str {
        let (f, t) = self.glyphs();
        match value {
            true => t,
            false => f,
        }
    }

    /// The label of the style, made of the true and false glyphs
    pub fn label(self) -> &'static str {
        match self {
            ValueStyle::Digits => "1/0",
            ValueStyle::Initials => "T/F",
            ValueStyle::Lowercase => "true/false",
            ValueStyle::Capitalized => "True/False",
            ValueStyle::YesNoInitials => "Y/N",
            ValueStyle::YesNoLowercase => "yes/no",
            ValueStyle::YesNoCapitalized => "Yes/No",
        }
    }
}

impl FromStr for ValueStyle {
    type Err = TruthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        ValueStyle::ALL
            .into_iter()
            .find(|style| style.label() == label)
            .ok_or_else(|| TruthError::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for ValueStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Render a truth table as a markdown table.
///
/// The header lists the inputs then the source text of the outputs, followed by a separator line
/// and one line per row. Each line ends with a newline character.
///
/// Output sources are copied verbatim in the header: a source using the `|` spelling of OR is not
/// escaped and adds cell separators to the header line.
///
/// ```
/// use truthkit::{build_truth_table, parse_outputs, render_table, InputSpace, ValueStyle};
/// # use truthkit::TruthError;
/// # fn main() -> Result<(), TruthError> {
///
/// let inputs = InputSpace::from_names(["p"])?;
/// let table = build_truth_table(inputs, parse_outputs(["!(p)"])?)?;
/// assert_eq!(
///     render_table(&table, ValueStyle::Digits),
///     "| p | !(p) |\n| - | - |\n| 0 | 1 |\n| 1 | 0 |\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_table(table: &TruthTable, style: ValueStyle) -> String {
    let header = table
        .inputs()
        .iter()
        .map(|name| name.as_str())
        .chain(table.outputs().iter().map(|output| output.source()))
        .join(" | ");

    let mut text = format!("| {} |\n", header);
    text.push('|');
    text.push_str(&" - |".repeat(table.width()));
    text.push('\n');

    for row in table.rows() {
        text.push('|');
        for value in row.values() {
            text.push(' ');
            text.push_str(style.glyph(value));
            text.push_str(" |");
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn style_labels() -> Result<(), TruthError> {
        for style in ValueStyle::ALL {
            let parsed: ValueStyle = style.label().parse()?;
            assert_eq!(parsed, style);
            let (f, t) = style.glyphs();
            assert_eq!(style.label(), format!("{}/{}", t, f));
        }
        assert_eq!(" Y/N ".parse::<ValueStyle>()?, ValueStyle::YesNoInitials);
        assert_eq!(
            "yes/No".parse::<ValueStyle>(),
            Err(TruthError::UnknownStyle("yes/No".into()))
        );
        assert_eq!(ValueStyle::default(), ValueStyle::Initials);
        Ok(())
    }

    #[test]
    fn render_implication() -> Result<(), TruthError> {
        let inputs = InputSpace::from_names(["p", "q"])?;
        let table = build_truth_table(inputs, parse_outputs(["!p+q"])?)?;
        let expected = "\
| p | q | !p+q |
| - | - | - |
| F | F | T |
| F | T | T |
| T | F | F |
| T | T | T |
";
        assert_eq!(table.render(ValueStyle::Initials), expected);
        Ok(())
    }

    #[test]
    fn render_without_outputs() -> Result<(), TruthError> {
        let inputs = InputSpace::from_names(["b", "a"])?;
        let table = build_truth_table(inputs, vec![])?;
        let expected = "\
| b | a |
| - | - |
| no | no |
| no | yes |
| yes | no |
| yes | yes |
";
        assert_eq!(render_table(&table, ValueStyle::YesNoLowercase), expected);
        Ok(())
    }

    #[test]
    fn render_keeps_output_order() -> Result<(), TruthError> {
        let inputs = InputSpace::from_names(["x"])?;
        let table = build_truth_table(inputs, parse_outputs(["1", "x", "!x"])?)?;
        let text = table.render(ValueStyle::Capitalized);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "| x | 1 | x | !x |");
        assert_eq!(lines[1], "| - | - | - | - |");
        assert_eq!(lines[2], "| False | True | False | True |");
        assert_eq!(lines[3], "| True | True | True | False |");
        Ok(())
    }

    #[test]
    fn render_sources_verbatim() -> Result<(), TruthError> {
        let inputs = InputSpace::from_names(["p", "q"])?;
        let table = build_truth_table(inputs, parse_outputs(["p|q", "p . q"])?)?;
        let text = table.render(ValueStyle::Digits);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "| p | q | p|q | p . q |");
        assert_eq!(lines[1], "| - | - | - | - |");
        assert_eq!(lines[4], "| 1 | 0 | 1 | 0 |");
        Ok(())
    }
}
