//! Names of Boolean input variables

use crate::TruthError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Same shape as the variable token of the expression grammar
static RE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\\_^{}][\p{L}0-9\\_^{}]*$").unwrap());

/// The name of a Boolean variable.
///
/// Names are case-sensitive and non-empty. They start with a letter or one of the markup symbols
/// ```\ _ ^ { }``` (to accept LaTeX-style names like ```p_{1}``` or ```\alpha```), and can contain ASCII
/// digits after the first character.
///
/// ```
/// use truthkit::VariableName;
///
/// assert!(VariableName::new("p_{1}").is_ok());
/// assert!(VariableName::new("\\alpha").is_ok());
/// assert!(VariableName::new("1x").is_err());
/// assert!(VariableName::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableName(String);

impl VariableName {
    /// Validate a name and wrap it
    pub fn new(name: &str) -> Result<Self, TruthError> {
        match is_valid_name(name) {
            true => Ok(Self(name.to_string())),
            false => Err(TruthError::InvalidName(name.to_string())),
        }
    }

    /// Wrap a token already recognized by the expression grammar
    pub(crate) fn from_token(token: &str) -> Self {
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Test if a string can be used as a variable name
pub fn is_valid_name(name: &str) -> bool {
    RE_NAME.is_match(name)
}

impl FromStr for VariableName {
    type Err = TruthError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::new(name)
    }
}

impl AsRef<str> for VariableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VariableName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::variable::is_valid_name;
    use crate::*;

    #[test]
    fn valid_names() {
        for name in ["p", "q", "switchOne", "x1", "p_{12}", "\\phi", "a^2", "_", "été"] {
            assert!(is_valid_name(name), "{} should be valid", name);
        }
    }

    #[test]
    fn invalid_names() {
        for name in ["", "1", "0", "1x", "p q", "p,q", "p+q", "p.q", "!p", "(p)", " p"] {
            assert!(!is_valid_name(name), "{} should be invalid", name);
        }
    }

    #[test]
    fn parse_name() -> Result<(), TruthError> {
        let name: VariableName = "p_{1}".parse()?;
        assert_eq!(name.as_str(), "p_{1}");
        assert_eq!(format!("{}", name), "p_{1}");

        assert_eq!(
            "a b".parse::<VariableName>(),
            Err(TruthError::InvalidName("a b".into()))
        );
        Ok(())
    }
}
