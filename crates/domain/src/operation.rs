use crate::DomainError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Sign,
    Verify,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Sign => "sign",
            Operation::Verify => "verify",
        }
    }

    /// Fixture file consulted when no explicit path is configured.
    pub fn default_fixture(&self) -> &'static str {
        match self {
            Operation::Sign => "arc-draft-sign-tests.yml",
            Operation::Verify => "arc-draft-verify-tests.yml",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sign" => Ok(Operation::Sign),
            "verify" => Ok(Operation::Verify),
            _ => Err(DomainError::UnsupportedOperation(s.to_string())),
        }
    }
}
