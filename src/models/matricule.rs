//! Matricule: the business-facing employee identifier.
//!
//! A matricule is one role letter followed by exactly five digits
//! (`M00123`, `T00001`, `C24355`). The letter is a durable format contract
//! shared with every system that stores or matches matricules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Role;

/// Number of digits after the role letter.
pub const MATRICULE_DIGITS: usize = 5;

/// Size of the numeric space per prefix (`00000` to `99999`).
pub const MATRICULE_LIMIT: u32 = 100_000;

/// A validated matricule.
///
/// # Example
///
/// ```
/// use hr_engine::models::Matricule;
///
/// let matricule = Matricule::new('T', 12345).unwrap();
/// assert_eq!(matricule.to_string(), "T12345");
/// assert_eq!(matricule.prefix(), 'T');
/// assert_eq!(matricule.number(), 12345);
///
/// let parsed: Matricule = "M00123".parse().unwrap();
/// assert_eq!(parsed.number(), 123);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Matricule {
    prefix: char,
    number: u32,
}

impl Matricule {
    /// Builds a matricule from a prefix letter and a sequence number.
    ///
    /// Fails with [`EngineError::RangeExhausted`] when `number` does not fit
    /// in five digits.
    pub fn new(prefix: char, number: u32) -> EngineResult<Self> {
        if !prefix.is_ascii_alphabetic() {
            return Err(EngineError::validation(format!(
                "malformed matricule prefix '{}': expected a letter",
                prefix
            )));
        }
        if number >= MATRICULE_LIMIT {
            return Err(EngineError::RangeExhausted {
                limit: MATRICULE_LIMIT,
            });
        }
        Ok(Self { prefix, number })
    }

    /// Parses the `L00000` textual form.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let malformed = || {
            EngineError::validation(format!(
                "malformed matricule '{}': expected one letter followed by {} digits",
                value, MATRICULE_DIGITS
            ))
        };

        let mut chars = value.chars();
        let prefix = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(malformed)?;
        let digits = chars.as_str();
        if digits.len() != MATRICULE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let number = digits.parse::<u32>().map_err(|_| malformed())?;

        Ok(Self { prefix, number })
    }

    /// The role letter.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// The sequence number after the letter.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns true if the matricule carries the given role's letter.
    pub fn belongs_to(&self, role: Role) -> bool {
        self.prefix == role.prefix()
    }
}

impl fmt::Display for Matricule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.prefix,
            self.number,
            width = MATRICULE_DIGITS
        )
    }
}

impl FromStr for Matricule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Matricule {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Matricule> for String {
    fn from(matricule: Matricule) -> Self {
        matricule.to_string()
    }
}
