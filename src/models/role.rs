//! Role and education level types.
//!
//! Both are closed sets: the salary grid is keyed by the pair, and the role
//! fixes the matricule prefix letter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role family an employee is hired into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manager, matricule prefix `M`.
    Manager,
    /// Technician, matricule prefix `T`.
    Technician,
    /// Commercial (sales) staff, matricule prefix `C`.
    Commercial,
}

impl Role {
    /// Every role, in prefix order.
    pub const ALL: [Role; 3] = [Role::Commercial, Role::Manager, Role::Technician];

    /// Returns the matricule prefix letter for this role.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::Role;
    ///
    /// assert_eq!(Role::Manager.prefix(), 'M');
    /// assert_eq!(Role::Technician.prefix(), 'T');
    /// assert_eq!(Role::Commercial.prefix(), 'C');
    /// ```
    pub fn prefix(self) -> char {
        match self {
            Role::Manager => 'M',
            Role::Technician => 'T',
            Role::Commercial => 'C',
        }
    }

    /// Returns the role owning a prefix letter, if any.
    pub fn from_prefix(prefix: char) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.prefix() == prefix)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Manager => write!(f, "manager"),
            Role::Technician => write!(f, "technician"),
            Role::Commercial => write!(f, "commercial"),
        }
    }
}

/// Highest diploma held, which scales the hiring salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// Vocational certificate (CAP).
    Cap,
    /// Baccalaureate.
    Bac,
    /// Two-year technical degree (BTS or IUT).
    BtsIut,
    /// Three-year university degree.
    Licence,
    /// Master's degree.
    Master,
    /// Engineering school diploma.
    Engineer,
    /// Doctorate.
    Doctorate,
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EducationLevel::Cap => "cap",
            EducationLevel::Bac => "bac",
            EducationLevel::BtsIut => "bts_iut",
            EducationLevel::Licence => "licence",
            EducationLevel::Master => "master",
            EducationLevel::Engineer => "engineer",
            EducationLevel::Doctorate => "doctorate",
        };
        write!(f, "{}", name)
    }
}
