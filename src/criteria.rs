//! Filterable attributes and attribute filters.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Attribute of a user that can appear in a projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criteria {
    FirstName,
    LastName,
    Nickname,
    Country,
    Email,
    Password,
}

impl Criteria {
    pub const ALL: [Criteria; 6] = [
        Criteria::FirstName,
        Criteria::LastName,
        Criteria::Nickname,
        Criteria::Country,
        Criteria::Email,
        Criteria::Password,
    ];

    /// Attributes a caller is allowed to search on.
    pub const SEARCHABLE: [Criteria; 4] = [
        Criteria::FirstName,
        Criteria::LastName,
        Criteria::Nickname,
        Criteria::Country,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Criteria::FirstName => "firstname",
            Criteria::LastName => "lastname",
            Criteria::Nickname => "nickname",
            Criteria::Country => "country",
            Criteria::Email => "email",
            Criteria::Password => "password",
        }
    }

    pub fn is_searchable(self) -> bool {
        Self::SEARCHABLE.contains(&self)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown criteria [{0}]")]
pub struct UnknownCriteria(pub String);

impl FromStr for Criteria {
    type Err = UnknownCriteria;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|criteria| criteria.as_str() == s)
            .ok_or_else(|| UnknownCriteria(s.to_string()))
    }
}

/// Match on one attribute. The value is lower-cased on construction so it
/// compares directly against normalized projections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    criteria: Criteria,
    value: String,
}

impl Filter {
    pub fn new(criteria: Criteria, value: impl AsRef<str>) -> Self {
        Self {
            criteria,
            value: value.as_ref().to_lowercase(),
        }
    }

    pub fn criteria(&self) -> Criteria {
        self.criteria
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
