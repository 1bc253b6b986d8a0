//! Syntactic checks performed by transports before a request reaches the store.
//!
//! The store trusts its input; these helpers are what a caller runs first.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::criteria::{Criteria, Filter};
use crate::user::UserRecord;

// The pattern is a literal; `pattern_compiles` forces it in tests.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,6}$").expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),
    #[error("the email address [{0}] is not correct")]
    InvalidEmail(String),
    #[error("the given criteria [{0}] does not correspond to any possible filter")]
    UnknownCriteria(String),
    #[error("the given criteria [{0}] must be given with a non-empty value")]
    MissingValue(String),
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Every field present, email well formed.
pub fn validate_user(user: &UserRecord) -> Result<(), ValidationError> {
    let fields = [
        ("first name", user.first_name()),
        ("last name", user.last_name()),
        ("nickname", user.nickname()),
        ("email", user.email()),
        ("password", user.password()),
        ("country", user.country()),
    ];
    for (name, value) in fields {
        if value.is_empty() {
            return Err(ValidationError::MissingField(name));
        }
    }
    validate_email(user.email())
}

/// Resolve a search request into a filter on a searchable attribute.
pub fn parse_filter(criteria: &str, value: &str) -> Result<Filter, ValidationError> {
    let parsed = criteria
        .parse::<Criteria>()
        .ok()
        .filter(|criteria| criteria.is_searchable())
        .ok_or_else(|| ValidationError::UnknownCriteria(criteria.to_string()))?;

    if value.is_empty() {
        return Err(ValidationError::MissingValue(criteria.to_string()));
    }

    Ok(Filter::new(parsed, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_compiles() {
        assert!(EMAIL.as_str().starts_with("(?i)"));
    }

    #[test]
    fn email_pattern() {
        assert!(validate_email("john@x.com").is_ok());
        assert!(validate_email("John.Smith+tag@Mail.Example.ORG").is_ok());
        assert!(validate_email("john@x").is_err());
        assert!(validate_email("john.x.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn user_fields_must_be_present() {
        let ok = UserRecord::new("John", "Smith", "MagicJohn", "john@x.com", "qwerty", "France");
        assert_eq!(validate_user(&ok), Ok(()));

        let no_password = UserRecord::new("John", "Smith", "MagicJohn", "john@x.com", "", "France");
        assert_eq!(
            validate_user(&no_password),
            Err(ValidationError::MissingField("password"))
        );

        let bad_email = UserRecord::new("John", "Smith", "MagicJohn", "john", "qwerty", "France");
        assert_eq!(
            validate_user(&bad_email),
            Err(ValidationError::InvalidEmail("john".into()))
        );
    }

    #[test]
    fn filters() {
        let filter = parse_filter("country", "France").unwrap();
        assert_eq!(filter, Filter::new(Criteria::Country, "france"));

        assert_eq!(
            parse_filter("password", "qwerty"),
            Err(ValidationError::UnknownCriteria("password".into()))
        );
        assert_eq!(
            parse_filter("age", "3"),
            Err(ValidationError::UnknownCriteria("age".into()))
        );
        assert_eq!(
            parse_filter("nickname", ""),
            Err(ValidationError::MissingValue("nickname".into()))
        );
    }
}
