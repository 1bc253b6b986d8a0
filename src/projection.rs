//! Secondary index entries: the filterable attributes of a user, flattened.

use std::collections::BTreeMap;

use crate::criteria::{Criteria, Filter};
use crate::user::UserRecord;

/// Normalized attribute values of one user, keyed by attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterableProjection {
    values: BTreeMap<Criteria, String>,
}

impl FilterableProjection {
    /// Derive the projection of a record. Pure and deterministic.
    pub fn rebuild(record: &UserRecord) -> Self {
        let values = Criteria::ALL
            .into_iter()
            .map(|criteria| (criteria, attribute(record, criteria).to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, criteria: Criteria) -> Option<&str> {
        self.values.get(&criteria).map(String::as_str)
    }

    pub fn matches(&self, filter: &Filter) -> bool {
        self.get(filter.criteria()) == Some(filter.value())
    }
}

fn attribute(record: &UserRecord, criteria: Criteria) -> &str {
    match criteria {
        Criteria::FirstName => record.first_name(),
        Criteria::LastName => record.last_name(),
        Criteria::Nickname => record.nickname(),
        Criteria::Country => record.country(),
        Criteria::Email => record.email(),
        Criteria::Password => record.password(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_every_attribute() {
        let user = UserRecord::new("John", "Smith", "MagicJohn", "john@x.com", "Qwerty", "France");
        let projection = FilterableProjection::rebuild(&user);

        assert_eq!(projection.get(Criteria::FirstName), Some("john"));
        assert_eq!(projection.get(Criteria::LastName), Some("smith"));
        assert_eq!(projection.get(Criteria::Nickname), Some("magicjohn"));
        assert_eq!(projection.get(Criteria::Country), Some("france"));
        assert_eq!(projection.get(Criteria::Email), Some("john@x.com"));
        assert_eq!(projection.get(Criteria::Password), Some("Qwerty"));
    }

    #[test]
    fn matches_case_insensitively_on_the_filter_side() {
        let user = UserRecord::new("John", "Smith", "MagicJohn", "john@x.com", "qwerty", "France");
        let projection = FilterableProjection::rebuild(&user);

        assert!(projection.matches(&Filter::new(Criteria::Country, "FRANCE")));
        assert!(!projection.matches(&Filter::new(Criteria::Country, "spain")));
    }
}
