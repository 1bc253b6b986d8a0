use serde::{Deserialize, Serialize};

/// A user as held by the store.
///
/// Names, nickname and country are lower-cased on construction; email and
/// password are kept exactly as supplied. Records are never mutated in place:
/// an update replaces the whole value under the same email.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "RawUser")]
pub struct UserRecord {
    #[serde(rename = "firstname")]
    first_name: String,
    #[serde(rename = "lastname")]
    last_name: String,
    nickname: String,
    email: String,
    #[serde(skip_serializing)]
    password: String,
    country: String,
}

/// Wire shape of a user before normalization.
#[derive(Deserialize)]
struct RawUser {
    firstname: String,
    lastname: String,
    nickname: String,
    email: String,
    password: String,
    country: String,
}

impl From<RawUser> for UserRecord {
    fn from(raw: RawUser) -> Self {
        UserRecord::new(
            raw.firstname,
            raw.lastname,
            raw.nickname,
            raw.email,
            raw.password,
            raw.country,
        )
    }
}

impl UserRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nickname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into().to_lowercase(),
            last_name: last_name.into().to_lowercase(),
            nickname: nickname.into().to_lowercase(),
            email: email.into(),
            password: password.into(),
            country: country.into().to_lowercase(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

// Password is a credential, not part of the user's identity.
impl PartialEq for UserRecord {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.nickname == other.nickname
            && self.email == other.email
            && self.country == other.country
    }
}

impl Eq for UserRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    fn john(password: &str) -> UserRecord {
        UserRecord::new("John", "Smith", "MagicJohn", "John@x.com", password, "France")
    }

    #[test]
    fn normalizes_everything_but_email_and_password() {
        let user = john("QwErTy");
        assert_eq!(user.first_name(), "john");
        assert_eq!(user.last_name(), "smith");
        assert_eq!(user.nickname(), "magicjohn");
        assert_eq!(user.country(), "france");
        assert_eq!(user.email(), "John@x.com");
        assert_eq!(user.password(), "QwErTy");
    }

    #[test]
    fn equality_ignores_password() {
        assert_eq!(john("qwerty"), john("azerty"));
        assert_ne!(
            john("qwerty"),
            UserRecord::new("John", "Smith", "MagicJohn", "john@x.com", "qwerty", "Spain")
        );
    }

    #[test]
    fn deserializing_normalizes() {
        let user: UserRecord = serde_json::from_str(
            r#"{"firstname":"JOHN","lastname":"Smith","nickname":"Magic",
                "email":"John@x.com","password":"Pw","country":"FRANCE"}"#,
        )
        .unwrap();
        assert_eq!(user.first_name(), "john");
        assert_eq!(user.country(), "france");
        assert_eq!(user.password(), "Pw");
    }

    #[test]
    fn password_is_never_serialized() {
        let json = serde_json::to_value(john("qwerty")).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["firstname"], "john");
        assert_eq!(json["email"], "John@x.com");
    }
}
