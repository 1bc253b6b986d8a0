#![allow(dead_code)]

use user_registry::UserRecord;

pub fn john() -> UserRecord {
    UserRecord::new("John", "Smith", "MagicJohn", "john@x.com", "qwerty", "France")
}

pub fn numbered(n: usize, country: &str) -> UserRecord {
    UserRecord::new(
        format!("First{n}"),
        format!("Last{n}"),
        format!("nick{n}"),
        format!("user{n}@x.com"),
        "pw",
        country,
    )
}
