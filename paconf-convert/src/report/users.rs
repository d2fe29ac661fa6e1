use xlsx_core::{Cell, Header};

use super::{marker, sorted_by_name, Row};
use crate::model::User;

pub const SHEET: &str = "Users";

/// Fixed placeholder emitted instead of any stored credential.
pub const PASSWORD_PLACEHOLDER: &str = "<REDACTED>";

pub fn headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 20.0),
        Header::new("Password", 20.0),
        Header::new("Superuser", 12.0),
        Header::new("Devicereader", 12.0),
    ]
}

pub fn rows(users: &[User]) -> Vec<Row> {
    sorted_by_name(users, |user| user.name.as_str())
        .iter()
        .enumerate()
        .map(|(idx, user)| {
            vec![
                Cell::from(idx + 1),
                Cell::from(user.name.as_str()),
                Cell::from(PASSWORD_PLACEHOLDER),
                marker(user.is_superuser(), "yes"),
                marker(user.is_devicereader(), "yes"),
            ]
        })
        .collect()
}
