//! Types for account and session operations.

use serde::{Deserialize, Serialize};

/// A signed-in user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// First name, if the user provided one.
    #[serde(default)]
    pub name: Option<String>,
    /// Surname, if the user provided one.
    #[serde(default)]
    pub surname: Option<String>,
    /// Account email.
    pub email: String,
}

impl User {
    pub fn new(name: Option<&str>, surname: Option<&str>, email: &str) -> Self {
        Self {
            name: name.map(str::to_string),
            surname: surname.map(str::to_string),
            email: email.to_string(),
        }
    }
}

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// New-account registration request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}
