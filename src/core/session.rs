// Session identity
//
// Workflows receive the signed-in user at construction time. Nothing in
// this crate reads ambient global state to discover who is submitting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{AppError, Result};

/// Role of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Employee => write!(f, "Employee"),
            UserType::Admin => write!(f, "Admin"),
        }
    }
}

impl FromStr for UserType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Employee" => Ok(UserType::Employee),
            "Admin" => Ok(UserType::Admin),
            other => Err(AppError::session(format!("unknown user type: {}", other))),
        }
    }
}

/// Identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
}

impl Session {
    pub fn new(user_type: UserType, email: impl Into<String>) -> Self {
        Self {
            user_type,
            email: email.into(),
        }
    }

    pub fn employee(email: impl Into<String>) -> Self {
        Self::new(UserType::Employee, email)
    }

    /// Build a session from the JSON blob hosts keep under their `user`
    /// storage key, e.g. `{"type":"Employee","email":"a@a"}`.
    pub fn from_user_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| AppError::session(format!("invalid user payload: {}", err)))
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
