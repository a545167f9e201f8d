//! User model matching the backend `User` resource.

use serde::{Deserialize, Serialize};

/// A user persisted by the backend.
///
/// `id` is assigned by the server and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Serialized as `null` when absent
    #[serde(default)]
    pub age: Option<i32>,
}

/// Request body for creating or updating a user.
///
/// Create and update share the same shape; the id travels in the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
        }
    }
}

/// The three inputs of the user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Email,
    Age,
}

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Email => "Email",
            DraftField::Age => "Age",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DraftField::Name => "Jane Doe",
            DraftField::Email => "jane@example.com",
            DraftField::Age => "30",
        }
    }
}
