//! Data types exchanged with the users collection.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PerPage;
use crate::gorest::Pagination;

/// A user record as returned by the collection.
///
/// `id` is assigned by the server and identifies the record for update and
/// delete calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    /// The server-assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Gender, e.g. `"male"` or `"female"`.
    pub gender: String,
    /// Account status, e.g. `"active"` or `"inactive"`.
    pub status: String,
}

/// A partial user used as the body of an update.
///
/// Only fields that are set are serialized; the serialized form is the
/// request body.
///
/// # Example
///
/// ```rust
/// use gorest_client::UserUpdate;
///
/// let update = UserUpdate::new(3718).name("Alex Smith");
/// let body = serde_json::to_value(&update).unwrap();
/// assert_eq!(body, serde_json::json!({"id": 3718, "name": "Alex Smith"}));
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct UserUpdate {
    /// Identifier of the user to update. Required by `update`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UserUpdate {
    /// Starts an update targeting the given user.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Sets the new name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the new gender.
    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Sets the new status.
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            gender: Some(user.gender.clone()),
            status: Some(user.status.clone()),
        }
    }
}

/// A page of users plus the pagination metadata the server reported.
///
/// `pagination` is `None` when the response carried no pagination headers
/// or when the call failed softly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageResult {
    /// Users on this page.
    pub users: Vec<User>,
    /// Position of this page within the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl PageResult {
    /// Returns `true` if the page holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Query parameters for a listing request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Results per page.
    pub per_page: Option<PerPage>,
}

impl RequestParams {
    /// Parameters for one page with the given size.
    #[must_use]
    pub const fn page(page: u32, per_page: PerPage) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Converts the parameters into `page`/`per_page` query pairs.
    #[must_use]
    pub fn to_query(&self) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        if let Some(page) = self.page {
            query.insert("page".to_string(), page.to_string());
        }
        if let Some(per_page) = self.per_page {
            query.insert("per_page".to_string(), per_page.to_string());
        }
        query
    }
}

/// The user field a sort compares on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Numeric order of `id`.
    #[default]
    Id,
    /// Lexical order of `name`.
    Name,
    /// Lexical order of `email`.
    Email,
    /// Lexical order of `gender`.
    Gender,
    /// Lexical order of `status`.
    Status,
}

impl SortKey {
    /// Returns the field name this key sorts on.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::Status => "status",
        }
    }

    /// Compares two users on this key's field.
    #[must_use]
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::Email => a.email.cmp(&b.email),
            Self::Gender => a.gender.cmp(&b.gender),
            Self::Status => a.status.cmp(&b.status),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown sort key '{0}'. Expected one of: id, name, email, gender, status.")]
pub struct UnknownSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "gender" => Ok(Self::Gender),
            "status" => Ok(Self::Status),
            other => Err(UnknownSortKeyError(other.to_string())),
        }
    }
}

/// Sorts users in place by the given key and returns the same slice.
///
/// The sort is stable: users that compare equal keep their relative order.
pub fn sort_users(users: &mut [User], key: SortKey) -> &mut [User] {
    users.sort_by(|a, b| key.compare(a, b));
    users
}
