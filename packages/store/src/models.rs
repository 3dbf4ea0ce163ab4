//! # Domain models for user records and table columns
//!
//! These types are `Serialize + Deserialize` so they can be written to the
//! platform key/value store as JSON and read back on the next launch.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserId`] | Integer id of a record. Serialises as a bare JSON number. |
//! | [`User`] | A persisted record: `{ "id": 1, "name": "Ann", "email": "ann@x.com" }`. |
//! | [`UserDraft`] | Unsaved form input for a create or a full edit. |
//! | [`UserField`] | The fields that can be edited inline (`name`, `email`). |
//! | [`Column`] | A table column (`id`, `name`, `email`) with its label. |
//! | [`ColumnVisibility`] | Per-column display flags, stored under `visibleColumns`. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Id of a user record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Current value of an editable field.
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
        }
    }

    /// Draft pre-filled from this record, used to open the edit form.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Candidate record collected by the user form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Copy with surrounding whitespace removed from both fields.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

/// Fields editable in place from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserField {
    Name,
    Email,
}

impl UserField {
    /// Lowercase key, matching the JSON field name.
    pub fn key(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserField::Name => f.write_str("Name"),
            UserField::Email => f.write_str("Email"),
        }
    }
}

/// A column of the user table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    Email,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 3] = [Column::Id, Column::Name, Column::Email];

    pub fn key(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Name => "Name",
            Column::Email => "Email",
        }
    }

    /// The inline-editable field shown in this column, if any.
    pub fn field(self) -> Option<UserField> {
        match self {
            Column::Id => None,
            Column::Name => Some(UserField::Name),
            Column::Email => Some(UserField::Email),
        }
    }
}

/// Which columns the table shows. Keys missing from a stored map are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibility {
    #[serde(default = "visible")]
    pub id: bool,
    #[serde(default = "visible")]
    pub name: bool,
    #[serde(default = "visible")]
    pub email: bool,
}

fn visible() -> bool {
    true
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            id: true,
            name: true,
            email: true,
        }
    }
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: Column) -> bool {
        match column {
            Column::Id => self.id,
            Column::Name => self.name,
            Column::Email => self.email,
        }
    }

    /// Copy with the flag for `column` flipped.
    #[must_use]
    pub fn toggled(mut self, column: Column) -> Self {
        let flag = match column {
            Column::Id => &mut self.id,
            Column::Name => &mut self.name,
            Column::Email => &mut self.email,
        };
        *flag = !*flag;
        self
    }

    /// Visible columns in display order.
    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }
}
