// Card and column render models

use crate::record::{UserRecord, json_type_name};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const NAME_LABEL: &str = "Name: ";
pub const USERNAME_LABEL: &str = "Username: ";
pub const WEBSITE_LABEL: &str = "Website: ";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    #[error("record is a {0}, not an object")]
    NotAnObject(&'static str),

    #[error("record has no '{0}' field")]
    MissingField(&'static str),

    #[error("field '{field}' is a {found}, not a string")]
    WrongType {
        field: &'static str,
        found: &'static str,
    },
}

/// A user record whose display fields have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub name: String,
    pub username: String,
    pub website: String,
}

impl TryFrom<&UserRecord> for ValidUser {
    type Error = CardError;

    fn try_from(record: &UserRecord) -> Result<Self, Self::Error> {
        if !record.as_value().is_object() {
            return Err(CardError::NotAnObject(json_type_name(record.as_value())));
        }

        let text = |field: &'static str| -> Result<String, CardError> {
            let value = record.field(field).ok_or(CardError::MissingField(field))?;
            value
                .as_str()
                .map(str::to_string)
                .ok_or(CardError::WrongType {
                    field,
                    found: json_type_name(value),
                })
        };

        Ok(Self {
            name: text("name")?,
            username: text("username")?,
            website: text("website")?,
        })
    }
}

/// Display lines of one user card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardModel {
    pub name: String,
    pub username: String,
    pub website: String,
}

impl CardModel {
    /// Field values are copied verbatim, without escaping.
    pub fn from_user(user: &ValidUser) -> Self {
        Self {
            name: format!("{}{}", NAME_LABEL, user.name),
            username: format!("{}{}", USERNAME_LABEL, user.username),
            website: format!("{}{}", WEBSITE_LABEL, user.website),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [&self.name, &self.username, &self.website]
    }
}

/// One column of cards under a TLD title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnModel {
    pub title: String,
    pub cards: Vec<CardModel>,
    /// Members left out because they could not be carded.
    #[serde(default)]
    pub skipped: usize,
}

/// Build the card for one record, or report why it cannot have one.
pub fn build_card(user: &UserRecord) -> Result<CardModel, CardError> {
    match ValidUser::try_from(user) {
        Ok(valid) => Ok(CardModel::from_user(&valid)),
        Err(e) => {
            warn!("Skipping user {}: {}", user, e);
            Err(e)
        }
    }
}

/// Build a column, skipping members that cannot be carded.
///
/// Any title is accepted as given, whitespace included.
pub fn build_column(title: &str, users: &[UserRecord]) -> ColumnModel {
    let cards: Vec<CardModel> = users.iter().filter_map(|user| build_card(user).ok()).collect();
    let skipped = users.len() - cards.len();
    if skipped > 0 {
        debug!("Column '{}': {} of {} users skipped", title, skipped, users.len());
    }

    ColumnModel {
        title: title.to_string(),
        cards,
        skipped,
    }
}
