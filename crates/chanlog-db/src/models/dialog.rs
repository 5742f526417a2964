//! Dialog database model

use sqlx::FromRow;

/// Database model for dialogs table
#[derive(Debug, Clone, FromRow)]
pub struct DialogModel {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub is_selected: bool,
}
