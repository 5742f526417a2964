//! Dialog descriptor - a channel, group, or private conversation

use serde::{Deserialize, Serialize};

use crate::value_objects::ChannelId;

/// Dialog type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// Broadcast channel
    #[default]
    Channel,
    /// Group chat
    Group,
    /// Private one-to-one dialog
    Private,
}

impl DialogKind {
    /// Category label used for display and for type-keyed sorting
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Group => "group",
            Self::Private => "private",
        }
    }
}

impl From<&str> for DialogKind {
    fn from(value: &str) -> Self {
        match value {
            "group" => Self::Group,
            "private" => Self::Private,
            // Default for "channel" and unknown stored values
            _ => Self::Channel,
        }
    }
}

/// Dialog descriptor entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogDescriptor {
    pub id: ChannelId,
    pub name: String,
    pub kind: DialogKind,
    /// Whether the dialog is in the user's selected set
    pub is_selected: bool,
}

impl DialogDescriptor {
    /// Create a new descriptor, unselected by default
    #[must_use]
    pub fn new(id: ChannelId, name: String, kind: DialogKind) -> Self {
        Self {
            id,
            name,
            kind,
            is_selected: false,
        }
    }
}
