//! Stable list ordering for dialogs and messages
//!
//! Dialog modes are table-driven: each mode maps to a sequence of comparison
//! keys applied left to right, and every sort is stable, so ties keep the
//! input order. Message modes are simpler: natural order as delivered by the
//! network, or by id.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::entities::{DialogDescriptor, MessageRecord};
use crate::error::DomainError;

/// One comparison key of a dialog sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    /// Dialog category, by label: channel < group < private
    Kind,
    /// Numeric dialog id, ascending
    Id,
    /// Name, case-insensitive ascending
    NameCi,
    /// Selected dialogs before unselected ones
    SelectedFirst,
}

impl SortKey {
    fn cmp(self, a: &DialogDescriptor, b: &DialogDescriptor) -> Ordering {
        match self {
            Self::Kind => a.kind.label().cmp(b.kind.label()),
            Self::Id => a.id.cmp(&b.id),
            Self::NameCi => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::SelectedFirst => b.is_selected.cmp(&a.is_selected),
        }
    }
}

/// Dialog list sort mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelSortMode {
    /// Keep the order as delivered
    #[default]
    None,
    /// By category, then name
    Type,
    /// By numeric id
    Id,
    /// By name, case-insensitive
    Name,
    /// Selected dialogs first
    Selected,
    /// By category, then id
    TypeId,
    /// By category, then name
    TypeName,
    /// By category, selected first within each category, then id
    TypeSelected,
}

impl ChannelSortMode {
    fn keys(self) -> &'static [SortKey] {
        match self {
            Self::None => &[],
            Self::Type => &[SortKey::Kind, SortKey::NameCi],
            Self::Id => &[SortKey::Id],
            Self::Name => &[SortKey::NameCi],
            Self::Selected => &[SortKey::SelectedFirst],
            Self::TypeId => &[SortKey::Kind, SortKey::Id],
            Self::TypeName => &[SortKey::Kind, SortKey::NameCi],
            Self::TypeSelected => &[SortKey::Kind, SortKey::SelectedFirst, SortKey::Id],
        }
    }

    /// Canonical configuration string for this mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Type => "type",
            Self::Id => "id",
            Self::Name => "name",
            Self::Selected => "selected",
            Self::TypeId => "type_id",
            Self::TypeName => "type_name",
            Self::TypeSelected => "type_selected",
        }
    }
}

impl FromStr for ChannelSortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "type" => Ok(Self::Type),
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "selected" => Ok(Self::Selected),
            "type_id" => Ok(Self::TypeId),
            "type_name" => Ok(Self::TypeName),
            "type_selected" => Ok(Self::TypeSelected),
            other => Err(DomainError::InvalidConfiguration(format!(
                "unknown channel sort mode: {other}"
            ))),
        }
    }
}

/// Sort a dialog list in place according to `mode`
///
/// The sort is stable: entries comparing equal under every key of the mode
/// keep their relative input order.
pub fn sort_dialogs(dialogs: &mut [DialogDescriptor], mode: ChannelSortMode) {
    let keys = mode.keys();
    if keys.is_empty() {
        return;
    }
    dialogs.sort_by(|a, b| {
        keys.iter()
            .map(|key| key.cmp(a, b))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
}

/// Message list sort mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageSortMode {
    /// Natural order as delivered by the network; no re-sort
    #[default]
    Telegram,
    /// By message id, ascending
    IdAsc,
    /// By message id, descending
    IdDesc,
}

impl MessageSortMode {
    /// Canonical configuration string for this mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Telegram => "telegram",
            Self::IdAsc => "id_asc",
            Self::IdDesc => "id_desc",
        }
    }
}

impl FromStr for MessageSortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "telegram" => Ok(Self::Telegram),
            "id_asc" => Ok(Self::IdAsc),
            "id_desc" => Ok(Self::IdDesc),
            other => Err(DomainError::InvalidConfiguration(format!(
                "unknown message sort mode: {other}"
            ))),
        }
    }
}

/// Sort a message list in place according to `mode`
pub fn sort_messages(messages: &mut [MessageRecord], mode: MessageSortMode) {
    match mode {
        MessageSortMode::Telegram => {}
        MessageSortMode::IdAsc => messages.sort_by_key(|m| m.id),
        MessageSortMode::IdDesc => messages.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}
