//! Reaction snapshot entity <-> model mapper

use chanlog_core::entities::ReactionSnapshot;
use chanlog_core::value_objects::{ChannelId, MessageId};

use crate::models::ReactionHistoryModel;

/// Convert ReactionHistoryModel to ReactionSnapshot entity
impl From<ReactionHistoryModel> for ReactionSnapshot {
    fn from(model: ReactionHistoryModel) -> Self {
        ReactionSnapshot {
            message_id: MessageId::new(model.message_id),
            channel_id: ChannelId::new(model.channel_id),
            reactions_count: model.reactions_count,
            checked_at: model.checked_at,
        }
    }
}
