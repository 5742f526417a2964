//! Message entity <-> model mapper

use chanlog_core::entities::{MessageRecord, Sender};
use chanlog_core::value_objects::{ChannelId, MessageId};

use crate::models::MessageModel;

/// Convert MessageModel to MessageRecord entity
impl From<MessageModel> for MessageRecord {
    fn from(model: MessageModel) -> Self {
        let sender = model.sender_id.map(|id| Sender {
            id,
            first_name: model.first_name,
            last_name: model.last_name,
            username: model.username,
        });

        // Stored raw payloads predate validation; an unparsable blob is dropped
        let raw = model
            .raw_data
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok());

        MessageRecord {
            id: MessageId::new(model.telegram_id),
            channel_id: ChannelId::new(model.channel_id),
            sender,
            content: model.content,
            date: model.date,
            reply_to_id: model.reply_to_msg_id.map(MessageId::new),
            reactions_count: model.reactions_count,
            raw,
        }
    }
}

/// Convert MessageRecord entity reference to values for database insertion
pub struct MessageInsert<'a> {
    pub telegram_id: i64,
    pub channel_id: i64,
    pub sender_id: Option<i64>,
    pub content: &'a str,
    pub reply_to_msg_id: Option<i64>,
    pub reactions_count: i64,
    pub raw_data: Option<String>,
}

impl<'a> MessageInsert<'a> {
    pub fn new(message: &'a MessageRecord) -> Self {
        Self {
            telegram_id: message.id.into_inner(),
            channel_id: message.channel_id.into_inner(),
            sender_id: message.sender.as_ref().map(|s| s.id),
            content: &message.content,
            reply_to_msg_id: message.reply_to_id.map(MessageId::into_inner),
            reactions_count: message.reactions_count,
            raw_data: message.raw.as_ref().map(ToString::to_string),
        }
    }
}
