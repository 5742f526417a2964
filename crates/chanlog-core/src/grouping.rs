//! Channel partitioning of a mixed working set
//!
//! Splits a flat message list into per-channel groups. Group order follows
//! the first occurrence of each channel in the input, and messages keep
//! their relative order inside each group.

use std::collections::HashMap;

use crate::entities::MessageRecord;
use crate::value_objects::ChannelId;

/// Partition messages by channel, preserving first-occurrence channel order
pub fn group_by_channel(messages: Vec<MessageRecord>) -> Vec<(ChannelId, Vec<MessageRecord>)> {
    let mut index: HashMap<ChannelId, usize> = HashMap::new();
    let mut groups: Vec<(ChannelId, Vec<MessageRecord>)> = Vec::new();

    for message in messages {
        match index.get(&message.channel_id) {
            Some(&i) => groups[i].1.push(message),
            None => {
                index.insert(message.channel_id, groups.len());
                groups.push((message.channel_id, vec![message]));
            }
        }
    }

    groups
}
