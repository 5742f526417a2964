//! Reaction-delta detection over snapshot history
//!
//! For each message the detector compares the globally-latest snapshot (the
//! current count, regardless of when it was taken) against the earliest
//! snapshot inside the lookback window (the baseline). The asymmetry is
//! deliberate: "current" is always the newest known count, while "baseline"
//! must fall inside the window. A message with no snapshot inside the window
//! produces no change entry.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::entities::ReactionSnapshot;
use crate::value_objects::MessageId;

/// A detected reaction-count movement for one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionChange {
    pub message_id: MessageId,
    /// Earliest count inside the lookback window
    pub baseline_count: i64,
    /// Latest known count across all history
    pub current_count: i64,
    /// `current_count - baseline_count`; may be negative
    pub delta: i64,
}

/// Detect reaction-count changes within a lookback window ending at `now`
///
/// Only messages whose count actually moved (delta != 0) are reported.
/// Results are ordered by delta descending, message id ascending, so output
/// is deterministic regardless of map iteration order.
pub fn detect_changes(
    history: &HashMap<MessageId, Vec<ReactionSnapshot>>,
    window_hours: u32,
    now: DateTime<Utc>,
) -> Vec<ReactionChange> {
    let window_start = now - Duration::hours(i64::from(window_hours));

    let mut changes: Vec<ReactionChange> = history
        .iter()
        .filter_map(|(&message_id, snapshots)| {
            let current = snapshots.iter().max_by_key(|s| s.checked_at)?;
            let baseline = snapshots
                .iter()
                .filter(|s| s.checked_at >= window_start)
                .min_by_key(|s| s.checked_at)?;

            let delta = current.reactions_count - baseline.reactions_count;
            if delta == 0 {
                return None;
            }
            Some(ReactionChange {
                message_id,
                baseline_count: baseline.reactions_count,
                current_count: current.reactions_count,
                delta,
            })
        })
        .collect();

    changes.sort_by(|a, b| b.delta.cmp(&a.delta).then(a.message_id.cmp(&b.message_id)));
    changes
}
