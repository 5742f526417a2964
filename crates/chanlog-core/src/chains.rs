//! Reply-chain reconstruction and chain statistics
//!
//! A chain is the set of messages transitively linked by reply references to a
//! single root, within one working set. Classification rules:
//!
//! - A message is a **root** iff at least one other message in the working set
//!   replies to it, and its own reply reference is absent or does not resolve
//!   within the set. A reply to a missing parent is therefore promoted to root
//!   when anything replies to it.
//! - A message is **standalone** iff nothing replies to it and its own reply
//!   reference is absent or unresolvable.
//! - Everything else is a reply member of exactly one chain.
//!
//! The partition is exact: every message of the working set ends up in exactly
//! one of {root, reply member, standalone}. Reply lists keep arrival order.

use std::collections::{HashMap, HashSet};

use crate::entities::MessageRecord;
use crate::value_objects::MessageId;

/// A root message plus its replies in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub root: MessageRecord,
    pub replies: Vec<MessageRecord>,
}

impl Chain {
    /// Total number of messages in the chain, root included
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.replies.len()
    }

    /// A chain always contains at least its root
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Nesting depth of the chain: the longest reply-to-reply path, root = 1
    ///
    /// Computed over reply links resolvable within this chain only. The walk
    /// is bounded by a visited set so a corrupt cycle cannot loop.
    pub fn depth(&self) -> usize {
        let by_id: HashMap<MessageId, &MessageRecord> = std::iter::once(&self.root)
            .chain(self.replies.iter())
            .map(|m| (m.id, m))
            .collect();

        let mut max_depth = 1;
        for reply in &self.replies {
            let mut depth = 1;
            let mut seen: HashSet<MessageId> = HashSet::new();
            seen.insert(reply.id);

            let mut current = reply;
            while let Some(parent) = current.reply_to_id.and_then(|id| by_id.get(&id)) {
                depth += 1;
                if !seen.insert(parent.id) {
                    break;
                }
                current = parent;
            }
            max_depth = max_depth.max(depth);
        }
        max_depth
    }
}

/// Result of chain reconstruction over one working set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainForest {
    pub chains: Vec<Chain>,
    pub standalone: Vec<MessageRecord>,
}

impl ChainForest {
    /// Total number of messages across chains and standalone
    pub fn message_count(&self) -> usize {
        self.chains.iter().map(Chain::len).sum::<usize>() + self.standalone.len()
    }
}

/// Classification target for one message of the working set
#[derive(Debug, Clone, Copy)]
enum Placement {
    Root(usize),
    Reply(usize),
    Standalone,
}

/// Build reply chains from a flat, arrival-ordered working set
///
/// Pure function: no side effects, empty input yields an empty forest.
/// Chains appear in arrival order of their roots; reply lists keep the
/// arrival order of their members (never re-sorted here).
pub fn build_chains(messages: Vec<MessageRecord>) -> ChainForest {
    if messages.is_empty() {
        return ChainForest::default();
    }

    let index_by_id: HashMap<MessageId, usize> = messages
        .iter()
        .enumerate()
        .map(|(i, m)| (m.id, i))
        .collect();

    // Ids that receive at least one reply from within the set
    let replied_to: HashSet<MessageId> = messages.iter().filter_map(|m| m.reply_to_id).collect();

    let is_root: Vec<bool> = messages
        .iter()
        .map(|m| {
            let parent_resolves = m
                .reply_to_id
                .is_some_and(|id| index_by_id.contains_key(&id));
            replied_to.contains(&m.id) && !parent_resolves
        })
        .collect();

    // Register chains in arrival order of their roots
    let mut chain_of_root: HashMap<usize, usize> = HashMap::new();
    for (i, _) in messages.iter().enumerate() {
        if is_root[i] {
            let next = chain_of_root.len();
            chain_of_root.insert(i, next);
        }
    }

    // Classify every message by walking its reply ancestry up to a root.
    // The walk is cycle-guarded: messages on an unresolvable cycle have no
    // root and fall through to standalone.
    let placements: Vec<Placement> = messages
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if is_root[i] {
                return Placement::Root(chain_of_root[&i]);
            }
            match resolve_root(i, &messages, &index_by_id, &is_root) {
                Some(root_idx) => Placement::Reply(chain_of_root[&root_idx]),
                None => Placement::Standalone,
            }
        })
        .collect();

    let mut roots: Vec<Option<MessageRecord>> = (0..chain_of_root.len()).map(|_| None).collect();
    let mut replies: Vec<Vec<MessageRecord>> = (0..chain_of_root.len()).map(|_| Vec::new()).collect();
    let mut standalone = Vec::new();

    for (message, placement) in messages.into_iter().zip(placements) {
        match placement {
            Placement::Root(c) => roots[c] = Some(message),
            Placement::Reply(c) => replies[c].push(message),
            Placement::Standalone => standalone.push(message),
        }
    }

    let chains = roots
        .into_iter()
        .zip(replies)
        .filter_map(|(root, replies)| root.map(|root| Chain { root, replies }))
        .collect();

    ChainForest { chains, standalone }
}

/// Walk reply links upward from `start` until a root is reached
///
/// Returns the arrival index of the root, or `None` when the ancestry ends at
/// a non-root (unresolvable parent with no replies) or loops back on itself.
fn resolve_root(
    start: usize,
    messages: &[MessageRecord],
    index_by_id: &HashMap<MessageId, usize>,
    is_root: &[bool],
) -> Option<usize> {
    let mut seen: HashSet<usize> = HashSet::new();
    let mut current = start;

    loop {
        if is_root[current] {
            return Some(current);
        }
        if !seen.insert(current) {
            return None;
        }
        match messages[current]
            .reply_to_id
            .and_then(|id| index_by_id.get(&id))
        {
            Some(&parent) => current = parent,
            None => return None,
        }
    }
}

/// Aggregate statistics over a set of chains
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChainStats {
    pub chain_count: usize,
    pub max_depth: usize,
    pub average_depth: f64,
    pub total_messages_in_chains: usize,
}

impl ChainStats {
    /// Compute statistics; empty input produces all-zero stats
    pub fn from_chains(chains: &[Chain]) -> Self {
        if chains.is_empty() {
            return Self::default();
        }

        let depths: Vec<usize> = chains.iter().map(Chain::depth).collect();
        let max_depth = depths.iter().copied().max().unwrap_or(0);
        let average_depth = depths.iter().sum::<usize>() as f64 / depths.len() as f64;
        let total_messages_in_chains = chains.iter().map(Chain::len).sum();

        Self {
            chain_count: chains.len(),
            max_depth,
            average_depth,
            total_messages_in_chains,
        }
    }
}
