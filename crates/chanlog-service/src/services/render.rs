//! Output format selection and plain-text rendering

use std::fmt::Write as _;
use std::str::FromStr;

use chanlog_core::entities::MessageRecord;
use chanlog_core::value_objects::ChannelId;
use chanlog_core::ChainForest;

use super::error::ServiceError;

/// Requested output shape for assembled documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text with chains rendered as indented threads
    Text,
    /// Structured document with standalone messages and chains
    #[default]
    Json,
    /// Flat message list with no chain grouping
    JsonNoChains,
    /// Reaction-change report
    JsonReactions,
}

impl OutputFormat {
    /// Canonical configuration string for this format
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::JsonNoChains => "json-no-chains",
            Self::JsonReactions => "json-reactions",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-no-chains" => Ok(Self::JsonNoChains),
            "json-reactions" => Ok(Self::JsonReactions),
            other => Err(ServiceError::validation(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

/// Maximum content length on compact chain-reply lines
const REPLY_PREVIEW_LEN: usize = 100;

const BANNER: &str = "============================================================";

/// Render per-channel forests as plain text
///
/// Standalone messages and chains get their own banner sections, followed by
/// a totals summary. A channel header appears only when the document spans
/// more than one channel, mirroring the structured output contract.
pub fn render_text(groups: &[(ChannelId, ChainForest)]) -> String {
    let mut out = String::new();
    let multi = groups.len() > 1;

    let mut standalone_total = 0usize;
    let mut chain_total = 0usize;
    let mut chained_total = 0usize;

    for (channel_id, forest) in groups {
        if multi {
            let _ = writeln!(out, "### Channel {channel_id} ###");
        }

        if !forest.standalone.is_empty() {
            let _ = writeln!(out, "{BANNER}");
            let _ = writeln!(out, "STANDALONE MESSAGES");
            let _ = writeln!(out, "{BANNER}");
            for message in &forest.standalone {
                let _ = writeln!(out, "{}", message_line(message, None));
            }
        }

        if !forest.chains.is_empty() {
            let _ = writeln!(out, "{BANNER}");
            let _ = writeln!(out, "MESSAGE CHAINS ({})", forest.chains.len());
            let _ = writeln!(out, "{BANNER}");
            for (i, chain) in forest.chains.iter().enumerate() {
                let size = 1 + chain.replies.len();
                let _ = writeln!(out, "--- Chain #{} ({size} messages) ---", i + 1);
                let _ = writeln!(out, "ROOT: {}", message_line(&chain.root, None));
                for reply in &chain.replies {
                    let _ = writeln!(
                        out,
                        "  \u{2514}\u{2500} RE: {}",
                        message_line(reply, Some(REPLY_PREVIEW_LEN))
                    );
                }
                chained_total += size;
            }
        }

        standalone_total += forest.standalone.len();
        chain_total += forest.chains.len();

        if multi {
            out.push('\n');
        }
    }

    let total = standalone_total + chained_total;
    if total == 0 {
        return "No messages".to_string();
    }

    let _ = writeln!(out, "\nTotal: {total} messages");
    let _ = writeln!(out, "  - standalone: {standalone_total}");
    let _ = writeln!(out, "  - in chains: {chained_total} ({chain_total} chains)");
    out
}

fn message_line(message: &MessageRecord, preview: Option<usize>) -> String {
    let sender = message
        .sender
        .as_ref()
        .map_or_else(|| "unknown".to_string(), chanlog_core::Sender::display_name);

    let content = match preview {
        Some(max) if message.content.len() > max => format!("{}...", message.preview(max)),
        _ => message.content.clone(),
    };

    let mut line = format!(
        "[{}] {}: {}",
        message.date.format("%Y-%m-%d %H:%M"),
        sender,
        content
    );
    if message.reactions_count > 0 {
        let _ = write!(line, " ({} reactions)", message.reactions_count);
    }
    line
}
