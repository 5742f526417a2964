//! Data transfer objects for the application layer

mod requests;
mod responses;

pub use requests::{ForwardRequest, MessagesQuery, ReactionChangesQuery};
pub use responses::{
    ArchiveStatsBody, ChainBody, ChainStatsBody, ChannelGroupBody, DialogBody,
    FlatChannelGroupBody, ForwardReceipt, HealthResponse, MessageBody, OutputDocument,
    ReactionChangeBody, ReactionDelta, ReadinessResponse, SenderBody, StatsResponse,
};
