//! Dialog entity <-> model mapper

use chanlog_core::entities::{DialogDescriptor, DialogKind};
use chanlog_core::value_objects::ChannelId;

use crate::models::DialogModel;

/// Convert DialogModel to DialogDescriptor entity
impl From<DialogModel> for DialogDescriptor {
    fn from(model: DialogModel) -> Self {
        DialogDescriptor {
            id: ChannelId::new(model.id),
            name: model.name,
            kind: DialogKind::from(model.kind.as_str()),
            is_selected: model.is_selected,
        }
    }
}
