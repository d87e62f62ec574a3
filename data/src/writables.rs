use crate::model::node_status::NodeStatus;
use log::debug;
use protocol::framework::error::ProtocolResult;
use protocol::registry::{WritableRegistry, WRITABLE_REGISTRY};
use std::sync::Once;

static GLOBAL_REGISTRATION: Once = Once::new();

/// Registers every tagged record of this crate with `registry`.
pub fn register_writables(registry: &WritableRegistry) -> ProtocolResult<()> {
    registry.register::<NodeStatus>()
}

/// Registers this crate's records with the process-wide registry.
/// Call once at startup, before the first polymorphic read; repeated calls are no-ops.
pub fn register_global_writables() {
    GLOBAL_REGISTRATION.call_once(|| {
        // A tag registered by hand beforehand is left as is.
        if let Err(err) = register_writables(&WRITABLE_REGISTRY) {
            debug!("Skipping global registration: {err}");
        }
    });
}
