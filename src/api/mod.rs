//! Typed accessors over the record boundary.
//!
//! Each wrapper borrows a collaborator and holds exactly one handle. It keeps
//! no other state: every getter re-queries the collaborator, so two wrappers
//! around the same handle always observe each other's writes.

pub mod header;
pub mod attachment;
pub mod file_history;
pub mod event;
pub mod data_group;
pub mod metadata;

pub use attachment::MdfAttachment;
pub use data_group::MdfDataGroup;
pub use event::MdfEvent;
pub use file_history::MdfFileHistory;
pub use header::MdfHeader;
pub use metadata::MdfMetaData;

use crate::error::MdfError;
use crate::handle::{Handle, RecordKind};

/// Reject null handles before a wrapper is built around them.
pub(crate) fn checked<K: RecordKind>(handle: Handle<K>) -> Result<Handle<K>, MdfError> {
    if handle.is_null() {
        tracing::debug!(kind = K::NAME, "refusing to wrap null handle");
        return Err(MdfError::InvalidHandle { kind: K::NAME });
    }
    Ok(handle)
}
