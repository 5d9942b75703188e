//! Opaque references to records owned by the collaborator.
//!
//! A [`Handle`] never owns the record it names. It is a plain number plus a
//! zero-sized marker for the record kind, so a header handle cannot be handed
//! to an event accessor by mistake. The raw value `0` is the null handle.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker trait implemented by the record-kind types in [`kind`].
pub trait RecordKind {
    /// Human readable kind name, used in error messages and logs.
    const NAME: &'static str;
}

/// Zero-sized record-kind markers.
pub mod kind {
    use super::RecordKind;

    /// Measurement header (HD block).
    pub enum Header {}
    /// Embedded or referenced file attachment (AT block).
    pub enum Attachment {}
    /// File history entry (FH block).
    pub enum FileHistory {}
    /// Event (EV block).
    pub enum Event {}
    /// Data group (DG block).
    pub enum DataGroup {}
    /// XML metadata attached to another record (MD block).
    pub enum MetaData {}

    impl RecordKind for Header {
        const NAME: &'static str = "header";
    }
    impl RecordKind for Attachment {
        const NAME: &'static str = "attachment";
    }
    impl RecordKind for FileHistory {
        const NAME: &'static str = "file history";
    }
    impl RecordKind for Event {
        const NAME: &'static str = "event";
    }
    impl RecordKind for DataGroup {
        const NAME: &'static str = "data group";
    }
    impl RecordKind for MetaData {
        const NAME: &'static str = "metadata";
    }
}

/// Non-owning, possibly null reference to a record of kind `K`.
pub struct Handle<K> {
    raw: u64,
    _kind: PhantomData<fn() -> K>,
}

pub type HeaderHandle = Handle<kind::Header>;
pub type AttachmentHandle = Handle<kind::Attachment>;
pub type FileHistoryHandle = Handle<kind::FileHistory>;
pub type EventHandle = Handle<kind::Event>;
pub type DataGroupHandle = Handle<kind::DataGroup>;
pub type MetaDataHandle = Handle<kind::MetaData>;

impl<K> Handle<K> {
    /// The null handle.
    pub const fn null() -> Self {
        Handle { raw: 0, _kind: PhantomData }
    }

    /// Wrap a raw value handed out by a collaborator.
    pub const fn from_raw(raw: u64) -> Self {
        Handle { raw, _kind: PhantomData }
    }

    pub const fn raw(self) -> u64 {
        self.raw
    }

    pub const fn is_null(self) -> bool {
        self.raw == 0
    }
}

impl<K> Clone for Handle<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Handle<K> {}

impl<K> PartialEq for Handle<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K> Eq for Handle<K> {}

impl<K> Hash for Handle<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K> Default for Handle<K> {
    fn default() -> Self {
        Self::null()
    }
}

impl<K: RecordKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Handle<{}>(null)", K::NAME)
        } else {
            write!(f, "Handle<{}>({:#x})", K::NAME, self.raw)
        }
    }
}
