use std::fmt;

use crate::api::{MdfMetaData, checked};
use crate::error::MdfError;
use crate::exports::MdfExports;
use crate::handle::AttachmentHandle;
use crate::protocol::read_string;

/// A file attached to the measurement (AT block), embedded or referenced.
pub struct MdfAttachment<'a, E: MdfExports + ?Sized> {
    exports: &'a E,
    handle: AttachmentHandle,
}

impl<'a, E: MdfExports + ?Sized> MdfAttachment<'a, E> {
    pub fn new(exports: &'a E, handle: AttachmentHandle) -> Result<Self, MdfError> {
        Ok(MdfAttachment { exports, handle: checked(handle)? })
    }

    pub fn handle(&self) -> AttachmentHandle {
        self.handle
    }

    pub fn index(&self) -> i64 {
        self.exports.attachment_get_index(self.handle)
    }

    /// Index of the file history entry of the tool that created the attachment.
    pub fn creator_index(&self) -> u16 {
        self.exports.attachment_get_creator_index(self.handle)
    }

    pub fn set_creator_index(&self, index: u16) {
        self.exports.attachment_set_creator_index(self.handle, index);
    }

    pub fn is_embedded(&self) -> bool {
        self.exports.attachment_get_embedded(self.handle)
    }

    pub fn set_embedded(&self, embedded: bool) {
        self.exports.attachment_set_embedded(self.handle, embedded);
    }

    pub fn is_compressed(&self) -> bool {
        self.exports.attachment_get_compressed(self.handle)
    }

    pub fn set_compressed(&self, compressed: bool) {
        self.exports.attachment_set_compressed(self.handle, compressed);
    }

    pub fn file_name(&self) -> String {
        read_string(self.exports.read_policy(), |out| {
            self.exports.attachment_get_file_name(self.handle, out)
        })
    }

    pub fn set_file_name(&self, name: &str) {
        self.exports.attachment_set_file_name(self.handle, name);
    }

    /// MIME type of the attached file.
    pub fn file_type(&self) -> String {
        read_string(self.exports.read_policy(), |out| {
            self.exports.attachment_get_file_type(self.handle, out)
        })
    }

    pub fn set_file_type(&self, file_type: &str) {
        self.exports.attachment_set_file_type(self.handle, file_type);
    }

    pub fn metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.attachment_get_metadata(self.handle))
    }

    pub fn create_metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.attachment_create_metadata(self.handle))
    }
}

impl<E: MdfExports + ?Sized> Clone for MdfAttachment<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: MdfExports + ?Sized> Copy for MdfAttachment<'_, E> {}

impl<E: MdfExports + ?Sized> fmt::Debug for MdfAttachment<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdfAttachment").field("handle", &self.handle).finish()
    }
}
