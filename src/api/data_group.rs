use std::fmt;

use crate::api::{MdfMetaData, checked};
use crate::error::MdfError;
use crate::exports::MdfExports;
use crate::handle::DataGroupHandle;
use crate::protocol::read_string;

/// A data group (DG block). Record layout and sample decoding stay with the collaborator.
pub struct MdfDataGroup<'a, E: MdfExports + ?Sized> {
    exports: &'a E,
    handle: DataGroupHandle,
}

impl<'a, E: MdfExports + ?Sized> MdfDataGroup<'a, E> {
    pub fn new(exports: &'a E, handle: DataGroupHandle) -> Result<Self, MdfError> {
        Ok(MdfDataGroup { exports, handle: checked(handle)? })
    }

    pub fn handle(&self) -> DataGroupHandle {
        self.handle
    }

    pub fn index(&self) -> i64 {
        self.exports.data_group_get_index(self.handle)
    }

    pub fn description(&self) -> String {
        read_string(self.exports.read_policy(), |out| {
            self.exports.data_group_get_description(self.handle, out)
        })
    }

    pub fn set_description(&self, description: &str) {
        self.exports.data_group_set_description(self.handle, description);
    }

    /// Size in bytes of the record id prefixing every record (0, 1, 2, 4 or 8).
    pub fn record_id_size(&self) -> u8 {
        self.exports.data_group_get_record_id_size(self.handle)
    }

    pub fn set_record_id_size(&self, size: u8) {
        self.exports.data_group_set_record_id_size(self.handle, size);
    }

    pub fn metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.data_group_get_metadata(self.handle))
    }

    pub fn create_metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.data_group_create_metadata(self.handle))
    }
}

impl<E: MdfExports + ?Sized> Clone for MdfDataGroup<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: MdfExports + ?Sized> Copy for MdfDataGroup<'_, E> {}

impl<E: MdfExports + ?Sized> fmt::Debug for MdfDataGroup<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdfDataGroup").field("handle", &self.handle).finish()
    }
}
