use std::fmt;

use crate::api::{MdfMetaData, checked};
use crate::error::MdfError;
use crate::exports::MdfExports;
use crate::handle::FileHistoryHandle;
use crate::protocol::read_string;

/// One entry of the file change log (FH block): which tool touched the file and when.
pub struct MdfFileHistory<'a, E: MdfExports + ?Sized> {
    exports: &'a E,
    handle: FileHistoryHandle,
}

impl<'a, E: MdfExports + ?Sized> MdfFileHistory<'a, E> {
    pub fn new(exports: &'a E, handle: FileHistoryHandle) -> Result<Self, MdfError> {
        Ok(MdfFileHistory { exports, handle: checked(handle)? })
    }

    pub fn handle(&self) -> FileHistoryHandle {
        self.handle
    }

    fn text<F>(&self, get: F) -> String
    where
        F: Fn(&E, FileHistoryHandle, Option<&mut [u8]>) -> usize,
    {
        read_string(self.exports.read_policy(), |out| get(self.exports, self.handle, out))
    }

    pub fn index(&self) -> i64 {
        self.exports.file_history_get_index(self.handle)
    }

    /// Time of the change in nanoseconds since the Unix epoch.
    pub fn time(&self) -> u64 {
        self.exports.file_history_get_time(self.handle)
    }

    pub fn set_time(&self, time: u64) {
        self.exports.file_history_set_time(self.handle, time);
    }

    pub fn description(&self) -> String {
        self.text(E::file_history_get_description)
    }

    pub fn set_description(&self, description: &str) {
        self.exports.file_history_set_description(self.handle, description);
    }

    pub fn tool_name(&self) -> String {
        self.text(E::file_history_get_tool_name)
    }

    pub fn set_tool_name(&self, name: &str) {
        self.exports.file_history_set_tool_name(self.handle, name);
    }

    pub fn tool_vendor(&self) -> String {
        self.text(E::file_history_get_tool_vendor)
    }

    pub fn set_tool_vendor(&self, vendor: &str) {
        self.exports.file_history_set_tool_vendor(self.handle, vendor);
    }

    pub fn tool_version(&self) -> String {
        self.text(E::file_history_get_tool_version)
    }

    pub fn set_tool_version(&self, version: &str) {
        self.exports.file_history_set_tool_version(self.handle, version);
    }

    pub fn user_name(&self) -> String {
        self.text(E::file_history_get_user_name)
    }

    pub fn set_user_name(&self, user: &str) {
        self.exports.file_history_set_user_name(self.handle, user);
    }

    pub fn metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.file_history_get_metadata(self.handle))
    }

    pub fn create_metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.file_history_create_metadata(self.handle))
    }
}

impl<E: MdfExports + ?Sized> Clone for MdfFileHistory<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: MdfExports + ?Sized> Copy for MdfFileHistory<'_, E> {}

impl<E: MdfExports + ?Sized> fmt::Debug for MdfFileHistory<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdfFileHistory").field("handle", &self.handle).finish()
    }
}
