use std::fmt;

use crate::api::{MdfAttachment, MdfDataGroup, MdfEvent, MdfFileHistory, MdfMetaData, checked};
use crate::error::MdfError;
use crate::exports::MdfExports;
use crate::handle::HeaderHandle;
use crate::protocol::{read_array, read_string};

/// High level view of a measurement header (HD block).
///
/// The header is the root of a measurement: it carries the descriptive
/// fields (author, project, ...), the absolute start time, and the lists of
/// attachments, file histories, events and data groups. The wrapper owns
/// none of it; every call is forwarded to the collaborator `E`.
///
/// String and list getters use the two-phase length/fill exchange, which is
/// not atomic with respect to writers working on the same record.
pub struct MdfHeader<'a, E: MdfExports + ?Sized> {
    exports: &'a E,
    handle: HeaderHandle,
}

impl<'a, E: MdfExports + ?Sized> MdfHeader<'a, E> {
    /// Wrap a header handle.
    ///
    /// # Arguments
    /// * `exports` - Collaborator owning the record.
    /// * `handle` - Handle of the header inside `exports`.
    ///
    /// # Returns
    /// A new [`MdfHeader`], or [`MdfError::InvalidHandle`] if `handle` is null.
    pub fn new(exports: &'a E, handle: HeaderHandle) -> Result<Self, MdfError> {
        Ok(MdfHeader { exports, handle: checked(handle)? })
    }

    pub fn handle(&self) -> HeaderHandle {
        self.handle
    }

    fn text<F>(&self, get: F) -> String
    where
        F: Fn(&E, HeaderHandle, Option<&mut [u8]>) -> usize,
    {
        read_string(self.exports.read_policy(), |out| get(self.exports, self.handle, out))
    }

    pub fn index(&self) -> i64 {
        self.exports.header_get_index(self.handle)
    }

    pub fn description(&self) -> String {
        self.text(E::header_get_description)
    }

    pub fn set_description(&self, description: &str) {
        self.exports.header_set_description(self.handle, description);
    }

    pub fn author(&self) -> String {
        self.text(E::header_get_author)
    }

    pub fn set_author(&self, author: &str) {
        self.exports.header_set_author(self.handle, author);
    }

    pub fn department(&self) -> String {
        self.text(E::header_get_department)
    }

    pub fn set_department(&self, department: &str) {
        self.exports.header_set_department(self.handle, department);
    }

    pub fn project(&self) -> String {
        self.text(E::header_get_project)
    }

    pub fn set_project(&self, project: &str) {
        self.exports.header_set_project(self.handle, project);
    }

    pub fn subject(&self) -> String {
        self.text(E::header_get_subject)
    }

    pub fn set_subject(&self, subject: &str) {
        self.exports.header_set_subject(self.handle, subject);
    }

    /// Measurement UUID.
    pub fn measurement_id(&self) -> String {
        self.text(E::header_get_measurement_id)
    }

    pub fn set_measurement_id(&self, uuid: &str) {
        self.exports.header_set_measurement_id(self.handle, uuid);
    }

    /// Recorder UUID.
    pub fn recorder_id(&self) -> String {
        self.text(E::header_get_recorder_id)
    }

    pub fn set_recorder_id(&self, uuid: &str) {
        self.exports.header_set_recorder_id(self.handle, uuid);
    }

    pub fn recorder_index(&self) -> i64 {
        self.exports.header_get_recorder_index(self.handle)
    }

    pub fn set_recorder_index(&self, index: i64) {
        self.exports.header_set_recorder_index(self.handle, index);
    }

    /// Absolute start time in nanoseconds since the Unix epoch.
    pub fn start_time(&self) -> u64 {
        self.exports.header_get_start_time(self.handle)
    }

    pub fn set_start_time(&self, time: u64) {
        self.exports.header_set_start_time(self.handle, time);
    }

    pub fn is_start_angle_used(&self) -> bool {
        self.exports.header_is_start_angle_used(self.handle)
    }

    /// Start angle in radians; only meaningful if [`Self::is_start_angle_used`].
    pub fn start_angle(&self) -> f64 {
        self.exports.header_get_start_angle(self.handle)
    }

    pub fn set_start_angle(&self, angle: f64) {
        self.exports.header_set_start_angle(self.handle, angle);
    }

    pub fn clear_start_angle(&self) {
        self.exports.header_clear_start_angle(self.handle);
    }

    pub fn is_start_distance_used(&self) -> bool {
        self.exports.header_is_start_distance_used(self.handle)
    }

    /// Start distance in meters; only meaningful if [`Self::is_start_distance_used`].
    pub fn start_distance(&self) -> f64 {
        self.exports.header_get_start_distance(self.handle)
    }

    pub fn set_start_distance(&self, distance: f64) {
        self.exports.header_set_start_distance(self.handle, distance);
    }

    pub fn clear_start_distance(&self) {
        self.exports.header_clear_start_distance(self.handle);
    }

    /// Metadata of the header; fails with [`MdfError::InvalidHandle`] if none exists.
    pub fn metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.header_get_metadata(self.handle))
    }

    /// Return the header metadata, creating it first if needed.
    pub fn create_metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.header_create_metadata(self.handle))
    }

    /// Attachments of the measurement, re-queried on every call.
    pub fn attachments(&self) -> Vec<MdfAttachment<'a, E>> {
        read_array(self.exports.read_policy(), |out| {
            self.exports.header_get_attachments(self.handle, out)
        })
        .into_iter()
        .filter_map(|handle| MdfAttachment::new(self.exports, handle).ok())
        .collect()
    }

    pub fn file_histories(&self) -> Vec<MdfFileHistory<'a, E>> {
        read_array(self.exports.read_policy(), |out| {
            self.exports.header_get_file_histories(self.handle, out)
        })
        .into_iter()
        .filter_map(|handle| MdfFileHistory::new(self.exports, handle).ok())
        .collect()
    }

    pub fn events(&self) -> Vec<MdfEvent<'a, E>> {
        read_array(self.exports.read_policy(), |out| {
            self.exports.header_get_events(self.handle, out)
        })
        .into_iter()
        .filter_map(|handle| MdfEvent::new(self.exports, handle).ok())
        .collect()
    }

    pub fn data_groups(&self) -> Vec<MdfDataGroup<'a, E>> {
        read_array(self.exports.read_policy(), |out| {
            self.exports.header_get_data_groups(self.handle, out)
        })
        .into_iter()
        .filter_map(|handle| MdfDataGroup::new(self.exports, handle).ok())
        .collect()
    }

    /// Ask the collaborator to register a new attachment under this header.
    pub fn create_attachment(&self) -> Result<MdfAttachment<'a, E>, MdfError> {
        MdfAttachment::new(self.exports, self.exports.header_create_attachment(self.handle))
    }

    pub fn create_file_history(&self) -> Result<MdfFileHistory<'a, E>, MdfError> {
        MdfFileHistory::new(self.exports, self.exports.header_create_file_history(self.handle))
    }

    pub fn create_event(&self) -> Result<MdfEvent<'a, E>, MdfError> {
        MdfEvent::new(self.exports, self.exports.header_create_event(self.handle))
    }

    pub fn create_data_group(&self) -> Result<MdfDataGroup<'a, E>, MdfError> {
        MdfDataGroup::new(self.exports, self.exports.header_create_data_group(self.handle))
    }
}

impl<E: MdfExports + ?Sized> Clone for MdfHeader<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: MdfExports + ?Sized> Copy for MdfHeader<'_, E> {}

impl<E: MdfExports + ?Sized> fmt::Debug for MdfHeader<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdfHeader").field("handle", &self.handle).finish()
    }
}
