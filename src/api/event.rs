use std::fmt;

use crate::api::{MdfMetaData, checked};
use crate::error::MdfError;
use crate::exports::MdfExports;
use crate::handle::EventHandle;
use crate::protocol::read_string;
use crate::types::{EventCause, EventType, RangeType, SyncType};

/// A marker, trigger or recording interval (EV block).
///
/// The synchronization point is `sync_value * sync_factor` in the domain
/// given by [`SyncType`].
pub struct MdfEvent<'a, E: MdfExports + ?Sized> {
    exports: &'a E,
    handle: EventHandle,
}

impl<'a, E: MdfExports + ?Sized> MdfEvent<'a, E> {
    pub fn new(exports: &'a E, handle: EventHandle) -> Result<Self, MdfError> {
        Ok(MdfEvent { exports, handle: checked(handle)? })
    }

    pub fn handle(&self) -> EventHandle {
        self.handle
    }

    fn text<F>(&self, get: F) -> String
    where
        F: Fn(&E, EventHandle, Option<&mut [u8]>) -> usize,
    {
        read_string(self.exports.read_policy(), |out| get(self.exports, self.handle, out))
    }

    pub fn index(&self) -> i64 {
        self.exports.event_get_index(self.handle)
    }

    pub fn name(&self) -> String {
        self.text(E::event_get_name)
    }

    pub fn set_name(&self, name: &str) {
        self.exports.event_set_name(self.handle, name);
    }

    pub fn description(&self) -> String {
        self.text(E::event_get_description)
    }

    pub fn set_description(&self, description: &str) {
        self.exports.event_set_description(self.handle, description);
    }

    pub fn group_name(&self) -> String {
        self.text(E::event_get_group_name)
    }

    pub fn set_group_name(&self, group: &str) {
        self.exports.event_set_group_name(self.handle, group);
    }

    pub fn event_type(&self) -> EventType {
        self.exports.event_get_type(self.handle)
    }

    pub fn set_event_type(&self, event_type: EventType) {
        self.exports.event_set_type(self.handle, event_type);
    }

    pub fn sync_type(&self) -> SyncType {
        self.exports.event_get_sync_type(self.handle)
    }

    pub fn set_sync_type(&self, sync_type: SyncType) {
        self.exports.event_set_sync_type(self.handle, sync_type);
    }

    pub fn range_type(&self) -> RangeType {
        self.exports.event_get_range_type(self.handle)
    }

    pub fn set_range_type(&self, range_type: RangeType) {
        self.exports.event_set_range_type(self.handle, range_type);
    }

    pub fn cause(&self) -> EventCause {
        self.exports.event_get_cause(self.handle)
    }

    pub fn set_cause(&self, cause: EventCause) {
        self.exports.event_set_cause(self.handle, cause);
    }

    pub fn creator_index(&self) -> u16 {
        self.exports.event_get_creator_index(self.handle)
    }

    pub fn set_creator_index(&self, index: u16) {
        self.exports.event_set_creator_index(self.handle, index);
    }

    pub fn sync_value(&self) -> i64 {
        self.exports.event_get_sync_value(self.handle)
    }

    pub fn set_sync_value(&self, value: i64) {
        self.exports.event_set_sync_value(self.handle, value);
    }

    pub fn sync_factor(&self) -> f64 {
        self.exports.event_get_sync_factor(self.handle)
    }

    pub fn set_sync_factor(&self, factor: f64) {
        self.exports.event_set_sync_factor(self.handle, factor);
    }

    /// Synchronization point in the unit of [`Self::sync_type`].
    pub fn sync_point(&self) -> f64 {
        self.sync_value() as f64 * self.sync_factor()
    }

    /// Time span before the event in seconds.
    pub fn pre_trigger(&self) -> f64 {
        self.exports.event_get_pre_trigger(self.handle)
    }

    pub fn set_pre_trigger(&self, time: f64) {
        self.exports.event_set_pre_trigger(self.handle, time);
    }

    /// Time span after the event in seconds.
    pub fn post_trigger(&self) -> f64 {
        self.exports.event_get_post_trigger(self.handle)
    }

    pub fn set_post_trigger(&self, time: f64) {
        self.exports.event_set_post_trigger(self.handle, time);
    }

    pub fn metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.event_get_metadata(self.handle))
    }

    pub fn create_metadata(&self) -> Result<MdfMetaData<'a, E>, MdfError> {
        MdfMetaData::new(self.exports, self.exports.event_create_metadata(self.handle))
    }
}

impl<E: MdfExports + ?Sized> Clone for MdfEvent<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: MdfExports + ?Sized> Copy for MdfEvent<'_, E> {}

impl<E: MdfExports + ?Sized> fmt::Debug for MdfEvent<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdfEvent").field("handle", &self.handle).finish()
    }
}
