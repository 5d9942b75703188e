//! The flat record boundary.
//!
//! Each record kind exposes its capabilities as one trait of free-standing
//! "export functions" keyed by a [`Handle`](crate::handle::Handle). Every
//! function has one of three shapes:
//!
//! * `get(handle) -> value` and `set(handle, value)` for scalars,
//! * `get(handle, out) -> len` for variable-length strings and arrays, where
//!   `out == None` queries the length and `Some(buf)` fills at most
//!   `buf.len()` elements while still returning the full current length,
//! * `create(handle) -> child` which registers a new child record and returns
//!   its handle (null if the collaborator refused).
//!
//! The wrappers in [`api`](crate::api) are generic over [`MdfExports`], so any
//! collaborator that implements these traits can sit behind them.

use crate::handle::{
    AttachmentHandle, DataGroupHandle, EventHandle, FileHistoryHandle, HeaderHandle,
    MetaDataHandle,
};
use crate::protocol::ReadPolicy;
use crate::types::{ETag, EventCause, EventType, RangeType, SyncType};

pub trait HeaderExports {
    fn header_get_index(&self, header: HeaderHandle) -> i64;
    fn header_get_description(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize;
    fn header_set_description(&self, header: HeaderHandle, description: &str);
    fn header_get_author(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize;
    fn header_set_author(&self, header: HeaderHandle, author: &str);
    fn header_get_department(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize;
    fn header_set_department(&self, header: HeaderHandle, department: &str);
    fn header_get_project(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize;
    fn header_set_project(&self, header: HeaderHandle, project: &str);
    fn header_get_subject(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize;
    fn header_set_subject(&self, header: HeaderHandle, subject: &str);
    fn header_get_measurement_id(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize;
    fn header_set_measurement_id(&self, header: HeaderHandle, uuid: &str);
    fn header_get_recorder_id(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize;
    fn header_set_recorder_id(&self, header: HeaderHandle, uuid: &str);
    fn header_get_recorder_index(&self, header: HeaderHandle) -> i64;
    fn header_set_recorder_index(&self, header: HeaderHandle, index: i64);
    /// Absolute start time in nanoseconds since the Unix epoch.
    fn header_get_start_time(&self, header: HeaderHandle) -> u64;
    fn header_set_start_time(&self, header: HeaderHandle, time: u64);
    fn header_is_start_angle_used(&self, header: HeaderHandle) -> bool;
    fn header_get_start_angle(&self, header: HeaderHandle) -> f64;
    /// Setting the angle marks it used.
    fn header_set_start_angle(&self, header: HeaderHandle, angle: f64);
    /// Marks the start angle unused.
    fn header_clear_start_angle(&self, header: HeaderHandle);
    fn header_is_start_distance_used(&self, header: HeaderHandle) -> bool;
    fn header_get_start_distance(&self, header: HeaderHandle) -> f64;
    fn header_set_start_distance(&self, header: HeaderHandle, distance: f64);
    fn header_clear_start_distance(&self, header: HeaderHandle);
    fn header_get_metadata(&self, header: HeaderHandle) -> MetaDataHandle;
    fn header_create_metadata(&self, header: HeaderHandle) -> MetaDataHandle;
    fn header_get_attachments(
        &self,
        header: HeaderHandle,
        out: Option<&mut [AttachmentHandle]>,
    ) -> usize;
    fn header_get_file_histories(
        &self,
        header: HeaderHandle,
        out: Option<&mut [FileHistoryHandle]>,
    ) -> usize;
    fn header_get_events(&self, header: HeaderHandle, out: Option<&mut [EventHandle]>) -> usize;
    fn header_get_data_groups(
        &self,
        header: HeaderHandle,
        out: Option<&mut [DataGroupHandle]>,
    ) -> usize;
    fn header_create_attachment(&self, header: HeaderHandle) -> AttachmentHandle;
    fn header_create_file_history(&self, header: HeaderHandle) -> FileHistoryHandle;
    fn header_create_event(&self, header: HeaderHandle) -> EventHandle;
    fn header_create_data_group(&self, header: HeaderHandle) -> DataGroupHandle;
}

pub trait AttachmentExports {
    fn attachment_get_index(&self, attachment: AttachmentHandle) -> i64;
    fn attachment_get_creator_index(&self, attachment: AttachmentHandle) -> u16;
    fn attachment_set_creator_index(&self, attachment: AttachmentHandle, index: u16);
    fn attachment_get_embedded(&self, attachment: AttachmentHandle) -> bool;
    fn attachment_set_embedded(&self, attachment: AttachmentHandle, embedded: bool);
    fn attachment_get_compressed(&self, attachment: AttachmentHandle) -> bool;
    fn attachment_set_compressed(&self, attachment: AttachmentHandle, compressed: bool);
    fn attachment_get_file_name(&self, attachment: AttachmentHandle, out: Option<&mut [u8]>)
    -> usize;
    fn attachment_set_file_name(&self, attachment: AttachmentHandle, name: &str);
    fn attachment_get_file_type(&self, attachment: AttachmentHandle, out: Option<&mut [u8]>)
    -> usize;
    fn attachment_set_file_type(&self, attachment: AttachmentHandle, file_type: &str);
    fn attachment_get_metadata(&self, attachment: AttachmentHandle) -> MetaDataHandle;
    fn attachment_create_metadata(&self, attachment: AttachmentHandle) -> MetaDataHandle;
}

pub trait FileHistoryExports {
    fn file_history_get_index(&self, history: FileHistoryHandle) -> i64;
    /// Time of the change in nanoseconds since the Unix epoch.
    fn file_history_get_time(&self, history: FileHistoryHandle) -> u64;
    fn file_history_set_time(&self, history: FileHistoryHandle, time: u64);
    fn file_history_get_description(&self, history: FileHistoryHandle, out: Option<&mut [u8]>)
    -> usize;
    fn file_history_set_description(&self, history: FileHistoryHandle, description: &str);
    fn file_history_get_tool_name(&self, history: FileHistoryHandle, out: Option<&mut [u8]>)
    -> usize;
    fn file_history_set_tool_name(&self, history: FileHistoryHandle, name: &str);
    fn file_history_get_tool_vendor(&self, history: FileHistoryHandle, out: Option<&mut [u8]>)
    -> usize;
    fn file_history_set_tool_vendor(&self, history: FileHistoryHandle, vendor: &str);
    fn file_history_get_tool_version(
        &self,
        history: FileHistoryHandle,
        out: Option<&mut [u8]>,
    ) -> usize;
    fn file_history_set_tool_version(&self, history: FileHistoryHandle, version: &str);
    fn file_history_get_user_name(&self, history: FileHistoryHandle, out: Option<&mut [u8]>)
    -> usize;
    fn file_history_set_user_name(&self, history: FileHistoryHandle, user: &str);
    fn file_history_get_metadata(&self, history: FileHistoryHandle) -> MetaDataHandle;
    fn file_history_create_metadata(&self, history: FileHistoryHandle) -> MetaDataHandle;
}

pub trait EventExports {
    fn event_get_index(&self, event: EventHandle) -> i64;
    fn event_get_name(&self, event: EventHandle, out: Option<&mut [u8]>) -> usize;
    fn event_set_name(&self, event: EventHandle, name: &str);
    fn event_get_description(&self, event: EventHandle, out: Option<&mut [u8]>) -> usize;
    fn event_set_description(&self, event: EventHandle, description: &str);
    fn event_get_group_name(&self, event: EventHandle, out: Option<&mut [u8]>) -> usize;
    fn event_set_group_name(&self, event: EventHandle, group: &str);
    fn event_get_type(&self, event: EventHandle) -> EventType;
    fn event_set_type(&self, event: EventHandle, event_type: EventType);
    fn event_get_sync_type(&self, event: EventHandle) -> SyncType;
    fn event_set_sync_type(&self, event: EventHandle, sync_type: SyncType);
    fn event_get_range_type(&self, event: EventHandle) -> RangeType;
    fn event_set_range_type(&self, event: EventHandle, range_type: RangeType);
    fn event_get_cause(&self, event: EventHandle) -> EventCause;
    fn event_set_cause(&self, event: EventHandle, cause: EventCause);
    fn event_get_creator_index(&self, event: EventHandle) -> u16;
    fn event_set_creator_index(&self, event: EventHandle, index: u16);
    fn event_get_sync_value(&self, event: EventHandle) -> i64;
    fn event_set_sync_value(&self, event: EventHandle, value: i64);
    fn event_get_sync_factor(&self, event: EventHandle) -> f64;
    fn event_set_sync_factor(&self, event: EventHandle, factor: f64);
    fn event_get_pre_trigger(&self, event: EventHandle) -> f64;
    fn event_set_pre_trigger(&self, event: EventHandle, time: f64);
    fn event_get_post_trigger(&self, event: EventHandle) -> f64;
    fn event_set_post_trigger(&self, event: EventHandle, time: f64);
    fn event_get_metadata(&self, event: EventHandle) -> MetaDataHandle;
    fn event_create_metadata(&self, event: EventHandle) -> MetaDataHandle;
}

pub trait DataGroupExports {
    fn data_group_get_index(&self, group: DataGroupHandle) -> i64;
    fn data_group_get_description(&self, group: DataGroupHandle, out: Option<&mut [u8]>) -> usize;
    fn data_group_set_description(&self, group: DataGroupHandle, description: &str);
    fn data_group_get_record_id_size(&self, group: DataGroupHandle) -> u8;
    fn data_group_set_record_id_size(&self, group: DataGroupHandle, size: u8);
    fn data_group_get_metadata(&self, group: DataGroupHandle) -> MetaDataHandle;
    fn data_group_create_metadata(&self, group: DataGroupHandle) -> MetaDataHandle;
}

pub trait MetaDataExports {
    fn metadata_get_property_as_string(
        &self,
        metadata: MetaDataHandle,
        name: &str,
        out: Option<&mut [u8]>,
    ) -> usize;
    fn metadata_set_property_as_string(&self, metadata: MetaDataHandle, name: &str, value: &str);
    /// Returns `0.0` when the property is missing or not numeric.
    fn metadata_get_property_as_float(&self, metadata: MetaDataHandle, name: &str) -> f64;
    fn metadata_set_property_as_float(&self, metadata: MetaDataHandle, name: &str, value: f64);
    /// Store a complete property tag, replacing any tag of the same name.
    fn metadata_set_property(&self, metadata: MetaDataHandle, tag: &ETag);
    fn metadata_get_properties(&self, metadata: MetaDataHandle, out: Option<&mut [ETag]>) -> usize;
    fn metadata_get_common_properties(
        &self,
        metadata: MetaDataHandle,
        out: Option<&mut [ETag]>,
    ) -> usize;
    fn metadata_set_common_properties(&self, metadata: MetaDataHandle, tags: &[ETag]);
    fn metadata_add_common_property(&self, metadata: MetaDataHandle, tag: &ETag);
    fn metadata_get_xml_snippet(&self, metadata: MetaDataHandle, out: Option<&mut [u8]>) -> usize;
    fn metadata_set_xml_snippet(&self, metadata: MetaDataHandle, xml: &str);
}

/// The complete boundary: every record kind's export functions.
pub trait MdfExports:
    HeaderExports
    + AttachmentExports
    + FileHistoryExports
    + EventExports
    + DataGroupExports
    + MetaDataExports
{
    /// Retry policy the wrappers apply to two-phase reads against this collaborator.
    fn read_policy(&self) -> ReadPolicy {
        ReadPolicy::default()
    }
}
