//! In-process collaborator.
//!
//! [`MdfStore`] owns every record and answers the flat export functions of
//! [`exports`](crate::exports). Handles it returns are plain record ids; the
//! store never hands out references into its own memory, so a handle that
//! outlives its record is harmless: reads return defaults and writes are
//! dropped.
//!
//! Records sit behind one [`RwLock`]. Each export function takes the lock
//! exactly once, which makes single calls atomic but leaves the gap between
//! the length query and the fill of a two-phase read open to other writers.

mod records;

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::exports::{
    AttachmentExports, DataGroupExports, EventExports, FileHistoryExports, HeaderExports,
    MdfExports, MetaDataExports,
};
use crate::handle::{
    AttachmentHandle, DataGroupHandle, EventHandle, FileHistoryHandle, Handle, HeaderHandle,
    MetaDataHandle, RecordKind,
};
use crate::protocol::ReadPolicy;
use crate::types::{ETag, EventCause, EventType, RangeType, SyncType};

use records::{
    AttachmentRecord, DataGroupRecord, EventRecord, FileHistoryRecord, HeaderRecord,
    MetaDataRecord, Record, Slot, fill_handles, fill_slice, fill_str,
};

#[derive(Debug, Default)]
struct Records {
    last_id: u64,
    slots: HashMap<u64, Record>,
}

impl Records {
    fn insert<R: Slot>(&mut self, record: R) -> Handle<R::Kind> {
        self.last_id += 1;
        self.slots.insert(self.last_id, record.wrap());
        Handle::from_raw(self.last_id)
    }

    fn get<R: Slot>(&self, handle: Handle<R::Kind>) -> Option<&R> {
        self.slots.get(&handle.raw()).and_then(R::view)
    }

    fn get_mut<R: Slot>(&mut self, handle: Handle<R::Kind>) -> Option<&mut R> {
        self.slots.get_mut(&handle.raw()).and_then(R::view_mut)
    }
}

/// Record storage implementing the full export boundary.
#[derive(Debug, Default)]
pub struct MdfStore {
    records: RwLock<Records>,
    policy: ReadPolicy,
}

impl MdfStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose wrappers use `policy` for two-phase reads.
    pub fn with_policy(policy: ReadPolicy) -> Self {
        MdfStore { records: RwLock::default(), policy }
    }

    /// Register a new, empty measurement header and return its handle.
    pub fn create_header(&self) -> HeaderHandle {
        let handle = self.write_records().insert(HeaderRecord::default());
        tracing::debug!(handle = handle.raw(), "header created");
        handle
    }

    /// Handles of every header in the store, in creation order.
    pub fn headers(&self) -> Vec<HeaderHandle> {
        let records = self.read_records();
        let mut ids: Vec<u64> = records
            .slots
            .iter()
            .filter(|(_, record)| matches!(record, Record::Header(_)))
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(Handle::from_raw).collect()
    }

    /// Total number of records of all kinds.
    pub fn len(&self) -> usize {
        self.read_records().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_records(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_records(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read<R: Slot, T: Default>(&self, handle: Handle<R::Kind>, f: impl FnOnce(&R) -> T) -> T {
        match self.read_records().get::<R>(handle) {
            Some(record) => f(record),
            None => {
                unknown(handle);
                T::default()
            }
        }
    }

    fn write<R: Slot>(&self, handle: Handle<R::Kind>, f: impl FnOnce(&mut R)) {
        match self.write_records().get_mut::<R>(handle) {
            Some(record) => f(record),
            None => unknown(handle),
        }
    }

    fn index<R: Slot>(&self, handle: Handle<R::Kind>) -> i64 {
        self.read(handle, |_: &R| handle.raw() as i64)
    }

    fn create_child<P: Slot, C: Slot>(
        &self,
        parent: Handle<P::Kind>,
        link: impl FnOnce(&mut P) -> &mut Vec<u64>,
    ) -> Handle<C::Kind> {
        let mut records = self.write_records();
        if records.get::<P>(parent).is_none() {
            unknown(parent);
            return Handle::null();
        }

        let child = records.insert(C::default());
        if let Some(record) = records.get_mut::<P>(parent) {
            link(record).push(child.raw());
        }
        tracing::debug!(
            parent = parent.raw(),
            child = child.raw(),
            kind = <C::Kind as RecordKind>::NAME,
            "child record created"
        );
        child
    }

    fn metadata_of<P: Slot>(
        &self,
        parent: Handle<P::Kind>,
        link: impl FnOnce(&P) -> u64,
    ) -> MetaDataHandle {
        Handle::from_raw(self.read(parent, |record: &P| link(record)))
    }

    fn create_metadata<P: Slot>(
        &self,
        parent: Handle<P::Kind>,
        link: impl Fn(&mut P) -> &mut u64,
    ) -> MetaDataHandle {
        let mut records = self.write_records();
        let existing = match records.get_mut::<P>(parent) {
            Some(record) => *link(record),
            None => {
                unknown(parent);
                return Handle::null();
            }
        };

        let existing: MetaDataHandle = Handle::from_raw(existing);
        if !existing.is_null() && records.get::<MetaDataRecord>(existing).is_some() {
            return existing;
        }

        let metadata = records.insert(MetaDataRecord::default());
        if let Some(record) = records.get_mut::<P>(parent) {
            *link(record) = metadata.raw();
        }
        metadata
    }
}

fn unknown<K: RecordKind>(handle: Handle<K>) {
    tracing::debug!(kind = K::NAME, handle = handle.raw(), "unknown handle, call ignored");
}

impl HeaderExports for MdfStore {
    fn header_get_index(&self, header: HeaderHandle) -> i64 {
        self.index::<HeaderRecord>(header)
    }

    fn header_get_description(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize {
        self.read(header, |h: &HeaderRecord| fill_str(&h.description, out))
    }

    fn header_set_description(&self, header: HeaderHandle, description: &str) {
        self.write(header, |h: &mut HeaderRecord| h.description = description.to_string());
    }

    fn header_get_author(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize {
        self.read(header, |h: &HeaderRecord| fill_str(&h.author, out))
    }

    fn header_set_author(&self, header: HeaderHandle, author: &str) {
        self.write(header, |h: &mut HeaderRecord| h.author = author.to_string());
    }

    fn header_get_department(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize {
        self.read(header, |h: &HeaderRecord| fill_str(&h.department, out))
    }

    fn header_set_department(&self, header: HeaderHandle, department: &str) {
        self.write(header, |h: &mut HeaderRecord| h.department = department.to_string());
    }

    fn header_get_project(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize {
        self.read(header, |h: &HeaderRecord| fill_str(&h.project, out))
    }

    fn header_set_project(&self, header: HeaderHandle, project: &str) {
        self.write(header, |h: &mut HeaderRecord| h.project = project.to_string());
    }

    fn header_get_subject(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize {
        self.read(header, |h: &HeaderRecord| fill_str(&h.subject, out))
    }

    fn header_set_subject(&self, header: HeaderHandle, subject: &str) {
        self.write(header, |h: &mut HeaderRecord| h.subject = subject.to_string());
    }

    fn header_get_measurement_id(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize {
        self.read(header, |h: &HeaderRecord| fill_str(&h.measurement_id, out))
    }

    fn header_set_measurement_id(&self, header: HeaderHandle, uuid: &str) {
        self.write(header, |h: &mut HeaderRecord| h.measurement_id = uuid.to_string());
    }

    fn header_get_recorder_id(&self, header: HeaderHandle, out: Option<&mut [u8]>) -> usize {
        self.read(header, |h: &HeaderRecord| fill_str(&h.recorder_id, out))
    }

    fn header_set_recorder_id(&self, header: HeaderHandle, uuid: &str) {
        self.write(header, |h: &mut HeaderRecord| h.recorder_id = uuid.to_string());
    }

    fn header_get_recorder_index(&self, header: HeaderHandle) -> i64 {
        self.read(header, |h: &HeaderRecord| h.recorder_index)
    }

    fn header_set_recorder_index(&self, header: HeaderHandle, index: i64) {
        self.write(header, |h: &mut HeaderRecord| h.recorder_index = index);
    }

    fn header_get_start_time(&self, header: HeaderHandle) -> u64 {
        self.read(header, |h: &HeaderRecord| h.start_time)
    }

    fn header_set_start_time(&self, header: HeaderHandle, time: u64) {
        self.write(header, |h: &mut HeaderRecord| h.start_time = time);
    }

    fn header_is_start_angle_used(&self, header: HeaderHandle) -> bool {
        self.read(header, |h: &HeaderRecord| h.start_angle.is_some())
    }

    fn header_get_start_angle(&self, header: HeaderHandle) -> f64 {
        self.read(header, |h: &HeaderRecord| h.start_angle.unwrap_or_default())
    }

    fn header_set_start_angle(&self, header: HeaderHandle, angle: f64) {
        self.write(header, |h: &mut HeaderRecord| h.start_angle = Some(angle));
    }

    fn header_clear_start_angle(&self, header: HeaderHandle) {
        self.write(header, |h: &mut HeaderRecord| h.start_angle = None);
    }

    fn header_is_start_distance_used(&self, header: HeaderHandle) -> bool {
        self.read(header, |h: &HeaderRecord| h.start_distance.is_some())
    }

    fn header_get_start_distance(&self, header: HeaderHandle) -> f64 {
        self.read(header, |h: &HeaderRecord| h.start_distance.unwrap_or_default())
    }

    fn header_set_start_distance(&self, header: HeaderHandle, distance: f64) {
        self.write(header, |h: &mut HeaderRecord| h.start_distance = Some(distance));
    }

    fn header_clear_start_distance(&self, header: HeaderHandle) {
        self.write(header, |h: &mut HeaderRecord| h.start_distance = None);
    }

    fn header_get_metadata(&self, header: HeaderHandle) -> MetaDataHandle {
        self.metadata_of::<HeaderRecord>(header, |h| h.metadata)
    }

    fn header_create_metadata(&self, header: HeaderHandle) -> MetaDataHandle {
        self.create_metadata::<HeaderRecord>(header, |h| &mut h.metadata)
    }

    fn header_get_attachments(
        &self,
        header: HeaderHandle,
        out: Option<&mut [AttachmentHandle]>,
    ) -> usize {
        self.read(header, |h: &HeaderRecord| fill_handles(&h.attachments, out))
    }

    fn header_get_file_histories(
        &self,
        header: HeaderHandle,
        out: Option<&mut [FileHistoryHandle]>,
    ) -> usize {
        self.read(header, |h: &HeaderRecord| fill_handles(&h.file_histories, out))
    }

    fn header_get_events(&self, header: HeaderHandle, out: Option<&mut [EventHandle]>) -> usize {
        self.read(header, |h: &HeaderRecord| fill_handles(&h.events, out))
    }

    fn header_get_data_groups(
        &self,
        header: HeaderHandle,
        out: Option<&mut [DataGroupHandle]>,
    ) -> usize {
        self.read(header, |h: &HeaderRecord| fill_handles(&h.data_groups, out))
    }

    fn header_create_attachment(&self, header: HeaderHandle) -> AttachmentHandle {
        self.create_child::<HeaderRecord, AttachmentRecord>(header, |h| &mut h.attachments)
    }

    fn header_create_file_history(&self, header: HeaderHandle) -> FileHistoryHandle {
        self.create_child::<HeaderRecord, FileHistoryRecord>(header, |h| &mut h.file_histories)
    }

    fn header_create_event(&self, header: HeaderHandle) -> EventHandle {
        self.create_child::<HeaderRecord, EventRecord>(header, |h| &mut h.events)
    }

    fn header_create_data_group(&self, header: HeaderHandle) -> DataGroupHandle {
        self.create_child::<HeaderRecord, DataGroupRecord>(header, |h| &mut h.data_groups)
    }
}

impl AttachmentExports for MdfStore {
    fn attachment_get_index(&self, attachment: AttachmentHandle) -> i64 {
        self.index::<AttachmentRecord>(attachment)
    }

    fn attachment_get_creator_index(&self, attachment: AttachmentHandle) -> u16 {
        self.read(attachment, |a: &AttachmentRecord| a.creator_index)
    }

    fn attachment_set_creator_index(&self, attachment: AttachmentHandle, index: u16) {
        self.write(attachment, |a: &mut AttachmentRecord| a.creator_index = index);
    }

    fn attachment_get_embedded(&self, attachment: AttachmentHandle) -> bool {
        self.read(attachment, |a: &AttachmentRecord| a.embedded)
    }

    fn attachment_set_embedded(&self, attachment: AttachmentHandle, embedded: bool) {
        self.write(attachment, |a: &mut AttachmentRecord| a.embedded = embedded);
    }

    fn attachment_get_compressed(&self, attachment: AttachmentHandle) -> bool {
        self.read(attachment, |a: &AttachmentRecord| a.compressed)
    }

    fn attachment_set_compressed(&self, attachment: AttachmentHandle, compressed: bool) {
        self.write(attachment, |a: &mut AttachmentRecord| a.compressed = compressed);
    }

    fn attachment_get_file_name(
        &self,
        attachment: AttachmentHandle,
        out: Option<&mut [u8]>,
    ) -> usize {
        self.read(attachment, |a: &AttachmentRecord| fill_str(&a.file_name, out))
    }

    fn attachment_set_file_name(&self, attachment: AttachmentHandle, name: &str) {
        self.write(attachment, |a: &mut AttachmentRecord| a.file_name = name.to_string());
    }

    fn attachment_get_file_type(
        &self,
        attachment: AttachmentHandle,
        out: Option<&mut [u8]>,
    ) -> usize {
        self.read(attachment, |a: &AttachmentRecord| fill_str(&a.file_type, out))
    }

    fn attachment_set_file_type(&self, attachment: AttachmentHandle, file_type: &str) {
        self.write(attachment, |a: &mut AttachmentRecord| a.file_type = file_type.to_string());
    }

    fn attachment_get_metadata(&self, attachment: AttachmentHandle) -> MetaDataHandle {
        self.metadata_of::<AttachmentRecord>(attachment, |a| a.metadata)
    }

    fn attachment_create_metadata(&self, attachment: AttachmentHandle) -> MetaDataHandle {
        self.create_metadata::<AttachmentRecord>(attachment, |a| &mut a.metadata)
    }
}

impl FileHistoryExports for MdfStore {
    fn file_history_get_index(&self, history: FileHistoryHandle) -> i64 {
        self.index::<FileHistoryRecord>(history)
    }

    fn file_history_get_time(&self, history: FileHistoryHandle) -> u64 {
        self.read(history, |f: &FileHistoryRecord| f.time)
    }

    fn file_history_set_time(&self, history: FileHistoryHandle, time: u64) {
        self.write(history, |f: &mut FileHistoryRecord| f.time = time);
    }

    fn file_history_get_description(
        &self,
        history: FileHistoryHandle,
        out: Option<&mut [u8]>,
    ) -> usize {
        self.read(history, |f: &FileHistoryRecord| fill_str(&f.description, out))
    }

    fn file_history_set_description(&self, history: FileHistoryHandle, description: &str) {
        self.write(history, |f: &mut FileHistoryRecord| f.description = description.to_string());
    }

    fn file_history_get_tool_name(
        &self,
        history: FileHistoryHandle,
        out: Option<&mut [u8]>,
    ) -> usize {
        self.read(history, |f: &FileHistoryRecord| fill_str(&f.tool_name, out))
    }

    fn file_history_set_tool_name(&self, history: FileHistoryHandle, name: &str) {
        self.write(history, |f: &mut FileHistoryRecord| f.tool_name = name.to_string());
    }

    fn file_history_get_tool_vendor(
        &self,
        history: FileHistoryHandle,
        out: Option<&mut [u8]>,
    ) -> usize {
        self.read(history, |f: &FileHistoryRecord| fill_str(&f.tool_vendor, out))
    }

    fn file_history_set_tool_vendor(&self, history: FileHistoryHandle, vendor: &str) {
        self.write(history, |f: &mut FileHistoryRecord| f.tool_vendor = vendor.to_string());
    }

    fn file_history_get_tool_version(
        &self,
        history: FileHistoryHandle,
        out: Option<&mut [u8]>,
    ) -> usize {
        self.read(history, |f: &FileHistoryRecord| fill_str(&f.tool_version, out))
    }

    fn file_history_set_tool_version(&self, history: FileHistoryHandle, version: &str) {
        self.write(history, |f: &mut FileHistoryRecord| f.tool_version = version.to_string());
    }

    fn file_history_get_user_name(
        &self,
        history: FileHistoryHandle,
        out: Option<&mut [u8]>,
    ) -> usize {
        self.read(history, |f: &FileHistoryRecord| fill_str(&f.user_name, out))
    }

    fn file_history_set_user_name(&self, history: FileHistoryHandle, user: &str) {
        self.write(history, |f: &mut FileHistoryRecord| f.user_name = user.to_string());
    }

    fn file_history_get_metadata(&self, history: FileHistoryHandle) -> MetaDataHandle {
        self.metadata_of::<FileHistoryRecord>(history, |f| f.metadata)
    }

    fn file_history_create_metadata(&self, history: FileHistoryHandle) -> MetaDataHandle {
        self.create_metadata::<FileHistoryRecord>(history, |f| &mut f.metadata)
    }
}

impl EventExports for MdfStore {
    fn event_get_index(&self, event: EventHandle) -> i64 {
        self.index::<EventRecord>(event)
    }

    fn event_get_name(&self, event: EventHandle, out: Option<&mut [u8]>) -> usize {
        self.read(event, |e: &EventRecord| fill_str(&e.name, out))
    }

    fn event_set_name(&self, event: EventHandle, name: &str) {
        self.write(event, |e: &mut EventRecord| e.name = name.to_string());
    }

    fn event_get_description(&self, event: EventHandle, out: Option<&mut [u8]>) -> usize {
        self.read(event, |e: &EventRecord| fill_str(&e.description, out))
    }

    fn event_set_description(&self, event: EventHandle, description: &str) {
        self.write(event, |e: &mut EventRecord| e.description = description.to_string());
    }

    fn event_get_group_name(&self, event: EventHandle, out: Option<&mut [u8]>) -> usize {
        self.read(event, |e: &EventRecord| fill_str(&e.group_name, out))
    }

    fn event_set_group_name(&self, event: EventHandle, group: &str) {
        self.write(event, |e: &mut EventRecord| e.group_name = group.to_string());
    }

    fn event_get_type(&self, event: EventHandle) -> EventType {
        self.read(event, |e: &EventRecord| EventType::from_u8(e.event_type))
    }

    fn event_set_type(&self, event: EventHandle, event_type: EventType) {
        self.write(event, |e: &mut EventRecord| e.event_type = event_type.to_u8());
    }

    fn event_get_sync_type(&self, event: EventHandle) -> SyncType {
        self.read(event, |e: &EventRecord| SyncType::from_u8(e.sync_type))
    }

    fn event_set_sync_type(&self, event: EventHandle, sync_type: SyncType) {
        self.write(event, |e: &mut EventRecord| e.sync_type = sync_type.to_u8());
    }

    fn event_get_range_type(&self, event: EventHandle) -> RangeType {
        self.read(event, |e: &EventRecord| RangeType::from_u8(e.range_type))
    }

    fn event_set_range_type(&self, event: EventHandle, range_type: RangeType) {
        self.write(event, |e: &mut EventRecord| e.range_type = range_type.to_u8());
    }

    fn event_get_cause(&self, event: EventHandle) -> EventCause {
        self.read(event, |e: &EventRecord| EventCause::from_u8(e.cause))
    }

    fn event_set_cause(&self, event: EventHandle, cause: EventCause) {
        self.write(event, |e: &mut EventRecord| e.cause = cause.to_u8());
    }

    fn event_get_creator_index(&self, event: EventHandle) -> u16 {
        self.read(event, |e: &EventRecord| e.creator_index)
    }

    fn event_set_creator_index(&self, event: EventHandle, index: u16) {
        self.write(event, |e: &mut EventRecord| e.creator_index = index);
    }

    fn event_get_sync_value(&self, event: EventHandle) -> i64 {
        self.read(event, |e: &EventRecord| e.sync_value)
    }

    fn event_set_sync_value(&self, event: EventHandle, value: i64) {
        self.write(event, |e: &mut EventRecord| e.sync_value = value);
    }

    fn event_get_sync_factor(&self, event: EventHandle) -> f64 {
        self.read(event, |e: &EventRecord| e.sync_factor)
    }

    fn event_set_sync_factor(&self, event: EventHandle, factor: f64) {
        self.write(event, |e: &mut EventRecord| e.sync_factor = factor);
    }

    fn event_get_pre_trigger(&self, event: EventHandle) -> f64 {
        self.read(event, |e: &EventRecord| e.pre_trigger)
    }

    fn event_set_pre_trigger(&self, event: EventHandle, time: f64) {
        self.write(event, |e: &mut EventRecord| e.pre_trigger = time);
    }

    fn event_get_post_trigger(&self, event: EventHandle) -> f64 {
        self.read(event, |e: &EventRecord| e.post_trigger)
    }

    fn event_set_post_trigger(&self, event: EventHandle, time: f64) {
        self.write(event, |e: &mut EventRecord| e.post_trigger = time);
    }

    fn event_get_metadata(&self, event: EventHandle) -> MetaDataHandle {
        self.metadata_of::<EventRecord>(event, |e| e.metadata)
    }

    fn event_create_metadata(&self, event: EventHandle) -> MetaDataHandle {
        self.create_metadata::<EventRecord>(event, |e| &mut e.metadata)
    }
}

impl DataGroupExports for MdfStore {
    fn data_group_get_index(&self, group: DataGroupHandle) -> i64 {
        self.index::<DataGroupRecord>(group)
    }

    fn data_group_get_description(&self, group: DataGroupHandle, out: Option<&mut [u8]>) -> usize {
        self.read(group, |d: &DataGroupRecord| fill_str(&d.description, out))
    }

    fn data_group_set_description(&self, group: DataGroupHandle, description: &str) {
        self.write(group, |d: &mut DataGroupRecord| d.description = description.to_string());
    }

    fn data_group_get_record_id_size(&self, group: DataGroupHandle) -> u8 {
        self.read(group, |d: &DataGroupRecord| d.record_id_size)
    }

    fn data_group_set_record_id_size(&self, group: DataGroupHandle, size: u8) {
        self.write(group, |d: &mut DataGroupRecord| d.record_id_size = size);
    }

    fn data_group_get_metadata(&self, group: DataGroupHandle) -> MetaDataHandle {
        self.metadata_of::<DataGroupRecord>(group, |d| d.metadata)
    }

    fn data_group_create_metadata(&self, group: DataGroupHandle) -> MetaDataHandle {
        self.create_metadata::<DataGroupRecord>(group, |d| &mut d.metadata)
    }
}

impl MetaDataExports for MdfStore {
    fn metadata_get_property_as_string(
        &self,
        metadata: MetaDataHandle,
        name: &str,
        out: Option<&mut [u8]>,
    ) -> usize {
        self.read(metadata, |m: &MetaDataRecord| {
            m.property(name).map_or(0, |tag| fill_str(&tag.value, out))
        })
    }

    fn metadata_set_property_as_string(&self, metadata: MetaDataHandle, name: &str, value: &str) {
        self.write(metadata, |m: &mut MetaDataRecord| m.upsert_value(ETag::new(name, value)));
    }

    fn metadata_get_property_as_float(&self, metadata: MetaDataHandle, name: &str) -> f64 {
        self.read(metadata, |m: &MetaDataRecord| {
            m.property(name).and_then(ETag::value_as_float).unwrap_or_default()
        })
    }

    fn metadata_set_property_as_float(&self, metadata: MetaDataHandle, name: &str, value: f64) {
        self.write(metadata, |m: &mut MetaDataRecord| {
            m.upsert_value(ETag::from_float(name, value))
        });
    }

    fn metadata_set_property(&self, metadata: MetaDataHandle, tag: &ETag) {
        self.write(metadata, |m: &mut MetaDataRecord| m.replace_property(tag.clone()));
    }

    fn metadata_get_properties(&self, metadata: MetaDataHandle, out: Option<&mut [ETag]>) -> usize {
        self.read(metadata, |m: &MetaDataRecord| fill_slice(&m.properties, out))
    }

    fn metadata_get_common_properties(
        &self,
        metadata: MetaDataHandle,
        out: Option<&mut [ETag]>,
    ) -> usize {
        self.read(metadata, |m: &MetaDataRecord| fill_slice(&m.common_properties, out))
    }

    fn metadata_set_common_properties(&self, metadata: MetaDataHandle, tags: &[ETag]) {
        self.write(metadata, |m: &mut MetaDataRecord| m.common_properties = tags.to_vec());
    }

    fn metadata_add_common_property(&self, metadata: MetaDataHandle, tag: &ETag) {
        self.write(metadata, |m: &mut MetaDataRecord| m.common_properties.push(tag.clone()));
    }

    fn metadata_get_xml_snippet(&self, metadata: MetaDataHandle, out: Option<&mut [u8]>) -> usize {
        self.read(metadata, |m: &MetaDataRecord| fill_str(&m.xml_snippet, out))
    }

    fn metadata_set_xml_snippet(&self, metadata: MetaDataHandle, xml: &str) {
        self.write(metadata, |m: &mut MetaDataRecord| m.xml_snippet = xml.to_string());
    }
}

impl MdfExports for MdfStore {
    fn read_policy(&self) -> ReadPolicy {
        self.policy
    }
}
