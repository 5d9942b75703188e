//! Header snapshots
//!
//! A [`HeaderSnapshot`] is a plain, serializable copy of a header tree read
//! through the accessor wrappers. It can be saved to JSON and later applied
//! to another header (possibly in another collaborator), which recreates the
//! fields, metadata and children through the same wrappers.
//!
//! Record indices are assigned by the collaborator and are not captured.

use serde::{Deserialize, Serialize};

use crate::api::{MdfAttachment, MdfDataGroup, MdfEvent, MdfFileHistory, MdfHeader, MdfMetaData};
use crate::error::MdfError;
use crate::exports::MdfExports;
use crate::types::{ETag, EventCause, EventType, RangeType, SyncType};

/// Content of one metadata record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaDataSnapshot {
    pub properties: Vec<ETag>,
    pub common_properties: Vec<ETag>,
    pub xml_snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentSnapshot {
    pub creator_index: u16,
    pub embedded: bool,
    pub compressed: bool,
    pub file_name: String,
    pub file_type: String,
    pub metadata: Option<MetaDataSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileHistorySnapshot {
    /// Nanoseconds since the Unix epoch
    pub time: u64,
    pub description: String,
    pub tool_name: String,
    pub tool_vendor: String,
    pub tool_version: String,
    pub user_name: String,
    pub metadata: Option<MetaDataSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub name: String,
    pub description: String,
    pub group_name: String,
    pub event_type: EventType,
    pub sync_type: SyncType,
    pub range_type: RangeType,
    pub cause: EventCause,
    pub creator_index: u16,
    pub sync_value: i64,
    pub sync_factor: f64,
    pub pre_trigger: f64,
    pub post_trigger: f64,
    pub metadata: Option<MetaDataSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataGroupSnapshot {
    pub description: String,
    pub record_id_size: u8,
    pub metadata: Option<MetaDataSnapshot>,
}

/// Complete header tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderSnapshot {
    pub description: String,
    pub author: String,
    pub department: String,
    pub project: String,
    pub subject: String,
    pub measurement_id: String,
    pub recorder_id: String,
    pub recorder_index: i64,
    /// Nanoseconds since the Unix epoch
    pub start_time: u64,
    /// `None` when the start angle is not used
    pub start_angle: Option<f64>,
    /// `None` when the start distance is not used
    pub start_distance: Option<f64>,
    pub metadata: Option<MetaDataSnapshot>,
    pub attachments: Vec<AttachmentSnapshot>,
    pub file_histories: Vec<FileHistorySnapshot>,
    pub events: Vec<EventSnapshot>,
    pub data_groups: Vec<DataGroupSnapshot>,
}

impl MetaDataSnapshot {
    pub fn capture<E: MdfExports + ?Sized>(metadata: &MdfMetaData<'_, E>) -> Self {
        MetaDataSnapshot {
            properties: metadata.properties(),
            common_properties: metadata.common_properties(),
            xml_snippet: metadata.xml_snippet(),
        }
    }

    pub fn apply<E: MdfExports + ?Sized>(&self, metadata: &MdfMetaData<'_, E>) {
        for tag in &self.properties {
            metadata.set_property(tag);
        }
        metadata.set_common_properties(&self.common_properties);
        metadata.set_xml_snippet(&self.xml_snippet);
    }
}

impl AttachmentSnapshot {
    pub fn capture<E: MdfExports + ?Sized>(attachment: &MdfAttachment<'_, E>) -> Self {
        AttachmentSnapshot {
            creator_index: attachment.creator_index(),
            embedded: attachment.is_embedded(),
            compressed: attachment.is_compressed(),
            file_name: attachment.file_name(),
            file_type: attachment.file_type(),
            metadata: attachment.metadata().ok().map(|md| MetaDataSnapshot::capture(&md)),
        }
    }

    pub fn apply<E: MdfExports + ?Sized>(
        &self,
        attachment: &MdfAttachment<'_, E>,
    ) -> Result<(), MdfError> {
        attachment.set_creator_index(self.creator_index);
        attachment.set_embedded(self.embedded);
        attachment.set_compressed(self.compressed);
        attachment.set_file_name(&self.file_name);
        attachment.set_file_type(&self.file_type);
        if let Some(metadata) = &self.metadata {
            metadata.apply(&attachment.create_metadata()?);
        }
        Ok(())
    }
}

impl FileHistorySnapshot {
    pub fn capture<E: MdfExports + ?Sized>(history: &MdfFileHistory<'_, E>) -> Self {
        FileHistorySnapshot {
            time: history.time(),
            description: history.description(),
            tool_name: history.tool_name(),
            tool_vendor: history.tool_vendor(),
            tool_version: history.tool_version(),
            user_name: history.user_name(),
            metadata: history.metadata().ok().map(|md| MetaDataSnapshot::capture(&md)),
        }
    }

    pub fn apply<E: MdfExports + ?Sized>(
        &self,
        history: &MdfFileHistory<'_, E>,
    ) -> Result<(), MdfError> {
        history.set_time(self.time);
        history.set_description(&self.description);
        history.set_tool_name(&self.tool_name);
        history.set_tool_vendor(&self.tool_vendor);
        history.set_tool_version(&self.tool_version);
        history.set_user_name(&self.user_name);
        if let Some(metadata) = &self.metadata {
            metadata.apply(&history.create_metadata()?);
        }
        Ok(())
    }
}

impl EventSnapshot {
    pub fn capture<E: MdfExports + ?Sized>(event: &MdfEvent<'_, E>) -> Self {
        EventSnapshot {
            name: event.name(),
            description: event.description(),
            group_name: event.group_name(),
            event_type: event.event_type(),
            sync_type: event.sync_type(),
            range_type: event.range_type(),
            cause: event.cause(),
            creator_index: event.creator_index(),
            sync_value: event.sync_value(),
            sync_factor: event.sync_factor(),
            pre_trigger: event.pre_trigger(),
            post_trigger: event.post_trigger(),
            metadata: event.metadata().ok().map(|md| MetaDataSnapshot::capture(&md)),
        }
    }

    pub fn apply<E: MdfExports + ?Sized>(&self, event: &MdfEvent<'_, E>) -> Result<(), MdfError> {
        event.set_name(&self.name);
        event.set_description(&self.description);
        event.set_group_name(&self.group_name);
        event.set_event_type(self.event_type);
        event.set_sync_type(self.sync_type);
        event.set_range_type(self.range_type);
        event.set_cause(self.cause);
        event.set_creator_index(self.creator_index);
        event.set_sync_value(self.sync_value);
        event.set_sync_factor(self.sync_factor);
        event.set_pre_trigger(self.pre_trigger);
        event.set_post_trigger(self.post_trigger);
        if let Some(metadata) = &self.metadata {
            metadata.apply(&event.create_metadata()?);
        }
        Ok(())
    }
}

impl DataGroupSnapshot {
    pub fn capture<E: MdfExports + ?Sized>(group: &MdfDataGroup<'_, E>) -> Self {
        DataGroupSnapshot {
            description: group.description(),
            record_id_size: group.record_id_size(),
            metadata: group.metadata().ok().map(|md| MetaDataSnapshot::capture(&md)),
        }
    }

    pub fn apply<E: MdfExports + ?Sized>(&self, group: &MdfDataGroup<'_, E>) -> Result<(), MdfError> {
        group.set_description(&self.description);
        group.set_record_id_size(self.record_id_size);
        if let Some(metadata) = &self.metadata {
            metadata.apply(&group.create_metadata()?);
        }
        Ok(())
    }
}

impl HeaderSnapshot {
    /// Read the whole tree below `header` through its accessors.
    pub fn from_header<E: MdfExports + ?Sized>(header: &MdfHeader<'_, E>) -> Self {
        HeaderSnapshot {
            description: header.description(),
            author: header.author(),
            department: header.department(),
            project: header.project(),
            subject: header.subject(),
            measurement_id: header.measurement_id(),
            recorder_id: header.recorder_id(),
            recorder_index: header.recorder_index(),
            start_time: header.start_time(),
            start_angle: header.is_start_angle_used().then(|| header.start_angle()),
            start_distance: header.is_start_distance_used().then(|| header.start_distance()),
            metadata: header.metadata().ok().map(|md| MetaDataSnapshot::capture(&md)),
            attachments: header.attachments().iter().map(AttachmentSnapshot::capture).collect(),
            file_histories: header
                .file_histories()
                .iter()
                .map(FileHistorySnapshot::capture)
                .collect(),
            events: header.events().iter().map(EventSnapshot::capture).collect(),
            data_groups: header.data_groups().iter().map(DataGroupSnapshot::capture).collect(),
        }
    }

    /// Write the snapshot into `header`.
    ///
    /// Scalar and string fields are overwritten, and an unused start angle or
    /// distance clears the one already set. Children are created anew and
    /// appended after any the header already has.
    ///
    /// # Returns
    /// [`MdfError::InvalidHandle`] if the collaborator refuses to create a child.
    pub fn apply_to<E: MdfExports + ?Sized>(&self, header: &MdfHeader<'_, E>) -> Result<(), MdfError> {
        header.set_description(&self.description);
        header.set_author(&self.author);
        header.set_department(&self.department);
        header.set_project(&self.project);
        header.set_subject(&self.subject);
        header.set_measurement_id(&self.measurement_id);
        header.set_recorder_id(&self.recorder_id);
        header.set_recorder_index(self.recorder_index);
        header.set_start_time(self.start_time);
        match self.start_angle {
            Some(angle) => header.set_start_angle(angle),
            None => header.clear_start_angle(),
        }
        match self.start_distance {
            Some(distance) => header.set_start_distance(distance),
            None => header.clear_start_distance(),
        }
        if let Some(metadata) = &self.metadata {
            metadata.apply(&header.create_metadata()?);
        }

        for attachment in &self.attachments {
            attachment.apply(&header.create_attachment()?)?;
        }
        for history in &self.file_histories {
            history.apply(&header.create_file_history()?)?;
        }
        for event in &self.events {
            event.apply(&header.create_event()?)?;
        }
        for group in &self.data_groups {
            group.apply(&header.create_data_group()?)?;
        }

        tracing::debug!(
            header = header.handle().raw(),
            attachments = self.attachments.len(),
            file_histories = self.file_histories.len(),
            events = self.events.len(),
            data_groups = self.data_groups.len(),
            "snapshot applied"
        );
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, MdfError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MdfError::SerializationError(format!("JSON serialization failed: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self, MdfError> {
        serde_json::from_str(json)
            .map_err(|e| MdfError::SerializationError(format!("JSON deserialization failed: {}", e)))
    }

    /// Save the snapshot to a JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), MdfError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_file(path: &str) -> Result<Self, MdfError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
