use crate::handle::{Handle, RecordKind, kind};
use crate::types::{ETag, EventCause, EventType, RangeType, SyncType};

// Child links hold raw handle values; 0 means "no record".

#[derive(Debug, Default)]
pub(crate) struct HeaderRecord {
    pub description: String,
    pub author: String,
    pub department: String,
    pub project: String,
    pub subject: String,
    pub measurement_id: String,
    pub recorder_id: String,
    pub recorder_index: i64,
    pub start_time: u64,
    pub start_angle: Option<f64>,
    pub start_distance: Option<f64>,
    pub metadata: u64,
    pub attachments: Vec<u64>,
    pub file_histories: Vec<u64>,
    pub events: Vec<u64>,
    pub data_groups: Vec<u64>,
}

#[derive(Debug, Default)]
pub(crate) struct AttachmentRecord {
    pub creator_index: u16,
    pub embedded: bool,
    pub compressed: bool,
    pub file_name: String,
    pub file_type: String,
    pub metadata: u64,
}

#[derive(Debug, Default)]
pub(crate) struct FileHistoryRecord {
    pub time: u64,
    pub description: String,
    pub tool_name: String,
    pub tool_vendor: String,
    pub tool_version: String,
    pub user_name: String,
    pub metadata: u64,
}

#[derive(Debug)]
pub(crate) struct EventRecord {
    pub name: String,
    pub description: String,
    pub group_name: String,
    /// Raw ev_type, ev_sync_type, ev_range_type and ev_cause codes.
    pub event_type: u8,
    pub sync_type: u8,
    pub range_type: u8,
    pub cause: u8,
    pub creator_index: u16,
    pub sync_value: i64,
    pub sync_factor: f64,
    pub pre_trigger: f64,
    pub post_trigger: f64,
    pub metadata: u64,
}

impl Default for EventRecord {
    fn default() -> Self {
        EventRecord {
            name: String::new(),
            description: String::new(),
            group_name: String::new(),
            event_type: EventType::default().to_u8(),
            sync_type: SyncType::default().to_u8(),
            range_type: RangeType::default().to_u8(),
            cause: EventCause::default().to_u8(),
            creator_index: 0,
            sync_value: 0,
            sync_factor: 0.0,
            pre_trigger: 0.0,
            post_trigger: 0.0,
            metadata: 0,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct DataGroupRecord {
    pub description: String,
    pub record_id_size: u8,
    pub metadata: u64,
}

#[derive(Debug, Default)]
pub(crate) struct MetaDataRecord {
    /// Top level named properties, in insertion order.
    pub properties: Vec<ETag>,
    pub common_properties: Vec<ETag>,
    pub xml_snippet: String,
}

impl MetaDataRecord {
    pub fn property(&self, name: &str) -> Option<&ETag> {
        self.properties.iter().find(|tag| tag.name == name)
    }

    /// Replace the value of `name`, appending a new tag if it does not exist yet.
    /// Unit, description, language and read-only flag of an existing tag are kept.
    pub fn upsert_value(&mut self, tag: ETag) {
        match self.properties.iter_mut().find(|existing| existing.name == tag.name) {
            Some(existing) => {
                existing.value = tag.value;
                existing.data_type = tag.data_type;
            }
            None => self.properties.push(tag),
        }
    }

    /// Store `tag` as is, replacing any tag of the same name in place.
    pub fn replace_property(&mut self, tag: ETag) {
        match self.properties.iter_mut().find(|existing| existing.name == tag.name) {
            Some(existing) => *existing = tag,
            None => self.properties.push(tag),
        }
    }
}

#[derive(Debug)]
pub(crate) enum Record {
    Header(HeaderRecord),
    Attachment(AttachmentRecord),
    FileHistory(FileHistoryRecord),
    Event(EventRecord),
    DataGroup(DataGroupRecord),
    MetaData(MetaDataRecord),
}

/// Typed view into a [`Record`] slot, tying each record struct to its handle kind.
pub(crate) trait Slot: Default + Sized {
    type Kind: RecordKind;

    fn wrap(self) -> Record;
    fn view(record: &Record) -> Option<&Self>;
    fn view_mut(record: &mut Record) -> Option<&mut Self>;
}

macro_rules! slot {
    ($record:ty, $kind:ty, $variant:ident) => {
        impl Slot for $record {
            type Kind = $kind;

            fn wrap(self) -> Record {
                Record::$variant(self)
            }

            fn view(record: &Record) -> Option<&Self> {
                match record {
                    Record::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn view_mut(record: &mut Record) -> Option<&mut Self> {
                match record {
                    Record::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

slot!(HeaderRecord, kind::Header, Header);
slot!(AttachmentRecord, kind::Attachment, Attachment);
slot!(FileHistoryRecord, kind::FileHistory, FileHistory);
slot!(EventRecord, kind::Event, Event);
slot!(DataGroupRecord, kind::DataGroup, DataGroup);
slot!(MetaDataRecord, kind::MetaData, MetaData);

/// Copy `value` into `out` (at most `out.len()` bytes) and report its full length.
pub(crate) fn fill_str(value: &str, out: Option<&mut [u8]>) -> usize {
    fill_slice(value.as_bytes(), out)
}

/// Copy `values` into `out` (at most `out.len()` elements) and report the full count.
pub(crate) fn fill_slice<T: Clone>(values: &[T], out: Option<&mut [T]>) -> usize {
    if let Some(buf) = out {
        let n = values.len().min(buf.len());
        buf[..n].clone_from_slice(&values[..n]);
    }
    values.len()
}

/// Write child links into a handle array, reporting the full number of children.
pub(crate) fn fill_handles<K>(ids: &[u64], out: Option<&mut [Handle<K>]>) -> usize {
    if let Some(buf) = out {
        for (slot, id) in buf.iter_mut().zip(ids) {
            *slot = Handle::from_raw(*id);
        }
    }
    ids.len()
}
