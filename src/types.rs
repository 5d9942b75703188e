use serde::{Deserialize, Serialize};

/// Kind of an event (ev_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventType {
    /// 0: Recording period
    #[default]
    Recording,
    /// 1: Recording interrupt
    RecordingInterrupt,
    /// 2: Acquisition interrupt
    AcquisitionInterrupt,
    /// 3: Start recording trigger
    StartRecordingTrigger,
    /// 4: Stop recording trigger
    StopRecordingTrigger,
    /// 5: Generic trigger
    Trigger,
    /// 6: Marker
    Marker,
    /// For any other unrecognized event type.
    Unknown(u8),
}

impl EventType {
    /// Converts a raw u8 value to the corresponding EventType.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => EventType::Recording,
            1 => EventType::RecordingInterrupt,
            2 => EventType::AcquisitionInterrupt,
            3 => EventType::StartRecordingTrigger,
            4 => EventType::StopRecordingTrigger,
            5 => EventType::Trigger,
            6 => EventType::Marker,
            other => EventType::Unknown(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            EventType::Recording => 0,
            EventType::RecordingInterrupt => 1,
            EventType::AcquisitionInterrupt => 2,
            EventType::StartRecordingTrigger => 3,
            EventType::StopRecordingTrigger => 4,
            EventType::Trigger => 5,
            EventType::Marker => 6,
            EventType::Unknown(other) => other,
        }
    }
}

/// Domain of the event synchronization value (ev_sync_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SyncType {
    /// 1: Time in seconds
    #[default]
    Time,
    /// 2: Angle in radians
    Angle,
    /// 3: Distance in meters
    Distance,
    /// 4: Record index
    Index,
    Unknown(u8),
}

impl SyncType {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => SyncType::Time,
            2 => SyncType::Angle,
            3 => SyncType::Distance,
            4 => SyncType::Index,
            other => SyncType::Unknown(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            SyncType::Time => 1,
            SyncType::Angle => 2,
            SyncType::Distance => 3,
            SyncType::Index => 4,
            SyncType::Unknown(other) => other,
        }
    }
}

/// Whether an event is a point or opens/closes a range (ev_range_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangeType {
    #[default]
    Point,
    RangeBegin,
    RangeEnd,
    Unknown(u8),
}

impl RangeType {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => RangeType::Point,
            1 => RangeType::RangeBegin,
            2 => RangeType::RangeEnd,
            other => RangeType::Unknown(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            RangeType::Point => 0,
            RangeType::RangeBegin => 1,
            RangeType::RangeEnd => 2,
            RangeType::Unknown(other) => other,
        }
    }
}

/// Originator of an event (ev_cause).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventCause {
    #[default]
    Other,
    Error,
    Tool,
    Script,
    User,
    Unknown(u8),
}

impl EventCause {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => EventCause::Other,
            1 => EventCause::Error,
            2 => EventCause::Tool,
            3 => EventCause::Script,
            4 => EventCause::User,
            other => EventCause::Unknown(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            EventCause::Other => 0,
            EventCause::Error => 1,
            EventCause::Tool => 2,
            EventCause::Script => 3,
            EventCause::User => 4,
            EventCause::Unknown(other) => other,
        }
    }
}

/// A single `<e>` property element of an XML metadata block.
///
/// Unlike records, tags cross the boundary by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ETag {
    pub name: String,
    pub description: String,
    pub unit: String,
    /// XML schema type of the value, e.g. `"string"` or `"float"`.
    pub data_type: String,
    pub language: String,
    pub read_only: bool,
    pub value: String,
}

impl ETag {
    /// Creates a string-typed tag.
    pub fn new(name: &str, value: &str) -> Self {
        ETag {
            name: name.to_string(),
            data_type: "string".to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    /// Creates a float-typed tag with the value formatted in its shortest form.
    pub fn from_float(name: &str, value: f64) -> Self {
        ETag {
            name: name.to_string(),
            data_type: "float".to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Parse the value as a float, `None` when it is not numeric.
    pub fn value_as_float(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }
}
