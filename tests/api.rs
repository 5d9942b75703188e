use mdflib_rs::api::{MdfAttachment, MdfDataGroup, MdfEvent, MdfFileHistory, MdfHeader, MdfMetaData};
use mdflib_rs::error::MdfError;
use mdflib_rs::exports::{HeaderExports, MdfExports};
use mdflib_rs::handle::{Handle, HeaderHandle};
use mdflib_rs::store::MdfStore;
use mdflib_rs::types::{ETag, EventCause, EventType, RangeType, SyncType};

fn new_header(store: &MdfStore) -> Result<MdfHeader<'_, MdfStore>, MdfError> {
    MdfHeader::new(store, store.create_header())
}

#[test]
fn null_handles_are_rejected_for_every_kind() {
    let store = MdfStore::new();

    assert!(matches!(
        MdfHeader::new(&store, Handle::null()),
        Err(MdfError::InvalidHandle { kind: "header" })
    ));
    assert!(matches!(
        MdfAttachment::new(&store, Handle::null()),
        Err(MdfError::InvalidHandle { kind: "attachment" })
    ));
    assert!(matches!(
        MdfFileHistory::new(&store, Handle::null()),
        Err(MdfError::InvalidHandle { kind: "file history" })
    ));
    assert!(matches!(
        MdfEvent::new(&store, Handle::null()),
        Err(MdfError::InvalidHandle { kind: "event" })
    ));
    assert!(matches!(
        MdfDataGroup::new(&store, Handle::null()),
        Err(MdfError::InvalidHandle { kind: "data group" })
    ));
    assert!(matches!(
        MdfMetaData::new(&store, Handle::null()),
        Err(MdfError::InvalidHandle { kind: "metadata" })
    ));
}

#[test]
fn header_string_fields_roundtrip() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;

    assert_eq!(header.description(), "");

    header.set_description("Road test, ambient 21 °C");
    header.set_author("Ingrid");
    header.set_department("Powertrain");
    header.set_project("P-17");
    header.set_subject("Test vehicle 4");
    header.set_measurement_id("6c1d4e7a-2b0f-4e8a-9d6e-1f3c5a7b9d01");
    header.set_recorder_id("0a9b8c7d-6e5f-4a3b-2c1d-0e9f8a7b6c5d");

    assert_eq!(header.description(), "Road test, ambient 21 °C");
    assert_eq!(header.author(), "Ingrid");
    assert_eq!(header.department(), "Powertrain");
    assert_eq!(header.project(), "P-17");
    assert_eq!(header.subject(), "Test vehicle 4");
    assert_eq!(header.measurement_id(), "6c1d4e7a-2b0f-4e8a-9d6e-1f3c5a7b9d01");
    assert_eq!(header.recorder_id(), "0a9b8c7d-6e5f-4a3b-2c1d-0e9f8a7b6c5d");

    header.set_author("");
    assert_eq!(header.author(), "");
    Ok(())
}

#[test]
fn header_scalar_fields_roundtrip() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;

    assert!(header.index() > 0);

    header.set_recorder_index(-3);
    assert_eq!(header.recorder_index(), -3);

    header.set_start_time(1_700_000_000_123_456_789);
    assert_eq!(header.start_time(), 1_700_000_000_123_456_789);

    assert!(!header.is_start_angle_used());
    header.set_start_angle(1.25);
    assert!(header.is_start_angle_used());
    assert_eq!(header.start_angle(), 1.25);

    assert!(!header.is_start_distance_used());
    header.set_start_distance(42.5);
    assert!(header.is_start_distance_used());
    assert_eq!(header.start_distance(), 42.5);

    header.clear_start_angle();
    header.clear_start_distance();
    assert!(!header.is_start_angle_used());
    assert!(!header.is_start_distance_used());
    Ok(())
}

#[test]
fn created_children_are_listed_in_order() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;

    assert!(header.attachments().is_empty());
    assert!(header.file_histories().is_empty());
    assert!(header.events().is_empty());
    assert!(header.data_groups().is_empty());

    let first = header.create_attachment()?;
    first.set_file_name("setup.xml");
    let second = header.create_attachment()?;
    second.set_file_name("calibration.a2l");

    let names: Vec<String> = header.attachments().iter().map(|a| a.file_name()).collect();
    assert_eq!(names, vec!["setup.xml", "calibration.a2l"]);
    assert_eq!(header.attachments()[1].handle(), second.handle());

    header.create_file_history()?;
    header.create_event()?;
    header.create_event()?;
    header.create_data_group()?;
    assert_eq!(header.file_histories().len(), 1);
    assert_eq!(header.events().len(), 2);
    assert_eq!(header.data_groups().len(), 1);
    Ok(())
}

#[test]
fn attachment_fields_roundtrip() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;
    let attachment = header.create_attachment()?;

    assert!(attachment.index() > header.index());
    attachment.set_creator_index(2);
    attachment.set_embedded(true);
    attachment.set_compressed(true);
    attachment.set_file_name("trace.blf");
    attachment.set_file_type("application/octet-stream");

    assert_eq!(attachment.creator_index(), 2);
    assert!(attachment.is_embedded());
    assert!(attachment.is_compressed());
    assert_eq!(attachment.file_name(), "trace.blf");
    assert_eq!(attachment.file_type(), "application/octet-stream");
    Ok(())
}

#[test]
fn file_history_fields_roundtrip() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;
    let history = header.create_file_history()?;

    history.set_time(1_650_000_000_000_000_000);
    history.set_description("Created");
    history.set_tool_name("mdflib-rs");
    history.set_tool_vendor("ACME");
    history.set_tool_version("0.3.0");
    history.set_user_name("ingrid");

    let listed = header.file_histories();
    let same = &listed[0];
    assert_eq!(same.time(), 1_650_000_000_000_000_000);
    assert_eq!(same.description(), "Created");
    assert_eq!(same.tool_name(), "mdflib-rs");
    assert_eq!(same.tool_vendor(), "ACME");
    assert_eq!(same.tool_version(), "0.3.0");
    assert_eq!(same.user_name(), "ingrid");
    Ok(())
}

#[test]
fn event_fields_roundtrip() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;
    let event = header.create_event()?;

    assert_eq!(event.event_type(), EventType::Recording);

    event.set_name("Brake");
    event.set_description("Full brake application");
    event.set_group_name("Driver");
    event.set_event_type(EventType::Marker);
    event.set_sync_type(SyncType::Time);
    event.set_range_type(RangeType::RangeBegin);
    event.set_cause(EventCause::User);
    event.set_creator_index(1);
    event.set_sync_value(1500);
    event.set_sync_factor(0.01);
    event.set_pre_trigger(2.0);
    event.set_post_trigger(5.0);

    assert_eq!(event.name(), "Brake");
    assert_eq!(event.description(), "Full brake application");
    assert_eq!(event.group_name(), "Driver");
    assert_eq!(event.event_type(), EventType::Marker);
    assert_eq!(event.sync_type(), SyncType::Time);
    assert_eq!(event.range_type(), RangeType::RangeBegin);
    assert_eq!(event.cause(), EventCause::User);
    assert_eq!(event.creator_index(), 1);
    assert_eq!(event.sync_value(), 1500);
    assert_eq!(event.sync_factor(), 0.01);
    assert!((event.sync_point() - 15.0).abs() < 1e-9);
    assert_eq!(event.pre_trigger(), 2.0);
    assert_eq!(event.post_trigger(), 5.0);
    Ok(())
}

#[test]
fn event_codes_survive_unknown_values() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;
    let event = header.create_event()?;

    assert_eq!(event.sync_type(), SyncType::Time);
    assert_eq!(event.range_type(), RangeType::Point);
    assert_eq!(event.cause(), EventCause::Other);

    event.set_event_type(EventType::Unknown(42));
    event.set_sync_type(SyncType::Unknown(9));
    event.set_range_type(RangeType::Unknown(7));
    event.set_cause(EventCause::Unknown(200));
    assert_eq!(event.event_type(), EventType::Unknown(42));
    assert_eq!(event.sync_type(), SyncType::Unknown(9));
    assert_eq!(event.range_type(), RangeType::Unknown(7));
    assert_eq!(event.cause(), EventCause::Unknown(200));

    // A known code written as unknown reads back as its named variant.
    event.set_event_type(EventType::Unknown(6));
    assert_eq!(event.event_type(), EventType::Marker);
    Ok(())
}

#[test]
fn raw_codes_map_both_ways() {
    for code in 0..=u8::MAX {
        assert_eq!(EventType::from_u8(code).to_u8(), code);
        assert_eq!(SyncType::from_u8(code).to_u8(), code);
        assert_eq!(RangeType::from_u8(code).to_u8(), code);
        assert_eq!(EventCause::from_u8(code).to_u8(), code);
    }
    assert_eq!(EventType::from_u8(5), EventType::Trigger);
    assert_eq!(SyncType::from_u8(0), SyncType::Unknown(0));
    assert_eq!(SyncType::Distance.to_u8(), 3);
    assert_eq!(RangeType::from_u8(2), RangeType::RangeEnd);
    assert_eq!(EventCause::Script.to_u8(), 3);
}

#[test]
fn data_group_fields_roundtrip() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;
    let group = header.create_data_group()?;

    group.set_description("CAN 1");
    group.set_record_id_size(2);
    assert_eq!(group.description(), "CAN 1");
    assert_eq!(group.record_id_size(), 2);
    Ok(())
}

#[test]
fn metadata_is_absent_until_created() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;

    assert!(matches!(header.metadata(), Err(MdfError::InvalidHandle { kind: "metadata" })));

    let created = header.create_metadata()?;
    let again = header.create_metadata()?;
    assert_eq!(created.handle(), again.handle());
    assert_eq!(header.metadata()?.handle(), created.handle());

    let group = header.create_data_group()?;
    assert!(group.metadata().is_err());
    assert_ne!(group.create_metadata()?.handle(), created.handle());
    Ok(())
}

#[test]
fn metadata_properties() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;
    let metadata = header.create_metadata()?;

    assert_eq!(metadata.property_as_string("TX"), "");
    assert_eq!(metadata.property_as_float("gain"), 0.0);

    metadata.set_property_as_string("TX", "Comment text");
    metadata.set_property_as_float("gain", 2.5);
    metadata.set_property_as_string("TX", "Updated comment");

    assert_eq!(metadata.property_as_string("TX"), "Updated comment");
    assert_eq!(metadata.property_as_float("gain"), 2.5);
    assert_eq!(metadata.property_as_string("gain"), "2.5");

    let properties = metadata.properties();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].name, "TX");
    assert_eq!(properties[1].data_type, "float");

    metadata.add_common_property(&ETag::new("vehicle", "Test vehicle 4"));
    metadata.add_common_property(&ETag::from_float("mass", 1450.0).with_unit("kg"));
    let common = metadata.common_properties();
    assert_eq!(common.len(), 2);
    assert_eq!(common[1].unit, "kg");
    assert_eq!(common[1].value_as_float(), Some(1450.0));

    metadata.set_common_properties(&[]);
    assert!(metadata.common_properties().is_empty());

    metadata.set_xml_snippet("<HDcomment><TX>Updated comment</TX></HDcomment>");
    assert_eq!(metadata.xml_snippet(), "<HDcomment><TX>Updated comment</TX></HDcomment>");
    Ok(())
}

#[test]
fn full_property_tags_keep_their_attributes() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = new_header(&store)?;
    let metadata = header.create_metadata()?;

    let mut mass = ETag::from_float("mass", 1450.0)
        .with_unit("kg")
        .with_description("vehicle mass");
    mass.language = "en".to_string();
    mass.read_only = true;
    metadata.set_property(&mass);
    assert_eq!(metadata.properties(), vec![mass.clone()]);

    // Value setters keep the attributes of an existing tag.
    metadata.set_property_as_float("mass", 1500.0);
    let updated = &metadata.properties()[0];
    assert_eq!(updated.value, "1500");
    assert_eq!(updated.unit, "kg");
    assert_eq!(updated.description, "vehicle mass");
    assert!(updated.read_only);

    // A whole tag replaces the previous one in place.
    metadata.set_property_as_string("TX", "Comment");
    metadata.set_property(&ETag::new("mass", "unknown"));
    let properties = metadata.properties();
    assert_eq!(properties[0], ETag::new("mass", "unknown"));
    assert_eq!(properties[1].name, "TX");

    // Properties and the XML snippet are stored independently.
    assert_eq!(metadata.xml_snippet(), "");
    Ok(())
}

#[test]
fn wrappers_on_the_same_handle_share_state() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let handle = store.create_header();
    let a = MdfHeader::new(&store, handle)?;
    let b = MdfHeader::new(&store, handle)?;

    a.set_project("shared");
    assert_eq!(b.project(), "shared");

    b.create_event()?;
    assert_eq!(a.events().len(), 1);

    let copy = a;
    copy.set_recorder_index(9);
    assert_eq!(b.recorder_index(), 9);
    Ok(())
}

#[test]
fn handles_of_another_store_read_as_defaults() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let other = MdfStore::new();
    let header = new_header(&store)?;
    header.create_attachment()?;

    // Handle 2 exists in `store` as an attachment, never as a header.
    let foreign: HeaderHandle = Handle::from_raw(2);
    let stale = MdfHeader::new(&store, foreign)?;
    assert_eq!(stale.author(), "");
    stale.set_author("ignored");
    assert_eq!(stale.author(), "");
    assert!(stale.create_event().is_err());

    let unknown = MdfHeader::new(&other, header.handle())?;
    assert_eq!(unknown.start_time(), 0);
    assert!(unknown.attachments().is_empty());
    Ok(())
}

#[test]
fn wrappers_work_over_a_trait_object() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let handle = store.create_header();
    let exports: &dyn MdfExports = &store;

    let header = MdfHeader::new(exports, handle)?;
    header.set_subject("dyn");
    assert_eq!(exports.header_get_subject(handle, None), 3);
    assert_eq!(header.subject(), "dyn");
    Ok(())
}

#[test]
fn store_lists_headers() {
    let store = MdfStore::new();
    assert!(store.is_empty());

    let first = store.create_header();
    let second = store.create_header();
    assert_eq!(store.headers(), vec![first, second]);
    assert_eq!(store.len(), 2);
}
