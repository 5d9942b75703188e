use mdflib_rs::api::MdfHeader;
use mdflib_rs::error::MdfError;
use mdflib_rs::snapshot::{HeaderSnapshot, MetaDataSnapshot};
use mdflib_rs::store::MdfStore;
use mdflib_rs::types::{ETag, EventCause, EventType, RangeType};

fn populate(header: &MdfHeader<'_, MdfStore>) -> Result<(), MdfError> {
    header.set_description("Highway run");
    header.set_author("Ingrid");
    header.set_project("P-17");
    header.set_start_time(1_700_000_000_000_000_000);
    header.set_start_distance(12.0);

    let metadata = header.create_metadata()?;
    metadata.set_property_as_string("TX", "Highway run");
    metadata.set_property_as_float("ambient", 21.5);
    metadata.add_common_property(&ETag::new("vehicle", "Test vehicle 4"));

    let attachment = header.create_attachment()?;
    attachment.set_file_name("setup.xml");
    attachment.set_file_type("application/xml");
    attachment.set_embedded(true);

    let history = header.create_file_history()?;
    history.set_tool_name("logger");
    history.set_tool_version("2.1");
    history.create_metadata()?.set_xml_snippet("<FHcomment><TX>Created</TX></FHcomment>");

    let event = header.create_event()?;
    event.set_name("Lane change");
    event.set_event_type(EventType::Marker);
    event.set_range_type(RangeType::Point);
    event.set_cause(EventCause::User);
    event.set_sync_value(300);
    event.set_sync_factor(0.1);

    let group = header.create_data_group()?;
    group.set_description("CAN 1");
    group.set_record_id_size(1);
    Ok(())
}

#[test]
fn snapshot_captures_the_tree() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = MdfHeader::new(&store, store.create_header())?;
    populate(&header)?;

    let snapshot = HeaderSnapshot::from_header(&header);
    assert_eq!(snapshot.author, "Ingrid");
    assert_eq!(snapshot.start_angle, None);
    assert_eq!(snapshot.start_distance, Some(12.0));
    assert_eq!(snapshot.attachments.len(), 1);
    assert_eq!(snapshot.attachments[0].file_name, "setup.xml");
    assert!(snapshot.attachments[0].metadata.is_none());
    assert_eq!(snapshot.events[0].event_type, EventType::Marker);
    assert_eq!(snapshot.data_groups[0].record_id_size, 1);

    let metadata = snapshot.metadata.as_ref().expect("header metadata captured");
    assert_eq!(metadata.properties.len(), 2);
    assert_eq!(metadata.common_properties[0].name, "vehicle");
    Ok(())
}

#[test]
fn snapshot_applies_to_a_fresh_store() -> Result<(), MdfError> {
    let source = MdfStore::new();
    let header = MdfHeader::new(&source, source.create_header())?;
    populate(&header)?;
    let snapshot = HeaderSnapshot::from_header(&header);

    let target = MdfStore::new();
    let copy = MdfHeader::new(&target, target.create_header())?;
    snapshot.apply_to(&copy)?;

    assert_eq!(HeaderSnapshot::from_header(&copy), snapshot);
    assert_eq!(copy.events()[0].name(), "Lane change");
    assert_eq!(copy.metadata()?.property_as_float("ambient"), 21.5);
    assert!(!copy.is_start_angle_used());
    Ok(())
}

#[test]
fn snapshot_file_roundtrip() -> Result<(), MdfError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("header.json");

    let store = MdfStore::new();
    let header = MdfHeader::new(&store, store.create_header())?;
    populate(&header)?;
    let snapshot = HeaderSnapshot::from_header(&header);

    snapshot.save_to_file(path.to_str().unwrap())?;
    let loaded = HeaderSnapshot::load_from_file(path.to_str().unwrap())?;
    assert_eq!(loaded, snapshot);
    Ok(())
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let result = HeaderSnapshot::from_json("{ \"author\": 3 }");
    assert!(matches!(result, Err(MdfError::SerializationError(_))));

    let missing = HeaderSnapshot::load_from_file("/nonexistent/dir/header.json");
    assert!(matches!(missing, Err(MdfError::IOError(_))));
}

#[test]
fn empty_metadata_snapshot_applies_cleanly() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = MdfHeader::new(&store, store.create_header())?;
    let metadata = header.create_metadata()?;
    metadata.set_xml_snippet("<old/>");

    MetaDataSnapshot::default().apply(&metadata);
    assert_eq!(metadata.xml_snippet(), "");
    assert!(metadata.common_properties().is_empty());
    Ok(())
}

#[test]
fn property_attributes_survive_json_and_apply() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = MdfHeader::new(&store, store.create_header())?;
    populate(&header)?;

    let mut snapshot = HeaderSnapshot::from_header(&header);
    let mass = ETag::from_float("mass", 1450.0)
        .with_unit("kg")
        .with_description("vehicle mass");
    snapshot.metadata.get_or_insert_with(MetaDataSnapshot::default).properties.push(mass);
    let loaded = HeaderSnapshot::from_json(&snapshot.to_json()?)?;

    let target = MdfStore::new();
    let copy = MdfHeader::new(&target, target.create_header())?;
    loaded.apply_to(&copy)?;

    let back = HeaderSnapshot::from_header(&copy);
    assert_eq!(back, loaded);
    let properties = copy.metadata()?.properties();
    assert_eq!(properties[2].unit, "kg");
    assert_eq!(properties[2].description, "vehicle mass");
    Ok(())
}

#[test]
fn unused_start_angle_clears_the_target() -> Result<(), MdfError> {
    let store = MdfStore::new();
    let header = MdfHeader::new(&store, store.create_header())?;
    header.set_start_angle(0.5);
    header.set_start_distance(3.0);

    HeaderSnapshot::default().apply_to(&header)?;
    assert!(!header.is_start_angle_used());
    assert!(!header.is_start_distance_used());
    assert_eq!(HeaderSnapshot::from_header(&header), HeaderSnapshot::default());
    Ok(())
}
