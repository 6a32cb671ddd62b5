use myway_core::{ClassEntry, ClassTime, Modality, Task, Weekday};
use serde_json::{json, Value};
use uuid::Uuid;

#[test]
fn task_serializes_with_flat_field_names() {
    let id = Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap();
    let task = Task::with_id(id, "Essay draft");

    let value = serde_json::to_value(&task).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["completed", "id", "text"]);
    assert_eq!(object["id"], json!(id.to_string()));
    assert_eq!(object["text"], json!("Essay draft"));
    assert_eq!(object["completed"], json!(false));
}

#[test]
fn task_deserializes_from_the_wire_shape() {
    let value = json!({
        "id": "00000000-0000-4000-8000-000000000002",
        "text": "Submit lab",
        "completed": true
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.text, "Submit lab");
    assert!(task.completed);
}

#[test]
fn class_entry_uses_camel_case_times() {
    let entry = ClassEntry::new(
        "Seminar",
        ClassTime::parse("16:00").unwrap(),
        ClassTime::parse("17:30").unwrap(),
        Modality::Online,
    );

    let value = serde_json::to_value(&entry).unwrap();
    let object = value.as_object().unwrap();

    assert!(object.contains_key("startTime"));
    assert!(object.contains_key("endTime"));
    assert!(!object.contains_key("start_time"));
    assert_eq!(object["startTime"], json!("16:00"));
    assert_eq!(object["endTime"], json!("17:30"));
}

#[test]
fn modality_serializes_to_display_strings() {
    assert_eq!(serde_json::to_value(Modality::Online).unwrap(), json!("Online"));
    assert_eq!(
        serde_json::to_value(Modality::InPerson).unwrap(),
        json!("In-Person")
    );

    let parsed: Modality = serde_json::from_value(json!("In-Person")).unwrap();
    assert_eq!(parsed, Modality::InPerson);
}

#[test]
fn class_time_rejects_invalid_values_in_payloads() {
    let bad_start: Value = json!({
        "id": "00000000-0000-4000-8000-000000000003",
        "course": "Algebra",
        "startTime": "9:05",
        "endTime": "10:00",
        "modality": "Online"
    });
    assert!(serde_json::from_value::<ClassEntry>(bad_start).is_err());

    assert!(serde_json::from_str::<ClassTime>("\"24:00\"").is_err());
    assert!(serde_json::from_str::<ClassTime>("\"12:00\"").is_ok());
}

#[test]
fn weekday_storage_keys_round_trip_through_parse() {
    for day in Weekday::ALL {
        assert_eq!(Weekday::parse(day.storage_key()), Some(day));
    }

    assert_eq!(Weekday::parse("MONDAY"), Some(Weekday::Monday));
    assert_eq!(Weekday::parse(" friday "), Some(Weekday::Friday));
    assert_eq!(Weekday::parse("someday"), None);
}

#[test]
fn weekday_serializes_as_its_name() {
    assert_eq!(serde_json::to_value(Weekday::Wednesday).unwrap(), json!("Wednesday"));
}
