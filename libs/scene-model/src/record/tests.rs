use super::*;
use config::constants::IDENTITY_TRANSFORM;

#[test]
fn test_kind_parsing_is_case_insensitive() {
    assert_eq!(" Triangle ".parse::<GeometryKind>().unwrap(), GeometryKind::Triangle);
    assert_eq!("RECTANGLE".parse::<GeometryKind>().unwrap(), GeometryKind::Rectangle);
    assert_eq!("circle".parse::<GeometryKind>().unwrap(), GeometryKind::Circle);
}

#[test]
fn test_unknown_kind_is_unsupported() {
    let err = "sphere".parse::<GeometryKind>().unwrap_err();
    assert_eq!(err, ModelError::unsupported_kind("sphere"));
}

#[test]
fn test_shape_from_size_per_kind() {
    assert_eq!(
        Shape::from_size(GeometryKind::Triangle, [2.0, 3.0, 9.0]),
        Shape::triangle(2.0, 3.0)
    );
    assert_eq!(
        Shape::from_size(GeometryKind::Cube, [1.0, 2.0, 3.0]),
        Shape::cube(1.0, 2.0, 3.0)
    );
    assert_eq!(
        Shape::from_size(GeometryKind::Circle, [1.5, 7.0, 7.0]),
        Shape::circle(1.5)
    );
}

#[test]
fn test_size_zeroes_unused_components() {
    assert_eq!(Shape::rectangle(2.0, 3.0).size(), [2.0, 3.0, 0.0]);
    assert_eq!(Shape::circle(1.0).size(), [1.0, 0.0, 0.0]);
}

#[test]
fn test_record_id_format() {
    let record = GeometryRecord::new(Shape::cube(1.0, 1.0, 1.0), [0.0; 3]);
    let parts: Vec<&str> = record.id().split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "cube");
    assert!(parts[1].parse::<i64>().is_ok());
    assert_eq!(parts[2].len(), RECORD_ID_SUFFIX_LEN);
    assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn test_record_ids_are_unique() {
    let a = GeometryRecord::new(Shape::circle(1.0), [0.0; 3]);
    let b = GeometryRecord::new(Shape::circle(1.0), [0.0; 3]);
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_record_defaults() {
    let record = GeometryRecord::new(Shape::triangle(1.0, 1.0), [1.0, 2.0, 3.0]);
    assert_eq!(record.color, Rgb::new(255, 0, 0));
    assert_eq!(record.material_name(), "basic");
    assert_eq!(record.transform(), Transform::from_row_major(IDENTITY_TRANSFORM));
    assert!(record.properties.is_empty());
}

#[test]
fn test_from_kind_name() {
    let record = GeometryRecord::from_kind_name("cube", [0.0; 3], [1.0, 2.0, 3.0]).unwrap();
    assert_eq!(record.kind(), GeometryKind::Cube);
    assert_eq!(record.size(), [1.0, 2.0, 3.0]);

    assert!(GeometryRecord::from_kind_name("cone", [0.0; 3], [1.0; 3]).is_err());
}

#[test]
fn test_merge_properties_record_wins() {
    let global = BTreeMap::from([
        ("type".to_string(), "example".to_string()),
        ("priority".to_string(), "low".to_string()),
    ]);
    let local = BTreeMap::from([("priority".to_string(), "high".to_string())]);

    let merged = merge_properties(&global, &local);
    assert_eq!(merged["type"], "example");
    assert_eq!(merged["priority"], "high");
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_json_shape_is_tagged_and_camel_case() {
    let record = GeometryRecord::new(Shape::rectangle(2.0, 1.0), [0.0; 3])
        .with_transform(Transform::translation(1.0, 0.0, 0.0));
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["type"], "rectangle");
    assert_eq!(value["width"], 2.0);
    assert!(value.get("transformMatrix").is_some());
    assert!(value.get("name").is_none());

    let back: GeometryRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}
