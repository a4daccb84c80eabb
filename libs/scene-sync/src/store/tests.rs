use super::*;
use scene_model::Shape;

fn record(shape: Shape) -> GeometryRecord {
    GeometryRecord::new(shape, [0.0; 3])
}

fn ids(store: &GeometryStore) -> Vec<String> {
    store.records().iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn test_add_preserves_order() {
    let mut store = GeometryStore::default();
    let a = record(Shape::triangle(1.0, 1.0));
    let b = record(Shape::cube(1.0, 1.0, 1.0));
    let expected = vec![a.id().to_string(), b.id().to_string()];

    store.add(a);
    store.add(b);
    assert_eq!(ids(&store), expected);
}

#[test]
fn test_remove_shifts_later_records() {
    let mut store = GeometryStore::new(SceneConfig::example());
    let third = store.get(2).map(|r| r.id().to_string());

    let removed = store.remove(1).unwrap();
    assert_eq!(removed.name.as_deref(), Some("Green Rectangle"));
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(1).map(|r| r.id().to_string()), third);
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let mut store = GeometryStore::new(SceneConfig::example());
    let before = ids(&store);

    assert!(store.remove(4).is_none());
    assert!(store.remove(usize::MAX).is_none());
    assert_eq!(ids(&store), before);
}

#[test]
fn test_update_replaces_wholesale() {
    let mut store = GeometryStore::new(SceneConfig::example());
    let replacement = record(Shape::circle(5.0)).with_name("Big");
    let replacement_id = replacement.id().to_string();

    let old = store.update(0, replacement).unwrap();
    assert_eq!(old.name.as_deref(), Some("Red Triangle"));
    assert_eq!(store.get(0).unwrap().id(), replacement_id);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_update_out_of_range_is_noop() {
    let mut store = GeometryStore::new(SceneConfig::example());
    let before = ids(&store);
    assert!(store.update(9, record(Shape::circle(1.0))).is_none());
    assert_eq!(ids(&store), before);
}

#[test]
fn test_clear() {
    let mut store = GeometryStore::new(SceneConfig::example());
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.scene().name, "Default Example Scene");
}

#[test]
fn test_replace_all_empty_does_not_mutate() {
    let mut store = GeometryStore::new(SceneConfig::example());
    let before = ids(&store);
    assert!(!store.replace_all(Vec::new()));
    assert_eq!(ids(&store), before);
}

#[test]
fn test_replace_all() {
    let mut store = GeometryStore::new(SceneConfig::example());
    assert!(store.replace_all(vec![record(Shape::circle(1.0))]));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_scene_metadata() {
    let mut store = GeometryStore::default();
    store.set_name("Imported");
    store.set_description("From a file");
    store.set_global_property("owner", "ops");
    assert_eq!(store.scene().name, "Imported");
    assert_eq!(store.scene().description.as_deref(), Some("From a file"));
    assert_eq!(store.scene().global_properties["owner"], "ops");
}

#[test]
fn test_generate_does_not_mutate() {
    let mut store = GeometryStore::new(SceneConfig::example());
    store.add(record(Shape::cube(-1.0, 1.0, 1.0)));
    let before = ids(&store);

    let report = store.generate();
    assert_eq!(report.geometries.len(), 4);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 4);
    assert_eq!(ids(&store), before);
}

#[test]
fn test_generate_uses_configured_segments() {
    let config = GlobalConfig::new(8, 64).unwrap();
    let mut store = GeometryStore::with_config(SceneConfig::default(), config);
    store.add(record(Shape::circle(1.0)));
    let report = store.generate();
    assert_eq!(report.geometries[0].mesh.triangle_count(), 8);
}
