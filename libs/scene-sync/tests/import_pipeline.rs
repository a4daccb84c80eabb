//! End-to-end: CSV payload → store → rebuild → in-memory scene.

use approx::assert_relative_eq;
use scene_io::{decode_rows, encode_rows, export_json, ImportError};
use scene_model::SceneConfig;
use scene_sync::{GeometryStore, MemoryBackend, SceneSynchronizer};

const PAYLOAD: &str = "\
name,type,position_x,position_y,position_z,size_x,size_y,size_z,color
Roof,triangle,0,0,0,2,2,0,#ff0000
Wall,rectangle,3,0,0,1.5,1,0,#00ff00
broken,cube,1
Crate,cube,0,3,0,1,1,1,#0000ff
Wheel,circle,3,3,0,1,0,0,#ffff00
";

#[tokio::test]
async fn test_import_replaces_store_and_rebuilds() {
    let mut store = GeometryStore::new(SceneConfig::example());
    let synchronizer = SceneSynchronizer::new(MemoryBackend::new());
    synchronizer.sync(&store).await.unwrap();

    let report = decode_rows(PAYLOAD).unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert!(store.replace_all(report.records));

    let sync = synchronizer.sync(&store).await.unwrap();
    assert_eq!(sync.added, 4);

    let backend = synchronizer.into_backend();
    let names: Vec<_> = backend.primitives().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Roof", "Wall", "Crate", "Wheel"]);
    let wheel = backend.primitive(3).unwrap();
    assert_eq!(wheel.geometry.triangle_count(), 16);
    // center vertex, then the first perimeter vertex one radius along +X
    assert_relative_eq!(wheel.geometry.positions[0], 3.0);
    assert_relative_eq!(wheel.geometry.positions[3], 4.0);
    assert_relative_eq!(wheel.geometry.positions[4], 3.0);
    assert_eq!(backend.primitive(3).unwrap().properties["source"], "csv_import");
    assert_eq!(backend.redraw_count(), 2);
}

#[tokio::test]
async fn test_empty_import_leaves_store_alone() {
    let mut store = GeometryStore::new(SceneConfig::example());
    let header_only = "name,type,position_x,position_y,position_z,size_x,size_y,size_z,color\n";

    match decode_rows(header_only) {
        Err(ImportError::EmptyImportPayload) => {}
        other => panic!("expected empty payload, got {other:?}"),
    }
    assert_eq!(store.len(), 4);

    assert!(!store.replace_all(Vec::new()));
    assert_eq!(store.len(), 4);
}

#[test]
fn test_csv_export_reimports() {
    let store = GeometryStore::new(SceneConfig::example());
    let csv = encode_rows(store.records());
    let back = decode_rows(&csv).unwrap().records;

    assert_eq!(back.len(), store.len());
    for (a, b) in store.records().iter().zip(&back) {
        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.name, b.name);
        assert_eq!(a.color, b.color);
    }
}

#[test]
fn test_json_export_of_store() {
    let store = GeometryStore::new(SceneConfig::example());
    let json = export_json(store.scene()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["geometries"][3]["type"], "circle");
    assert_eq!(value["scene"]["geometries"][3]["radius"], 1.0);
}
