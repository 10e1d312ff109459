use floorplan_core::{Point, ShapeLimits};
use floorplan_designer::{
    ConnectorData, ConnectorRoute, DesignerShape, ImageShapeData, PlanFile, ShapeData,
    ShapeManager, TextShapeData, WallData,
};
use tempfile::TempDir;

fn furnished_manager() -> ShapeManager {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    manager
        .add_shape(
            "wall",
            ShapeData::Wall(WallData::new(Point::new(0.0, 0.0), Point::new(400.0, 0.0), 12.0)),
        )
        .unwrap();
    let label = manager
        .add_shape(
            "text",
            ShapeData::Text(TextShapeData::new(
                Point::new(20.0, 20.0),
                Point::new(220.0, 90.0),
                "Bedroom",
            )),
        )
        .unwrap();
    manager
        .add_shape(
            "image",
            ShapeData::Image(ImageShapeData::new(
                Point::new(0.0, 100.0),
                Point::new(300.0, 300.0),
                "survey.png",
            )),
        )
        .unwrap();
    manager
        .add_shape(
            "connector",
            ShapeData::Connector(ConnectorData::new(
                Point::new(0.0, 400.0),
                Point::new(200.0, 400.0),
                ConnectorRoute::Curved,
            )),
        )
        .unwrap();
    manager.bring_shape_to_front(&label).unwrap();
    manager
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ground.json");

    let manager = furnished_manager();
    let plan = manager.to_plan_file("Ground floor");
    plan.save_to_file(&path).unwrap();

    let loaded = PlanFile::load_from_file(&path).unwrap();
    assert_eq!(loaded, plan);

    let mut restored = ShapeManager::new(ShapeLimits::default());
    restored.load_plan_file(&loaded).unwrap();
    assert_eq!(restored.len(), 4);
    assert!(!restored.can_undo());

    let before: Vec<_> = manager.shapes().into_iter().map(|(id, s)| (id.clone(), s.data())).collect();
    let after: Vec<_> = restored.shapes().into_iter().map(|(id, s)| (id.clone(), s.data())).collect();
    assert_eq!(before, after);
}

#[test]
fn test_plan_json_is_tagged_by_shape_type() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tags.json");
    furnished_manager()
        .to_plan_file("Tags")
        .save_to_file(&path)
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let tags: Vec<&str> = value["shapes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["data"]["shapeType"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["wall", "image", "connector", "text"]);
    assert_eq!(value["version"], "1.0");
    assert!(raw.contains("\"imageData\""));
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = PlanFile::load_from_file(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read plan file"));
}

#[test]
fn test_load_replaces_existing_shapes() {
    let plan = furnished_manager().to_plan_file("Replace");
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let stale = manager
        .add_shape(
            "wall",
            ShapeData::Wall(WallData::new(Point::new(5.0, 5.0), Point::new(6.0, 6.0), 1.0)),
        )
        .unwrap();
    manager.load_plan_file(&plan).unwrap();
    assert!(manager.shape(&stale).is_none());
    assert_eq!(manager.len(), 4);
}
