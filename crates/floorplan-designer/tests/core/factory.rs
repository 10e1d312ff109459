use floorplan_core::{Error, FactoryError, Point, ShapeLimits};
use floorplan_designer::{
    Shape, ShapeData, ShapeFactory, ShapeManager, TextShapeData, Wall, WallData,
};

fn wall_data() -> ShapeData {
    ShapeData::Wall(WallData::new(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        10.0,
    ))
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut factory = ShapeFactory::new(ShapeLimits::default());
    let err = factory
        .register(
            "wall",
            Box::new(|data: ShapeData, limits: &ShapeLimits| Shape::from_data(data, *limits)),
        )
        .unwrap_err();
    assert_eq!(
        err,
        FactoryError::DuplicateType {
            type_tag: "wall".to_string()
        }
    );
    // The original constructor is still in place
    assert!(factory.create("wall", wall_data()).is_ok());
}

#[test]
fn test_unknown_type_is_a_configuration_error() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let err = manager.add_shape("staircase", wall_data()).unwrap_err();
    assert!(err.is_configuration_error());
    assert!(matches!(
        err,
        Error::Factory(FactoryError::UnknownType { ref type_tag }) if type_tag == "staircase"
    ));
    assert!(manager.is_empty());
    assert!(!manager.can_undo());
}

#[test]
fn test_factory_applies_limits() {
    let limits = ShapeLimits {
        text_min_width: 300.0,
        ..ShapeLimits::default()
    };
    let factory = ShapeFactory::new(limits);
    let data = TextShapeData::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), "Lobby");
    let shape = factory.create("text", ShapeData::Text(data)).unwrap();
    assert_eq!(shape.as_text().unwrap().width(), 300.0);
}

#[test]
fn test_invalid_wall_thickness_is_rejected() {
    let factory = ShapeFactory::new(ShapeLimits::default());
    let data = WallData::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.0);
    assert!(factory.create("wall", ShapeData::Wall(data.clone())).is_err());
    assert!(Wall::new(data, ShapeLimits::default()).is_err());
}
