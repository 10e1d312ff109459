use floorplan_core::{Point, ShapeError, ShapeLimits};
use floorplan_designer::{
    Connector, ConnectorData, ConnectorRoute, DesignerShape, DrawPrimitive, ImageShape,
    ImageShapeData, Shape, ShapeData, TextShape, TextShapeData, Wall, WallData,
};

fn all_shapes() -> Vec<Shape> {
    let limits = ShapeLimits::default();
    vec![
        Shape::from_data(
            ShapeData::Wall(WallData::new(Point::new(10.0, 20.0), Point::new(110.0, 70.0), 8.0)),
            limits,
        )
        .unwrap(),
        Shape::from_data(
            ShapeData::Text(TextShapeData::new(
                Point::new(0.0, 0.0),
                Point::new(240.0, 120.0),
                "Study",
            )),
            limits,
        )
        .unwrap(),
        Shape::from_data(
            ShapeData::Image(ImageShapeData::new(
                Point::new(50.0, 50.0),
                Point::new(150.0, 130.0),
                "tile.png",
            )),
            limits,
        )
        .unwrap(),
        Shape::from_data(
            ShapeData::Connector(ConnectorData::new(
                Point::new(0.0, 0.0),
                Point::new(80.0, 60.0),
                ConnectorRoute::Straight,
            )),
            limits,
        )
        .unwrap(),
    ]
}

#[test]
fn test_handles_lie_within_bounds() {
    for shape in all_shapes() {
        let bounds = shape.bounds().unwrap();
        for handle in shape.handles() {
            assert!(
                bounds.contains_point(&handle),
                "{} handle {:?} outside {:?}",
                shape.kind(),
                handle,
                bounds
            );
        }
    }
}

#[test]
fn test_capture_then_restore_is_identity() {
    for mut shape in all_shapes() {
        shape.capture_state();
        let snapshot = shape.data();
        shape.move_to(Point::new(0.0, 0.0), Point::new(35.0, -15.0));
        assert_ne!(shape.data(), snapshot);
        shape.restore_state(snapshot.clone()).unwrap();
        assert_eq!(shape.data(), snapshot);
    }
}

#[test]
fn test_restore_with_other_kind_is_rejected() {
    let mut shapes = all_shapes();
    let text_data = shapes[1].data();
    let err = shapes[0].restore_state(text_data).unwrap_err();
    assert!(matches!(err, ShapeError::DataMismatch { .. }));
}

#[test]
fn test_move_is_relative_to_baseline() {
    let data = WallData::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0);
    let mut wall = Wall::new(data, ShapeLimits::default()).unwrap();
    wall.capture_state();
    wall.move_to(Point::new(10.0, 10.0), Point::new(20.0, 10.0));
    wall.move_to(Point::new(10.0, 10.0), Point::new(30.0, 15.0));
    assert_eq!(wall.start(), Point::new(20.0, 5.0));
    assert_eq!(wall.end(), Point::new(120.0, 5.0));
    assert_eq!(wall.position(), Point::new(70.0, 5.0));
}

#[test]
fn test_wall_handle_moves_one_endpoint() {
    let data = WallData::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0);
    let mut wall = Wall::new(data, ShapeLimits::default()).unwrap();
    wall.update_handle(1, Point::new(100.0, 60.0)).unwrap();
    assert_eq!(wall.start(), Point::new(0.0, 0.0));
    assert_eq!(wall.end(), Point::new(100.0, 60.0));
    assert_eq!(wall.position(), Point::new(50.0, 30.0));
}

#[test]
fn test_text_minimum_size_at_construction() {
    let limits = ShapeLimits::default();
    let small = TextShapeData::new(Point::new(40.0, 40.0), Point::new(50.0, 45.0), "WC");
    let text = TextShape::new(small, limits).unwrap();
    assert_eq!(text.width(), limits.text_min_width);
    assert_eq!(text.height(), limits.text_min_height);
    assert_eq!(text.geometry().top_left, Point::new(40.0, 40.0));
}

#[test]
fn test_image_is_not_held_to_text_minimum() {
    let data = ImageShapeData::new(Point::new(0.0, 0.0), Point::new(30.0, 20.0), "icon.png");
    let image = ImageShape::new(data, ShapeLimits::default()).unwrap();
    assert_eq!(image.geometry().width(), 30.0);
    assert_eq!(image.image().height, 20.0);
}

#[test]
fn test_curved_connector_bounds_include_control_point() {
    let data = ConnectorData::new(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        ConnectorRoute::Curved,
    );
    let connector = Connector::new(data, ShapeLimits::default()).unwrap();
    let control = connector.control_point().unwrap();
    assert_eq!(control, Point::new(50.0, 20.0));
    assert_eq!(connector.bounds().unwrap().end, Point::new(100.0, 20.0));
}

#[test]
fn test_selection_adds_handle_overlay() {
    // Connectors draw the same with or without selection
    for shape in all_shapes().into_iter().filter(|s| s.kind() != "connector") {
        let mut plain: Vec<DrawPrimitive> = Vec::new();
        shape.render(&mut plain);

        let mut selected_shape = shape.clone();
        selected_shape.set_selected(true);
        let mut selected: Vec<DrawPrimitive> = Vec::new();
        selected_shape.render(&mut selected);

        assert!(!plain.is_empty());
        assert!(selected.len() > plain.len(), "{} draws no handles", shape.kind());
    }
}

#[test]
fn test_image_renders_its_source() {
    let data = ImageShapeData::new(Point::new(10.0, 10.0), Point::new(110.0, 60.0), "logo.png");
    let image = ImageShape::new(data, ShapeLimits::default()).unwrap();
    let mut out: Vec<DrawPrimitive> = Vec::new();
    image.render(&mut out);
    assert!(out.iter().any(|p| matches!(
        p,
        DrawPrimitive::Image { src, width, .. } if src == "logo.png" && *width == 100.0
    )));
}

#[test]
fn test_restore_rederives_position_from_geometry() {
    let limits = ShapeLimits::default();
    let data = TextShapeData::new(Point::new(0.0, 0.0), Point::new(200.0, 100.0), "Hall");
    let mut text = TextShape::new(data.clone(), limits).unwrap();

    let mut bogus = data;
    bogus.common.position = Point::new(999.0, 999.0);
    text.restore_state(ShapeData::Text(bogus)).unwrap();

    assert_eq!(text.position(), Point::new(100.0, 50.0));
    let handles = text.handles();
    assert_eq!(handles[1], Point::new(100.0, 0.0));
    assert_eq!(handles[3], Point::new(200.0, 50.0));

    let mut wall = Wall::new(
        WallData::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0),
        limits,
    )
    .unwrap();
    let mut moved = WallData::new(Point::new(0.0, 40.0), Point::new(60.0, 40.0), 10.0);
    moved.common.position = Point::new(-5.0, -5.0);
    wall.restore_state(ShapeData::Wall(moved)).unwrap();
    assert_eq!(wall.position(), Point::new(30.0, 40.0));
}

#[test]
fn test_restore_normalizes_inverted_corners() {
    let limits = ShapeLimits::default();
    let data = ImageShapeData::new(Point::new(0.0, 0.0), Point::new(100.0, 80.0), "door.png");
    let mut image = ImageShape::new(data.clone(), limits).unwrap();

    let mut inverted = data;
    inverted.geometry.top_left = Point::new(100.0, 80.0);
    inverted.geometry.bottom_right = Point::new(0.0, 0.0);
    image.restore_state(ShapeData::Image(inverted)).unwrap();

    let bounds = image.bounds().unwrap();
    assert_eq!(bounds.start, Point::new(0.0, 0.0));
    assert_eq!(bounds.end, Point::new(100.0, 80.0));
    assert!(image.is_point_inside(Point::new(50.0, 40.0)));
    for handle in image.handles() {
        assert!(bounds.contains_point(&handle));
    }
}
