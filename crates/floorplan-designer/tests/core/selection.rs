use floorplan_core::{Point, ShapeLimits};
use floorplan_designer::selection::{
    ConnectorSelection, RectangularSelection, SelectionStrategy, WallSelection,
};
use floorplan_designer::{
    Connector, ConnectorData, ConnectorRoute, DesignerShape, ImageShape, ImageShapeData,
    TextShape, TextShapeData, Wall, WallData,
};

fn wall() -> Wall {
    let data = WallData::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 20.0);
    Wall::new(data, ShapeLimits::default()).unwrap()
}

#[test]
fn test_wall_thickness_band() {
    let w = wall();
    assert!(WallSelection.is_selected(Point::new(50.0, 5.0), &w));
    assert!(!WallSelection.is_selected(Point::new(50.0, 15.0), &w));
    assert!(w.is_point_inside(Point::new(50.0, -9.0)));
}

#[test]
fn test_diagonal_wall_band() {
    let data = WallData::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0), 10.0);
    let w = Wall::new(data, ShapeLimits::default()).unwrap();
    // 4.24 units off the diagonal
    assert!(w.is_point_inside(Point::new(47.0, 53.0)));
    // 7.07 units off the diagonal
    assert!(!w.is_point_inside(Point::new(45.0, 55.0)));
}

#[test]
fn test_text_box_edges_are_inclusive() {
    let data = TextShapeData::new(Point::new(0.0, 0.0), Point::new(200.0, 100.0), "Hall");
    let text = TextShape::new(data, ShapeLimits::default()).unwrap();
    let s = RectangularSelection;
    assert!(s.is_selected(Point::new(0.0, 30.0), &text));
    assert!(s.is_selected(Point::new(200.0, 100.0), &text));
    assert!(!s.is_selected(Point::new(120.0, 106.0), &text));
}

#[test]
fn test_image_handle_extends_hit_area() {
    let data = ImageShapeData::new(Point::new(0.0, 0.0), Point::new(100.0, 80.0), "floor.png");
    let image = ImageShape::new(data, ShapeLimits::default()).unwrap();
    // Outside the box but within the top-center handle radius
    assert!(image.is_point_inside(Point::new(50.0, -4.0)));
    assert!(!image.is_point_inside(Point::new(30.0, -4.0)));
}

#[test]
fn test_connector_threshold_follows_limits() {
    let limits = ShapeLimits {
        connector_hit_threshold: 12.0,
        ..ShapeLimits::default()
    };
    let data = ConnectorData::new(
        Point::new(0.0, 0.0),
        Point::new(0.0, 100.0),
        ConnectorRoute::Straight,
    );
    let c = Connector::new(data, limits).unwrap();
    assert!(c.is_point_inside(Point::new(11.0, 50.0)));
    assert!(!c.is_point_inside(Point::new(13.0, 50.0)));
    assert!(!ConnectorSelection::default().is_selected(Point::new(11.0, 50.0), &c));
}

#[test]
fn test_zero_length_straight_connector_is_never_hit() {
    let data = ConnectorData::new(
        Point::new(10.0, 10.0),
        Point::new(10.0, 10.0),
        ConnectorRoute::Straight,
    );
    let c = Connector::new(data, ShapeLimits::default()).unwrap();
    assert!(!c.is_point_inside(Point::new(10.0, 10.0)));
}
