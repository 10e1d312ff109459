use std::cell::RefCell;
use std::rc::Rc;

use floorplan_core::{Bounds, CommandError, Error, Point, ShapeId, ShapeLimits};
use floorplan_designer::{
    ConnectorData, ConnectorRoute, DesignerShape, ImageShapeData, ShapeData, ShapeEventType,
    ShapeManager, TextShapeData, WallData,
};

fn wall(start: (f64, f64), end: (f64, f64), thickness: f64) -> ShapeData {
    ShapeData::Wall(WallData::new(
        Point::new(start.0, start.1),
        Point::new(end.0, end.1),
        thickness,
    ))
}

fn ids(found: Vec<(&ShapeId, &floorplan_designer::Shape)>) -> Vec<ShapeId> {
    found.into_iter().map(|(id, _)| id.clone()).collect()
}

#[test]
fn test_add_keeps_supplied_id() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let mut data = WallData::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0);
    data.common.id = Some(ShapeId::from("north-wall"));
    let id = manager.add_shape("wall", ShapeData::Wall(data)).unwrap();
    assert_eq!(id, ShapeId::from("north-wall"));

    let again = WallData::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0);
    let mut again = ShapeData::Wall(again);
    again.common_mut().id = Some(id.clone());
    let err = manager.add_shape("wall", again).unwrap_err();
    assert!(matches!(err, Error::Command(CommandError::ShapeExists { .. })));
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_added_shape_gets_creation_metadata() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let id = manager.add_shape("wall", wall((0.0, 0.0), (10.0, 0.0), 2.0)).unwrap();
    let data = manager.shape(&id).unwrap().data();
    let metadata = data.common().metadata.as_ref().unwrap();
    assert!(metadata.created_at.is_some());
}

#[test]
fn test_remove_with_unknown_id_removes_nothing() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let id = manager.add_shape("wall", wall((0.0, 0.0), (10.0, 0.0), 2.0)).unwrap();

    let err = manager
        .remove_shapes(&[id.clone(), ShapeId::from("ghost")])
        .unwrap_err();
    assert!(err.is_precondition_error());
    assert!(manager.shape(&id).is_some());
    assert_eq!(manager.undo_depth(), 1);
}

#[test]
fn test_remove_undo_restores_stacking() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let a = manager.add_shape("wall", wall((0.0, 0.0), (10.0, 0.0), 2.0)).unwrap();
    let b = manager.add_shape("wall", wall((0.0, 5.0), (10.0, 5.0), 2.0)).unwrap();
    let c = manager.add_shape("wall", wall((0.0, 9.0), (10.0, 9.0), 2.0)).unwrap();
    manager.bring_shape_to_front(&a).unwrap();

    manager.remove_shapes(&[a.clone(), b.clone()]).unwrap();
    assert_eq!(ids(manager.shapes()), vec![c.clone()]);
    manager.undo().unwrap();
    assert_eq!(ids(manager.shapes()), vec![b, c, a]);
}

#[test]
fn test_find_shapes_at_point_in_z_order() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let low = manager
        .add_shape(
            "text",
            ShapeData::Text(TextShapeData::new(
                Point::new(0.0, 0.0),
                Point::new(200.0, 100.0),
                "Living",
            )),
        )
        .unwrap();
    let high = manager.add_shape("wall", wall((0.0, 50.0), (200.0, 50.0), 10.0)).unwrap();
    let _far = manager.add_shape("wall", wall((500.0, 0.0), (600.0, 0.0), 10.0)).unwrap();

    assert_eq!(
        ids(manager.find_shapes_at_point(Point::new(100.0, 52.0))),
        vec![low.clone(), high.clone()]
    );

    manager.bring_shape_to_front(&low).unwrap();
    assert_eq!(
        ids(manager.find_shapes_at_point(Point::new(100.0, 52.0))),
        vec![high, low]
    );
    assert!(manager.find_shapes_at_point(Point::new(300.0, 300.0)).is_empty());
}

#[test]
fn test_bring_several_to_front_in_argument_order() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let a = manager.add_shape("wall", wall((0.0, 0.0), (10.0, 0.0), 2.0)).unwrap();
    let b = manager.add_shape("wall", wall((0.0, 5.0), (10.0, 5.0), 2.0)).unwrap();
    let c = manager.add_shape("wall", wall((0.0, 9.0), (10.0, 9.0), 2.0)).unwrap();

    manager.bring_shapes_to_front(&[b.clone(), a.clone()]).unwrap();
    assert_eq!(ids(manager.shapes()), vec![c.clone(), b.clone(), a.clone()]);
    let zb = manager.shape(&b).unwrap().z_index();
    let za = manager.shape(&a).unwrap().z_index();
    assert_eq!(za, zb + 1);

    manager.undo().unwrap();
    assert_eq!(ids(manager.shapes()), vec![a, b, c]);
}

#[test]
fn test_box_selection_left_to_right_requires_containment() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let inside = manager.add_shape("wall", wall((10.0, 10.0), (90.0, 10.0), 5.0)).unwrap();
    let partial = manager.add_shape("wall", wall((50.0, 50.0), (150.0, 50.0), 5.0)).unwrap();

    let ltr = Bounds::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    assert_eq!(ids(manager.shapes_like_revit(&ltr)), vec![inside.clone()]);

    let rtl = Bounds::new(Point::new(100.0, 100.0), Point::new(0.0, 0.0));
    assert_eq!(ids(manager.shapes_like_revit(&rtl)), vec![inside, partial]);
}

#[test]
fn test_box_selection_outside_everything_is_empty() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    manager.add_shape("wall", wall((10.0, 10.0), (90.0, 10.0), 5.0)).unwrap();
    let ltr = Bounds::new(Point::new(500.0, 500.0), Point::new(600.0, 600.0));
    assert!(manager.shapes_like_revit(&ltr).is_empty());
}

#[test]
fn test_events_follow_lifecycle() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let sink = Rc::clone(&events);
    let subscription = manager.subscribe(move |e| sink.borrow_mut().push((e.kind, e.shape_id.clone())));

    let id = manager.add_shape("wall", wall((0.0, 0.0), (10.0, 0.0), 2.0)).unwrap();
    manager.select_shapes(&[id.clone()]);
    manager.deselect_all();
    manager.remove_shapes(&[id.clone()]).unwrap();
    manager.undo().unwrap();

    let kinds: Vec<ShapeEventType> = events.borrow().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            ShapeEventType::Added,
            ShapeEventType::Selected,
            ShapeEventType::Deselected,
            ShapeEventType::Removed,
            ShapeEventType::Added,
        ]
    );
    assert!(events.borrow().iter().all(|(_, sid)| *sid == id));

    assert!(manager.unsubscribe(subscription));
    manager.undo().unwrap();
    assert_eq!(events.borrow().len(), 5);
}

#[test]
fn test_handle_update_on_text_box_and_undo() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let id = manager
        .add_shape(
            "text",
            ShapeData::Text(TextShapeData::new(
                Point::new(0.0, 0.0),
                Point::new(200.0, 100.0),
                "Kitchen",
            )),
        )
        .unwrap();

    // Bottom-right corner
    manager
        .update_shape_by_handle(&id, 4, Point::new(300.0, 150.0))
        .unwrap();
    let bounds = manager.shape(&id).unwrap().bounds().unwrap();
    assert_eq!(bounds.end, Point::new(300.0, 150.0));
    assert_eq!(manager.shape(&id).unwrap().position(), Point::new(150.0, 75.0));

    manager.undo().unwrap();
    let bounds = manager.shape(&id).unwrap().bounds().unwrap();
    assert_eq!(bounds.end, Point::new(200.0, 100.0));
    manager.redo().unwrap();
    let bounds = manager.shape(&id).unwrap().bounds().unwrap();
    assert_eq!(bounds.end, Point::new(300.0, 150.0));
}

#[test]
fn test_invalid_handle_index_is_reported() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let id = manager.add_shape("wall", wall((0.0, 0.0), (10.0, 0.0), 2.0)).unwrap();
    let err = manager
        .update_shape_by_handle(&id, 5, Point::new(0.0, 0.0))
        .unwrap_err();
    assert!(err.is_precondition_error());
    assert_eq!(manager.undo_depth(), 1);
}

#[test]
fn test_connector_and_image_live_alongside_walls() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let image = manager
        .add_shape(
            "image",
            ShapeData::Image(ImageShapeData::new(
                Point::new(0.0, 0.0),
                Point::new(400.0, 300.0),
                "site.png",
            )),
        )
        .unwrap();
    let link = manager
        .add_shape(
            "connector",
            ShapeData::Connector(ConnectorData::new(
                Point::new(0.0, 500.0),
                Point::new(100.0, 500.0),
                ConnectorRoute::Straight,
            )),
        )
        .unwrap();

    assert_eq!(ids(manager.find_shapes_at_point(Point::new(50.0, 503.0))), vec![link]);
    assert_eq!(ids(manager.find_shapes_at_point(Point::new(200.0, 150.0))), vec![image]);
}

#[test]
fn test_move_commit_skips_removed_shapes() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let a = manager.add_shape("wall", wall((0.0, 0.0), (10.0, 0.0), 2.0)).unwrap();
    manager
        .update_shapes_position(&[a.clone(), ShapeId::from("gone")])
        .unwrap();
    assert_eq!(manager.undo_depth(), 2);
    manager.undo().unwrap();
    assert_eq!(manager.shape(&a).unwrap().handles()[1], Point::new(10.0, 0.0));
}

#[test]
fn test_empty_targets_leave_history_alone() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let kept = manager.add_shape("wall", wall((0.0, 0.0), (10.0, 0.0), 2.0)).unwrap();
    manager.add_shape("wall", wall((0.0, 50.0), (10.0, 50.0), 2.0)).unwrap();
    manager.undo().unwrap();
    assert_eq!((manager.undo_depth(), manager.redo_depth()), (1, 1));

    manager.remove_shapes(&[]).unwrap();
    manager.update_shapes_position(&[]).unwrap();
    manager
        .update_shapes_position(&[ShapeId::from("gone")])
        .unwrap();
    manager.bring_shapes_to_front(&[]).unwrap();

    assert_eq!((manager.undo_depth(), manager.redo_depth()), (1, 1));
    assert!(manager.redo().unwrap());
    assert_eq!(manager.len(), 2);
    assert!(manager.shape(&kept).is_some());
}
