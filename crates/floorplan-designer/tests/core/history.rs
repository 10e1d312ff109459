use floorplan_core::{Point, ShapeLimits};
use floorplan_designer::{ShapeData, ShapeManager, WallData};

fn wall(y: f64) -> ShapeData {
    ShapeData::Wall(WallData::new(Point::new(0.0, y), Point::new(100.0, y), 10.0))
}

#[test]
fn test_manager_starts_without_history() {
    let manager = ShapeManager::new(ShapeLimits::default());
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_depth(), 0);
    assert_eq!(manager.redo_depth(), 0);
}

#[test]
fn test_undo_all_adds_empties_collection() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    for i in 0..5 {
        manager.add_shape("wall", wall(i as f64 * 20.0)).unwrap();
    }
    assert_eq!(manager.len(), 5);

    for _ in 0..5 {
        assert!(manager.undo().unwrap());
    }
    assert!(manager.is_empty());
    assert!(!manager.undo().unwrap());
    assert_eq!(manager.redo_depth(), 5);
}

#[test]
fn test_redo_at_tip_is_a_no_op() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    manager.add_shape("wall", wall(0.0)).unwrap();
    assert!(!manager.redo().unwrap());
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_new_command_after_undo_truncates_future() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let first = manager.add_shape("wall", wall(0.0)).unwrap();
    manager.undo().unwrap();
    assert!(manager.can_redo());

    let second = manager.add_shape("wall", wall(50.0)).unwrap();
    assert!(!manager.redo().unwrap());
    assert!(manager.shape(&first).is_none());
    assert!(manager.shape(&second).is_some());
}

#[test]
fn test_bounded_history_forgets_oldest() {
    let mut manager = ShapeManager::with_history_depth(ShapeLimits::default(), Some(3));
    for i in 0..5 {
        manager.add_shape("wall", wall(i as f64)).unwrap();
    }
    assert_eq!(manager.undo_depth(), 3);
    while manager.undo().unwrap() {}
    assert_eq!(manager.len(), 2);
}

#[test]
fn test_history_names_follow_commands() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    let id = manager.add_shape("wall", wall(0.0)).unwrap();
    manager.bring_shape_to_front(&id).unwrap();
    assert_eq!(manager.history().undo_name(), Some("Bring To Front"));
    manager.undo().unwrap();
    assert_eq!(manager.history().undo_name(), Some("Add Shape"));
    assert_eq!(manager.history().redo_name(), Some("Bring To Front"));
}

#[test]
fn test_clear_drops_shapes_and_history() {
    let mut manager = ShapeManager::new(ShapeLimits::default());
    manager.add_shape("wall", wall(0.0)).unwrap();
    manager.clear();
    assert!(manager.is_empty());
    assert!(!manager.can_undo());
}
