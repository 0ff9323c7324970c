use crate::collision::{find_collisions, CacheState, CollisionBox, CollisionEngine};
use crate::geometry::{Point3, Vector3};

fn cube(size: f64) -> Vector3 {
    Vector3::new(size, size, size)
}

#[test]
fn test_coincident_boxes_collide_once() {
    let mut engine = CollisionEngine::new();
    engine.update_box("saw", Point3::origin(), cube(2.0));
    engine.update_box("planer", Point3::origin(), cube(2.0));

    let result = engine.detect_collisions();
    assert!(result.has_collision);
    assert_eq!(result.collision_count, 1);
    assert_eq!(result.colliding_pairs, vec![("saw".to_string(), "planer".to_string())]);
}

#[test]
fn test_moving_away_drops_pair() {
    let mut engine = CollisionEngine::new();
    engine.update_box("saw", Point3::origin(), cube(2.0));
    engine.update_box("planer", Point3::origin(), cube(2.0));
    assert_eq!(engine.detect_collisions().collision_count, 1);

    // Separated along z only
    engine.update_box("planer", Point3::new(0.0, 0.0, 10.0), cube(2.0));
    let result = engine.detect_collisions();
    assert!(!result.has_collision);
    assert!(result.colliding_pairs.is_empty());
    assert_eq!(result.collision_count, 0);
}

#[test]
fn test_touching_faces_do_not_collide() {
    let mut engine = CollisionEngine::new();
    engine.update_box("a", Point3::origin(), cube(2.0));
    engine.update_box("b", Point3::new(2.0, 0.0, 0.0), cube(2.0));
    assert!(!engine.detect_collisions().has_collision);
}

#[test]
fn test_mutation_invalidates_cache() {
    let mut engine = CollisionEngine::new();
    assert!(!engine.is_cache_valid());

    engine.update_box("a", Point3::origin(), cube(2.0));
    engine.detect_collisions();
    assert!(engine.is_cache_valid());

    engine.update_box("b", Point3::new(1.0, 0.0, 0.0), cube(2.0));
    assert_eq!(engine.cache_state(), &CacheState::Invalid);
    assert_eq!(engine.detect_collisions().collision_count, 1);

    engine.remove_box("b");
    assert!(!engine.is_cache_valid());
    assert_eq!(engine.detect_collisions().collision_count, 0);
}

#[test]
fn test_cached_result_reused_until_mutation() {
    let mut engine = CollisionEngine::new();
    engine.update_box("a", Point3::origin(), cube(2.0));
    engine.update_box("b", Point3::new(1.0, 0.0, 0.0), cube(2.0));

    let first = engine.detect_collisions().clone();
    assert_eq!(engine.cache_state(), &CacheState::Valid(first.clone()));
    assert_eq!(engine.detect_collisions(), &first);
}

#[test]
fn test_repeated_detection_after_each_mutation() {
    let mut engine = CollisionEngine::new();
    for i in 0..50 {
        engine.update_box(&format!("bench-{i}"), Point3::new(i as f64, 0.0, 0.0), cube(2.0));
        let result = engine.detect_collisions();
        assert_eq!(result.collision_count, i);
        assert!(engine.is_cache_valid());
    }

    // Each bench overlaps only its neighbours
    assert_eq!(engine.len(), 50);
    assert_eq!(engine.detect_collisions().collision_count, 49);
}

#[test]
fn test_remove_untracked_is_noop() {
    let mut engine = CollisionEngine::new();
    engine.update_box("a", Point3::origin(), cube(2.0));
    engine.update_box("b", Point3::origin(), cube(2.0));
    let before = engine.detect_collisions().clone();

    engine.remove_box("ghost");
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.detect_collisions(), &before);
}

#[test]
fn test_update_keeps_insertion_slot() {
    let mut engine = CollisionEngine::new();
    engine.update_box("a", Point3::origin(), cube(2.0));
    engine.update_box("b", Point3::new(50.0, 0.0, 0.0), cube(2.0));
    engine.update_box("c", Point3::origin(), cube(2.0));

    // Move "a" onto "b"; "a" still precedes "b" in discovery order
    engine.update_box("a", Point3::new(50.0, 0.0, 0.0), cube(2.0));
    assert_eq!(engine.len(), 3);
    assert_eq!(engine.boxes()[0].id, "a");
    assert_eq!(
        engine.detect_collisions().colliding_pairs,
        vec![("a".to_string(), "b".to_string())]
    );
}

#[test]
fn test_is_colliding_and_colliding_with() {
    let mut engine = CollisionEngine::new();
    engine.update_box("jointer", Point3::new(0.0, 0.0, 0.0), cube(4.0));
    engine.update_box("bandsaw", Point3::new(3.0, 0.0, 0.0), cube(4.0));
    engine.update_box("drill-press", Point3::new(-3.0, 0.0, 0.0), cube(4.0));
    engine.update_box("lathe", Point3::new(40.0, 0.0, 0.0), cube(4.0));

    assert!(engine.is_colliding("jointer"));
    assert!(engine.is_colliding("bandsaw"));
    assert!(!engine.is_colliding("lathe"));
    assert!(!engine.is_colliding("unknown"));

    assert_eq!(engine.colliding_with("jointer"), vec!["bandsaw", "drill-press"]);
    assert_eq!(engine.colliding_with("drill-press"), vec!["jointer"]);
    assert!(engine.colliding_with("unknown").is_empty());
}

#[test]
fn test_clear_resets_to_empty() {
    let mut engine = CollisionEngine::new();
    engine.update_box("a", Point3::origin(), cube(2.0));
    engine.update_box("b", Point3::origin(), cube(2.0));
    assert!(engine.detect_collisions().has_collision);

    engine.clear();
    assert!(engine.is_empty());
    assert!(!engine.is_cache_valid());
    let result = engine.detect_collisions();
    assert!(!result.has_collision);
    assert_eq!(result.collision_count, 0);
}

#[test]
fn test_non_positive_dimensions_never_collide() {
    let mut engine = CollisionEngine::new();
    engine.update_box("big", Point3::origin(), cube(10.0));
    engine.update_box("flat", Point3::origin(), Vector3::new(2.0, 0.0, 2.0));
    engine.update_box("inverted", Point3::origin(), Vector3::new(-2.0, 2.0, 2.0));
    engine.update_box("nan", Point3::origin(), Vector3::new(f64::NAN, 2.0, 2.0));

    assert!(!engine.detect_collisions().has_collision);
    let inverted = engine.get("inverted").unwrap();
    assert_eq!(inverted.half_extents, Vector3::new(0.0, 1.0, 1.0));
    assert!(inverted.is_degenerate());
}

#[test]
fn test_find_collisions_one_shot() {
    let boxes = vec![
        CollisionBox::new("a", Point3::origin(), cube(2.0)),
        CollisionBox::new("b", Point3::new(1.0, 1.0, 1.0), cube(2.0)),
        CollisionBox::new("c", Point3::new(1.5, 1.5, 1.5), cube(2.0)),
    ];
    let result = find_collisions(&boxes);
    assert_eq!(result.collision_count, 3);
    assert_eq!(
        result.colliding_pairs,
        vec![
            ("a".to_string(), "b".to_string()),
            ("a".to_string(), "c".to_string()),
            ("b".to_string(), "c".to_string()),
        ]
    );
}

#[test]
fn test_result_json_shape() {
    let mut engine = CollisionEngine::new();
    engine.update_box("a", Point3::origin(), cube(2.0));
    engine.update_box("b", Point3::origin(), cube(2.0));
    let json = serde_json::to_value(engine.detect_collisions()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "hasCollision": true,
            "collidingPairs": [["a", "b"]],
            "collisionCount": 1
        })
    );
}
