use crate::collision::layout::{
    overlap_area, validate_layout, EquipmentPosition, EquipmentSpec, Footprint, LayoutError,
};
use crate::error::ErrorKind;
use std::collections::HashMap;

fn catalog() -> HashMap<String, EquipmentSpec> {
    let mut catalog = HashMap::new();
    catalog.insert(
        "table-saw".to_string(),
        EquipmentSpec { name: "Cabinet Table Saw".to_string(), width_ft: 4.0, depth_ft: 4.0 },
    );
    catalog.insert(
        "bench".to_string(),
        EquipmentSpec { name: "Workbench".to_string(), width_ft: 6.0, depth_ft: 2.0 },
    );
    catalog
}

#[test]
fn test_overlap_area_offset_on_x() {
    let a = Footprint::new([0.0, 0.0], 4.0, 4.0);
    let b = Footprint::new([2.0, 0.0], 4.0, 4.0);
    assert!(a.overlaps(&b));
    assert!((overlap_area(&a, &b) - 8.0).abs() < 1e-9);
}

#[test]
fn test_overlap_area_disjoint_is_zero() {
    let a = Footprint::new([0.0, 0.0], 4.0, 4.0);
    let b = Footprint::new([10.0, 0.0], 4.0, 4.0);
    assert!(!a.overlaps(&b));
    assert_eq!(overlap_area(&a, &b), 0.0);

    // Edge contact
    let c = Footprint::new([4.0, 0.0], 4.0, 4.0);
    assert!(!a.overlaps(&c));
}

#[test]
fn test_empty_layout_is_valid() {
    let report = validate_layout(&[], &catalog()).unwrap();
    assert!(report.is_valid);
    assert!(!report.has_collisions);
    assert_eq!(report.collision_count, 0);
    assert!(report.collisions.is_empty());
    assert_eq!(report.message, "No collisions detected");
}

#[test]
fn test_reports_overlap_with_names() {
    let positions = vec![
        EquipmentPosition::new("table-saw", 0.0, 0.0).with_size(4.0, 4.0),
        EquipmentPosition::new("table-saw", 2.0, 0.0).with_id("saw-2").with_size(4.0, 4.0),
        EquipmentPosition::new("bench", 20.0, 20.0),
    ];
    let report = validate_layout(&positions, &catalog()).unwrap();

    assert!(!report.is_valid);
    assert!(report.has_collisions);
    assert_eq!(report.collision_count, 1);
    assert_eq!(report.message, "Found 1 collision");

    let hit = &report.collisions[0];
    assert_eq!(hit.item1_id, "table-saw");
    assert_eq!(hit.item2_id, "saw-2");
    assert_eq!(hit.item1_name, "Cabinet Table Saw");
    assert_eq!(hit.item2_name, "Cabinet Table Saw");
    assert!((hit.overlap_area - 8.0).abs() < 1e-9);
}

#[test]
fn test_orientation_is_ignored() {
    // A 6x2 bench rotated 90 degrees would clear the saw; unrotated bounds still overlap
    let positions = vec![
        EquipmentPosition::new("table-saw", 0.0, 0.0),
        EquipmentPosition::new("bench", 4.5, 0.0).with_orientation(90.0),
    ];
    let report = validate_layout(&positions, &catalog()).unwrap();
    assert_eq!(report.collision_count, 1);
    // x overlap: saw [-2, 2], bench [1.5, 7.5] -> 0.5; y overlap: 2
    assert!((report.collisions[0].overlap_area - 1.0).abs() < 1e-9);
}

#[test]
fn test_catalog_dimensions_used_when_position_has_none() {
    let positions = vec![
        EquipmentPosition::new("bench", 0.0, 0.0),
        EquipmentPosition::new("bench", 0.0, 1.5),
    ];
    let report = validate_layout(&positions, &catalog()).unwrap();
    assert_eq!(report.collision_count, 1);
    // 6 wide fully shared, 0.5 of the 2 ft depth shared
    assert!((report.collisions[0].overlap_area - 3.0).abs() < 1e-9);
}

#[test]
fn test_unknown_equipment_fails_whole_call() {
    let positions = vec![
        EquipmentPosition::new("table-saw", 0.0, 0.0),
        EquipmentPosition::new("table-saw", 1.0, 0.0),
        EquipmentPosition::new("spindle-sander", 30.0, 0.0),
    ];
    let err = validate_layout(&positions, &catalog()).unwrap_err();
    assert_eq!(err, LayoutError::EquipmentNotFound("spindle-sander".to_string()));
    assert_eq!(err.kind(), ErrorKind::ReferenceNotFound);
}

#[test]
fn test_non_positive_dimensions_rejected() {
    let positions = vec![EquipmentPosition::new("bench", 0.0, 0.0).with_size(0.0, 2.0)];
    let err = validate_layout(&positions, &catalog()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDimensions { .. }));
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_plural_message() {
    let positions = vec![
        EquipmentPosition::new("table-saw", 0.0, 0.0).with_id("a"),
        EquipmentPosition::new("table-saw", 1.0, 0.0).with_id("b"),
        EquipmentPosition::new("table-saw", 2.0, 0.0).with_id("c"),
    ];
    let report = validate_layout(&positions, &catalog()).unwrap();
    assert_eq!(report.collision_count, 3);
    assert_eq!(report.message, "Found 3 collisions");
}

#[test]
fn test_position_json_shape() {
    let json = r#"[
        {"equipmentId": "table-saw", "x": 0, "y": 0, "orientationDegrees": 45, "widthFt": 4, "depthFt": 4},
        {"equipmentId": "bench", "x": 1, "y": 1}
    ]"#;
    let positions: Vec<EquipmentPosition> = serde_json::from_str(json).unwrap();
    assert_eq!(positions[0].orientation_degrees, 45.0);
    assert_eq!(positions[1].width_ft, None);

    let report = validate_layout(&positions, &catalog()).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["isValid"], false);
    assert_eq!(value["collisionCount"], 1);
    assert_eq!(value["collisions"][0]["item1Name"], "Cabinet Table Saw");
}
