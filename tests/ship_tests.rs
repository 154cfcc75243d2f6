use seabattle::{BoardError, Direction, Orientation, Position, SegmentState, Ship, ShipSpec};

fn p(x: usize, y: usize) -> Position {
    Position::new(x, y)
}

#[test]
fn test_spec_rejects_zero_length() {
    assert_eq!(
        ShipSpec::new(0, Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidLength
    );
}

#[test]
fn test_cells_follow_orientation() -> Result<(), BoardError> {
    let h = Ship::placed(ShipSpec::new(3, Orientation::Horizontal)?, p(2, 5));
    assert_eq!(h.cells().collect::<Vec<_>>(), vec![p(2, 5), p(3, 5), p(4, 5)]);

    let v = Ship::placed(ShipSpec::new(2, Orientation::Vertical)?, p(1, 1));
    assert_eq!(v.cells().collect::<Vec<_>>(), vec![p(1, 1), p(1, 2)]);
    assert_eq!(v.end(), Some(p(1, 2)));
    Ok(())
}

#[test]
fn test_unplaced_ship() -> Result<(), BoardError> {
    let ship = Ship::new(ShipSpec::new(4, Orientation::Vertical)?);
    assert_eq!(ship.anchor(), None);
    assert_eq!(ship.cells().count(), 0);
    assert!(ship.is_out_of_bounds(10));
    assert_eq!(ship.segments(), &[SegmentState::Intact; 4]);
    assert!(ship.is_mobile());
    assert!(ship.is_alive());
    Ok(())
}

#[test]
fn test_bounds() -> Result<(), BoardError> {
    let spec = ShipSpec::new(4, Orientation::Horizontal)?;
    assert!(!Ship::placed(spec, p(6, 0)).is_out_of_bounds(10));
    assert!(Ship::placed(spec, p(7, 0)).is_out_of_bounds(10));
    assert!(Ship::placed(spec, p(0, 10)).is_out_of_bounds(10));
    Ok(())
}

#[test]
fn test_hit_pins_ship_and_sinks() -> Result<(), BoardError> {
    let mut ship = Ship::placed(ShipSpec::new(2, Orientation::Horizontal)?, p(0, 0));
    assert!(!ship.hit(p(5, 5)));
    assert!(ship.is_mobile());

    assert!(ship.hit(p(1, 0)));
    assert_eq!(ship.segment_at(p(1, 0)), Some(SegmentState::Hit));
    assert_eq!(ship.segment_at(p(0, 0)), Some(SegmentState::Intact));
    assert!(!ship.is_mobile());
    assert!(ship.is_alive());

    assert!(ship.hit(p(0, 0)));
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_segment_index_ignores_other_rows() -> Result<(), BoardError> {
    let ship = Ship::placed(ShipSpec::new(3, Orientation::Vertical)?, p(4, 2));
    assert_eq!(ship.segment_index(p(4, 2)), Some(0));
    assert_eq!(ship.segment_index(p(4, 4)), Some(2));
    assert_eq!(ship.segment_index(p(4, 5)), None);
    assert_eq!(ship.segment_index(p(4, 1)), None);
    assert_eq!(ship.segment_index(p(5, 3)), None);
    Ok(())
}

#[test]
fn test_shifted_moves_along_axis() -> Result<(), BoardError> {
    let h = Ship::placed(ShipSpec::new(2, Orientation::Horizontal)?, p(0, 3));
    assert_eq!(h.shifted(Direction::Forward), Some(p(1, 3)));
    assert_eq!(h.shifted(Direction::Backward), None);

    let v = Ship::placed(ShipSpec::new(1, Orientation::Vertical)?, p(4, 4));
    assert_eq!(v.shifted(Direction::Forward), Some(p(4, 5)));
    assert_eq!(v.shifted(Direction::Backward), Some(p(4, 3)));
    Ok(())
}

#[test]
fn test_display() -> Result<(), BoardError> {
    let ship = Ship::placed(ShipSpec::new(3, Orientation::Vertical)?, p(2, 7));
    assert_eq!(ship.to_string(), "(3-deck, vertical, intact, x=2 y=7)");
    Ok(())
}

#[test]
fn test_deserialize_rejects_zero_length_spec() {
    let err = serde_json::from_str::<ShipSpec>(r#"{"length":0,"orientation":"Horizontal"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("Ship length must be positive"));

    let spec: ShipSpec =
        serde_json::from_str(r#"{"length":2,"orientation":"Vertical"}"#).unwrap();
    assert_eq!(spec, ShipSpec::new(2, Orientation::Vertical).unwrap());
}

#[test]
fn test_deserialize_rejects_segment_mismatch() {
    let json = r#"{
        "spec": {"length":3,"orientation":"Horizontal"},
        "anchor": {"x":0,"y":0},
        "segments": [],
        "mobile": true
    }"#;
    let err = serde_json::from_str::<Ship>(json).unwrap_err();
    assert!(err.to_string().contains("carries 0 segments"));
}

#[test]
fn test_deserialize_pins_damaged_ship() -> Result<(), BoardError> {
    let json = r#"{
        "spec": {"length":2,"orientation":"Horizontal"},
        "anchor": {"x":1,"y":0},
        "segments": ["Intact","Hit"],
        "mobile": true
    }"#;
    let ship: Ship = serde_json::from_str(json).unwrap();
    assert!(!ship.is_mobile());
    assert_eq!(ship.segment_at(p(2, 0)), Some(SegmentState::Hit));

    let mut placed = Ship::placed(ShipSpec::new(3, Orientation::Vertical)?, p(4, 4));
    placed.hit(p(4, 5));
    let restored: Ship = serde_json::from_str(&serde_json::to_string(&placed).unwrap()).unwrap();
    assert_eq!(restored, placed);
    Ok(())
}
