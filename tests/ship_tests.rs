use battleships::{Orientation, Ship, ShipName, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};

#[test]
fn test_fleet_sizes() {
    let sizes: Vec<_> = FLEET.iter().map(|s| s.size()).collect();
    assert_eq!(sizes, vec![1, 2, 3, 4, 5]);
    assert_eq!(FLEET.len(), NUM_SHIPS);
    assert_eq!(sizes.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_display_names() {
    assert_eq!(ShipName::Tug.to_string(), "Tug");
    assert_eq!(ShipName::AircraftCarrier.display_name(), "Aircraft Carrier");
    assert_eq!(ShipName::AircraftCarrier.to_string(), "Aircraft Carrier");
}

#[test]
fn test_new_ship_is_undeployed() {
    let ship = Ship::new(ShipName::Submarine);
    assert_eq!(ship.name(), ShipName::Submarine);
    assert_eq!(ship.size(), 2);
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_deployed());
    assert!(!ship.is_destroyed());
    assert!(ship.tiles().is_empty());
    assert_eq!(ship.anchor(), None);
    assert!(!ship.contains(0, 0));
}

#[test]
fn test_orientation_equality() {
    assert_ne!(Orientation::Horizontal, Orientation::Vertical);
}
