use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    collides, place, place_with_retries, standard_fleet, BoardError, Orientation,
    PlacementConfig, Ship, ShipSpec, DEFAULT_LAYOUT_RETRIES, STANDARD_FLEET,
};

fn assert_valid_layout(fleet: &[Ship], grid_size: usize) {
    for (i, ship) in fleet.iter().enumerate() {
        assert!(ship.anchor().is_some(), "ship {} has no anchor", i);
        for cell in ship.cells() {
            assert!(cell.in_bounds(grid_size), "ship {} leaves the grid at {}", i, cell);
        }
        for (j, other) in fleet.iter().enumerate().skip(i + 1) {
            assert!(!collides(ship, other), "ships {} and {} touch", i, j);
        }
    }
}

#[test]
fn test_standard_fleet_always_places() {
    let config = PlacementConfig::default();
    for seed in 0..200u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let specs = standard_fleet(&mut rng);
        let fleet = place_with_retries(&specs, &config, DEFAULT_LAYOUT_RETRIES, &mut rng)
            .unwrap_or_else(|e| panic!("seed {} failed: {}", seed, e));
        assert_eq!(fleet.len(), STANDARD_FLEET.len());
        assert_valid_layout(&fleet, config.grid_size);
    }
}

#[test]
fn test_placement_keeps_spec_order() {
    let mut rng = SmallRng::seed_from_u64(7);
    let specs = standard_fleet(&mut rng);
    let fleet = place_with_retries(&specs, &PlacementConfig::default(), 16, &mut rng).unwrap();
    for (spec, ship) in specs.iter().zip(fleet.iter()) {
        assert_eq!(ship.spec(), *spec);
        assert!(ship.is_mobile());
        assert!(ship.is_alive());
    }
}

#[test]
fn test_same_seed_same_layout() {
    let specs = standard_fleet(&mut SmallRng::seed_from_u64(1));
    let config = PlacementConfig::default();
    let a = place_with_retries(&specs, &config, 16, &mut SmallRng::seed_from_u64(99)).unwrap();
    let b = place_with_retries(&specs, &config, 16, &mut SmallRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unsatisfiable_layout_is_exhausted() {
    // Any single boat on a 2x2 grid buffers every other cell.
    let boat = ShipSpec::new(1, Orientation::Horizontal).unwrap();
    let config = PlacementConfig::new(2).with_max_attempts(50);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        place(&[boat, boat], &config, &mut rng).unwrap_err(),
        BoardError::PlacementExhausted {
            ship_index: 1,
            attempts: 50
        }
    );
    assert_eq!(
        place_with_retries(&[boat, boat], &config, 4, &mut rng).unwrap_err(),
        BoardError::PlacementExhausted {
            ship_index: 1,
            attempts: 50
        }
    );
}

#[test]
fn test_ship_longer_than_grid() {
    let spec = ShipSpec::new(5, Orientation::Vertical).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        place(&[spec], &PlacementConfig::new(4), &mut rng).unwrap_err(),
        BoardError::ShipTooLong {
            length: 5,
            grid_size: 4
        }
    );
}

#[test]
fn test_zero_grid_rejected() {
    let spec = ShipSpec::new(1, Orientation::Vertical).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        place(&[spec], &PlacementConfig::new(0), &mut rng).unwrap_err(),
        BoardError::InvalidGridSize(0)
    );
}

#[test]
fn test_full_length_ship_fits() {
    let spec = ShipSpec::new(6, Orientation::Horizontal).unwrap();
    let mut rng = SmallRng::seed_from_u64(11);
    let fleet = place(&[spec], &PlacementConfig::new(6), &mut rng).unwrap();
    assert_eq!(fleet[0].anchor().map(|a| a.x), Some(0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_layouts_are_valid(seed in any::<u64>(), grid_size in 6usize..=11) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let specs: Vec<ShipSpec> = [3usize, 2, 2, 1, 1]
            .iter()
            .map(|&len| ShipSpec::random(len, &mut rng).unwrap())
            .collect();
        let config = PlacementConfig::new(grid_size);
        if let Ok(fleet) = place(&specs, &config, &mut rng) {
            prop_assert_eq!(fleet.len(), specs.len());
            assert_valid_layout(&fleet, grid_size);
        }
    }
}
