use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    collides, drift, drift_all, place_with_retries, standard_fleet, BoardError, DriftOutcome,
    Orientation, PlacementConfig, Position, Ship, ShipSpec,
};

fn ship(len: usize, orientation: Orientation, x: usize, y: usize) -> Ship {
    Ship::placed(ShipSpec::new(len, orientation).unwrap(), Position::new(x, y))
}

#[test]
fn test_only_free_direction_is_taken() {
    // Backward would leave the grid, forward is open.
    for seed in 0..16 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fleet = vec![ship(2, Orientation::Horizontal, 0, 1)];
        let outcome = drift(0, &mut fleet, 3, &mut rng).unwrap();
        assert_eq!(
            outcome,
            DriftOutcome::Moved {
                from: Position::new(0, 1),
                to: Position::new(1, 1)
            }
        );
        assert_eq!(fleet[0].anchor(), Some(Position::new(1, 1)));
    }
}

#[test]
fn test_boxed_in_ship_stays() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut fleet = vec![ship(1, Orientation::Vertical, 0, 0)];
    assert_eq!(
        drift(0, &mut fleet, 1, &mut rng).unwrap(),
        DriftOutcome::Blocked
    );
    assert_eq!(fleet[0].anchor(), Some(Position::new(0, 0)));
}

#[test]
fn test_neighbour_blocks_and_order_matters() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut fleet = vec![
        ship(1, Orientation::Horizontal, 0, 0),
        ship(1, Orientation::Horizontal, 2, 0),
    ];
    let outcomes = drift_all(&mut fleet, 5, &mut rng).unwrap();
    assert_eq!(outcomes[0], DriftOutcome::Blocked);
    assert_eq!(
        outcomes[1],
        DriftOutcome::Moved {
            from: Position::new(2, 0),
            to: Position::new(3, 0)
        }
    );
}

#[test]
fn test_hit_ship_never_moves() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut fleet = vec![ship(3, Orientation::Vertical, 4, 4)];
    fleet[0].hit(Position::new(4, 5));
    for _ in 0..10 {
        assert_eq!(
            drift(0, &mut fleet, 10, &mut rng).unwrap(),
            DriftOutcome::Immobile
        );
    }
    assert_eq!(fleet[0].anchor(), Some(Position::new(4, 4)));
}

#[test]
fn test_drift_errors() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut fleet = vec![Ship::new(ShipSpec::new(2, Orientation::Vertical).unwrap())];
    assert_eq!(
        drift(0, &mut fleet, 10, &mut rng).unwrap_err(),
        BoardError::ShipNotPlaced(0)
    );
    assert_eq!(
        drift(3, &mut fleet, 10, &mut rng).unwrap_err(),
        BoardError::InvalidIndex(3)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn drift_keeps_fleet_valid(seed in any::<u64>(), steps in 1usize..6) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = PlacementConfig::default();
        let specs = standard_fleet(&mut rng);
        let mut fleet = place_with_retries(&specs, &config, 16, &mut rng).unwrap();

        for _ in 0..steps {
            let before = fleet.clone();
            let outcomes = drift_all(&mut fleet, config.grid_size, &mut rng).unwrap();
            prop_assert_eq!(outcomes.len(), fleet.len());

            for ((old, new), outcome) in before.iter().zip(fleet.iter()).zip(outcomes.iter()) {
                prop_assert_eq!(old.spec(), new.spec());
                let (a, b) = (old.anchor().unwrap(), new.anchor().unwrap());
                match outcome {
                    DriftOutcome::Moved { from, to } => {
                        prop_assert_eq!(*from, a);
                        prop_assert_eq!(*to, b);
                        let (dx, dy) = (a.x.abs_diff(b.x), a.y.abs_diff(b.y));
                        match new.orientation() {
                            Orientation::Horizontal => {
                                prop_assert_eq!((dx, dy), (1, 0));
                            }
                            Orientation::Vertical => {
                                prop_assert_eq!((dx, dy), (0, 1));
                            }
                        }
                    }
                    DriftOutcome::Blocked | DriftOutcome::Immobile => {
                        prop_assert_eq!(a, b);
                    }
                }
            }

            for (i, s) in fleet.iter().enumerate() {
                prop_assert!(!s.is_out_of_bounds(config.grid_size));
                for other in fleet.iter().skip(i + 1) {
                    prop_assert!(!collides(s, other));
                }
            }
        }
    }
}
