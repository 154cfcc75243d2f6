use seabattle::{BitBoard, BitBoardError, ShotMask};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u16>::try_new(4).is_ok());
    assert_eq!(
        BitBoard::<u16>::try_new(5).unwrap_err(),
        BitBoardError::SizeTooLarge {
            size: 5,
            capacity: 16
        }
    );
    assert!(ShotMask::try_new(11).is_ok());
    assert!(ShotMask::try_new(12).is_err());
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16>::try_new(4).unwrap();
    assert!(bb.is_empty());

    bb.set(1, 2).unwrap();
    assert!(bb.get(1, 2).unwrap());
    assert!(!bb.get(2, 1).unwrap());

    bb.clear(1, 2).unwrap();
    assert!(!bb.get(1, 2).unwrap());

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { x: 4, y: 0 }
    );
}

#[test]
fn test_iterators_split_the_board() {
    let mut bb = ShotMask::try_new(3).unwrap();
    bb.set(0, 1).unwrap();
    bb.set(2, 2).unwrap();
    assert_eq!(bb.iter_set().collect::<Vec<_>>(), vec![(0, 1), (2, 2)]);
    assert_eq!(bb.iter_unset().count(), 7);
    assert!(!bb.iter_unset().any(|c| c == (0, 1)));
}

#[test]
fn test_full_board_at_capacity() {
    // 4x4 fills every bit of a u16
    let mut bb = BitBoard::<u16>::try_new(4).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            bb.set(x, y).unwrap();
        }
    }
    assert!(bb.is_full());
    assert!((!bb).is_empty());

    let mut shots = ShotMask::try_new(11).unwrap();
    shots.set(10, 10).unwrap();
    assert_eq!((!shots).count_ones(), 120);
    let inverted = !shots;
    assert!((inverted | shots).is_full());
    assert!((inverted & shots).is_empty());
}
