use battleships::{BitBoard, BitBoardError, SeaBoard, GRID_SIZE};

fn board<const N: usize>(cells: &[(usize, usize)]) -> BitBoard<u16, N> {
    let mut bb = BitBoard::new();
    for &(r, c) in cells {
        bb.set(r, c).unwrap();
    }
    bb
}

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
    assert!(bb.get(0, 4).is_err());
}

#[test]
fn test_iter_set_bits_row_major() {
    let bb = board::<4>(&[(3, 3), (0, 1), (2, 0)]);
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (2, 0), (3, 3)]);
}

#[test]
fn test_complement_stays_on_board() {
    let empty = SeaBoard::new();
    assert_eq!((!empty).count_ones(), GRID_SIZE * GRID_SIZE);

    let mut corner = SeaBoard::new();
    corner.set(GRID_SIZE - 1, GRID_SIZE - 1).unwrap();
    assert_eq!(corner.iter_set_bits().next(), Some((GRID_SIZE - 1, GRID_SIZE - 1)));
    assert_eq!((!corner).count_ones(), GRID_SIZE * GRID_SIZE - 1);
    assert!(!(!corner).get(GRID_SIZE - 1, GRID_SIZE - 1).unwrap());

    // 3×3 leaves seven spare bits in a u16
    assert_eq!((!board::<3>(&[])).count_ones(), 9);
}

#[test]
fn test_and_with_complement() {
    let shots = board::<4>(&[(0, 0), (1, 1), (2, 2)]);
    let hits = board::<4>(&[(1, 1)]);
    assert_eq!((shots & hits).iter_set_bits().collect::<Vec<_>>(), vec![(1, 1)]);
    assert_eq!(
        (shots & !hits).iter_set_bits().collect::<Vec<_>>(),
        vec![(0, 0), (2, 2)]
    );
}
