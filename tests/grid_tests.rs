use battleships::{
    AttackOutcome, Grid, GridError, Orientation, ShipName, TileView, FLEET, GRID_SIZE,
};

#[test]
fn test_place_ship_marks_tiles() {
    let mut grid = Grid::new();
    grid.try_place_ship(ShipName::Battleship, 4, 3, Orientation::Vertical)
        .unwrap();

    for r in 4..8 {
        assert_eq!(grid.tile(r, 3).unwrap().ship(), Some(ShipName::Battleship));
        assert_eq!(grid.view(r, 3), Some(TileView::Ship));
    }
    assert_eq!(grid.tile(8, 3).unwrap().ship(), None);

    let ship = grid.ship(ShipName::Battleship).unwrap();
    assert!(ship.is_deployed());
    assert_eq!(ship.tiles(), &[(4, 3), (5, 3), (6, 3), (7, 3)]);
    assert_eq!(ship.anchor(), Some((4, 3, Orientation::Vertical)));
    assert!(!grid.all_deployed());
}

#[test]
fn test_place_out_of_bounds_leaves_grid_untouched() {
    let mut grid = Grid::new();
    let err = grid
        .try_place_ship(ShipName::AircraftCarrier, 0, GRID_SIZE - 4, Orientation::Horizontal)
        .unwrap_err();
    assert!(matches!(err, GridError::OutOfBounds { .. }));
    assert!(!grid.ship(ShipName::AircraftCarrier).unwrap().is_deployed());
    assert!(grid.occupied().is_empty());

    // fits exactly against the edge
    grid.try_place_ship(ShipName::AircraftCarrier, GRID_SIZE - 5, 0, Orientation::Vertical)
        .unwrap();
    assert_eq!(grid.occupied().count_ones(), 5);
}

#[test]
fn test_place_overlap_rejected() {
    let mut grid = Grid::new();
    grid.try_place_ship(ShipName::Destroyer, 2, 2, Orientation::Horizontal)
        .unwrap();
    let err = grid
        .try_place_ship(ShipName::Submarine, 1, 3, Orientation::Vertical)
        .unwrap_err();
    assert_eq!(
        err,
        GridError::Overlap {
            row: 2,
            col: 3,
            ship: ShipName::Destroyer
        }
    );
    assert!(!grid.ship(ShipName::Submarine).unwrap().is_deployed());
    assert_eq!(grid.tile(1, 3).unwrap().ship(), None);
}

#[test]
fn test_move_ship_clears_old_tiles() {
    let mut grid = Grid::new();
    grid.try_place_ship(ShipName::Destroyer, 2, 2, Orientation::Horizontal)
        .unwrap();
    // shift by one onto its own tiles
    grid.try_place_ship(ShipName::Destroyer, 2, 3, Orientation::Horizontal)
        .unwrap();
    assert_eq!(grid.tile(2, 2).unwrap().ship(), None);
    for c in 3..6 {
        assert_eq!(grid.tile(2, c).unwrap().ship(), Some(ShipName::Destroyer));
    }
    assert_eq!(grid.occupied().count_ones(), 3);

    // a failed move keeps the previous placement
    assert!(grid
        .try_place_ship(ShipName::Destroyer, 9, 9, Orientation::Vertical)
        .is_err());
    assert_eq!(
        grid.ship(ShipName::Destroyer).unwrap().anchor(),
        Some((2, 3, Orientation::Horizontal))
    );
}

#[test]
fn test_destroyer_scenario() {
    let mut grid = Grid::new();
    grid.try_place_ship(ShipName::Destroyer, 2, 2, Orientation::Horizontal)
        .unwrap();

    let r = grid.hit_tile(2, 2).unwrap();
    assert_eq!(r.outcome(), AttackOutcome::Hit);
    assert_eq!(r.ship(), Some(ShipName::Destroyer));
    assert_eq!(grid.hit_tile(2, 3).unwrap().outcome(), AttackOutcome::Hit);
    let r = grid.hit_tile(2, 4).unwrap();
    assert_eq!(r.outcome(), AttackOutcome::Destroyed);
    assert_eq!(r.to_string(), "destroyed the enemy's Destroyer");
    assert!(grid.ship(ShipName::Destroyer).unwrap().is_destroyed());
    assert_eq!(grid.ships_killed(), 1);

    let r = grid.hit_tile(2, 4).unwrap();
    assert_eq!(r.outcome(), AttackOutcome::AlreadyShot);
    assert_eq!(r.ship(), None);
    assert_eq!(r.to_string(), "have already attacked [2,4]!");
    assert_eq!(grid.ships_killed(), 1);
}

#[test]
fn test_miss_and_tile_views() {
    let mut grid = Grid::new();
    grid.try_place_ship(ShipName::Tug, 0, 0, Orientation::Horizontal)
        .unwrap();

    let r = grid.hit_tile(5, 5).unwrap();
    assert_eq!(r.outcome(), AttackOutcome::Miss);
    assert_eq!(r.to_string(), "missed");
    assert_eq!(grid.view(5, 5), Some(TileView::Miss));
    assert_eq!(grid.view(6, 6), Some(TileView::Sea));
    assert_eq!(grid.view(0, 0), Some(TileView::Ship));

    grid.hit_tile(0, 0).unwrap();
    assert_eq!(grid.view(0, 0), Some(TileView::Hit));
}

#[test]
fn test_last_ship_reports_game_over() {
    let mut grid = Grid::new();
    for (row, name) in FLEET.iter().enumerate() {
        grid.try_place_ship(*name, row * 2, 0, Orientation::Horizontal)
            .unwrap();
    }
    assert!(grid.all_deployed());

    let mut last = None;
    for (row, name) in FLEET.iter().enumerate() {
        for col in 0..name.size() {
            last = Some(grid.hit_tile(row * 2, col).unwrap());
            if *name != ShipName::AircraftCarrier && col + 1 == name.size() {
                assert_eq!(last.unwrap().outcome(), AttackOutcome::Destroyed);
            }
        }
    }
    let last = last.unwrap();
    assert_eq!(last.outcome(), AttackOutcome::GameOver);
    assert_eq!(last.ship(), Some(ShipName::AircraftCarrier));
    assert!(grid.all_destroyed());
}

#[test]
fn test_undeployed_ships_prevent_game_over() {
    let mut grid = Grid::new();
    grid.try_place_ship(ShipName::Tug, 3, 3, Orientation::Vertical)
        .unwrap();
    assert_eq!(grid.hit_tile(3, 3).unwrap().outcome(), AttackOutcome::Destroyed);
}

#[test]
fn test_shot_off_grid_is_an_error() {
    let mut grid = Grid::new();
    assert_eq!(
        grid.hit_tile(GRID_SIZE, 0).unwrap_err(),
        GridError::OutOfBounds {
            row: GRID_SIZE,
            col: 0
        }
    );
    assert!(grid.shots().is_empty());
}

#[test]
fn test_enemy_view_hides_ships() {
    let mut grid = Grid::new();
    grid.try_place_ship(ShipName::Submarine, 1, 1, Orientation::Horizontal)
        .unwrap();
    grid.hit_tile(1, 1).unwrap();
    grid.hit_tile(7, 7).unwrap();

    let view = grid.enemy_view();
    assert_eq!(view.view(1, 2), Some(TileView::Sea));
    assert_eq!(view.view(1, 1), Some(TileView::Hit));
    assert_eq!(view.view(7, 7), Some(TileView::Miss));
    assert!(view.is_shot(1, 1));
    assert!(!view.is_shot(1, 2));
    assert!(view.is_shot(GRID_SIZE, 0));
    assert_eq!(view.hits().iter_set_bits().collect::<Vec<_>>(), vec![(1, 1)]);
    assert_eq!(view.misses().iter_set_bits().collect::<Vec<_>>(), vec![(7, 7)]);
    assert_eq!(view.unshot().count_ones(), GRID_SIZE * GRID_SIZE - 2);
}
