use super::*;
use crate::error::MoveError;

#[test]
fn test_player_opponent() {
    assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
    assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
}

#[test]
fn test_player_codes() {
    assert_eq!(PlayerId::One.code(), 1);
    assert_eq!(PlayerId::Two.code(), 2);
    assert_eq!(PlayerId::from_code(1), Some(PlayerId::One));
    assert_eq!(PlayerId::from_code(2), Some(PlayerId::Two));
    assert_eq!(PlayerId::from_code(0), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(PAWN_DIM, 9);
    assert_eq!(GRID_SIZE, 17);
    assert_eq!(MAX_WALLS, 10);
}

#[test]
fn test_pos_parity() {
    assert!(Pos::new(0, 0).is_cell());
    assert!(Pos::new(16, 8).is_cell());
    assert!(Pos::new(1, 0).is_wall_slot());
    assert!(Pos::new(0, 1).is_wall_slot());
    assert!(Pos::new(1, 1).is_connector());
    assert!(!Pos::new(1, 1).is_cell());
    assert!(!Pos::new(2, 2).is_connector());
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 8);
    assert_eq!(pos.offset(2, 0, GRID_SIZE), Some(Pos::new(2, 8)));
    assert_eq!(pos.offset(-2, 0, GRID_SIZE), None);
    assert_eq!(Pos::new(16, 16).offset(0, 2, GRID_SIZE), None);
    assert_eq!(Pos::checked(-1, 0, GRID_SIZE), None);
    assert_eq!(Pos::checked(16, 16, GRID_SIZE), Some(Pos::new(16, 16)));
    assert_eq!(Pos::new(0, 0).distance(Pos::new(4, 2)), 6);
}

#[test]
fn test_wall_segments() {
    let h = Wall::horizontal(3, 5);
    assert_eq!(h.segments(), [Pos::new(3, 4), Pos::new(3, 6)]);
    assert_eq!(h.cells(), [Pos::new(3, 4), Pos::new(3, 5), Pos::new(3, 6)]);

    let v = Wall::vertical(3, 5);
    assert_eq!(v.segments(), [Pos::new(2, 5), Pos::new(4, 5)]);
    assert_eq!(v.orientation.flipped(), Orientation::Horizontal);
}

#[test]
fn test_new_board_layout() {
    let board = Board::new();
    assert_eq!(board.size(), 17);
    assert_eq!(board.pawn_dim(), 9);
    assert_eq!(board.pawn(PlayerId::One), Pos::new(16, 8));
    assert_eq!(board.pawn(PlayerId::Two), Pos::new(0, 8));
    assert_eq!(board.objective_row(PlayerId::One), 0);
    assert_eq!(board.objective_row(PlayerId::Two), 16);
    assert_eq!(board.walls_left(PlayerId::One), 10);
    assert_eq!(board.walls_left(PlayerId::Two), 10);
    assert_eq!(board.get(Pos::new(16, 8)), 1);
    assert_eq!(board.get(Pos::new(0, 8)), 2);
    assert!(board.walls().is_empty());
}

#[test]
fn test_small_board_layout() {
    let board = Board::with_pawn_dim(5);
    assert_eq!(board.size(), 9);
    assert_eq!(board.pawn(PlayerId::One), Pos::new(8, 4));
    assert_eq!(board.pawn(PlayerId::Two), Pos::new(0, 4));

    let board = Board::with_walls(4, 3);
    assert_eq!(board.size(), 7);
    assert_eq!(board.pawn(PlayerId::One), Pos::new(6, 4));
    assert_eq!(board.wall_budget(), 3);
}

#[test]
fn test_place_pawn() {
    let mut board = Board::new();
    board.place_pawn(PlayerId::One, Pos::new(14, 8));
    assert_eq!(board.get(Pos::new(16, 8)), EMPTY);
    assert_eq!(board.get(Pos::new(14, 8)), PlayerId::One.code());
    assert_eq!(board.occupant(Pos::new(14, 8)), Some(PlayerId::One));
    assert_eq!(board.occupant(Pos::new(16, 8)), None);
}

#[test]
fn test_place_wall() {
    let mut board = Board::new();
    board.place_wall(Wall::horizontal(1, 1), PlayerId::Two);
    assert_eq!(board.get(Pos::new(1, 0)), WALL_SEGMENT);
    assert_eq!(board.get(Pos::new(1, 1)), HORIZONTAL_CONNECTOR);
    assert_eq!(board.get(Pos::new(1, 2)), WALL_SEGMENT);
    assert_eq!(board.walls_left(PlayerId::Two), 9);
    assert_eq!(board.walls_placed(PlayerId::Two), 1);
    assert_eq!(board.walls_left(PlayerId::One), 10);

    board.place_wall(Wall::vertical(5, 7), PlayerId::One);
    assert_eq!(board.get(Pos::new(5, 7)), VERTICAL_CONNECTOR);
    assert_eq!(board.walls(), vec![Wall::horizontal(1, 1), Wall::vertical(5, 7)]);
}

#[test]
fn test_passage() {
    let mut board = Board::new();
    let from = Pos::new(16, 8);
    let up = Pos::new(14, 8);
    assert!(board.is_passage_open(from, up));
    board.place_wall(Wall::horizontal(15, 9), PlayerId::Two);
    assert!(!board.is_passage_open(from, up));
    assert!(!board.is_passage_open(up, from));
}

#[test]
fn test_apply_move_commits() {
    let mut board = Board::new();
    assert!(board.apply_move(Move::Pawn(Pos::new(14, 8)), PlayerId::One).is_ok());
    assert_eq!(board.pawn(PlayerId::One), Pos::new(14, 8));

    assert!(board.apply_move(Move::Wall(Wall::vertical(7, 7)), PlayerId::Two).is_ok());
    assert_eq!(board.walls_left(PlayerId::Two), 9);
    assert_eq!(
        board.walls_placed(PlayerId::Two) + board.walls_left(PlayerId::Two),
        board.wall_budget()
    );
}

#[test]
fn test_apply_move_rejects_without_mutation() {
    let mut board = Board::new();
    let before = board.clone();

    let far = Move::Pawn(Pos::new(10, 8));
    assert_eq!(
        board.apply_move(far, PlayerId::One),
        Err(MoveError::IllegalPawnMove(Pos::new(10, 8)))
    );
    let edge = Move::Wall(Wall::horizontal(0, 1));
    assert_eq!(
        board.apply_move(edge, PlayerId::One),
        Err(MoveError::InvalidWallAnchor(Wall::horizontal(0, 1)))
    );
    assert_eq!(board, before);
}

#[test]
fn test_move_helpers() {
    let pawn = Move::Pawn(Pos::new(2, 2));
    let wall = Move::Wall(Wall::vertical(1, 1));
    assert!(pawn.is_pawn());
    assert!(wall.is_wall());
    assert_eq!(pawn.target(), Some(Pos::new(2, 2)));
    assert_eq!(wall.target(), None);
}
