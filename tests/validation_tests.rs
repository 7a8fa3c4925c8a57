//! Placement legality as seen through the engine.
//!
//! Every rejection is paired with an atomicity check: the snapshot after a
//! failed move must equal the snapshot before it.

use wordfield::{
    Board, Coordinate, Game, GameBuilder, MoveError, MoveRequest, Placements, Player, Tile,
    TilePlacement, WordList, CENTER,
};

fn lexicon() -> WordList {
    WordList::from_words(["CAT", "CATS", "AT", "TO"])
}

/// Ada to move holding CATSDOG, over a configurable board.
fn game_with_board(board: Board) -> Game {
    let mut snapshot = GameBuilder::new()
        .player("ada")
        .player("grace")
        .seed(5)
        .build()
        .snapshot();
    snapshot.board = board;
    snapshot.players = vec![
        Player::with_hand(
            "ada",
            ['C', 'A', 'T', 'S', 'D', 'O', 'G']
                .iter()
                .map(|&c| Tile::new(c))
                .collect(),
        ),
        Player::with_hand(
            "grace",
            ['E', 'E', 'E', 'E', 'E', 'E', 'E']
                .iter()
                .map(|&c| Tile::new(c))
                .collect(),
        ),
    ];
    snapshot.current_player = 0;
    Game::restore(snapshot)
}

fn place(spots: &[(usize, usize, char)]) -> MoveRequest {
    let placements: Placements = spots
        .iter()
        .map(|&(row, col, letter)| {
            TilePlacement::new(Coordinate::new(row, col), Tile::new(letter))
        })
        .collect();
    MoveRequest::Place { placements }
}

fn assert_rejected(game: &mut Game, request: MoveRequest, expected: MoveError) {
    let before = game.snapshot();
    let err = game.apply_turn(request, &lexicon()).unwrap_err();
    assert_eq!(err, expected);
    assert_eq!(game.snapshot(), before, "rejected move must not mutate");
}

#[test]
fn test_out_of_bounds_placement() {
    let mut game = game_with_board(Board::new());
    let far = Coordinate::new(7, 15);
    assert_rejected(
        &mut game,
        MoveRequest::Place {
            placements: [TilePlacement::new(far, Tile::new('C'))].into_iter().collect(),
        },
        MoveError::InvalidSpace(far),
    );
}

#[test]
fn test_occupied_square() {
    let mut board = Board::new();
    board.place(CENTER, Tile::new('X')).unwrap();
    let mut game = game_with_board(board);
    assert_rejected(
        &mut game,
        place(&[(7, 7, 'C')]),
        MoveError::SpaceOccupied(CENTER),
    );
}

#[test]
fn test_diagonal_placement() {
    let mut game = game_with_board(Board::new());
    assert_rejected(
        &mut game,
        place(&[(7, 7, 'C'), (8, 8, 'A')]),
        MoveError::InvalidPlacement,
    );
}

#[test]
fn test_repeated_placement() {
    let mut game = game_with_board(Board::new());
    assert_rejected(
        &mut game,
        place(&[(7, 7, 'C'), (7, 7, 'A')]),
        MoveError::RepeatedPlacement(CENTER),
    );
}

#[test]
fn test_disconnected_word() {
    let mut game = game_with_board(Board::new());
    assert_rejected(
        &mut game,
        place(&[(7, 7, 'C'), (7, 9, 'T')]),
        MoveError::WordDisconnected,
    );
}

#[test]
fn test_opening_away_from_center() {
    let mut game = game_with_board(Board::new());
    assert_rejected(
        &mut game,
        place(&[(0, 0, 'C'), (0, 1, 'A'), (0, 2, 'T')]),
        MoveError::InvalidStart,
    );
}

#[test]
fn test_center_rule_survives_an_opening_swap() {
    // A swap on turn one does not waive the center requirement: the board
    // is still bare, so the first placement must cover the center.
    let mut game = game_with_board(Board::new());
    game.apply_turn(
        MoveRequest::Swap {
            tiles: vec![Tile::new('D')],
        },
        &lexicon(),
    )
    .unwrap();

    // Back to ada.
    let tile = game.current_player().hand()[0];
    game.apply_turn(MoveRequest::Swap { tiles: vec![tile] }, &lexicon())
        .unwrap();

    assert_rejected(
        &mut game,
        place(&[(0, 0, 'C'), (0, 1, 'A'), (0, 2, 'T')]),
        MoveError::InvalidStart,
    );
}

#[test]
fn test_isolated_tile_forms_no_words() {
    let mut board = Board::new();
    board.place(Coordinate::new(0, 0), Tile::new('Z')).unwrap();
    let mut game = game_with_board(board);
    assert_rejected(
        &mut game,
        place(&[(10, 10, 'C')]),
        MoveError::NoValidWordsFound,
    );
}

#[test]
fn test_dictionary_rejection_lists_failures_and_commits_nothing() {
    let mut game = game_with_board(Board::new());
    // TAC spans the center but is not a word; the hand must keep all
    // seven tiles afterwards.
    assert_rejected(
        &mut game,
        place(&[(7, 6, 'T'), (7, 7, 'A'), (7, 8, 'C')]),
        MoveError::InvalidWords(vec!["TAC".to_string()]),
    );
    assert_eq!(game.current_player().hand().len(), 7);
    assert!(game.board().is_untouched());
}

#[test]
fn test_cross_word_failure_rejects_whole_move() {
    // CATS is valid, but the cross word SX through the new S is not: the
    // whole move fails and nothing commits.
    let mut board = Board::new();
    for (col, letter) in [(6, 'C'), (7, 'A'), (8, 'T')] {
        board
            .place(Coordinate::new(7, col), Tile::new(letter))
            .unwrap();
    }
    board.place(Coordinate::new(8, 9), Tile::new('X')).unwrap();
    let mut game = game_with_board(board);

    assert_rejected(
        &mut game,
        place(&[(7, 9, 'S')]),
        MoveError::InvalidWords(vec!["SX".to_string()]),
    );
}
