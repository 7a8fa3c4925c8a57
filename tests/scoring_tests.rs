//! Scoring behavior: premiums, one-time consumption, cross words, blanks.

use wordfield::{
    Board, Coordinate, Game, GameBuilder, MoveRequest, Placements, Player, Tile, TilePlacement,
    WordList,
};

fn game_with(board: Board, hand: Vec<Tile>) -> Game {
    let mut snapshot = GameBuilder::new()
        .player("ada")
        .player("grace")
        .seed(13)
        .build()
        .snapshot();
    snapshot.board = board;
    snapshot.players = vec![
        Player::with_hand("ada", hand),
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

fn tiles(letters: &[char]) -> Vec<Tile> {
    letters.iter().map(|&c| Tile::new(c)).collect()
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

#[test]
fn test_triple_word_multiplies_whole_word() {
    // Face values (1, 1, 3, 1, 1) across the triple-word square at (0, 7),
    // no letter premiums under the word: (1+1+3+1+1) * 3 = 21.
    let lexicon = WordList::from_words(["AABAA"]);
    let mut board = Board::new();
    // A far-off tile so this is not the opening move.
    board.place(Coordinate::new(14, 0), Tile::new('Z')).unwrap();
    let mut game = game_with(board, tiles(&['A', 'A', 'B', 'A', 'A', 'E', 'E']));

    let outcome = game
        .apply_turn(
            place(&[
                (0, 4, 'A'),
                (0, 5, 'A'),
                (0, 6, 'B'),
                (0, 7, 'A'),
                (0, 8, 'A'),
            ]),
            &lexicon,
        )
        .unwrap();

    assert_eq!(outcome.words, vec!["AABAA".to_string()]);
    assert_eq!(outcome.points, 21);
}

#[test]
fn test_premium_consumed_on_first_use_only() {
    let lexicon = WordList::from_words(["CAT", "CATS"]);
    let mut game = game_with(Board::new(), tiles(&['C', 'A', 'T', 'E', 'E', 'E', 'E']));

    // Opening CAT over the center double-word square: 5 * 2.
    let outcome = game
        .apply_turn(place(&[(7, 6, 'C'), (7, 7, 'A'), (7, 8, 'T')]), &lexicon)
        .unwrap();
    assert_eq!(outcome.points, 10);
    assert!(game
        .board()
        .square(Coordinate::new(7, 7))
        .multiplier_consumed());

    // Grace holds an S by fixture; extend to CATS. The center premium is
    // spent, so every old square contributes face value only.
    let mut snapshot = game.snapshot();
    snapshot.players[1] = Player::with_hand("grace", tiles(&['S', 'E', 'E', 'E', 'E', 'E', 'E']));
    let mut game = Game::restore(snapshot);

    let outcome = game
        .apply_turn(place(&[(7, 9, 'S')]), &lexicon)
        .unwrap();
    assert_eq!(outcome.words, vec!["CATS".to_string()]);
    assert_eq!(outcome.points, 3 + 1 + 1 + 1);
}

#[test]
fn test_cross_words_score_alongside_main_word() {
    let lexicon = WordList::from_words(["CAT", "TO", "AT"]);
    let mut board = Board::new();
    for (col, letter) in [(6, 'C'), (7, 'A'), (8, 'T')] {
        let at = Coordinate::new(7, col);
        board.place(at, Tile::new(letter)).unwrap();
        board.mark_used(at);
    }
    let mut game = game_with(board, tiles(&['T', 'O', 'E', 'E', 'E', 'E', 'E']));

    let outcome = game
        .apply_turn(place(&[(8, 7, 'T'), (8, 8, 'O')]), &lexicon)
        .unwrap();

    // Main word TO on row 8, crosses AT and TO through the new tiles.
    assert_eq!(
        outcome.words,
        vec!["TO".to_string(), "AT".to_string(), "TO".to_string()]
    );
    // TO: 1 + 2 (double letter at (8,8)); AT: 1 + 1; TO down: 1 + 2.
    assert_eq!(outcome.points, 3 + 2 + 3);
}

#[test]
fn test_single_tile_next_to_word_forms_only_the_main_line() {
    // One tile extending a horizontal word with nothing above or below
    // scores exactly one word.
    let lexicon = WordList::from_words(["CAT", "CATS"]);
    let mut board = Board::new();
    for (col, letter) in [(6, 'C'), (7, 'A'), (8, 'T')] {
        let at = Coordinate::new(7, col);
        board.place(at, Tile::new(letter)).unwrap();
        board.mark_used(at);
    }
    let mut game = game_with(board, tiles(&['S', 'E', 'E', 'E', 'E', 'E', 'E']));

    let outcome = game
        .apply_turn(place(&[(7, 9, 'S')]), &lexicon)
        .unwrap();
    assert_eq!(outcome.words, vec!["CATS".to_string()]);
}

#[test]
fn test_blank_scores_zero_even_on_premiums() {
    let lexicon = WordList::from_words(["CAT", "CATS"]);
    let mut board = Board::new();
    for (col, letter) in [(6, 'C'), (7, 'A'), (8, 'T')] {
        let at = Coordinate::new(7, col);
        board.place(at, Tile::new(letter)).unwrap();
        board.mark_used(at);
    }
    let mut game = game_with(board, vec![Tile::new('_'), Tile::new('E')]);

    let placements: Placements = [TilePlacement::new(
        Coordinate::new(7, 9),
        Tile::blank_as('S'),
    )]
    .into_iter()
    .collect();
    let outcome = game
        .apply_turn(MoveRequest::Place { placements }, &lexicon)
        .unwrap();

    assert_eq!(outcome.words, vec!["CATS".to_string()]);
    // C + A + T at face value, blank S worth nothing.
    assert_eq!(outcome.points, 3 + 1 + 1);
    // The blank sits on the board showing its substitute letter.
    let placed = game.board().tile(Coordinate::new(7, 9)).unwrap();
    assert!(placed.is_blank());
    assert_eq!(placed.letter(), 'S');
}
