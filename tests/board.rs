use reversi_core::{Address, Board, Color, ReversiError};

/// Plays first-legal-move for both sides until neither can move.
fn play_out(board: &mut Board, mut color: Color) -> usize {
    let mut placed = 0;
    let mut passes = 0;

    while passes < 2 {
        match board.legal_moves(color).first() {
            Some(&address) => {
                board.put(color, address).unwrap();
                placed += 1;
                passes = 0;

                let (black, white) = board.count();
                assert_eq!(black as usize + white as usize, placed + 4);
                assert!(black as usize + white as usize <= 64);
            }
            None => passes += 1,
        }
        color = color.reversed();
    }

    placed
}

#[test]
fn stone_total_tracks_successful_puts() {
    let mut board = Board::new().unwrap();

    let placed = play_out(&mut board, Color::Black);

    assert!(placed > 0);
    assert_eq!(board.count_black() + board.count_white(), placed + 4);
    assert!(board.legal_moves(Color::Black).is_empty());
    assert!(board.legal_moves(Color::White).is_empty());
}

#[test]
fn rejected_puts_do_not_count() {
    let mut board = Board::new().unwrap();

    assert!(board.put(Color::Black, Address::new(5, 5)).is_err());
    assert!(board.put(Color::Black, Address::new(3, 3)).is_err());
    assert!(board.put(Color::Black, Address::new(-1, 9)).is_err());
    board.put(Color::Black, Address::new(4, 2)).unwrap();

    assert_eq!(board.count_black() + board.count_white(), 5);
    assert_eq!(board.count(), (4, 1));
}

#[test]
fn white_opening_capture() {
    let mut board = Board::new().unwrap();

    board.put(Color::White, Address::new(2, 3)).unwrap();

    assert_eq!(board.count_white(), 4);
    assert_eq!(board.count_black(), 1);
    assert_eq!(
        board.put(Color::White, Address::new(2, 3)),
        Err(ReversiError::Occupied(Address::new(2, 3)))
    );
}

#[test]
fn flips_previews_put_exactly() {
    let board = Board::new().unwrap();

    for address in board.legal_moves(Color::Black) {
        let preview = board.flips(Color::Black, address).unwrap();
        let mut after = board.clone();
        after.put(Color::Black, address).unwrap();

        for flipped in &preview {
            assert!(after.cell(*flipped).unwrap().is_black());
        }
        assert_eq!(after.count_black(), 2 + 1 + preview.len());
    }
}

#[test]
fn errors_render_with_context() {
    let mut board = Board::new().unwrap();

    let err = board.put(Color::White, Address::new(0, 0)).unwrap_err();
    assert_eq!(err.to_string(), "\"x: 0, y: 0\" cannot reverse opponent's stone");

    let err = board.put(Color::White, Address::new(0, 8)).unwrap_err();
    assert_eq!(err.to_string(), "failed to put: \"x: 0, y: 8\" is invalid as address");
}
