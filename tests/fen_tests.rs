use citadel::error::ParseError;
use citadel::position::{Army, PieceKind, Position};
use citadel::square::Square;

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn start_position_round_trips() {
    let position = Position::from_fen(START).unwrap();
    assert_eq!(position.to_fen(true), START);
    assert_eq!(position.active_army(), Army::White);
}

#[test]
fn canonical_fens_round_trip_byte_for_byte() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "r3k2r/8/8/1Q6/8/8/8/4K3 b kq - 0 1",
        "4k3/6q1/8/8/8/8/8/R3K2R w KQ - 0 1",
        "8/8/5K2/3P3k/2P5/8/6Q1/8 w - - 12 68",
        "4k3/8/8/8/8/1R6/8/4K3 b - - 0 40",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ];
    for fen in fens {
        let position = Position::from_fen(fen).unwrap();
        assert_eq!(position.to_fen(true), fen, "round trip failed for {fen}");
    }
}

#[test]
fn partial_castle_rights_round_trip() {
    for rights in ["KQkq", "KQ", "kq", "K", "Q", "k", "q", "-"] {
        let fen = format!("r3k2r/8/8/8/8/8/8/R3K2R w {rights} - 3 11");
        let position = Position::from_fen(&fen).unwrap();
        assert_eq!(position.to_fen(true), fen);
    }
}

#[test]
fn four_field_fen_defaults_the_clocks() {
    let position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
    assert_eq!(position.half_move_clock(), 0);
    assert_eq!(position.to_fen(true), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(position.to_fen(false), "4k3/8/8/8/8/8/8/4K3 w - -");
}

#[test]
fn en_passant_field_is_parsed_and_emitted() {
    let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
    let position = Position::from_fen(fen).unwrap();
    assert_eq!(position.en_passant_target(), Square::new(3, 5));
    assert_eq!(position.to_fen(true), fen);

    let without = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(!without.en_passant_target().is_valid());
}

#[test]
fn chess960_fens_round_trip() {
    // Shredder-style file letters and standard letters mixed.
    let fens = [
        "qrknbbrn/pppppppp/8/8/8/8/PPPPPPPP/QRKNBBRN w KQkq - 0 1",
        "rn2k1r1/ppp1pp1p/3p2p1/5bn1/P7/2N2B2/1PPPPP2/2BNK1RR w Gkq - 4 11",
        "qrkr4/ppp1bppb/4pnnp/8/2PP4/2NB1P2/PP1R2PP/QRK1N1B1 b Qkq - 0 10",
        "bq4kr/p3bpp1/3ppn1p/1P1n3P/P2P4/2N4R/1P3PP1/B1Q1NBK1 b k - 0 13",
        "2rkqr1n/Qp1p2pp/8/4bp2/2bB4/8/PP2P1PP/N1RK1R1N w KQkq - 0 10",
        "1k1q1r1b/1p1n3p/r1np2p1/p1p1P3/2P2Pb1/P2N1N2/1PQ2B1P/RK2R2B w Qk - 0 16",
    ];
    for fen in fens {
        let position = Position::from_fen(fen).unwrap();
        assert_eq!(position.to_fen(true), fen, "round trip failed for {fen}");
    }
}

#[test]
fn chess960_castling_letters_record_rook_files() {
    let position =
        Position::from_fen("rn2k1r1/ppp1pp1p/3p2p1/5bn1/P7/2N2B2/1PPPPP2/2BNK1RR w Gkq - 4 11")
            .unwrap();
    // 'G' names the g-file rook even though h1 also holds a rook.
    assert_eq!(position.file_of_kings_rook(), 6);
    assert_eq!(position.file_of_queens_rook(), 0);
}

#[test]
fn parse_rejects_too_few_fields() {
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w -"),
        Err(ParseError::NotEnoughFields(3))
    );
}

#[test]
fn parse_rejects_wrong_rank_count() {
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(ParseError::BadRankCount(7))
    );
}

#[test]
fn parse_rejects_unknown_glyphs() {
    assert_eq!(
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1"),
        Err(ParseError::UnknownGlyph('X'))
    );
}

#[test]
fn parse_rejects_missing_kings() {
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(ParseError::MissingKing(Army::Black))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1"),
        Err(ParseError::MissingKing(Army::White))
    );
}

#[test]
fn parse_rejects_overlong_ranks() {
    assert!(matches!(
        Position::from_fen("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(ParseError::RankOverflow(_))
    ));
}

#[test]
fn parse_rejects_bad_en_passant_square() {
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - e9 0 1"),
        Err(ParseError::BadSquare(_))
    ));
}

#[test]
fn failed_set_fen_leaves_the_position_empty() {
    let mut position = Position::default();
    assert!(position.set_fen("garbage").is_err());
    assert!(position.army_board(Army::White).is_empty());
    assert!(position.army_board(Army::Black).is_empty());
    assert!(position.board(PieceKind::Pawn).is_empty());
    assert_eq!(position.active_army(), Army::White);
}

#[test]
fn fullmove_number_maps_to_half_move_plies() {
    let position =
        Position::from_fen("bq4kr/p3bpp1/3ppn1p/1P1n3P/P2P4/2N4R/1P3PP1/B1Q1NBK1 b k - 0 13")
            .unwrap();
    assert_eq!(position.half_move_number(), 26);
    assert!(position.to_fen(true).ends_with("0 13"));
}
